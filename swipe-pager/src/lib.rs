//! swipe-pager is a horizontally paging viewport engine: N panels laid out
//! side by side, each one viewport wide, dragged with a pointer and snapped
//! to a page when the pointer lifts.
//!
//! The crate does not render anything. A host feeds it layout information and
//! pointer events, reads back the scroll offset and panel frames, and ticks
//! the snap animation from its frame loop whenever a redraw was requested.
//!
//! # Driving a pager
//!
//! ```
//! use std::{sync::Arc, time::Duration};
//! use swipe_pager::{
//!     GestureState, HeightConstraint, Panel, PagerConfig, PagerController, PointerEvent, Px,
//!     PxSize, redraw::RedrawSignal,
//! };
//!
//! let redraw = RedrawSignal::new();
//! let mut pager = PagerController::new(PagerConfig::default(), Arc::new(redraw.clone()))?;
//! pager.set_layout(
//!     PxSize::new(Px::new(1000), Px::new(800)),
//!     &[Panel::visible(Px::new(400)); 4],
//!     HeightConstraint::Wrap { max: None },
//! )?;
//!
//! pager.on_touch(PointerEvent::down(700.0, 300.0));
//! pager.on_touch(PointerEvent::moved(100.0, 300.0));
//! assert_eq!(pager.gesture_state(), GestureState::Dragging);
//! pager.on_touch(PointerEvent::up(100.0, 300.0));
//!
//! while redraw.take_pending() {
//!     pager.compute_frame(Duration::from_millis(16));
//! }
//! assert_eq!(pager.current_page(), 1);
//! # Ok::<(), swipe_pager::PagerError>(())
//! ```
//!
//! # Nested scrolling
//!
//! When the pager hosts a vertically scrollable child, offer every event to
//! [`PagerController::on_intercept_request`] first. Events keep going to the
//! child until it returns `true`; from then on the rest of the sequence goes
//! to [`PagerController::on_touch`].
//!
//! # Behaviour presets
//!
//! [`PagerConfig::preset`] reproduces the feature sets of earlier releases:
//! free drag, clamped drag, snapping, and snapping with nested-scroll
//! arbitration (the default).
#![deny(missing_docs, clippy::unwrap_used)]

pub mod animator;
pub mod arbiter;
pub mod config;
mod controller;
pub mod drag;
pub mod easing;
pub mod error;
pub mod event;
pub mod geometry;
pub mod px;
pub mod redraw;
pub mod slop;
pub mod snap;
mod state;
mod thread_utils;


pub use crate::{
    config::{PagerConfig, PagerPreset},
    controller::{GestureState, PagerController},
    easing::Easing,
    error::PagerError,
    event::{PointerEvent, PointerEventKind, PointerPosition},
    geometry::{HeightConstraint, Margins, Panel, PagerGeometry},
    px::{Px, PxPosition, PxRect, PxSize},
    redraw::{NoopRedraw, RedrawScheduler, RedrawSignal},
    state::SharedPager,
};
