//! The paging state machine.
//!
//! [`PagerController`] owns the scroll offset and turns pointer events into
//! drags, release-time snap animations and ownership decisions against a
//! nested scroller. It never renders and never schedules frames on its own:
//! the host forwards input through [`PagerController::on_intercept_request`]
//! and [`PagerController::on_touch`], and pumps
//! [`PagerController::compute_frame`] while a redraw is pending.
//!
//! ```
//! use std::{sync::Arc, time::Duration};
//! use swipe_pager::{
//!     HeightConstraint, Panel, PagerConfig, PagerController, PointerEvent, Px, PxSize,
//!     redraw::NoopRedraw,
//! };
//!
//! let mut pager = PagerController::new(PagerConfig::default(), Arc::new(NoopRedraw))?;
//! pager.set_layout(
//!     PxSize::new(Px::new(1080), Px::new(1920)),
//!     &[Panel::visible(Px::new(600)); 3],
//!     HeightConstraint::Wrap { max: Some(Px::new(1920)) },
//! )?;
//!
//! pager.on_touch(PointerEvent::down(900.0, 500.0));
//! pager.on_touch(PointerEvent::moved(400.0, 500.0));
//! pager.on_touch(PointerEvent::up(300.0, 500.0));
//! while pager.compute_frame(Duration::from_millis(16)) {}
//! assert_eq!(pager.scroll_offset(), Px::new(1080));
//! assert_eq!(pager.current_page(), 1);
//! # Ok::<(), swipe_pager::PagerError>(())
//! ```

use std::{fmt, sync::Arc, time::Duration};

use smallvec::SmallVec;
use tracing::{debug, trace};

use crate::{
    animator::SnapAnimator,
    arbiter::GestureArbiter,
    config::PagerConfig,
    drag::{DragStep, free_drag},
    error::PagerError,
    event::{PointerEvent, PointerEventKind, PointerPosition},
    geometry::{GeometryModel, HeightConstraint, Panel, PagerGeometry, panel_frames},
    px::{Px, PxPosition, PxRect, PxSize},
    redraw::RedrawScheduler,
    slop::TouchSlop,
    snap::{SnapTarget, anchor_page},
    thread_utils::ThreadAffinity,
};

/// Where the pager is in its gesture lifecycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum GestureState {
    /// Nothing is happening.
    #[default]
    Idle,
    /// A pointer is down but has not travelled past the touch slop yet.
    Armed,
    /// Content is following the pointer.
    Dragging,
    /// The snap animation is running.
    Settling,
}

/// Per-sequence drag bookkeeping, created at press and dropped at release.
#[derive(Clone, Copy, Debug)]
struct DragSession {
    down: PointerPosition,
    anchor_page: Option<usize>,
    /// `None` until the first admitted move; the baseline is then the press.
    last_admitted_x: Option<f32>,
    moved: bool,
}

impl DragSession {
    fn baseline(&self) -> f32 {
        self.last_admitted_x.unwrap_or(self.down.x)
    }
}

/// A horizontally paging viewport's gesture and scroll state.
pub struct PagerController {
    config: PagerConfig,
    slop: TouchSlop,
    model: GeometryModel,
    geometry: PagerGeometry,
    viewport: PxSize,
    height: Px,
    frames: SmallVec<[PxRect; 4]>,
    offset: Px,
    state: GestureState,
    session: Option<DragSession>,
    arbiter: GestureArbiter,
    animator: SnapAnimator,
    settle_elapsed: Duration,
    redraw: Arc<dyn RedrawScheduler>,
    affinity: ThreadAffinity,
}

impl fmt::Debug for PagerController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PagerController")
            .field("config", &self.config)
            .field("geometry", &self.geometry)
            .field("offset", &self.offset)
            .field("state", &self.state)
            .field("session", &self.session)
            .finish_non_exhaustive()
    }
}

impl PagerController {
    /// Creates a controller bound to the calling thread.
    ///
    /// The pager has no geometry until [`PagerController::set_layout`] is
    /// called; until then every event is ignored.
    pub fn new(
        config: PagerConfig,
        redraw: Arc<dyn RedrawScheduler>,
    ) -> Result<Self, PagerError> {
        config.validate()?;
        let slop = TouchSlop::new(config.touch_slop);
        Ok(Self {
            slop,
            arbiter: GestureArbiter::new(slop),
            config,
            model: GeometryModel::new(),
            geometry: PagerGeometry::default(),
            viewport: PxSize::ZERO,
            height: Px::ZERO,
            frames: SmallVec::new(),
            offset: Px::ZERO,
            state: GestureState::Idle,
            session: None,
            animator: SnapAnimator::new(),
            settle_elapsed: Duration::ZERO,
            redraw,
            affinity: ThreadAffinity::current(),
        })
    }

    /// The active configuration.
    pub fn config(&self) -> &PagerConfig {
        &self.config
    }

    /// Current horizontal scroll offset. Grows as content moves left.
    pub fn scroll_offset(&self) -> Px {
        self.offset
    }

    /// Current gesture state.
    pub fn gesture_state(&self) -> GestureState {
        self.state
    }

    /// Returns whether the snap animation is running.
    pub fn is_settling(&self) -> bool {
        self.state == GestureState::Settling
    }

    /// Geometry from the last layout pass.
    pub fn geometry(&self) -> &PagerGeometry {
        &self.geometry
    }

    /// Viewport from the last layout pass.
    pub fn viewport(&self) -> PxSize {
        self.viewport
    }

    /// Container height resolved by the last layout pass.
    pub fn height(&self) -> Px {
        self.height
    }

    /// Frames of the visible panels in content coordinates.
    pub fn panel_frames(&self) -> &[PxRect] {
        &self.frames
    }

    /// Runs a layout pass and returns the resolved container height.
    ///
    /// A change of page width keeps the current page in view. With clamping
    /// enabled the offset is pulled back into range afterwards.
    pub fn set_layout(
        &mut self,
        viewport: PxSize,
        panels: &[Panel],
        height: HeightConstraint,
    ) -> Result<Px, PagerError> {
        if viewport.width < Px::ZERO || viewport.height < Px::ZERO {
            return Err(PagerError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }

        let previous = self.geometry;
        let page = self.current_page();
        self.geometry = self.model.layout(viewport.width, panels);
        self.viewport = viewport;
        self.height = self.model.measure_height(height, panels);
        self.frames = panel_frames(&self.geometry, self.height, panels);
        debug!(
            page_width = self.geometry.page_width.raw(),
            page_count = self.geometry.page_count,
            height = self.height.raw(),
            "pager layout"
        );

        let mut offset = self.offset;
        if previous.page_width != self.geometry.page_width && previous.page_width > Px::ZERO {
            self.abort_settle();
            offset = self.geometry.offset_for_page(page as i64);
        }
        if self.config.clamp_enabled {
            offset = self.geometry.drag().clamp_offset(offset);
        }
        self.commit_offset(offset);
        Ok(self.height)
    }

    /// Forces the next layout pass to recount visible panels.
    pub fn invalidate_layout(&mut self) {
        self.model.invalidate();
    }

    /// The page nearest to the current offset.
    pub fn current_page(&self) -> usize {
        let width = self.geometry.page_width;
        if self.geometry.is_empty() {
            return 0;
        }
        let page = (self.offset.to_f32() / width.to_f32()).round();
        let max_page = self.geometry.page_count.saturating_sub(1) as f32;
        if page.is_finite() {
            page.clamp(0.0, max_page) as usize
        } else {
            0
        }
    }

    /// How far the offset sits from [`PagerController::current_page`], as a
    /// fraction of a page in `-0.5..=0.5`.
    pub fn current_page_offset_fraction(&self) -> f32 {
        if self.geometry.is_empty() {
            return 0.0;
        }
        let snapped = self.geometry.offset_for_page(self.current_page() as i64);
        ((self.offset - snapped).to_f32() / self.geometry.page_width.to_f32()).clamp(-0.5, 0.5)
    }

    /// Moves to `page` immediately, cancelling any animation.
    ///
    /// Ignored while a pointer is down; the gesture keeps control of the
    /// offset until it ends.
    pub fn jump_to_page(&mut self, page: usize) {
        if self.geometry.is_empty() || self.pointer_down(page, "jump to page") {
            return;
        }
        self.abort_settle();
        let page = self.geometry.clamp_page(page);
        debug!(page, "jump to page");
        self.commit_offset(self.geometry.offset_for_page(page as i64));
    }

    /// Animates to `page` with the configured duration and easing.
    ///
    /// Ignored while a pointer is down.
    pub fn scroll_to_page(&mut self, page: usize) {
        if self.geometry.is_empty() || self.pointer_down(page, "scroll to page") {
            return;
        }
        self.abort_settle();
        let page = self.geometry.clamp_page(page);
        debug!(page, "scroll to page");
        self.settle_to_page(page as i64);
    }

    /// Stops the snap animation where it is. Safe to call at any time.
    pub fn abort_settle(&mut self) {
        if let Some(frozen) = self.animator.abort() {
            trace!(offset = frozen.x.raw(), "settle aborted");
        }
        if self.state == GestureState::Settling {
            self.state = GestureState::Idle;
        }
    }

    /// Decides whether the pager takes over a sequence that is otherwise
    /// headed for a child.
    ///
    /// Once this returns `true`, route the rest of the sequence to
    /// [`PagerController::on_touch`]. Always `false` when interception is
    /// disabled.
    pub fn on_intercept_request(&mut self, event: PointerEvent) -> bool {
        if !self.config.interception_enabled || self.geometry.is_empty() {
            return false;
        }
        match event.kind {
            PointerEventKind::Down => {
                self.begin_session(event.position);
                false
            }
            PointerEventKind::Move => {
                if self.session.is_none() {
                    self.begin_session(event.position);
                }
                let was_claimed = self.arbiter.is_claimed();
                let claimed = self.arbiter.should_claim(event.position);
                if claimed && !was_claimed {
                    debug!(x = event.position.x, y = event.position.y, "pager claimed gesture");
                    if let Some(session) = self.session.as_mut() {
                        session.last_admitted_x = None;
                    }
                }
                claimed
            }
            PointerEventKind::Up | PointerEventKind::Cancel => {
                if self.arbiter.is_claimed() {
                    return true;
                }
                // The child kept the gesture; return to the anchor page in
                // case the press froze a settle between pages.
                if let Some(session) = self.session.take() {
                    self.release(session, session.down.x);
                }
                self.arbiter.end_sequence();
                false
            }
        }
    }

    /// Handles an event the pager owns. Returns whether it was consumed,
    /// which is always the case once the pager has at least one page.
    pub fn on_touch(&mut self, event: PointerEvent) -> bool {
        if self.geometry.is_empty() {
            if event.ends_sequence() {
                self.session = None;
                self.arbiter.end_sequence();
                self.state = GestureState::Idle;
            }
            return false;
        }

        match event.kind {
            PointerEventKind::Down => self.begin_session(event.position),
            PointerEventKind::Move => self.drag_to(event.position),
            PointerEventKind::Up | PointerEventKind::Cancel => {
                let session = match self.session.take() {
                    Some(session) => session,
                    None => self.synthesize_session(event.position),
                };
                let release_x = match event.kind {
                    PointerEventKind::Up => event.position.x,
                    _ => session.down.x,
                };
                self.release(session, release_x);
                self.arbiter.end_sequence();
            }
        }
        true
    }

    /// Advances the snap animation by `frame_delta` and commits the new
    /// offset. Returns whether another frame is needed.
    pub fn compute_frame(&mut self, frame_delta: Duration) -> bool {
        if self.animator.is_finished() {
            return false;
        }
        self.settle_elapsed = self.settle_elapsed.saturating_add(frame_delta);
        let Some(frame) = self.animator.tick(self.settle_elapsed) else {
            return false;
        };

        let mut offset = frame.position().x;
        if self.config.clamp_enabled {
            offset = self.geometry.drag().clamp_offset(offset);
        }
        trace!(
            offset = offset.raw(),
            elapsed_ms = self.settle_elapsed.as_millis() as u64,
            "settle frame"
        );
        self.commit_offset(offset);

        if frame.is_finished() {
            debug!(offset = offset.raw(), "settle finished");
            self.state = GestureState::Idle;
            false
        } else {
            self.request_redraw();
            true
        }
    }

    fn pointer_down(&self, page: usize, request: &'static str) -> bool {
        if self.session.is_some() {
            debug!(page, request, "ignored while a pointer is down");
            return true;
        }
        false
    }

    fn begin_session(&mut self, position: PointerPosition) {
        self.abort_settle();
        let session = self.synthesize_session(position);
        debug!(
            x = position.x,
            y = position.y,
            anchor_page = ?session.anchor_page,
            "pointer pressed"
        );
        self.session = Some(session);
        self.arbiter.on_press(position);
        self.state = GestureState::Armed;
    }

    fn synthesize_session(&self, position: PointerPosition) -> DragSession {
        DragSession {
            down: position,
            anchor_page: anchor_page(
                self.offset,
                position.x,
                self.geometry.page_width,
                self.geometry.page_count,
            ),
            last_admitted_x: None,
            moved: false,
        }
    }

    fn drag_to(&mut self, position: PointerPosition) {
        if self.session.is_none() {
            self.begin_session(position);
        }
        let Some(session) = self.session.as_mut() else {
            return;
        };

        let dx = position.x - session.baseline();
        if !self.slop.admits(dx) {
            trace!(dx, "move below touch slop");
            return;
        }

        let step = if self.config.clamp_enabled {
            self.geometry.drag().apply(dx, self.offset)
        } else {
            free_drag(dx, self.offset)
        };
        session.last_admitted_x = Some(position.x);
        session.moved = true;
        if !self.animator.is_finished() {
            self.abort_settle();
        }
        self.state = GestureState::Dragging;
        self.apply_drag(dx, step);
    }

    fn apply_drag(&mut self, raw: f32, step: DragStep) {
        trace!(
            raw,
            applied = step.applied.raw(),
            offset = step.offset.raw(),
            "drag"
        );
        self.commit_offset(step.offset);
    }

    fn release(&mut self, session: DragSession, release_x: f32) {
        self.state = GestureState::Idle;
        if !self.config.snap_enabled {
            debug!(moved = session.moved, "released without snapping");
            return;
        }
        let Some(anchor) = session.anchor_page else {
            return;
        };
        // Travel that never cleared the slop does not turn the page.
        let travel = if session.moved {
            release_x - session.down.x
        } else {
            0.0
        };
        let target = SnapTarget::decide(travel, self.geometry.page_width);
        let mut page = target.page_from(anchor);
        if !self.config.clamp_enabled {
            page = page.clamp(0, self.geometry.page_count.saturating_sub(1) as i64);
        }
        debug!(anchor, ?target, page, "pointer released");
        self.settle_to_page(page);
    }

    fn settle_to_page(&mut self, page: i64) {
        let target = self.geometry.offset_for_page(page);
        let finger_delta = (self.offset - target).to_f32();
        let finger_delta = if self.config.clamp_enabled {
            self.geometry.drag().clamp_delta(finger_delta, self.offset)
        } else {
            finger_delta
        };
        let applied = Px::round_from_f32(finger_delta);
        if applied == Px::ZERO {
            self.state = GestureState::Idle;
            return;
        }

        self.animator.start(
            PxPosition::new(self.offset, Px::ZERO),
            PxPosition::new(-applied, Px::ZERO),
            self.config.settle_duration,
            self.config.easing,
        );
        self.settle_elapsed = Duration::ZERO;
        self.state = GestureState::Settling;
        self.request_redraw();
    }

    fn commit_offset(&mut self, offset: Px) {
        if offset == self.offset {
            return;
        }
        self.offset = offset;
        self.request_redraw();
    }

    fn request_redraw(&self) {
        if self.affinity.is_owner() {
            self.redraw.request_redraw();
        } else {
            self.redraw.request_redraw_from_any_thread();
        }
    }
}
