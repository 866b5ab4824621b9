//! Errors reported while configuring or laying out a pager.
//!
//! Pointer handling itself never fails; these only surface from
//! [`PagerController::new`](crate::PagerController::new) and
//! [`PagerController::set_layout`](crate::PagerController::set_layout).

use thiserror::Error;

use crate::px::Px;

/// Errors that can occur while configuring or laying out a pager.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PagerError {
    /// The touch slop must be a finite, non-negative distance.
    #[error("touch slop must be finite and non-negative, got {0}")]
    InvalidTouchSlop(f32),
    /// The viewport reported by the layout collaborator had a negative side.
    #[error("viewport must not be negative, got {width:?}x{height:?}")]
    InvalidViewport {
        /// Reported width.
        width: Px,
        /// Reported height.
        height: Px,
    },
}
