//! Instant, edge-clamped drag following.
//!
//! Offsets grow as content moves left: offset `0` shows the first panel and
//! `content_width - viewport_width` shows the last one. A finger moving right
//! (positive delta) therefore *decreases* the offset.

use crate::px::Px;

/// Result of applying one pointer delta.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DragStep {
    /// The pointer delta that was actually honoured, rounded to whole pixels.
    pub applied: Px,
    /// The offset after the step.
    pub offset: Px,
}

/// Converts pointer deltas into scroll offsets without ever letting the outer
/// edges of the first or last panel enter the viewport.
///
/// ```
/// use swipe_pager::{drag::ClampedDrag, px::Px};
///
/// // Three 1080px pages.
/// let drag = ClampedDrag::new(Px::new(3240), Px::new(1080));
/// // Dragging right on the first page goes nowhere.
/// assert_eq!(drag.apply(300.0, Px::ZERO).offset, Px::ZERO);
/// // Dragging left 500px reveals the second page.
/// assert_eq!(drag.apply(-500.0, Px::ZERO).offset, Px::new(500));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClampedDrag {
    content_width: Px,
    viewport_width: Px,
}

impl ClampedDrag {
    /// Creates an engine for the given content and viewport widths.
    pub const fn new(content_width: Px, viewport_width: Px) -> Self {
        Self {
            content_width,
            viewport_width,
        }
    }

    /// The largest offset at rest.
    pub fn max_offset(&self) -> Px {
        (self.content_width - self.viewport_width).max(Px::ZERO)
    }

    /// Distance the viewport's left edge sits from the content's left edge.
    pub fn left_slack(&self, current: Px) -> Px {
        Px::new(current.abs().min(i32::MAX as u32) as i32)
    }

    /// Distance the viewport's right edge sits from the content's right edge.
    pub fn right_slack(&self, current: Px) -> Px {
        (self.content_width - current - self.viewport_width).max(Px::ZERO)
    }

    /// Limits a raw pointer delta to what the edges allow.
    pub fn clamp_delta(&self, raw_delta: f32, current: Px) -> f32 {
        let left_slack = self.left_slack(current).to_f32();
        let right_slack = self.right_slack(current).to_f32();
        if raw_delta > 0.0 && raw_delta > left_slack {
            left_slack
        } else if raw_delta < 0.0 && -raw_delta > right_slack {
            -right_slack
        } else {
            raw_delta
        }
    }

    /// Applies a pointer delta, clamped to the edges.
    pub fn apply(&self, raw_delta: f32, current: Px) -> DragStep {
        free_drag(self.clamp_delta(raw_delta, current), current)
    }

    /// Clamps an already computed offset into `[0, max_offset]`.
    pub fn clamp_offset(&self, offset: Px) -> Px {
        offset.clamp(Px::ZERO, self.max_offset())
    }
}

/// Applies a pointer delta with no edge handling at all.
pub fn free_drag(raw_delta: f32, current: Px) -> DragStep {
    let applied = Px::round_from_f32(raw_delta);
    DragStep {
        applied,
        offset: current.saturating_sub(applied),
    }
}
