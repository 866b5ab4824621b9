//! Release-time page selection.
//!
//! The page a gesture started on (the *anchor*) is fixed at press time. On
//! release the total horizontal travel decides whether the pager moves one
//! page forward, one page back, or returns to the anchor.

use crate::px::Px;

/// Where the pager settles relative to the anchor page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SnapTarget {
    /// One page before the anchor.
    Previous,
    /// Back to the anchor.
    Current,
    /// One page after the anchor.
    Next,
}

impl SnapTarget {
    /// Chooses a target from the travel between press and release.
    ///
    /// Travel of at least half a viewport (integer half) moves one page in
    /// the direction the content was pushed.
    ///
    /// ```
    /// use swipe_pager::{px::Px, snap::SnapTarget};
    ///
    /// // Pressed at 500, released at 100 on a 1000px viewport.
    /// assert_eq!(SnapTarget::decide(-400.0, Px::new(1000)), SnapTarget::Current);
    /// assert_eq!(SnapTarget::decide(-500.0, Px::new(1000)), SnapTarget::Next);
    /// assert_eq!(SnapTarget::decide(500.0, Px::new(1000)), SnapTarget::Previous);
    /// ```
    pub fn decide(total_dx: f32, viewport_width: Px) -> Self {
        let half = (viewport_width.raw() >> 1) as f32;
        if total_dx < 0.0 && -total_dx >= half {
            SnapTarget::Next
        } else if total_dx > 0.0 && total_dx >= half {
            SnapTarget::Previous
        } else {
            SnapTarget::Current
        }
    }

    /// Resolves the target against an anchor page. May be `-1` or one past
    /// the last page; callers clamp.
    pub fn page_from(self, anchor: usize) -> i64 {
        let anchor = i64::try_from(anchor).unwrap_or(i64::MAX);
        match self {
            SnapTarget::Previous => anchor - 1,
            SnapTarget::Current => anchor,
            SnapTarget::Next => anchor.saturating_add(1),
        }
    }
}

/// The page under the press position, `floor((|offset| + |down_x|) / W)`,
/// clamped to the last page.
///
/// Returns `None` when there are no pages or the page width is not positive.
pub fn anchor_page(offset: Px, down_x: f32, page_width: Px, page_count: usize) -> Option<usize> {
    if page_count == 0 || page_width <= Px::ZERO {
        return None;
    }
    let reach = offset.abs() as f32 + down_x.abs();
    let page = (reach / page_width.to_f32()).floor();
    let page = if page.is_finite() && page > 0.0 {
        page as usize
    } else {
        0
    };
    Some(page.min(page_count - 1))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_viewport_is_the_threshold() {
        let width = Px(1080);
        assert_eq!(SnapTarget::decide(-539.0, width), SnapTarget::Current);
        assert_eq!(SnapTarget::decide(-540.0, width), SnapTarget::Next);
        assert_eq!(SnapTarget::decide(539.9, width), SnapTarget::Current);
        assert_eq!(SnapTarget::decide(540.0, width), SnapTarget::Previous);
        assert_eq!(SnapTarget::decide(0.0, width), SnapTarget::Current);
    }

    #[test]
    fn odd_widths_use_integer_half() {
        assert_eq!(SnapTarget::decide(-50.0, Px(101)), SnapTarget::Next);
        assert_eq!(SnapTarget::decide(49.5, Px(101)), SnapTarget::Current);
    }

    #[test]
    fn short_travel_returns_to_anchor() {
        let target = SnapTarget::decide(100.0 - 500.0, Px(1000));
        assert_eq!(target, SnapTarget::Current);
        assert_eq!(target.page_from(2), 2);
    }

    #[test]
    fn targets_may_leave_the_page_range() {
        assert_eq!(SnapTarget::Previous.page_from(0), -1);
        assert_eq!(SnapTarget::Next.page_from(2), 3);
    }

    #[test]
    fn anchor_uses_offset_plus_press() {
        assert_eq!(anchor_page(Px(0), 900.0, Px(1080), 3), Some(0));
        assert_eq!(anchor_page(Px(1080), 0.0, Px(1080), 3), Some(1));
        assert_eq!(anchor_page(Px(1080), 1000.0, Px(1080), 3), Some(1));
        assert_eq!(anchor_page(Px(1080), 1080.0, Px(1080), 3), Some(2));
    }

    #[test]
    fn anchor_is_clamped_to_last_page() {
        assert_eq!(anchor_page(Px(2160), 1079.0, Px(1080), 3), Some(2));
        assert_eq!(anchor_page(Px(2160), 5000.0, Px(1080), 3), Some(2));
    }

    #[test]
    fn no_anchor_without_pages() {
        assert_eq!(anchor_page(Px(0), 10.0, Px(1080), 0), None);
        assert_eq!(anchor_page(Px(0), 10.0, Px(0), 3), None);
    }
}
