//! Touch slop: the minimum travel that separates a drag from finger jitter.

/// Admits pointer deltas whose magnitude reaches the slop distance.
///
/// The filter is a pure predicate. Callers must leave their baseline untouched
/// when a delta is rejected, so that a run of small wiggles still adds up to
/// an admitted drag measured from the last admitted position.
///
/// ```
/// use swipe_pager::slop::TouchSlop;
///
/// let slop = TouchSlop::new(8.0);
/// assert!(!slop.admits(7.9));
/// assert!(slop.admits(-8.0));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchSlop {
    threshold: f32,
}

impl TouchSlop {
    /// Creates a filter for the given distance in pixels.
    pub const fn new(threshold: f32) -> Self {
        Self { threshold }
    }

    /// The configured distance.
    pub fn threshold(&self) -> f32 {
        self.threshold
    }

    /// Returns whether `delta` is large enough to act on.
    pub fn admits(&self, delta: f32) -> bool {
        delta.abs() >= self.threshold
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn threshold_is_inclusive_in_both_directions() {
        let slop = TouchSlop::new(10.0);
        assert!(slop.admits(10.0));
        assert!(slop.admits(-10.0));
        assert!(!slop.admits(9.99));
        assert!(!slop.admits(-9.99));
        assert!(!slop.admits(0.0));
    }

    #[test]
    fn zero_slop_admits_everything() {
        let slop = TouchSlop::new(0.0);
        assert!(slop.admits(0.0));
        assert!(slop.admits(0.01));
    }

    #[test]
    fn nan_delta_is_never_admitted() {
        assert!(!TouchSlop::new(8.0).admits(f32::NAN));
    }
}
