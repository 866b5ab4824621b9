//! Ownership of a touch sequence shared with a nested vertical scroller.
//!
//! The pager sees every event before its children. While a sequence is
//! undecided the child keeps receiving events; as soon as the pointer has
//! travelled far enough and mostly sideways, the pager claims the rest of the
//! sequence.

use crate::{event::PointerPosition, slop::TouchSlop};

/// Decides, once per sequence, whether the pager takes the gesture over.
///
/// ```
/// use swipe_pager::{arbiter::GestureArbiter, event::PointerPosition, slop::TouchSlop};
///
/// let mut arbiter = GestureArbiter::new(TouchSlop::new(10.0));
/// arbiter.on_press(PointerPosition::new(0.0, 0.0));
/// assert!(!arbiter.should_claim(PointerPosition::new(5.0, 20.0)));
/// assert!(arbiter.should_claim(PointerPosition::new(20.0, 5.0)));
/// ```
#[derive(Clone, Debug)]
pub struct GestureArbiter {
    slop: TouchSlop,
    press: Option<PointerPosition>,
    claimed: bool,
}

impl GestureArbiter {
    /// Creates an arbiter with no sequence in progress.
    pub fn new(slop: TouchSlop) -> Self {
        Self {
            slop,
            press: None,
            claimed: false,
        }
    }

    /// Starts a new sequence at `position`.
    pub fn on_press(&mut self, position: PointerPosition) {
        self.press = Some(position);
        self.claimed = false;
    }

    /// Returns whether the pager should own the sequence after the pointer
    /// reached `position`.
    ///
    /// A claim sticks until [`GestureArbiter::end_sequence`]. Without a
    /// recorded press, `position` becomes the press.
    pub fn should_claim(&mut self, position: PointerPosition) -> bool {
        if self.claimed {
            return true;
        }
        let press = *self.press.get_or_insert(position);
        let (dx, dy) = position.delta_from(press);
        if self.slop.admits(position.distance_to(press)) && dx.abs() >= dy.abs() {
            self.claimed = true;
        }
        self.claimed
    }

    /// Forgets the current sequence.
    pub fn end_sequence(&mut self) {
        self.press = None;
        self.claimed = false;
    }

    /// Returns whether the current sequence has been claimed.
    pub fn is_claimed(&self) -> bool {
        self.claimed
    }

    /// Press position of the current sequence, if any.
    pub fn press(&self) -> Option<PointerPosition> {
        self.press
    }
}
