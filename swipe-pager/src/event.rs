//! Normalized pointer events fed to the pager.
//!
//! The host translates whatever its platform delivers (touch, mouse, pen)
//! into a stream of [`PointerEvent`]s. A *sequence* is everything from a
//! [`PointerEventKind::Down`] up to and including the matching
//! [`PointerEventKind::Up`] or [`PointerEventKind::Cancel`].
//!
//! Coordinates are absolute (screen space), in pixels, and may carry a
//! fractional part.
//!
//! ```
//! use swipe_pager::event::{PointerEvent, PointerEventKind};
//!
//! let sequence = [
//!     PointerEvent::down(900.0, 400.0),
//!     PointerEvent::moved(400.0, 410.0),
//!     PointerEvent::up(300.0, 410.0),
//! ];
//! assert_eq!(sequence[0].kind, PointerEventKind::Down);
//! assert!(sequence[2].ends_sequence());
//! ```

/// Absolute pointer coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerPosition {
    /// Horizontal coordinate.
    pub x: f32,
    /// Vertical coordinate.
    pub y: f32,
}

impl PointerPosition {
    /// Creates a new position.
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Returns the `(dx, dy)` displacement from `origin` to `self`.
    pub fn delta_from(self, origin: PointerPosition) -> (f32, f32) {
        (self.x - origin.x, self.y - origin.y)
    }

    /// Euclidean distance to `other`.
    pub fn distance_to(self, other: PointerPosition) -> f32 {
        let (dx, dy) = self.delta_from(other);
        (dx * dx + dy * dy).sqrt()
    }
}

/// The phase of a pointer event within its sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PointerEventKind {
    /// The pointer touched down; a new sequence begins.
    Down,
    /// The pointer moved while down.
    Move,
    /// The pointer lifted; the sequence ends normally.
    Up,
    /// The platform took the sequence away; it ends without a normal release.
    Cancel,
}

/// A single pointer event.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PointerEvent {
    /// What happened.
    pub kind: PointerEventKind,
    /// Where it happened.
    pub position: PointerPosition,
}

impl PointerEvent {
    /// Creates an event of the given kind.
    pub const fn new(kind: PointerEventKind, x: f32, y: f32) -> Self {
        Self {
            kind,
            position: PointerPosition::new(x, y),
        }
    }

    /// Shorthand for a [`PointerEventKind::Down`] event.
    pub const fn down(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Down, x, y)
    }

    /// Shorthand for a [`PointerEventKind::Move`] event.
    pub const fn moved(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Move, x, y)
    }

    /// Shorthand for a [`PointerEventKind::Up`] event.
    pub const fn up(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Up, x, y)
    }

    /// Shorthand for a [`PointerEventKind::Cancel`] event.
    pub const fn cancel(x: f32, y: f32) -> Self {
        Self::new(PointerEventKind::Cancel, x, y)
    }

    /// Returns whether this event closes its sequence.
    pub fn ends_sequence(&self) -> bool {
        matches!(self.kind, PointerEventKind::Up | PointerEventKind::Cancel)
    }
}
