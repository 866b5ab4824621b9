//! Integer pixel coordinates used for scroll offsets and panel geometry.
//!
//! Pointer input arrives as `f32` coordinates (see [`crate::event`]); every
//! value the pager commits, such as the scroll offset or a panel frame, is a
//! whole number of pixels and lives in the types below.
//!
//! # Coordinate System
//!
//! - Origin (0, 0) at the top-left corner of the pager's content
//! - X-axis increases to the right
//! - Y-axis increases downward
//! - Negative values are allowed; an unclamped pager can scroll past its edges
//!
//! # Example
//!
//! ```
//! use swipe_pager::px::{Px, PxPosition, PxRect};
//!
//! let page_width = Px::new(1080);
//! let offset = page_width * 2;
//! assert_eq!(offset, Px::new(2160));
//!
//! let origin = PxPosition::new(offset, Px::ZERO);
//! let frame = PxRect::new(Px::new(2160), Px::ZERO, page_width, Px::new(1920));
//! assert!(frame.contains(origin));
//! ```

use std::ops::{AddAssign, Neg, SubAssign};

/// A single pixel coordinate or length.
///
/// # Examples
///
/// ```
/// use swipe_pager::px::Px;
///
/// let a = Px::new(100);
/// let b = Px::new(-40);
/// assert_eq!(a + b, Px::new(60));
/// assert_eq!(b.abs(), 40);
/// assert_eq!(Px::round_from_f32(-2.5), Px::new(-3));
/// ```
#[derive(Debug, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Px(pub i32);

impl Px {
    /// Zero pixels.
    pub const ZERO: Self = Self(0);

    /// The largest representable pixel value.
    pub const MAX: Self = Self(i32::MAX);

    /// Creates a new `Px` from an i32 value.
    pub const fn new(value: i32) -> Self {
        Px(value)
    }

    /// Returns the raw i32 value.
    pub fn raw(self) -> i32 {
        self.0
    }

    /// Returns the absolute value as a u32.
    pub fn abs(self) -> u32 {
        self.0.unsigned_abs()
    }

    /// Converts the pixel value to f32.
    pub fn to_f32(self) -> f32 {
        self.0 as f32
    }

    /// Creates a `Px` from an f32 value, truncating toward zero and saturating
    /// at the numeric bounds.
    ///
    /// ```
    /// use swipe_pager::px::Px;
    ///
    /// assert_eq!(Px::saturating_from_f32(42.7), Px::new(42));
    /// assert_eq!(Px::saturating_from_f32(f32::MAX), Px::MAX);
    /// ```
    pub fn saturating_from_f32(value: f32) -> Self {
        let clamped_value = value.clamp(i32::MIN as f32, i32::MAX as f32);
        Px(clamped_value as i32)
    }

    /// Creates a `Px` from an f32 value rounded to the nearest pixel, halves
    /// away from zero, saturating at the numeric bounds.
    ///
    /// Non-finite input maps to zero.
    pub fn round_from_f32(value: f32) -> Self {
        if !value.is_finite() {
            return Px::ZERO;
        }
        Self::saturating_from_f32(value.round())
    }

    /// Saturating addition.
    pub fn saturating_add(self, rhs: Self) -> Self {
        Px(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction.
    pub fn saturating_sub(self, rhs: Self) -> Self {
        Px(self.0.saturating_sub(rhs.0))
    }

    /// Returns `self * fraction` rounded to whole pixels, never leaving the
    /// range between zero and `self`.
    ///
    /// ```
    /// use swipe_pager::px::Px;
    ///
    /// assert_eq!(Px::new(-580).fraction(0.5), Px::new(-290));
    /// assert_eq!(Px::new(100).fraction(1.5), Px::new(100));
    /// ```
    pub fn fraction(self, fraction: f32) -> Self {
        let scaled = Self::round_from_f32(self.to_f32() * fraction);
        if self.0 >= 0 {
            scaled.clamp(Px::ZERO, self)
        } else {
            scaled.clamp(self, Px::ZERO)
        }
    }

    /// Multiplies by a count, saturating at the numeric bounds.
    ///
    /// Used to turn a page index into an offset without overflowing on
    /// absurdly large panel counts.
    pub fn saturating_mul_count(self, count: usize) -> Self {
        let product = i64::from(self.0).saturating_mul(count.min(i64::MAX as usize) as i64);
        Px(product.clamp(i64::from(i32::MIN), i64::from(i32::MAX)) as i32)
    }
}

/// A 2D position in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxPosition {
    /// The x-coordinate.
    pub x: Px,
    /// The y-coordinate.
    pub y: Px,
}

impl PxPosition {
    /// The origin.
    pub const ZERO: Self = Self { x: Px(0), y: Px(0) };

    /// Creates a new position from x and y coordinates.
    pub const fn new(x: Px, y: Px) -> Self {
        Self { x, y }
    }

    /// Returns this position moved by the given amounts.
    pub fn offset(self, dx: Px, dy: Px) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

/// A 2D size in pixel space.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PxSize {
    /// The width.
    pub width: Px,
    /// The height.
    pub height: Px,
}

impl PxSize {
    /// Zero size.
    pub const ZERO: Self = Self {
        width: Px(0),
        height: Px(0),
    };

    /// Creates a new size.
    pub const fn new(width: Px, height: Px) -> Self {
        Self { width, height }
    }
}

/// A rectangle in pixel space, described by its top-left corner and size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PxRect {
    /// The x-coordinate of the top-left corner
    pub x: Px,
    /// The y-coordinate of the top-left corner
    pub y: Px,
    /// The width of the rectangle
    pub width: Px,
    /// The height of the rectangle
    pub height: Px,
}

impl PxRect {
    /// A zero rectangle at the origin.
    pub const ZERO: Self = Self {
        x: Px::ZERO,
        y: Px::ZERO,
        width: Px::ZERO,
        height: Px::ZERO,
    };

    /// Creates a new rectangle.
    pub const fn new(x: Px, y: Px, width: Px, height: Px) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Creates a rectangle from its left, top, right and bottom edges.
    ///
    /// Inverted edges produce an empty rectangle rather than a negative size.
    pub fn from_edges(left: Px, top: Px, right: Px, bottom: Px) -> Self {
        Self {
            x: left,
            y: top,
            width: (right - left).max(Px::ZERO),
            height: (bottom - top).max(Px::ZERO),
        }
    }

    /// Returns the x-coordinate one past the right edge.
    pub fn right(&self) -> Px {
        self.x + self.width
    }

    /// Returns the y-coordinate one past the bottom edge.
    pub fn bottom(&self) -> Px {
        self.y + self.height
    }

    /// Returns whether the point lies inside the rectangle.
    pub fn contains(&self, point: PxPosition) -> bool {
        point.x.0 >= self.x.0
            && point.x.0 < self.x.0 + self.width.0
            && point.y.0 >= self.y.0
            && point.y.0 < self.y.0 + self.height.0
    }
}

impl std::ops::Add for Px {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Px(self.0 + rhs.0)
    }
}

impl Neg for Px {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Px::new(-self.0)
    }
}

impl std::ops::Sub for Px {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Px(self.0 - rhs.0)
    }
}

impl std::ops::Mul<i32> for Px {
    type Output = Self;

    fn mul(self, rhs: i32) -> Self::Output {
        Px(self.0 * rhs)
    }
}

impl std::ops::Div<i32> for Px {
    type Output = Self;

    fn div(self, rhs: i32) -> Self::Output {
        Px(self.0 / rhs)
    }
}

impl From<i32> for Px {
    fn from(value: i32) -> Self {
        Px(value)
    }
}

impl AddAssign for Px {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Px {
    fn sub_assign(&mut self, rhs: Self) {
        self.0 -= rhs.0;
    }
}

impl std::ops::Add for PxPosition {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl std::ops::Sub for PxPosition {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        PxPosition {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}
