use std::{
    hash::{Hash, Hasher},
    ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign},
};

use crate::Axis;

/// Two dimensional point in outline space.
///
/// Equality is structural. Hashing agrees with equality, so `0.0` and `-0.0`
/// hash the same way.
#[derive(Copy, Clone, PartialEq, Default, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "bytemuck", derive(bytemuck::Pod, bytemuck::Zeroable))]
#[repr(C)]
pub struct Point {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
}

impl Point {
    /// The origin, `(0, 0)`.
    pub const ZERO: Point = Point::new(0.0, 0.0);

    /// Creates a new point with the given x and y coordinates.
    #[inline(always)]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the coordinate on the given axis.
    #[inline(always)]
    pub const fn get(self, axis: Axis) -> f64 {
        match axis {
            Axis::X => self.x,
            Axis::Y => self.y,
        }
    }

    /// Returns a copy of this point with the coordinate on `axis` replaced.
    #[inline(always)]
    pub const fn with(self, axis: Axis, value: f64) -> Self {
        match axis {
            Axis::X => Self { x: value, y: self.y },
            Axis::Y => Self { x: self.x, y: value },
        }
    }

    /// Linearly interpolate between `self` and `other`.
    ///
    /// `t == 0` is `self` and `t == 1` is `other`; values outside that range
    /// extrapolate along the same line.
    #[inline(always)]
    pub fn lerp(self, other: Point, t: f64) -> Point {
        self + (other - self) * t
    }

    /// Returns `true` if both coordinates are finite.
    pub fn is_finite(self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

// -0.0 == 0.0, so they must also hash the same
fn canonical_bits(value: f64) -> u64 {
    if value == 0.0 {
        0
    } else {
        value.to_bits()
    }
}

impl Hash for Point {
    fn hash<H: Hasher>(&self, state: &mut H) {
        canonical_bits(self.x).hash(state);
        canonical_bits(self.y).hash(state);
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::new(x, y)
    }
}

impl From<Point> for (f64, f64) {
    fn from(value: Point) -> Self {
        (value.x, value.y)
    }
}

#[cfg(feature = "kurbo")]
impl From<kurbo::Point> for Point {
    fn from(value: kurbo::Point) -> Self {
        Point::new(value.x, value.y)
    }
}

#[cfg(feature = "kurbo")]
impl From<Point> for kurbo::Point {
    fn from(value: Point) -> Self {
        kurbo::Point::new(value.x, value.y)
    }
}

impl Add for Point {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x + rhs.x,
            y: self.y + rhs.y,
        }
    }
}

impl AddAssign for Point {
    #[inline(always)]
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl Sub for Point {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            x: self.x - rhs.x,
            y: self.y - rhs.y,
        }
    }
}

impl SubAssign for Point {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: Self) {
        self.x -= rhs.x;
        self.y -= rhs.y;
    }
}

impl Mul<f64> for Point {
    type Output = Self;

    #[inline(always)]
    fn mul(self, rhs: f64) -> Self::Output {
        Self {
            x: self.x * rhs,
            y: self.y * rhs,
        }
    }
}

impl MulAssign<f64> for Point {
    #[inline(always)]
    fn mul_assign(&mut self, rhs: f64) {
        self.x *= rhs;
        self.y *= rhs;
    }
}

impl Neg for Point {
    type Output = Self;

    #[inline(always)]
    fn neg(self) -> Self::Output {
        Self {
            x: -self.x,
            y: -self.y,
        }
    }
}
