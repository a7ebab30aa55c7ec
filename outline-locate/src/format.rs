//! Formatting located points as coordinate strings.

use core::fmt;
use outline_types::Point;

/// The number of fractional digits kept by default.
///
/// Anything below `1e-9` is treated as floating point noise.
pub const DEFAULT_MAX_DECIMALS: usize = 9;

// Above this magnitude an f64 has no fractional digits left to round.
const MAX_EXACT: f64 = (1u64 << f64::MANTISSA_DIGITS) as f64;

/// A point formatted as `"X Y"`.
///
/// Each coordinate is rounded to a fixed number of fractional digits and then
/// written in its shortest form: integral values have no fractional part
/// (`40`, not `40.0`), and negative zero is written as `0`.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CoordinateString(String);

impl CoordinateString {
    /// Format `point`, keeping at most `max_decimals` fractional digits.
    pub fn new(point: Point, max_decimals: usize) -> Self {
        Self(format!(
            "{} {}",
            round_coordinate(point.x, max_decimals),
            round_coordinate(point.y, max_decimals)
        ))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Round `value` to at most `max_decimals` fractional digits.
///
/// Negative zero is normalized to zero. Values too large to carry fractional
/// digits are returned unchanged.
pub fn round_coordinate(value: f64, max_decimals: usize) -> f64 {
    let scale = 10f64.powi(max_decimals.min(i32::MAX as usize) as i32);
    let scaled = value * scale;
    let rounded = if scaled.is_finite() && scaled.abs() < MAX_EXACT {
        scaled.round() / scale
    } else {
        value
    };
    // also catches -0.0
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

impl core::ops::Deref for CoordinateString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.0.as_str()
    }
}

impl AsRef<str> for CoordinateString {
    fn as_ref(&self) -> &str {
        self.0.as_ref()
    }
}

impl From<CoordinateString> for String {
    fn from(value: CoordinateString) -> Self {
        value.0
    }
}

impl PartialEq<str> for CoordinateString {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for CoordinateString {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

impl fmt::Display for CoordinateString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
