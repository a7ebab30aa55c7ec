use std::{
    fmt::{Display, Formatter},
    str::FromStr,
};

/// One of the two coordinate axes of outline space.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Axis {
    /// The horizontal axis.
    X,
    /// The vertical axis.
    Y,
}

impl Axis {
    /// Both axes, in `x`, `y` order.
    pub const ALL: [Axis; 2] = [Axis::X, Axis::Y];

    /// Returns the axis perpendicular to this one.
    pub const fn cross(self) -> Axis {
        match self {
            Axis::X => Axis::Y,
            Axis::Y => Axis::X,
        }
    }
}

/// An error returned when parsing an [`Axis`] from a string.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InvalidAxis;

impl FromStr for Axis {
    type Err = InvalidAxis;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.as_bytes() {
            [b'x' | b'X'] => Ok(Axis::X),
            [b'y' | b'Y'] => Ok(Axis::Y),
            _ => Err(InvalidAxis),
        }
    }
}

impl Display for Axis {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        f.write_str(match self {
            Axis::X => "x",
            Axis::Y => "y",
        })
    }
}

impl Display for InvalidAxis {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "axis must be one of 'x' or 'y'")
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidAxis {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse() {
        assert_eq!("x".parse(), Ok(Axis::X));
        assert_eq!("X".parse(), Ok(Axis::X));
        assert_eq!("y".parse(), Ok(Axis::Y));
        assert_eq!("Y".parse(), Ok(Axis::Y));
        assert_eq!("".parse::<Axis>(), Err(InvalidAxis));
        assert_eq!("xy".parse::<Axis>(), Err(InvalidAxis));
        assert_eq!("z".parse::<Axis>(), Err(InvalidAxis));
    }

    #[test]
    fn cross() {
        assert_eq!(Axis::X.cross(), Axis::Y);
        assert_eq!(Axis::Y.cross(), Axis::X);
    }

    #[test]
    fn display() {
        assert_eq!(Axis::X.to_string(), "x");
        assert_eq!(Axis::Y.to_string(), "y");
    }
}
