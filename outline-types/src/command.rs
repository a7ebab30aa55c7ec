use std::{
    fmt::{Debug, Display, Formatter},
    str::FromStr,
};

/// The kind of a path command, identified by its single letter token.
///
/// Only absolute commands are represented. Each kind takes a fixed number of
/// numeric arguments, see [`CommandKind::arity`].
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CommandKind {
    /// `M x y`: begin a new subpath.
    MoveTo,
    /// `L x y`: straight line to a point.
    LineTo,
    /// `Q cx cy x y`: quadratic bezier.
    QuadTo,
    /// `C cx0 cy0 cx1 cy1 x y`: cubic bezier.
    CurveTo,
}

impl CommandKind {
    /// Look up the command for a token byte.
    pub const fn from_token(token: u8) -> Option<Self> {
        match token {
            b'M' => Some(CommandKind::MoveTo),
            b'L' => Some(CommandKind::LineTo),
            b'Q' => Some(CommandKind::QuadTo),
            b'C' => Some(CommandKind::CurveTo),
            _ => None,
        }
    }

    /// The token used for this command in path data.
    pub const fn token(self) -> char {
        match self {
            CommandKind::MoveTo => 'M',
            CommandKind::LineTo => 'L',
            CommandKind::QuadTo => 'Q',
            CommandKind::CurveTo => 'C',
        }
    }

    /// The number of numeric arguments this command takes.
    pub const fn arity(self) -> usize {
        match self {
            CommandKind::MoveTo | CommandKind::LineTo => 2,
            CommandKind::QuadTo => 4,
            CommandKind::CurveTo => 6,
        }
    }
}

/// An error returned when a string is not a recognized command token.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum InvalidCommand {
    /// The input was empty.
    Empty,
    /// The input was not exactly one of the known command letters.
    UnknownToken,
}

impl FromStr for CommandKind {
    type Err = InvalidCommand;

    fn from_str(src: &str) -> Result<Self, Self::Err> {
        match src.as_bytes() {
            [] => Err(InvalidCommand::Empty),
            [token] => CommandKind::from_token(*token).ok_or(InvalidCommand::UnknownToken),
            _ => Err(InvalidCommand::UnknownToken),
        }
    }
}

impl Display for CommandKind {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.token())
    }
}

impl Display for InvalidCommand {
    fn fmt(&self, f: &mut Formatter<'_>) -> core::fmt::Result {
        match self {
            InvalidCommand::Empty => write!(f, "Empty command token"),
            InvalidCommand::UnknownToken => {
                write!(f, "Unknown command token (expected one of M, L, Q, C)")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InvalidCommand {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoke_test() {
        assert_eq!("M".parse(), Ok(CommandKind::MoveTo));
        assert_eq!("L".parse(), Ok(CommandKind::LineTo));
        assert_eq!("Q".parse(), Ok(CommandKind::QuadTo));
        assert_eq!("C".parse(), Ok(CommandKind::CurveTo));
        assert_eq!("".parse::<CommandKind>(), Err(InvalidCommand::Empty));
        // relative commands are not supported
        assert_eq!("l".parse::<CommandKind>(), Err(InvalidCommand::UnknownToken));
        assert_eq!("Z".parse::<CommandKind>(), Err(InvalidCommand::UnknownToken));
        assert_eq!("LL".parse::<CommandKind>(), Err(InvalidCommand::UnknownToken));
    }

    #[test]
    fn arity() {
        assert_eq!(CommandKind::MoveTo.arity(), 2);
        assert_eq!(CommandKind::LineTo.arity(), 2);
        assert_eq!(CommandKind::QuadTo.arity(), 4);
        assert_eq!(CommandKind::CurveTo.arity(), 6);
    }

    #[test]
    fn token_round_trips() {
        for kind in [
            CommandKind::MoveTo,
            CommandKind::LineTo,
            CommandKind::QuadTo,
            CommandKind::CurveTo,
        ] {
            assert_eq!(CommandKind::from_token(kind.token() as u8), Some(kind));
            assert_eq!(kind.to_string().parse(), Ok(kind));
        }
    }
}
