//! Error types returned by the parsers and the locator.

use core::fmt;
use outline_types::CommandKind;

/// Errors that can occur when parsing path commands.
#[derive(Clone, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum MalformedCommand {
    /// The input contained no tokens.
    Empty,
    /// Numeric arguments appeared where a command token was expected.
    ExpectedCommand(String),
    /// The token is not one of the supported commands.
    UnknownCommand(String),
    /// An argument could not be parsed as a finite number.
    InvalidNumber(String),
    /// The command was followed by fewer arguments than it takes.
    MissingArguments {
        command: CommandKind,
        expected: usize,
        found: usize,
    },
    /// The command was followed by more arguments than it takes.
    TrailingArguments {
        command: CommandKind,
        expected: usize,
    },
}

impl fmt::Display for MalformedCommand {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Empty command string"),
            Self::ExpectedCommand(token) => {
                write!(f, "Expected a command token, found '{token}'")
            }
            Self::UnknownCommand(token) => write!(f, "Unknown command '{token}'"),
            Self::InvalidNumber(token) => write!(f, "Invalid number '{token}'"),
            Self::MissingArguments {
                command,
                expected,
                found,
            } => write!(
                f,
                "Command '{command}' takes {expected} arguments, found {found}"
            ),
            Self::TrailingArguments { command, expected } => write!(
                f,
                "Command '{command}' takes {expected} arguments, found more"
            ),
        }
    }
}

impl std::error::Error for MalformedCommand {}

/// Errors that can occur when resolving a query to a point.
#[derive(Clone, Copy, Debug, PartialEq)]
#[non_exhaustive]
pub enum LocateError {
    /// The query did not supply exactly one finite axis value.
    InvalidQuery,
    /// The geometry has no point with the requested coordinate.
    NoSolution,
    /// The geometry has zero extent on the query axis and lies on the
    /// requested coordinate, so every point satisfies the query.
    AmbiguousSolution,
    /// The only solution lies outside the segment, at parameter `t`.
    ///
    /// Only reported when locating with [`Extent::Segment`](crate::Extent::Segment).
    OutOfRange { t: f64 },
}

impl fmt::Display for LocateError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::InvalidQuery => write!(f, "A query must constrain exactly one axis"),
            Self::NoSolution => write!(f, "No point on the geometry satisfies the query"),
            Self::AmbiguousSolution => write!(
                f,
                "The geometry lies on the queried coordinate; every point satisfies the query"
            ),
            Self::OutOfRange { t } => {
                write!(f, "The solution (t = {t}) lies outside the segment")
            }
        }
    }
}

impl std::error::Error for LocateError {}

/// Any error produced by this crate.
#[derive(Clone, Debug, PartialEq)]
pub enum Error {
    /// Parsing the path data failed.
    Parse(MalformedCommand),
    /// Resolving the query failed.
    Locate(LocateError),
}

impl From<MalformedCommand> for Error {
    fn from(e: MalformedCommand) -> Self {
        Self::Parse(e)
    }
}

impl From<LocateError> for Error {
    fn from(e: LocateError) -> Self {
        Self::Locate(e)
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Locate(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Locate(e) => Some(e),
        }
    }
}
