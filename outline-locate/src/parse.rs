//! Parsing path commands into segments.
//!
//! The grammar is a small subset of SVG path data: single letter absolute
//! commands (`M`, `L`, `Q`, `C`), each followed by exactly as many numbers as
//! it takes. Tokens are separated by whitespace or commas, and a command
//! letter may be directly followed by its first number (`L50 100`).

use outline_types::{CommandKind, Point};

use crate::{
    error::MalformedCommand,
    segment::{Command, Segment},
};

/// The most numbers any command takes.
const MAX_ARITY: usize = 6;

/// Parse a single command string such as `"L 50 100"` into a segment
/// starting at `anchor`.
///
/// The string must contain exactly one command and its arguments.
///
/// ```
/// use outline_locate::{parse_segment, Point};
///
/// let segment = parse_segment("L 50 100", Point::new(0.0, 0.0)).unwrap();
/// assert_eq!(segment.anchor(), Point::new(0.0, 0.0));
/// assert_eq!(segment.endpoint(), Point::new(50.0, 100.0));
/// ```
pub fn parse_segment(src: &str, anchor: Point) -> Result<Segment, MalformedCommand> {
    let mut lexer = Lexer::new(src);
    let result = match lexer.next() {
        None => Err(MalformedCommand::Empty),
        Some(token) => parse_command(token, &mut lexer).and_then(|command| {
            match lexer.next() {
                None => Ok(Segment::new(command, anchor)),
                Some(_) => Err(MalformedCommand::TrailingArguments {
                    command: command.kind(),
                    expected: command.kind().arity(),
                }),
            }
        }),
    };
    if let Err(e) = &result {
        log::debug!("rejected command '{src}': {e}");
    }
    result
}

/// Parse a sequence of commands into a chain of segments.
///
/// The first segment is anchored at the origin, and each subsequent segment
/// at the endpoint of the one before it.
///
/// ```
/// use outline_locate::{parse_path, Point};
///
/// let segments = parse_path("M 10 10 L 50 100").unwrap();
/// assert_eq!(segments.len(), 2);
/// assert_eq!(segments[1].anchor(), Point::new(10.0, 10.0));
/// ```
pub fn parse_path(src: &str) -> Result<Vec<Segment>, MalformedCommand> {
    let mut lexer = Lexer::new(src);
    let mut segments = Vec::new();
    let mut anchor = Point::ZERO;
    let result = loop {
        let Some(token) = lexer.next() else {
            break if segments.is_empty() {
                Err(MalformedCommand::Empty)
            } else {
                Ok(())
            };
        };
        match parse_command(token, &mut lexer) {
            Ok(command) => {
                segments.push(Segment::new(command, anchor));
                anchor = command.end();
            }
            Err(e) => break Err(e),
        }
    };
    match result {
        Ok(()) => Ok(segments),
        Err(e) => {
            log::debug!("rejected path after {} segments: {e}", segments.len());
            Err(e)
        }
    }
}

/// Parse the command starting at `token`, consuming its arguments.
fn parse_command(token: Token, lexer: &mut Lexer) -> Result<Command, MalformedCommand> {
    let kind = match token {
        Token::Command(name) => name
            .parse::<CommandKind>()
            .map_err(|_| MalformedCommand::UnknownCommand(name.into()))?,
        Token::Number(num) => return Err(MalformedCommand::ExpectedCommand(num.into())),
    };
    let arity = kind.arity();
    let mut args = [0.0; MAX_ARITY];
    for (found, arg) in args.iter_mut().take(arity).enumerate() {
        match lexer.peek() {
            Some(Token::Number(num)) => {
                lexer.next();
                *arg = parse_number(num)?;
            }
            _ => {
                return Err(MalformedCommand::MissingArguments {
                    command: kind,
                    expected: arity,
                    found,
                })
            }
        }
    }
    if let Some(Token::Number(_)) = lexer.peek() {
        return Err(MalformedCommand::TrailingArguments {
            command: kind,
            expected: arity,
        });
    }
    let point = |i: usize| Point::new(args[i], args[i + 1]);
    Ok(match kind {
        CommandKind::MoveTo => Command::MoveTo(point(0)),
        CommandKind::LineTo => Command::LineTo(point(0)),
        CommandKind::QuadTo => Command::QuadTo(point(0), point(2)),
        CommandKind::CurveTo => Command::CurveTo(point(0), point(2), point(4)),
        _ => return Err(MalformedCommand::UnknownCommand(kind.to_string())),
    })
}

fn parse_number(src: &str) -> Result<f64, MalformedCommand> {
    match src.parse::<f64>() {
        Ok(value) if value.is_finite() => Ok(value),
        _ => Err(MalformedCommand::InvalidNumber(src.into())),
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
enum Token<'a> {
    /// A run of ascii letters.
    Command(&'a str),
    /// Anything else up to the next separator or command letter.
    Number(&'a str),
}

struct Lexer<'a> {
    src: &'a str,
    pos: usize,
}

impl<'a> Lexer<'a> {
    fn new(src: &'a str) -> Self {
        Self { src, pos: 0 }
    }

    fn peek(&self) -> Option<Token<'a>> {
        self.scan_token().map(|(token, _)| token)
    }

    /// Find the next token, and the position just past it.
    fn scan_token(&self) -> Option<(Token<'a>, usize)> {
        let bytes = self.src.as_bytes();
        let start = self.pos
            + bytes[self.pos..]
                .iter()
                .position(|&b| !is_separator(b))?;
        let is_letter = bytes[start].is_ascii_alphabetic();
        let len = bytes[start..]
            .iter()
            .position(|&b| {
                if is_letter {
                    !b.is_ascii_alphabetic()
                } else {
                    is_separator(b) || (b.is_ascii_alphabetic() && !matches!(b, b'e' | b'E'))
                }
            })
            .unwrap_or(bytes.len() - start);
        let end = start + len;
        // separators and letters are ascii, so these are char boundaries
        let text = &self.src[start..end];
        let token = if is_letter {
            Token::Command(text)
        } else {
            Token::Number(text)
        };
        Some((token, end))
    }
}

impl<'a> Iterator for Lexer<'a> {
    type Item = Token<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let (token, end) = self.scan_token()?;
        self.pos = end;
        Some(token)
    }
}

fn is_separator(byte: u8) -> bool {
    byte.is_ascii_whitespace() || byte == b','
}
