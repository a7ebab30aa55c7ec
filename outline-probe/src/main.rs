//! Locate points on outline segments from the command line.
//!
//! Each invocation resolves a single query and prints the result as `X Y`.
//! Set `RUST_LOG=debug` to see why a query failed.

use std::process::ExitCode;

use clap::Parser;
use outline_locate::{
    guide_crossings, parse_path, parse_segment, Axis, CoordinateString, Error, Extent, Geometry,
    LocateError, LocateOptions, Locator, Point, Query, DEFAULT_MAX_DECIMALS,
};

#[derive(clap::Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Reject points beyond the endpoints of straight segments
    #[arg(long, global = true)]
    bounded: bool,
    /// The most fractional digits to print for each coordinate
    #[arg(long, global = true, default_value_t = DEFAULT_MAX_DECIMALS)]
    max_decimals: usize,
    #[command(subcommand)]
    command: Command,
}

/// The coordinate to look for. Exactly one must be given.
#[derive(clap::Args, Debug)]
struct Target {
    /// Find the point with this x coordinate
    #[arg(long, allow_negative_numbers = true)]
    x: Option<f64>,
    /// Find the point with this y coordinate
    #[arg(long, allow_negative_numbers = true)]
    y: Option<f64>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Locate a point on a single path command, such as "L 50 100"
    Segment {
        /// The path command
        command: String,
        /// The point the segment starts from, as "X Y"
        #[arg(long, value_parser = parse_point, default_value = "0 0", allow_hyphen_values = true)]
        anchor: Point,
        #[command(flatten)]
        target: Target,
    },
    /// Locate a point on the line through two points, each given as "X Y"
    Between {
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        start: Point,
        #[arg(value_parser = parse_point, allow_hyphen_values = true)]
        end: Point,
        #[command(flatten)]
        target: Target,
    },
    /// Print every point where a guide crosses a path
    Guide {
        /// Path data, such as "M 0 0 L 100 0 L 100 100"
        path: String,
        #[command(flatten)]
        target: Target,
    },
}

impl Target {
    fn query(&self, on: impl Into<Geometry>) -> Query {
        Query {
            x: self.x,
            y: self.y,
            on: on.into(),
        }
    }

    fn constraint(&self) -> Result<(Axis, f64), LocateError> {
        match (self.x, self.y) {
            (Some(x), None) if x.is_finite() => Ok((Axis::X, x)),
            (None, Some(y)) if y.is_finite() => Ok((Axis::Y, y)),
            _ => Err(LocateError::InvalidQuery),
        }
    }
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::debug!("failed query: {args:?}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<Vec<String>, Error> {
    let options = LocateOptions {
        extent: if args.bounded {
            Extent::Segment
        } else {
            Extent::Line
        },
        max_decimals: args.max_decimals,
    };
    let locator = Locator::new(options);
    match &args.command {
        Command::Segment {
            command,
            anchor,
            target,
        } => {
            let segment = parse_segment(command, *anchor)?;
            let found = locator.locate(&target.query(segment))?;
            Ok(vec![found.into()])
        }
        Command::Between { start, end, target } => {
            let found = locator.locate(&target.query((*start, *end)))?;
            Ok(vec![found.into()])
        }
        Command::Guide { path, target } => {
            let segments = parse_path(path)?;
            let (axis, value) = target.constraint()?;
            let crossings = guide_crossings(&segments, axis, value);
            if crossings.is_empty() {
                log::info!("guide {axis}={value} does not cross the path");
            }
            Ok(crossings
                .iter()
                .map(|crossing| {
                    let point = CoordinateString::new(crossing.point, options.max_decimals);
                    format!("{}: {point}", crossing.segment)
                })
                .collect())
        }
    }
}

/// Parse a point given as two numbers separated by whitespace or a comma.
fn parse_point(src: &str) -> Result<Point, String> {
    let mut coords = src
        .split(|c: char| c.is_ascii_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .map(|s| match s.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(format!("invalid coordinate '{s}'")),
        });
    match (coords.next(), coords.next(), coords.next()) {
        (Some(x), Some(y), None) => Ok(Point::new(x?, y?)),
        _ => Err(format!("expected a point as 'X Y', found '{src}'")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn probe(argv: &[&str]) -> Result<Vec<String>, Error> {
        let args = Args::try_parse_from(std::iter::once("outline-probe").chain(argv.iter().copied()))
            .unwrap();
        run(&args)
    }

    #[test]
    fn points() {
        assert_eq!(parse_point("0 0"), Ok(Point::new(0.0, 0.0)));
        assert_eq!(parse_point("-20,80"), Ok(Point::new(-20.0, 80.0)));
        assert_eq!(parse_point(" 1.5 ,  -2 "), Ok(Point::new(1.5, -2.0)));
        assert!(parse_point("1").is_err());
        assert!(parse_point("1 2 3").is_err());
        assert!(parse_point("1 nan").is_err());
    }

    #[test]
    fn segment() {
        assert_eq!(probe(&["segment", "L 50 100", "--x", "20"]).unwrap(), ["20 40"]);
        assert_eq!(
            probe(&["segment", "M 30 -20", "--anchor", "-20 80", "--y", "0"]).unwrap(),
            ["20 0"]
        );
        assert_eq!(
            probe(&["segment", "L 50", "--x", "20"]),
            Err(Error::Parse(outline_locate::MalformedCommand::MissingArguments {
                command: outline_locate::CommandKind::LineTo,
                expected: 2,
                found: 1,
            }))
        );
    }

    #[test]
    fn between() {
        assert_eq!(
            probe(&["between", "40 80", "10 20", "--y", "60"]).unwrap(),
            ["30 60"]
        );
        assert_eq!(
            probe(&["between", "-20 80", "30 -20", "--x", "0"]).unwrap(),
            ["0 40"]
        );
    }

    #[test]
    fn needs_exactly_one_axis() {
        let invalid = Err(Error::Locate(LocateError::InvalidQuery));
        assert_eq!(probe(&["between", "0 0", "1 1"]), invalid);
        assert_eq!(probe(&["between", "0 0", "1 1", "--x", "1", "--y", "1"]), invalid);
        assert_eq!(probe(&["guide", "M 0 0 L 1 1"]), invalid);
    }

    #[test]
    fn global_options() {
        assert_eq!(
            probe(&["segment", "L 3 1", "--x", "1", "--max-decimals", "3"]).unwrap(),
            ["1 0.333"]
        );
        assert_eq!(
            probe(&["--bounded", "segment", "L 50 100", "--x", "-10"]),
            Err(Error::Locate(LocateError::OutOfRange { t: -0.2 }))
        );
        assert_eq!(
            probe(&["segment", "L 50 100", "--x", "-10"]).unwrap(),
            ["-10 -20"]
        );
    }

    #[test]
    fn guide() {
        assert_eq!(
            probe(&["guide", "M 0 0 L 100 0 L 100 100 L 0 0", "--y", "50"]).unwrap(),
            ["2: 100 50", "3: 50 50"]
        );
        assert!(probe(&["guide", "M 0 0 L 10 10", "--x", "50"])
            .unwrap()
            .is_empty());
    }
}
