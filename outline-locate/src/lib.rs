//! Locate points on outline segments.
//!
//! Given a segment of a path (or just two points) and a target value for one
//! coordinate, this crate finds the point on that geometry with the target
//! coordinate. This is the query behind snapping guides and alignment helpers
//! in an outline editor.
//!
//! ```
//! use outline_locate::{locate, parse_segment, Point, Query};
//!
//! let segment = parse_segment("M 30 -20", Point::new(-20.0, 80.0))?;
//! assert_eq!(locate(&Query::x(0.0, segment))?, "0 40");
//! assert_eq!(locate(&Query::y(0.0, segment))?, "20 0");
//!
//! // a pair of points works the same way
//! let on = (Point::new(40.0, 80.0), Point::new(10.0, 20.0));
//! assert_eq!(locate(&Query::y(60.0, on))?, "30 60");
//! # Ok::<_, outline_locate::Error>(())
//! ```
//!
//! Straight geometry is treated as an infinite line unless the locator is
//! configured with [`Extent::Segment`]. Quadratic and cubic segments are
//! solved in closed form and never extrapolated.
//!
//! Everything here is pure: no call holds state, so queries can run from any
//! number of threads at once.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

mod error;
mod format;
mod guide;
mod locate;
mod parse;
mod segment;

pub use error::{Error, LocateError, MalformedCommand};
pub use format::{round_coordinate, CoordinateString, DEFAULT_MAX_DECIMALS};
pub use guide::{guide_crossings, Crossing};
pub use locate::{locate, Extent, Geometry, LocateOptions, Locator, Query, Solution};
pub use parse::{parse_path, parse_segment};
pub use segment::{Command, Segment};

/// Expose the scalar types crate.
pub extern crate outline_types as types;

pub use types::{Axis, CommandKind, Point};

#[cfg(all(test, feature = "serde"))]
mod serde_test {
    use super::*;

    #[test]
    fn segment_round_trip() {
        let segment = Segment::new(
            Command::QuadTo(Point::new(50.0, 100.0), Point::new(100.0, 0.0)),
            Point::new(1.5, -2.0),
        );
        let json = serde_json::to_string(&segment).unwrap();
        let loaded: Segment = serde_json::from_str(&json).unwrap();
        assert_eq!(segment, loaded);
    }

    #[test]
    fn options_fill_defaults() {
        let options: LocateOptions = serde_json::from_str(r#"{"extent":"Segment"}"#).unwrap();
        assert_eq!(
            options,
            LocateOptions {
                extent: Extent::Segment,
                max_decimals: DEFAULT_MAX_DECIMALS,
            }
        );
    }
}
