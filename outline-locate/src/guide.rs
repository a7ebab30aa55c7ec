//! Finding where a horizontal or vertical guide crosses an outline.

use outline_types::{Axis, Point};

use crate::{
    locate::{Extent, LocateOptions, Locator},
    segment::{Command, Segment},
};

/// A point where a guide crosses a segment of a path.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Crossing {
    /// Index of the segment in the input.
    pub segment: usize,
    /// Parametric position along that segment.
    pub t: f64,
    pub point: Point,
}

/// Collect every point where the guide `axis == value` meets a drawn segment.
///
/// Only the extent of each segment is considered. `MoveTo` segments are not
/// drawn and are skipped, as are segments lying along the guide. A crossing
/// at a shared endpoint is reported once, including the point where a
/// closed subpath returns to its start.
///
/// ```
/// use outline_locate::{guide_crossings, parse_path, Axis, Point};
///
/// let path = parse_path("M 0 0 L 100 0 L 100 100 L 0 0").unwrap();
/// let crossings = guide_crossings(&path, Axis::Y, 50.0);
/// assert_eq!(crossings.len(), 2);
/// assert_eq!(crossings[0].point, Point::new(100.0, 50.0));
/// assert_eq!(crossings[1].point, Point::new(50.0, 50.0));
/// ```
pub fn guide_crossings(segments: &[Segment], axis: Axis, value: f64) -> Vec<Crossing> {
    let mut crossings: Vec<Crossing> = Vec::new();
    if !value.is_finite() {
        return crossings;
    }
    let locator = Locator::new(LocateOptions {
        extent: Extent::Segment,
        ..Default::default()
    });
    // start point of the current subpath, and where its crossings begin
    let mut subpath: Option<(Point, usize)> = None;
    for (index, segment) in segments.iter().enumerate() {
        if let Command::MoveTo(_) = segment.command() {
            subpath = None;
            continue;
        }
        let (start, first) = *subpath.get_or_insert((segment.anchor(), crossings.len()));
        let Ok(solutions) = locator.solve(axis, value, segment.shape()) else {
            continue;
        };
        let closes = segment.endpoint() == start;
        for solution in solutions.as_slice() {
            let seen = |crossing: Option<&Crossing>| {
                crossing.is_some_and(|prev| prev.point == solution.point)
            };
            if seen(crossings.last()) || (closes && seen(crossings.get(first))) {
                continue;
            }
            crossings.push(Crossing {
                segment: index,
                t: solution.t,
                point: solution.point,
            });
        }
    }
    log::trace!("{} crossings for guide {axis}={value}", crossings.len());
    crossings
}
