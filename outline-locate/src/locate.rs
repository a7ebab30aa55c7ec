//! Resolving a single-axis constraint to a point on some geometry.

use outline_types::{Axis, Point};

use crate::{
    error::LocateError,
    format::{CoordinateString, DEFAULT_MAX_DECIMALS},
    segment::{Segment, Shape},
};

/// Slack allowed on the parameter range when solutions must lie on the
/// segment, to absorb rounding at the endpoints.
const T_TOLERANCE: f64 = 1e-9;

/// The geometry a query is resolved against.
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Geometry {
    /// A segment, including its anchor.
    Segment(Segment),
    /// The straight line through two points.
    Points(Point, Point),
}

impl Geometry {
    fn shape(&self) -> Shape {
        match self {
            Geometry::Segment(segment) => segment.shape(),
            Geometry::Points(p0, p1) => Shape::Line(*p0, *p1),
        }
    }
}

impl From<Segment> for Geometry {
    fn from(value: Segment) -> Self {
        Geometry::Segment(value)
    }
}

impl From<(Point, Point)> for Geometry {
    fn from((p0, p1): (Point, Point)) -> Self {
        Geometry::Points(p0, p1)
    }
}

impl From<[Point; 2]> for Geometry {
    fn from([p0, p1]: [Point; 2]) -> Self {
        Geometry::Points(p0, p1)
    }
}

/// A request to find the point on some geometry with a given coordinate.
///
/// Exactly one of `x` and `y` must be set; anything else is reported as
/// [`LocateError::InvalidQuery`].
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Query {
    pub x: Option<f64>,
    pub y: Option<f64>,
    pub on: Geometry,
}

impl Query {
    /// Create a query constraining `axis` to `value`.
    pub fn new(axis: Axis, value: f64, on: impl Into<Geometry>) -> Self {
        let on = on.into();
        match axis {
            Axis::X => Self {
                x: Some(value),
                y: None,
                on,
            },
            Axis::Y => Self {
                x: None,
                y: Some(value),
                on,
            },
        }
    }

    /// Find the point on `on` whose x coordinate is `value`.
    pub fn x(value: f64, on: impl Into<Geometry>) -> Self {
        Self::new(Axis::X, value, on)
    }

    /// Find the point on `on` whose y coordinate is `value`.
    pub fn y(value: f64, on: impl Into<Geometry>) -> Self {
        Self::new(Axis::Y, value, on)
    }

    /// Returns the constrained axis and its target value.
    pub fn constraint(&self) -> Result<(Axis, f64), LocateError> {
        let (axis, value) = match (self.x, self.y) {
            (Some(x), None) => (Axis::X, x),
            (None, Some(y)) => (Axis::Y, y),
            _ => return Err(LocateError::InvalidQuery),
        };
        if !value.is_finite() {
            return Err(LocateError::InvalidQuery);
        }
        Ok((axis, value))
    }
}

/// How far along straight geometry solutions may lie.
///
/// Curves are never extrapolated, so this only affects straight segments and
/// point pairs.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Extent {
    /// Treat the two points as defining an infinite line.
    #[default]
    Line,
    /// Only accept points between the two endpoints.
    Segment,
}

/// Options for a [`Locator`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LocateOptions {
    /// Whether straight geometry is extended past its endpoints.
    pub extent: Extent,
    /// Fractional digits kept when formatting a result.
    pub max_decimals: usize,
}

impl Default for LocateOptions {
    fn default() -> Self {
        Self {
            extent: Extent::Line,
            max_decimals: DEFAULT_MAX_DECIMALS,
        }
    }
}

/// One point satisfying a query.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Solution {
    /// Parametric position along the geometry; `0` is the start.
    pub t: f64,
    pub point: Point,
}

/// Resolves queries to points.
///
/// The locator holds only its options, and can be shared freely.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct Locator {
    options: LocateOptions,
}

impl Locator {
    pub fn new(options: LocateOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &LocateOptions {
        &self.options
    }

    /// Resolve the query and format the result as `"X Y"`.
    ///
    /// If a curve crosses the target coordinate more than once, the crossing
    /// closest to the start of the segment is returned.
    pub fn locate(&self, query: &Query) -> Result<CoordinateString, LocateError> {
        self.locate_point(query)
            .map(|point| CoordinateString::new(point, self.options.max_decimals))
    }

    /// Resolve the query to an unformatted point.
    pub fn locate_point(&self, query: &Query) -> Result<Point, LocateError> {
        let (axis, value) = query.constraint()?;
        let solutions = self.solve(axis, value, query.on.shape())?;
        Ok(solutions.first().point)
    }

    /// Resolve the query to every point that satisfies it, ordered by `t`.
    pub fn locate_all(&self, query: &Query) -> Result<Vec<Solution>, LocateError> {
        let (axis, value) = query.constraint()?;
        let solutions = self.solve(axis, value, query.on.shape())?;
        Ok(solutions.as_slice().to_vec())
    }

    pub(crate) fn solve(
        &self,
        axis: Axis,
        value: f64,
        shape: Shape,
    ) -> Result<Solutions, LocateError> {
        let coeffs = shape.coefficients(axis);
        let result = match shape {
            Shape::Line(..) => self.solve_line(value, coeffs),
            Shape::Quad(..) | Shape::Cubic(..) => solve_curve(value, coeffs),
        };
        log::trace!("{axis}={value} on {shape:?}: {result:?}");
        let mut solutions = Solutions::default();
        for t in result?.as_slice() {
            // the constrained coordinate is exact by definition
            let point = shape.eval(*t).with(axis, value);
            if !point.is_finite() {
                log::debug!("point at t={t} overflows");
                continue;
            }
            solutions.push(Solution { t: *t, point });
        }
        if solutions.is_empty() {
            return Err(LocateError::NoSolution);
        }
        Ok(solutions)
    }

    fn solve_line(&self, value: f64, [start, delta, ..]: [f64; 4]) -> Result<Roots, LocateError> {
        if delta == 0.0 {
            return Err(degenerate(start, value));
        }
        if !delta.is_finite() {
            log::debug!("extent of line starting at {start} overflows");
            return Err(LocateError::NoSolution);
        }
        let t = (value - start) / delta;
        if !t.is_finite() {
            log::debug!("no finite solution for {value} (delta {delta})");
            return Err(LocateError::NoSolution);
        }
        if self.options.extent == Extent::Segment {
            if !(-T_TOLERANCE..=1.0 + T_TOLERANCE).contains(&t) {
                return Err(LocateError::OutOfRange { t });
            }
            return Ok(Roots::one(t.clamp(0.0, 1.0)));
        }
        Ok(Roots::one(t))
    }
}

/// Resolve the query with the default options and format the result.
///
/// ```
/// use outline_locate::{locate, parse_segment, Point, Query};
///
/// let segment = parse_segment("L 50 100", Point::new(0.0, 0.0)).unwrap();
/// assert_eq!(locate(&Query::x(20.0, segment)).unwrap(), "20 40");
/// assert_eq!(locate(&Query::y(60.0, segment)).unwrap(), "30 60");
/// ```
pub fn locate(query: &Query) -> Result<CoordinateString, LocateError> {
    Locator::default().locate(query)
}

/// The outcome for geometry with no extent on the query axis, sitting at
/// `start`.
fn degenerate(start: f64, value: f64) -> LocateError {
    if start == value {
        log::debug!("geometry lies on {value}; every point matches");
        LocateError::AmbiguousSolution
    } else {
        log::debug!("geometry fixed at {start}, cannot reach {value}");
        LocateError::NoSolution
    }
}

/// Solve `coord(t) == value` for a bezier, keeping roots in `[0, 1]`.
fn solve_curve(value: f64, [c0, c1, c2, c3]: [f64; 4]) -> Result<Roots, LocateError> {
    if c1 == 0.0 && c2 == 0.0 && c3 == 0.0 {
        return Err(degenerate(c0, value));
    }
    let mut roots = Roots::default();
    for t in kurbo::common::solve_cubic(c0 - value, c1, c2, c3) {
        if !(-T_TOLERANCE..=1.0 + T_TOLERANCE).contains(&t) {
            continue;
        }
        roots.insert(t.clamp(0.0, 1.0));
    }
    if roots.is_empty() {
        return Err(LocateError::NoSolution);
    }
    Ok(roots)
}

/// Parameter values solving a query, sorted and without duplicates.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Roots {
    values: [f64; 3],
    len: usize,
}

impl Roots {
    fn one(t: f64) -> Self {
        Self {
            values: [t, 0.0, 0.0],
            len: 1,
        }
    }

    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn as_slice(&self) -> &[f64] {
        &self.values[..self.len]
    }

    /// Insert in sorted position, merging with a root within tolerance.
    fn insert(&mut self, t: f64) {
        if self.len == self.values.len()
            || self
                .as_slice()
                .iter()
                .any(|existing| (existing - t).abs() <= T_TOLERANCE)
        {
            return;
        }
        let pos = self.as_slice().partition_point(|existing| *existing < t);
        self.values.copy_within(pos..self.len, pos + 1);
        self.values[pos] = t;
        self.len += 1;
    }
}

/// The points solving a query, ordered by `t`. Never empty.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub(crate) struct Solutions {
    values: [Solution; 3],
    len: usize,
}

impl Default for Solution {
    fn default() -> Self {
        Self {
            t: 0.0,
            point: Point::ZERO,
        }
    }
}

impl Solutions {
    fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn push(&mut self, solution: Solution) {
        self.values[self.len] = solution;
        self.len += 1;
    }

    pub(crate) fn first(&self) -> &Solution {
        &self.values[0]
    }

    pub(crate) fn as_slice(&self) -> &[Solution] {
        &self.values[..self.len]
    }
}
