//! Path segments.

use kurbo::{CubicBez, ParamCurve, QuadBez};
use outline_types::{Axis, CommandKind, Point};

/// A path command together with the points it carries.
///
/// The current point of the path is not part of the command; see
/// [`Segment`].
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Command {
    /// Begin a new subpath at the given point.
    MoveTo(Point),
    /// Straight line to the given point.
    LineTo(Point),
    /// Quadratic bezier with a control point, ending at the second point.
    QuadTo(Point, Point),
    /// Cubic bezier with two control points, ending at the third point.
    CurveTo(Point, Point, Point),
}

impl Command {
    /// The kind of this command.
    pub fn kind(&self) -> CommandKind {
        match self {
            Command::MoveTo(_) => CommandKind::MoveTo,
            Command::LineTo(_) => CommandKind::LineTo,
            Command::QuadTo(..) => CommandKind::QuadTo,
            Command::CurveTo(..) => CommandKind::CurveTo,
        }
    }

    /// The point this command ends at.
    pub fn end(&self) -> Point {
        match self {
            Command::MoveTo(end)
            | Command::LineTo(end)
            | Command::QuadTo(_, end)
            | Command::CurveTo(_, _, end) => *end,
        }
    }
}

/// An immutable segment: a command and the anchor point it starts from.
///
/// The anchor is typically the endpoint of the previous segment in an
/// outline.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    command: Command,
    anchor: Point,
}

impl Segment {
    /// Create a new segment starting at `anchor`.
    pub const fn new(command: Command, anchor: Point) -> Self {
        Self { command, anchor }
    }

    /// Create a straight line segment from `anchor` to `end`.
    pub const fn line(anchor: Point, end: Point) -> Self {
        Self::new(Command::LineTo(end), anchor)
    }

    pub fn command(&self) -> Command {
        self.command
    }

    pub fn kind(&self) -> CommandKind {
        self.command.kind()
    }

    pub fn anchor(&self) -> Point {
        self.anchor
    }

    pub fn endpoint(&self) -> Point {
        self.command.end()
    }

    /// Returns the point at parameter `t`.
    ///
    /// Straight segments extrapolate for `t` outside `[0, 1]`.
    pub fn eval(&self, t: f64) -> Point {
        self.shape().eval(t)
    }

    pub(crate) fn shape(&self) -> Shape {
        let p0 = self.anchor;
        match self.command {
            Command::MoveTo(end) | Command::LineTo(end) => Shape::Line(p0, end),
            Command::QuadTo(p1, p2) => Shape::Quad(p0, p1, p2),
            Command::CurveTo(p1, p2, p3) => Shape::Cubic(p0, p1, p2, p3),
        }
    }
}

/// The geometry of a segment, with the anchor folded in.
#[derive(Copy, Clone, PartialEq, Debug)]
pub(crate) enum Shape {
    Line(Point, Point),
    Quad(Point, Point, Point),
    Cubic(Point, Point, Point, Point),
}

impl Shape {
    pub(crate) fn eval(&self, t: f64) -> Point {
        match *self {
            Shape::Line(p0, p1) => p0.lerp(p1, t),
            Shape::Quad(p0, p1, p2) => QuadBez::new(p0, p1, p2).eval(t).into(),
            Shape::Cubic(p0, p1, p2, p3) => CubicBez::new(p0, p1, p2, p3).eval(t).into(),
        }
    }

    /// Power basis coefficients of the coordinate on `axis`, lowest order
    /// first, so that `coord(t) = c[0] + c[1] t + c[2] t^2 + c[3] t^3`.
    pub(crate) fn coefficients(&self, axis: Axis) -> [f64; 4] {
        match *self {
            Shape::Line(p0, p1) => {
                let (a, b) = (p0.get(axis), p1.get(axis));
                [a, b - a, 0.0, 0.0]
            }
            Shape::Quad(p0, p1, p2) => {
                let (a, b, c) = (p0.get(axis), p1.get(axis), p2.get(axis));
                [a, 2.0 * (b - a), a - 2.0 * b + c, 0.0]
            }
            Shape::Cubic(p0, p1, p2, p3) => {
                let (a, b, c, d) = (p0.get(axis), p1.get(axis), p2.get(axis), p3.get(axis));
                [
                    a,
                    3.0 * (b - a),
                    3.0 * (a - 2.0 * b + c),
                    d - 3.0 * c + 3.0 * b - a,
                ]
            }
        }
    }
}
