#![no_main]
//! Fuzzes the locator with arbitrary geometry and targets.
//!
//! Checks that nothing panics and that any located point has the requested
//! coordinate.

use libfuzzer_sys::{arbitrary, fuzz_target};
use outline_locate::{Command, Extent, LocateOptions, Locator, Point, Query, Segment};

#[derive(Debug, arbitrary::Arbitrary)]
enum Shape {
    Pair,
    Move,
    Line,
    Quad,
    Curve,
}

#[derive(Debug, arbitrary::Arbitrary)]
struct Input {
    shape: Shape,
    coords: [f64; 8],
    x: Option<f64>,
    y: Option<f64>,
    bounded: bool,
    max_decimals: u8,
}

fuzz_target!(|input: Input| {
    let c = input.coords;
    let p = |i: usize| Point::new(c[i], c[i + 1]);
    let on = match input.shape {
        Shape::Pair => (p(0), p(2)).into(),
        Shape::Move => Segment::new(Command::MoveTo(p(2)), p(0)).into(),
        Shape::Line => Segment::new(Command::LineTo(p(2)), p(0)).into(),
        Shape::Quad => Segment::new(Command::QuadTo(p(2), p(4)), p(0)).into(),
        Shape::Curve => Segment::new(Command::CurveTo(p(2), p(4), p(6)), p(0)).into(),
    };
    let query = Query {
        x: input.x,
        y: input.y,
        on,
    };
    let locator = Locator::new(LocateOptions {
        extent: if input.bounded {
            Extent::Segment
        } else {
            Extent::Line
        },
        max_decimals: input.max_decimals as usize,
    });
    let _ = locator.locate(&query);
    if let Ok(solutions) = locator.locate_all(&query) {
        let (axis, value) = query.constraint().unwrap();
        assert!(!solutions.is_empty());
        for solution in solutions {
            assert_eq!(solution.point.get(axis), value);
        }
    }
});
