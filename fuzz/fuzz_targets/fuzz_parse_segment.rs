#![no_main]
//! Fuzzes parse_segment, checking that accepted commands round trip through
//! their own formatting.

use libfuzzer_sys::fuzz_target;
use outline_locate::{parse_segment, Command, Point};

fuzz_target!(|data: &str| {
    let Ok(segment) = parse_segment(data, Point::ZERO) else {
        return;
    };
    let points: Vec<Point> = match segment.command() {
        Command::MoveTo(p) | Command::LineTo(p) => vec![p],
        Command::QuadTo(p1, p2) => vec![p1, p2],
        Command::CurveTo(p1, p2, p3) => vec![p1, p2, p3],
    };
    assert!(points.iter().all(|p| p.is_finite()));
    let mut text = segment.kind().to_string();
    for p in &points {
        text.push_str(&format!(" {} {}", p.x, p.y));
    }
    let reparsed = parse_segment(&text, Point::ZERO).unwrap();
    assert_eq!(segment, reparsed);
});
