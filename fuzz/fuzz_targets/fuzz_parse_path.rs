#![no_main]
//! Fuzzes parse_path and the guide crossings computed on the result.

use libfuzzer_sys::{arbitrary, fuzz_target};
use outline_locate::{guide_crossings, parse_path, Axis};

#[derive(Debug, arbitrary::Arbitrary)]
struct Input<'a> {
    path: &'a str,
    vertical: bool,
    value: f64,
}

fuzz_target!(|input: Input| {
    let Ok(segments) = parse_path(input.path) else {
        return;
    };
    for pair in segments.windows(2) {
        assert_eq!(pair[0].endpoint(), pair[1].anchor());
    }
    let axis = if input.vertical { Axis::X } else { Axis::Y };
    for crossing in guide_crossings(&segments, axis, input.value) {
        assert!(crossing.segment < segments.len());
        assert!((0.0..=1.0).contains(&crossing.t));
        assert_eq!(crossing.point.get(axis), input.value);
    }
});
