//! End to end checks of the public locate API.

use outline_locate::{
    locate, parse_segment, Axis, Extent, LocateError, LocateOptions, Locator, Point, Query,
};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn finds_points_on_straight_segments() {
    init_logging();
    let seg1 = parse_segment("L 50 100", Point::new(0.0, 0.0)).unwrap();
    let seg2 = parse_segment("M 30 -20", Point::new(-20.0, 80.0)).unwrap();

    assert_eq!(locate(&Query::x(20.0, seg1)).unwrap(), "20 40");
    assert_eq!(locate(&Query::y(60.0, seg1)).unwrap(), "30 60");
    assert_eq!(locate(&Query::x(0.0, seg2)).unwrap(), "0 40");
    assert_eq!(locate(&Query::y(0.0, seg2)).unwrap(), "20 0");
}

#[test]
fn finds_points_between_two_points() {
    init_logging();
    let p1 = Point::new(40.0, 80.0);
    let p2 = Point::new(10.0, 20.0);
    let p3 = Point::new(-20.0, 80.0);
    let p4 = Point::new(30.0, -20.0);

    assert_eq!(locate(&Query::x(20.0, [p1, p2])).unwrap(), "20 40");
    assert_eq!(locate(&Query::y(60.0, [p1, p2])).unwrap(), "30 60");
    assert_eq!(locate(&Query::x(0.0, [p3, p4])).unwrap(), "0 40");
    assert_eq!(locate(&Query::y(0.0, [p3, p4])).unwrap(), "20 0");
}

#[test]
fn segment_and_point_pair_agree() {
    let cases = [
        ("L 50 100", Point::new(0.0, 0.0)),
        ("M 30 -20", Point::new(-20.0, 80.0)),
        ("L 10 20", Point::new(40.0, 80.0)),
        ("L -3.5 7.25", Point::new(1.0, -1.0)),
        ("M 10 100", Point::new(10.0, 0.0)),
    ];
    for (command, anchor) in cases {
        let segment = parse_segment(command, anchor).unwrap();
        let pair = (segment.anchor(), segment.endpoint());
        for axis in Axis::ALL {
            for value in [-30.0, 0.0, 0.5, 10.0, 20.0, 60.0, 123.456] {
                assert_eq!(
                    locate(&Query::new(axis, value, segment)),
                    locate(&Query::new(axis, value, pair)),
                    "{command} from {anchor:?}, {axis}={value}"
                );
            }
        }
    }
}

#[test]
fn round_trips_through_parameter() {
    let lines = [
        (Point::new(0.0, 0.0), Point::new(50.0, 100.0)),
        (Point::new(-20.0, 80.0), Point::new(30.0, -20.0)),
        (Point::new(40.0, 80.0), Point::new(10.0, 20.0)),
        (Point::new(0.25, -7.0), Point::new(1000.0, 3.5)),
    ];
    let locator = Locator::default();
    for (p0, p1) in lines {
        for t in [-2.0, -0.5, 0.0, 0.1, 0.3, 0.5, 0.75, 1.0, 1.5, 10.0] {
            let expected = p0.lerp(p1, t);
            for axis in Axis::ALL {
                let found = locator
                    .locate_point(&Query::new(axis, expected.get(axis), (p0, p1)))
                    .unwrap();
                assert_eq!(found.get(axis), expected.get(axis));
                let other = axis.cross();
                assert!(
                    (found.get(other) - expected.get(other)).abs() < 1e-9,
                    "{p0:?}->{p1:?} at t={t}: {found:?} != {expected:?}"
                );
            }
        }
    }
}

#[test]
fn degenerate_axes() {
    let vertical = parse_segment("L 10 100", Point::new(10.0, 0.0)).unwrap();
    assert_eq!(
        locate(&Query::x(10.0, vertical)),
        Err(LocateError::AmbiguousSolution)
    );
    assert_eq!(
        locate(&Query::x(20.0, vertical)),
        Err(LocateError::NoSolution)
    );

    let horizontal = [Point::new(0.0, 5.0), Point::new(100.0, 5.0)];
    assert_eq!(
        locate(&Query::y(5.0, horizontal)),
        Err(LocateError::AmbiguousSolution)
    );
    assert_eq!(
        locate(&Query::y(6.0, horizontal)),
        Err(LocateError::NoSolution)
    );
}

#[test]
fn bounded_locator_rejects_off_segment_points() {
    let locator = Locator::new(LocateOptions {
        extent: Extent::Segment,
        ..Default::default()
    });
    let seg = parse_segment("L 50 100", Point::new(0.0, 0.0)).unwrap();
    assert_eq!(locator.locate(&Query::x(20.0, seg)).unwrap(), "20 40");
    assert!(matches!(
        locator.locate(&Query::x(60.0, seg)),
        Err(LocateError::OutOfRange { .. })
    ));
}

#[test]
fn locator_is_shareable_across_threads() {
    let locator = Locator::default();
    let seg = parse_segment("L 50 100", Point::new(0.0, 0.0)).unwrap();
    let results = std::thread::scope(|scope| {
        let handles = (0..4)
            .map(|i| {
                scope.spawn(move || {
                    locator
                        .locate(&Query::x(10.0 * i as f64, seg))
                        .unwrap()
                        .to_string()
                })
            })
            .collect::<Vec<_>>();
        handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .collect::<Vec<_>>()
    });
    assert_eq!(results, ["0 0", "10 20", "20 40", "30 60"]);
}
