use criterion::{black_box, criterion_group, criterion_main, Criterion};
use outline_locate::{guide_crossings, parse_path, parse_segment, Axis, Locator, Point, Query};

pub fn locate_benchmark(c: &mut Criterion) {
    let locator = Locator::default();
    let line = parse_segment("L 50 100", Point::new(0.0, 0.0)).unwrap();
    let cubic = parse_segment("C 0 100 100 100 100 0", Point::new(0.0, 0.0)).unwrap();

    c.bench_function("locate line", |b| {
        b.iter(|| locator.locate(black_box(&Query::x(20.0, line))))
    });
    c.bench_function("locate cubic", |b| {
        b.iter(|| locator.locate_all(black_box(&Query::y(60.0, cubic))))
    });
}

pub fn guide_benchmark(c: &mut Criterion) {
    let path = parse_path(
        "M 0 0 L 100 0 Q 150 50 100 100 C 80 120 20 120 0 100 L 0 0 \
         M 20 20 L 80 20 L 80 80 L 20 80 L 20 20",
    )
    .unwrap();
    c.bench_function("guide crossings", |b| {
        b.iter(|| guide_crossings(black_box(&path), Axis::Y, black_box(50.0)))
    });
}

criterion_group!(benches, locate_benchmark, guide_benchmark);
criterion_main!(benches);
