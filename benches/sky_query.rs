use criterion::{black_box, criterion_group, criterion_main, Criterion};
use skyglass::{sky, GeoPosition, Instant, SkyQuery};

fn bench_query(c: &mut Criterion) {
    let instant = Instant::parse_rfc3339("2024-03-20T21:00:00Z").unwrap();
    let observer = GeoPosition::new(51.48, 0.0).unwrap();

    c.bench_function("sky_query_per_frame", |b| {
        b.iter(|| sky::query(black_box(&instant), black_box(&observer)))
    });

    let planets_only = SkyQuery::new().with_stars(false);
    c.bench_function("sky_query_planets_and_moon", |b| {
        b.iter(|| planets_only.query(black_box(&instant), black_box(&observer)))
    });
}

criterion_group!(benches, bench_query);
criterion_main!(benches);
