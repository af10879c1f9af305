use criterion::{Criterion, black_box, criterion_group, criterion_main};
use chandra_ephem::{AnalyticEphemeris, Body, EphemerisSource};

fn analytic_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let jd = 2_460_896.0;

    let mut group = c.benchmark_group("analytic_ephemeris");
    group.bench_function("moon_longitude", |b| {
        b.iter(|| eph.tropical_longitude(Body::Moon, black_box(jd)))
    });
    group.bench_function("sun_longitude", |b| {
        b.iter(|| eph.tropical_longitude(Body::Sun, black_box(jd)))
    });
    group.bench_function("moon_sun_elongation", |b| {
        b.iter(|| eph.elongation(Body::Moon, Body::Sun, black_box(jd)))
    });
    group.finish();
}

criterion_group!(benches, analytic_bench);
criterion_main!(benches);
