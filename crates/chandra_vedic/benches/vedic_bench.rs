use criterion::{Criterion, black_box, criterion_group, criterion_main};
use chandra_vedic::{
    AyanamshaModel, nakshatra_from_longitude, nakshatra_from_tropical, rashi_from_longitude,
    rashi_from_tropical, tithi_from_elongation,
};

fn ayanamsha_bench(c: &mut Criterion) {
    let model = AyanamshaModel::default();
    let jd = 2_460_896.0;

    let mut group = c.benchmark_group("ayanamsha");
    group.bench_function("lahiri_linear", |b| {
        b.iter(|| model.ayanamsha_deg(black_box(jd)))
    });
    group.bench_function("sidereal_longitude", |b| {
        b.iter(|| model.sidereal_longitude(black_box(123.456), black_box(jd)))
    });
    group.finish();
}

fn zodiac_bench(c: &mut Criterion) {
    let model = AyanamshaModel::default();
    let tropical_lon = 123.456;
    let jd = 2_460_896.0;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(tropical_lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(tropical_lon)))
    });
    group.bench_function("rashi_from_tropical", |b| {
        b.iter(|| rashi_from_tropical(black_box(tropical_lon), &model, black_box(jd)))
    });
    group.bench_function("nakshatra_from_tropical", |b| {
        b.iter(|| nakshatra_from_tropical(black_box(tropical_lon), &model, black_box(jd)))
    });
    group.bench_function("tithi_from_elongation", |b| {
        b.iter(|| tithi_from_elongation(black_box(211.75)))
    });
    group.finish();
}

criterion_group!(benches, ayanamsha_bench, zodiac_bench);
criterion_main!(benches);
