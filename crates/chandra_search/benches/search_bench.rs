use criterion::{Criterion, black_box, criterion_group, criterion_main};
use chandra_ephem::{AnalyticEphemeris, Body};
use chandra_search::{
    IngressConfig, SnapshotConfig, compute_snapshot, find_next_nakshatra_ingress,
    find_next_rashi_ingress,
};
use chandra_time::UtcTime;
use chandra_vedic::AyanamshaModel;

fn ingress_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let aya = AyanamshaModel::default();
    let config = IngressConfig::moon().with_deadline(None);
    let jd = 2_460_896.0;

    let mut group = c.benchmark_group("ingress");
    group.bench_function("next_rashi", |b| {
        b.iter(|| find_next_rashi_ingress(&eph, &aya, Body::Moon, black_box(jd), &config))
    });
    group.bench_function("next_nakshatra", |b| {
        b.iter(|| find_next_nakshatra_ingress(&eph, &aya, Body::Moon, black_box(jd), &config))
    });
    group.finish();
}

fn snapshot_bench(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();
    let config = SnapshotConfig::default();
    let instant = UtcTime::new(2025, 8, 8, 12, 0, 0.0);

    c.bench_function("compute_snapshot", |b| {
        b.iter(|| compute_snapshot(&eph, &config, black_box(&instant)))
    });
}

criterion_group!(benches, ingress_bench, snapshot_bench);
criterion_main!(benches);
