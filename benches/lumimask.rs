use criterion::{black_box, criterion_group, criterion_main, Criterion};

use lumitools::lumimask::{json_summary, lumi_list};
use lumitools::types::{PairSet, RunBounds};

// Runs with a few gaps per run, similar in shape to a certification mask
fn sample_pairs(runs: u64, lumis: u64) -> PairSet {
    (0..runs)
        .flat_map(|run| {
            (1..=lumis)
                .filter(move |lumi| (lumi + run) % 97 != 0)
                .map(move |lumi| (300_000 + run, lumi))
        })
        .collect()
}

pub fn lumimask_conversion(c: &mut Criterion) {
    let pairs = sample_pairs(200, 2000);
    let mask = json_summary(pairs.clone());

    c.bench_function("json_summary", |b| {
        b.iter(|| json_summary(black_box(pairs.iter().copied())))
    });
    c.bench_function("lumi_list", |b| {
        b.iter(|| lumi_list(black_box(&mask), RunBounds::unbounded()).unwrap())
    });
    c.bench_function("lumi_list_bounded", |b| {
        b.iter(|| lumi_list(black_box(&mask), RunBounds::new(Some(300_050), Some(300_100))).unwrap())
    });
}

criterion_group!(
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = lumimask_conversion
);
criterion_main!(benches);
