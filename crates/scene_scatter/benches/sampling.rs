mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;
use scene_scatter::sampling::{AnnulusScatter, PlacementSampling};

const COUNTS: [usize; 4] = [30, 300, 3_000, 30_000];

fn sampling_annulus_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("sampling/annulus");

    for &count in &COUNTS {
        let strategy = AnnulusScatter::new(count, 4.0, 4.0)
            .with_height_jitter(0.4)
            .with_rotation_jitter(0.2);
        group.throughput(common::elements_throughput(count));

        let mut rng = StdRng::seed_from_u64(0xA11CE_u64 ^ (count as u64));

        group.bench_with_input(BenchmarkId::from_parameter(count), &count, |b, _| {
            b.iter(|| {
                let placements = strategy.generate(&mut rng).unwrap();
                black_box(placements.len());
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = sampling_annulus_benches
}
criterion_main!(benches);
