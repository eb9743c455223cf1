mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use disc_scatter::noise::{NoiseAlgorithm, NoiseField, NoiseSpace};
use glam::{Vec2, Vec3};
use rand::rngs::StdRng;
use rand::SeedableRng;

const SIDE: usize = 128;

const ALGORITHMS: [NoiseAlgorithm; 4] = [
    NoiseAlgorithm::Perlin,
    NoiseAlgorithm::Simplex,
    NoiseAlgorithm::Cellular2x2,
    NoiseAlgorithm::Cellular3x3,
];

fn positions() -> Vec<Vec2> {
    (0..SIDE * SIDE)
        .map(|i| Vec2::new((i % SIDE) as f32 * 0.37, (i / SIDE) as f32 * 0.37))
        .collect()
}

fn noise_kernel_benches(c: &mut Criterion) {
    let positions = positions();
    let mut group = c.benchmark_group("noise/kernel");
    group.throughput(common::elements_throughput(positions.len()));

    for algorithm in ALGORITHMS {
        let Some(kernel) = algorithm.kernel() else {
            continue;
        };
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &algorithm,
            |b, _| {
                b.iter(|| {
                    let mut acc = 0.0_f32;
                    for &p in &positions {
                        acc += kernel.evaluate(p);
                    }
                    black_box(acc);
                });
            },
        );
    }

    group.finish();
}

fn noise_field_benches(c: &mut Criterion) {
    let positions = positions();
    let mut group = c.benchmark_group("noise/field_sample_2d");
    group.throughput(common::elements_throughput(positions.len()));

    for algorithm in ALGORITHMS {
        let field = NoiseField::new(algorithm)
            .with_space(NoiseSpace::World)
            .with_range(0.5, 2.0)
            .with_threshold(0.3)
            .with_luck_threshold(0.1);
        let offset = Vec3::new(100.0, 0.0, -40.0);
        let mut rng = StdRng::seed_from_u64(0x5EED);

        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{algorithm:?}")),
            &algorithm,
            |b, _| {
                b.iter(|| {
                    let mut accepted = 0usize;
                    for &p in &positions {
                        if field.sample_2d(p, offset, &mut rng).accepted {
                            accepted += 1;
                        }
                    }
                    black_box(accepted);
                });
            },
        );
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = noise_kernel_benches, noise_field_benches
}
criterion_main!(benches);
