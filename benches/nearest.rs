//! Performance measurement for nearest-color queries at varying catalog sizes

// Criterion macros generate undocumented functions
#![allow(missing_docs)]

use capmosaic::color::Color;
use capmosaic::spatial::SpatialColorIndex;
use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::hint::black_box;

fn random_colors(rng: &mut StdRng, count: usize) -> Vec<Color> {
    (0..count)
        .map(|_| {
            Color::new(
                rng.random_range(0..256),
                rng.random_range(0..256),
                rng.random_range(0..256),
            )
        })
        .collect()
}

/// Measures warm query cost as the registered color count grows
fn bench_find(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_color");

    for &size in &[100_usize, 1_000, 5_000] {
        let mut rng = StdRng::seed_from_u64(7);
        let mut index = SpatialColorIndex::new();
        for color in random_colors(&mut rng, size) {
            index.insert(color);
        }
        let queries = random_colors(&mut rng, 512);

        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| {
                for &query in &queries {
                    black_box(index.find(black_box(query), None));
                }
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_find);
criterion_main!(benches);
