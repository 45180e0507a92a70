//! Benchmarks for random board generation.
//!
//! Measures the full generation loop (random cell draws, validation,
//! commits) at two clue densities:
//!
//! - **`generator_default`**: the default 20-clue target.
//! - **`generator_dense`**: a 30-clue target, where validation rejects a
//!   larger share of draws.
//!
//! # Test Data
//!
//! Uses three fixed seeds to ensure reproducibility while covering
//! multiple cases:
//!
//! - **`seed_0`**: `c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1`
//! - **`seed_1`**: `a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3`
//! - **`seed_2`**: `1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef`
//!
//! # Running
//!
//! ```sh
//! cargo bench --bench generator
//! ```

use std::{hint, str::FromStr as _, time::Duration};

use criterion::{
    BatchSize, BenchmarkId, Criterion, PlottingBackend, criterion_group, criterion_main,
};
use sudoscope_generator::{BoardGenerator, GeneratorSeed};

const SEEDS: [&str; 3] = [
    "c1d44bd6afaf8af64f126546884e19298acbdc33c3924a28136715de946ef3f1",
    "a2b3c4d5e6f7a8b9c0d1e2f3a4b5c6d7e8f9a0b1c2d3e4f5a6b7c8d9e0f1a2b3",
    "1234567890abcdef1234567890abcdef1234567890abcdef1234567890abcdef",
];

fn bench_generator_default(c: &mut Criterion) {
    let generator = BoardGenerator::default();

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GeneratorSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_default", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

fn bench_generator_dense(c: &mut Criterion) {
    let generator = BoardGenerator::new(30);

    for (i, seed) in SEEDS.into_iter().enumerate() {
        let seed = GeneratorSeed::from_str(seed).unwrap();
        c.bench_with_input(
            BenchmarkId::new("generator_dense", format!("seed_{i}")),
            &seed,
            |b, seed| {
                b.iter_batched(
                    || hint::black_box(*seed),
                    |seed| generator.generate_with_seed(seed),
                    BatchSize::SmallInput,
                );
            },
        );
    }
}

criterion_group!(
    name = benches;
    config =
        Criterion::default()
            .plotting_backend(PlottingBackend::Plotters)
            .measurement_time(Duration::from_secs(10));
    targets =
        bench_generator_default,
        bench_generator_dense
);
criterion_main!(benches);
