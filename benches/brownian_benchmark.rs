//! Benchmarks for Wiener path generation

use brownian_sim::{rng::create_rng, WienerProcess};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn benchmark_path_generation(c: &mut Criterion) {
    let process = WienerProcess::new();
    let horizon = 1.0;
    let n_steps = 1000;

    let mut group = c.benchmark_group("Wiener Path Generation");

    for n_paths in [1000, 10000].iter() {
        group.bench_with_input(
            BenchmarkId::new("Sequential", n_paths),
            n_paths,
            |b, &n| {
                b.iter(|| {
                    let mut rng = create_rng(Some(42));
                    process.sample_paths(&mut rng, horizon, n_steps, n).unwrap()
                });
            },
        );

        group.bench_with_input(BenchmarkId::new("Parallel", n_paths), n_paths, |b, &n| {
            b.iter(|| process.sample_paths_parallel(horizon, n_steps, n).unwrap());
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_path_generation);
criterion_main!(benches);
