//! Benchmarks for imagery corrections

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evapolux_algorithms::imagery::illumination_correction_grid;
use ndarray::Array2;

fn create_band(size: usize, base: f64) -> Array2<f64> {
    Array2::from_shape_fn((size, size), |(row, col)| {
        base + ((row * 7 + col * 13) % 200) as f64 * 1e-3
    })
}

fn bench_illumination_grid(c: &mut Criterion) {
    let mut group = c.benchmark_group("imagery/illumination");
    for size in [256, 512, 1024, 2048] {
        let band = create_band(size, 0.05);
        group.bench_with_input(BenchmarkId::from_parameter(size), &size, |b, _| {
            b.iter(|| illumination_correction_grid(black_box(&band), black_box(37.5)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_illumination_grid);
criterion_main!(benches);
