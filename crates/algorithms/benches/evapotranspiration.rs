//! Benchmarks for reference evapotranspiration

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evapolux_algorithms::meteorology::{reference_et, reference_et_series};
use evapolux_core::MeteorologicalObservation;

fn create_year(days: usize) -> Vec<MeteorologicalObservation> {
    (0..days)
        .map(|d| {
            let season = (d as f64 / 365.0 * std::f64::consts::TAU).cos();
            MeteorologicalObservation {
                tmean: 15.0 + 10.0 * season,
                tmax: 21.0 + 11.0 * season,
                tmin: 9.0 + 9.0 * season,
                rh_mean: 65.0 - 10.0 * season,
                wind_speed_2m: 1.5 + (d % 5) as f64 * 0.4,
                solar_radiation: 16.0 + 9.0 * season,
                elevation_m: 100.0,
            }
        })
        .collect()
}

fn bench_single(c: &mut Criterion) {
    let obs = create_year(1)[0];
    c.bench_function("meteorology/reference_et", |b| {
        b.iter(|| reference_et(black_box(&obs)).unwrap())
    });
}

fn bench_series(c: &mut Criterion) {
    let mut group = c.benchmark_group("meteorology/reference_et_series");
    for days in [365, 3650, 36500] {
        let series = create_year(days);
        group.bench_with_input(BenchmarkId::from_parameter(days), &days, |b, _| {
            b.iter(|| reference_et_series(black_box(&series)).unwrap())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_single, bench_series);
criterion_main!(benches);
