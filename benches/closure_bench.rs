//! Benchmarks for the TKE closure and tendency computation.
//!
//! Run with: `cargo bench --bench closure_bench`

use criterion::{BenchmarkId, Criterion, black_box, criterion_group, criterion_main};
use scm_rs::{MellorYamada15, StateProfile, VerticalGrid, scalar_tendency};

fn make_setup(nz: usize) -> (VerticalGrid, StateProfile) {
    let grid = VerticalGrid::uniform(0.0, 2000.0, nz).unwrap();
    let z = grid.heights();
    let temperature: Vec<f64> = z.iter().map(|&zi| 290.0 - 0.0065 * zi).collect();
    let wind_u: Vec<f64> = z.iter().map(|&zi| 5.0 + 0.005 * zi).collect();
    let wind_v: Vec<f64> = z.iter().map(|&zi| 1.0 + 0.001 * zi).collect();
    let pressure: Vec<f64> = z
        .iter()
        .map(|&zi| 100_000.0 * (1.0 - 0.0065 * zi / 288.15).powf(5.255))
        .collect();
    let state =
        StateProfile::with_uniform_tke(temperature, wind_u, wind_v, pressure, 0.1, &grid).unwrap();
    (grid, state)
}

fn bench_closure_update(c: &mut Criterion) {
    let mut group = c.benchmark_group("closure_update");
    for nz in [20, 100, 500] {
        let (grid, state) = make_setup(nz);
        let closure = MellorYamada15::default();
        group.bench_with_input(BenchmarkId::from_parameter(nz), &nz, |b, _| {
            b.iter(|| {
                let mut s = state.clone();
                closure.update(black_box(&mut s), &grid, 1.0);
                s
            })
        });
    }
    group.finish();
}

fn bench_scalar_tendency(c: &mut Criterion) {
    let mut group = c.benchmark_group("scalar_tendency");
    for nz in [20, 100, 500] {
        let (grid, state) = make_setup(nz);
        let frozen = state.wind_u.clone();
        group.bench_with_input(BenchmarkId::from_parameter(nz), &nz, |b, _| {
            b.iter(|| {
                scalar_tendency(
                    black_box(&state.temperature),
                    &state.tke,
                    &frozen,
                    &grid,
                )
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_closure_update, bench_scalar_tendency);
criterion_main!(benches);
