//! Criterion micro-benchmarks for the three kernels on a 1000×1000
//! arena (10⁶ cells) — the scale the simulation is expected to sustain
//! at twenty kernel invocations per ten seconds.

use beeclust_bench::arena;
use beeclust_core::{HeatParams, Heatmap, SeededRng, TickParams};
use beeclust_kernels::{recalculate_heat, swarms, tick};
use criterion::{black_box, criterion_group, criterion_main, Criterion};

fn bench_recalculate_heat_1m(c: &mut Criterion) {
    let grid = arena(1000, 1000, 42);
    let mut heatmap = Heatmap::for_grid(&grid);
    let params = HeatParams::default();

    c.bench_function("recalculate_heat_1m", |b| {
        b.iter(|| {
            recalculate_heat(&mut heatmap, &grid, &params);
            black_box(heatmap.temps()[0]);
        });
    });
}

fn bench_swarms_1m(c: &mut Criterion) {
    let grid = arena(1000, 1000, 42);

    c.bench_function("swarms_1m", |b| {
        b.iter(|| {
            let result = swarms(&grid);
            black_box(result.len());
        });
    });
}

fn bench_tick_1m(c: &mut Criterion) {
    let grid = arena(1000, 1000, 42);
    let mut heatmap = Heatmap::for_grid(&grid);
    let params_heat = HeatParams::default();
    recalculate_heat(&mut heatmap, &grid, &params_heat);

    let params = TickParams::default();
    let mut rng = SeededRng::from_seed(7);
    // Population is conserved, so ticking the same grid repeatedly
    // keeps the workload representative without a per-iteration clone.
    let mut grid = grid;

    c.bench_function("tick_1m", |b| {
        b.iter(|| {
            let moved = tick(&mut grid, &heatmap, &params, &mut rng);
            black_box(moved);
        });
    });
}

criterion_group! {
    name = benches;
    config = Criterion::default().sample_size(10);
    targets = bench_recalculate_heat_1m, bench_swarms_1m, bench_tick_1m
}
criterion_main!(benches);
