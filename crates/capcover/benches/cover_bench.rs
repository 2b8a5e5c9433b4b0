//! Criterion benchmarks for the coverage-balance solver.
//! Focus: tolerance sweep (iteration count grows as log2(R/tol)) and the
//! full per-row geometry derivation.

use capcover::cover::{cap_geometry, optimal_cap_height, CoverCfg};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

fn bench_cover(c: &mut Criterion) {
    let mut group = c.benchmark_group("cover");
    for &tol in &[1e-3, 1e-6, 1e-9, 1e-12] {
        group.bench_with_input(
            BenchmarkId::new("optimal_cap_height", format!("{tol:e}")),
            &tol,
            |b, &tol| {
                let cfg = CoverCfg { tolerance: tol };
                b.iter(|| optimal_cap_height(1.0, 6, cfg));
            },
        );
    }
    for &n in &[2usize, 6, 20] {
        group.bench_with_input(BenchmarkId::new("cap_geometry", n), &n, |b, &n| {
            b.iter(|| cap_geometry(1.0, n, CoverCfg::default()));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_cover);
criterion_main!(benches);
