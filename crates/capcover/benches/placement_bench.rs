//! Criterion benchmarks for placements and patch alignment.

use capcover::placement::rand::{draw_unit_direction, ReplayToken};
use capcover::placement::{cap_centers, pole, rotation_aligning};
use criterion::{criterion_group, criterion_main, BatchSize, BenchmarkId, Criterion};

fn bench_placement(c: &mut Criterion) {
    let mut group = c.benchmark_group("placement");
    for &n in &[4usize, 6, 8, 12] {
        group.bench_with_input(BenchmarkId::new("cap_centers", n), &n, |b, &n| {
            b.iter(|| cap_centers(1.0, n).unwrap());
        });
    }

    let mut index = 0u64;
    group.bench_function("rotation_aligning", |b| {
        b.iter_batched(
            || {
                index += 1;
                draw_unit_direction(ReplayToken { seed: 11, index })
            },
            |target| rotation_aligning(pole(), target),
            BatchSize::SmallInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_placement);
criterion_main!(benches);
