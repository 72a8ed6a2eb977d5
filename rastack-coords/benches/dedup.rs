use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use ndarray::{Array, ArrayD};
use rastack_coords::deduplicate_axes;

fn constant_array(rows: usize, cols: usize) -> ArrayD<i64> {
    Array::from_elem((rows, cols), 7).into_dyn()
}

fn varying_array(rows: usize, cols: usize) -> ArrayD<i64> {
    Array::from_shape_fn((rows, cols), |(i, j)| (i * cols + j) as i64).into_dyn()
}

fn bench_deduplicate_axes(c: &mut Criterion) {
    let mut group = c.benchmark_group("deduplicate_axes");

    for size in [64usize, 256, 1024] {
        let constant = constant_array(size, size);
        group.bench_with_input(BenchmarkId::new("constant", size), &constant, |b, arr| {
            b.iter(|| deduplicate_axes(black_box(arr)));
        });

        let varying = varying_array(size, size);
        group.bench_with_input(BenchmarkId::new("varying", size), &varying, |b, arr| {
            b.iter(|| deduplicate_axes(black_box(arr)));
        });
    }

    group.finish();
}

criterion_group!(benches, bench_deduplicate_axes);
criterion_main!(benches);
