use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use matvec::matrix::naive::matvec_naive;
use matvec::{multiply, multiply_parallel};
use std::hint::black_box;

fn bench_gemv(c: &mut Criterion) {
    let mut group = c.benchmark_group("gemv");

    for size in [256usize, 1024, 4096] {
        let (m, n) = (size, size);
        let a: Vec<i32> = (0..m * n).map(|i| (i % 100) as i32).collect();
        let x: Vec<i32> = (0..n).map(|i| (i % 100) as i32).collect();
        let mut y = vec![0; m];

        group.throughput(Throughput::Elements((m * n) as u64));

        group.bench_with_input(BenchmarkId::new("scalar", size), &size, |b, _| {
            b.iter(|| matvec_naive(black_box(&a), black_box(&x), &mut y, m, n))
        });

        group.bench_with_input(BenchmarkId::new("auto", size), &size, |b, _| {
            b.iter(|| multiply(black_box(&a), black_box(&x), &mut y, m, n).unwrap())
        });

        group.bench_with_input(BenchmarkId::new("parallel_4", size), &size, |b, _| {
            b.iter(|| multiply_parallel(black_box(&a), black_box(&x), &mut y, m, n, 4).unwrap())
        });
    }

    group.finish();
}

criterion_group!(benches, bench_gemv);
criterion_main!(benches);
