use benches::{wrapped, SIZES};
use criterion::criterion_group;
use criterion::criterion_main;
use criterion::BenchmarkId;
use criterion::Criterion;
use std::hint::black_box;

fn add(c: &mut Criterion) {
    let mut bgroup = c.benchmark_group("add");

    for &n in SIZES {
        let mut buf = wrapped(n);
        bgroup.bench_with_input(BenchmarkId::new("slotring", n), &n, |b, &n| {
            b.iter(|| {
                for v in 0..n as u64 {
                    buf.add(black_box(v));
                }
            })
        });
    }

    bgroup.finish();
}

fn index(c: &mut Criterion) {
    let mut bgroup = c.benchmark_group("index");

    for &n in SIZES {
        let buf = wrapped(n);
        bgroup.bench_with_input(BenchmarkId::new("modulo", n), &n, |b, &n| {
            b.iter(|| {
                let mut sum = 0u64;
                // Walk two laps so half the reads wrap.
                for i in 0..2 * n {
                    sum = sum.wrapping_add(buf[black_box(i)]);
                }
                sum
            })
        });
        bgroup.bench_with_input(BenchmarkId::new("iter", n), &n, |b, _| {
            b.iter(|| buf.iter().fold(0u64, |acc, v| acc.wrapping_add(*v)))
        });
    }

    bgroup.finish();
}

fn resize(c: &mut Criterion) {
    let mut bgroup = c.benchmark_group("resize");

    for &n in SIZES {
        bgroup.bench_with_input(BenchmarkId::new("double", n), &n, |b, &n| {
            b.iter_batched(
                || wrapped(n),
                |mut buf| {
                    buf.resize(2 * n).ok();
                    buf
                },
                criterion::BatchSize::SmallInput,
            )
        });
    }

    bgroup.finish();
}

criterion_group!(benches, add, index, resize);
criterion_main!(benches);
