use benches::wrapped;
use iai_callgrind::{library_benchmark, library_benchmark_group, main};
use slotring::RingBuffer;
use std::hint::black_box;

const N: usize = 100_000;

#[library_benchmark]
#[bench::small(args = (16), setup = wrapped)]
#[bench::large(args = (65536), setup = wrapped)]
fn bench_add(mut buf: RingBuffer<u64>) -> RingBuffer<u64> {
    for v in 0..N as u64 {
        buf.add(black_box(v));
    }
    buf
}

#[library_benchmark]
#[bench::small(args = (16), setup = wrapped)]
#[bench::large(args = (65536), setup = wrapped)]
fn bench_index(buf: RingBuffer<u64>) -> u64 {
    let mut sum = 0u64;
    for i in 0..N {
        sum = sum.wrapping_add(buf[black_box(i)]);
    }
    sum
}

library_benchmark_group!(
    name = ring;
    benchmarks = bench_add, bench_index
);

main!(library_benchmark_groups = ring);
