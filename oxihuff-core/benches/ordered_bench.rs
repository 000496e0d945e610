//! Benchmarks for the ordered sequence.
//!
//! Tree construction inserts one element per distinct byte and then performs
//! `n - 1` rounds of two front removals plus one insertion, so the interesting
//! sizes are the alphabet sizes a byte stream can produce.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use oxihuff_core::OrderedList;
use std::hint::black_box;

/// Pseudo-random weights from a linear congruential generator.
fn weights(count: usize) -> Vec<u64> {
    let mut seed: u64 = 0x123456789ABCDEF0;
    (0..count)
        .map(|_| {
            seed = seed.wrapping_mul(6364136223846793005).wrapping_add(1);
            (seed >> 40) % 10_000
        })
        .collect()
}

fn bench_insert(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_insert");

    for count in [16usize, 64, 256] {
        let data = weights(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| {
                let list: OrderedList<u64> = black_box(data).iter().copied().collect();
                black_box(list.len());
            });
        });
    }

    group.finish();
}

fn bench_merge_rounds(c: &mut Criterion) {
    let mut group = c.benchmark_group("ordered_merge_rounds");

    for count in [16usize, 64, 256] {
        let data = weights(count);
        group.bench_with_input(BenchmarkId::from_parameter(count), &data, |b, data| {
            b.iter(|| {
                let mut list: OrderedList<u64> = data.iter().copied().collect();
                while list.len() > 1 {
                    let low = list.remove_at(0).unwrap();
                    let high = list.remove_at(0).unwrap();
                    list.insert(low + high);
                }
                black_box(list.peek_at(0).copied())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_insert, bench_merge_rounds);
criterion_main!(benches);
