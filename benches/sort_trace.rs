// SPDX-License-Identifier: MPL-2.0
//! Benchmark for building the merge-sort animation trace.

use criterion::{criterion_group, criterion_main, Criterion};
use iced_folio::sort;
use std::hint::black_box;

fn bench_merge_sort_trace(c: &mut Criterion) {
    let bars = sort::generate(sort::BAR_COUNT, sort::BAR_MIN, sort::BAR_MAX);

    c.bench_function("merge_sort_trace_100", |b| {
        b.iter(|| sort::merge_sort_trace(black_box(&bars)))
    });

    let reversed: Vec<u32> = (0..sort::BAR_COUNT as u32).rev().collect();
    c.bench_function("merge_sort_trace_reversed_100", |b| {
        b.iter(|| sort::merge_sort_trace(black_box(&reversed)))
    });
}

criterion_group!(benches, bench_merge_sort_trace);
criterion_main!(benches);
