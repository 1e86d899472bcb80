// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

use almanac_time::{set, CalendarGranularity, TimeInterval};
use chrono::{NaiveDate, NaiveDateTime, TimeDelta};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn origin() -> NaiveDateTime {
    NaiveDate::from_ymd_opt(2000, 1, 1)
        .unwrap()
        .and_hms_opt(0, 0, 0)
        .unwrap()
}

/// Builds `n` daily intervals where every fourth boundary leaves a one hour gap,
/// shuffled deterministically so that merging has to sort.
fn fragmented_days(n: usize) -> Vec<TimeInterval> {
    let intervals: Vec<TimeInterval> = (0..n)
        .map(|i| {
            let begin = origin() + TimeDelta::days(i as i64);
            let gap = if i % 4 == 3 { TimeDelta::hours(1) } else { TimeDelta::zero() };
            TimeInterval::new(begin, begin + TimeDelta::days(1) - gap)
        })
        .collect();

    // 7919 is prime, so the stride is coprime with every power of two.
    let stride = 7919 % n;
    (0..n).map(|i| intervals[(i * stride) % n]).collect()
}

fn bench_merge(c: &mut Criterion) {
    let mut group = c.benchmark_group("merge_benchmark");

    for &n in &[64usize, 1_024, 16_384] {
        let intervals = fragmented_days(n);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_with_input(BenchmarkId::new("merge", n), &intervals, |b, intervals| {
            b.iter(|| set::merge(black_box(intervals)))
        });
        group.bench_with_input(
            BenchmarkId::new("to_breakpoints", n),
            &intervals,
            |b, intervals| b.iter(|| set::to_breakpoints(black_box(intervals))),
        );
    }
    group.finish();
}

fn bench_split(c: &mut Criterion) {
    let mut group = c.benchmark_group("split_benchmark");
    let decade = TimeInterval::new(origin(), origin() + TimeDelta::days(3_653));

    for g in CalendarGranularity::ALL {
        group.bench_with_input(BenchmarkId::new("split", g), &g, |b, &g| {
            b.iter(|| black_box(decade).split(g).count())
        });
    }
    group.finish();
}

criterion_group!(benches, bench_merge, bench_split);
criterion_main!(benches);
