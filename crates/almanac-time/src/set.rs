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

//! # Interval Set Operations
//!
//! Conversions between collections of [`TimeInterval`]s and sorted,
//! deduplicated breakpoint sequences, and merging of exactly adjacent
//! intervals.
//!
//! ```rust
//! use almanac_time::{set, TimeInterval};
//! use chrono::NaiveDate;
//!
//! let d = |m| NaiveDate::from_ymd_opt(2024, m, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
//! let intervals = [
//!     TimeInterval::new(d(1), d(2)),
//!     TimeInterval::new(d(2), d(3)),
//!     TimeInterval::new(d(4), d(5)),
//! ];
//!
//! assert_eq!(
//!     set::merge(&intervals),
//!     vec![TimeInterval::new(d(1), d(3)), TimeInterval::new(d(4), d(5))]
//! );
//! assert_eq!(set::to_breakpoints(&intervals), vec![d(1), d(2), d(3), d(4), d(5)]);
//! ```

use crate::interval::TimeInterval;
use almanac_core::algorithm::{is_sorted_by_key, lower_bound_by};
use chrono::NaiveDateTime;
use log::trace;
use std::collections::BTreeSet;

/// Collects the begins and ends of all non-empty intervals into an
/// ascending, deduplicated sequence.
///
/// Intervals equal to [`TimeInterval::EMPTY`] are skipped.
pub fn to_breakpoints<'a, I>(intervals: I) -> Vec<NaiveDateTime>
where
    I: IntoIterator<Item = &'a TimeInterval>,
{
    let mut points = BTreeSet::new();
    for interval in intervals {
        if interval.is_empty() {
            continue;
        }
        points.insert(interval.begin());
        points.insert(interval.end());
    }
    points.into_iter().collect()
}

/// Builds one interval per adjacent pair of breakpoints.
///
/// `N` breakpoints produce `N - 1` intervals; fewer than two produce none.
/// The breakpoints are used in the given order.
pub fn to_intervals(breakpoints: &[NaiveDateTime]) -> Vec<TimeInterval> {
    breakpoints
        .windows(2)
        .map(|w| TimeInterval::new(w[0], w[1]))
        .collect()
}

/// Merges intervals whose boundaries meet exactly.
///
/// The input is sorted by begin (stably). Walking adjacent pairs, the open
/// run is extended to the next interval's end whenever the current
/// interval's end equals the next interval's begin, and closed otherwise.
/// Near-adjacent intervals are never joined, and overlapping intervals are
/// only joined when their boundaries happen to coincide.
///
/// Fewer than two intervals are returned unchanged.
pub fn merge(intervals: &[TimeInterval]) -> Vec<TimeInterval> {
    if intervals.len() < 2 {
        return intervals.to_vec();
    }

    let mut sorted = intervals.to_vec();
    sorted.sort_by_key(TimeInterval::begin);

    let mut result = Vec::with_capacity(sorted.len());
    let mut run = sorted[0];
    for pair in sorted.windows(2) {
        let (current, next) = (pair[0], pair[1]);
        if current.end() == next.begin() {
            run = TimeInterval::new(run.begin(), next.end());
        } else {
            result.push(run);
            run = next;
        }
    }
    result.push(run);

    trace!("merged {} intervals into {}", intervals.len(), result.len());
    result
}

/// Returns the index of the interval in `intervals` that contains `t`
/// (bounds inclusive), or `None`.
///
/// # Panics
///
/// In debug builds, this function will panic if `intervals` is not sorted
/// by begin.
///
/// # Invariants
///
/// - `intervals` must be sorted by begin and must not overlap, as produced
///   by [`merge`] on non-overlapping input.
pub fn find_containing(intervals: &[TimeInterval], t: NaiveDateTime) -> Option<usize> {
    debug_assert!(
        is_sorted_by_key(intervals, TimeInterval::begin),
        "called `find_containing` with intervals that are not sorted by begin"
    );

    let idx = lower_bound_by(intervals, |iv| iv.end() < t);
    match intervals.get(idx) {
        Some(iv) if iv.contains_point(t, false) => Some(idx),
        _ => None,
    }
}

/// Returns the union of two timestamp collections, deduplicated and ascending.
pub fn concat_distinct_sorted<A, B>(a: A, b: B) -> Vec<NaiveDateTime>
where
    A: IntoIterator<Item = NaiveDateTime>,
    B: IntoIterator<Item = NaiveDateTime>,
{
    a.into_iter()
        .chain(b)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
