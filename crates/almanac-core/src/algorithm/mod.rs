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

//! # Sorted Slice Algorithms
//!
//! Small search and ordering helpers used on sorted interval and range
//! collections.

use std::cmp::Ordering;

/// Checks whether `items` is sorted in non-decreasing order of `key`.
///
/// Returns `true` for empty and single-element slices.
#[inline]
pub fn is_sorted_by_key<T, K, F>(items: &[T], mut key: F) -> bool
where
    F: FnMut(&T) -> K,
    K: PartialOrd,
{
    items.windows(2).all(|w| key(&w[0]) <= key(&w[1]))
}

/// Checks whether `items` is sorted in strictly increasing order.
#[inline]
pub fn is_strictly_ascending<T>(items: &[T]) -> bool
where
    T: PartialOrd,
{
    items.windows(2).all(|w| w[0] < w[1])
}

/// Lower bound search: returns the index of the first element for which
/// `is_less` returns `false`.
///
/// # Invariants
///
/// - `items` must be partitioned by `is_less`: every element for which it
///   returns `true` precedes every element for which it returns `false`.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::algorithm::lower_bound_by;
///
/// let v = [1, 3, 3, 7];
/// assert_eq!(lower_bound_by(&v, |x| *x < 3), 1);
/// assert_eq!(lower_bound_by(&v, |x| *x < 8), 4);
/// ```
#[inline]
pub fn lower_bound_by<T, F>(items: &[T], mut is_less: F) -> usize
where
    F: FnMut(&T) -> bool,
{
    let mut lo: usize = 0;
    let mut hi: usize = items.len();

    while lo < hi {
        let mid = lo + ((hi - lo) >> 1);
        debug_assert!(
            mid < items.len(),
            "`lower_bound_by` computed mid index out of bounds"
        );
        // SAFETY: mid is always in bounds because lo < hi <= items.len(),
        // therefore mid < items.len()
        if is_less(unsafe { items.get_unchecked(mid) }) {
            lo = mid + 1;
        } else {
            hi = mid;
        }
    }
    lo
}

/// Binary search with a three-way comparator, returning the index of the
/// first element for which `cmp` yields `Ordering::Equal`.
///
/// `items` must be ordered consistently with `cmp`: all `Less` elements,
/// then all `Equal`, then all `Greater`.
#[inline]
pub fn find_by<T, F>(items: &[T], mut cmp: F) -> Option<usize>
where
    F: FnMut(&T) -> Ordering,
{
    let idx = lower_bound_by(items, |item| cmp(item) == Ordering::Less);
    match items.get(idx) {
        Some(item) if cmp(item) == Ordering::Equal => Some(idx),
        _ => None,
    }
}
