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

//! # Range Partitioning
//!
//! Splits a numeric span into consecutive [`NumericRange`] buckets, either
//! by a fixed bucket size or by a target bucket count.
//!
//! Bounds are rounded to [`PartitionOptions::accuracy`] fractional digits
//! (ties to even) before iterating, and the loop condition compares the
//! rounded cursor against the rounded upper bound, so accumulated
//! floating-point drift does not produce a sliver bucket at the end. The
//! last bucket is clipped to the upper bound.
//!
//! Degenerate spans yield an empty list rather than an error:
//!
//! - either bound is the unbounded sentinel (`f64::MIN` / `f64::MAX`),
//! - either bound is NaN or infinite,
//! - the bounds collapse to the same value.
//!
//! Sizes and counts that could never terminate, or that would produce more
//! than [`PartitionOptions::max_buckets`] buckets, are rejected with
//! [`PartitionError::InvalidArgument`].
//!
//! ```rust
//! use almanac_range::{partition, NumericRange};
//!
//! let buckets = partition::by_fixed_size(0.0, 10.0, 3.0).unwrap();
//! assert_eq!(
//!     buckets,
//!     vec![
//!         NumericRange::new(0.0, 3.0),
//!         NumericRange::new(3.0, 6.0),
//!         NumericRange::new(6.0, 9.0),
//!         NumericRange::new(9.0, 10.0),
//!     ]
//! );
//! ```

use crate::{
    error::{PartitionError, Result},
    range::NumericRange,
};
use almanac_core::num::{
    constants::FloatBounds,
    float::{eps_equals_default, eps_equals_nan_default, has_actual_value},
    round::round_half_even,
};
use log::{debug, trace};
use serde::{Deserialize, Serialize};

/// The number of fractional digits partition bounds are rounded to by default.
pub const DEFAULT_ACCURACY: u32 = 3;

/// The default upper limit on the number of buckets a single call may produce.
pub const DEFAULT_MAX_BUCKETS: usize = 1 << 24;

/// Tunables for [`Partitioner`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct PartitionOptions {
    /// Fractional digits the bounds and the loop cursor are rounded to.
    pub accuracy: u32,
    /// Calls that would produce more buckets than this fail instead of
    /// allocating.
    pub max_buckets: usize,
}

impl Default for PartitionOptions {
    #[inline]
    fn default() -> Self {
        Self {
            accuracy: DEFAULT_ACCURACY,
            max_buckets: DEFAULT_MAX_BUCKETS,
        }
    }
}

/// How a span is divided.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PartitionRule {
    /// Divide into this many equally sized buckets.
    ByCount(usize),
    /// Divide into buckets of this width; the last one may be shorter.
    BySize(f64),
}

impl std::fmt::Display for PartitionRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::ByCount(count) => write!(f, "by count ({count})"),
            Self::BySize(size) => write!(f, "by size ({size})"),
        }
    }
}

/// Divides numeric spans into buckets according to [`PartitionOptions`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Partitioner {
    options: PartitionOptions,
}

impl Partitioner {
    /// Creates a partitioner with the default options.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a partitioner with the given options.
    #[inline]
    pub fn with_options(options: PartitionOptions) -> Self {
        Self { options }
    }

    /// Returns the options of this partitioner.
    #[inline]
    pub fn options(&self) -> PartitionOptions {
        self.options
    }

    #[inline]
    fn digits(&self) -> i32 {
        i32::try_from(self.options.accuracy).unwrap_or(i32::MAX)
    }

    /// Divides `[min, max]` into consecutive buckets of width `size`.
    ///
    /// The bounds may be given in either order. The last bucket is clipped
    /// to the upper bound.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidArgument`] if `size` is not a
    /// positive number, if it is too small to move the cursor at the
    /// magnitude of the bounds, or if `span / size` exceeds
    /// [`PartitionOptions::max_buckets`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_range::partition::{PartitionOptions, Partitioner};
    ///
    /// let coarse = Partitioner::with_options(PartitionOptions {
    ///     accuracy: 0,
    ///     ..Default::default()
    /// });
    /// let buckets = coarse.by_fixed_size(0.4, 2.6, 1.0).unwrap();
    /// // Bounds were rounded to 0 and 3.
    /// assert_eq!(buckets.len(), 3);
    /// assert_eq!(buckets[2].max(), 3.0);
    /// ```
    pub fn by_fixed_size(&self, min: f64, max: f64, size: f64) -> Result<Vec<NumericRange>> {
        if size.is_nan() || size <= 0.0 {
            return Err(PartitionError::invalid("size", size, "must be a positive number"));
        }
        if is_unbounded(min, max) {
            debug!("partition of [{min}, {max}] skipped: unbounded sentinel bound");
            return Ok(Vec::new());
        }
        if !has_actual_value(min) || !has_actual_value(max) {
            debug!("partition of [{min}, {max}] skipped: non-finite bound");
            return Ok(Vec::new());
        }

        let digits = self.digits();
        let a = round_half_even(min, digits);
        let b = round_half_even(max, digits);
        let (lo, hi) = (a.min(b), a.max(b));
        if eps_equals_default(lo, hi) {
            debug!("partition of [{min}, {max}] skipped: span collapses at accuracy {digits}");
            return Ok(Vec::new());
        }

        // Divided separately so that wide spans do not overflow.
        let estimate = hi / size - lo / size;
        let limit = self.options.max_buckets;
        if estimate.floor() > limit as f64 {
            return Err(too_many_buckets(size));
        }

        let mut ranges = Vec::with_capacity((estimate.ceil() as usize).min(limit));
        let mut cursor = lo;
        while round_half_even(cursor, digits) < hi {
            let next = cursor + size;
            if next <= cursor {
                return Err(PartitionError::invalid(
                    "size",
                    size,
                    "too small to advance across the span",
                ));
            }
            if ranges.len() == limit {
                return Err(too_many_buckets(size));
            }
            ranges.push(NumericRange::new(cursor, next.min(hi)));
            cursor = next;
        }

        trace!(
            "partitioned [{lo}, {hi}] into {} buckets of size {size}",
            ranges.len()
        );
        Ok(ranges)
    }

    /// Divides `[min, max]` into `count` equally sized buckets.
    ///
    /// The bucket size is `|max - min| / count`, computed as
    /// `hi / count - lo / count` so that spans wider than `f64::MAX` still
    /// divide. The absolute span is used on purpose: reversed bounds
    /// partition exactly like ordered ones instead of yielding a negative
    /// size. The actual number of buckets can differ slightly from `count`
    /// once the bounds are rounded.
    ///
    /// # Errors
    ///
    /// Returns [`PartitionError::InvalidArgument`] if `count` is zero or
    /// exceeds [`PartitionOptions::max_buckets`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_range::partition::Partitioner;
    ///
    /// let buckets = Partitioner::new().by_count(10.0, 0.0, 5).unwrap();
    /// assert_eq!(buckets.len(), 5);
    /// assert_eq!(buckets[0].length(), 2.0);
    /// ```
    pub fn by_count(&self, min: f64, max: f64, count: usize) -> Result<Vec<NumericRange>> {
        if count == 0 {
            return Err(PartitionError::invalid("count", 0.0, "must be at least one"));
        }
        if count > self.options.max_buckets {
            return Err(PartitionError::invalid(
                "count",
                count as f64,
                "exceeds the configured bucket limit",
            ));
        }
        if is_unbounded(min, max) {
            debug!("partition of [{min}, {max}] skipped: unbounded sentinel bound");
            return Ok(Vec::new());
        }
        if eps_equals_nan_default(min, max) {
            debug!("partition of [{min}, {max}] skipped: equal bounds");
            return Ok(Vec::new());
        }
        if !has_actual_value(min) || !has_actual_value(max) {
            debug!("partition of [{min}, {max}] skipped: non-finite bound");
            return Ok(Vec::new());
        }

        let (lo, hi) = (min.min(max), min.max(max));
        let size = hi / count as f64 - lo / count as f64;
        self.by_fixed_size(min, max, size)
    }

    /// Divides `[min, max]` according to `rule`.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`by_count`](Self::by_count) and
    /// [`by_fixed_size`](Self::by_fixed_size).
    pub fn create(&self, rule: PartitionRule, min: f64, max: f64) -> Result<Vec<NumericRange>> {
        match rule {
            PartitionRule::ByCount(count) => self.by_count(min, max, count),
            PartitionRule::BySize(size) => self.by_fixed_size(min, max, size),
        }
    }
}

#[inline]
fn too_many_buckets(size: f64) -> PartitionError {
    PartitionError::invalid(
        "size",
        size,
        "would produce more buckets than the configured limit",
    )
}

#[inline]
fn is_unbounded(min: f64, max: f64) -> bool {
    min == <f64 as FloatBounds>::LOWEST || max == <f64 as FloatBounds>::HIGHEST
}

/// [`Partitioner::by_fixed_size`] with the default options.
///
/// # Errors
///
/// See [`Partitioner::by_fixed_size`].
#[inline]
pub fn by_fixed_size(min: f64, max: f64, size: f64) -> Result<Vec<NumericRange>> {
    Partitioner::new().by_fixed_size(min, max, size)
}

/// [`Partitioner::by_count`] with the default options.
///
/// # Errors
///
/// See [`Partitioner::by_count`].
#[inline]
pub fn by_count(min: f64, max: f64, count: usize) -> Result<Vec<NumericRange>> {
    Partitioner::new().by_count(min, max, count)
}

/// [`Partitioner::create`] with the default options.
///
/// # Errors
///
/// See [`Partitioner::create`].
#[inline]
pub fn create(rule: PartitionRule, min: f64, max: f64) -> Result<Vec<NumericRange>> {
    Partitioner::new().create(rule, min, max)
}
