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

//! # Numeric Ranges
//!
//! `NumericRange` is an immutable `[min, max]` pair of `f64` bounds. The
//! constructor orders its inputs, so `min <= max` always holds for
//! constructed values.
//!
//! ## The unbounded sentinel
//!
//! [`NumericRange::EMPTY`] is `(f64::MIN, f64::MAX)`, the widest possible
//! range, and is also the [`Default`]. It stands for "no constraint", not for
//! a degenerate range. Renderings substitute `<` and `>` for the extreme
//! bounds.
//!
//! ## Equality and ordering
//!
//! Equality compares both bounds with [`eps_equals_default`], which is exact
//! equality in practice. Ordering is a separate, overlap-based three-way
//! comparison exposed as [`NumericRange::overlap_cmp`]: two ranges compare
//! `Equal` whenever they overlap, so it is not a total order and is not
//! provided through `PartialOrd`.

use almanac_core::{
    algorithm::find_by,
    num::{constants::FloatBounds, float::eps_equals_default, round::round_half_away},
};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

const DEFAULT_DISPLAY_PRECISION: i32 = 2;
const SEPARATOR: &str = " - ";

/// A closed range of `f64` values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(from = "RangeBounds")]
pub struct NumericRange {
    min: f64,
    max: f64,
}

/// Deserialization goes through the ordering constructor.
#[derive(Deserialize)]
struct RangeBounds {
    min: f64,
    max: f64,
}

impl From<RangeBounds> for NumericRange {
    #[inline]
    fn from(bounds: RangeBounds) -> Self {
        Self::new(bounds.min, bounds.max)
    }
}

impl NumericRange {
    /// The unbounded sentinel `(f64::MIN, f64::MAX)`.
    pub const EMPTY: Self = Self {
        min: <f64 as FloatBounds>::LOWEST,
        max: <f64 as FloatBounds>::HIGHEST,
    };

    /// Creates a new `NumericRange`, swapping the bounds if `a > b`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_range::NumericRange;
    ///
    /// let r = NumericRange::new(10.0, 2.0);
    /// assert_eq!(r.min(), 2.0);
    /// assert_eq!(r.max(), 10.0);
    /// ```
    #[inline]
    pub fn new(a: f64, b: f64) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Returns the lower bound.
    #[inline]
    pub const fn min(&self) -> f64 {
        self.min
    }

    /// Returns the upper bound.
    #[inline]
    pub const fn max(&self) -> f64 {
        self.max
    }

    /// Returns `max - min`. This is infinite for [`NumericRange::EMPTY`].
    #[inline]
    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// Returns `true` if this range equals [`NumericRange::EMPTY`].
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns `true` if the lower bound is the `f64::MIN` sentinel.
    #[inline]
    pub fn is_unbounded_below(&self) -> bool {
        self.min == <f64 as FloatBounds>::LOWEST
    }

    /// Returns `true` if the upper bound is the `f64::MAX` sentinel.
    #[inline]
    pub fn is_unbounded_above(&self) -> bool {
        self.max == <f64 as FloatBounds>::HIGHEST
    }

    /// Returns `true` if `min <= value <= max`. NaN is never contained.
    #[inline]
    pub fn contains(&self, value: f64) -> bool {
        !value.is_nan() && self.min <= value && value <= self.max
    }

    /// Three-way comparison by position, where overlapping ranges are `Equal`.
    ///
    /// - `Less` if `self` ends at or before `other` begins.
    /// - `Greater` if `self` begins strictly after `other` ends.
    /// - `Equal` otherwise.
    ///
    /// The rule is asymmetric on shared boundaries: `self` is treated as
    /// `[min, max)` on the left and closed on the right of `other`. With
    /// touching buckets every value falls into exactly one of them, the one
    /// it starts. As a consequence, `b.overlap_cmp(&a) == Greater` only holds
    /// for strictly separated ranges (`a.max < b.min`); touching ranges
    /// compare `Less` one way and `Equal` the other.
    ///
    /// Because `Equal` means "overlapping" rather than "identical", this
    /// relation is not transitive; sorted lookups keyed on it find *an*
    /// overlapping range. Use [`overlaps`](Self::overlaps) for a symmetric
    /// test.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_range::NumericRange;
    /// # use std::cmp::Ordering;
    ///
    /// let a = NumericRange::new(0.0, 2.0);
    /// let b = NumericRange::new(2.0, 4.0);
    /// let c = NumericRange::new(5.0, 6.0);
    /// assert_eq!(a.overlap_cmp(&b), Ordering::Less);
    /// assert_eq!(b.overlap_cmp(&a), Ordering::Equal);
    /// assert_eq!(c.overlap_cmp(&b), Ordering::Greater);
    /// ```
    #[inline]
    pub fn overlap_cmp(&self, other: &Self) -> Ordering {
        if self.max <= other.min {
            Ordering::Less
        } else if self.min > other.max {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    }

    /// Returns `true` if the ranges share more than a boundary.
    ///
    /// Unlike [`overlap_cmp`](Self::overlap_cmp) this is symmetric.
    #[inline]
    pub fn overlaps(&self, other: &Self) -> bool {
        self.min < other.max && other.min < self.max
    }

    /// Renders the range as `"<min> - <max>"`, rounding each finite bound to
    /// `precision` fractional digits with ties away from zero.
    ///
    /// Negative precision is treated as zero. The sentinel bounds render as
    /// `<` and `>`.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_range::NumericRange;
    ///
    /// assert_eq!(NumericRange::new(0.125, 2.5).to_string_with_precision(0), "0 - 3");
    /// assert_eq!(NumericRange::EMPTY.to_string_with_precision(2), "< - >");
    /// ```
    pub fn to_string_with_precision(&self, precision: i32) -> String {
        let digits = precision.max(0);
        self.to_string_with(|v| {
            let rounded = round_half_away(v, digits);
            // Avoid rendering "-0".
            if rounded == 0.0 {
                "0".to_owned()
            } else {
                rounded.to_string()
            }
        })
    }

    /// Renders the range as `"<min> - <max>"` with a caller-supplied number
    /// formatter. The sentinel bounds render as `<` and `>`.
    pub fn to_string_with<F>(&self, mut format: F) -> String
    where
        F: FnMut(f64) -> String,
    {
        let min = if self.is_unbounded_below() {
            "<".to_owned()
        } else {
            format(self.min)
        };
        let max = if self.is_unbounded_above() {
            ">".to_owned()
        } else {
            format(self.max)
        };
        format!("{min}{SEPARATOR}{max}")
    }
}

/// Searches `sorted` for the range that `target` falls into and returns its
/// index.
///
/// The slice must be ordered by [`NumericRange::overlap_cmp`] with no two
/// elements overlapping, as produced by the partitioner. Elements behave as
/// `[min, max)` buckets: a point on a shared boundary belongs to the bucket
/// it starts, and the upper bound of the last bucket is not found. If the
/// target spans several elements, the index of the first one is returned.
///
/// # Examples
///
/// ```rust
/// # use almanac_range::{find_overlapping, NumericRange};
///
/// let buckets = [
///     NumericRange::new(0.0, 2.0),
///     NumericRange::new(2.0, 4.0),
///     NumericRange::new(5.0, 6.0),
/// ];
/// assert_eq!(find_overlapping(&buckets, &NumericRange::new(2.5, 3.0)), Some(1));
/// assert_eq!(find_overlapping(&buckets, &NumericRange::new(2.0, 2.0)), Some(1));
/// assert_eq!(find_overlapping(&buckets, &NumericRange::new(4.2, 4.8)), None);
/// ```
pub fn find_overlapping(sorted: &[NumericRange], target: &NumericRange) -> Option<usize> {
    find_by(sorted, |range| range.overlap_cmp(target))
}

impl Default for NumericRange {
    /// Returns [`NumericRange::EMPTY`].
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl PartialEq for NumericRange {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        eps_equals_default(self.min, other.min) && eps_equals_default(self.max, other.max)
    }
}

impl std::fmt::Display for NumericRange {
    /// Uses the formatter's precision if given, otherwise two digits.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let precision = match f.precision() {
            Some(p) => i32::try_from(p).unwrap_or(i32::MAX),
            None => DEFAULT_DISPLAY_PRECISION,
        };
        f.write_str(&self.to_string_with_precision(precision))
    }
}

impl From<(f64, f64)> for NumericRange {
    #[inline]
    fn from((a, b): (f64, f64)) -> Self {
        Self::new(a, b)
    }
}

impl From<std::ops::RangeInclusive<f64>> for NumericRange {
    #[inline]
    fn from(range: std::ops::RangeInclusive<f64>) -> Self {
        Self::new(*range.start(), *range.end())
    }
}
