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

//! # Timestamp Intervals
//!
//! `TimeInterval` is an immutable `(begin, end)` pair of timestamps with
//! set-style operations (intersection, union, difference), containment and
//! overlap predicates, and calendar-aligned splitting.
//!
//! ## Emptiness
//!
//! The constructor accepts any pair, including `begin > end`. "No interval"
//! is the dedicated sentinel [`TimeInterval::EMPTY`],
//! `(NaiveDateTime::MAX, NaiveDateTime::MIN)`, and [`TimeInterval::is_empty`]
//! is structural equality with that sentinel only. Other inverted pairs are
//! not empty by that predicate; [`TimeInterval::is_inverted`] and
//! [`TimeInterval::non_empty`] give a stricter, tagged view.
//!
//! ## Boundaries
//!
//! Overlap is strict: intervals that only touch (`a.end == b.begin`) do not
//! intersect. Containment is inclusive on both ends.

use crate::{error::Result, granularity::CalendarGranularity};
use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use smallvec::{smallvec, SmallVec};
use std::{
    cmp::{max, min},
    iter::FusedIterator,
};

const SHORT_DATE_FORMAT: &str = "%Y-%m-%d";

/// An interval between two timestamps.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct TimeInterval {
    begin: NaiveDateTime,
    end: NaiveDateTime,
}

impl TimeInterval {
    /// The "no interval" sentinel: begin at the latest, end at the earliest
    /// representable timestamp.
    pub const EMPTY: Self = Self::new(NaiveDateTime::MAX, NaiveDateTime::MIN);

    /// Creates a new `TimeInterval`. No ordering of `begin` and `end` is enforced.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_time::TimeInterval;
    /// # use chrono::NaiveDate;
    ///
    /// let b = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let e = NaiveDate::from_ymd_opt(2024, 1, 2).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let iv = TimeInterval::new(b, e);
    /// assert_eq!(iv.span().num_hours(), 24);
    /// ```
    #[inline]
    pub const fn new(begin: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { begin, end }
    }

    /// Returns the calendar period of granularity `g` that contains `t`.
    ///
    /// If `t` starts a period the result is `(t, t + 1 unit)`, otherwise
    /// `(floor(t), ceil(t))`.
    ///
    /// # Errors
    ///
    /// Propagates [`CalendarGranularity::floor`] and
    /// [`CalendarGranularity::ceil`] errors, so a day period of a timestamp
    /// that is not at midnight is unsupported.
    pub fn period_of(t: NaiveDateTime, g: CalendarGranularity) -> Result<Self> {
        if g.is_start_of(t) {
            Ok(Self::new(t, g.next(t)?))
        } else {
            Ok(Self::new(g.floor(t)?, g.ceil(t)?))
        }
    }

    /// Returns the begin timestamp.
    #[inline]
    pub const fn begin(&self) -> NaiveDateTime {
        self.begin
    }

    /// Returns the end timestamp.
    #[inline]
    pub const fn end(&self) -> NaiveDateTime {
        self.end
    }

    /// Returns `end - begin`, or zero if `begin >= end`.
    #[inline]
    pub fn span(&self) -> TimeDelta {
        if self.begin < self.end {
            self.end.signed_duration_since(self.begin)
        } else {
            TimeDelta::zero()
        }
    }

    /// Returns `true` if this interval is exactly [`TimeInterval::EMPTY`].
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_time::TimeInterval;
    /// # use chrono::NaiveDate;
    ///
    /// assert!(TimeInterval::EMPTY.is_empty());
    ///
    /// let b = NaiveDate::from_ymd_opt(2024, 2, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let e = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// // Inverted, but not the sentinel.
    /// assert!(!TimeInterval::new(b, e).is_empty());
    /// ```
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }

    /// Returns `true` if `begin > end`. The empty sentinel is inverted.
    #[inline]
    pub fn is_inverted(&self) -> bool {
        self.begin > self.end
    }

    /// Returns `None` for the empty sentinel, otherwise `Some(self)`.
    #[inline]
    pub fn non_empty(self) -> Option<Self> {
        if self.is_empty() {
            None
        } else {
            Some(self)
        }
    }

    /// Returns `(max(begin), min(end))` without checking for overlap.
    ///
    /// If the intervals do not overlap the result is inverted, and it is not
    /// reported as empty unless it happens to equal the sentinel. Prefer
    /// [`intersection`](Self::intersection).
    #[inline]
    pub fn intersect_assuming_overlap(&self, other: &Self) -> Self {
        Self::new(max(self.begin, other.begin), min(self.end, other.end))
    }

    /// Returns the overlap of the two intervals, or [`TimeInterval::EMPTY`]
    /// if they do not [intersect](Self::has_intersection).
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_time::TimeInterval;
    /// # use chrono::NaiveDate;
    /// let d = |day| NaiveDate::from_ymd_opt(2024, 1, day).unwrap().and_hms_opt(0, 0, 0).unwrap();
    ///
    /// let a = TimeInterval::new(d(1), d(10));
    /// let b = TimeInterval::new(d(5), d(20));
    /// assert_eq!(a.intersection(&b), TimeInterval::new(d(5), d(10)));
    ///
    /// let c = TimeInterval::new(d(10), d(20)); // Touching
    /// assert!(a.intersection(&c).is_empty());
    /// ```
    #[inline]
    pub fn intersection(&self, other: &Self) -> Self {
        self.checked_intersection(other).unwrap_or(Self::EMPTY)
    }

    /// Returns the overlap of the two intervals, or `None` if they do not intersect.
    #[inline]
    pub fn checked_intersection(&self, other: &Self) -> Option<Self> {
        if self.has_intersection(other, false) {
            Some(self.intersect_assuming_overlap(other))
        } else {
            None
        }
    }

    /// Returns the hull of the two intervals.
    ///
    /// If exactly one side is empty the other is returned; two empty sides
    /// yield [`TimeInterval::EMPTY`].
    #[inline]
    pub fn union(&self, other: &Self) -> Self {
        match (self.is_empty(), other.is_empty()) {
            (true, _) => *other,
            (false, true) => *self,
            (false, false) => {
                Self::new(min(self.begin, other.begin), max(self.end, other.end))
            }
        }
    }

    /// Widens the interval to include `t`.
    ///
    /// This ignores emptiness: the union of [`TimeInterval::EMPTY`] and `t` is
    /// the degenerate interval `(t, t)`.
    #[inline]
    pub fn union_point(&self, t: NaiveDateTime) -> Self {
        Self::new(min(self.begin, t), max(self.end, t))
    }

    /// Returns `true` if `other` lies within `self`, bounds inclusive.
    ///
    /// With `ignore_time` only the calendar dates are compared.
    #[inline]
    pub fn contains_interval(&self, other: &Self, ignore_time: bool) -> bool {
        if ignore_time {
            self.begin.date() <= other.begin.date() && other.end.date() <= self.end.date()
        } else {
            self.begin <= other.begin && other.end <= self.end
        }
    }

    /// Returns `true` if `begin <= t <= end`.
    ///
    /// With `ignore_time` only the calendar dates are compared.
    #[inline]
    pub fn contains_point(&self, t: NaiveDateTime, ignore_time: bool) -> bool {
        if ignore_time {
            self.begin.date() <= t.date() && t.date() <= self.end.date()
        } else {
            self.begin <= t && t <= self.end
        }
    }

    /// Returns `true` if the intervals overlap. Touching intervals do not.
    ///
    /// With `ignore_time` only the calendar dates are compared.
    #[inline]
    pub fn has_intersection(&self, other: &Self, ignore_time: bool) -> bool {
        if ignore_time {
            self.begin.date() < other.end.date() && self.end.date() > other.begin.date()
        } else {
            self.begin < other.end && self.end > other.begin
        }
    }

    /// Returns `true` if the intervals share a boundary without overlapping.
    #[inline]
    pub fn is_adjacent(&self, other: &Self) -> bool {
        !self.is_inverted()
            && !other.is_inverted()
            && (self.end == other.begin || other.end == self.begin)
    }

    /// Removes the overlap with `other` from `self`.
    ///
    /// # Returns
    ///
    /// A `SmallVec` containing:
    /// * 0 intervals: If `self` is inverted or `other` fully covers `self`.
    /// * 1 interval: If `other` clips one side of `self` or does not intersect it.
    /// * 2 intervals: If `other` lies strictly inside `self`, splitting it into two.
    pub fn difference(&self, other: &Self) -> SmallVec<[Self; 2]> {
        if self.is_inverted() {
            return SmallVec::new();
        }
        if !self.has_intersection(other, false) {
            return smallvec![*self];
        }

        let mut result = SmallVec::new();
        if self.begin < other.begin {
            result.push(Self::new(self.begin, other.begin));
        }
        if self.end > other.end {
            result.push(Self::new(other.end, self.end));
        }
        result
    }

    /// Splits the interval into consecutive periods of granularity `g`,
    /// starting at `begin`.
    ///
    /// Each period ends one unit after it begins. Periods are produced while
    /// their end does not pass `end`; a trailing partial period is dropped.
    /// The returned iterator is lazy and can be cloned to restart.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_time::{CalendarGranularity, TimeInterval};
    /// # use chrono::NaiveDate;
    /// let d = |m| NaiveDate::from_ymd_opt(2024, m, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    ///
    /// let half_year = TimeInterval::new(d(1), d(7));
    /// let quarters: Vec<_> = half_year.split(CalendarGranularity::Quarter).collect();
    /// assert_eq!(
    ///     quarters,
    ///     vec![TimeInterval::new(d(1), d(4)), TimeInterval::new(d(4), d(7))]
    /// );
    /// ```
    #[inline]
    pub fn split(&self, g: CalendarGranularity) -> Split {
        Split {
            cursor: Some(self.begin),
            end: self.end,
            granularity: g,
        }
    }

    /// Renders both bounds as short dates, `"<begin> / <end>"`.
    pub fn to_short_date_string(&self) -> String {
        format!(
            "{} / {}",
            self.begin.format(SHORT_DATE_FORMAT),
            self.end.format(SHORT_DATE_FORMAT)
        )
    }
}

impl Default for TimeInterval {
    /// Returns [`TimeInterval::EMPTY`].
    #[inline]
    fn default() -> Self {
        Self::EMPTY
    }
}

impl std::fmt::Debug for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_empty() {
            return f.write_str("TimeInterval::EMPTY");
        }
        f.debug_struct("TimeInterval")
            .field("begin", &self.begin)
            .field("end", &self.end)
            .finish()
    }
}

impl std::fmt::Display for TimeInterval {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_short_date_string())
    }
}

impl From<std::ops::Range<NaiveDateTime>> for TimeInterval {
    #[inline]
    fn from(range: std::ops::Range<NaiveDateTime>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<TimeInterval> for std::ops::Range<NaiveDateTime> {
    #[inline]
    fn from(iv: TimeInterval) -> Self {
        iv.begin..iv.end
    }
}

/// An iterator over the calendar periods of a `TimeInterval`.
///
/// Created by [`TimeInterval::split`].
#[derive(Debug, Clone)]
pub struct Split {
    cursor: Option<NaiveDateTime>,
    end: NaiveDateTime,
    granularity: CalendarGranularity,
}

impl Split {
    /// Returns the granularity of the produced periods.
    #[inline]
    pub fn granularity(&self) -> CalendarGranularity {
        self.granularity
    }
}

impl Iterator for Split {
    type Item = TimeInterval;

    fn next(&mut self) -> Option<Self::Item> {
        let begin = self.cursor?;
        match self.granularity.next(begin) {
            Ok(next_end) if next_end <= self.end => {
                self.cursor = Some(next_end);
                Some(TimeInterval::new(begin, next_end))
            }
            _ => {
                self.cursor = None;
                None
            }
        }
    }
}

impl FusedIterator for Split {}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn at(y: i32, m: u32, d: u32, h: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, m, d)
            .unwrap()
            .and_hms_opt(h, 0, 0)
            .unwrap()
    }

    fn day(y: i32, m: u32, d: u32) -> NaiveDateTime {
        at(y, m, d, 0)
    }

    fn iv(b: NaiveDateTime, e: NaiveDateTime) -> TimeInterval {
        TimeInterval::new(b, e)
    }

    #[test]
    fn test_construction() {
        let a = iv(day(2024, 1, 1), day(2024, 1, 3));
        assert_eq!(a.begin(), day(2024, 1, 1));
        assert_eq!(a.end(), day(2024, 1, 3));
        assert_eq!(a.span(), TimeDelta::days(2));
        assert!(!a.is_empty());
        assert!(!a.is_inverted());
    }

    #[test]
    fn test_span_of_inverted_is_zero() {
        let a = iv(day(2024, 1, 3), day(2024, 1, 1));
        assert_eq!(a.span(), TimeDelta::zero());
        assert_eq!(TimeInterval::EMPTY.span(), TimeDelta::zero());
    }

    #[test]
    fn test_empty_sentinel() {
        assert!(TimeInterval::EMPTY.is_empty());
        assert!(TimeInterval::EMPTY.is_inverted());
        assert_eq!(TimeInterval::default(), TimeInterval::EMPTY);
        assert_eq!(TimeInterval::EMPTY.non_empty(), None);

        let inverted = iv(day(2024, 2, 1), day(2024, 1, 1));
        assert!(!inverted.is_empty());
        assert!(inverted.is_inverted());
        assert_eq!(inverted.non_empty(), Some(inverted));
    }

    #[test]
    fn test_equality_is_exact() {
        let a = iv(day(2024, 1, 1), day(2024, 1, 2));
        let b = iv(day(2024, 1, 1), at(2024, 1, 2, 0));
        let c = iv(day(2024, 1, 1), at(2024, 1, 2, 1));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_intersect_assuming_overlap_is_unguarded() {
        let a = iv(day(2024, 1, 1), day(2024, 1, 5));
        let b = iv(day(2024, 1, 10), day(2024, 1, 20));
        let raw = a.intersect_assuming_overlap(&b);
        assert_eq!(raw, iv(day(2024, 1, 10), day(2024, 1, 5)));
        assert!(raw.is_inverted());
        assert!(!raw.is_empty());
    }

    #[test]
    fn test_intersection() {
        let a = iv(day(2024, 1, 1), day(2024, 1, 10));

        // Overlap
        let b = iv(day(2024, 1, 5), day(2024, 1, 15));
        assert_eq!(a.intersection(&b), iv(day(2024, 1, 5), day(2024, 1, 10)));

        // Contained
        let c = iv(day(2024, 1, 2), day(2024, 1, 3));
        assert_eq!(a.intersection(&c), c);

        // Touching
        let d = iv(day(2024, 1, 10), day(2024, 1, 12));
        assert!(a.intersection(&d).is_empty());
        assert_eq!(a.checked_intersection(&d), None);

        // Disjoint
        let e = iv(day(2024, 2, 1), day(2024, 2, 2));
        assert!(a.intersection(&e).is_empty());
    }

    #[test]
    fn test_union() {
        let a = iv(day(2024, 1, 1), day(2024, 1, 10));
        let b = iv(day(2024, 1, 20), day(2024, 1, 25));
        assert_eq!(a.union(&b), iv(day(2024, 1, 1), day(2024, 1, 25)));
        assert_eq!(b.union(&a), iv(day(2024, 1, 1), day(2024, 1, 25)));

        assert_eq!(TimeInterval::EMPTY.union(&a), a);
        assert_eq!(a.union(&TimeInterval::EMPTY), a);
        assert!(TimeInterval::EMPTY.union(&TimeInterval::EMPTY).is_empty());
    }

    #[test]
    fn test_union_point() {
        let a = iv(day(2024, 1, 5), day(2024, 1, 10));
        assert_eq!(
            a.union_point(day(2024, 1, 1)),
            iv(day(2024, 1, 1), day(2024, 1, 10))
        );
        assert_eq!(
            a.union_point(day(2024, 1, 20)),
            iv(day(2024, 1, 5), day(2024, 1, 20))
        );
        assert_eq!(a.union_point(day(2024, 1, 7)), a);

        let t = day(2024, 3, 3);
        assert_eq!(TimeInterval::EMPTY.union_point(t), iv(t, t));
    }

    #[test]
    fn test_contains_interval() {
        let main = iv(at(2024, 1, 1, 8), at(2024, 1, 3, 8));

        assert!(main.contains_interval(&main, false));
        assert!(main.contains_interval(&iv(at(2024, 1, 2, 0), at(2024, 1, 3, 0)), false));
        assert!(!main.contains_interval(&iv(at(2024, 1, 1, 0), at(2024, 1, 3, 0)), false));

        // Same dates, earlier time
        assert!(main.contains_interval(&iv(at(2024, 1, 1, 0), at(2024, 1, 3, 23)), true));
        assert!(!main.contains_interval(&iv(at(2023, 12, 31, 23), at(2024, 1, 2, 0)), true));
    }

    #[test]
    fn test_contains_point() {
        let a = iv(at(2024, 1, 1, 8), at(2024, 1, 3, 8));
        assert!(a.contains_point(at(2024, 1, 1, 8), false));
        assert!(a.contains_point(at(2024, 1, 3, 8), false));
        assert!(!a.contains_point(at(2024, 1, 1, 7), false));
        assert!(!a.contains_point(at(2024, 1, 3, 9), false));

        assert!(a.contains_point(at(2024, 1, 1, 0), true));
        assert!(a.contains_point(at(2024, 1, 3, 23), true));
        assert!(!a.contains_point(at(2024, 1, 4, 0), true));
    }

    #[test]
    fn test_has_intersection() {
        let a = iv(day(2024, 1, 1), day(2024, 1, 10));

        assert!(a.has_intersection(&iv(day(2024, 1, 9), day(2024, 1, 11)), false));
        assert!(a.has_intersection(&a, false));
        // Touching
        assert!(!a.has_intersection(&iv(day(2024, 1, 10), day(2024, 1, 11)), false));
        assert!(!a.has_intersection(&iv(day(2023, 12, 1), day(2024, 1, 1)), false));
    }

    #[test]
    fn test_has_intersection_ignore_time() {
        let a = iv(at(2024, 1, 1, 0), at(2024, 1, 10, 12));
        let b = iv(at(2024, 1, 10, 6), at(2024, 1, 11, 0));
        assert!(a.has_intersection(&b, false));
        // Both fall on Jan 10 once truncated, so they only touch.
        assert!(!a.has_intersection(&b, true));
    }

    #[test]
    fn test_is_adjacent() {
        let a = iv(day(2024, 1, 1), day(2024, 2, 1));
        assert!(a.is_adjacent(&iv(day(2024, 2, 1), day(2024, 3, 1))));
        assert!(a.is_adjacent(&iv(day(2023, 12, 1), day(2024, 1, 1))));
        assert!(!a.is_adjacent(&iv(day(2024, 1, 15), day(2024, 3, 1))));
        assert!(!a.is_adjacent(&TimeInterval::EMPTY));
    }

    #[test]
    fn test_difference() {
        let base = iv(day(2024, 1, 1), day(2024, 1, 11));

        // Disjoint
        let diff = base.difference(&iv(day(2024, 2, 1), day(2024, 2, 5)));
        assert_eq!(diff.as_slice(), &[base]);

        // Full cover
        let diff = base.difference(&iv(day(2023, 12, 1), day(2024, 2, 1)));
        assert!(diff.is_empty());

        // Clip right
        let diff = base.difference(&iv(day(2024, 1, 8), day(2024, 2, 1)));
        assert_eq!(diff.as_slice(), &[iv(day(2024, 1, 1), day(2024, 1, 8))]);

        // Clip left
        let diff = base.difference(&iv(day(2023, 12, 1), day(2024, 1, 3)));
        assert_eq!(diff.as_slice(), &[iv(day(2024, 1, 3), day(2024, 1, 11))]);

        // Hole
        let diff = base.difference(&iv(day(2024, 1, 4), day(2024, 1, 6)));
        assert_eq!(
            diff.as_slice(),
            &[
                iv(day(2024, 1, 1), day(2024, 1, 4)),
                iv(day(2024, 1, 6), day(2024, 1, 11)),
            ]
        );

        // Empty minuend
        assert!(TimeInterval::EMPTY.difference(&base).is_empty());
    }

    #[test]
    fn test_split_quarters() {
        let half = iv(day(2024, 1, 1), day(2024, 7, 1));
        let parts: Vec<_> = half.split(CalendarGranularity::Quarter).collect();
        assert_eq!(
            parts,
            vec![
                iv(day(2024, 1, 1), day(2024, 4, 1)),
                iv(day(2024, 4, 1), day(2024, 7, 1)),
            ]
        );
    }

    #[test]
    fn test_split_drops_partial_tail() {
        let a = iv(day(2024, 1, 1), day(2024, 3, 15));
        let parts: Vec<_> = a.split(CalendarGranularity::Month).collect();
        assert_eq!(
            parts,
            vec![
                iv(day(2024, 1, 1), day(2024, 2, 1)),
                iv(day(2024, 2, 1), day(2024, 3, 1)),
            ]
        );
    }

    #[test]
    fn test_split_days_keeps_time_of_day() {
        let a = iv(at(2024, 1, 1, 12), at(2024, 1, 4, 0));
        let parts: Vec<_> = a.split(CalendarGranularity::Day).collect();
        assert_eq!(
            parts,
            vec![
                iv(at(2024, 1, 1, 12), at(2024, 1, 2, 12)),
                iv(at(2024, 1, 2, 12), at(2024, 1, 3, 12)),
            ]
        );
    }

    #[test]
    fn test_split_shorter_than_one_unit_is_empty() {
        let a = iv(day(2024, 1, 1), day(2024, 12, 31));
        assert_eq!(a.split(CalendarGranularity::Year).count(), 0);
        assert_eq!(TimeInterval::EMPTY.split(CalendarGranularity::Day).count(), 0);
    }

    #[test]
    fn test_split_is_restartable_and_fused() {
        let a = iv(day(2024, 1, 1), day(2025, 1, 1));
        let split = a.split(CalendarGranularity::Month);
        assert_eq!(split.granularity(), CalendarGranularity::Month);
        assert_eq!(split.clone().count(), 12);
        assert_eq!(split.clone().count(), 12);

        let mut it = a.split(CalendarGranularity::Year);
        assert_eq!(it.next(), Some(a));
        assert_eq!(it.next(), None);
        assert_eq!(it.next(), None);
    }

    #[test]
    fn test_split_near_max_terminates() {
        let a = iv(day(2024, 1, 1), NaiveDateTime::MAX);
        let mut it = a.split(CalendarGranularity::Year);
        assert_eq!(it.next(), Some(iv(day(2024, 1, 1), day(2025, 1, 1))));
        let tail = iv(NaiveDateTime::MAX, NaiveDateTime::MAX);
        assert_eq!(tail.split(CalendarGranularity::Day).next(), None);
    }

    #[test]
    fn test_period_of() {
        let g = CalendarGranularity::Quarter;
        assert_eq!(
            TimeInterval::period_of(at(2024, 5, 5, 5), g),
            Ok(iv(day(2024, 4, 1), day(2024, 7, 1)))
        );
        assert_eq!(
            TimeInterval::period_of(day(2024, 4, 1), g),
            Ok(iv(day(2024, 4, 1), day(2024, 7, 1)))
        );
        assert_eq!(
            TimeInterval::period_of(day(2024, 4, 1), CalendarGranularity::Day),
            Ok(iv(day(2024, 4, 1), day(2024, 4, 2)))
        );
        assert!(TimeInterval::period_of(at(2024, 4, 1, 3), CalendarGranularity::Day).is_err());
    }

    #[test]
    fn test_display_debug() {
        let a = iv(at(2024, 1, 1, 9), day(2024, 12, 31));
        assert_eq!(a.to_string(), "2024-01-01 / 2024-12-31");
        assert_eq!(
            format!("{:?}", a),
            "TimeInterval { begin: 2024-01-01T09:00:00, end: 2024-12-31T00:00:00 }"
        );
        assert_eq!(format!("{:?}", TimeInterval::EMPTY), "TimeInterval::EMPTY");
    }

    #[test]
    fn test_range_conversions() {
        let r = day(2024, 1, 1)..day(2024, 2, 1);
        let a = TimeInterval::from(r.clone());
        assert_eq!(a.begin(), r.start);
        let back: std::ops::Range<NaiveDateTime> = a.into();
        assert_eq!(back, r);
    }

    #[test]
    fn test_serde_round_trip() {
        let a = iv(at(2024, 6, 1, 12), day(2024, 6, 30));
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(
            json,
            r#"{"begin":"2024-06-01T12:00:00","end":"2024-06-30T00:00:00"}"#
        );
        let back: TimeInterval = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
    }
}
