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

//! # Calendar Granularity
//!
//! The calendar units used to align, step, and split timestamp intervals.
//!
//! Stepping follows civil calendar rules: adding months clamps the day of
//! month to the length of the target month, so `2024-01-31 + 1 month` is
//! `2024-02-29`, and a year is twelve months (`2024-02-29 + 1 year` is
//! `2025-02-28`).
//!
//! ```rust
//! use almanac_time::CalendarGranularity;
//! use chrono::NaiveDate;
//!
//! let t = NaiveDate::from_ymd_opt(2024, 5, 17).unwrap().and_hms_opt(9, 30, 0).unwrap();
//! let q = CalendarGranularity::Quarter;
//!
//! assert_eq!(q.floor(t).unwrap().date(), NaiveDate::from_ymd_opt(2024, 4, 1).unwrap());
//! assert_eq!(q.ceil(t).unwrap().date(), NaiveDate::from_ymd_opt(2024, 7, 1).unwrap());
//! ```

use crate::{
    calendar::CalendarExt,
    error::{CalendarError, Result},
};
use chrono::{Datelike, Days, Months, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A calendar unit: day, month, quarter, or year.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CalendarGranularity {
    /// One calendar day.
    Day,
    /// One calendar month.
    Month,
    /// Three calendar months, aligned to January, April, July, and October.
    Quarter,
    /// One calendar year.
    Year,
}

impl CalendarGranularity {
    /// All granularities, finest first.
    pub const ALL: [Self; 4] = [Self::Day, Self::Month, Self::Quarter, Self::Year];

    /// Returns the lowercase name of the granularity.
    #[inline]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Day => "day",
            Self::Month => "month",
            Self::Quarter => "quarter",
            Self::Year => "year",
        }
    }

    /// Returns `true` if `t` is the first instant of a period of this granularity.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_time::CalendarGranularity;
    /// # use chrono::NaiveDate;
    ///
    /// let apr1 = NaiveDate::from_ymd_opt(2024, 4, 1).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// assert!(CalendarGranularity::Quarter.is_start_of(apr1));
    /// assert!(!CalendarGranularity::Year.is_start_of(apr1));
    /// ```
    #[inline]
    pub fn is_start_of(self, t: NaiveDateTime) -> bool {
        match self {
            Self::Day => t.is_midnight(),
            Self::Month => t.is_month_start(),
            Self::Quarter => t.is_quarter_start(),
            Self::Year => t.is_year_start(),
        }
    }

    /// Returns the start of the month, quarter, or year containing `t`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::UnsupportedGranularity`] for
    /// [`CalendarGranularity::Day`]; day alignment is checked with
    /// [`is_start_of`](Self::is_start_of) instead.
    pub fn floor(self, t: NaiveDateTime) -> Result<NaiveDateTime> {
        let month = match self {
            Self::Day => return Err(CalendarError::unsupported(self.name(), "floor")),
            Self::Month => t.month(),
            Self::Quarter => (t.month() - 1) / 3 * 3 + 1,
            Self::Year => 1,
        };
        NaiveDate::from_ymd_opt(t.year(), month, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .ok_or(CalendarError::OutOfRange {
                timestamp: t,
                granularity: self,
                amount: 0,
            })
    }

    /// Returns `t` if it starts a period, otherwise the start of the next period.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`add`](Self::add) and [`floor`](Self::floor);
    /// in particular a [`CalendarGranularity::Day`] ceiling of a timestamp
    /// that is not at midnight is unsupported.
    pub fn ceil(self, t: NaiveDateTime) -> Result<NaiveDateTime> {
        if self.is_start_of(t) {
            return Ok(t);
        }
        self.floor(self.add(t, 1)?)
    }

    /// Shifts `t` by `amount` units of this granularity. Negative amounts
    /// shift backwards.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result is not representable.
    ///
    /// # Examples
    ///
    /// ```rust
    /// # use almanac_time::CalendarGranularity;
    /// # use chrono::NaiveDate;
    ///
    /// let jan31 = NaiveDate::from_ymd_opt(2024, 1, 31).unwrap().and_hms_opt(0, 0, 0).unwrap();
    /// let shifted = CalendarGranularity::Month.add(jan31, 1).unwrap();
    /// assert_eq!(shifted.date(), NaiveDate::from_ymd_opt(2024, 2, 29).unwrap());
    /// ```
    pub fn add(self, t: NaiveDateTime, amount: i32) -> Result<NaiveDateTime> {
        self.shift(t, i64::from(amount))
    }

    /// Shifts `t` backwards by `amount` units; equivalent to `add(t, -amount)`.
    ///
    /// # Errors
    ///
    /// Returns [`CalendarError::OutOfRange`] if the result is not representable.
    pub fn subtract(self, t: NaiveDateTime, amount: i32) -> Result<NaiveDateTime> {
        self.shift(t, -i64::from(amount))
    }

    /// Shifts `t` forward by one unit.
    #[inline]
    pub fn next(self, t: NaiveDateTime) -> Result<NaiveDateTime> {
        self.add(t, 1)
    }

    /// Shifts `t` backwards by one unit.
    #[inline]
    pub fn previous(self, t: NaiveDateTime) -> Result<NaiveDateTime> {
        self.subtract(t, 1)
    }

    fn shift(self, t: NaiveDateTime, amount: i64) -> Result<NaiveDateTime> {
        let shifted = match self {
            Self::Day => shift_days(t, amount),
            Self::Month => shift_months(t, amount),
            Self::Quarter => shift_months(t, 3 * amount),
            Self::Year => shift_months(t, 12 * amount),
        };
        shifted.ok_or(CalendarError::OutOfRange {
            timestamp: t,
            granularity: self,
            amount,
        })
    }
}

fn shift_days(t: NaiveDateTime, days: i64) -> Option<NaiveDateTime> {
    let magnitude = Days::new(days.unsigned_abs());
    if days >= 0 {
        t.checked_add_days(magnitude)
    } else {
        t.checked_sub_days(magnitude)
    }
}

fn shift_months(t: NaiveDateTime, months: i64) -> Option<NaiveDateTime> {
    let magnitude = Months::new(u32::try_from(months.unsigned_abs()).ok()?);
    if months >= 0 {
        t.checked_add_months(magnitude)
    } else {
        t.checked_sub_months(magnitude)
    }
}

impl fmt::Display for CalendarGranularity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CalendarGranularity {
    type Err = CalendarError;

    /// Parses a granularity name, ignoring ASCII case.
    ///
    /// Names of other calendar units (`week`, `hour`, ...) are rejected with
    /// [`CalendarError::UnsupportedGranularity`].
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|g| g.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CalendarError::unsupported(s, "parse"))
    }
}
