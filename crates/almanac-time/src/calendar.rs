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

//! # Calendar Predicates
//!
//! Extension methods on `chrono::NaiveDateTime` for calendar position
//! checks. A timestamp "starts" a period when it is at midnight on the
//! period's first day. Midnight only looks at hour, minute, and second, so a
//! timestamp with a non-zero sub-second part still counts as midnight.

use chrono::{Datelike, NaiveDateTime, Timelike};

/// Calendar position queries for timestamps.
pub trait CalendarExt {
    /// Returns `true` if hour, minute, and second are all zero.
    fn is_midnight(&self) -> bool;

    /// Returns `true` at midnight on the first day of a month.
    fn is_month_start(&self) -> bool;

    /// Returns `true` at midnight on January, April, July, or October 1st.
    fn is_quarter_start(&self) -> bool;

    /// Returns `true` at midnight on January 1st.
    fn is_year_start(&self) -> bool;

    /// Returns the quarter of the year, `1..=4`.
    fn quarter(&self) -> u32;

    /// Returns the quarter of the year as a roman numeral, `"I"` to `"IV"`.
    fn quarter_roman(&self) -> &'static str;

    /// Returns the number of calendar months from `other` to `self`,
    /// ignoring days and time.
    fn months_between(&self, other: &Self) -> i32;
}

impl CalendarExt for NaiveDateTime {
    #[inline]
    fn is_midnight(&self) -> bool {
        self.hour() == 0 && self.minute() == 0 && self.second() == 0
    }

    #[inline]
    fn is_month_start(&self) -> bool {
        self.is_midnight() && self.day() == 1
    }

    #[inline]
    fn is_quarter_start(&self) -> bool {
        self.is_month_start() && matches!(self.month(), 1 | 4 | 7 | 10)
    }

    #[inline]
    fn is_year_start(&self) -> bool {
        self.is_month_start() && self.month() == 1
    }

    #[inline]
    fn quarter(&self) -> u32 {
        (self.month() - 1) / 3 + 1
    }

    fn quarter_roman(&self) -> &'static str {
        match CalendarExt::quarter(self) {
            1 => "I",
            2 => "II",
            3 => "III",
            _ => "IV",
        }
    }

    #[inline]
    fn months_between(&self, other: &Self) -> i32 {
        let months = |t: &NaiveDateTime| t.year() * 12 + t.month() as i32;
        months(self) - months(other)
    }
}
