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

//! Error types for calendar arithmetic.

use crate::granularity::CalendarGranularity;
use chrono::NaiveDateTime;
use thiserror::Error;

/// The error type for calendar granularity operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The granularity is not supported by the requested operation.
    ///
    /// Raised by `floor` for [`CalendarGranularity::Day`] and when parsing a
    /// granularity name outside `{day, month, quarter, year}`.
    #[error("granularity '{granularity}' is not supported by {operation}")]
    UnsupportedGranularity {
        /// The rejected granularity, as written by the caller.
        granularity: String,
        /// The operation that rejected it.
        operation: &'static str,
    },

    /// Calendar arithmetic left the representable timestamp range.
    #[error("shifting {timestamp} by {amount} {granularity} leaves the representable range")]
    OutOfRange {
        /// The timestamp the shift started from.
        timestamp: NaiveDateTime,
        /// The unit of the shift.
        granularity: CalendarGranularity,
        /// The number of units.
        amount: i64,
    },
}

impl CalendarError {
    #[inline]
    pub(crate) fn unsupported(granularity: impl Into<String>, operation: &'static str) -> Self {
        Self::UnsupportedGranularity {
            granularity: granularity.into(),
            operation,
        }
    }
}

/// A `Result` alias for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
