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

//! # Almanac Time
//!
//! Calendar-aware timestamp interval algebra built on `chrono`.
//!
//! ## Modules
//!
//! - `granularity`: `CalendarGranularity` (`Day`, `Month`, `Quarter`,
//!   `Year`) with `is_start_of`, `floor`, `ceil`, `add`, and `subtract`.
//! - `calendar`: The `CalendarExt` extension trait for `NaiveDateTime`
//!   (midnight and period-start checks, quarter numbers, month distances).
//! - `interval`: `TimeInterval`, an immutable timestamp pair with a sentinel
//!   empty value, intersection/union/difference, containment and overlap
//!   predicates, and the lazy `Split` iterator over calendar periods.
//! - `set`: Free functions converting between interval lists and sorted
//!   breakpoints, and merging exactly adjacent intervals.
//! - `error`: `CalendarError` and the crate `Result` alias.
//!
//! All types are plain values and every operation is a pure function, so
//! values can be shared across threads freely.

pub mod calendar;
pub mod error;
pub mod granularity;
pub mod interval;
pub mod set;

pub use calendar::CalendarExt;
pub use error::{CalendarError, Result};
pub use granularity::CalendarGranularity;
pub use interval::{Split, TimeInterval};

/// The timestamp type used throughout the crate.
pub type Timestamp = chrono::NaiveDateTime;

/// The earliest representable timestamp.
pub const MIN_TIMESTAMP: Timestamp = chrono::NaiveDateTime::MIN;

/// The latest representable timestamp.
pub const MAX_TIMESTAMP: Timestamp = chrono::NaiveDateTime::MAX;
