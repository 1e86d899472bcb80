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

//! # Almanac Range
//!
//! Closed `f64` ranges and span partitioning.
//!
//! ## Modules
//!
//! - `range`: `NumericRange`, an ordered `(min, max)` pair whose default is
//!   the unbounded sentinel `(f64::MIN, f64::MAX)`, with epsilon equality,
//!   the overlap-based `overlap_cmp`, and `find_overlapping` for sorted
//!   bucket lists.
//! - `partition`: `Partitioner` with `by_fixed_size`, `by_count`, and the
//!   `PartitionRule` dispatcher `create`, configured by `PartitionOptions`.
//! - `error`: `PartitionError` and the crate `Result` alias.

pub mod error;
pub mod partition;
pub mod range;

pub use error::{PartitionError, Result};
pub use partition::{PartitionOptions, PartitionRule, Partitioner};
pub use range::{find_overlapping, NumericRange};
