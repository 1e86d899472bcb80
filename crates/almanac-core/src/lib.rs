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

//! # Almanac Core
//!
//! Foundational numerics and slice algorithms for the almanac interval
//! algebra. The crate collects the small, dependency-light building blocks
//! that the timestamp interval crate (`almanac-time`) and the numeric range
//! crate (`almanac-range`) share.
//!
//! ## Modules
//!
//! - `num`: Float sentinel traits (`SmallestStep`, `FloatBounds`), epsilon
//!   based equality (`eps_equals`, `eps_equals_nan`, `eps_equals_nan_inf`),
//!   and decimal rounding helpers (`round_half_even`, `round_half_away`,
//!   `round_to_significant`).
//! - `algorithm`: Binary search and ordering checks over sorted slices.
//!
//! ## Purpose
//!
//! Floating point comparison and rounding are easy to get subtly wrong.
//! Keeping one generic implementation here means every range and partition in
//! the workspace agrees on what "equal" and "rounded to three digits" mean.

pub mod algorithm;
pub mod num;
