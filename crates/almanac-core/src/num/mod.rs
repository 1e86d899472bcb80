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

//! # Numeric Foundations
//!
//! Traits and utilities for float-centric numeric programming. This module
//! consolidates compile-time sentinel constants and comparison/rounding
//! functions generic over `num_traits::Float`.
//!
//! ## Submodules
//!
//! - `constants`: Associated-constant traits (`SmallestStep`, `FloatBounds`)
//!   implemented for `f32` and `f64`.
//! - `float`: Epsilon equality with optional NaN and infinity awareness, and
//!   "has an actual value" checks.
//! - `round`: Rounding to a number of decimal or significant digits under
//!   half-to-even and half-away-from-zero midpoint rules.

pub mod constants;
pub mod float;
pub mod round;
