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

//! # Decimal Rounding
//!
//! Rounding to a fixed number of fractional digits under two midpoint rules:
//!
//! - `round_half_even`: ties go to the even neighbour (banker's rounding).
//!   Partitioning rounds its bounds this way.
//! - `round_half_away`: ties go away from zero. Used when rendering values.
//!
//! Both scale by `10^digits`, round, and scale back. Values whose scaled form
//! is no longer finite are returned unchanged, since at that magnitude there
//! are no fractional digits left to round.

use num_traits::Float;

#[inline]
fn ten<T>() -> T
where
    T: Float,
{
    let two = T::one() + T::one();
    two * two * two + two
}

/// Rounds to the nearest integer, resolving ties to the even neighbour.
#[inline]
fn round_ties_even<T>(value: T) -> T
where
    T: Float,
{
    let rounded = value.round();
    let half = T::one() / (T::one() + T::one());
    let is_tie = (value - value.trunc()).abs() == half;
    if is_tie && (rounded * half).fract() != T::zero() {
        rounded - value.signum()
    } else {
        rounded
    }
}

#[inline]
fn round_scaled<T, F>(value: T, digits: i32, round: F) -> T
where
    T: Float,
    F: Fn(T) -> T,
{
    let power = ten::<T>().powi(digits.max(0));
    let scaled = value * power;
    if !scaled.is_finite() {
        return value;
    }
    round(scaled) / power
}

/// Rounds `value` to `digits` fractional digits, ties to even.
///
/// Negative `digits` are treated as zero.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::round::round_half_even;
///
/// assert_eq!(round_half_even(2.5, 0), 2.0);
/// assert_eq!(round_half_even(3.5, 0), 4.0);
/// assert_eq!(round_half_even(1.23456, 3), 1.235);
/// ```
#[inline]
pub fn round_half_even<T>(value: T, digits: i32) -> T
where
    T: Float,
{
    round_scaled(value, digits, round_ties_even)
}

/// Rounds `value` to `digits` fractional digits, ties away from zero.
///
/// Negative `digits` are treated as zero.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::round::round_half_away;
///
/// assert_eq!(round_half_away(2.5, 0), 3.0);
/// assert_eq!(round_half_away(-2.5, 0), -3.0);
/// assert_eq!(round_half_away(0.125, 2), 0.13);
/// ```
#[inline]
pub fn round_half_away<T>(value: T, digits: i32) -> T
where
    T: Float,
{
    round_scaled(value, digits, T::round)
}

/// Rounds `value` to `digits` significant digits.
///
/// Zero stays zero. Otherwise the value is normalised into `[0.1, 1)` by a
/// power of ten, rounded half-to-even to `digits` places, and scaled back.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::round::round_to_significant;
///
/// assert_eq!(round_to_significant(0.0, 3), 0.0);
/// assert!((round_to_significant(123_456.0_f64, 2) - 120_000.0).abs() < 1e-6);
/// ```
pub fn round_to_significant<T>(value: T, digits: i32) -> T
where
    T: Float,
{
    if value == T::zero() {
        return T::zero();
    }
    let scale = ten::<T>().powf(value.abs().log10().floor() + T::one());
    scale * round_half_even(value / scale, digits)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_ties_even_integers() {
        assert_eq!(round_ties_even(0.5_f64), 0.0);
        assert_eq!(round_ties_even(1.5_f64), 2.0);
        assert_eq!(round_ties_even(2.5_f64), 2.0);
        assert_eq!(round_ties_even(-0.5_f64), 0.0);
        assert_eq!(round_ties_even(-1.5_f64), -2.0);
        assert_eq!(round_ties_even(-2.5_f64), -2.0);
        assert_eq!(round_ties_even(2.4_f64), 2.0);
        assert_eq!(round_ties_even(2.6_f64), 3.0);
    }

    #[test]
    fn test_round_half_even_digits() {
        assert_eq!(round_half_even(1.0004_f64, 3), 1.0);
        assert_eq!(round_half_even(9.87654_f64, 2), 9.88);
        assert_eq!(round_half_even(10.0_f64, 3), 10.0);
        assert_eq!(round_half_even(-4.2_f64, 0), -4.0);
    }

    #[test]
    fn test_round_half_away_digits() {
        assert_eq!(round_half_away(1.5_f64, 0), 2.0);
        assert_eq!(round_half_away(0.5_f64, 0), 1.0);
        assert_eq!(round_half_away(-0.5_f64, 0), -1.0);
        assert_eq!(round_half_away(3.14159_f64, 2), 3.14);
    }

    #[test]
    fn test_negative_digits_clamp_to_zero() {
        assert_eq!(round_half_away(12.7_f64, -2), 13.0);
        assert_eq!(round_half_even(12.5_f64, -1), 12.0);
    }

    #[test]
    fn test_huge_values_pass_through() {
        assert_eq!(round_half_even(f64::MAX, 3), f64::MAX);
        assert_eq!(round_half_away(f64::MIN, 2), f64::MIN);
    }

    #[test]
    fn test_non_finite_propagate() {
        assert!(round_half_even(f64::NAN, 3).is_nan());
        assert_eq!(round_half_away(f64::INFINITY, 3), f64::INFINITY);
    }

    #[test]
    fn test_round_to_significant() {
        assert_eq!(round_to_significant(0.0_f64, 2), 0.0);
        assert!((round_to_significant(0.012345_f64, 3) - 0.0123).abs() < 1e-12);
        assert!((round_to_significant(-98_765.0_f64, 1) - -100_000.0).abs() < 1e-6);
        assert!((round_to_significant(987.0_f64, 2) - 990.0).abs() < 1e-9);
    }
}
