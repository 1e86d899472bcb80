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

//! # Epsilon Equality
//!
//! Tolerance-based float comparison. The `*_default` variants use
//! `SmallestStep::SMALLEST_STEP` as the tolerance, which collapses to exact
//! equality for finite operands: two values compare equal only when their
//! difference rounds to zero.
//!
//! ```rust
//! use almanac_core::num::float::{eps_equals, eps_equals_default, eps_equals_nan_default};
//!
//! assert!(eps_equals(1.0, 1.05, 0.1));
//! assert!(!eps_equals_default(0.1 + 0.2, 0.3));
//! assert!(eps_equals_nan_default(f64::NAN, f64::NAN));
//! ```

use crate::num::constants::SmallestStep;
use num_traits::Float;

/// Returns `true` if `|a - b| < eps`.
///
/// Any NaN operand yields `false`, as does comparing two equal infinities
/// (their difference is NaN).
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::float::eps_equals;
///
/// assert!(eps_equals(10.0, 10.4, 0.5));
/// assert!(!eps_equals(10.0, 10.5, 0.5));
/// ```
#[inline]
pub fn eps_equals<T>(a: T, b: T, eps: T) -> bool
where
    T: Float,
{
    (a - b).abs() < eps
}

/// Like [`eps_equals`], with the smallest representable step as tolerance.
#[inline]
pub fn eps_equals_default<T>(a: T, b: T) -> bool
where
    T: Float + SmallestStep,
{
    eps_equals(a, b, T::SMALLEST_STEP)
}

/// Like [`eps_equals`], but two NaNs compare equal.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::float::eps_equals_nan;
///
/// assert!(eps_equals_nan(f64::NAN, f64::NAN, 0.1));
/// assert!(!eps_equals_nan(f64::NAN, 1.0, 0.1));
/// ```
#[inline]
pub fn eps_equals_nan<T>(a: T, b: T, eps: T) -> bool
where
    T: Float,
{
    if a.is_nan() && b.is_nan() {
        return true;
    }
    eps_equals(a, b, eps)
}

/// Like [`eps_equals_nan`], with the smallest representable step as tolerance.
#[inline]
pub fn eps_equals_nan_default<T>(a: T, b: T) -> bool
where
    T: Float + SmallestStep,
{
    eps_equals_nan(a, b, T::SMALLEST_STEP)
}

/// Like [`eps_equals_nan`], but matching signed infinities also compare equal.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::float::eps_equals_nan_inf;
///
/// assert!(eps_equals_nan_inf(f64::INFINITY, f64::INFINITY, 0.1));
/// assert!(!eps_equals_nan_inf(f64::INFINITY, f64::NEG_INFINITY, 0.1));
/// ```
#[inline]
pub fn eps_equals_nan_inf<T>(a: T, b: T, eps: T) -> bool
where
    T: Float,
{
    if a.is_infinite() && b.is_infinite() && a.is_sign_negative() == b.is_sign_negative() {
        return true;
    }
    eps_equals_nan(a, b, eps)
}

/// Like [`eps_equals_nan_inf`], with the smallest representable step as tolerance.
#[inline]
pub fn eps_equals_nan_inf_default<T>(a: T, b: T) -> bool
where
    T: Float + SmallestStep,
{
    eps_equals_nan_inf(a, b, T::SMALLEST_STEP)
}

/// Returns `true` if `value` is neither NaN nor infinite.
#[inline]
pub fn has_actual_value<T>(value: T) -> bool
where
    T: Float,
{
    value.is_finite()
}

/// Returns `value` if it has an actual value, otherwise `default`.
///
/// # Examples
///
/// ```rust
/// # use almanac_core::num::float::validate_or;
///
/// assert_eq!(validate_or(2.5, 0.0), 2.5);
/// assert_eq!(validate_or(f64::INFINITY, 0.0), 0.0);
/// ```
#[inline]
pub fn validate_or<T>(value: T, default: T) -> T
where
    T: Float,
{
    if has_actual_value(value) {
        value
    } else {
        default
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_eps_equals_basic() {
        assert!(eps_equals(1.0_f64, 1.0, 1e-9));
        assert!(eps_equals(1.0_f64, 1.0 + 1e-10, 1e-9));
        assert!(!eps_equals(1.0_f64, 1.1, 1e-9));
        // Strict inequality against the tolerance
        assert!(!eps_equals(0.0_f64, 0.5, 0.5));
    }

    #[test]
    fn test_eps_equals_default_is_exact() {
        assert!(eps_equals_default(3.0_f64, 3.0));
        assert!(eps_equals_default(f64::MIN, f64::MIN));
        assert!(eps_equals_default(f64::MAX, f64::MAX));
        assert!(!eps_equals_default(1.0_f64, 1.0 + f64::EPSILON));
        assert!(!eps_equals_default(0.1_f64 + 0.2, 0.3));
    }

    #[test]
    fn test_eps_equals_rejects_nan_and_infinity() {
        assert!(!eps_equals(f64::NAN, f64::NAN, 1.0));
        assert!(!eps_equals(f64::INFINITY, f64::INFINITY, 1.0));
        assert!(!eps_equals(f64::NAN, 0.0, 1.0));
    }

    #[test]
    fn test_eps_equals_nan() {
        assert!(eps_equals_nan_default(f64::NAN, f64::NAN));
        assert!(!eps_equals_nan_default(f64::NAN, 0.0));
        assert!(!eps_equals_nan_default(0.0, f64::NAN));
        assert!(eps_equals_nan_default(2.0_f64, 2.0));
        assert!(!eps_equals_nan_default(f64::INFINITY, f64::INFINITY));
    }

    #[test]
    fn test_eps_equals_nan_inf() {
        assert!(eps_equals_nan_inf_default(f64::INFINITY, f64::INFINITY));
        assert!(eps_equals_nan_inf_default(
            f64::NEG_INFINITY,
            f64::NEG_INFINITY
        ));
        assert!(!eps_equals_nan_inf_default(
            f64::INFINITY,
            f64::NEG_INFINITY
        ));
        assert!(eps_equals_nan_inf_default(f64::NAN, f64::NAN));
        assert!(!eps_equals_nan_inf_default(f64::INFINITY, 1.0));
    }

    #[test]
    fn test_generic_over_f32() {
        assert!(eps_equals_default(1.5_f32, 1.5));
        assert!(eps_equals_nan_default(f32::NAN, f32::NAN));
        assert!(eps_equals_nan_inf_default(f32::INFINITY, f32::INFINITY));
    }

    #[test]
    fn test_has_actual_value_and_validate() {
        assert!(has_actual_value(0.0_f64));
        assert!(has_actual_value(f64::MAX));
        assert!(!has_actual_value(f64::NAN));
        assert!(!has_actual_value(f64::NEG_INFINITY));

        assert_eq!(validate_or(1.0, -1.0), 1.0);
        assert_eq!(validate_or(f64::NAN, -1.0), -1.0);
        assert!(validate_or(f64::NAN, f64::NAN).is_nan());
    }
}
