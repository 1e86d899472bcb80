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

/// A trait for float types that expose their smallest representable positive step.
///
/// This is the smallest positive subnormal value, not `EPSILON`. Using it as a
/// comparison tolerance makes `|a - b| < SMALLEST_STEP` equivalent to exact
/// equality for every finite pair.
pub trait SmallestStep {
    /// The smallest positive value representable by the implementing type.
    const SMALLEST_STEP: Self;
}

/// A trait for float types with finite lowest and highest sentinel values.
pub trait FloatBounds {
    /// The most negative finite value of the implementing type.
    const LOWEST: Self;
    /// The most positive finite value of the implementing type.
    const HIGHEST: Self;
}

macro_rules! impl_const_for {
    ($trait_name:ident, $const_name:ident, $value:expr, $t:ty) => {
        impl $trait_name for $t {
            const $const_name: Self = $value;
        }
    };
}

macro_rules! impl_float_bounds_for {
    ($t:ty) => {
        impl FloatBounds for $t {
            const LOWEST: Self = <$t>::MIN;
            const HIGHEST: Self = <$t>::MAX;
        }
    };
}

impl_const_for!(SmallestStep, SMALLEST_STEP, 1e-45_f32, f32);
impl_const_for!(SmallestStep, SMALLEST_STEP, 5e-324_f64, f64);

impl_float_bounds_for!(f32);
impl_float_bounds_for!(f64);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_smallest_step_is_smallest_subnormal() {
        assert!(f64::SMALLEST_STEP > 0.0);
        assert_eq!(f64::SMALLEST_STEP / 2.0, 0.0);
        assert!(f32::SMALLEST_STEP > 0.0);
        assert_eq!(f32::SMALLEST_STEP / 2.0, 0.0);
    }

    #[test]
    fn test_float_bounds_are_finite_extremes() {
        assert_eq!(f64::LOWEST, f64::MIN);
        assert_eq!(f64::HIGHEST, f64::MAX);
        assert!(f64::LOWEST.is_finite());
        assert_eq!(f32::LOWEST, -f32::HIGHEST);
    }
}
