//! Linear interpolation, inverse interpolation and their clamped variants
//!
//! All operations work element-wise on scalars (`f32`, `f64`) and on
//! fixed-size vectors of them, with `start`, `end` and `alpha` sharing one
//! shape. The `_scalar` variants take vector bounds with a single scalar
//! parameter that applies to every element.
//!
//! # Degenerate ranges
//! [`invlerp`] and [`invlerpclip`] divide by `end - start` without a guard.
//! For `start == end` they yield IEEE 754 infinities (or NaN for
//! `alpha == start`), which Rust guarantees on every target. [`checked_invlerp`]
//! reports the degenerate range as an error instead.

use crate::error::{VecMathError, VecMathResult};
use nalgebra::{SVector, Scalar};

/// Element-wise arithmetic needed by the interpolation family.
pub trait Interpolate: Copy {
    /// `self * (1 - alpha) + end * alpha`
    fn lerp(self, end: Self, alpha: Self) -> Self;

    /// `(value - self) / (end - self)`
    fn invlerp(self, end: Self, value: Self) -> Self;

    /// Clamp into `[lo, hi]` as `min(max(self, lo), hi)`.
    ///
    /// NaN elements pass through unchanged. With `lo > hi` the result is
    /// `hi`.
    fn clip(self, lo: Self, hi: Self) -> Self;

    /// Clamp every element into `[0, 1]`.
    fn clip_unit(self) -> Self;

    /// Whether any element of `self` equals the matching element of `end`.
    fn is_degenerate_range(self, end: Self) -> bool;
}

macro_rules! impl_interpolate_float {
    ($($t:ty),*) => {
        $(
            impl Interpolate for $t {
                #[inline]
                fn lerp(self, end: Self, alpha: Self) -> Self {
                    self * (1.0 - alpha) + end * alpha
                }

                #[inline]
                fn invlerp(self, end: Self, value: Self) -> Self {
                    (value - self) / (end - self)
                }

                #[inline]
                fn clip(self, lo: Self, hi: Self) -> Self {
                    // Comparisons rather than f*::clamp: no panic on lo > hi, NaN kept.
                    let x = if self < lo { lo } else { self };
                    if x > hi {
                        hi
                    } else {
                        x
                    }
                }

                #[inline]
                fn clip_unit(self) -> Self {
                    self.clip(0.0, 1.0)
                }

                #[inline]
                fn is_degenerate_range(self, end: Self) -> bool {
                    self == end
                }
            }
        )*
    };
}

impl_interpolate_float!(f32, f64);

impl<T: Interpolate + Scalar, const D: usize> Interpolate for SVector<T, D> {
    fn lerp(self, end: Self, alpha: Self) -> Self {
        self.zip_zip_map(&end, &alpha, T::lerp)
    }

    fn invlerp(self, end: Self, value: Self) -> Self {
        self.zip_zip_map(&end, &value, T::invlerp)
    }

    fn clip(self, lo: Self, hi: Self) -> Self {
        self.zip_zip_map(&lo, &hi, T::clip)
    }

    fn clip_unit(self) -> Self {
        self.map(T::clip_unit)
    }

    fn is_degenerate_range(self, end: Self) -> bool {
        self.iter()
            .zip(end.iter())
            .any(|(&s, &e)| s.is_degenerate_range(e))
    }
}

/// Linear interpolation `start * (1 - alpha) + end * alpha`, unclamped.
///
/// ```
/// use vecmath_core::interp::lerp;
///
/// assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
/// assert_eq!(lerp(0.0, 10.0, 1.5), 15.0);
/// ```
#[inline]
pub fn lerp<V: Interpolate>(start: V, end: V, alpha: V) -> V {
    start.lerp(end, alpha)
}

/// Fractional position of `alpha` within `[start, end]`, unclamped.
///
/// Inverse of [`lerp`]. The division is unguarded; see the module docs for
/// `start == end`.
#[inline]
pub fn invlerp<V: Interpolate>(start: V, end: V, alpha: V) -> V {
    start.invlerp(end, alpha)
}

/// [`invlerp`] that refuses degenerate ranges.
///
/// # Errors
///
/// Returns [`VecMathError::DegenerateRange`] if `start` equals `end` in any
/// element.
pub fn checked_invlerp<V: Interpolate>(start: V, end: V, alpha: V) -> VecMathResult<V> {
    if start.is_degenerate_range(end) {
        return Err(VecMathError::DegenerateRange);
    }
    Ok(start.invlerp(end, alpha))
}

/// [`lerp`] clamped element-wise into `[start, end]`.
///
/// Inverted bounds (`start > end`) are not meaningful here.
#[inline]
pub fn lerpclip<V: Interpolate>(start: V, end: V, alpha: V) -> V {
    lerp(start, end, alpha).clip(start, end)
}

/// [`invlerp`] clamped element-wise into `[0, 1]`.
#[inline]
pub fn invlerpclip<V: Interpolate>(start: V, end: V, alpha: V) -> V {
    invlerp(start, end, alpha).clip_unit()
}

/// [`lerp`] between vector bounds with one parameter for every element.
///
/// ```
/// use vecmath_core::{interp::lerp_scalar, Vec3};
///
/// let mid = lerp_scalar(Vec3::zeros(), Vec3::new(2.0, 4.0, 8.0), 0.5);
/// assert_eq!(mid, Vec3::new(1.0, 2.0, 4.0));
/// ```
#[inline]
pub fn lerp_scalar<T: Interpolate + Scalar, const D: usize>(
    start: SVector<T, D>,
    end: SVector<T, D>,
    alpha: T,
) -> SVector<T, D> {
    lerp(start, end, SVector::repeat(alpha))
}

/// [`invlerp`] of one value against every element of the vector bounds.
#[inline]
pub fn invlerp_scalar<T: Interpolate + Scalar, const D: usize>(
    start: SVector<T, D>,
    end: SVector<T, D>,
    alpha: T,
) -> SVector<T, D> {
    invlerp(start, end, SVector::repeat(alpha))
}

/// [`lerpclip`] with one parameter for every element.
#[inline]
pub fn lerpclip_scalar<T: Interpolate + Scalar, const D: usize>(
    start: SVector<T, D>,
    end: SVector<T, D>,
    alpha: T,
) -> SVector<T, D> {
    lerpclip(start, end, SVector::repeat(alpha))
}

/// [`invlerpclip`] of one value against every element of the vector bounds.
#[inline]
pub fn invlerpclip_scalar<T: Interpolate + Scalar, const D: usize>(
    start: SVector<T, D>,
    end: SVector<T, D>,
    alpha: T,
) -> SVector<T, D> {
    invlerpclip(start, end, SVector::repeat(alpha))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core_types::Vec3;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(-4.0_f32, 4.0, 0.25), -2.0);
    }

    #[test]
    fn test_invlerp_basic() {
        assert_eq!(invlerp(0.0, 10.0, 5.0), 0.5);
        assert_eq!(invlerp(0.0, 10.0, 20.0), 2.0);
        assert_eq!(invlerp(10.0, 0.0, 2.5), 0.75);
    }

    #[test]
    fn test_invlerp_degenerate_range_follows_ieee() {
        assert_eq!(invlerp(1.0, 1.0, 2.0), f64::INFINITY);
        assert_eq!(invlerp(1.0, 1.0, 0.0), f64::NEG_INFINITY);
        assert!(invlerp(1.0_f64, 1.0, 1.0).is_nan());

        assert_eq!(invlerpclip(1.0, 1.0, 2.0), 1.0);
        assert_eq!(invlerpclip(1.0, 1.0, 0.0), 0.0);
        assert!(invlerpclip(1.0_f64, 1.0, 1.0).is_nan());
    }

    #[test]
    fn test_checked_invlerp() {
        assert_eq!(checked_invlerp(1.0, 1.0, 3.0), Err(VecMathError::DegenerateRange));
        assert_eq!(checked_invlerp(0.0, 4.0, 1.0), Ok(0.25));

        let start = Vec3::new(0.0, 1.0, 2.0);
        let end = Vec3::new(1.0, 1.0, 3.0);
        assert_eq!(
            checked_invlerp(start, end, Vec3::zeros()),
            Err(VecMathError::DegenerateRange)
        );
    }

    #[test]
    fn test_lerpclip() {
        assert_eq!(lerpclip(0.0, 10.0, 2.0), 10.0);
        assert_eq!(lerpclip(0.0, 10.0, -1.0), 0.0);
        assert_eq!(lerpclip(0.0, 10.0, 0.25), 2.5);
    }

    #[test]
    fn test_invlerpclip() {
        assert_eq!(invlerpclip(0.0, 10.0, 20.0), 1.0);
        assert_eq!(invlerpclip(0.0, 10.0, -5.0), 0.0);
        assert_eq!(invlerpclip(0.0, 10.0, 2.5), 0.25);
    }

    #[test]
    fn test_clip_inverted_bounds_does_not_panic() {
        // min(max(x, lo), hi) collapses to hi when lo > hi.
        assert_eq!(5.0_f64.clip(10.0, 0.0), 0.0);
        assert_eq!(lerpclip(10.0, 0.0, -1.0), 0.0);
    }

    #[test]
    fn test_vector_operands_are_element_wise() {
        let start = Vec3::new(0.0, 10.0, -2.0);
        let end = Vec3::new(10.0, 20.0, 2.0);

        let mid = lerp(start, end, Vec3::repeat(0.5));
        assert_relative_eq!(mid, Vec3::new(5.0, 15.0, 0.0));

        let mixed = lerp(start, end, Vec3::new(0.0, 1.0, 0.25));
        assert_relative_eq!(mixed, Vec3::new(0.0, 20.0, -1.0));

        let t = invlerp(start, end, Vec3::new(5.0, 25.0, -2.0));
        assert_relative_eq!(t, Vec3::new(0.5, 1.5, 0.0));

        let clipped = invlerpclip(start, end, Vec3::new(-5.0, 25.0, 0.0));
        assert_relative_eq!(clipped, Vec3::new(0.0, 1.0, 0.5));

        let bounded = lerpclip(start, end, Vec3::new(2.0, -1.0, 0.75));
        assert_relative_eq!(bounded, Vec3::new(10.0, 10.0, 1.0));
    }

    #[test]
    fn test_scalar_parameter_over_vector_bounds() {
        let start = Vec3::new(0.0, 10.0, -2.0);
        let end = Vec3::new(10.0, 20.0, 2.0);

        assert_eq!(lerp_scalar(start, end, 0.5), lerp(start, end, Vec3::repeat(0.5)));
        assert_relative_eq!(lerp_scalar(start, end, 0.25), Vec3::new(2.5, 12.5, -1.0));
        assert_relative_eq!(lerpclip_scalar(start, end, 1.5), end);

        assert_relative_eq!(invlerp_scalar(start, end, 0.0), Vec3::new(0.0, -1.0, 0.5));
        assert_relative_eq!(invlerpclip_scalar(start, end, 0.0), Vec3::new(0.0, 0.0, 0.5));
    }
}
