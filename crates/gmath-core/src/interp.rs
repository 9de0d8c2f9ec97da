//! Interpolation and range utilities.
//!
//! Generic over [`Scalar`] so the same helpers serve float vectors and
//! integer color channels:
//!
//! - Linear interpolation ([`lerp`], [`lerp_unclamped`])
//! - Clamping ([`clamp`], [`clamp01`], [`min`], [`max`])
//! - Periodic wrapping ([`wrap`])
//! - Angle conversion ([`deg_to_rad`], [`rad_to_deg`])
//!
//! # Usage
//!
//! ```rust
//! use gmath_core::{lerp, lerp_unclamped};
//!
//! assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
//! assert_eq!(lerp(0.0, 10.0, 1.5), 10.0);
//! assert_eq!(lerp_unclamped(0.0, 10.0, 1.5), 15.0);
//!
//! // Integer channels truncate
//! assert_eq!(lerp(0u8, 255, 0.5), 127);
//! ```

use crate::consts::{DEG_TO_RAD, RAD_TO_DEG};
use crate::scalar::{Real, Scalar};

/// Returns the smaller value, `b` on ties or unordered input.
#[inline]
pub fn min<T: PartialOrd>(a: T, b: T) -> T {
    if a < b { a } else { b }
}

/// Returns the larger value, `b` on ties or unordered input.
#[inline]
pub fn max<T: PartialOrd>(a: T, b: T) -> T {
    if a > b { a } else { b }
}

/// Clamps a value to the range [min, max].
///
/// # Example
///
/// ```rust
/// use gmath_core::clamp;
///
/// assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
/// assert_eq!(clamp(7, 0, 5), 5);
/// ```
#[inline]
pub fn clamp<T: PartialOrd>(value: T, min: T, max: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Clamps a value to [0, 1].
#[inline]
pub fn clamp01<T: Scalar>(value: T) -> T {
    clamp(value, T::zero(), T::one())
}

/// Linear interpolation with `t` clamped to [0, 1].
///
/// # Formula
///
/// `a * (1 - t) + b * t`, evaluated in `f64` and cast back to `T`
/// (truncating for integers).
#[inline]
pub fn lerp<T: Scalar>(a: T, b: T, t: f32) -> T {
    lerp_unclamped(a, b, clamp01(t))
}

/// Linear interpolation without clamping; extrapolates outside [0, 1].
#[inline]
pub fn lerp_unclamped<T: Scalar>(a: T, b: T, t: f32) -> T {
    let t = t as f64;
    T::from_f64_lossy(a.as_f64() * (1.0 - t) + b.as_f64() * t)
}

/// Wraps `value` into the period `[min, max)`.
///
/// # Formula
///
/// `min + (value - min) % (max - min)`
///
/// The remainder takes the sign of the dividend, so values below `min` land
/// below `min` as well:
///
/// ```rust
/// use gmath_core::wrap;
///
/// assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
/// assert_eq!(wrap(-10.0, 0.0, 360.0), -10.0);
/// ```
///
/// Integer subtraction and addition wrap at the type bounds. For unsigned
/// `T` a `value` below `min` wraps to a large offset first, so the result
/// stays in `[min, max)` but is not `value` shifted by a whole period.
///
/// # Panics
///
/// For integer `T` when `max == min` (remainder by zero).
#[inline]
pub fn wrap<T: Scalar>(value: T, min: T, max: T) -> T {
    min.wrapping_add(value.wrapping_sub(min) % max.wrapping_sub(min))
}

/// Converts degrees to radians.
#[inline]
pub fn deg_to_rad<F: Real>(degrees: F) -> F {
    F::from_f64_lossy(degrees.as_f64() * DEG_TO_RAD)
}

/// Converts radians to degrees.
#[inline]
pub fn rad_to_deg<F: Real>(radians: F) -> F {
    F::from_f64_lossy(radians.as_f64() * RAD_TO_DEG)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lerp() {
        assert_eq!(lerp(0.0, 10.0, 0.0), 0.0);
        assert_eq!(lerp(0.0, 10.0, 0.5), 5.0);
        assert_eq!(lerp(0.0, 10.0, 1.0), 10.0);
        assert_eq!(lerp(0.0, 10.0, 1.5), 10.0);
        assert_eq!(lerp(0.0, 10.0, -0.5), 0.0);
    }

    #[test]
    fn test_lerp_unclamped() {
        assert_eq!(lerp_unclamped(0.0, 10.0, 1.5), 15.0);
        assert_eq!(lerp_unclamped(0.0, 10.0, -0.5), -5.0);
        assert_eq!(lerp_unclamped(0i32, 10, 1.5), 15);
    }

    #[test]
    fn test_lerp_integers_truncate() {
        assert_eq!(lerp(0u8, 255, 0.5), 127);
        assert_eq!(lerp(10i32, 0, 0.25), 7);
        assert_eq!(lerp(0u16, 65535, 1.0), 65535);
    }

    #[test]
    fn test_clamp() {
        assert_eq!(clamp(-0.5, 0.0, 1.0), 0.0);
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(1.5, 0.0, 1.0), 1.0);
        assert_eq!(clamp01(2u8), 1);
        assert_eq!(clamp01(-3.0f64), 0.0);
    }

    #[test]
    fn test_min_max() {
        assert_eq!(min(1, 2), 1);
        assert_eq!(max(1.5, -2.0), 1.5);
    }

    #[test]
    fn test_wrap() {
        assert_eq!(wrap(370.0, 0.0, 360.0), 10.0);
        assert_eq!(wrap(5.5, 1.0, 3.0), 1.5);
        assert_eq!(wrap(7, 2, 5), 4);
        // Sign follows the dividend
        assert_eq!(wrap(-10.0, 0.0, 360.0), -10.0);
    }

    #[test]
    fn test_wrap_unsigned_below_min() {
        // 3 - 5 wraps to 254, 254 % 5 = 4.
        assert_eq!(wrap(3u8, 5, 10), 9);
        let v = wrap(0u32, 7, 20);
        assert!((7..20).contains(&v));
        assert_eq!(wrap(-100i8, 100, 110), 106);
    }

    #[test]
    #[should_panic]
    fn test_wrap_empty_integer_period_panics() {
        let _ = wrap(3, 5, 5);
    }

    #[test]
    fn test_angle_conversion() {
        assert_relative_eq!(deg_to_rad(180.0f64), std::f64::consts::PI);
        assert_relative_eq!(rad_to_deg(std::f32::consts::FRAC_PI_2), 90.0);
        assert_relative_eq!(rad_to_deg(deg_to_rad(33.0f64)), 33.0);
    }
}
