//! Approximate scalar kernels.
//!
//! These trade accuracy for speed and are what the vector, matrix and color
//! types are built on. Their error bounds are part of the contract:
//!
//! | kernel                 | error                          |
//! |------------------------|--------------------------------|
//! | [`fast_inverse_sqrt`]  | relative, <= 0.18 %            |
//! | [`sin_approx`]         | absolute, <= 3e-4              |
//! | [`cos_approx`]         | absolute, <= 3e-4              |
//! | [`atan_approx`]        | absolute, <= 1.6e-3 on [-1, 1] |
//! | [`atan2_approx`]       | absolute, <= 1.6e-3            |
//!
//! None of the kernels validates its input. Out-of-domain arguments return
//! unspecified values instead of errors.
//!
//! # Example
//!
//! ```rust
//! use gmath_core::{fast_sqrt, sin_approx};
//!
//! assert!((fast_sqrt(25.0) - 5.0).abs() < 0.01);
//! assert!((sin_approx(1.0f64) - 1.0f64.sin()).abs() < 3e-4);
//! ```

use crate::consts::{HALF_PI, INVERSED_PI, PI, QUARTER_PI};
use crate::scalar::Real;

/// Magic constant of the reciprocal square root estimate.
const RSQRT_MAGIC: u32 = 0x5f37_59df;

/// 2^52 + 2^51: adding it pushes the integer part into the low mantissa bits.
const ROUND_MAGIC: f64 = 6_755_399_441_055_744.0;

// Degree-5 minimax fit of sin on [-pi/2, pi/2].
const SIN_A: f64 = 0.007_352_468_196_870_117_313_413_561_650_968_15;
const SIN_B: f64 = -0.165_289_113_970_147_382_070_163_020_028_888_9;
const SIN_C: f64 = 0.999_691_986_295_967_577_798_301_138_683_605_84;

/// Approximates `1 / sqrt(x)`.
///
/// Reinterprets the float bits as an integer to get a first estimate, then
/// refines it with one Newton-Raphson step. Relative error stays below
/// 0.18 % for positive normal inputs. The result for `x <= 0` is garbage.
///
/// # Example
///
/// ```rust
/// use gmath_core::fast_inverse_sqrt;
///
/// let r = fast_inverse_sqrt(4.0);
/// assert!((r - 0.5).abs() < 0.5 * 0.0018);
/// ```
#[inline]
pub fn fast_inverse_sqrt(x: f32) -> f32 {
    let half = 0.5 * x;
    let y = f32::from_bits(RSQRT_MAGIC.wrapping_sub(x.to_bits() >> 1));
    y * (1.5 - half * y * y)
}

/// Approximates `sqrt(x)` as `fast_inverse_sqrt(x) * x`.
///
/// Returns exactly 0 for `x == 0`.
#[inline]
pub fn fast_sqrt(x: f32) -> f32 {
    fast_inverse_sqrt(x) * x
}

/// Rounds to the nearest `i32` (ties to even) with the magic-number trick.
///
/// Only meaningful for `|x| < 2^31`; anything else returns unspecified bits.
///
/// # Example
///
/// ```rust
/// use gmath_core::fast_round_to_int;
///
/// assert_eq!(fast_round_to_int(1.4), 1);
/// assert_eq!(fast_round_to_int(-1.6), -2);
/// assert_eq!(fast_round_to_int(2.5), 2);
/// ```
#[inline]
pub fn fast_round_to_int(x: f64) -> i32 {
    (x + ROUND_MAGIC).to_bits() as u32 as i32
}

/// Polynomial sine approximation, valid for any `x` with `|x / pi| < 2^31`.
///
/// Reduces `x` by the nearest multiple of pi, evaluates an odd degree-5
/// polynomial and flips the sign for odd multiples. Intermediate values are
/// rounded to `F` after the reduction and after the polynomial, so `f32`
/// and `f64` inputs give different low bits.
#[inline]
pub fn sin_approx<F: Real>(x: F) -> F {
    let k = fast_round_to_int(INVERSED_PI * x.as_f64());
    let reduced = F::from_f64_lossy(x.as_f64() - k as f64 * PI).as_f64();
    let x2 = reduced * reduced;
    let y = F::from_f64_lossy(reduced * (SIN_C + x2 * (SIN_B + SIN_A * x2)));
    if k % 2 != 0 { -y } else { y }
}

/// Cosine through [`sin_approx`]: `sin_approx(pi/2 - x)`.
#[inline]
pub fn cos_approx<F: Real>(x: F) -> F {
    sin_approx(F::from_f64_lossy(HALF_PI - x.as_f64()))
}

/// Quadratic arctangent approximation, valid for `|x| <= 1`.
///
/// `pi/4 * x - x * (|x| - 1) * (0.2447 + 0.0663 * |x|)`
#[inline]
pub fn atan_approx<F: Real>(x: F) -> F {
    let x = x.as_f64();
    let ax = x.abs();
    F::from_f64_lossy(QUARTER_PI * x - x * (ax - 1.0) * (0.2447 + 0.0663 * ax))
}

/// Four-quadrant arctangent built on [`atan_approx`].
///
/// The ratio handed to [`atan_approx`] always has magnitude <= 1: when
/// `|x| > |y|` the angle is `atan(y/x)` shifted by +-pi in the left
/// half-plane, otherwise it is the complement `+-pi/2 - atan(x/y)` with the
/// sign of `y`. On the negative x axis the sign bit of `y` picks the side,
/// so `+0.0` gives `pi` and `-0.0` gives `-pi`, as with `f64::atan2`.
/// Returns NaN for `x == y == 0`.
///
/// # Example
///
/// ```rust
/// use gmath_core::atan2_approx;
///
/// let a = atan2_approx(1.0f64, -0.5);
/// assert!((a - 1.0f64.atan2(-0.5)).abs() < 2e-3);
/// ```
pub fn atan2_approx<F: Real>(y: F, x: F) -> F {
    if x.abs() > y.abs() {
        let at = atan_approx(y / x).as_f64();
        let angle = if x > F::zero() {
            at
        } else if y.is_sign_positive() {
            at + PI
        } else {
            at - PI
        };
        F::from_f64_lossy(angle)
    } else {
        let at = atan_approx(x / y).as_f64();
        let angle = if y > F::zero() { HALF_PI - at } else { -HALF_PI - at };
        F::from_f64_lossy(angle)
    }
}
