//! Numeric element traits.
//!
//! Every gmath container is generic over its element type. This module
//! defines what an element is and how two element types combine:
//!
//! - [`Scalar`] - any primitive number usable as a vector/matrix element
//! - [`Real`] - floating point scalars (`f32`, `f64`) for trigonometry
//! - [`Promote`] - the element type produced by mixing two scalar types
//! - [`Channel`] - unsigned integer widths usable as color channels
//!
//! # Promotion
//!
//! Mixing element types never silently picks one operand's type. The result
//! type of `a op b` is the type of `a * b` under the usual arithmetic
//! conversions:
//!
//! 1. `f64` wins over everything, then `f32`.
//! 2. Integers narrower than 32 bits are promoted to `i32` first.
//! 3. Two integers of the same signedness take the wider type.
//! 4. Mixed signedness takes the unsigned type unless the signed type is
//!    wider (`i32 x u32 = u32`, `i64 x u32 = i64`, `i32 x u64 = u64`).
//!
//! ```rust
//! use gmath_core::Promote;
//!
//! fn out<T: Promote<U>, U: gmath_core::Scalar>(a: T, b: U) -> <T as Promote<U>>::Output {
//!     a.promote() * T::promote_rhs(b)
//! }
//!
//! let x: f32 = out(2u8, 1.5f32);
//! let y: i32 = out(200u8, 200u8);
//! assert_eq!(x, 3.0);
//! assert_eq!(y, 40_000);
//! ```

use crate::fast::fast_inverse_sqrt;
use num_traits::{Float, Num};
use std::fmt::{Debug, Display};
use std::hash::Hash;
use std::ops::{AddAssign, DivAssign, MulAssign, SubAssign};

/// Trait for vector, matrix and color element types.
///
/// Implemented for `i8`, `i16`, `i32`, `i64`, `u8`, `u16`, `u32`, `u64`,
/// `f32` and `f64`.
///
/// # Conversions
///
/// [`as_f64`](Scalar::as_f64) and [`from_f64_lossy`](Scalar::from_f64_lossy)
/// are plain `as` casts: float to integer truncates toward zero and
/// saturates at the integer bounds.
pub trait Scalar:
    Copy
    + Default
    + PartialOrd
    + Debug
    + Display
    + Send
    + Sync
    + 'static
    + Num
    + AddAssign
    + SubAssign
    + MulAssign
    + DivAssign
{
    /// Whether this is a floating-point type.
    const IS_FLOAT: bool;

    /// Widens to `f64`.
    fn as_f64(self) -> f64;

    /// Converts to `f32` (may round for wide integers and `f64`).
    fn as_f32(self) -> f32;

    /// Casts from `f64`, truncating toward zero for integers.
    fn from_f64_lossy(v: f64) -> Self;

    /// Absolute difference `|self - other|` without leaving the type.
    ///
    /// Defined for unsigned types as well, where `self - other` alone would
    /// underflow. Signed differences beyond `MAX` wrap
    /// (`100i8.abs_delta(-100) == -56`).
    #[inline]
    fn abs_delta(self, other: Self) -> Self {
        if self > other {
            self.wrapping_sub(other)
        } else {
            other.wrapping_sub(self)
        }
    }

    /// `self + rhs`, wrapping around at the bounds of integer types.
    ///
    /// Plain addition for floats.
    fn wrapping_add(self, rhs: Self) -> Self;

    /// `self - rhs`, wrapping around at the bounds of integer types.
    fn wrapping_sub(self, rhs: Self) -> Self;

    /// `self * rhs`, wrapping around at the bounds of integer types.
    fn wrapping_mul(self, rhs: Self) -> Self;

    /// Approximate square root through [`fast_inverse_sqrt`].
    ///
    /// The reciprocal estimate is always computed in `f32`; the final
    /// multiply by `self` happens in the element type's arithmetic, so
    /// integers truncate the result. Garbage for negative input.
    fn fast_sqrt(self) -> Self;
}

macro_rules! impl_scalar_int {
    ($($t:ty),*) => {$(
        impl Scalar for $t {
            const IS_FLOAT: bool = false;

            #[inline]
            fn as_f64(self) -> f64 {
                self as f64
            }

            #[inline]
            fn as_f32(self) -> f32 {
                self as f32
            }

            #[inline]
            fn from_f64_lossy(v: f64) -> Self {
                v as $t
            }

            #[inline]
            fn wrapping_add(self, rhs: Self) -> Self {
                <$t>::wrapping_add(self, rhs)
            }

            #[inline]
            fn wrapping_sub(self, rhs: Self) -> Self {
                <$t>::wrapping_sub(self, rhs)
            }

            #[inline]
            fn wrapping_mul(self, rhs: Self) -> Self {
                <$t>::wrapping_mul(self, rhs)
            }

            #[inline]
            fn fast_sqrt(self) -> Self {
                let x = self as f32;
                (fast_inverse_sqrt(x) * x) as $t
            }
        }
    )*};
}

impl_scalar_int!(i8, i16, i32, i64, u8, u16, u32, u64);

impl Scalar for f32 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn as_f64(self) -> f64 {
        self as f64
    }

    #[inline]
    fn as_f32(self) -> f32 {
        self
    }

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v as f32
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn fast_sqrt(self) -> Self {
        fast_inverse_sqrt(self) * self
    }
}

impl Scalar for f64 {
    const IS_FLOAT: bool = true;

    #[inline]
    fn as_f64(self) -> f64 {
        self
    }

    #[inline]
    fn as_f32(self) -> f32 {
        self as f32
    }

    #[inline]
    fn from_f64_lossy(v: f64) -> Self {
        v
    }

    #[inline]
    fn wrapping_add(self, rhs: Self) -> Self {
        self + rhs
    }

    #[inline]
    fn wrapping_sub(self, rhs: Self) -> Self {
        self - rhs
    }

    #[inline]
    fn wrapping_mul(self, rhs: Self) -> Self {
        self * rhs
    }

    #[inline]
    fn fast_sqrt(self) -> Self {
        fast_inverse_sqrt(self as f32) as f64 * self
    }
}

/// Floating point scalars: `f32` and `f64`.
///
/// Required by the trigonometric kernels and the projection/rotation
/// matrix builders.
pub trait Real: Scalar + Float {}

impl Real for f32 {}
impl Real for f64 {}

/// Element type obtained by combining `Self` with `Rhs`.
///
/// See the [module documentation](self) for the promotion rules. All three
/// conversions are `as` casts.
pub trait Promote<Rhs: Scalar>: Scalar {
    /// Type of `Self * Rhs`.
    type Output: Scalar;

    /// Casts the left operand to the promoted type.
    fn promote(self) -> <Self as Promote<Rhs>>::Output;

    /// Casts the right operand to the promoted type.
    fn promote_rhs(rhs: Rhs) -> <Self as Promote<Rhs>>::Output;

    /// Casts a promoted value back to `Self` (compound assignment).
    fn demote(value: <Self as Promote<Rhs>>::Output) -> Self;
}

macro_rules! impl_promote {
    ($lhs:ty => $($rhs:ty: $out:ty),* $(,)?) => {$(
        impl Promote<$rhs> for $lhs {
            type Output = $out;

            #[inline]
            fn promote(self) -> $out {
                self as $out
            }

            #[inline]
            fn promote_rhs(rhs: $rhs) -> $out {
                rhs as $out
            }

            #[inline]
            fn demote(value: $out) -> $lhs {
                value as $lhs
            }
        }
    )*};
}

// Narrow integers behave as i32 on either side.
macro_rules! impl_promote_as_i32 {
    ($($lhs:ty),*) => {$(
        impl_promote!($lhs =>
            i8: i32, i16: i32, i32: i32, i64: i64,
            u8: i32, u16: i32, u32: u32, u64: u64,
            f32: f32, f64: f64,
        );
    )*};
}

impl_promote_as_i32!(i8, i16, i32, u8, u16);

impl_promote!(i64 =>
    i8: i64, i16: i64, i32: i64, i64: i64,
    u8: i64, u16: i64, u32: i64, u64: u64,
    f32: f32, f64: f64,
);

impl_promote!(u32 =>
    i8: u32, i16: u32, i32: u32, i64: i64,
    u8: u32, u16: u32, u32: u32, u64: u64,
    f32: f32, f64: f64,
);

impl_promote!(u64 =>
    i8: u64, i16: u64, i32: u64, i64: u64,
    u8: u64, u16: u64, u32: u64, u64: u64,
    f32: f32, f64: f64,
);

impl_promote!(f32 =>
    i8: f32, i16: f32, i32: f32, i64: f32,
    u8: f32, u16: f32, u32: f32, u64: f32,
    f32: f32, f64: f64,
);

impl_promote!(f64 =>
    i8: f64, i16: f64, i32: f64, i64: f64,
    u8: f64, u16: f64, u32: f64, u64: f64,
    f32: f64, f64: f64,
);

mod sealed {
    pub trait Sealed {}

    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
    impl Sealed for u64 {}
}

/// Unsigned integer widths usable as color channels.
///
/// Implemented for `u8`, `u16`, `u32` and `u64`. The channel maximum is the
/// type maximum, and hex packing scales 8-bit bytes by the integer factor
/// `MAX / 255`, which is at least 1 for every implementor. A hypothetical
/// channel narrower than 8 bits would get a factor of 0 and decode every hex
/// value to zero; the trait is sealed so that case cannot arise.
pub trait Channel: Scalar + Ord + Hash + sealed::Sealed {
    /// Largest representable channel value.
    const MAX: Self;

    /// Bits per channel.
    const BITS: u32;

    /// Widens to `u64`.
    fn as_u64(self) -> u64;

    /// Widens to `i128` for overflow-free channel arithmetic.
    fn as_i128(self) -> i128;

    /// Truncating cast from `u64`.
    fn from_u64_lossy(v: u64) -> Self;

    /// Truncating cast from `i128`.
    fn from_i128_lossy(v: i128) -> Self;
}

macro_rules! impl_channel {
    ($($t:ty),*) => {$(
        impl Channel for $t {
            const MAX: Self = <$t>::MAX;
            const BITS: u32 = <$t>::BITS;

            #[inline]
            fn as_u64(self) -> u64 {
                self as u64
            }

            #[inline]
            fn as_i128(self) -> i128 {
                self as i128
            }

            #[inline]
            fn from_u64_lossy(v: u64) -> Self {
                v as $t
            }

            #[inline]
            fn from_i128_lossy(v: i128) -> Self {
                v as $t
            }
        }
    )*};
}

impl_channel!(u8, u16, u32, u64);
