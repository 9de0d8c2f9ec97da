//! Four-channel integer color.
//!
//! [`Color<T>`] holds `r, g, b, a` channels of an unsigned [`Channel`] type.
//! A channel spans `[0, T::MAX]`; `T::MAX` maps to 1.0 when normalized.
//!
//! # Hex packing
//!
//! Hex values are always 8 bits per channel in `0xRRGGBBAA` order. Wider
//! channel types scale each byte by the integer factor `T::MAX / 255` when
//! decoding and divide by it (truncating) when encoding:
//!
//! | channel | factor               | `0x80` decodes to        |
//! |---------|----------------------|--------------------------|
//! | `u8`    | 1                    | 128                      |
//! | `u16`   | 257                  | 32896                    |
//! | `u32`   | 16843009             | 2155905152               |
//! | `u64`   | 72340172838076673    | 9259542123273814144      |
//!
//! Every factor divides `T::MAX` exactly, so decoding then encoding returns
//! the original hex value for all four widths.
//!
//! # Arithmetic
//!
//! `+ - * /` are defined between colors of the same channel type only. Each
//! channel is computed in `i128` and clamped to `[0, T::MAX]`, so
//! overflow saturates at full intensity and underflow at zero:
//!
//! ```rust
//! use gmath_color::Color;
//!
//! let a = Color::new(200u8, 10, 0, 255);
//! let b = Color::new(100u8, 20, 0, 255);
//! assert_eq!(a + b, Color::new(255, 30, 0, 255));
//! assert_eq!(a - b, Color::new(100, 0, 0, 0));
//! ```

use gmath_core::{Channel, Random, uniform_random};
use gmath_linalg::Vector;
use std::fmt;
use std::ops::{Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Sub, SubAssign};
use wide::{f32x4, f64x4};

/// RGBA color with unsigned integer channels.
///
/// # Example
///
/// ```rust
/// use gmath_color::Color;
///
/// let red = Color::<u8>::from_hex(0xFF0000FF);
/// assert_eq!(red.r(), 255);
/// assert_eq!(red.get_hex(), 0xFF0000FF);
/// assert_eq!(red.normalized().to_array(), [1.0, 0.0, 0.0, 1.0]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[repr(transparent)]
pub struct Color<T> {
    data: [T; 4],
}

/// 8 bits per channel.
pub type Color8 = Color<u8>;
/// 16 bits per channel.
pub type Color16 = Color<u16>;
/// 32 bits per channel.
pub type Color32 = Color<u32>;
/// 64 bits per channel.
pub type Color64 = Color<u64>;

impl<T: Channel> Color<T> {
    /// Creates a color from channel values.
    #[inline]
    pub const fn new(r: T, g: T, b: T, a: T) -> Self {
        Self { data: [r, g, b, a] }
    }

    /// Creates a color from `[r, g, b, a]`.
    #[inline]
    pub const fn from_array(data: [T; 4]) -> Self {
        Self { data }
    }

    /// Decodes a `0xRRGGBBAA` value, see [`set_hex`](Self::set_hex).
    #[inline]
    pub fn from_hex(hex: u32) -> Self {
        let mut c = Self::zero();
        c.set_hex(hex);
        c
    }

    /// All channels zero (transparent black).
    #[inline]
    pub fn zero() -> Self {
        Self {
            data: [T::zero(); 4],
        }
    }

    /// Sets every channel to zero.
    #[inline]
    pub fn zero_out(&mut self) {
        self.data = [T::zero(); 4];
    }

    /// Overwrites all channels from a `0xRRGGBBAA` value, scaling each byte
    /// by `T::MAX / 255`.
    pub fn set_hex(&mut self, hex: u32) {
        let factor = Self::hex_factor();
        for (i, channel) in self.data.iter_mut().enumerate() {
            let byte = (hex >> (24 - 8 * i)) & 0xFF;
            *channel = T::from_u64_lossy(u64::from(byte) * factor);
        }
    }

    /// Encodes as `0xRRGGBBAA`, dividing each channel by `T::MAX / 255`
    /// (truncating).
    ///
    /// ```rust
    /// use gmath_color::Color;
    ///
    /// // 1000 / 257 = 3.89 truncates to 3
    /// assert_eq!(Color::new(1000u16, 0, 0, 65535).get_hex(), 0x030000FF);
    /// ```
    pub fn get_hex(&self) -> u32 {
        let factor = Self::hex_factor();
        self.data.iter().fold(0u32, |hex, channel| {
            (hex << 8) | ((channel.as_u64() / factor) & 0xFF) as u32
        })
    }

    #[inline]
    fn hex_factor() -> u64 {
        <T as Channel>::MAX.as_u64() / u64::from(u8::MAX)
    }

    /// Largest channel value, `T::MAX`.
    #[inline]
    pub fn max_channel_value() -> T {
        <T as Channel>::MAX
    }

    /// Red channel.
    #[inline]
    pub fn r(&self) -> T {
        self.data[0]
    }

    /// Green channel.
    #[inline]
    pub fn g(&self) -> T {
        self.data[1]
    }

    /// Blue channel.
    #[inline]
    pub fn b(&self) -> T {
        self.data[2]
    }

    /// Alpha channel.
    #[inline]
    pub fn a(&self) -> T {
        self.data[3]
    }

    /// Sets the red channel.
    #[inline]
    pub fn set_r(&mut self, v: T) {
        self.data[0] = v;
    }

    /// Sets the green channel.
    #[inline]
    pub fn set_g(&mut self, v: T) {
        self.data[1] = v;
    }

    /// Sets the blue channel.
    #[inline]
    pub fn set_b(&mut self, v: T) {
        self.data[2] = v;
    }

    /// Sets the alpha channel.
    #[inline]
    pub fn set_a(&mut self, v: T) {
        self.data[3] = v;
    }

    /// Channels as `[r, g, b, a]`.
    #[inline]
    pub const fn as_array(&self) -> &[T; 4] {
        &self.data
    }

    /// Channels as an integer vector.
    #[inline]
    pub fn to_vector(self) -> Vector<T, 4> {
        Vector::from_array(self.data)
    }

    /// Channels divided by `T::MAX`, in `f32`.
    ///
    /// Wide channel types lose precision in the `f32` conversion; use
    /// [`normalized_precise`](Self::normalized_precise) for those.
    pub fn normalized(&self) -> Vector<f32, 4> {
        let channels = f32x4::from(self.data.map(|c| c.as_f32()));
        let max = f32x4::splat(<T as Channel>::MAX.as_f32());
        Vector::from_array((channels / max).to_array())
    }

    /// Channels divided by `T::MAX`, in `f64`.
    pub fn normalized_precise(&self) -> Vector<f64, 4> {
        let channels = f64x4::from(self.data.map(|c| c.as_f64()));
        let max = f64x4::splat(<T as Channel>::MAX.as_f64());
        Vector::from_array((channels / max).to_array())
    }

    /// Replaces r, g and b with their truncated average; alpha is kept.
    ///
    /// The sum is taken in `u128`, so full-intensity `u64` channels average
    /// correctly.
    pub fn grayscale(&self) -> Self {
        let sum: u128 = self.data[..3].iter().map(|c| u128::from(c.as_u64())).sum();
        let avg = T::from_u64_lossy((sum / 3) as u64);
        Self::new(avg, avg, avg, self.a())
    }

    /// Per-channel [`gmath_core::lerp`] (`t` clamped to [0, 1]).
    pub fn lerp(self, other: Self, t: f32) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            gmath_core::lerp(self.data[i], other.data[i], t)
        }))
    }

    /// Per-channel [`gmath_core::lerp_unclamped`]. Results outside the
    /// channel range saturate.
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        Self::from_array(std::array::from_fn(|i| {
            gmath_core::lerp_unclamped(self.data[i], other.data[i], t)
        }))
    }

    /// Fills all four channels with uniform values in `[min, max]` from the
    /// process-wide generator.
    pub fn randomize(&mut self, min: T, max: T) {
        for c in &mut self.data {
            *c = uniform_random(min, max);
        }
    }

    /// Fills all four channels with uniform values in `[min, max]` from `rng`.
    pub fn randomize_with(&mut self, rng: &mut Random, min: T, max: T) {
        for c in &mut self.data {
            *c = rng.uniform(min, max);
        }
    }

    /// Compares grayscale intensity (alpha ignored).
    #[inline]
    pub fn is_greater(&self, other: &Self) -> bool {
        self.grayscale().r() > other.grayscale().r()
    }

    /// Logical negation of [`is_greater`](Self::is_greater): colors of
    /// equal intensity are "less" than each other.
    #[inline]
    pub fn is_less(&self, other: &Self) -> bool {
        !self.is_greater(other)
    }

    #[inline]
    fn combine(self, rhs: Self, op: impl Fn(i128, i128) -> i128) -> Self {
        let max = <T as Channel>::MAX.as_i128();
        Self::from_array(std::array::from_fn(|i| {
            let v = op(self.data[i].as_i128(), rhs.data[i].as_i128());
            T::from_i128_lossy(v.clamp(0, max))
        }))
    }
}

impl<T: Channel> From<u32> for Color<T> {
    #[inline]
    fn from(hex: u32) -> Self {
        Self::from_hex(hex)
    }
}

impl<T: Channel> From<[T; 4]> for Color<T> {
    #[inline]
    fn from(data: [T; 4]) -> Self {
        Self::from_array(data)
    }
}

impl<T> Index<usize> for Color<T> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T> IndexMut<usize> for Color<T> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

macro_rules! impl_clamped_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $f:expr) => {
        impl<T: Channel> $Op for Color<T> {
            type Output = Self;

            #[inline]
            fn $op(self, rhs: Self) -> Self {
                self.combine(rhs, $f)
            }
        }

        impl<T: Channel> $OpAssign for Color<T> {
            #[inline]
            fn $op_assign(&mut self, rhs: Self) {
                *self = self.combine(rhs, $f);
            }
        }
    };
}

impl_clamped_op!(Add, add, AddAssign, add_assign, |a, b| a + b);
impl_clamped_op!(Sub, sub, SubAssign, sub_assign, |a, b| a - b);
// u64 * u64 can exceed i128; saturate before clamping.
impl_clamped_op!(Mul, mul, MulAssign, mul_assign, |a: i128, b| a.checked_mul(b).unwrap_or(i128::MAX));
impl_clamped_op!(Div, div, DivAssign, div_assign, |a, b| a / b);

impl<T: Channel> fmt::Display for Color<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "color({}, {}, {}, {})",
            self.r().as_u64(),
            self.g().as_u64(),
            self.b().as_u64(),
            self.a().as_u64()
        )
    }
}
