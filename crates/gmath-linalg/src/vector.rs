//! Fixed-size vector type.
//!
//! [`Vector<T, N>`] stores `N` elements of any [`Scalar`] type in a plain
//! array. Lengths 2, 3 and 4 add named accessors (`x`, `y`, `z`, `w`) that
//! read and write the same array slots as indexing, so both views always
//! agree.
//!
//! # Mixed element types
//!
//! Arithmetic between vectors of different element types is allowed. The
//! result element type is the [`Promote`] output of the two operand types:
//!
//! ```rust
//! use gmath_linalg::{vec2, vec3, Vector};
//!
//! let a = vec3(1i32, 2, 3);
//! let b = vec3(0.5f32, 0.5, 0.5);
//! let c: Vector<f32, 3> = a + b;
//! assert_eq!(c, vec3(1.5, 2.5, 3.5));
//!
//! // u8 + u8 computes in i32 and does not wrap
//! let wide = vec2(200u8, 1) + vec2(100u8, 1);
//! assert_eq!(wide, vec2(300i32, 2));
//! ```
//!
//! Compound assignment keeps the left operand's type and casts the promoted
//! result back (truncating toward zero for integers). Element type changes
//! are otherwise explicit through [`Vector::to`].
//!
//! # Approximate geometry
//!
//! [`magnitude`](Vector::magnitude) goes through [`Scalar::fast_sqrt`], so
//! lengths carry its ~0.18 % undershoot. A few operations keep long-standing
//! numeric quirks that callers rely on:
//!
//! - [`sqr_magnitude`](Vector::sqr_magnitude) squares the approximate
//!   magnitude instead of summing squares
//! - [`set_magnitude`](Vector::set_magnitude) only scales for targets above 1
//! - [`distance`](Vector::distance) is the square root of the sum of
//!   absolute differences, not the Euclidean distance
//! - [`is_less`](Vector::is_less) is the negation of
//!   [`is_greater`](Vector::is_greater), so equal magnitudes count as less

use gmath_core::{Error, Promote, Random, Result, Scalar, uniform_random};
use num_traits::{AsPrimitive, Signed};
use std::fmt;
use std::ops::{
    Add, AddAssign, Div, DivAssign, Index, IndexMut, Mul, MulAssign, Neg, Sub, SubAssign,
};

/// A vector of `N` elements of type `T`.
///
/// # Example
///
/// ```rust
/// use gmath_linalg::vec2;
///
/// let mut v = vec2(3.0f32, 4.0);
/// v.set_x(6.0);
/// assert_eq!(v[0], 6.0);
/// assert!((vec2(3.0f32, 4.0).magnitude() - 5.0).abs() < 0.01);
/// ```
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Vector<T, const N: usize> {
    data: [T; N],
}

/// 2D `f32` vector.
pub type Vec2 = Vector<f32, 2>;
/// 3D `f32` vector.
pub type Vec3 = Vector<f32, 3>;
/// 4D `f32` vector.
pub type Vec4 = Vector<f32, 4>;
/// 2D `f64` vector.
pub type DVec2 = Vector<f64, 2>;
/// 3D `f64` vector.
pub type DVec3 = Vector<f64, 3>;
/// 4D `f64` vector.
pub type DVec4 = Vector<f64, 4>;

/// Two-element vector.
pub type Vector2<T> = Vector<T, 2>;
/// Three-element vector.
pub type Vector3<T> = Vector<T, 3>;
/// Four-element vector.
pub type Vector4<T> = Vector<T, 4>;

/// Creates a [`Vector2`].
#[inline]
pub const fn vec2<T: Scalar>(x: T, y: T) -> Vector2<T> {
    Vector2::new(x, y)
}

/// Creates a [`Vector3`].
#[inline]
pub const fn vec3<T: Scalar>(x: T, y: T, z: T) -> Vector3<T> {
    Vector3::new(x, y, z)
}

/// Creates a [`Vector4`].
#[inline]
pub const fn vec4<T: Scalar>(x: T, y: T, z: T, w: T) -> Vector4<T> {
    Vector4::new(x, y, z, w)
}

impl<T: Scalar, const N: usize> Vector<T, N> {
    /// Creates a vector from an array.
    #[inline]
    pub const fn from_array(data: [T; N]) -> Self {
        Self { data }
    }

    /// Creates a vector with every element set to `v`.
    #[inline]
    pub fn splat(v: T) -> Self {
        Self { data: [v; N] }
    }

    /// The zero vector.
    #[inline]
    pub fn zero() -> Self {
        Self::splat(T::zero())
    }

    /// Number of elements.
    #[inline]
    pub const fn len(&self) -> usize {
        N
    }

    /// Returns `true` for zero-length vectors.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        N == 0
    }

    /// Element `i`, or `None` when out of range.
    #[inline]
    pub fn get(&self, i: usize) -> Option<&T> {
        self.data.get(i)
    }

    /// Mutable element `i`, or `None` when out of range.
    #[inline]
    pub fn get_mut(&mut self, i: usize) -> Option<&mut T> {
        self.data.get_mut(i)
    }

    /// Borrows the backing array.
    #[inline]
    pub const fn as_array(&self) -> &[T; N] {
        &self.data
    }

    /// Copies the elements out.
    #[inline]
    pub const fn to_array(self) -> [T; N] {
        self.data
    }

    /// Elements as a slice.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Elements as a mutable slice.
    #[inline]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        &mut self.data
    }

    /// Iterates over the elements.
    #[inline]
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Sets every element to zero.
    #[inline]
    pub fn zero_out(&mut self) {
        self.data = [T::zero(); N];
    }

    /// Fills the vector with uniform values in `[min, max]` from the
    /// process-wide generator.
    pub fn randomize(&mut self, min: T, max: T) {
        for e in &mut self.data {
            *e = uniform_random(min, max);
        }
    }

    /// Fills the vector with uniform values in `[min, max]` from `rng`.
    pub fn randomize_with(&mut self, rng: &mut Random, min: T, max: T) {
        for e in &mut self.data {
            *e = rng.uniform(min, max);
        }
    }

    /// Approximate length: [`Scalar::fast_sqrt`] of the sum of squares.
    ///
    /// The sum is accumulated in `T` with wrapping arithmetic, so integer
    /// vectors whose squared length exceeds the element range get the
    /// length of the wrapped sum:
    ///
    /// ```rust
    /// use gmath_core::Scalar;
    /// use gmath_linalg::vec2;
    ///
    /// // 20 * 20 = 400 wraps to 144 in u8.
    /// assert_eq!(vec2(20u8, 0).magnitude(), 144u8.fast_sqrt());
    /// ```
    #[inline]
    pub fn magnitude(&self) -> T {
        let mut sum = T::zero();
        for &e in &self.data {
            sum = sum.wrapping_add(e.wrapping_mul(e));
        }
        sum.fast_sqrt()
    }

    /// Square of [`magnitude`](Self::magnitude).
    ///
    /// Not the exact sum of squares: the approximate length is computed
    /// first and then squared.
    #[inline]
    pub fn sqr_magnitude(&self) -> T {
        let m = self.magnitude();
        m * m
    }

    /// Scales to unit length in place. A vector with zero magnitude is
    /// zeroed instead.
    pub fn normalize(&mut self) {
        let m = self.magnitude();
        if m > T::zero() {
            for e in &mut self.data {
                *e /= m;
            }
        } else {
            self.zero_out();
        }
    }

    /// Returns a normalized copy.
    #[inline]
    pub fn normalized(&self) -> Self {
        let mut v = *self;
        v.normalize();
        v
    }

    /// Normalizes, then scales by `m` if `m > 1`.
    ///
    /// Targets at or below 1 leave the vector at unit length:
    ///
    /// ```rust
    /// use gmath_linalg::vec2;
    ///
    /// let mut v = vec2(30.0f32, 40.0);
    /// v.set_magnitude(0.5);
    /// assert!((v.magnitude() - 1.0).abs() < 0.01);
    /// ```
    pub fn set_magnitude(&mut self, m: T) {
        self.normalize();
        if m.as_f64() > 1.0 {
            for e in &mut self.data {
                *e = e.wrapping_mul(m);
            }
        }
    }

    /// Square root of the summed absolute element differences.
    ///
    /// This is `sqrt(sum |a_i - b_i|)`, which differs from the Euclidean
    /// distance for anything but axis-aligned unit steps:
    ///
    /// ```rust
    /// use gmath_linalg::vec2;
    ///
    /// let d = vec2(0.0f32, 0.0).distance(vec2(3.0, 4.0));
    /// assert!((d - 7.0f32.sqrt()).abs() < 0.01);
    /// ```
    pub fn distance(self, other: Self) -> T {
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(&other.data) {
            sum = sum.wrapping_add(a.abs_delta(b));
        }
        sum.fast_sqrt()
    }

    /// Dot product, accumulated in `T` (wrapping for integers).
    #[inline]
    pub fn dot(self, other: Self) -> T {
        let mut sum = T::zero();
        for (&a, &b) in self.data.iter().zip(&other.data) {
            sum = sum.wrapping_add(a.wrapping_mul(b));
        }
        sum
    }

    /// Element-wise minimum.
    #[inline]
    pub fn min(self, other: Self) -> Self {
        self.zip_map(other, gmath_core::min)
    }

    /// Element-wise maximum.
    #[inline]
    pub fn max(self, other: Self) -> Self {
        self.zip_map(other, gmath_core::max)
    }

    /// Element-wise [`gmath_core::lerp`] (`t` clamped to [0, 1]).
    #[inline]
    pub fn lerp(self, other: Self, t: f32) -> Self {
        self.zip_map(other, |a, b| gmath_core::lerp(a, b, t))
    }

    /// Element-wise [`gmath_core::lerp_unclamped`].
    #[inline]
    pub fn lerp_unclamped(self, other: Self, t: f32) -> Self {
        self.zip_map(other, |a, b| gmath_core::lerp_unclamped(a, b, t))
    }

    /// Returns a copy rescaled with [`set_magnitude`](Self::set_magnitude)
    /// when its magnitude exceeds `max`, else an unchanged copy.
    pub fn clamp_magnitude(self, max: T) -> Self {
        let mut v = self;
        if v.magnitude() > max {
            v.set_magnitude(max);
        }
        v
    }

    /// Compares magnitudes in the promoted element type.
    pub fn is_greater<U: Scalar>(&self, other: &Vector<U, N>) -> bool
    where
        T: Promote<U>,
    {
        <T as Promote<U>>::promote(self.magnitude())
            > <T as Promote<U>>::promote_rhs(other.magnitude())
    }

    /// Logical negation of [`is_greater`](Self::is_greater).
    ///
    /// Vectors of equal magnitude are therefore "less" than each other.
    #[inline]
    pub fn is_less<U: Scalar>(&self, other: &Vector<U, N>) -> bool
    where
        T: Promote<U>,
    {
        !self.is_greater(other)
    }

    /// Casts every element to `U` with `as` semantics.
    ///
    /// Float to integer truncates toward zero and saturates:
    ///
    /// ```rust
    /// use gmath_linalg::vec3;
    ///
    /// let v = vec3(1.9f32, -1.9, 300.0).to::<u8>();
    /// assert_eq!(v, vec3(1u8, 0, 255));
    /// ```
    #[inline]
    pub fn to<U>(self) -> Vector<U, N>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Vector::from_array(self.data.map(|e| AsPrimitive::<U>::as_(e)))
    }

    #[inline]
    fn zip_map(self, other: Self, mut f: impl FnMut(T, T) -> T) -> Self {
        Self::from_array(std::array::from_fn(|i| f(self.data[i], other.data[i])))
    }
}

impl<T: Scalar> Vector<T, 2> {
    /// Creates a 2D vector.
    #[inline]
    pub const fn new(x: T, y: T) -> Self {
        Self { data: [x, y] }
    }
}

impl<T: Scalar> Vector<T, 3> {
    /// Creates a 3D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T) -> Self {
        Self { data: [x, y, z] }
    }
}

impl<T: Scalar> Vector<T, 4> {
    /// Creates a 4D vector.
    #[inline]
    pub const fn new(x: T, y: T, z: T, w: T) -> Self {
        Self { data: [x, y, z, w] }
    }
}

macro_rules! impl_named_accessors {
    ($n:literal: $($get:ident, $set:ident, $get_mut:ident => $i:literal),+) => {
        impl<T: Scalar> Vector<T, $n> {
            $(
                #[doc = concat!("Element ", stringify!($i), " (`", stringify!($get), "`).")]
                #[inline]
                pub fn $get(&self) -> T {
                    self.data[$i]
                }

                #[doc = concat!("Sets element ", stringify!($i), ".")]
                #[inline]
                pub fn $set(&mut self, v: T) {
                    self.data[$i] = v;
                }

                #[doc = concat!("Mutable reference to element ", stringify!($i), ".")]
                #[inline]
                pub fn $get_mut(&mut self) -> &mut T {
                    &mut self.data[$i]
                }
            )+
        }
    };
}

impl_named_accessors!(2: x, set_x, x_mut => 0, y, set_y, y_mut => 1);
impl_named_accessors!(3: x, set_x, x_mut => 0, y, set_y, y_mut => 1, z, set_z, z_mut => 2);
impl_named_accessors!(4:
    x, set_x, x_mut => 0,
    y, set_y, y_mut => 1,
    z, set_z, z_mut => 2,
    w, set_w, w_mut => 3
);

// Direction constants need -1, so they exist for signed element types only.
impl<T: Scalar + Signed> Vector<T, 2> {
    /// (-1, 0)
    #[inline]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero())
    }

    /// (1, 0)
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero())
    }

    /// (0, 1)
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one())
    }

    /// (0, -1)
    #[inline]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one())
    }
}

impl<T: Scalar + Signed> Vector<T, 3> {
    /// (-1, 0, 0)
    #[inline]
    pub fn left() -> Self {
        Self::new(-T::one(), T::zero(), T::zero())
    }

    /// (1, 0, 0)
    #[inline]
    pub fn right() -> Self {
        Self::new(T::one(), T::zero(), T::zero())
    }

    /// (0, 1, 0)
    #[inline]
    pub fn up() -> Self {
        Self::new(T::zero(), T::one(), T::zero())
    }

    /// (0, -1, 0)
    #[inline]
    pub fn down() -> Self {
        Self::new(T::zero(), -T::one(), T::zero())
    }

    /// (0, 0, 1)
    #[inline]
    pub fn forward() -> Self {
        Self::new(T::zero(), T::zero(), T::one())
    }

    /// (0, 0, -1)
    #[inline]
    pub fn back() -> Self {
        Self::new(T::zero(), T::zero(), -T::one())
    }
}

impl<T: Scalar, const N: usize> Default for Vector<T, N> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const N: usize> From<[T; N]> for Vector<T, N> {
    #[inline]
    fn from(data: [T; N]) -> Self {
        Self::from_array(data)
    }
}

impl<T: Scalar, const N: usize> From<Vector<T, N>> for [T; N] {
    #[inline]
    fn from(v: Vector<T, N>) -> Self {
        v.data
    }
}

impl<T: Scalar, const N: usize> TryFrom<&[T]> for Vector<T, N> {
    type Error = Error;

    fn try_from(slice: &[T]) -> Result<Self> {
        <[T; N]>::try_from(slice)
            .map(Self::from_array)
            .map_err(|_| Error::length_mismatch(N, slice.len()))
    }
}

impl<T, const N: usize> Index<usize> for Vector<T, N> {
    type Output = T;

    #[inline]
    fn index(&self, i: usize) -> &T {
        &self.data[i]
    }
}

impl<T, const N: usize> IndexMut<usize> for Vector<T, N> {
    #[inline]
    fn index_mut(&mut self, i: usize) -> &mut T {
        &mut self.data[i]
    }
}

impl<T, const N: usize> IntoIterator for Vector<T, N> {
    type Item = T;
    type IntoIter = std::array::IntoIter<T, N>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T, const N: usize> IntoIterator for &'a Vector<T, N> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

// Vector (op) Vector, promoted result; compound forms cast back to T.
macro_rules! impl_vector_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt) => {
        impl<T, U, const N: usize> $Op<Vector<U, N>> for Vector<T, N>
        where
            T: Promote<U>,
            U: Scalar,
        {
            type Output = Vector<<T as Promote<U>>::Output, N>;

            #[inline]
            fn $op(self, rhs: Vector<U, N>) -> Self::Output {
                Vector::from_array(std::array::from_fn(|i| {
                    <T as Promote<U>>::promote(self.data[i])
                        $sym <T as Promote<U>>::promote_rhs(rhs.data[i])
                }))
            }
        }

        impl<T, U, const N: usize> $OpAssign<Vector<U, N>> for Vector<T, N>
        where
            T: Promote<U>,
            U: Scalar,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: Vector<U, N>) {
                for (a, &b) in self.data.iter_mut().zip(&rhs.data) {
                    *a = <T as Promote<U>>::demote(
                        <T as Promote<U>>::promote(*a) $sym <T as Promote<U>>::promote_rhs(b),
                    );
                }
            }
        }
    };
}

impl_vector_op!(Add, add, AddAssign, add_assign, +);
impl_vector_op!(Sub, sub, SubAssign, sub_assign, -);
impl_vector_op!(Mul, mul, MulAssign, mul_assign, *);
impl_vector_op!(Div, div, DivAssign, div_assign, /);

// Vector (op) scalar, one impl per primitive so it cannot overlap with the
// vector-vector impls above.
macro_rules! impl_scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident, $sym:tt; $($s:ty),+) => {$(
        impl<T, const N: usize> $Op<$s> for Vector<T, N>
        where
            T: Promote<$s>,
        {
            type Output = Vector<<T as Promote<$s>>::Output, N>;

            #[inline]
            fn $op(self, rhs: $s) -> Self::Output {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                Vector::from_array(self.data.map(|e| <T as Promote<$s>>::promote(e) $sym rhs))
            }
        }

        impl<T, const N: usize> $OpAssign<$s> for Vector<T, N>
        where
            T: Promote<$s>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $s) {
                let rhs = <T as Promote<$s>>::promote_rhs(rhs);
                for e in &mut self.data {
                    *e = <T as Promote<$s>>::demote(<T as Promote<$s>>::promote(*e) $sym rhs);
                }
            }
        }
    )+};
}

impl_scalar_op!(Add, add, AddAssign, add_assign, +; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_op!(Sub, sub, SubAssign, sub_assign, -; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_op!(Mul, mul, MulAssign, mul_assign, *; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_scalar_op!(Div, div, DivAssign, div_assign, /; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T, const N: usize> Neg for Vector<T, N>
where
    T: Scalar + Neg<Output = T>,
{
    type Output = Self;

    #[inline]
    fn neg(self) -> Self {
        Self::from_array(self.data.map(|e| -e))
    }
}

impl<T, U, const N: usize> PartialEq<Vector<U, N>> for Vector<T, N>
where
    T: Promote<U>,
    U: Scalar,
{
    fn eq(&self, other: &Vector<U, N>) -> bool {
        self.data.iter().zip(&other.data).all(|(&a, &b)| {
            <T as Promote<U>>::promote(a) == <T as Promote<U>>::promote_rhs(b)
        })
    }
}

impl<T: Scalar, const N: usize> fmt::Display for Vector<T, N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "vec{N}(")?;
        for (i, e) in self.data.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{e}")?;
        }
        f.write_str(")")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_named_accessors_alias_index() {
        let mut v = vec4(1.0f32, 2.0, 3.0, 4.0);
        v.set_x(10.0);
        assert_eq!(v[0], 10.0);
        v[1] = 20.0;
        assert_eq!(v.y(), 20.0);
        *v.z_mut() = 30.0;
        assert_eq!(v.as_array()[2], 30.0);
        v.set_w(40.0);
        assert_eq!(v.to_array(), [10.0, 20.0, 30.0, 40.0]);
    }

    #[test]
    fn test_construction() {
        assert_eq!(Vector::<i32, 3>::default(), vec3(0, 0, 0));
        assert_eq!(Vector::<f64, 2>::splat(1.5), vec2(1.5, 1.5));
        assert_eq!(Vector::from([1u8, 2, 3, 4, 5]).len(), 5);
        let v: [i32; 2] = vec2(7, 8).into();
        assert_eq!(v, [7, 8]);
    }

    #[test]
    fn test_try_from_slice() {
        let data = [1.0f32, 2.0, 3.0];
        let v = Vector::<f32, 3>::try_from(&data[..]).unwrap();
        assert_eq!(v, vec3(1.0, 2.0, 3.0));

        let err = Vector::<f32, 4>::try_from(&data[..]).unwrap_err();
        assert_eq!(err, Error::length_mismatch(4, 3));
    }

    #[test]
    fn test_get_out_of_range() {
        let v = vec2(1, 2);
        assert_eq!(v.get(1), Some(&2));
        assert_eq!(v.get(2), None);
    }

    #[test]
    #[should_panic]
    fn test_index_out_of_range_panics() {
        let v = vec2(1, 2);
        let i = v.len();
        let _ = v[i];
    }

    #[test]
    fn test_directions() {
        assert_eq!(Vector::<f32, 2>::left(), vec2(-1.0, 0.0));
        assert_eq!(Vector::<i32, 2>::down(), vec2(0, -1));
        assert_eq!(Vector::<f64, 3>::forward(), vec3(0.0, 0.0, 1.0));
        assert_eq!(Vector::<i8, 3>::back(), vec3(0, 0, -1));
        assert_eq!(Vector::<f32, 3>::up() + Vector::<f32, 3>::down(), Vec3::zero());
    }

    #[test]
    fn test_magnitude() {
        let v = vec2(3.0f32, 4.0);
        assert!((v.magnitude() - 5.0).abs() < 5.0 * 0.0018);
        assert!(v.magnitude() < 5.0);
        assert_eq!(vec3(0.0f64, 0.0, 0.0).magnitude(), 0.0);
    }

    #[test]
    fn test_sqr_magnitude_squares_approximation() {
        let v = vec2(3.0f32, 4.0);
        let m = v.magnitude();
        assert_eq!(v.sqr_magnitude(), m * m);
        assert!(v.sqr_magnitude() < 25.0);
    }

    #[test]
    fn test_normalize() {
        let v = vec3(3.0f32, -4.0, 12.0).normalized();
        assert!((v.magnitude() - 1.0).abs() < 0.005);

        let mut zero = vec3(0.0f32, 0.0, 0.0);
        zero.normalize();
        assert_eq!(zero, Vec3::zero());
    }

    #[test]
    fn test_set_magnitude_branches() {
        let mut grow = vec2(3.0f32, 4.0);
        grow.set_magnitude(10.0);
        assert!((grow.magnitude() - 10.0).abs() < 0.1);

        // Targets <= 1 are not applied.
        let mut shrink = vec2(3.0f32, 4.0);
        shrink.set_magnitude(0.25);
        assert!((shrink.magnitude() - 1.0).abs() < 0.01);
    }

    #[test]
    fn test_distance_is_not_euclidean() {
        let d = vec2(0.0f32, 0.0).distance(vec2(3.0, 4.0));
        let expected = 7.0f32.sqrt();
        assert!((d - expected).abs() < expected * 0.0018);
        assert!((d - 5.0).abs() > 2.0);
    }

    #[test]
    fn test_distance_unsigned() {
        let d = vec2(10u32, 0).distance(vec2(2, 8));
        // sqrt(16) undershoots to 3.99...
        assert_eq!(d, 3);
    }

    #[test]
    fn test_narrow_integer_sums_wrap() {
        // 400 wraps to 144 in u8.
        assert_eq!(vec2(20u8, 0).magnitude(), 144u8.fast_sqrt());
        assert_eq!(vec2(200u8, 0).distance(vec2(0, 200)), 144u8.fast_sqrt());
        assert_eq!(vec2(16u8, 0).dot(vec2(16, 0)), 0);

        // 255 * 255 wraps to 1, twice.
        let opaque_red = Vector::from_array([255u8, 0, 0, 255]);
        assert_eq!(opaque_red.magnitude(), 2u8.fast_sqrt());
        assert_eq!(opaque_red.sqr_magnitude(), 1);

        assert_eq!(vec2(100i8, 0).dot(vec2(2, 0)), -56);
        assert_eq!(vec3(100i8, 100, 100).distance(vec3(-100, -100, -100)), 88i8.fast_sqrt());

        // 2 * 300^2 = 180000 wraps to 48928 in u16.
        assert_eq!(vec2(300u16, 300).magnitude(), 48928u16.fast_sqrt());
        assert_eq!(vec2(300u16, 300).dot(vec2(300, 300)), 48928);
    }

    #[test]
    fn test_narrow_integer_geometry() {
        // Squares wrap to 64 + 16 + 196 = 276, then to 20; fast_sqrt gives 4.
        let mut v = vec3(200u8, 100, 50);
        assert_eq!(v.magnitude(), 4);
        assert_eq!(v.normalized(), vec3(50u8, 25, 12));
        v.set_magnitude(6);
        assert_eq!(v, vec3(44u8, 150, 72));

        assert_eq!(vec2(250u16, 250).clamp_magnitude(10), vec2(10u16, 10));

        // Both squared lengths wrap to 2.
        assert!(!vec2(255u8, 255).is_greater(&vec2(1u8, 1)));
        assert!(vec2(255u8, 255).is_less(&vec2(1u8, 1)));
    }

    #[test]
    fn test_dot_min_max() {
        let a = vec3(1.0f64, -2.0, 3.0);
        let b = vec3(4.0, 5.0, -6.0);
        assert_eq!(a.dot(b), -24.0);
        assert_eq!(a.min(b), vec3(1.0, -2.0, -6.0));
        assert_eq!(a.max(b), vec3(4.0, 5.0, 3.0));
    }

    #[test]
    fn test_lerp() {
        let a = vec2(0.0f32, 10.0);
        let b = vec2(10.0f32, 20.0);
        assert_eq!(a.lerp(b, 0.5), vec2(5.0, 15.0));
        assert_eq!(a.lerp(b, 2.0), b);
        assert_eq!(a.lerp_unclamped(b, 1.5), vec2(15.0, 25.0));
    }

    #[test]
    fn test_clamp_magnitude() {
        let long = vec2(30.0f32, 40.0).clamp_magnitude(5.0);
        assert!((long.magnitude() - 5.0).abs() < 0.05);

        let short = vec2(0.3f32, 0.4);
        assert_eq!(short.clamp_magnitude(5.0), short);
    }

    #[test]
    fn test_mixed_type_ops() {
        let a = vec3(1i32, 2, 3);
        let b = vec3(0.5f32, 0.5, 0.5);
        let sum: Vector<f32, 3> = a + b;
        assert_eq!(sum, vec3(1.5f32, 2.5, 3.5));

        let prod: Vector<f64, 2> = vec2(2.0f32, 3.0) * vec2(0.5f64, 2.0);
        assert_relative_eq!(prod[0], 1.0);
        assert_relative_eq!(prod[1], 6.0);

        let wide: Vector<i32, 2> = vec2(200u8, 10) + vec2(100u8, 250);
        assert_eq!(wide, vec2(300, 260));

        let diff: Vector<i32, 2> = vec2(1u8, 2) - vec2(3u8, 1);
        assert_eq!(diff, vec2(-2, 1));
    }

    #[test]
    fn test_compound_ops_keep_type() {
        let mut a = vec3(1i32, 2, 3);
        a += vec3(0.5f32, 0.5, 0.5);
        assert_eq!(a, vec3(1, 2, 3));

        a *= 2.5f64;
        assert_eq!(a, vec3(2, 5, 7));

        a /= 2i64;
        assert_eq!(a, vec3(1, 2, 3));

        let mut f = vec2(1.0f32, 2.0);
        f -= 0.5f32;
        assert_eq!(f, vec2(0.5, 1.5));
    }

    #[test]
    fn test_scalar_ops() {
        let v: Vector<f32, 2> = vec2(1u8, 2) * 1.5f32;
        assert_eq!(v, vec2(1.5f32, 3.0));

        let d: Vector<i32, 2> = vec2(7i32, 9) / 2i32;
        assert_eq!(d, vec2(3, 4));

        let s: Vector<f64, 3> = vec3(1.0f32, 2.0, 3.0) + 1.0f64;
        assert_eq!(s, vec3(2.0f64, 3.0, 4.0));
    }

    #[test]
    fn test_neg() {
        assert_eq!(-vec2(1.0f32, -2.0), vec2(-1.0f32, 2.0));
        assert_eq!(-vec2(3i16, 0), vec2(-3i16, 0));
    }

    #[test]
    fn test_cross_type_equality() {
        assert_eq!(vec2(1i32, 2), vec2(1.0f32, 2.0));
        assert_ne!(vec2(1i32, 2), vec2(1.5f32, 2.0));
        assert_eq!(vec2(255u8, 0), vec2(255u32, 0));
    }

    #[test]
    fn test_magnitude_ordering() {
        let short = vec2(1.0f32, 0.0);
        let long = vec2(0.0f64, 2.0);
        assert!(long.is_greater(&short));
        assert!(!short.is_greater(&long));
        assert!(short.is_less(&long));

        // Equal magnitudes: not greater, so "less" in both directions.
        let a = vec2(3.0f32, 4.0);
        let b = vec2(4.0f32, 3.0);
        assert!(!a.is_greater(&b));
        assert!(a.is_less(&b));
        assert!(b.is_less(&a));
    }

    #[test]
    fn test_to_truncates() {
        let v = vec3(1.9f32, -1.9, 2.5).to::<i32>();
        assert_eq!(v, vec3(1, -1, 2));

        let f = vec2(3u16, 4).to::<f64>();
        assert_eq!(f, vec2(3.0, 4.0));
    }

    #[test]
    fn test_randomize_with_seed() {
        let mut rng_a = Random::from_seed(5);
        let mut rng_b = Random::from_seed(5);
        let mut a = Vec4::zero();
        let mut b = Vec4::zero();
        a.randomize_with(&mut rng_a, -1.0, 1.0);
        b.randomize_with(&mut rng_b, -1.0, 1.0);
        assert_eq!(a, b);
        assert!(a.iter().all(|e| (-1.0..=1.0).contains(e)));

        let mut g = Vector::<i32, 8>::zero();
        g.randomize(0, 10);
        assert!(g.iter().all(|e| (0..=10).contains(e)));
    }

    #[test]
    fn test_zero_out() {
        let mut v = vec3(1, 2, 3);
        v.zero_out();
        assert_eq!(v, vec3(0, 0, 0));
    }

    #[test]
    fn test_display() {
        assert_eq!(vec3(1.0f32, 2.5, -3.0).to_string(), "vec3(1, 2.5, -3)");
        assert_eq!(vec2(7u8, 8).to_string(), "vec2(7, 8)");
        assert_eq!(Vector::from_array([1, 2, 3, 4, 5]).to_string(), "vec5(1, 2, 3, 4, 5)");
    }

    #[test]
    fn test_iteration() {
        let v = vec3(1, 2, 3);
        let sum: i32 = v.into_iter().sum();
        assert_eq!(sum, 6);
        let doubled: Vec<i32> = (&v).into_iter().map(|e| e * 2).collect();
        assert_eq!(doubled, vec![2, 4, 6]);
    }
}
