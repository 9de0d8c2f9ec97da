//! Fixed-size matrix type and 4x4 transform builders.
//!
//! [`Matrix<T, R, C>`] stores `R` rows of [`Vector<T, C>`]. Elements can be
//! reached three ways, all over the same storage:
//!
//! - `m[(row, col)]` through the rows view
//! - `m.row(i)` for a whole row vector
//! - `m[k]` with a flat index, where `k = row * C + col`
//!
//! # Transform convention
//!
//! The 4x4 builders ([`translation`](Matrix::translation),
//! [`rotation`](Matrix::rotation), [`scale`](Matrix::scale),
//! [`orthographic`](Matrix::orthographic), [`perspective`](Matrix::perspective))
//! fill flat indices numbered `row + col * 4` in OpenGL terms. Read as a
//! conventional matrix, each stored row is therefore one **column**, and the
//! flat layout is exactly the column array used by OpenGL and `glam`.
//!
//! Matrix-vector products follow the same convention:
//!
//! ```rust
//! use gmath_linalg::{Mat4, vec3, vec4};
//!
//! let t = Mat4::translation(vec3(1.0, 2.0, 3.0));
//! assert_eq!(t * vec4(0.0f32, 0.0, 0.0, 1.0), vec4(1.0f32, 2.0, 3.0, 1.0));
//! ```
//!
//! Matrix-matrix products multiply the rows views (`(a * b)[(i, j)] =
//! sum a[(i, k)] * b[(k, j)]`). Under the column reading above, `a * b`
//! applied to a vector applies `a` first, then `b`.
//!
//! # Element types
//!
//! Products and scalar operations between different element types produce
//! the [`Promote`] output type, as for [`Vector`]. The builders and
//! [`inverse`](Matrix::inverse) need a [`Real`] element type.

use crate::vector::Vector;
use gmath_core::{
    Error, Promote, Random, Real, Result, Scalar, cos_approx, deg_to_rad, sin_approx,
};
use num_traits::AsPrimitive;
use std::fmt;
use std::ops::{Div, DivAssign, Index, IndexMut, Mul, MulAssign};
use tracing::{debug, trace};

/// An `R x C` matrix of `T`, stored as `R` row vectors.
///
/// # Example
///
/// ```rust
/// use gmath_linalg::Matrix;
///
/// let m = Matrix::from_rows([[1, 2, 3], [4, 5, 6]]);
/// assert_eq!(m[(1, 0)], 4);
/// assert_eq!(m[4], 5);
/// assert_eq!(m.transpose()[(2, 1)], 6);
/// ```
#[derive(Debug, Clone, Copy)]
#[repr(transparent)]
pub struct Matrix<T, const R: usize, const C: usize> {
    rows: [Vector<T, C>; R],
}

/// Square 4x4 matrix.
pub type Matrix4<T> = Matrix<T, 4, 4>;
/// 4x4 `f32` matrix.
pub type Mat4 = Matrix<f32, 4, 4>;
/// 4x4 `f64` matrix.
pub type DMat4 = Matrix<f64, 4, 4>;

impl<T: Scalar, const R: usize, const C: usize> Matrix<T, R, C> {
    /// The zero matrix.
    #[inline]
    pub fn zero() -> Self {
        Self {
            rows: [Vector::zero(); R],
        }
    }

    /// Creates a matrix from nested row arrays.
    #[inline]
    pub fn from_rows(rows: [[T; C]; R]) -> Self {
        Self {
            rows: rows.map(Vector::from_array),
        }
    }

    /// Creates a matrix from row vectors.
    #[inline]
    pub const fn from_row_vectors(rows: [Vector<T, C>; R]) -> Self {
        Self { rows }
    }

    /// `d` on the main diagonal (`i == j`), zero elsewhere.
    ///
    /// Non-square matrices get `min(R, C)` diagonal entries.
    pub fn diagonal(d: T) -> Self {
        let mut m = Self::zero();
        for i in 0..R.min(C) {
            m.rows[i][i] = d;
        }
        m
    }

    /// Identity matrix: [`diagonal`](Self::diagonal) with 1.
    #[inline]
    pub fn identity() -> Self {
        Self::diagonal(T::one())
    }

    /// Row `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i >= R`.
    #[inline]
    pub fn row(&self, i: usize) -> &Vector<T, C> {
        &self.rows[i]
    }

    /// Mutable row `i`.
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut Vector<T, C> {
        &mut self.rows[i]
    }

    /// All rows.
    #[inline]
    pub const fn rows(&self) -> &[Vector<T, C>; R] {
        &self.rows
    }

    /// Total element count, `R * C`.
    #[inline]
    pub const fn size(&self) -> usize {
        R * C
    }

    /// Element at flat index `k`, or `None` when out of range.
    #[inline]
    pub fn get(&self, k: usize) -> Option<&T> {
        self.rows.get(k / C.max(1)).and_then(|row| row.get(k % C.max(1)))
    }

    /// Iterates over all elements in flat index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.rows.iter().flat_map(|row| row.iter())
    }

    /// Sets every element to zero.
    #[inline]
    pub fn zero_out(&mut self) {
        for row in &mut self.rows {
            row.zero_out();
        }
    }

    /// Fills the matrix with uniform values in `[min, max]` from the
    /// process-wide generator.
    pub fn randomize(&mut self, min: T, max: T) {
        for row in &mut self.rows {
            row.randomize(min, max);
        }
    }

    /// Fills the matrix with uniform values in `[min, max]` from `rng`.
    pub fn randomize_with(&mut self, rng: &mut Random, min: T, max: T) {
        for row in &mut self.rows {
            row.randomize_with(rng, min, max);
        }
    }

    /// Returns the `C x R` transpose.
    pub fn transpose(&self) -> Matrix<T, C, R> {
        Matrix {
            rows: std::array::from_fn(|j| Vector::from_array(std::array::from_fn(|i| self.rows[i][j]))),
        }
    }

    /// Casts every element to `U` with `as` semantics.
    #[inline]
    pub fn to<U>(self) -> Matrix<U, R, C>
    where
        T: AsPrimitive<U>,
        U: Scalar,
    {
        Matrix {
            rows: self.rows.map(|row| row.to::<U>()),
        }
    }
}

impl<T: Real> Matrix<T, 4, 4> {
    /// Translation by `t` (flat indices 12, 13, 14).
    pub fn translation(t: Vector<T, 3>) -> Self {
        let mut m = Self::identity();
        m[12] = t.x();
        m[13] = t.y();
        m[14] = t.z();
        m
    }

    /// Axis-angle rotation by `angle` degrees around `axis`.
    ///
    /// Sine and cosine come from [`sin_approx`]/[`cos_approx`], so entries
    /// differ from a `std`-based rotation in the low bits. The diagonal uses
    /// `axis_i * (1 - cos) + cos` rather than `axis_i^2 * (1 - cos) + cos`;
    /// the two agree for principal axes and diverge for oblique ones. `axis`
    /// is expected to be unit length and is not normalized.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_linalg::{Mat4, vec3, vec4};
    ///
    /// let r = Mat4::rotation(90.0, vec3(0.0, 0.0, 1.0));
    /// let v = r * vec4(1.0f32, 0.0, 0.0, 1.0);
    /// assert!(v.x().abs() < 1e-3 && (v.y() - 1.0).abs() < 1e-3);
    /// ```
    pub fn rotation(angle: T, axis: Vector<T, 3>) -> Self {
        let r = deg_to_rad(angle);
        let c = cos_approx(r);
        let s = sin_approx(r);
        let omc = T::one() - c;
        let (x, y, z) = (axis.x(), axis.y(), axis.z());

        let mut m = Self::identity();
        m[0] = x * omc + c;
        m[1] = y * x * omc + z * s;
        m[2] = z * x * omc - y * s;
        m[4] = x * y * omc - z * s;
        m[5] = y * omc + c;
        m[6] = y * z * omc + x * s;
        m[8] = x * z * omc + y * s;
        m[9] = y * z * omc - x * s;
        m[10] = z * omc + c;
        m
    }

    /// Axis scale by `s` (flat indices 0, 5, 10).
    pub fn scale(s: Vector<T, 3>) -> Self {
        let mut m = Self::identity();
        m[0] = s.x();
        m[5] = s.y();
        m[10] = s.z();
        m
    }

    /// Orthographic projection of the box `[left, right] x [bottom, top] x
    /// [near, far]`.
    ///
    /// The depth translation term is `(far + near) / (far - near)`, the
    /// opposite sign of the common OpenGL form.
    pub fn orthographic(left: T, right: T, bottom: T, top: T, near: T, far: T) -> Self {
        let two = T::one() + T::one();
        let mut m = Self::identity();
        m[0] = two / (right - left);
        m[5] = two / (top - bottom);
        m[10] = two / (near - far);
        m[12] = (left + right) / (left - right);
        m[13] = (bottom + top) / (bottom - top);
        m[14] = (far + near) / (far - near);
        m
    }

    /// Perspective projection with a vertical field of view in degrees.
    ///
    /// Flat index 11 holds the `-1` that moves `-z` into `w`. Index 15 keeps
    /// the identity value 1.
    pub fn perspective(fov: T, aspect_ratio: T, near: T, far: T) -> Self {
        let one = T::one();
        let two = one + one;
        let q = one / deg_to_rad(fov / two).tan();
        let a = q / aspect_ratio;
        let b = (near + far) / (near - far);
        let c = (two * near * far) / (near - far);

        let mut m = Self::identity();
        m[0] = a;
        m[5] = q;
        m[10] = b;
        m[11] = -one;
        m[14] = c;
        m
    }

    /// Determinant by cofactor expansion along the first stored row.
    pub fn determinant(&self) -> T {
        let m = self.flat();
        let inv = adjugate(&m);
        m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12]
    }

    /// Inverse through the explicit adjugate divided by the determinant.
    ///
    /// A singular matrix is not rejected: the division by a zero
    /// determinant fills the result with infinities and NaNs. Use
    /// [`try_inverse`](Self::try_inverse) to get an error instead.
    pub fn inverse(&self) -> Self {
        let m = self.flat();
        let inv = adjugate(&m);
        let det = m[0] * inv[0] + m[1] * inv[4] + m[2] * inv[8] + m[3] * inv[12];
        if det == T::zero() {
            debug!("inverting a singular 4x4 matrix, result is not finite");
        }
        let inv_det = T::one() / det;
        Self::from_flat(inv.map(|e| e * inv_det))
    }

    /// Inverse, or [`Error::SingularMatrix`] when the determinant is zero.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_linalg::DMat4;
    /// use gmath_core::Error;
    ///
    /// assert!(DMat4::identity().try_inverse().is_ok());
    /// assert_eq!(DMat4::zero().try_inverse(), Err(Error::SingularMatrix));
    /// ```
    pub fn try_inverse(&self) -> Result<Self> {
        let det = self.determinant();
        if det == T::zero() {
            trace!("rejecting inverse of singular 4x4 matrix");
            return Err(Error::SingularMatrix);
        }
        Ok(self.inverse())
    }

    #[inline]
    fn flat(&self) -> [T; 16] {
        std::array::from_fn(|k| self[k])
    }

    #[inline]
    fn from_flat(m: [T; 16]) -> Self {
        Self::from_rows(std::array::from_fn(|r| std::array::from_fn(|c| m[r * 4 + c])))
    }
}

/// Transposed cofactor matrix of a flat 4x4, in the same flat numbering.
#[rustfmt::skip]
fn adjugate<T: Real>(m: &[T; 16]) -> [T; 16] {
    let mut inv = [T::zero(); 16];

    inv[0] = m[5] * m[10] * m[15] - m[5] * m[11] * m[14] - m[9] * m[6] * m[15]
        + m[9] * m[7] * m[14] + m[13] * m[6] * m[11] - m[13] * m[7] * m[10];
    inv[4] = -m[4] * m[10] * m[15] + m[4] * m[11] * m[14] + m[8] * m[6] * m[15]
        - m[8] * m[7] * m[14] - m[12] * m[6] * m[11] + m[12] * m[7] * m[10];
    inv[8] = m[4] * m[9] * m[15] - m[4] * m[11] * m[13] - m[8] * m[5] * m[15]
        + m[8] * m[7] * m[13] + m[12] * m[5] * m[11] - m[12] * m[7] * m[9];
    inv[12] = -m[4] * m[9] * m[14] + m[4] * m[10] * m[13] + m[8] * m[5] * m[14]
        - m[8] * m[6] * m[13] - m[12] * m[5] * m[10] + m[12] * m[6] * m[9];

    inv[1] = -m[1] * m[10] * m[15] + m[1] * m[11] * m[14] + m[9] * m[2] * m[15]
        - m[9] * m[3] * m[14] - m[13] * m[2] * m[11] + m[13] * m[3] * m[10];
    inv[5] = m[0] * m[10] * m[15] - m[0] * m[11] * m[14] - m[8] * m[2] * m[15]
        + m[8] * m[3] * m[14] + m[12] * m[2] * m[11] - m[12] * m[3] * m[10];
    inv[9] = -m[0] * m[9] * m[15] + m[0] * m[11] * m[13] + m[8] * m[1] * m[15]
        - m[8] * m[3] * m[13] - m[12] * m[1] * m[11] + m[12] * m[3] * m[9];
    inv[13] = m[0] * m[9] * m[14] - m[0] * m[10] * m[13] - m[8] * m[1] * m[14]
        + m[8] * m[2] * m[13] + m[12] * m[1] * m[10] - m[12] * m[2] * m[9];

    inv[2] = m[1] * m[6] * m[15] - m[1] * m[7] * m[14] - m[5] * m[2] * m[15]
        + m[5] * m[3] * m[14] + m[13] * m[2] * m[7] - m[13] * m[3] * m[6];
    inv[6] = -m[0] * m[6] * m[15] + m[0] * m[7] * m[14] + m[4] * m[2] * m[15]
        - m[4] * m[3] * m[14] - m[12] * m[2] * m[7] + m[12] * m[3] * m[6];
    inv[10] = m[0] * m[5] * m[15] - m[0] * m[7] * m[13] - m[4] * m[1] * m[15]
        + m[4] * m[3] * m[13] + m[12] * m[1] * m[7] - m[12] * m[3] * m[5];
    inv[14] = -m[0] * m[5] * m[14] + m[0] * m[6] * m[13] + m[4] * m[1] * m[14]
        - m[4] * m[2] * m[13] - m[12] * m[1] * m[6] + m[12] * m[2] * m[5];

    inv[3] = -m[1] * m[6] * m[11] + m[1] * m[7] * m[10] + m[5] * m[2] * m[11]
        - m[5] * m[3] * m[10] - m[9] * m[2] * m[7] + m[9] * m[3] * m[6];
    inv[7] = m[0] * m[6] * m[11] - m[0] * m[7] * m[10] - m[4] * m[2] * m[11]
        + m[4] * m[3] * m[10] + m[8] * m[2] * m[7] - m[8] * m[3] * m[6];
    inv[11] = -m[0] * m[5] * m[11] + m[0] * m[7] * m[9] + m[4] * m[1] * m[11]
        - m[4] * m[3] * m[9] - m[8] * m[1] * m[7] + m[8] * m[3] * m[5];
    inv[15] = m[0] * m[5] * m[10] - m[0] * m[6] * m[9] - m[4] * m[1] * m[10]
        + m[4] * m[2] * m[9] + m[8] * m[1] * m[6] - m[8] * m[2] * m[5];

    inv
}

impl<T: Scalar, const R: usize, const C: usize> Default for Matrix<T, R, C> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<T: Scalar, const R: usize, const C: usize> TryFrom<&[T]> for Matrix<T, R, C> {
    type Error = Error;

    /// Builds a matrix from `R * C` elements in flat index order.
    fn try_from(slice: &[T]) -> Result<Self> {
        if slice.len() != R * C {
            return Err(Error::length_mismatch(R * C, slice.len()));
        }
        Ok(Self {
            rows: std::array::from_fn(|r| {
                Vector::from_array(std::array::from_fn(|c| slice[r * C + c]))
            }),
        })
    }
}

impl<T, const R: usize, const C: usize> Index<usize> for Matrix<T, R, C> {
    type Output = T;

    /// Flat index `k = row * C + col`. Panics past `R * C`.
    #[inline]
    fn index(&self, k: usize) -> &T {
        &self.rows[k / C][k % C]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<usize> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, k: usize) -> &mut T {
        &mut self.rows[k / C][k % C]
    }
}

impl<T, const R: usize, const C: usize> Index<(usize, usize)> for Matrix<T, R, C> {
    type Output = T;

    #[inline]
    fn index(&self, (r, c): (usize, usize)) -> &T {
        &self.rows[r][c]
    }
}

impl<T, const R: usize, const C: usize> IndexMut<(usize, usize)> for Matrix<T, R, C> {
    #[inline]
    fn index_mut(&mut self, (r, c): (usize, usize)) -> &mut T {
        &mut self.rows[r][c]
    }
}

impl<T, U, const R: usize, const K: usize, const C: usize> Mul<Matrix<U, K, C>>
    for Matrix<T, R, K>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Matrix<<T as Promote<U>>::Output, R, C>;

    fn mul(self, rhs: Matrix<U, K, C>) -> Self::Output {
        Matrix {
            rows: std::array::from_fn(|i| {
                Vector::from_array(std::array::from_fn(|j| {
                    let mut sum = <<T as Promote<U>>::Output as num_traits::Zero>::zero();
                    for k in 0..K {
                        sum += <T as Promote<U>>::promote(self.rows[i][k])
                            * <T as Promote<U>>::promote_rhs(rhs.rows[k][j]);
                    }
                    sum
                }))
            }),
        }
    }
}

impl<T, U, const R: usize, const C: usize> MulAssign<Matrix<U, C, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    fn mul_assign(&mut self, rhs: Matrix<U, C, C>) {
        let product = *self * rhs;
        for (dst, src) in self.rows.iter_mut().zip(product.rows) {
            for (d, s) in dst.as_mut_slice().iter_mut().zip(src) {
                *d = <T as Promote<U>>::demote(s);
            }
        }
    }
}

impl<T, U, const R: usize, const C: usize> Mul<Vector<U, R>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    type Output = Vector<<T as Promote<U>>::Output, C>;

    /// `out[j] = sum_k self[(k, j)] * v[k]`: each stored row scales one
    /// input component.
    fn mul(self, v: Vector<U, R>) -> Self::Output {
        Vector::from_array(std::array::from_fn(|j| {
            let mut sum = <<T as Promote<U>>::Output as num_traits::Zero>::zero();
            for k in 0..R {
                sum += <T as Promote<U>>::promote(self.rows[k][j])
                    * <T as Promote<U>>::promote_rhs(v[k]);
            }
            sum
        }))
    }
}

macro_rules! impl_matrix_scalar_op {
    ($Op:ident, $op:ident, $OpAssign:ident, $op_assign:ident; $($s:ty),+) => {$(
        impl<T, const R: usize, const C: usize> $Op<$s> for Matrix<T, R, C>
        where
            T: Promote<$s>,
        {
            type Output = Matrix<<T as Promote<$s>>::Output, R, C>;

            #[inline]
            fn $op(self, rhs: $s) -> Self::Output {
                Matrix {
                    rows: self.rows.map(|row| row.$op(rhs)),
                }
            }
        }

        impl<T, const R: usize, const C: usize> $OpAssign<$s> for Matrix<T, R, C>
        where
            T: Promote<$s>,
        {
            #[inline]
            fn $op_assign(&mut self, rhs: $s) {
                for row in &mut self.rows {
                    row.$op_assign(rhs);
                }
            }
        }
    )+};
}

impl_matrix_scalar_op!(Mul, mul, MulAssign, mul_assign; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);
impl_matrix_scalar_op!(Div, div, DivAssign, div_assign; i8, i16, i32, i64, u8, u16, u32, u64, f32, f64);

impl<T, U, const R: usize, const C: usize> PartialEq<Matrix<U, R, C>> for Matrix<T, R, C>
where
    T: Promote<U>,
    U: Scalar,
{
    fn eq(&self, other: &Matrix<U, R, C>) -> bool {
        self.rows.iter().zip(&other.rows).all(|(a, b)| a == b)
    }
}

impl<T: Scalar, const R: usize, const C: usize> fmt::Display for Matrix<T, R, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "matrix{R}x{C}")?;
        for row in &self.rows {
            f.write_str("\n(")?;
            for (j, e) in row.iter().enumerate() {
                if j > 0 {
                    f.write_str(", ")?;
                }
                write!(f, "{e:3}")?;
            }
            f.write_str(")")?;
        }
        Ok(())
    }
}
