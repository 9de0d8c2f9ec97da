//! Conversions to and from [`glam`] types.
//!
//! Vectors convert element-wise. 4x4 matrices convert through the flat
//! storage, which matches glam's column array (`Mat4::to_cols_array`), so a
//! converted matrix transforms vectors the same way on both sides:
//!
//! ```rust
//! use gmath_linalg::{Mat4, vec3};
//!
//! let t = Mat4::translation(vec3(1.0, 2.0, 3.0));
//! let g: glam::Mat4 = t.into();
//! assert_eq!(g.transform_point3(glam::Vec3::ZERO), glam::Vec3::new(1.0, 2.0, 3.0));
//! ```
//!
//! Matrix products do not commute across the boundary: gmath's `a * b`
//! equals glam's `b * a` after conversion.

use crate::matrix::Matrix;
use crate::vector::Vector;

macro_rules! impl_glam_vector {
    ($t:ty, $n:literal, $glam:ty) => {
        impl From<$glam> for Vector<$t, $n> {
            #[inline]
            fn from(v: $glam) -> Self {
                Vector::from_array(v.to_array())
            }
        }

        impl From<Vector<$t, $n>> for $glam {
            #[inline]
            fn from(v: Vector<$t, $n>) -> Self {
                <$glam>::from_array(v.to_array())
            }
        }
    };
}

impl_glam_vector!(f32, 2, glam::Vec2);
impl_glam_vector!(f32, 3, glam::Vec3);
impl_glam_vector!(f32, 4, glam::Vec4);
impl_glam_vector!(f64, 2, glam::DVec2);
impl_glam_vector!(f64, 3, glam::DVec3);
impl_glam_vector!(f64, 4, glam::DVec4);

macro_rules! impl_glam_matrix {
    ($t:ty, $glam:ty) => {
        impl From<$glam> for Matrix<$t, 4, 4> {
            fn from(m: $glam) -> Self {
                let cols = m.to_cols_array();
                Matrix::from_rows(std::array::from_fn(|r| {
                    std::array::from_fn(|c| cols[r * 4 + c])
                }))
            }
        }

        impl From<Matrix<$t, 4, 4>> for $glam {
            fn from(m: Matrix<$t, 4, 4>) -> Self {
                <$glam>::from_cols_array(&std::array::from_fn(|k| m[k]))
            }
        }
    };
}

impl_glam_matrix!(f32, glam::Mat4);
impl_glam_matrix!(f64, glam::DMat4);
