//! # gmath-linalg
//!
//! Fixed-size vectors and matrices over any [`Scalar`](gmath_core::Scalar)
//! element type.
//!
//! - [`Vector`] - `N` elements with named `x/y/z/w` accessors for N = 2..4
//! - [`Matrix`] - `R x C` elements stored as row vectors, with 4x4
//!   transform builders and an explicit adjugate inverse
//!
//! # Design
//!
//! Both containers are plain `Copy` arrays. Operators accept mismatched
//! element types and return the promoted type, so `i32 + f32` vectors give
//! an `f32` vector and `u8 * u8` never wraps. Narrowing only happens through
//! compound assignment or an explicit [`Vector::to`] / [`Matrix::to`].
//!
//! ```rust
//! use gmath_linalg::{Mat4, vec3, vec4};
//!
//! let model = Mat4::scale(vec3(2.0, 2.0, 2.0)) * Mat4::translation(vec3(1.0, 0.0, 0.0));
//! let p = model * vec4(1.0f32, 1.0, 1.0, 1.0);
//! assert_eq!(p, vec4(3.0f32, 2.0, 2.0, 1.0));
//! ```
//!
//! # Feature Flags
//!
//! - `glam` - `From` conversions with glam vectors and 4x4 matrices (enabled by default)
//! - `serde` - Serialize vectors and matrices as nested tuples
//!
//! # Dependencies
//!
//! - [`gmath_core`] - Element traits and approximate kernels
//! - [`num_traits`] - `as` casts for [`Vector::to`]
//! - [`tracing`] - Debug events on singular inverses
//!
//! # Used By
//!
//! - `gmath-color` - Normalized color vectors

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

mod matrix;
mod vector;

#[cfg(feature = "glam")]
mod interop;
#[cfg(feature = "serde")]
mod serde_impl;

pub use matrix::*;
pub use vector::*;
