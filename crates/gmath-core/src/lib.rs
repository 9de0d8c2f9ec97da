//! # gmath-core
//!
//! Numeric foundation of the gmath workspace.
//!
//! This crate provides the element traits and scalar kernels that the
//! vector, matrix and color types are built on:
//!
//! - [`Scalar`], [`Real`], [`Promote`], [`Channel`] - element type traits
//! - [`fast_inverse_sqrt`], [`fast_sqrt`], [`fast_round_to_int`] - bit-trick kernels
//! - [`sin_approx`], [`cos_approx`], [`atan_approx`], [`atan2_approx`] - polynomial trigonometry
//! - [`lerp`], [`clamp`], [`wrap`] - interpolation and range helpers
//! - [`Random`], [`uniform_random`] - uniform random values
//! - [`consts`] - double precision constants
//!
//! ## Accuracy
//!
//! The kernels are approximations with documented error bounds (see
//! [`fast`]). Containers built on them, vector magnitudes in particular,
//! inherit those bounds.
//!
//! ## Crate Structure
//!
//! ```text
//! gmath-core (this crate)
//!    ^
//!    |
//!    +-- gmath-linalg (Vector, Matrix)
//!           ^
//!           |
//!           +-- gmath-color (Color)
//! ```

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod consts;
pub mod error;
pub mod fast;
pub mod interp;
pub mod random;
pub mod scalar;

pub use error::*;
pub use fast::*;
pub use interp::*;
pub use random::{Random, uniform_random};
pub use scalar::{Channel, Promote, Real, Scalar};

/// Prelude module for convenient imports.
///
/// # Usage
///
/// ```
/// use gmath_core::prelude::*;
///
/// assert_eq!(clamp01(1.5f32), 1.0);
/// ```
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::fast::{
        atan2_approx, atan_approx, cos_approx, fast_inverse_sqrt, fast_round_to_int, fast_sqrt,
        sin_approx,
    };
    pub use crate::interp::{clamp, clamp01, deg_to_rad, lerp, lerp_unclamped, rad_to_deg, wrap};
    pub use crate::random::{Random, uniform_random};
    pub use crate::scalar::{Channel, Promote, Real, Scalar};
}
