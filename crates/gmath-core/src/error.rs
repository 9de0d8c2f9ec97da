//! Error types for gmath operations.
//!
//! Almost everything in gmath is infallible by contract: numeric degeneracies
//! (NaN propagation, zeroed vectors, truncated hex packing) are part of the
//! documented behavior rather than errors. The few operations that can
//! genuinely fail, building a container from a runtime-sized slice or
//! requesting a checked inverse, report through [`Error`].
//!
//! # Usage
//!
//! ```rust
//! use gmath_core::{Error, Result};
//!
//! fn expect_len(got: usize) -> Result<()> {
//!     if got != 3 {
//!         return Err(Error::length_mismatch(3, got));
//!     }
//!     Ok(())
//! }
//!
//! assert!(expect_len(3).is_ok());
//! assert!(expect_len(4).is_err());
//! ```
//!
//! # Dependencies
//!
//! - [`thiserror`] - For derive macro error implementation
//!
//! # Used By
//!
//! - `gmath-linalg` - slice conversions, checked matrix inverse

use thiserror::Error;

/// Result type alias using [`Error`] as the error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors reported by the fallible gmath constructors and operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A slice had the wrong number of elements for a fixed-size container.
    ///
    /// # Example
    ///
    /// ```rust
    /// use gmath_core::Error;
    ///
    /// let err = Error::length_mismatch(16, 9);
    /// assert!(err.to_string().contains("16"));
    /// ```
    #[error("length mismatch: expected {expected} elements, got {got}")]
    LengthMismatch {
        /// Element count of the target container
        expected: usize,
        /// Element count of the source slice
        got: usize,
    },

    /// The matrix determinant is zero, so no inverse exists.
    #[error("matrix is singular (determinant is zero)")]
    SingularMatrix,
}

impl Error {
    /// Creates an [`Error::LengthMismatch`] error.
    #[inline]
    pub fn length_mismatch(expected: usize, got: usize) -> Self {
        Self::LengthMismatch { expected, got }
    }

    /// Returns `true` if this is a length error.
    #[inline]
    pub fn is_length_error(&self) -> bool {
        matches!(self, Self::LengthMismatch { .. })
    }
}
