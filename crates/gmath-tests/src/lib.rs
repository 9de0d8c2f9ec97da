//! Integration tests for gmath crates.
//!
//! This crate contains end-to-end tests that exercise the core kernels,
//! the linear algebra types and colors together, and cross-check the 4x4
//! builders against `glam`.
//!
//! Property-based tests live in [`properties`] and use `proptest`.

#[cfg(test)]
mod properties;
