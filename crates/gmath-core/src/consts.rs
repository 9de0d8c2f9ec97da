//! Mathematical constants in double precision.
//!
//! The kernels evaluate their range reduction and polynomial terms in `f64`
//! against these values, whatever the element type of the caller.

use std::f64::consts;

/// e
pub const E: f64 = consts::E;
/// log2(e)
pub const LOG2E: f64 = consts::LOG2_E;
/// log10(e)
pub const LOG10E: f64 = consts::LOG10_E;
/// ln(2)
pub const LN2: f64 = consts::LN_2;
/// ln(10)
pub const LN10: f64 = consts::LN_10;
/// pi
pub const PI: f64 = consts::PI;
/// 2 * pi
pub const TWO_PI: f64 = consts::TAU;
/// pi / 2
pub const HALF_PI: f64 = consts::FRAC_PI_2;
/// pi / 4
pub const QUARTER_PI: f64 = consts::FRAC_PI_4;
/// 1 / pi
pub const INVERSED_PI: f64 = consts::FRAC_1_PI;
/// 1 / (2 * pi)
pub const INVERSED_TWO_PI: f64 = 0.159_154_943_091_895_35;
/// 2 / pi
pub const TWO_DIVIDED_BY_PI: f64 = consts::FRAC_2_PI;
/// 2 / sqrt(pi)
pub const TWO_DIVIDED_BY_SQRTPI: f64 = consts::FRAC_2_SQRT_PI;
/// sqrt(2)
pub const SQRT2: f64 = consts::SQRT_2;
/// 1 / sqrt(2)
pub const INVERSED_SQRT2: f64 = consts::FRAC_1_SQRT_2;

/// Degrees to radians, evaluated in `f64`.
pub const DEG_TO_RAD: f64 = PI / 180.0;

/// Radians to degrees, evaluated in `f64`.
pub const RAD_TO_DEG: f64 = 180.0 / PI;
