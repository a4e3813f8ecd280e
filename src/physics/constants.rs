//! Physical constants shared by every link-budget calculation.
//!
//! Rounded values are used on purpose so that results match the
//! reference configuration summary digit for digit.

pub const SPEED_OF_LIGHT: f64 = 3e8; // m/s
pub const BOLTZMANN_CONSTANT: f64 = 1.38e-23; // J/K
