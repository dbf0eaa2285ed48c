//! # Constants and type definitions for beer-curve
//!
//! Centralizes the numeric constants and the unit type aliases used by the
//! light-curve synthesis pipeline and the data-conditioning utilities.
//!
//! Time stamps are unit-agnostic floats: the engine only ever forms
//! differences and ratios of times, so any unit works as long as `per`,
//! `t0`, exposure times and bin sizes share it. Days are used throughout
//! the bundled examples and tests.

/// 2π, useful for trigonometric conversions
pub const DPI: f64 = 2. * std::f64::consts::PI;

/// Numerical epsilon used for floating-point comparisons
pub const EPS: f64 = 1e-9;

/// Scale factor turning a median absolute deviation into a
/// Gaussian-equivalent standard deviation
pub const MAD_TO_SIGMA: f64 = 1.4826;

// -------------------------------------------------------------------------------------------------
// Type aliases
// -------------------------------------------------------------------------------------------------

/// Time stamp in the caller's time unit (days in the bundled examples)
pub type Day = f64;
/// Orbital phase in [0, 1)
pub type Phase = f64;
/// Dimensionless flux relative to the out-of-event baseline
pub type FluxFraction = f64;
/// Angle in degrees
pub type Degree = f64;
