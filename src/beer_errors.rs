use thiserror::Error;

/// Fatal configuration errors.
///
/// Degenerate data outcomes are deliberately not errors: an empty bin in
/// [`bin_data`](crate::detrend::bin_data) reports `(0.0, 0.0)` and an empty
/// in-eclipse window in
/// [`fit_eclipse_bottom`](crate::detrend::fit_eclipse_bottom) reports
/// `None`. Physically invalid systems (`per == 0`, `a == 0`, transit-depth
/// formulas leaving their domain) are caller responsibility and propagate
/// as NaN from the underlying math primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BeerError {
    #[error("Missing required parameter: {0}")]
    MissingParameter(&'static str),

    #[error("Invalid limb-darkening coefficient count: {0} (expected 2 for quadratic or 4 for nonlinear)")]
    InvalidLimbDarkening(usize),

    #[error("Invalid estimator: {0}")]
    InvalidEstimator(String),

    #[error("Unsupported edge policy: {0}")]
    UnsupportedEdgePolicy(String),

    #[error("Median filter window must be odd, got {0}")]
    EvenFilterWindow(usize),
}
