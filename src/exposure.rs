//! # Exposure-time supersampling
//!
//! A finite exposure integrates the astrophysical signal over its
//! duration; evaluating the model once per observed time stamp misses that
//! smearing whenever the signal varies within one exposure (transit
//! ingress/egress at long cadence, most notably). The scheme here is a
//! boxcar average over evenly spaced sub-exposures: [`supersample`] the
//! time stamps, evaluate the model on the fine grid, then [`decimate`]
//! back to observed cadence.
//!
//! The pairing between the two halves is load-bearing: `supersample` emits
//! all sub-samples of time stamp *i* contiguously, and `decimate` averages
//! contiguous groups of the same size. Reorder one and the other silently
//! averages across unrelated exposures.

use serde::{Deserialize, Serialize};

use crate::constants::Day;

/// Exposure handling for one synthesis call.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ExposureSettings {
    /// Exposure duration, same unit as the time series
    pub exp_time: Day,
    /// Sub-samples per exposure; `<= 1` disables supersampling
    pub factor: usize,
}

impl ExposureSettings {
    pub fn new(exp_time: Day, factor: usize) -> Self {
        Self { exp_time, factor }
    }

    /// Instantaneous sampling (no exposure smearing).
    pub fn none() -> Self {
        Self {
            exp_time: 0.0,
            factor: 1,
        }
    }
}

impl Default for ExposureSettings {
    fn default() -> Self {
        Self::none()
    }
}

/// Expand each time stamp into `factor` sub-samples spanning
/// `[-exp_time/2, +exp_time/2]` inclusive around it.
///
/// Returns a flat array of length `time.len() * factor` with the
/// sub-samples of each original time stamp contiguous. For `factor <= 1`
/// the input is returned unchanged.
pub fn supersample(time: &[Day], exp_time: Day, factor: usize) -> Vec<Day> {
    if factor <= 1 {
        return time.to_vec();
    }

    let step = exp_time / (factor - 1) as f64;
    let mut expanded = Vec::with_capacity(time.len() * factor);
    for &t in time {
        for j in 0..factor {
            expanded.push(t - 0.5 * exp_time + j as f64 * step);
        }
    }
    expanded
}

/// Average each contiguous group of `factor` values back to one sample.
///
/// This is the midpoint-rule approximation of the exposure-time integral
/// of the supersampled model. Identity for `factor <= 1`.
pub fn decimate(values: &[f64], factor: usize) -> Vec<f64> {
    if factor <= 1 {
        return values.to_vec();
    }

    values
        .chunks(factor)
        .map(|group| group.iter().sum::<f64>() / group.len() as f64)
        .collect()
}
