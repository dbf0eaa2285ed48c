//! # Observational data conditioning
//!
//! Utilities operating on real photometric data independently of the
//! synthesis model: median-filter detrending with reflective edge
//! handling, robust time-binning with selectable center/spread estimators,
//! and eclipse-bottom fitting used to move a dataset onto the
//! compositor's "eclipse bottom = 0" convention.
//!
//! Estimators and edge policies are closed enums parsed from strings with
//! [`FromStr`], so an unknown name is a configuration error up front, not
//! a silent fallback.

use std::str::FromStr;

use itertools::{izip, Itertools};

use crate::beer_errors::BeerError;
use crate::constants::{Day, MAD_TO_SIGMA};

/// Per-bin center estimator for [`bin_data`] and [`fit_eclipse_bottom`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CenterEstimator {
    Mean,
    Median,
}

impl FromStr for CenterEstimator {
    type Err = BeerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "mean" => Ok(CenterEstimator::Mean),
            "median" => Ok(CenterEstimator::Median),
            _ => Err(BeerError::InvalidEstimator(s.to_string())),
        }
    }
}

/// Per-bin spread estimator for [`bin_data`].
///
/// Both variants report a standard error (spread divided by √n): `Std`
/// from the standard deviation, `Mad` from 1.4826× the median absolute
/// deviation (the Gaussian-consistent robust scale).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpreadEstimator {
    Std,
    Mad,
}

impl FromStr for SpreadEstimator {
    type Err = BeerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "std" => Ok(SpreadEstimator::Std),
            "mad" => Ok(SpreadEstimator::Mad),
            _ => Err(BeerError::InvalidEstimator(s.to_string())),
        }
    }
}

/// Edge handling for [`median_boxcar_filter`]. Only reflection is
/// supported; the enum exists so new policies extend the signature
/// without breaking it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EdgePolicy {
    Reflect,
}

impl FromStr for EdgePolicy {
    type Err = BeerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "reflect" => Ok(EdgePolicy::Reflect),
            _ => Err(BeerError::UnsupportedEdgePolicy(s.to_string())),
        }
    }
}

/// A time-binned series: one center time, value and standard error per bin.
#[derive(Debug, Clone, PartialEq)]
pub struct BinnedSeries {
    pub time: Vec<Day>,
    pub value: Vec<f64>,
    pub error: Vec<f64>,
}

fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

fn median(values: &[f64]) -> f64 {
    let mut sorted = values.to_vec();
    sorted.sort_unstable_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 1 {
        sorted[n / 2]
    } else {
        0.5 * (sorted[n / 2 - 1] + sorted[n / 2])
    }
}

fn standard_error(values: &[f64], spread: SpreadEstimator) -> f64 {
    let n = values.len() as f64;
    match spread {
        SpreadEstimator::Std => {
            let m = mean(values);
            let var = values.iter().map(|v| (v - m).powi(2)).sum::<f64>() / n;
            var.sqrt() / n.sqrt()
        }
        SpreadEstimator::Mad => {
            let m = median(values);
            let deviations: Vec<f64> = values.iter().map(|v| (v - m).abs()).collect();
            MAD_TO_SIGMA * median(&deviations) / n.sqrt()
        }
    }
}

/// Median boxcar filter with reflective edge handling.
///
/// Arguments
/// ---------
/// * `data`: data array
/// * `window_length`: odd filter window length, in samples
/// * `edges`: edge policy; only [`EdgePolicy::Reflect`] exists
///
/// Return
/// ------
/// * the filtered array, same length as `data`
///
/// The array is extended before filtering so the window never shrinks at
/// the edges: the first `window_length` samples are mirrored in front,
/// and samples `[n-1-window_length, n-1)` are appended behind. The
/// trailing pad is *not* reversed and excludes the final sample; this
/// matches the historical detrending code exactly and the difference is
/// confined to the last half-window of the output.
pub fn median_boxcar_filter(
    data: &[f64],
    window_length: usize,
    edges: EdgePolicy,
) -> Result<Vec<f64>, BeerError> {
    if window_length % 2 == 0 {
        return Err(BeerError::EvenFilterWindow(window_length));
    }
    let EdgePolicy::Reflect = edges;

    let n = data.len();
    if n == 0 {
        return Ok(Vec::new());
    }
    let w = window_length.min(n);
    let half = window_length / 2;

    let mut extended = Vec::with_capacity(n + 2 * w);
    extended.extend(data[..w].iter().rev());
    extended.extend_from_slice(data);
    extended.extend_from_slice(&data[(n - 1).saturating_sub(w)..n - 1]);

    let filtered = (w..w + n)
        .map(|i| {
            let lo = i.saturating_sub(half);
            let hi = (i + half + 1).min(extended.len());
            median(&extended[lo..hi])
        })
        .collect();

    Ok(filtered)
}

/// Indices of the samples within `half_width` of `center`.
pub fn in_window(time: &[Day], center: Day, half_width: Day) -> Vec<usize> {
    time.iter()
        .positions(|&t| (t - center).abs() <= half_width)
        .collect()
}

/// Bin a time series with robust per-bin statistics.
///
/// Arguments
/// ---------
/// * `time`, `data`: aligned sample arrays
/// * `binsize`: bin-center spacing, same unit as `time`
/// * `center`: per-bin value estimator
/// * `spread`: per-bin standard-error estimator
///
/// Return
/// ------
/// * a [`BinnedSeries`] with centers spaced by `binsize` over
///   `[min(time) + binsize/2, max(time) - binsize/2)`
///
/// Each bin collects every sample with `|t - center| <= binsize`: the
/// selection window has full width `2·binsize`, so adjacent bins share
/// samples. This oversampling is intentional and matches the historical
/// binning code. NaN data samples are dropped before estimation; a bin
/// left empty reports `(0.0, 0.0)` rather than NaN.
pub fn bin_data(
    time: &[Day],
    data: &[f64],
    binsize: f64,
    center: CenterEstimator,
    spread: SpreadEstimator,
) -> BinnedSeries {
    let mut binned = BinnedSeries {
        time: Vec::new(),
        value: Vec::new(),
        error: Vec::new(),
    };

    let Some((tmin, tmax)) = time.iter().copied().minmax().into_option() else {
        return binned;
    };

    let start = tmin + 0.5 * binsize;
    let stop = tmax - 0.5 * binsize;
    let mut i = 0usize;
    loop {
        let c = start + i as f64 * binsize;
        if c >= stop {
            break;
        }
        binned.time.push(c);
        i += 1;
    }

    for &c in &binned.time {
        let samples: Vec<f64> = izip!(time, data)
            .filter(|(t, d)| (c - **t).abs() <= binsize && !d.is_nan())
            .map(|(_, d)| *d)
            .collect();

        if samples.is_empty() {
            binned.value.push(0.0);
            binned.error.push(0.0);
            continue;
        }

        let value = match center {
            CenterEstimator::Mean => mean(&samples),
            CenterEstimator::Median => median(&samples),
        };
        binned.value.push(value);
        binned.error.push(standard_error(&samples, spread));
    }

    binned
}

/// Estimate the eclipse-bottom flux level.
///
/// Applies the chosen estimator to the data samples within
/// `half_duration` of `eclipse_time`. Returns `None` when no sample falls
/// in the window; callers must check before using the value.
pub fn fit_eclipse_bottom(
    time: &[Day],
    data: &[f64],
    eclipse_time: Day,
    half_duration: Day,
    estimator: CenterEstimator,
) -> Option<f64> {
    let samples: Vec<f64> = in_window(time, eclipse_time, half_duration)
        .into_iter()
        .map(|i| data[i])
        .collect();

    if samples.is_empty() {
        return None;
    }

    Some(match estimator {
        CenterEstimator::Mean => mean(&samples),
        CenterEstimator::Median => median(&samples),
    })
}

/// Shift a data array so the fitted eclipse bottom sits at zero.
///
/// Returns a corrected copy; the input is never mutated.
pub fn zeroed_eclipse_bottom(data: &[f64], bottom: f64) -> Vec<f64> {
    data.iter().map(|d| d - bottom).collect()
}
