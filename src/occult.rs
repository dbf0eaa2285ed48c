//! # Transit and eclipse configuration
//!
//! The optical transit-shape model (limb-darkened occultation integral) is
//! an external collaborator behind the [`OccultationModel`] trait. This
//! module's job is translation only: it builds one self-contained
//! [`OccultationGeometry`] per event from the [`SystemParams`] and
//! reconciles the evaluator's "1 out of event" flux normalization with the
//! crate-wide baseline-0 convention.
//!
//! The transit and eclipse geometries are constructed independently (the
//! eclipse is not a mutated copy of the transit configuration), so an
//! evaluator is free to cache per-geometry state without aliasing hazards.

use serde::{Deserialize, Serialize};

use crate::beer_errors::BeerError;
use crate::constants::{Day, Degree, FluxFraction};
use crate::system_params::{LimbDarkening, SystemParams};

/// One occultation event as seen by the external evaluator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OccultationGeometry {
    /// Orbital period
    pub per: Day,
    /// Mid-event epoch (mid-transit or mid-eclipse)
    pub t0: Day,
    /// Semi-major axis in stellar radii
    pub a: f64,
    /// Orbital inclination in degrees
    pub inclination: Degree,
    /// Signed radius ratio. Negative values encode a brightening event
    /// (depth `-rp_rs²`), which evaluators must accept without failing.
    pub rp_rs: f64,
    /// Limb-darkening law ([`LimbDarkening::Uniform`] for eclipses)
    pub limb_darkening: LimbDarkening,
}

/// External analytic transit-flux evaluator.
///
/// Implementations return one flux value per time stamp, normalized so the
/// flux is exactly 1 outside the event. The evaluator is treated as a
/// correct oracle; this crate never second-guesses its output.
pub trait OccultationModel {
    fn evaluate(&self, geometry: &OccultationGeometry, time: &[Day]) -> Vec<f64>;
}

/// Transit geometry for a circular orbit.
///
/// Requires `rp_rs` and `limb_darkening`; the limb-darkening law is the
/// quadratic or nonlinear one selected when the coefficients were parsed.
pub fn transit_geometry(params: &SystemParams) -> Result<OccultationGeometry, BeerError> {
    let rp_rs = params.rp_rs.ok_or(BeerError::MissingParameter("rp_rs"))?;
    let limb_darkening = params
        .limb_darkening
        .ok_or(BeerError::MissingParameter("limb_darkening"))?;

    Ok(OccultationGeometry {
        per: params.per,
        t0: params.t0,
        a: params.a,
        inclination: params.inclination_deg(),
        rp_rs,
        limb_darkening,
    })
}

/// Eclipse geometry: uniform disk, mid-event at `t0 + per/2`, and an
/// effective radius ratio of `sqrt(|depth|)·sign(depth)`.
///
/// The signed square root keeps negative depths (a brightening, useful in
/// fitting even though unphysical for a simple eclipse) representable
/// without a domain error.
pub fn eclipse_geometry(params: &SystemParams) -> OccultationGeometry {
    let depth = params.eclipse_depth();
    OccultationGeometry {
        per: params.per,
        t0: params.eclipse_time(),
        a: params.a,
        inclination: params.inclination_deg(),
        rp_rs: depth.abs().sqrt().copysign(depth),
        limb_darkening: LimbDarkening::Uniform,
    }
}

/// Transit signal referenced to the baseline-0 convention
/// (evaluator flux minus 1).
pub fn transit_signal<M: OccultationModel>(
    model: &M,
    params: &SystemParams,
    time: &[Day],
) -> Result<Vec<FluxFraction>, BeerError> {
    let geometry = transit_geometry(params)?;
    Ok(model
        .evaluate(&geometry, time)
        .into_iter()
        .map(|f| f - 1.0)
        .collect())
}

/// Eclipse signal referenced to the baseline-0 convention.
pub fn eclipse_signal<M: OccultationModel>(
    model: &M,
    params: &SystemParams,
    time: &[Day],
) -> Vec<FluxFraction> {
    let geometry = eclipse_geometry(params);
    model
        .evaluate(&geometry, time)
        .into_iter()
        .map(|f| f - 1.0)
        .collect()
}
