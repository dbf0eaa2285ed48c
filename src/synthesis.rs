//! # Light-curve synthesis
//!
//! [`BeerCurve`] is the façade wiring the whole pipeline together: it owns
//! a validated [`SystemParams`], the [`ExposureSettings`], the external
//! [`OccultationModel`] evaluator, and a single most-recent-result cache.
//!
//! ## Zero-point conventions
//!
//! Several historical formulations of this model disagree on where "zero
//! flux" sits. This crate implements exactly one convention:
//!
//! * the out-of-event baseline is 0 (evaluator fluxes have 1 subtracted);
//! * the ellipsoidal curve is renormalized so its minimum is 0 (tidal
//!   distortion never dims the system below baseline by construction);
//! * the eclipse is the *removal of reflected light*: the reflected
//!   component is multiplied by an eclipse-scaling array and no separate
//!   eclipse term is added, so the eclipse bottom sits at 0 and the dip
//!   depth equals the reflected flux removed there (`f0 + a_planet` for
//!   the default depth).
//!
//! ## Synthesis pipeline
//!
//! 1. supersample the time grid ([`supersample`])
//! 2. fold to orbital phase ([`orbital_phase`])
//! 3. evaluate beaming, ellipsoidal (renormalized), reflected/emitted and
//!    the optional third harmonic
//! 4. evaluate the eclipse flux and derive the eclipse scaling
//! 5. evaluate the transit when configured ([`transit_signal`])
//! 6. sum, then [`decimate`] back to observed cadence

use crate::beer_errors::BeerError;
use crate::components::{beaming, ellipsoidal, reflected_emitted, third_harmonic};
use crate::constants::{Day, FluxFraction};
use crate::exposure::{decimate, supersample, ExposureSettings};
use crate::occult::{eclipse_geometry, transit_signal, OccultationModel};
use crate::phase::orbital_phase;
use crate::system_params::SystemParams;
use itertools::izip;

/// Synthesizer for the combined BEER + transit + eclipse light curve.
pub struct BeerCurve<M: OccultationModel> {
    params: SystemParams,
    exposure: ExposureSettings,
    model: M,
    last_signal: Option<Vec<FluxFraction>>,
}

impl<M: OccultationModel> BeerCurve<M> {
    /// Build a synthesizer, validating the parameter set once.
    ///
    /// A configured `rp_rs` without a limb-darkening law is rejected here
    /// rather than mid-pipeline.
    pub fn new(
        params: SystemParams,
        exposure: ExposureSettings,
        model: M,
    ) -> Result<Self, BeerError> {
        if params.rp_rs.is_some() && params.limb_darkening.is_none() {
            return Err(BeerError::MissingParameter("limb_darkening"));
        }

        Ok(Self {
            params,
            exposure,
            model,
            last_signal: None,
        })
    }

    pub fn params(&self) -> &SystemParams {
        &self.params
    }

    /// Synthesize the model flux for the given time series.
    ///
    /// The returned array is aligned 1:1 with `time` (supersampling is
    /// internal). The result is also retained and queryable through
    /// [`last_signal`](Self::last_signal) until the next call.
    pub fn synthesize(&mut self, time: &[Day]) -> Result<Vec<FluxFraction>, BeerError> {
        let grid = supersample(time, self.exposure.exp_time, self.exposure.factor);
        let phi = orbital_phase(&grid, self.params.t0, self.params.per);

        let beam = beaming(&phi, self.params.a_beam);

        let mut ellip = ellipsoidal(&phi, self.params.a_ellip);
        let floor = ellip.iter().copied().fold(f64::INFINITY, f64::min);
        for e in &mut ellip {
            *e -= floor;
        }

        let reflected = reflected_emitted(
            &phi,
            self.params.a_planet,
            self.params.phase_shift,
            self.params.f0,
        );
        let scaling = self.eclipse_scaling(&grid);

        let transit = match self.params.rp_rs {
            Some(_) => transit_signal(&self.model, &self.params, &grid)?,
            None => vec![0.0; grid.len()],
        };

        let mut signal: Vec<FluxFraction> = izip!(&transit, &beam, &ellip, &reflected, &scaling)
            .map(|(t, b, e, r, s)| t + b + e + r * s)
            .collect();

        if let Some(h) = self.params.third_harmonic {
            for (s, h3) in signal.iter_mut().zip(third_harmonic(&phi, h.a3, h.theta3)) {
                *s += h3;
            }
        }

        let signal = decimate(&signal, self.exposure.factor);
        self.last_signal = Some(signal.clone());
        Ok(signal)
    }

    /// The most recently synthesized signal, if any.
    pub fn last_signal(&self) -> Option<&[FluxFraction]> {
        self.last_signal.as_deref()
    }

    /// Eclipse-scaling array multiplying the reflected component.
    ///
    /// The evaluator's eclipse flux (1 out of eclipse, `1 - depth` at the
    /// bottom) with every sample *exactly equal to its minimum* set to 0.
    ///
    /// Zeroing only the exact-minimum samples reproduces the historical
    /// behavior of this model: with a curved eclipse bottom only the
    /// deepest sample(s) are zeroed, not the whole eclipse duration. That
    /// fragility is deliberate; do not widen the rule to the full
    /// in-eclipse window without revisiting the compatibility tests.
    fn eclipse_scaling(&self, grid: &[Day]) -> Vec<f64> {
        let geometry = eclipse_geometry(&self.params);
        let flux = self.model.evaluate(&geometry, grid);
        let bottom = flux.iter().copied().fold(f64::INFINITY, f64::min);
        flux.into_iter()
            .map(|f| if f == bottom { 0.0 } else { f })
            .collect()
    }
}
