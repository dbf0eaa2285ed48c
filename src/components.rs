//! # BEER component curves
//!
//! The periodic brightness components of a close-in star–planet system,
//! each a pure function of orbital phase:
//!
//! * **B**eaming: Doppler boosting of the stellar flux by the reflex
//!   velocity, odd in phase, extremal at quadrature
//! * **E**llipsoidal: tidal distortion of the star, two peaks per orbit
//! * **R**eflected/emitted: the planet's own light, peaking near
//!   superior conjunction (phase 0.5) for `phase_shift = 0`
//!
//! plus an optional third harmonic seen in some short-period systems.
//!
//! Sign conventions are held fixed crate-wide: the canonical forms below
//! are the ones every other module (and the compositor's zero-point
//! handling) relies on.

use itertools::izip;

use crate::constants::{FluxFraction, Phase, DPI};
use crate::system_params::SystemParams;

/// Reflected/emitted light of the planet: `f0 - a_planet·cos(2π(φ - phase_shift))`.
pub fn reflected_emitted(
    phi: &[Phase],
    a_planet: FluxFraction,
    phase_shift: Phase,
    f0: FluxFraction,
) -> Vec<FluxFraction> {
    phi.iter()
        .map(|p| f0 - a_planet * (DPI * (p - phase_shift)).cos())
        .collect()
}

/// Doppler-beaming curve: `a_beam·sin(2πφ)`.
///
/// Zero at transit and eclipse centers, extremal at quadrature, as expected
/// for an effect proportional to the radial velocity.
pub fn beaming(phi: &[Phase], a_beam: FluxFraction) -> Vec<FluxFraction> {
    phi.iter().map(|p| a_beam * (DPI * p).sin()).collect()
}

/// Ellipsoidal-variation curve: `-a_ellip·cos(4πφ)`.
///
/// Double-peaked per orbit. The compositor renormalizes this curve so its
/// minimum sits at zero; the raw form here keeps the historical sign.
pub fn ellipsoidal(phi: &[Phase], a_ellip: FluxFraction) -> Vec<FluxFraction> {
    phi.iter().map(|p| -a_ellip * (2. * DPI * p).cos()).collect()
}

/// Third harmonic: `a3·cos(6π(φ - theta3))`.
pub fn third_harmonic(phi: &[Phase], a3: FluxFraction, theta3: Phase) -> Vec<FluxFraction> {
    phi.iter()
        .map(|p| a3 * (3. * DPI * (p - theta3)).cos())
        .collect()
}

/// Sum of all configured BEER components (no transit or eclipse).
pub fn all_beer(phi: &[Phase], params: &SystemParams) -> Vec<FluxFraction> {
    let mut signal: Vec<FluxFraction> = izip!(
        reflected_emitted(phi, params.a_planet, params.phase_shift, params.f0),
        beaming(phi, params.a_beam),
        ellipsoidal(phi, params.a_ellip),
    )
    .map(|(r, b, e)| r + b + e)
    .collect();

    if let Some(h) = params.third_harmonic {
        for (s, h3) in signal.iter_mut().zip(third_harmonic(phi, h.a3, h.theta3)) {
            *s += h3;
        }
    }

    signal
}
