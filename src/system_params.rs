//! # Star–planet system parameters
//!
//! [`SystemParams`] gathers every physical quantity the synthesis pipeline
//! reads: the orbital ephemeris, the occultation geometry, the BEER
//! component amplitudes and the zero-point conventions. All optional
//! behavior is expressed through `Option` fields enumerated here, so the
//! parameter set is validated once at construction of a
//! [`BeerCurve`](crate::synthesis::BeerCurve) rather than probed key by key
//! inside the pipeline.
//!
//! Units:
//! * `per`, `t0`: caller's time unit (days in the examples)
//! * `a`: stellar radii
//! * amplitudes (`a_ellip`, `a_beam`, `a_planet`, `f0`, `eclipse_depth`):
//!   dimensionless flux fractions
//! * `phase_shift`, `ThirdHarmonic::theta3`: orbital phase

use serde::{Deserialize, Serialize};

use crate::beer_errors::BeerError;
use crate::constants::{Day, Degree, FluxFraction, Phase};
use crate::phase::eclipse_time;

/// Orbit orientation, as either an inclination or an impact parameter.
///
/// Exactly one of the two must be known; the other follows from the scaled
/// semi-major axis (`b = a cos i`), so the enum makes the "both given" and
/// "neither given" misconfigurations unrepresentable.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum OrbitOrientation {
    /// Orbital inclination in degrees (90° is edge-on)
    Inclination(Degree),
    /// Transit impact parameter in stellar radii
    ImpactParameter(f64),
}

/// Limb-darkening law for the transit-shape evaluator.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum LimbDarkening {
    /// Uniform stellar disk (all coefficients zero), used for eclipses
    Uniform,
    /// Quadratic law, `[u1, u2]`
    Quadratic([f64; 2]),
    /// Nonlinear (Claret) law, `[c1, c2, c3, c4]`
    Nonlinear([f64; 4]),
}

impl LimbDarkening {
    /// Build a law from a raw coefficient slice.
    ///
    /// Two coefficients select the quadratic law, four the nonlinear law.
    /// Any other length is a configuration error.
    pub fn from_coefficients(ldc: &[f64]) -> Result<Self, BeerError> {
        match *ldc {
            [u1, u2] => Ok(LimbDarkening::Quadratic([u1, u2])),
            [c1, c2, c3, c4] => Ok(LimbDarkening::Nonlinear([c1, c2, c3, c4])),
            _ => Err(BeerError::InvalidLimbDarkening(ldc.len())),
        }
    }
}

/// Optional third-harmonic component, `a3 * cos(6π(φ - theta3))`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThirdHarmonic {
    pub a3: FluxFraction,
    pub theta3: Phase,
}

/// Physical parameters of a star–planet system.
///
/// The transit signal is synthesized only when both `rp_rs` and
/// `limb_darkening` are present; the eclipse is always synthesized, with a
/// depth of `eclipse_depth` when given and `f0 + a_planet` otherwise.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemParams {
    /// Orbital period
    pub per: Day,
    /// Reference (mid-transit) epoch
    pub t0: Day,
    /// Semi-major axis in stellar radii
    pub a: f64,
    /// Inclination or impact parameter
    pub orientation: OrbitOrientation,
    /// Planet-to-star radius ratio; `None` disables the transit signal
    pub rp_rs: Option<f64>,
    /// Limb-darkening law for the transit; required when `rp_rs` is set
    pub limb_darkening: Option<LimbDarkening>,
    /// Ellipsoidal-variation amplitude
    pub a_ellip: FluxFraction,
    /// Doppler-beaming amplitude
    pub a_beam: FluxFraction,
    /// Reflected/emitted-light amplitude
    pub a_planet: FluxFraction,
    /// Phase offset of the reflected/emitted component
    pub phase_shift: Phase,
    /// Flux zero-point of the reflected/emitted component
    pub f0: FluxFraction,
    /// Fractional eclipse depth; `None` derives `f0 + a_planet`
    pub eclipse_depth: Option<FluxFraction>,
    /// Optional third-harmonic component
    pub third_harmonic: Option<ThirdHarmonic>,
}

impl SystemParams {
    /// Orbital inclination in degrees, derived as `acos(b/a)` when the
    /// orientation is given as an impact parameter.
    pub fn inclination_deg(&self) -> Degree {
        match self.orientation {
            OrbitOrientation::Inclination(i) => i,
            OrbitOrientation::ImpactParameter(b) => (b / self.a).acos().to_degrees(),
        }
    }

    /// Transit impact parameter in stellar radii, derived as `a cos i`
    /// when the orientation is given as an inclination.
    pub fn impact_parameter(&self) -> f64 {
        match self.orientation {
            OrbitOrientation::Inclination(i) => self.a * i.to_radians().cos(),
            OrbitOrientation::ImpactParameter(b) => b,
        }
    }

    /// Fractional eclipse depth: the configured value, or `f0 + a_planet`
    /// (the reflected flux removed during eclipse) when unset.
    pub fn eclipse_depth(&self) -> FluxFraction {
        self.eclipse_depth.unwrap_or(self.f0 + self.a_planet)
    }

    /// Mid-eclipse time for this ephemeris (circular orbit).
    pub fn eclipse_time(&self) -> Day {
        eclipse_time(self.t0, self.per)
    }
}

#[cfg(test)]
mod system_params_test {
    use super::*;
    use approx::assert_relative_eq;

    fn hatp7b() -> SystemParams {
        SystemParams {
            per: 2.204733,
            t0: 0.0,
            a: 4.15,
            orientation: OrbitOrientation::ImpactParameter(0.499),
            rp_rs: None,
            limb_darkening: None,
            a_ellip: 37e-6,
            a_beam: 5e-6,
            a_planet: 60e-6,
            phase_shift: 0.0,
            f0: 0.0,
            eclipse_depth: None,
            third_harmonic: None,
        }
    }

    #[test]
    fn test_inclination_from_impact_parameter() {
        // HAT-P-7 b: b = 0.499, a = 4.15 gives i close to the published 83.1°
        let params = hatp7b();
        assert_relative_eq!(params.inclination_deg(), 83.0943, epsilon = 1e-3);

        // round trip through the derived impact parameter
        let i = params.inclination_deg();
        let as_incl = SystemParams {
            orientation: OrbitOrientation::Inclination(i),
            ..params.clone()
        };
        assert_relative_eq!(as_incl.impact_parameter(), 0.499, epsilon = 1e-12);
        assert_eq!(params.impact_parameter(), 0.499);
    }

    #[test]
    fn test_eclipse_depth_fallback() {
        let mut params = hatp7b();
        assert_eq!(params.eclipse_depth(), 60e-6);

        params.eclipse_depth = Some(45e-6);
        assert_eq!(params.eclipse_depth(), 45e-6);

        params.eclipse_depth = None;
        params.f0 = 20e-6;
        assert_relative_eq!(params.eclipse_depth(), 80e-6, epsilon = 1e-18);
    }

    #[test]
    fn test_limb_darkening_from_coefficients() {
        assert_eq!(
            LimbDarkening::from_coefficients(&[0.314709, 0.312125]),
            Ok(LimbDarkening::Quadratic([0.314709, 0.312125]))
        );
        assert_eq!(
            LimbDarkening::from_coefficients(&[0.1, 0.2, 0.3, 0.4]),
            Ok(LimbDarkening::Nonlinear([0.1, 0.2, 0.3, 0.4]))
        );
        assert_eq!(
            LimbDarkening::from_coefficients(&[0.1, 0.2, 0.3]),
            Err(BeerError::InvalidLimbDarkening(3))
        );
        assert_eq!(
            LimbDarkening::from_coefficients(&[]),
            Err(BeerError::InvalidLimbDarkening(0))
        );
    }

    #[test]
    fn test_eclipse_time() {
        let params = hatp7b();
        assert_eq!(params.eclipse_time(), 1.1023665);
    }
}
