use beer_curve::constants::DPI;
use beer_curve::{OccultationGeometry, OccultationModel, OrbitOrientation, SystemParams};

/// Uniform-disk boxcar occultation evaluator.
///
/// Flux is 1 outside the event and `1 - rp_rs·|rp_rs|` inside a window of
/// the geometric transit duration around each mid-event time. The signed
/// depth keeps negative-depth (brightening) geometries meaningful. Stands
/// in for a full limb-darkened evaluator in the integration tests.
pub struct UniformDiskModel;

impl OccultationModel for UniformDiskModel {
    fn evaluate(&self, geometry: &OccultationGeometry, time: &[f64]) -> Vec<f64> {
        let depth = geometry.rp_rs * geometry.rp_rs.abs();
        let incl = geometry.inclination.to_radians();
        let b = geometry.a * incl.cos();
        let x = ((1.0 + geometry.rp_rs.abs()).powi(2) - b * b).max(0.0).sqrt()
            / (geometry.a * incl.sin());
        let half_duration = geometry.per / DPI * x.clamp(-1.0, 1.0).asin();

        time.iter()
            .map(|&t| {
                let mut dt = (t - geometry.t0).rem_euclid(geometry.per);
                if dt > 0.5 * geometry.per {
                    dt -= geometry.per;
                }
                if dt.abs() <= half_duration {
                    1.0 - depth
                } else {
                    1.0
                }
            })
            .collect()
    }
}

/// HAT-P-7 b (Jackson et al. 2013), the reference fixture: BEER
/// amplitudes and eclipse only, no transit configured.
pub fn hatp7b() -> SystemParams {
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
        eclipse_depth: Some(60e-6),
        third_harmonic: None,
    }
}

/// `n` evenly spaced samples over `[0, span)`.
pub fn time_grid(n: usize, span: f64) -> Vec<f64> {
    (0..n).map(|i| i as f64 * span / n as f64).collect()
}
