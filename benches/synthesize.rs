//! Benchmarks for BeerCurve::synthesize (the fitting-loop hot path)
//!
//! Run with:
//!   cargo bench --bench synthesize
//!   cargo bench synthesize -- synthesize/instantaneous

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use beer_curve::constants::DPI;
use beer_curve::{
    BeerCurve, ExposureSettings, OccultationGeometry, OccultationModel, OrbitOrientation,
    SystemParams,
};

/// Uniform-disk boxcar evaluator, same as the integration-test model.
struct UniformDiskModel;

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
        eclipse_depth: Some(60e-6),
        third_harmonic: None,
    }
}

fn bench_synthesize(c: &mut Criterion) {
    let time: Vec<f64> = (0..4000)
        .map(|i| i as f64 * 2.0 * 2.204733 / 4000.0)
        .collect();

    let mut group = c.benchmark_group("synthesize");

    let mut instantaneous =
        BeerCurve::new(hatp7b(), ExposureSettings::none(), UniformDiskModel).unwrap();
    group.bench_function("instantaneous", |b| {
        b.iter(|| instantaneous.synthesize(black_box(&time)).unwrap())
    });

    let mut supersampled = BeerCurve::new(
        hatp7b(),
        ExposureSettings::new(0.0204, 10),
        UniformDiskModel,
    )
    .unwrap();
    group.bench_function("supersampled_x10", |b| {
        b.iter(|| supersampled.synthesize(black_box(&time)).unwrap())
    });

    group.finish();
}

criterion_group!(benches, bench_synthesize);
criterion_main!(benches);
