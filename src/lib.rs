//! # beer-curve
//!
//! Synthesis of photometric light curves for star–planet systems: the
//! BEER components (Doppler **B**eaming, **E**llipsoidal variation,
//! **R**eflected/emitted light), composited with transit and secondary
//! eclipse signals, plus the data-conditioning utilities (median-filter
//! detrending, robust binning, eclipse-bottom fitting) used to compare
//! real photometry against the model.
//!
//! The transit-shape integral itself is external: callers plug any
//! limb-darkened occultation evaluator in through
//! [`OccultationModel`](crate::occult::OccultationModel).

pub mod beer_errors;
pub mod components;
pub mod constants;
pub mod detrend;
pub mod exposure;
pub mod occult;
pub mod phase;
pub mod synthesis;
pub mod system_params;

pub use beer_errors::BeerError;
pub use exposure::ExposureSettings;
pub use occult::{OccultationGeometry, OccultationModel};
pub use synthesis::BeerCurve;
pub use system_params::{LimbDarkening, OrbitOrientation, SystemParams, ThirdHarmonic};
