use crate::constants::{Day, Phase};

/// Fold a time series on the orbital ephemeris.
///
/// Arguments
/// ---------
/// * `time`: time stamps, any unit shared with `t0` and `per`
/// * `t0`: reference (mid-transit) epoch
/// * `per`: orbital period
///
/// Return
/// ------
/// * one orbital phase in [0, 1) per time stamp
///
/// The modulo is floor-style (`rem_euclid`), so the phase stays in [0, 1)
/// for times before `t0` as well. `per == 0` is undefined behavior and
/// propagates NaN.
pub fn orbital_phase(time: &[Day], t0: Day, per: Day) -> Vec<Phase> {
    time.iter().map(|t| (t - t0).rem_euclid(per) / per).collect()
}

/// Mid-eclipse time, `t0 + per/2`.
///
/// Only valid for circular orbits; eccentric orbits shift the secondary
/// eclipse away from phase 0.5 and are not handled here.
pub fn eclipse_time(t0: Day, per: Day) -> Day {
    t0 + 0.5 * per
}
