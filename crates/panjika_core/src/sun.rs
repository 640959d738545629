//! Low-precision solar theory.
//!
//! Meeus, *Astronomical Algorithms* (2nd ed.), Chapter 25: geometric mean
//! longitude plus the equation of the centre, corrected for annual
//! aberration. Accurate to about 0.01 degree over several millennia.

/// Annual aberration in longitude, degrees (20.4898").
const ABERRATION_DEG: f64 = 0.005_69;

/// Apparent geocentric ecliptic longitude of the Sun, in degrees, referred
/// to the mean equinox of date (nutation not applied). Not normalized.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t2;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t2).to_radians();

    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t2) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();

    l0 + c - ABERRATION_DEG
}
