//! IAU 2006 general precession in ecliptic longitude.
//!
//! p_A is the accumulated westward drift of the vernal equinox along the
//! ecliptic since J2000.0. Sidereal longitudes are tropical longitudes
//! minus an ayanamsha that grows at exactly this rate.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567-586 (Table 1).

/// General precession in longitude, in arcseconds.
///
/// `t` is Julian centuries of TT since J2000.0. The linear term is about
/// 5028.8" per century (50.29" per year).
pub fn general_precession_longitude_arcsec(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3 - 0.000023857 * t4 - 0.0000000383 * t5
}

/// General precession in longitude, in degrees.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    general_precession_longitude_arcsec(t) / 3600.0
}
