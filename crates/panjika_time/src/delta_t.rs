//! Delta T = TT - UT.
//!
//! Piecewise polynomials from Espenak & Meeus, *Five Millennium Canon of
//! Solar Eclipses* (NASA TP-2006-214141). Outside the fitted spans the
//! long-term parabola of Morrison & Stephenson (2004) is used.

/// Delta T in seconds for a decimal year (e.g. `2025.0` = start of 2025).
pub fn delta_t_seconds(year: f64) -> f64 {
    if year < 1900.0 || year >= 2150.0 {
        return long_term(year);
    }
    if year < 1920.0 {
        let t = year - 1900.0;
        let t2 = t * t;
        return -2.79 + 1.494119 * t - 0.0598939 * t2 + 0.0061966 * t2 * t
            - 0.000197 * t2 * t2;
    }
    if year < 1941.0 {
        let t = year - 1920.0;
        return 21.20 + 0.84493 * t - 0.076100 * t * t + 0.0020936 * t * t * t;
    }
    if year < 1961.0 {
        let t = year - 1950.0;
        return 29.07 + 0.407 * t - t * t / 233.0 + t * t * t / 2547.0;
    }
    if year < 1986.0 {
        let t = year - 1975.0;
        return 45.45 + 1.067 * t - t * t / 260.0 - t * t * t / 718.0;
    }
    if year < 2005.0 {
        let t = year - 2000.0;
        let t2 = t * t;
        let t3 = t2 * t;
        return 63.86 + 0.3345 * t - 0.060374 * t2
            + 0.0017275 * t3
            + 0.000651814 * t2 * t2
            + 0.00002373599 * t2 * t3;
    }
    if year < 2050.0 {
        let t = year - 2000.0;
        return 62.92 + 0.32217 * t + 0.005589 * t * t;
    }
    long_term(year) - 0.5628 * (2150.0 - year)
}

fn long_term(year: f64) -> f64 {
    let u = (year - 1820.0) / 100.0;
    -20.0 + 32.0 * u * u
}

/// Decimal year for a UT Julian Date, using the mean Gregorian year.
pub fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - crate::J2000_JD) / 365.2425
}
