//! Lunar longitude from the ELP-2000/82 truncation in Meeus,
//! *Astronomical Algorithms* (2nd ed.), Chapter 47.
//!
//! All 60 periodic longitude terms of Table 47.A are evaluated together
//! with the three additive terms (Venus, Jupiter and flattening). Accuracy
//! is around 10" in longitude.

/// One row of Table 47.A: multipliers of `[D, M, M', F]` and the sine
/// amplitude in units of 1e-6 degree.
struct LongitudeTerm {
    args: [i8; 4],
    amplitude: i32,
}

const fn term(d: i8, m: i8, mp: i8, f: i8, amplitude: i32) -> LongitudeTerm {
    LongitudeTerm {
        args: [d, m, mp, f],
        amplitude,
    }
}

#[rustfmt::skip]
static LONGITUDE_TERMS: [LongitudeTerm; 60] = [
    term(0,  0,  1,  0, 6_288_774),
    term(2,  0, -1,  0, 1_274_027),
    term(2,  0,  0,  0,   658_314),
    term(0,  0,  2,  0,   213_618),
    term(0,  1,  0,  0,  -185_116),
    term(0,  0,  0,  2,  -114_332),
    term(2,  0, -2,  0,    58_793),
    term(2, -1, -1,  0,    57_066),
    term(2,  0,  1,  0,    53_322),
    term(2, -1,  0,  0,    45_758),
    term(0,  1, -1,  0,   -40_923),
    term(1,  0,  0,  0,   -34_720),
    term(0,  1,  1,  0,   -30_383),
    term(2,  0,  0, -2,    15_327),
    term(0,  0,  1,  2,   -12_528),
    term(0,  0,  1, -2,    10_980),
    term(4,  0, -1,  0,    10_675),
    term(0,  0,  3,  0,    10_034),
    term(4,  0, -2,  0,     8_548),
    term(2,  1, -1,  0,    -7_888),
    term(2,  1,  0,  0,    -6_766),
    term(1,  0, -1,  0,    -5_163),
    term(1,  1,  0,  0,     4_987),
    term(2, -1,  1,  0,     4_036),
    term(2,  0,  2,  0,     3_994),
    term(4,  0,  0,  0,     3_861),
    term(2,  0, -3,  0,     3_665),
    term(0,  1, -2,  0,    -2_689),
    term(2,  0, -1,  2,    -2_602),
    term(2, -1, -2,  0,     2_390),
    term(1,  0,  1,  0,    -2_348),
    term(2, -2,  0,  0,     2_236),
    term(0,  1,  2,  0,    -2_120),
    term(0,  2,  0,  0,    -2_069),
    term(2, -2, -1,  0,     2_048),
    term(2,  0,  1, -2,    -1_773),
    term(2,  0,  0,  2,    -1_595),
    term(4, -1, -1,  0,     1_215),
    term(0,  0,  2,  2,    -1_110),
    term(3,  0, -1,  0,      -892),
    term(2,  1,  1,  0,      -810),
    term(4, -1, -2,  0,       759),
    term(0,  2, -1,  0,      -713),
    term(2,  2, -1,  0,      -700),
    term(2,  1, -2,  0,       691),
    term(2, -1,  0, -2,       596),
    term(4,  0,  1,  0,       549),
    term(0,  0,  4,  0,       537),
    term(4, -1,  0,  0,       520),
    term(1,  0, -2,  0,      -487),
    term(2,  1,  0, -2,      -399),
    term(0,  0,  2, -2,      -381),
    term(1,  1,  1,  0,       351),
    term(3,  0, -2,  0,      -340),
    term(4,  0, -3,  0,       330),
    term(2, -1,  2,  0,       327),
    term(0,  2,  1,  0,      -323),
    term(1,  1, -1,  0,       299),
    term(2,  0,  3,  0,       294),
    // Distance-only row; kept so the table mirrors 47.A line for line.
    term(2,  0, -1, -2,         0),
];

/// Mean arguments of the lunar theory, in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarArguments {
    /// Mean longitude L'.
    pub mean_longitude: f64,
    /// Mean elongation D.
    pub elongation: f64,
    /// Sun's mean anomaly M.
    pub sun_anomaly: f64,
    /// Moon's mean anomaly M'.
    pub moon_anomaly: f64,
    /// Argument of latitude F.
    pub latitude_argument: f64,
}

impl LunarArguments {
    /// Evaluate the polynomials at `t` Julian centuries of TT from J2000.0.
    pub fn at(t: f64) -> Self {
        let t2 = t * t;
        let t3 = t2 * t;
        let t4 = t3 * t;
        Self {
            mean_longitude: 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2
                + t3 / 538_841.0
                - t4 / 65_194_000.0,
            elongation: 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2
                + t3 / 545_868.0
                - t4 / 113_065_000.0,
            sun_anomaly: 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2
                + t3 / 24_490_000.0,
            moon_anomaly: 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2
                + t3 / 69_699.0
                - t4 / 14_712_000.0,
            latitude_argument: 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2
                - t3 / 3_526_000.0
                + t4 / 863_310_000.0,
        }
    }
}

/// Geocentric ecliptic longitude of the Moon in degrees, referred to the
/// mean equinox of date (nutation not applied). Not normalized.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_longitude_deg(t: f64) -> f64 {
    let args = LunarArguments::at(t);
    let d = args.elongation.to_radians();
    let m = args.sun_anomaly.to_radians();
    let mp = args.moon_anomaly.to_radians();
    let f = args.latitude_argument.to_radians();

    // Eccentricity of Earth's orbit scales every term that involves M.
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let mut sigma_l = 0.0_f64;
    for row in &LONGITUDE_TERMS {
        let [cd, cm, cmp, cf] = row.args;
        let angle = cd as f64 * d + cm as f64 * m + cmp as f64 * mp + cf as f64 * f;
        let scale = match cm.unsigned_abs() {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sigma_l += row.amplitude as f64 * scale * angle.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let lp = args.mean_longitude.to_radians();
    sigma_l += 3958.0 * a1.sin() + 1962.0 * (lp - f).sin() + 318.0 * a2.sin();

    args.mean_longitude + sigma_l / 1_000_000.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_47a() {
        // 1992 Apr 12 0h TD: lambda = 133.162655 (before nutation)
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let lon = moon_longitude_deg(t).rem_euclid(360.0);
        assert!((lon - 133.162_655).abs() < 1e-4, "lon = {lon}");
    }

    #[test]
    fn arguments_of_example_47a() {
        let t = -0.077_221_081_451;
        let args = LunarArguments::at(t);
        assert!((args.mean_longitude.rem_euclid(360.0) - 134.290_182).abs() < 1e-5);
        assert!((args.elongation.rem_euclid(360.0) - 113.842_304).abs() < 1e-5);
    }

    #[test]
    fn sidereal_month_motion() {
        // Moon advances ~13.18 deg/day on average.
        let day = 1.0 / 36_525.0;
        let mut total = 0.0;
        for i in 0..27 {
            let t = 0.25 + i as f64 * day;
            let step = (moon_longitude_deg(t + day) - moon_longitude_deg(t)).rem_euclid(360.0);
            assert!((11.5..15.5).contains(&step), "step {i} = {step}");
            total += step;
        }
        assert!((total / 27.0 - 13.18).abs() < 0.3);
    }
}
