//! Nutation in longitude from the IAU 2000B lunisolar series.
//!
//! Only Δψ is evaluated; obliquity never enters a longitude-only pipeline.
//! The planetary bias of the full IAU 2000B model is omitted.
//!
//! Source: IERS Conventions 2010, Chapter 5, Tables 5.2e and 5.3b.

use std::f64::consts::TAU;

const AS2RAD: f64 = TAU / 1_296_000.0;

/// The five Delaunay arguments `[l, l', F, D, Ω]` in radians.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn fundamental_arguments(t: f64) -> [f64; 5] {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;

    let l = (485868.249036 + 1717915923.2178 * t + 31.8792 * t2 + 0.051635 * t3 - 0.00024470 * t4)
        * AS2RAD;
    let lp = (1287104.79305 + 129596581.0481 * t - 0.5532 * t2 + 0.000136 * t3 - 0.00001149 * t4)
        * AS2RAD;
    let f = (335779.526232 + 1739527262.8478 * t - 12.7512 * t2 - 0.001037 * t3 + 0.00000417 * t4)
        * AS2RAD;
    let d = (1072260.70369 + 1602961601.2090 * t - 6.3706 * t2 + 0.006593 * t3 - 0.00003169 * t4)
        * AS2RAD;
    let om =
        (450160.398036 - 6962890.5431 * t + 7.4722 * t2 + 0.007702 * t3 - 0.00005939 * t4) * AS2RAD;

    [l, lp, f, d, om]
}

/// Δψ columns of the 77 lunisolar IAU 2000B terms:
/// `[nl, nl', nF, nD, nΩ, S, S']`, amplitudes in 0.1 μas.
#[rustfmt::skip]
static DPSI_TERMS: [[i64; 7]; 77] = [
    //  nl  nl'  nF   nD   nΩ           S        S'
    [   0,   0,   0,   0,   1, -172064161, -174666],
    [   0,   0,   2,  -2,   2,  -13170906,   -1675],
    [   0,   0,   2,   0,   2,   -2276413,    -234],
    [   0,   0,   0,   0,   2,    2074554,     207],
    [   0,   1,   0,   0,   0,    1475877,   -3633],
    [   0,   1,   2,  -2,   2,    -516821,    1226],
    [   1,   0,   0,   0,   0,     711159,      73],
    [   0,   0,   2,   0,   1,    -387298,    -367],
    [   1,   0,   2,   0,   2,    -301461,     -36],
    [   0,  -1,   2,  -2,   2,     215829,    -494],
    [   0,   0,   2,  -2,   1,     128227,     137],
    [  -1,   0,   2,   0,   2,     123457,      11],
    [  -1,   0,   0,   2,   0,     156994,      10],
    [   1,   0,   0,   0,   1,      63110,      63],
    [  -1,   0,   0,   0,   1,     -57976,     -63],
    [  -1,   0,   2,   2,   2,     -59641,     -11],
    [   1,   0,   2,   0,   1,     -51613,     -42],
    [  -2,   0,   2,   0,   1,      45893,      50],
    [   0,   0,   0,   2,   0,      63384,      11],
    [   0,   0,   2,   2,   2,     -38571,      -1],
    [   0,  -2,   2,  -2,   2,      32481,       0],
    [  -2,   0,   0,   2,   0,     -47722,       0],
    [   2,   0,   2,   0,   2,     -31046,      -1],
    [   1,   0,   2,  -2,   2,      28593,       0],
    [  -1,   0,   2,   0,   1,      20441,      21],
    [   2,   0,   0,   0,   0,      29243,       0],
    [   0,   0,   2,   0,   0,      25887,       0],
    [   0,   1,   0,   0,   1,     -14053,     -25],
    [  -1,   0,   0,   2,   1,      15164,      10],
    [   0,   2,   2,  -2,   2,     -15794,      72],
    [   0,   0,  -2,   2,   0,      21783,       0],
    [   1,   0,   0,  -2,   1,     -12873,     -10],
    [   0,  -1,   0,   0,   1,     -12654,      11],
    [  -1,   0,   2,   2,   1,     -10204,       0],
    [   0,   2,   0,   0,   0,      16707,     -85],
    [   1,   0,   2,   2,   2,      -7691,       0],
    [  -2,   0,   2,   0,   0,     -11024,       0],
    [   0,   1,   2,   0,   2,       7566,     -21],
    [   0,   0,   2,   2,   1,      -6637,     -11],
    [   0,  -1,   2,   0,   2,      -7141,      21],
    [   0,   0,   0,   2,   1,      -6302,     -11],
    [   1,   0,   2,  -2,   1,       5800,      10],
    [   2,   0,   2,  -2,   2,       6443,       0],
    [  -2,   0,   0,   2,   1,      -5774,     -11],
    [   2,   0,   2,   0,   1,      -5350,       0],
    [   0,  -1,   2,  -2,   1,      -4752,     -11],
    [   0,   0,   0,  -2,   1,      -4940,     -11],
    [  -1,  -1,   0,   2,   0,       7350,       0],
    [   2,   0,   0,  -2,   1,      -4803,     -11],
    [   1,   0,   0,   2,   0,      -7677,       0],
    [   0,   1,   2,  -2,   1,       5417,       0],
    [   1,  -1,   0,   0,   0,       6624,       0],
    [  -2,   0,   2,   0,   2,      -5433,       0],
    [   3,   0,   2,   0,   2,      -4632,       0],
    [   0,  -1,   0,   2,   0,       6106,       0],
    [   1,  -1,   2,   0,   2,      -3593,       0],
    [   0,   0,   0,   1,   0,      -4766,       0],
    [  -1,  -1,   2,   2,   2,      -4095,       0],
    [  -1,   0,   2,   0,   0,       4229,       0],
    [   0,  -1,   2,   2,   2,      -3372,       0],
    [   2,   0,   0,   0,   1,      -3353,       0],
    [   1,   0,   2,   0,   0,      -3523,       0],
    [   1,   1,   0,   0,   0,      -3613,       0],
    [  -1,   0,   2,  -2,   1,       3522,       0],
    [   2,   0,   0,   0,  -1,       3312,       0],
    [   0,   0,  -2,   2,   1,      -3142,       0],
    [   0,   1,   0,   0,  -1,      -2927,       0],
    [   0,   1,   2,   0,   1,      -2887,       0],
    [   0,  -1,   2,   0,   1,       2451,       0],
    [   2,   0,  -2,   0,   0,      -2790,       0],
    [  -1,   0,   0,   2,  -1,       2145,       0],
    [   0,   0,   2,  -2,   0,       2816,       0],
    [   0,   1,   0,  -2,   0,       2700,       0],
    [   1,   0,   0,  -1,   0,      -2330,       0],
    [   0,   0,   0,   0,   2,       2283,       0],
    [   1,   0,  -2,   0,   0,      -2321,       0],
    [  -1,   0,   0,   1,   1,      -2049,       0],
];

/// Nutation in longitude Δψ, in arcseconds.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_longitude_arcsec(t: f64) -> f64 {
    let args = fundamental_arguments(t);
    let mut dpsi = 0.0_f64;
    for row in &DPSI_TERMS {
        let arg = row[0] as f64 * args[0]
            + row[1] as f64 * args[1]
            + row[2] as f64 * args[2]
            + row[3] as f64 * args[3]
            + row[4] as f64 * args[4];
        dpsi += (row[5] as f64 + row[6] as f64 * t) * arg.sin();
    }
    dpsi * 1e-7
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn amplitude_bounded() {
        for i in 0..40 {
            let t = -1.0 + i as f64 * 0.05;
            let dpsi = nutation_longitude_arcsec(t);
            assert!(dpsi.abs() < 20.0, "|Δψ({t})| = {dpsi}");
        }
    }

    #[test]
    fn meeus_example_22a() {
        // 1987 Apr 10 0h TD: Δψ = -3.788"
        let t = (2_446_895.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_longitude_arcsec(t);
        assert!((dpsi + 3.788).abs() < 0.01, "Δψ = {dpsi}");
    }

    #[test]
    fn node_argument_at_j2000() {
        let args = fundamental_arguments(0.0);
        let om_deg = args[4].to_degrees();
        assert!((om_deg - 125.044_555).abs() < 1e-4, "Ω = {om_deg}");
    }
}
