//! Geocentric ecliptic longitude of the Moon.
//!
//! Truncated ELP-2000/82 theory as tabulated in Meeus, *Astronomical
//! Algorithms* (2nd ed.), Chapter 47: the 60 largest periodic terms in
//! longitude plus the Venus, Jupiter and flattening additive terms.
//! Accuracy is about 10 arcsec in longitude.

/// Periodic terms in longitude: `[D, M, M', F, coefficient]`.
///
/// The coefficient is in units of 1e-6 degree. Terms containing the Sun's
/// mean anomaly `M` are scaled by `E` (or `E^2` when `|M| = 2`).
#[rustfmt::skip]
static LONGITUDE_TERMS: [[f64; 5]; 60] = [
    // D     M     M'    F     coefficient
    [ 0.0,  0.0,  1.0,  0.0,  6_288_774.0],
    [ 2.0,  0.0, -1.0,  0.0,  1_274_027.0],
    [ 2.0,  0.0,  0.0,  0.0,    658_314.0],
    [ 0.0,  0.0,  2.0,  0.0,    213_618.0],
    [ 0.0,  1.0,  0.0,  0.0,   -185_116.0],
    [ 0.0,  0.0,  0.0,  2.0,   -114_332.0],
    [ 2.0,  0.0, -2.0,  0.0,     58_793.0],
    [ 2.0, -1.0, -1.0,  0.0,     57_066.0],
    [ 2.0,  0.0,  1.0,  0.0,     53_322.0],
    [ 2.0, -1.0,  0.0,  0.0,     45_758.0],
    [ 0.0,  1.0, -1.0,  0.0,    -40_923.0],
    [ 1.0,  0.0,  0.0,  0.0,    -34_720.0],
    [ 0.0,  1.0,  1.0,  0.0,    -30_383.0],
    [ 2.0,  0.0,  0.0, -2.0,     15_327.0],
    [ 0.0,  0.0,  1.0,  2.0,    -12_528.0],
    [ 0.0,  0.0,  1.0, -2.0,     10_980.0],
    [ 4.0,  0.0, -1.0,  0.0,     10_675.0],
    [ 0.0,  0.0,  3.0,  0.0,     10_034.0],
    [ 4.0,  0.0, -2.0,  0.0,      8_548.0],
    [ 2.0,  1.0, -1.0,  0.0,     -7_888.0],
    [ 2.0,  1.0,  0.0,  0.0,     -6_766.0],
    [ 1.0,  0.0, -1.0,  0.0,     -5_163.0],
    [ 1.0,  1.0,  0.0,  0.0,      4_987.0],
    [ 2.0, -1.0,  1.0,  0.0,      4_036.0],
    [ 2.0,  0.0,  2.0,  0.0,      3_994.0],
    [ 4.0,  0.0,  0.0,  0.0,      3_861.0],
    [ 2.0,  0.0, -3.0,  0.0,      3_665.0],
    [ 0.0,  1.0, -2.0,  0.0,     -2_689.0],
    [ 2.0,  0.0, -1.0,  2.0,     -2_602.0],
    [ 2.0, -1.0, -2.0,  0.0,      2_390.0],
    [ 1.0,  0.0,  1.0,  0.0,     -2_348.0],
    [ 2.0, -2.0,  0.0,  0.0,      2_236.0],
    [ 0.0,  1.0,  2.0,  0.0,     -2_120.0],
    [ 0.0,  2.0,  0.0,  0.0,     -2_069.0],
    [ 2.0, -2.0, -1.0,  0.0,      2_048.0],
    [ 2.0,  0.0,  1.0, -2.0,     -1_773.0],
    [ 2.0,  0.0,  0.0,  2.0,     -1_595.0],
    [ 4.0, -1.0, -1.0,  0.0,      1_215.0],
    [ 0.0,  0.0,  2.0,  2.0,     -1_110.0],
    [ 3.0,  0.0, -1.0,  0.0,       -892.0],
    [ 2.0,  1.0,  1.0,  0.0,       -810.0],
    [ 4.0, -1.0, -2.0,  0.0,        759.0],
    [ 0.0,  2.0, -1.0,  0.0,       -713.0],
    [ 2.0,  2.0, -1.0,  0.0,       -700.0],
    [ 2.0,  1.0, -2.0,  0.0,        691.0],
    [ 2.0, -1.0,  0.0, -2.0,        596.0],
    [ 4.0,  0.0,  1.0,  0.0,        549.0],
    [ 0.0,  0.0,  4.0,  0.0,        537.0],
    [ 4.0, -1.0,  0.0,  0.0,        520.0],
    [ 1.0,  0.0, -2.0,  0.0,       -487.0],
    [ 2.0,  1.0,  0.0, -2.0,       -399.0],
    [ 0.0,  0.0,  2.0, -2.0,       -381.0],
    [ 1.0,  1.0,  1.0,  0.0,        351.0],
    [ 3.0,  0.0, -2.0,  0.0,       -340.0],
    [ 4.0,  0.0, -3.0,  0.0,        330.0],
    [ 2.0, -1.0,  2.0,  0.0,        327.0],
    [ 0.0,  2.0,  1.0,  0.0,       -323.0],
    [ 1.0,  1.0, -1.0,  0.0,        299.0],
    [ 2.0,  0.0,  3.0,  0.0,        294.0],
    [ 2.0,  0.0, -1.0, -2.0,          0.0],
];

/// Fundamental lunar arguments in degrees: `(L', D, M, M', F)`.
fn mean_elements(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let l_prime = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let m_prime = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (l_prime, d, m, m_prime, f)
}

/// Geometric ecliptic longitude of the Moon, mean equinox of date, degrees
/// in `[0, 360)`.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn moon_geometric_longitude_deg(t: f64) -> f64 {
    let (l_prime, d, m, m_prime, f) = mean_elements(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let (d_r, m_r, mp_r, f_r) = (
        d.to_radians(),
        m.to_radians(),
        m_prime.to_radians(),
        f.to_radians(),
    );

    let mut sum_l = 0.0_f64;
    for term in &LONGITUDE_TERMS {
        let angle = term[0] * d_r + term[1] * m_r + term[2] * mp_r + term[3] * f_r;
        let scale = match term[1].abs() as u8 {
            1 => e,
            2 => e * e,
            _ => 1.0,
        };
        sum_l += term[4] * scale * angle.sin();
    }

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    sum_l += 3958.0 * a1.sin()
        + 1962.0 * (l_prime - f).to_radians().sin()
        + 318.0 * a2.sin();

    (l_prime + sum_l / 1_000_000.0).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centuries(jde: f64) -> f64 {
        (jde - 2_451_545.0) / 36_525.0
    }

    #[test]
    fn meeus_example_47a() {
        // 1992 April 12, 0h TD: lambda = 133.162655 deg
        let lon = moon_geometric_longitude_deg(centuries(2_448_724.5));
        assert!((lon - 133.162_655).abs() < 1e-3, "lon = {lon}");
    }

    #[test]
    fn mean_elements_at_example_epoch() {
        let (l_prime, d, m, m_prime, f) = mean_elements(centuries(2_448_724.5));
        assert!((l_prime.rem_euclid(360.0) - 134.290_182).abs() < 1e-5);
        assert!((d.rem_euclid(360.0) - 113.842_304).abs() < 1e-5);
        assert!((m.rem_euclid(360.0) - 97.643_514).abs() < 1e-5);
        assert!((m_prime.rem_euclid(360.0) - 5.150_833).abs() < 1e-5);
        assert!((f.rem_euclid(360.0) - 219.889_721).abs() < 1e-5);
    }

    #[test]
    fn daily_motion_is_lunar() {
        // Mean daily motion ~13.18 deg; true motion stays within 11.7..15.5
        let t0 = centuries(2_460_000.5);
        for i in 0..30 {
            let a = moon_geometric_longitude_deg(t0 + i as f64 / 36_525.0);
            let b = moon_geometric_longitude_deg(t0 + (i + 1) as f64 / 36_525.0);
            let motion = (b - a).rem_euclid(360.0);
            assert!((11.5..15.5).contains(&motion), "day {i}: motion = {motion}");
        }
    }

    #[test]
    fn result_normalized() {
        for i in -50..50 {
            let lon = moon_geometric_longitude_deg(i as f64 * 0.37);
            assert!((0.0..360.0).contains(&lon));
        }
    }
}
