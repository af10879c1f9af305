//! Geocentric ecliptic longitude of the Sun.
//!
//! Low-accuracy solar theory from Meeus, *Astronomical Algorithms*
//! (2nd ed.), Chapter 25: mean longitude plus the equation of the centre.
//! Accuracy is about 0.01 deg.

/// Constant of annual aberration applied to the Sun's longitude, degrees.
pub const SOLAR_ABERRATION_DEG: f64 = 0.005_69;

/// True geometric longitude of the Sun, mean equinox of date, degrees in
/// `[0, 360)`.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn sun_true_longitude_deg(t: f64) -> f64 {
    let l0 = 280.466_46 + 36_000.769_83 * t + 0.000_303_2 * t * t;
    let m = (357.529_11 + 35_999.050_29 * t - 0.000_153_7 * t * t).to_radians();
    let c = (1.914_602 - 0.004_817 * t - 0.000_014 * t * t) * m.sin()
        + (0.019_993 - 0.000_101 * t) * (2.0 * m).sin()
        + 0.000_289 * (3.0 * m).sin();
    (l0 + c).rem_euclid(360.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meeus_example_25a() {
        // 1992 October 13.0 TD: true longitude 199.90988 deg
        let t = (2_448_908.5 - 2_451_545.0) / 36_525.0;
        let lon = sun_true_longitude_deg(t);
        assert!((lon - 199.909_88).abs() < 1e-4, "lon = {lon}");
    }

    #[test]
    fn near_vernal_equinox_in_march() {
        // 2024 March 20, 03:06 UT: equinox, longitude ~0
        let t = (2_460_389.63 - 2_451_545.0) / 36_525.0;
        let lon = sun_true_longitude_deg(t);
        let off = if lon > 180.0 { lon - 360.0 } else { lon };
        assert!(off.abs() < 0.05, "lon = {lon}");
    }
}
