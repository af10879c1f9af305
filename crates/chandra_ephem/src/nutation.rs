//! Nutation in longitude, low-accuracy form.
//!
//! Four-term series from Meeus, *Astronomical Algorithms* (2nd ed.),
//! Chapter 22. Good to about 0.5 arcsec.

/// Nutation in longitude Δψ in degrees.
///
/// `t` = Julian centuries of TT since J2000.0.
pub fn nutation_longitude_deg(t: f64) -> f64 {
    let omega = (125.044_52 - 1_934.136_261 * t).to_radians();
    let l_sun = (280.466_5 + 36_000.769_8 * t).to_radians();
    let l_moon = (218.316_5 + 481_267.881_3 * t).to_radians();

    let arcsec = -17.20 * omega.sin() - 1.32 * (2.0 * l_sun).sin() - 0.23 * (2.0 * l_moon).sin()
        + 0.21 * (2.0 * omega).sin();
    arcsec / 3600.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounded_amplitude() {
        for i in -100..=100 {
            let t = i as f64 * 0.01;
            let dpsi = nutation_longitude_deg(t).abs() * 3600.0;
            assert!(dpsi < 19.0, "|dpsi| = {dpsi} arcsec at T = {t}");
        }
    }

    #[test]
    fn meeus_example_47a_epoch() {
        // 1992 April 12, 0h TD: Meeus gives +16.6 arcsec (full series)
        let t = (2_448_724.5 - 2_451_545.0) / 36_525.0;
        let dpsi = nutation_longitude_deg(t) * 3600.0;
        assert!((dpsi - 16.6).abs() < 0.5, "dpsi = {dpsi}");
    }
}
