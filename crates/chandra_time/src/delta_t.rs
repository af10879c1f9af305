//! ΔT = TT − UT, the offset between uniform and rotational time.
//!
//! Piecewise polynomials of Espenak & Meeus (NASA Five Millennium Canon,
//! 2006). Accuracy is a few seconds across the modern era, which keeps the
//! Moon's position error from ΔT well below 0.001 deg.

use crate::julian::{J2000_JD, SECONDS_PER_DAY};

/// Decimal year for a Julian Date (UT axis).
fn decimal_year(jd_ut: f64) -> f64 {
    2000.0 + (jd_ut - J2000_JD) / 365.25
}

/// ΔT in seconds for a Julian Date on the UT axis.
pub fn delta_t_seconds(jd_ut: f64) -> f64 {
    let y = decimal_year(jd_ut);
    let long_term = |y: f64| {
        let u = (y - 1820.0) / 100.0;
        -20.0 + 32.0 * u * u
    };

    if y < -500.0 {
        long_term(y)
    } else if y < 500.0 {
        let u = y / 100.0;
        10583.6 - 1014.41 * u + 33.78311 * u.powi(2) - 5.952053 * u.powi(3)
            - 0.1798452 * u.powi(4)
            + 0.022174192 * u.powi(5)
            + 0.0090316521 * u.powi(6)
    } else if y < 1600.0 {
        let u = (y - 1000.0) / 100.0;
        1574.2 - 556.01 * u + 71.23472 * u.powi(2) + 0.319781 * u.powi(3)
            - 0.8503463 * u.powi(4)
            - 0.005050998 * u.powi(5)
            + 0.0083572073 * u.powi(6)
    } else if y < 1700.0 {
        let t = y - 1600.0;
        120.0 - 0.9808 * t - 0.01532 * t.powi(2) + t.powi(3) / 7129.0
    } else if y < 1800.0 {
        let t = y - 1700.0;
        8.83 + 0.1603 * t - 0.0059285 * t.powi(2) + 0.00013336 * t.powi(3)
            - t.powi(4) / 1_174_000.0
    } else if y < 1860.0 {
        let t = y - 1800.0;
        13.72 - 0.332447 * t + 0.0068612 * t.powi(2) + 0.0041116 * t.powi(3)
            - 0.00037436 * t.powi(4)
            + 0.0000121272 * t.powi(5)
            - 0.0000001699 * t.powi(6)
            + 0.000000000875 * t.powi(7)
    } else if y < 1900.0 {
        let t = y - 1860.0;
        7.62 + 0.5737 * t - 0.251754 * t.powi(2) + 0.01680668 * t.powi(3)
            - 0.0004473624 * t.powi(4)
            + t.powi(5) / 233_174.0
    } else if y < 1920.0 {
        let t = y - 1900.0;
        -2.79 + 1.494119 * t - 0.0598939 * t.powi(2) + 0.0061966 * t.powi(3)
            - 0.000197 * t.powi(4)
    } else if y < 1941.0 {
        let t = y - 1920.0;
        21.20 + 0.84493 * t - 0.076100 * t.powi(2) + 0.0020936 * t.powi(3)
    } else if y < 1961.0 {
        let t = y - 1950.0;
        29.07 + 0.407 * t - t.powi(2) / 233.0 + t.powi(3) / 2547.0
    } else if y < 1986.0 {
        let t = y - 1975.0;
        45.45 + 1.067 * t - t.powi(2) / 260.0 - t.powi(3) / 718.0
    } else if y < 2005.0 {
        let t = y - 2000.0;
        63.86 + 0.3345 * t - 0.060374 * t.powi(2)
            + 0.0017275 * t.powi(3)
            + 0.000651814 * t.powi(4)
            + 0.00002373599 * t.powi(5)
    } else if y < 2050.0 {
        let t = y - 2000.0;
        62.92 + 0.32217 * t + 0.005589 * t.powi(2)
    } else if y < 2150.0 {
        long_term(y) - 0.5628 * (2150.0 - y)
    } else {
        long_term(y)
    }
}

/// Shift a UT Julian Date onto the TT axis.
pub fn jd_ut_to_tt(jd_ut: f64) -> f64 {
    jd_ut + delta_t_seconds(jd_ut) / SECONDS_PER_DAY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::julian::calendar_to_jd;

    #[test]
    fn delta_t_2000() {
        let dt = delta_t_seconds(J2000_JD);
        assert!((dt - 63.86).abs() < 0.1, "dt = {dt}");
    }

    #[test]
    fn delta_t_2025() {
        // Observed ~69 s; the 2005-2050 polynomial gives ~74 s.
        let dt = delta_t_seconds(calendar_to_jd(2025, 1, 1.0));
        assert!((60.0..80.0).contains(&dt), "dt = {dt}");
    }

    #[test]
    fn delta_t_1900() {
        let dt = delta_t_seconds(calendar_to_jd(1900, 1, 1.0));
        assert!((dt + 2.79).abs() < 0.5, "dt = {dt}");
    }

    #[test]
    fn continuous_across_2005() {
        let before = delta_t_seconds(calendar_to_jd(2004, 12, 31.9));
        let after = delta_t_seconds(calendar_to_jd(2005, 1, 1.1));
        assert!((after - before).abs() < 1.0);
    }

    #[test]
    fn large_in_antiquity() {
        assert!(delta_t_seconds(calendar_to_jd(-1000, 1, 1.0)) > 20_000.0);
    }

    #[test]
    fn tt_is_ahead_of_ut() {
        let jd = calendar_to_jd(2025, 8, 8.5);
        let tt = jd_ut_to_tt(jd);
        assert!(tt > jd);
        assert!((tt - jd) * SECONDS_PER_DAY < 100.0);
    }
}
