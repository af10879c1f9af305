//! Built-in analytic ephemeris for the Sun and Moon.

use chandra_time::{J2000_JD, jd_to_centuries, jd_ut_to_tt};

use crate::body::Body;
use crate::error::EphemerisError;
use crate::moon::moon_geometric_longitude_deg;
use crate::nutation::nutation_longitude_deg;
use crate::source::EphemerisSource;
use crate::sun::{SOLAR_ABERRATION_DEG, sun_true_longitude_deg};

/// Half-width of the supported range around J2000.0, in days (±3000 years).
const VALID_RANGE_DAYS: f64 = 3000.0 * 365.25;

/// Apparent geocentric longitudes from closed-form series.
///
/// Stateless: UTC input is shifted to TT with ΔT, the geometric longitude is
/// evaluated, then nutation (and for the Sun, annual aberration) is applied.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub const fn new() -> Self {
        Self
    }
}

fn check_range(jd_utc: f64) -> Result<(), EphemerisError> {
    if !jd_utc.is_finite() || (jd_utc - J2000_JD).abs() > VALID_RANGE_DAYS {
        return Err(EphemerisError::OutOfRange { jd: jd_utc });
    }
    Ok(())
}

impl EphemerisSource for AnalyticEphemeris {
    fn tropical_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        check_range(jd_utc)?;
        let t = jd_to_centuries(jd_ut_to_tt(jd_utc));
        let dpsi = nutation_longitude_deg(t);
        let lon = match body {
            Body::Moon => moon_geometric_longitude_deg(t) + dpsi,
            Body::Sun => sun_true_longitude_deg(t) - SOLAR_ABERRATION_DEG + dpsi,
        };
        Ok(lon.rem_euclid(360.0))
    }

    fn elongation(&self, body_a: Body, body_b: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        check_range(jd_utc)?;
        // nutation cancels in the difference
        let t = jd_to_centuries(jd_ut_to_tt(jd_utc));
        let geometric = |body: Body| match body {
            Body::Moon => moon_geometric_longitude_deg(t),
            Body::Sun => sun_true_longitude_deg(t) - SOLAR_ABERRATION_DEG,
        };
        Ok((geometric(body_a) - geometric(body_b)).rem_euclid(360.0))
    }
}
