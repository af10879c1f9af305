//! The ephemeris capability consumed by the sidereal engine.

use std::sync::Arc;

use crate::body::Body;
use crate::error::EphemerisError;

/// A source of geocentric apparent tropical ecliptic longitudes.
///
/// Implementations must be safe to call concurrently; every call is an
/// independent read. Instants are Julian Dates on the UTC axis.
pub trait EphemerisSource: Send + Sync {
    /// Apparent tropical ecliptic longitude of date, in degrees.
    fn tropical_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError>;

    /// Apparent ecliptic separation `lon(a) - lon(b)` in `[0, 360)`.
    fn elongation(&self, body_a: Body, body_b: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        let a = self.tropical_longitude(body_a, jd_utc)?;
        let b = self.tropical_longitude(body_b, jd_utc)?;
        Ok((a - b).rem_euclid(360.0))
    }
}

impl<S: EphemerisSource + ?Sized> EphemerisSource for &S {
    fn tropical_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(body, jd_utc)
    }

    fn elongation(&self, body_a: Body, body_b: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        (**self).elongation(body_a, body_b, jd_utc)
    }
}

impl<S: EphemerisSource + ?Sized> EphemerisSource for Arc<S> {
    fn tropical_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        (**self).tropical_longitude(body, jd_utc)
    }

    fn elongation(&self, body_a: Body, body_b: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        (**self).elongation(body_a, body_b, jd_utc)
    }
}
