//! Synthetic linear-motion ephemeris.
//!
//! Each configured body moves at a constant rate from a reference longitude.
//! Used to exercise the search engine against exactly known crossing times.

use crate::body::Body;
use crate::error::EphemerisError;
use crate::source::EphemerisSource;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Motion {
    lon_at_epoch_deg: f64,
    rate_deg_per_day: f64,
}

/// Ephemeris where `lon(t) = lon0 + rate * (t - epoch)` for each body.
#[derive(Debug, Clone, PartialEq)]
pub struct LinearEphemeris {
    epoch_jd: f64,
    sun: Option<Motion>,
    moon: Option<Motion>,
}

impl LinearEphemeris {
    /// An ephemeris with no bodies configured.
    pub fn new(epoch_jd: f64) -> Self {
        Self {
            epoch_jd,
            sun: None,
            moon: None,
        }
    }

    /// Configure a body's longitude at the epoch and its daily motion.
    pub fn with_body(mut self, body: Body, lon_at_epoch_deg: f64, rate_deg_per_day: f64) -> Self {
        let motion = Some(Motion {
            lon_at_epoch_deg,
            rate_deg_per_day,
        });
        match body {
            Body::Sun => self.sun = motion,
            Body::Moon => self.moon = motion,
        }
        self
    }

    /// Epoch the motions are anchored to.
    pub fn epoch_jd(&self) -> f64 {
        self.epoch_jd
    }

    /// Instant after the epoch when `body` reaches `lon_deg` (mod 360) for
    /// the first time, or `None` if the body is missing or stationary.
    pub fn time_of_longitude(&self, body: Body, lon_deg: f64) -> Option<f64> {
        let motion = self.motion(body)?;
        if motion.rate_deg_per_day == 0.0 {
            return None;
        }
        let delta = if motion.rate_deg_per_day > 0.0 {
            (lon_deg - motion.lon_at_epoch_deg).rem_euclid(360.0)
        } else {
            -(motion.lon_at_epoch_deg - lon_deg).rem_euclid(360.0)
        };
        Some(self.epoch_jd + delta / motion.rate_deg_per_day)
    }

    fn motion(&self, body: Body) -> Option<Motion> {
        match body {
            Body::Sun => self.sun,
            Body::Moon => self.moon,
        }
    }
}

impl EphemerisSource for LinearEphemeris {
    fn tropical_longitude(&self, body: Body, jd_utc: f64) -> Result<f64, EphemerisError> {
        if !jd_utc.is_finite() {
            return Err(EphemerisError::OutOfRange { jd: jd_utc });
        }
        let motion = self
            .motion(body)
            .ok_or(EphemerisError::Unsupported("body not configured in linear ephemeris"))?;
        let lon =
            motion.lon_at_epoch_deg + motion.rate_deg_per_day * (jd_utc - self.epoch_jd);
        Ok(lon.rem_euclid(360.0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_motion() {
        let eph = LinearEphemeris::new(100.0).with_body(Body::Moon, 350.0, 12.0);
        let lon = eph.tropical_longitude(Body::Moon, 101.0).unwrap();
        assert!((lon - 2.0).abs() < 1e-9);
    }

    #[test]
    fn missing_body_is_unsupported() {
        let eph = LinearEphemeris::new(0.0).with_body(Body::Moon, 0.0, 13.0);
        assert!(matches!(
            eph.tropical_longitude(Body::Sun, 0.0),
            Err(EphemerisError::Unsupported(_))
        ));
    }

    #[test]
    fn time_of_longitude_wraps() {
        let eph = LinearEphemeris::new(10.0).with_body(Body::Moon, 359.0, 2.0);
        let jd = eph.time_of_longitude(Body::Moon, 0.0).unwrap();
        assert!((jd - 10.5).abs() < 1e-12);
    }

    #[test]
    fn elongation_default_method() {
        let eph = LinearEphemeris::new(0.0)
            .with_body(Body::Moon, 10.0, 13.0)
            .with_body(Body::Sun, 350.0, 1.0);
        let e = eph.elongation(Body::Moon, Body::Sun, 0.0).unwrap();
        assert!((e - 20.0).abs() < 1e-9);
    }
}
