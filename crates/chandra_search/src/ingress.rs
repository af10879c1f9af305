//! Next-ingress search: when does a body's sidereal longitude next cross a
//! multiple of `step_deg`?
//!
//! Algorithm: coarse forward scan of the distance past the target boundary,
//! `d(t) = (lon(t) - boundary) mod 360`. While the body approaches the
//! boundary `d` climbs toward 360; on a forward crossing it wraps to near 0,
//! so the first pair of samples with `d` going from above 180 to below 180
//! brackets the crossing. A stationary or retrograde body only lowers `d`
//! without wrapping and never brackets. The bracket is then halved a fixed
//! number of times, keeping the upper end on the far side of the boundary
//! (`d < 180`).

use std::time::Instant;

use chandra_ephem::{Body, EphemerisSource};
use chandra_time::UtcTime;
use chandra_vedic::AyanamshaModel;
use tracing::{debug, trace};

use crate::error::SearchError;
use crate::ingress_types::{IngressConfig, IngressEvent, IngressKind, validate_step};

/// Sidereal longitude of `body` at `jd_utc`, degrees [0, 360).
pub fn sidereal_longitude_at<S: EphemerisSource + ?Sized>(
    source: &S,
    ayanamsha: &AyanamshaModel,
    body: Body,
    jd_utc: f64,
) -> Result<f64, SearchError> {
    let tropical = source.tropical_longitude(body, jd_utc)?;
    Ok(ayanamsha.sidereal_longitude(tropical, jd_utc))
}

/// First boundary strictly ahead of `lon0` on the `step_deg` grid.
///
/// May equal 360 (or slightly above) when `lon0` sits in the last sector.
fn target_boundary(lon0: f64, step_deg: f64) -> f64 {
    let next = (lon0 / step_deg).ceil() * step_deg;
    if next == lon0 { next + step_deg } else { next }
}

/// How far past `boundary` the longitude is, in [0, 360).
fn distance_past(lon: f64, boundary: f64) -> f64 {
    (lon - boundary + 3600.0).rem_euclid(360.0)
}

/// True when consecutive distances wrap forward through the boundary.
fn crossed_forward(prev_dist: f64, dist: f64) -> bool {
    prev_dist > 180.0 && dist < 180.0
}

struct Deadline {
    started: Instant,
    budget: Option<std::time::Duration>,
}

impl Deadline {
    fn start(config: &IngressConfig) -> Self {
        Self {
            started: Instant::now(),
            budget: config.deadline,
        }
    }

    fn check(&self) -> Result<(), SearchError> {
        match self.budget {
            Some(budget) if self.started.elapsed() >= budget => Err(SearchError::Timeout(budget)),
            _ => Ok(()),
        }
    }
}

/// Find the next instant after `from_jd` where `body`'s sidereal longitude
/// crosses a multiple of `step_deg`.
///
/// Returns `Ok(None)` when no crossing lies within `config.horizon_days`.
/// If the longitude at `from_jd` sits exactly on a boundary, that boundary
/// is skipped and the following one is targeted.
pub fn find_next_ingress<S: EphemerisSource + ?Sized>(
    source: &S,
    ayanamsha: &AyanamshaModel,
    body: Body,
    from_jd: f64,
    step_deg: f64,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    config.validate()?;
    validate_step(step_deg)?;
    let deadline = Deadline::start(config);

    let lon_at = |jd: f64| sidereal_longitude_at(source, ayanamsha, body, jd);

    let lon0 = lon_at(from_jd)?;
    let boundary = target_boundary(lon0, step_deg);
    debug!(%body, from_jd, lon0, boundary, step_deg, "ingress search start");

    let end_jd = from_jd + config.horizon_days;
    let mut prev_jd = from_jd;
    let mut prev_dist = distance_past(lon0, boundary);
    let mut bracket = None;

    let max_samples = (config.horizon_days / config.coarse_step_days).ceil() as u64;
    for k in 1..=max_samples {
        let jd = from_jd + k as f64 * config.coarse_step_days;
        if jd >= end_jd {
            break;
        }
        deadline.check()?;
        let dist = distance_past(lon_at(jd)?, boundary);
        if crossed_forward(prev_dist, dist) {
            bracket = Some((prev_jd, jd));
            break;
        }
        prev_jd = jd;
        prev_dist = dist;
    }

    let Some((mut lo, mut hi)) = bracket else {
        debug!(%body, from_jd, boundary, "no ingress within horizon");
        return Ok(None);
    };
    trace!(lo, hi, "ingress bracketed");

    for _ in 0..config.max_iterations {
        deadline.check()?;
        let mid = 0.5 * (lo + hi);
        if distance_past(lon_at(mid)?, boundary) < 180.0 {
            hi = mid;
        } else {
            lo = mid;
        }
    }

    let grid_size = (360.0 / step_deg).round() as i64;
    let boundary_index = ((boundary / step_deg).round() as i64).rem_euclid(grid_size.max(1)) as u32;
    let event = IngressEvent {
        when: UtcTime::from_jd_utc(hi),
        jd_utc: hi,
        boundary_index,
        boundary_deg: boundary.rem_euclid(360.0),
    };
    debug!(%body, when = %event.when, boundary_index, "ingress found");
    Ok(Some(event))
}

/// Next rashi (30 deg) ingress of `body`.
pub fn find_next_rashi_ingress<S: EphemerisSource + ?Sized>(
    source: &S,
    ayanamsha: &AyanamshaModel,
    body: Body,
    from_jd: f64,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    find_next_ingress_of_kind(source, ayanamsha, body, from_jd, IngressKind::Rashi, config)
}

/// Next nakshatra (13 deg 20') ingress of `body`.
pub fn find_next_nakshatra_ingress<S: EphemerisSource + ?Sized>(
    source: &S,
    ayanamsha: &AyanamshaModel,
    body: Body,
    from_jd: f64,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    find_next_ingress_of_kind(source, ayanamsha, body, from_jd, IngressKind::Nakshatra, config)
}

pub fn find_next_ingress_of_kind<S: EphemerisSource + ?Sized>(
    source: &S,
    ayanamsha: &AyanamshaModel,
    body: Body,
    from_jd: f64,
    kind: IngressKind,
    config: &IngressConfig,
) -> Result<Option<IngressEvent>, SearchError> {
    find_next_ingress(source, ayanamsha, body, from_jd, kind.step_deg(), config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundary_ahead_of_longitude() {
        assert_eq!(target_boundary(12.0, 30.0), 30.0);
        assert_eq!(target_boundary(359.0, 30.0), 360.0);
    }

    #[test]
    fn boundary_skipped_when_exactly_on_it() {
        assert_eq!(target_boundary(60.0, 30.0), 90.0);
        assert_eq!(target_boundary(0.0, 30.0), 30.0);
    }

    #[test]
    fn distance_wraps() {
        assert!((distance_past(29.0, 30.0) - 359.0).abs() < 1e-12);
        assert!((distance_past(31.0, 30.0) - 1.0).abs() < 1e-12);
        assert!((distance_past(0.5, 360.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn only_forward_wrap_counts_as_crossing() {
        assert!(crossed_forward(359.8, 0.3));
        assert!(!crossed_forward(346.8, 346.7));
        assert!(!crossed_forward(0.3, 359.8));
        assert!(!crossed_forward(10.0, 20.0));
    }

    #[test]
    fn deadline_disabled() {
        let cfg = IngressConfig::moon().with_deadline(None);
        assert!(Deadline::start(&cfg).check().is_ok());
    }

    #[test]
    fn zero_deadline_trips() {
        let cfg = IngressConfig::moon().with_deadline(Some(std::time::Duration::ZERO));
        assert!(matches!(
            Deadline::start(&cfg).check(),
            Err(SearchError::Timeout(_))
        ));
    }
}
