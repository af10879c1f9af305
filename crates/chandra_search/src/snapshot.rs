//! Lunar snapshot: position, classification and upcoming ingresses of the
//! Moon at one instant.

use chandra_ephem::{Body, EphemerisSource};
use chandra_time::UtcTime;
use chandra_vedic::{nakshatra_from_longitude, rashi_from_longitude, tithi_from_elongation};
use tracing::debug;

use crate::error::SearchError;
use crate::ingress::{find_next_ingress_of_kind, sidereal_longitude_at};
use crate::ingress_types::{IngressEvent, IngressKind};
use crate::snapshot_types::{
    IngressSummary, NakshatraPosition, RashiPosition, Snapshot, SnapshotConfig, TithiPosition,
};

/// Round to a fixed number of decimal places for display.
pub fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

fn summarize(event: Option<IngressEvent>, kind: IngressKind) -> Option<IngressSummary> {
    event.map(|e| IngressSummary {
        when: e.when,
        boundary_index: e.boundary_index,
        boundary_name: kind.boundary_name(e.boundary_index),
    })
}

/// Compute the Moon snapshot at `instant`.
///
/// Classification uses the unrounded longitude and elongation; only the
/// reported numbers are rounded (6 decimals for longitude and elongation, 4
/// for the offsets within a sector). Either ingress is `None` when it lies
/// beyond the search horizon.
pub fn compute_snapshot<S: EphemerisSource + ?Sized>(
    source: &S,
    config: &SnapshotConfig,
    instant: &UtcTime,
) -> Result<Snapshot, SearchError> {
    let jd = instant.to_jd_utc();
    let lon = sidereal_longitude_at(source, &config.ayanamsha, Body::Moon, jd)?;
    let elongation = source.elongation(Body::Moon, Body::Sun, jd)?;

    let rashi = rashi_from_longitude(lon);
    let nakshatra = nakshatra_from_longitude(lon);
    let tithi = tithi_from_elongation(elongation);

    let next_rashi = find_next_ingress_of_kind(
        source,
        &config.ayanamsha,
        Body::Moon,
        jd,
        IngressKind::Rashi,
        &config.ingress,
    )?;
    let next_nakshatra = find_next_ingress_of_kind(
        source,
        &config.ayanamsha,
        Body::Moon,
        jd,
        IngressKind::Nakshatra,
        &config.ingress,
    )?;

    debug!(
        %instant,
        lon,
        rashi = rashi.rashi.name(),
        nakshatra = nakshatra.nakshatra.name(),
        tithi = tithi.tithi_number,
        "snapshot computed"
    );

    Ok(Snapshot {
        instant: *instant,
        longitude_deg: round_to(lon, 6),
        rashi: RashiPosition {
            index: rashi.rashi_index,
            name: rashi.rashi.name(),
            degrees_in_sign: round_to(rashi.degrees_in_rashi, 4),
        },
        nakshatra: NakshatraPosition {
            index: nakshatra.nakshatra_index,
            name: nakshatra.nakshatra.name(),
            pada: nakshatra.pada,
            degrees_into: round_to(nakshatra.degrees_in_nakshatra, 4),
        },
        tithi: TithiPosition {
            number: tithi.tithi_number,
            paksha: tithi.paksha,
            name: tithi.name(),
            elongation_deg: round_to(tithi.elongation_deg, 6),
        },
        next_rashi_ingress: summarize(next_rashi, IngressKind::Rashi),
        next_nakshatra_ingress: summarize(next_nakshatra, IngressKind::Nakshatra),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rounding() {
        assert_eq!(round_to(281.678_233_26, 6), 281.678_233);
        assert_eq!(round_to(11.678_26, 4), 11.6783);
        assert_eq!(round_to(-0.000_04, 4), -0.0);
    }
}
