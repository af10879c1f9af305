//! Types for the lunar snapshot.

use chandra_time::UtcTime;
use chandra_vedic::{AyanamshaModel, Paksha};
use serde::{Serialize, Serializer};

use crate::ingress_types::IngressConfig;

fn serialize_instant<S: Serializer>(t: &UtcTime, s: S) -> Result<S::Ok, S::Error> {
    s.collect_str(t)
}

fn serialize_paksha<S: Serializer>(p: &Paksha, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(p.name())
}

/// Configuration for [`compute_snapshot`](crate::compute_snapshot).
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SnapshotConfig {
    pub ayanamsha: AyanamshaModel,
    pub ingress: IngressConfig,
}

/// Moon's rashi at the snapshot instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiPosition {
    pub index: u8,
    pub name: &'static str,
    /// Degrees into the sign, rounded to 4 decimals.
    pub degrees_in_sign: f64,
}

/// Moon's nakshatra at the snapshot instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraPosition {
    pub index: u8,
    pub name: &'static str,
    pub pada: u8,
    /// Degrees into the nakshatra, rounded to 4 decimals.
    pub degrees_into: f64,
}

/// Tithi at the snapshot instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TithiPosition {
    /// 1-30.
    pub number: u8,
    #[serde(serialize_with = "serialize_paksha")]
    pub paksha: Paksha,
    pub name: &'static str,
    /// Moon–Sun elongation, rounded to 6 decimals.
    pub elongation_deg: f64,
}

/// Upcoming boundary crossing, labelled with the sector being entered.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct IngressSummary {
    #[serde(serialize_with = "serialize_instant")]
    pub when: UtcTime,
    pub boundary_index: u32,
    pub boundary_name: &'static str,
}

/// Complete lunar position report for one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Snapshot {
    #[serde(serialize_with = "serialize_instant")]
    pub instant: UtcTime,
    /// Sidereal Moon longitude, rounded to 6 decimals.
    pub longitude_deg: f64,
    pub rashi: RashiPosition,
    pub nakshatra: NakshatraPosition,
    pub tithi: TithiPosition,
    pub next_rashi_ingress: Option<IngressSummary>,
    pub next_nakshatra_ingress: Option<IngressSummary>,
}
