//! JSON bodies for `/moon`.
//!
//! Field names follow the public camelCase contract; the snapshot's own
//! snake_case serialization is used only by the CLI.

use chandra_search::{IngressSummary, Snapshot};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct MoonResponse {
    pub input: InputEcho,
    pub moon: MoonBody,
    #[serde(rename = "nextIngress")]
    pub next_ingress: NextIngressBody,
}

#[derive(Debug, Serialize)]
pub struct InputEcho {
    /// The instant actually used, normalized to UTC.
    pub iso: String,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MoonBody {
    pub sidereal_longitude_deg: f64,
    pub rashi: RashiBody,
    pub nakshatra: NakshatraBody,
    pub tithi: TithiBody,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiBody {
    pub index: u8,
    pub name: &'static str,
    pub degrees_in_sign: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraBody {
    pub index: u8,
    pub name: &'static str,
    pub pada: u8,
    pub degrees_into_nakshatra: f64,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TithiBody {
    pub number: u8,
    pub paksha: &'static str,
    pub elong_deg: f64,
}

#[derive(Debug, Serialize)]
pub struct NextIngressBody {
    pub rashi: Option<RashiIngressBody>,
    pub nakshatra: Option<NakshatraIngressBody>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RashiIngressBody {
    pub when: String,
    pub rashi_index: u32,
    pub rashi_name: &'static str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraIngressBody {
    pub when: String,
    pub nakshatra_index: u32,
    pub nakshatra_name: &'static str,
}

impl From<&IngressSummary> for RashiIngressBody {
    fn from(s: &IngressSummary) -> Self {
        Self {
            when: s.when.to_string(),
            rashi_index: s.boundary_index,
            rashi_name: s.boundary_name,
        }
    }
}

impl From<&IngressSummary> for NakshatraIngressBody {
    fn from(s: &IngressSummary) -> Self {
        Self {
            when: s.when.to_string(),
            nakshatra_index: s.boundary_index,
            nakshatra_name: s.boundary_name,
        }
    }
}

impl From<&Snapshot> for MoonResponse {
    fn from(snap: &Snapshot) -> Self {
        Self {
            input: InputEcho {
                iso: snap.instant.to_string(),
            },
            moon: MoonBody {
                sidereal_longitude_deg: snap.longitude_deg,
                rashi: RashiBody {
                    index: snap.rashi.index,
                    name: snap.rashi.name,
                    degrees_in_sign: snap.rashi.degrees_in_sign,
                },
                nakshatra: NakshatraBody {
                    index: snap.nakshatra.index,
                    name: snap.nakshatra.name,
                    pada: snap.nakshatra.pada,
                    degrees_into_nakshatra: snap.nakshatra.degrees_into,
                },
                tithi: TithiBody {
                    number: snap.tithi.number,
                    paksha: snap.tithi.paksha.name(),
                    elong_deg: snap.tithi.elongation_deg,
                },
            },
            next_ingress: NextIngressBody {
                rashi: snap.next_rashi_ingress.as_ref().map(RashiIngressBody::from),
                nakshatra: snap.next_nakshatra_ingress.as_ref().map(NakshatraIngressBody::from),
            },
        }
    }
}
