//! Ingress search and snapshot assembly for the chandra engine.
//!
//! This crate provides:
//! - Next-ingress search (coarse scan + bisection) over any boundary grid
//! - Rashi and nakshatra ingress conveniences for the Moon
//! - The lunar snapshot: sidereal longitude, rashi, nakshatra, tithi and
//!   the next ingresses at one instant
//!
//! Everything is generic over [`chandra_ephem::EphemerisSource`].

pub mod error;
pub mod ingress;
pub mod ingress_types;
pub mod snapshot;
pub mod snapshot_types;

pub use error::SearchError;
pub use ingress::{
    find_next_ingress, find_next_ingress_of_kind, find_next_nakshatra_ingress,
    find_next_rashi_ingress, sidereal_longitude_at,
};
pub use ingress_types::{IngressConfig, IngressEvent, IngressKind};
pub use snapshot::{compute_snapshot, round_to};
pub use snapshot_types::{
    IngressSummary, NakshatraPosition, RashiPosition, Snapshot, SnapshotConfig, TithiPosition,
};
