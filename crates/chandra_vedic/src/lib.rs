//! Vedic sidereal primitives for the chandra engine.
//!
//! This crate provides:
//! - A tunable linear ayanamsha model and the common sidereal systems
//! - Rashi (12 x 30 deg) lookup with DMS rendering
//! - Nakshatra (27 x 13 deg 20') and pada lookup
//! - Tithi (30 x 12 deg of Moon–Sun elongation) and paksha
//!
//! All classifiers are pure functions of a longitude in degrees.

pub mod ayanamsha;
pub mod error;
pub mod nakshatra;
pub mod rashi;
pub mod tithi;
pub mod util;

pub use ayanamsha::{
    ALL_SYSTEMS, AyanamshaModel, AyanamshaSystem, GENERAL_PRECESSION_ARCSEC_PER_YEAR,
};
pub use error::VedicError;
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN, Nakshatra, NakshatraInfo, PADA_SPAN, nakshatra_from_longitude,
    nakshatra_from_tropical,
};
pub use rashi::{
    ALL_RASHIS, Dms, RASHI_SPAN, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude,
    rashi_from_tropical,
};
pub use tithi::{Paksha, TITHI_SPAN, TithiInfo, tithi_from_elongation};
pub use util::normalize_360;
