//! Ephemeris seam for the chandra engine.
//!
//! The sidereal engine only ever asks one question: where, in apparent
//! tropical ecliptic longitude, is a body at an instant? This crate defines
//! that capability ([`EphemerisSource`]) and ships two implementations:
//!
//! - [`AnalyticEphemeris`]: closed-form Sun and Moon series (Meeus), good to
//!   about 10 arcsec for the Moon near the present era
//! - [`LinearEphemeris`]: synthetic constant-rate motion for testing

pub mod analytic;
pub mod body;
pub mod error;
pub mod linear;
pub mod moon;
pub mod nutation;
pub mod source;
pub mod sun;

pub use analytic::AnalyticEphemeris;
pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use linear::LinearEphemeris;
pub use moon::moon_geometric_longitude_deg;
pub use nutation::nutation_longitude_deg;
pub use source::EphemerisSource;
pub use sun::sun_true_longitude_deg;
