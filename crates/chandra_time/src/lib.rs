//! UTC instants and time-scale helpers for the chandra engine.
//!
//! This crate provides:
//! - Julian Date ↔ Gregorian calendar conversions
//! - `UtcTime`, a millisecond-precision UTC instant with ISO-8601 parsing
//! - ΔT (TT − UT) for shifting UTC instants onto the dynamical time axis

pub mod delta_t;
pub mod error;
pub mod julian;
pub mod utc_time;

pub use delta_t::{delta_t_seconds, jd_ut_to_tt};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, DAYS_PER_TROPICAL_YEAR, J2000_JD, MILLIS_PER_DAY, SECONDS_PER_DAY,
    UNIX_EPOCH_JD, calendar_to_jd, days_in_month, is_leap_year, jd_to_calendar, jd_to_centuries,
};
pub use utc_time::UtcTime;
