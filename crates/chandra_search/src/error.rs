//! Error types for ingress search and snapshot assembly.

use std::error::Error;
use std::fmt::{Display, Formatter};
use std::time::Duration;

use chandra_ephem::EphemerisError;

/// Errors from search operations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SearchError {
    /// The ephemeris source failed at some sample point.
    Ephemeris(EphemerisError),
    /// Search parameters are unusable.
    InvalidConfig(&'static str),
    /// The wall-clock deadline elapsed before the search finished.
    Timeout(Duration),
}

impl Display for SearchError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ephemeris(e) => write!(f, "ephemeris error: {e}"),
            Self::InvalidConfig(msg) => write!(f, "invalid config: {msg}"),
            Self::Timeout(d) => write!(f, "search exceeded deadline of {} ms", d.as_millis()),
        }
    }
}

impl Error for SearchError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Ephemeris(e) => Some(e),
            _ => None,
        }
    }
}

impl From<EphemerisError> for SearchError {
    fn from(e: EphemerisError) -> Self {
        Self::Ephemeris(e)
    }
}
