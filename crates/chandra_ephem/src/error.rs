//! Error types for ephemeris evaluation.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// The ephemeris source could not produce a longitude.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested instant is outside the source's validity range (or not finite).
    OutOfRange { jd: f64 },
    /// Body or operation not supported by this source.
    Unsupported(&'static str),
    /// Failure reported by a wrapped external source.
    Source(String),
}

impl Display for EphemerisError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::OutOfRange { jd } => write!(f, "instant out of ephemeris range: JD {jd}"),
            Self::Unsupported(msg) => write!(f, "unsupported: {msg}"),
            Self::Source(msg) => write!(f, "ephemeris source error: {msg}"),
        }
    }
}

impl Error for EphemerisError {}
