//! Error types for Vedic calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from Vedic base lookups.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum VedicError {
    /// Name or code does not match any known ayanamsha system.
    UnknownAyanamsha(String),
}

impl Display for VedicError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownAyanamsha(name) => write!(f, "unknown ayanamsha system: {name}"),
        }
    }
}

impl Error for VedicError {}
