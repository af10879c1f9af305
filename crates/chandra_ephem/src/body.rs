//! Bodies supported by the ephemeris contract.

use std::str::FromStr;

use crate::error::EphemerisError;

/// Bodies an [`EphemerisSource`](crate::EphemerisSource) can be asked about.
///
/// The public contract covers the Moon; the Sun is needed for the Moon–Sun
/// elongation behind tithi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Body {
    Sun,
    Moon,
}

/// All bodies in index order.
pub const ALL_BODIES: [Body; 2] = [Body::Sun, Body::Moon];

impl Body {
    /// English name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Sun => "Sun",
            Self::Moon => "Moon",
        }
    }

    /// Sanskrit graha name.
    pub const fn graha_name(self) -> &'static str {
        match self {
            Self::Sun => "Surya",
            Self::Moon => "Chandra",
        }
    }

    pub const fn all() -> &'static [Body; 2] {
        &ALL_BODIES
    }
}

impl std::fmt::Display for Body {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Body {
    type Err = EphemerisError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ALL_BODIES
            .iter()
            .copied()
            .find(|b| s.eq_ignore_ascii_case(b.name()) || s.eq_ignore_ascii_case(b.graha_name()))
            .ok_or(EphemerisError::Unsupported("unknown body name"))
    }
}
