//! Tithi (lunar day) from Moon–Sun elongation.
//!
//! The elongation circle is divided into 30 tithis of 12 degrees. Tithis
//! 1-15 form the waxing fortnight (Shukla paksha, ending at Purnima) and
//! 16-30 the waning fortnight (Krishna paksha, ending at Amavasya).

use crate::util::normalize_360;

/// Span of one tithi in degrees of elongation.
pub const TITHI_SPAN: f64 = 12.0;

/// Lunar fortnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Paksha {
    /// Waxing half, tithis 1-15.
    Shukla,
    /// Waning half, tithis 16-30.
    Krishna,
}

impl Paksha {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Shukla => "Shukla",
            Self::Krishna => "Krishna",
        }
    }
}

impl std::fmt::Display for Paksha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Names of tithis 1-14 within either paksha.
const TITHI_NAMES: [&str; 14] = [
    "Pratipada",
    "Dwitiya",
    "Tritiya",
    "Chaturthi",
    "Panchami",
    "Shashthi",
    "Saptami",
    "Ashtami",
    "Navami",
    "Dashami",
    "Ekadashi",
    "Dwadashi",
    "Trayodashi",
    "Chaturdashi",
];

/// Tithi classification of an elongation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TithiInfo {
    /// 1-based tithi number (1-30).
    pub tithi_number: u8,
    /// 1-based number within the paksha (1-15).
    pub tithi_in_paksha: u8,
    pub paksha: Paksha,
    /// Normalized elongation in degrees [0, 360).
    pub elongation_deg: f64,
}

impl TithiInfo {
    /// Traditional name: Pratipada..Chaturdashi, then Purnima or Amavasya.
    pub fn name(&self) -> &'static str {
        match (self.tithi_in_paksha, self.paksha) {
            (15, Paksha::Shukla) => "Purnima",
            (15, Paksha::Krishna) => "Amavasya",
            (n, _) => TITHI_NAMES[(n.clamp(1, 14) - 1) as usize],
        }
    }

    /// Degrees of elongation already elapsed in this tithi [0, 12).
    pub fn degrees_in_tithi(&self) -> f64 {
        self.elongation_deg - (self.tithi_number - 1) as f64 * TITHI_SPAN
    }
}

/// Classify a Moon–Sun elongation (degrees, any range) into a tithi.
pub fn tithi_from_elongation(elongation_deg: f64) -> TithiInfo {
    let elong = normalize_360(elongation_deg);
    let idx = ((elong / TITHI_SPAN).floor() as u8).min(29);
    let tithi_number = idx + 1;
    let paksha = if tithi_number <= 15 {
        Paksha::Shukla
    } else {
        Paksha::Krishna
    };
    TithiInfo {
        tithi_number,
        tithi_in_paksha: idx % 15 + 1,
        paksha,
        elongation_deg: elong,
    }
}
