//! Linear ayanamsha model.
//!
//! The ayanamsha is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and a sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsha increases over time.
//!
//! Each system is defined by its J2000.0 reference value. The ayanamsha at
//! any epoch is that reference plus a constant precession rate times the
//! tropical years elapsed since J2000.0:
//!
//! `ayanamsha(jd) = base + rate * (jd - J2000) / 365.24219`
//!
//! The linear form is accurate to a few arcseconds within a few centuries of
//! J2000; both parameters are tunable through [`AyanamshaModel`].

use std::str::FromStr;

use chandra_time::{DAYS_PER_TROPICAL_YEAR, J2000_JD};

use crate::error::VedicError;
use crate::util::normalize_360;

/// General precession in longitude, arcseconds per tropical year.
pub const GENERAL_PRECESSION_ARCSEC_PER_YEAR: f64 = 50.2879;

/// Sidereal reference systems supported by the linear model.
///
/// The differences reduce to a single parameter: the ayanamsha value at
/// J2000.0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AyanamshaSystem {
    /// Lahiri (Chitrapaksha): Spica at 0 Libra sidereal.
    /// Indian government standard (Calendar Reform Committee, 1957).
    #[default]
    Lahiri,

    /// Krishnamurti Paddhati (KP): minimal offset from Lahiri.
    Krishnamurti,

    /// B.V. Raman: from "Hindu Predictive Astrology".
    Raman,

    /// Fagan-Bradley: primary Western sidereal system.
    FaganBradley,

    /// Sri Yukteshwar: from "The Holy Science" (1894).
    Yukteshwar,
}

/// All supported systems in enum order.
pub const ALL_SYSTEMS: [AyanamshaSystem; 5] = [
    AyanamshaSystem::Lahiri,
    AyanamshaSystem::Krishnamurti,
    AyanamshaSystem::Raman,
    AyanamshaSystem::FaganBradley,
    AyanamshaSystem::Yukteshwar,
];

impl AyanamshaSystem {
    /// Reference ayanamsha at J2000.0 in degrees.
    pub const fn reference_j2000_deg(self) -> f64 {
        match self {
            Self::Lahiri => 23.853,
            Self::Krishnamurti => 23.850,
            Self::Raman => 22.370,
            Self::FaganBradley => 24.736,
            Self::Yukteshwar => 22.376,
        }
    }

    /// Display name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Lahiri => "Lahiri",
            Self::Krishnamurti => "Krishnamurti",
            Self::Raman => "Raman",
            Self::FaganBradley => "Fagan-Bradley",
            Self::Yukteshwar => "Yukteshwar",
        }
    }

    /// Short lowercase code accepted by [`FromStr`] and used in configuration.
    pub const fn code(self) -> &'static str {
        match self {
            Self::Lahiri => "lahiri",
            Self::Krishnamurti => "kp",
            Self::Raman => "raman",
            Self::FaganBradley => "fagan-bradley",
            Self::Yukteshwar => "yukteshwar",
        }
    }

    pub const fn all() -> &'static [AyanamshaSystem] {
        &ALL_SYSTEMS
    }
}

impl std::fmt::Display for AyanamshaSystem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for AyanamshaSystem {
    type Err = VedicError;

    /// Case-insensitive; `_`, `-` and spaces are interchangeable.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '-' | '_' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "lahiri" | "chitrapaksha" => Ok(Self::Lahiri),
            "kp" | "krishnamurti" => Ok(Self::Krishnamurti),
            "raman" => Ok(Self::Raman),
            "faganbradley" | "fagan" | "fb" => Ok(Self::FaganBradley),
            "yukteshwar" | "sriyukteshwar" => Ok(Self::Yukteshwar),
            _ => Err(VedicError::UnknownAyanamsha(s.to_string())),
        }
    }
}

/// Linear ayanamsha: `base_deg` at J2000.0, drifting `rate_arcsec_per_year`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AyanamshaModel {
    /// Ayanamsha at J2000.0 in degrees.
    pub base_deg: f64,
    /// Precession rate in arcseconds per tropical year.
    pub rate_arcsec_per_year: f64,
}

impl AyanamshaModel {
    pub const fn new(base_deg: f64, rate_arcsec_per_year: f64) -> Self {
        Self {
            base_deg,
            rate_arcsec_per_year,
        }
    }

    /// Model for a named system at the general precession rate.
    pub const fn from_system(system: AyanamshaSystem) -> Self {
        Self::new(
            system.reference_j2000_deg(),
            GENERAL_PRECESSION_ARCSEC_PER_YEAR,
        )
    }

    /// Rate in degrees per tropical year.
    pub fn rate_deg_per_year(&self) -> f64 {
        self.rate_arcsec_per_year / 3600.0
    }

    /// Ayanamsha in degrees at `jd` (not normalized; negative before the
    /// system's zero year).
    pub fn ayanamsha_deg(&self, jd: f64) -> f64 {
        let years = (jd - J2000_JD) / DAYS_PER_TROPICAL_YEAR;
        self.base_deg + self.rate_deg_per_year() * years
    }

    /// Sidereal longitude in [0, 360) for a tropical longitude at `jd`.
    pub fn sidereal_longitude(&self, tropical_deg: f64, jd: f64) -> f64 {
        normalize_360(tropical_deg - self.ayanamsha_deg(jd))
    }
}

impl Default for AyanamshaModel {
    fn default() -> Self {
        Self::from_system(AyanamshaSystem::Lahiri)
    }
}

impl From<AyanamshaSystem> for AyanamshaModel {
    fn from(system: AyanamshaSystem) -> Self {
        Self::from_system(system)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lahiri_at_j2000() {
        let m = AyanamshaModel::default();
        assert!((m.ayanamsha_deg(J2000_JD) - 23.853).abs() < 1e-15);
    }

    #[test]
    fn precession_forward() {
        let m = AyanamshaModel::default();
        let diff = m.ayanamsha_deg(J2000_JD + 100.0 * DAYS_PER_TROPICAL_YEAR)
            - m.ayanamsha_deg(J2000_JD);
        // 50.2879"/yr = 1.39689 deg/century
        assert!((diff - 1.396_886).abs() < 1e-5, "one century drift = {diff}");
    }

    #[test]
    fn precession_backward() {
        let m = AyanamshaModel::default();
        assert!(m.ayanamsha_deg(J2000_JD - 3650.0) < m.ayanamsha_deg(J2000_JD));
    }

    #[test]
    fn lahiri_in_2025() {
        // 2025-08-08T12:00Z, about 24.21 deg
        let aya = AyanamshaModel::default().ayanamsha_deg(2_460_896.0);
        assert!((aya - 24.2106).abs() < 1e-3, "aya = {aya}");
    }

    #[test]
    fn sidereal_wraps_below_zero() {
        let m = AyanamshaModel::default();
        let lon = m.sidereal_longitude(10.0, J2000_JD);
        assert!((lon - (360.0 + 10.0 - 23.853)).abs() < 1e-10, "lon = {lon}");
    }

    #[test]
    fn sidereal_always_normalized() {
        let m = AyanamshaModel::new(23.853, 50.2879);
        for i in -20..20 {
            let lon = m.sidereal_longitude(i as f64 * 47.3, J2000_JD + i as f64 * 1000.0);
            assert!((0.0..360.0).contains(&lon), "lon = {lon}");
        }
    }

    #[test]
    fn zero_rate_is_constant() {
        let m = AyanamshaModel::new(20.0, 0.0);
        assert_eq!(m.ayanamsha_deg(0.0), 20.0);
        assert_eq!(m.ayanamsha_deg(3_000_000.0), 20.0);
    }

    #[test]
    fn parse_names_and_codes() {
        assert_eq!("lahiri".parse(), Ok(AyanamshaSystem::Lahiri));
        assert_eq!("Chitrapaksha".parse(), Ok(AyanamshaSystem::Lahiri));
        assert_eq!("KP".parse(), Ok(AyanamshaSystem::Krishnamurti));
        assert_eq!("fagan_bradley".parse(), Ok(AyanamshaSystem::FaganBradley));
        assert_eq!("Fagan-Bradley".parse(), Ok(AyanamshaSystem::FaganBradley));
        assert_eq!(" raman ".parse(), Ok(AyanamshaSystem::Raman));
        assert!(matches!(
            "tropical".parse::<AyanamshaSystem>(),
            Err(VedicError::UnknownAyanamsha(_))
        ));
    }

    #[test]
    fn codes_round_trip() {
        for &sys in AyanamshaSystem::all() {
            assert_eq!(sys.code().parse::<AyanamshaSystem>(), Ok(sys));
            assert_eq!(sys.name().parse::<AyanamshaSystem>(), Ok(sys));
        }
    }

    #[test]
    fn all_references_in_range() {
        for &sys in AyanamshaSystem::all() {
            let val = sys.reference_j2000_deg();
            assert!((19.0..=28.0).contains(&val), "{sys:?} reference = {val}");
        }
    }
}
