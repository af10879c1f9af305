//! Types for next-ingress search.

use std::str::FromStr;
use std::time::Duration;

use chandra_time::UtcTime;
use chandra_vedic::{NAKSHATRA_SPAN, Nakshatra, RASHI_SPAN, Rashi};

use crate::error::SearchError;

/// Minutes per day, for the coarse-step conversion.
const MINUTES_PER_DAY: f64 = 1440.0;

/// Which boundary grid an ingress search walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum IngressKind {
    /// 12 boundaries every 30 deg.
    Rashi,
    /// 27 boundaries every 13 deg 20'.
    Nakshatra,
}

impl IngressKind {
    /// Grid step in degrees.
    pub fn step_deg(self) -> f64 {
        match self {
            Self::Rashi => RASHI_SPAN,
            Self::Nakshatra => NAKSHATRA_SPAN,
        }
    }

    /// Name of the sector that begins at `boundary_index`.
    pub const fn boundary_name(self, boundary_index: u32) -> &'static str {
        match self {
            Self::Rashi => Rashi::from_index((boundary_index % 12) as u8).name(),
            Self::Nakshatra => Nakshatra::from_index((boundary_index % 27) as u8).name(),
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Rashi => "rashi",
            Self::Nakshatra => "nakshatra",
        }
    }
}

impl std::fmt::Display for IngressKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for IngressKind {
    type Err = SearchError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rashi" | "sign" => Ok(Self::Rashi),
            "nakshatra" | "mansion" => Ok(Self::Nakshatra),
            _ => Err(SearchError::InvalidConfig("ingress kind must be rashi or nakshatra")),
        }
    }
}

/// Configuration for the coarse-scan + bisection ingress search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressConfig {
    /// Coarse scan step in days (default 30 minutes).
    pub coarse_step_days: f64,
    /// How far ahead to scan in days (default 3).
    pub horizon_days: f64,
    /// Bisection halvings after bracketing (default 24).
    pub max_iterations: u32,
    /// Wall-clock budget for one search. `None` disables the check.
    pub deadline: Option<Duration>,
}

impl IngressConfig {
    /// Defaults tuned for the Moon: 30-minute steps over 3 days, 24
    /// halvings, 2 s deadline.
    pub fn moon() -> Self {
        Self {
            coarse_step_days: 30.0 / MINUTES_PER_DAY,
            horizon_days: 3.0,
            max_iterations: 24,
            deadline: Some(Duration::from_secs(2)),
        }
    }

    pub fn with_deadline(mut self, deadline: Option<Duration>) -> Self {
        self.deadline = deadline;
        self
    }

    pub fn with_coarse_step_minutes(mut self, minutes: f64) -> Self {
        self.coarse_step_days = minutes / MINUTES_PER_DAY;
        self
    }

    pub fn with_horizon_days(mut self, days: f64) -> Self {
        self.horizon_days = days;
        self
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), SearchError> {
        if !self.coarse_step_days.is_finite() || self.coarse_step_days <= 0.0 {
            return Err(SearchError::InvalidConfig("coarse_step_days must be positive"));
        }
        if !self.horizon_days.is_finite() || self.horizon_days <= 0.0 {
            return Err(SearchError::InvalidConfig("horizon_days must be positive"));
        }
        if self.max_iterations == 0 {
            return Err(SearchError::InvalidConfig("max_iterations must be > 0"));
        }
        Ok(())
    }
}

impl Default for IngressConfig {
    fn default() -> Self {
        Self::moon()
    }
}

/// Reject boundary grids the search cannot index.
pub(crate) fn validate_step(step_deg: f64) -> Result<(), SearchError> {
    if !step_deg.is_finite() || step_deg <= 0.0 || step_deg > 360.0 {
        return Err(SearchError::InvalidConfig("step_deg must be in (0, 360]"));
    }
    Ok(())
}

/// A boundary crossing found by the search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IngressEvent {
    /// Crossing instant, millisecond resolution.
    pub when: UtcTime,
    /// Crossing instant as a UTC Julian Date (unrounded).
    pub jd_utc: f64,
    /// 0-based index of the boundary on the grid.
    pub boundary_index: u32,
    /// Boundary longitude in degrees [0, 360).
    pub boundary_deg: f64,
}
