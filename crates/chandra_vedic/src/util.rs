//! Shared utility functions for vedic calculations.

/// Normalize an angle to [0, 360) degrees.
///
/// Exact for input already in range. Tiny negative values fold to 0.0
/// rather than 360.0.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { (r + 360.0) % 360.0 } else { r }
}
