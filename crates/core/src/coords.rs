//! Coordinate precision policy.
//!
//! Every coordinate the engine emits or groups by is fixed to 4 fractional
//! decimal digits. The single engine-wide policy is round-half-away-from-zero
//! (`round_coord`); the floor-based `truncate_coord` exists for callers that
//! need bucketing toward negative infinity and is deliberately a separate,
//! named function rather than an interchangeable variant.

/// Scale factor for the 4-decimal precision grid.
const PRECISION: f64 = 10_000.0;

/// Round a coordinate to 4 decimal places, halves away from zero.
///
/// Idempotent. `NaN` and infinities propagate unchanged; rejecting them is
/// the caller's job.
pub fn round_coord(value: f64) -> f64 {
    // + 0.0 collapses -0.0 to +0.0 so values straddling zero that round
    // to the same magnitude also format identically as grouping keys
    (value * PRECISION).round() / PRECISION + 0.0
}

/// Floor a coordinate to 4 decimal places (toward negative infinity).
///
/// Distinct policy from [`round_coord`]; do not mix the two on the same
/// data path.
pub fn truncate_coord(value: f64) -> f64 {
    (value * PRECISION).floor() / PRECISION
}
