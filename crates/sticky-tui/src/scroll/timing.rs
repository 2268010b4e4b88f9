//! L4 Atomic Layer: Time calculation utilities for animations
//!
//! Provides pure functions for calculating animation progress and interpolation.

use std::time::{Duration, Instant};

/// Calculate animation progress (0.0 to 1.0) at `now`
///
/// # Arguments
/// * `start` - Animation start time
/// * `now` - Time of the frame being drawn
/// * `duration` - Total animation duration
///
/// # Returns
/// Progress value clamped to [0.0, 1.0]
#[inline]
pub fn progress_at(start: Instant, now: Instant, duration: Duration) -> f64 {
    if duration.is_zero() {
        return 1.0;
    }
    let elapsed = now.saturating_duration_since(start);
    let ratio = elapsed.as_secs_f64() / duration.as_secs_f64();
    ratio.clamp(0.0, 1.0)
}

/// Check if animation is complete at `now`
#[inline]
pub fn is_complete_at(start: Instant, now: Instant, duration: Duration) -> bool {
    now.saturating_duration_since(start) >= duration
}

/// Linear interpolation between two values
///
/// # Arguments
/// * `from` - Start value
/// * `to` - End value
/// * `t` - Interpolation factor, may leave [0.0, 1.0] for overshooting curves
///
/// # Returns
/// Interpolated value
#[inline]
pub fn lerp(from: f64, to: f64, t: f64) -> f64 {
    from + (to - from) * t
}

/// Largest row count a terminal area can hold
const MAX_ROWS: f64 = u16::MAX as f64;

/// Convert offset units to whole terminal rows, rounding toward zero
///
/// Clamped to `±u16::MAX` so tiny row sizes cannot produce absurd shifts.
#[inline]
pub fn units_to_rows(units: f64, units_per_row: f64) -> i32 {
    if units_per_row <= 0.0 || !units.is_finite() {
        return 0;
    }
    (units / units_per_row).trunc().clamp(-MAX_ROWS, MAX_ROWS) as i32
}
