//! L4 Atomic Layer: Pure easing functions for transition animations
//!
//! Maps progress in [0, 1] to eased progress. All curves start at 0 and end
//! at 1; `Bouncy` overshoots 1 on the way.

use std::f64::consts::PI;

// Re-export EasingType from core
pub use sticky_core::EasingType;

/// Decay rate of the bouncy envelope
const BOUNCY_DECAY: f64 = 6.0;
/// Half-oscillations of the bouncy curve over the animation
const BOUNCY_HALF_WAVES: f64 = 2.5;

/// Extension trait for EasingType with calculation methods
pub trait EasingTypeExt {
    /// Apply the easing function to a progress value
    ///
    /// # Arguments
    /// * `t` - Progress value, clamped to [0, 1]
    fn apply(&self, t: f64) -> f64;

    /// Whether the curve can leave [0, 1]
    fn overshoots(&self) -> bool;
}

impl EasingTypeExt for EasingType {
    #[inline]
    fn apply(&self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            EasingType::None => if t < 1.0 { 0.0 } else { 1.0 },
            EasingType::Linear => t,
            EasingType::Cubic => cubic_ease_out(t),
            EasingType::Quintic => quintic_ease_out(t),
            EasingType::EaseOut => exponential_ease_out(t),
            EasingType::Bouncy => bouncy(t),
        }
    }

    #[inline]
    fn overshoots(&self) -> bool {
        matches!(self, EasingType::Bouncy)
    }
}

/// Cubic ease-out: f(t) = 1 - (1-t)³
#[inline]
fn cubic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv
}

/// Quintic ease-out: f(t) = 1 - (1-t)⁵
#[inline]
fn quintic_ease_out(t: f64) -> f64 {
    let inv = 1.0 - t;
    1.0 - inv * inv * inv * inv * inv
}

/// Exponential ease-out: f(t) = 1 - 2^(-10t)
#[inline]
fn exponential_ease_out(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - 2.0_f64.powf(-10.0 * t)
    }
}

/// Underdamped spring: f(t) = 1 - e^(-6t)·cos(2.5πt), pinned to 1 at the end
#[inline]
fn bouncy(t: f64) -> f64 {
    if t >= 1.0 {
        1.0
    } else {
        1.0 - (-BOUNCY_DECAY * t).exp() * (BOUNCY_HALF_WAVES * PI * t).cos()
    }
}
