//! L4 Atomic Layer: Configuration helpers for animation timing
//!
//! Re-exports configuration from sticky-core and provides Duration accessors.

use std::time::Duration;

// Re-export config types from core
pub use sticky_core::config::{TransitionConfig, UiConfig};

/// Extension trait for UiConfig with utility methods
pub trait UiConfigExt {
    /// Get idle tick duration
    fn tick_duration(&self) -> Duration;

    /// Get tick duration for animation FPS
    fn animation_tick_duration(&self) -> Duration;

    /// Get idle time after which a wheel gesture settles
    fn settle_duration(&self) -> Duration;
}

impl UiConfigExt for UiConfig {
    #[inline]
    fn tick_duration(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }

    #[inline]
    fn animation_tick_duration(&self) -> Duration {
        if self.animation_fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / self.animation_fps as u64)
        }
    }

    #[inline]
    fn settle_duration(&self) -> Duration {
        Duration::from_millis(self.settle_ms)
    }
}
