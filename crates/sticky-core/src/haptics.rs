//! Haptic feedback capability
//!
//! Hosts pick an implementation at startup; platforms without any feedback
//! channel fall back to [`NoopHaptics`].

use std::fmt;

use serde::{Deserialize, Serialize};

/// Provider of a short tactile (or audible) tick
pub trait HapticFeedback {
    /// Emit one feedback pulse. Failures are swallowed by the implementation.
    fn generate_feedback(&self);
}

/// Feedback provider that does nothing
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopHaptics;

impl HapticFeedback for NoopHaptics {
    fn generate_feedback(&self) {}
}

/// Which feedback provider the host should install
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HapticsMode {
    /// Use the best provider the environment supports
    #[default]
    Auto,
    /// Always use the terminal bell
    Bell,
    /// Disable feedback
    Off,
}

impl fmt::Display for HapticsMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HapticsMode::Auto => write!(f, "auto"),
            HapticsMode::Bell => write!(f, "bell"),
            HapticsMode::Off => write!(f, "off"),
        }
    }
}
