//! Feedback providers available in a terminal
//!
//! Terminals have no vibration motor, so the closest thing to a haptic tick
//! is the bell. Selection happens once at startup.

use std::io::{self, IsTerminal, Write};
use std::rc::Rc;

use sticky_core::{HapticFeedback, HapticsMode, NoopHaptics};

/// Feedback backend in use
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HapticsBackend {
    /// ASCII BEL written to stdout
    Bell,
    /// No feedback channel
    Noop,
}

impl std::fmt::Display for HapticsBackend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HapticsBackend::Bell => write!(f, "bell"),
            HapticsBackend::Noop => write!(f, "none"),
        }
    }
}

/// Rings the terminal bell
#[derive(Debug, Clone, Copy, Default)]
pub struct TerminalBell;

impl HapticFeedback for TerminalBell {
    fn generate_feedback(&self) {
        let mut stdout = io::stdout();
        if let Err(e) = stdout.write_all(b"\x07").and_then(|_| stdout.flush()) {
            tracing::trace!("Terminal bell failed: {}", e);
        }
    }
}

/// Pick the backend for `mode` from what the environment supports
pub fn select_backend(mode: HapticsMode) -> HapticsBackend {
    match mode {
        HapticsMode::Off => HapticsBackend::Noop,
        HapticsMode::Bell => HapticsBackend::Bell,
        HapticsMode::Auto => detect_backend(),
    }
}

/// Build the provider for a backend
pub fn provider(backend: HapticsBackend) -> Rc<dyn HapticFeedback> {
    match backend {
        HapticsBackend::Bell => Rc::new(TerminalBell),
        HapticsBackend::Noop => Rc::new(NoopHaptics),
    }
}

fn detect_backend() -> HapticsBackend {
    // 1. A bell needs somebody to hear it
    if !io::stdout().is_terminal() {
        tracing::debug!("stdout is not a terminal, haptics disabled");
        return HapticsBackend::Noop;
    }

    // 2. Dumb terminals tend to print BEL literally
    if let Ok(term) = std::env::var("TERM") {
        if term == "dumb" {
            tracing::debug!("Dumb terminal, haptics disabled");
            return HapticsBackend::Noop;
        }
    }

    tracing::debug!("Using terminal bell for haptics");
    HapticsBackend::Bell
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_modes() {
        assert_eq!(select_backend(HapticsMode::Off), HapticsBackend::Noop);
        assert_eq!(select_backend(HapticsMode::Bell), HapticsBackend::Bell);
    }

    #[test]
    fn test_noop_provider_is_silent() {
        // Must not write anything or panic
        provider(HapticsBackend::Noop).generate_feedback();
    }

    #[test]
    fn test_backend_names() {
        assert_eq!(HapticsBackend::Bell.to_string(), "bell");
        assert_eq!(HapticsBackend::Noop.to_string(), "none");
    }
}
