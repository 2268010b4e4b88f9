//! Scroll interaction state machine
//!
//! Maps a stream of scroll offset and settle velocity samples onto the
//! discrete [`TransitionState`] of a single mounted interaction and notifies
//! the registered observer on every state assignment.

use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::haptics::{HapticFeedback, NoopHaptics};
use crate::presentation::PullIndicator;

/// Offset distance past which a pull becomes a release
pub const DEFAULT_THRESHOLD: f64 = 130.0;

/// Which way the content has to be dragged to reveal the indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PullDirection {
    /// Drag content down, indicator anchored to the top edge
    PullDown,
    /// Drag content up, indicator anchored to the bottom edge
    PullUp,
}

impl PullDirection {
    pub fn opposite(self) -> Self {
        match self {
            PullDirection::PullDown => PullDirection::PullUp,
            PullDirection::PullUp => PullDirection::PullDown,
        }
    }

    /// Whether a settle velocity confirms the release for this direction
    #[inline]
    pub fn confirms_release(self, velocity: ScrollVelocity) -> bool {
        match self {
            PullDirection::PullDown => velocity.dy <= 0.0,
            PullDirection::PullUp => velocity.dy >= 0.0,
        }
    }
}

impl fmt::Display for PullDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PullDirection::PullDown => write!(f, "pull-down"),
            PullDirection::PullUp => write!(f, "pull-up"),
        }
    }
}

/// Discrete state of a mounted interaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    /// Below the threshold
    #[default]
    Pull,
    /// Past the threshold, waiting for the finger to lift
    Release,
    /// Lifted past the threshold; the host is expected to swap content
    Released,
}

impl fmt::Display for TransitionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransitionState::Pull => write!(f, "pull"),
            TransitionState::Release => write!(f, "release"),
            TransitionState::Released => write!(f, "released"),
        }
    }
}

/// Scroll velocity reported when a drag ends
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ScrollVelocity {
    #[serde(default)]
    pub dx: f64,
    #[serde(default)]
    pub dy: f64,
}

impl ScrollVelocity {
    pub fn new(dx: f64, dy: f64) -> Self {
        Self { dx, dy }
    }

    pub fn vertical(dy: f64) -> Self {
        Self { dx: 0.0, dy }
    }
}

/// One unit of scroll telemetry
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Sample {
    /// Signed distance of the content from rest
    Offset(f64),
    /// Settle velocity at the end of a drag
    Velocity(ScrollVelocity),
}

/// Callback invoked with the new state on every assignment
pub type StateObserver = Box<dyn FnMut(TransitionState)>;

/// Pull-to-reveal interaction attached to one piece of content
///
/// The instance is single use: once it reaches [`TransitionState::Released`]
/// it stays there until the host drops it and mounts a fresh one.
pub struct StickyInteraction {
    direction: PullDirection,
    transition_text: String,
    threshold: f64,
    scroll_progress: f64,
    state: TransitionState,
    observer: StateObserver,
    haptics: Rc<dyn HapticFeedback>,
}

impl StickyInteraction {
    /// Attach an interaction with the default threshold and no haptics
    pub fn new(
        direction: PullDirection,
        transition_text: impl Into<String>,
        on_state_change: impl FnMut(TransitionState) + 'static,
    ) -> Self {
        Self {
            direction,
            transition_text: transition_text.into(),
            threshold: DEFAULT_THRESHOLD,
            scroll_progress: 0.0,
            state: TransitionState::Pull,
            observer: Box::new(on_state_change),
            haptics: Rc::new(NoopHaptics),
        }
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self
    }

    #[inline]
    pub fn direction(&self) -> PullDirection {
        self.direction
    }

    pub fn transition_text(&self) -> &str {
        &self.transition_text
    }

    #[inline]
    pub fn threshold(&self) -> f64 {
        self.threshold
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Last offset seen, drives the indicator
    #[inline]
    pub fn scroll_progress(&self) -> f64 {
        self.scroll_progress
    }

    #[inline]
    pub fn is_released(&self) -> bool {
        self.state == TransitionState::Released
    }

    /// Feed a scroll position update
    pub fn handle_offset(&mut self, value: f64) {
        self.scroll_progress = value;

        if self.state == TransitionState::Released {
            return;
        }

        let new_state = if value.abs() > self.threshold {
            TransitionState::Release
        } else {
            TransitionState::Pull
        };
        if new_state == self.state {
            return;
        }

        if new_state == TransitionState::Release {
            self.haptics.generate_feedback();
        }
        self.set_state(new_state);
    }

    /// Feed the settle velocity of a finished drag
    pub fn handle_velocity(&mut self, velocity: ScrollVelocity) {
        if self.state != TransitionState::Release {
            return;
        }
        if self.direction.confirms_release(velocity) {
            self.set_state(TransitionState::Released);
        }
    }

    pub fn handle_sample(&mut self, sample: Sample) {
        match sample {
            Sample::Offset(value) => self.handle_offset(value),
            Sample::Velocity(velocity) => self.handle_velocity(velocity),
        }
    }

    /// Render data for the pull indicator at the current progress
    pub fn indicator(&self) -> PullIndicator<'_> {
        PullIndicator::new(
            self.direction,
            self.state,
            &self.transition_text,
            self.scroll_progress,
        )
    }

    fn set_state(&mut self, state: TransitionState) {
        tracing::debug!(
            direction = %self.direction,
            from = %self.state,
            to = %state,
            progress = self.scroll_progress,
            "Sticky interaction state change"
        );
        self.state = state;
        (self.observer)(state);
    }
}

impl fmt::Debug for StickyInteraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StickyInteraction")
            .field("direction", &self.direction)
            .field("transition_text", &self.transition_text)
            .field("threshold", &self.threshold)
            .field("scroll_progress", &self.scroll_progress)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}
