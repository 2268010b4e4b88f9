//! Content toggle controller
//!
//! Owns the flag that selects which of two pages is shown and the interaction
//! mounted on that page. A `Released` interaction flips the flag and is
//! replaced by a fresh interaction for the other page.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;
use std::time::Duration;

use crate::config::{AppConfig, EasingType, PageConfig};
use crate::haptics::{HapticFeedback, NoopHaptics};
use crate::interaction::{
    PullDirection, Sample, ScrollVelocity, StateObserver, StickyInteraction, TransitionState,
    DEFAULT_THRESHOLD,
};

/// Default swap animation length
pub const DEFAULT_TRANSITION_DURATION: Duration = Duration::from_millis(700);

/// Animated swap the host should play after a toggle
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransitionRequest {
    pub easing: EasingType,
    pub duration: Duration,
    /// Flag value after the toggle
    pub showing_first: bool,
    /// Direction of the interaction that triggered the swap
    pub from_direction: PullDirection,
}

pub struct ContentToggle {
    showing_first: bool,
    first: PageConfig,
    second: PageConfig,
    interaction: StickyInteraction,
    released: Rc<Cell<bool>>,
    host_observer: Option<Rc<RefCell<StateObserver>>>,
    threshold: f64,
    haptics: Rc<dyn HapticFeedback>,
    easing: EasingType,
    duration: Duration,
    toggle_count: u32,
}

impl ContentToggle {
    /// Start on the first page with default threshold and bouncy animation
    pub fn new(first: PageConfig, second: PageConfig) -> Self {
        let released = Rc::new(Cell::new(false));
        let haptics: Rc<dyn HapticFeedback> = Rc::new(NoopHaptics);
        let interaction = Self::build_interaction(
            true,
            &first,
            &second,
            DEFAULT_THRESHOLD,
            &haptics,
            &released,
            None,
        );

        Self {
            showing_first: true,
            first,
            second,
            interaction,
            released,
            host_observer: None,
            threshold: DEFAULT_THRESHOLD,
            haptics,
            easing: EasingType::Bouncy,
            duration: DEFAULT_TRANSITION_DURATION,
            toggle_count: 0,
        }
    }

    /// Build from the loaded configuration
    pub fn from_config(config: &AppConfig, haptics: Rc<dyn HapticFeedback>) -> Self {
        Self::new(config.content.first.clone(), config.content.second.clone())
            .with_threshold(config.interaction.threshold)
            .with_animation(config.transition.easing, config.transition.duration())
            .with_haptics(haptics)
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self.remount();
        self
    }

    pub fn with_haptics(mut self, haptics: Rc<dyn HapticFeedback>) -> Self {
        self.haptics = haptics;
        self.remount();
        self
    }

    pub fn with_animation(mut self, easing: EasingType, duration: Duration) -> Self {
        self.easing = easing;
        self.duration = duration;
        self
    }

    /// Receive every state change of every mounted interaction
    pub fn with_observer(mut self, observer: impl FnMut(TransitionState) + 'static) -> Self {
        let observer: StateObserver = Box::new(observer);
        self.host_observer = Some(Rc::new(RefCell::new(observer)));
        self.remount();
        self
    }

    #[inline]
    pub fn is_showing_first(&self) -> bool {
        self.showing_first
    }

    /// Page currently mounted
    pub fn current_page(&self) -> &PageConfig {
        if self.showing_first {
            &self.first
        } else {
            &self.second
        }
    }

    /// Page the next toggle would mount
    pub fn other_page(&self) -> &PageConfig {
        if self.showing_first {
            &self.second
        } else {
            &self.first
        }
    }

    pub fn interaction(&self) -> &StickyInteraction {
        &self.interaction
    }

    #[inline]
    pub fn toggle_count(&self) -> u32 {
        self.toggle_count
    }

    pub fn handle_offset(&mut self, value: f64) -> Option<TransitionRequest> {
        self.interaction.handle_offset(value);
        self.apply_release()
    }

    pub fn handle_velocity(&mut self, velocity: ScrollVelocity) -> Option<TransitionRequest> {
        self.interaction.handle_velocity(velocity);
        self.apply_release()
    }

    pub fn handle_sample(&mut self, sample: Sample) -> Option<TransitionRequest> {
        match sample {
            Sample::Offset(value) => self.handle_offset(value),
            Sample::Velocity(velocity) => self.handle_velocity(velocity),
        }
    }

    /// Discard the mounted interaction and start over on the same page
    pub fn reset(&mut self) {
        self.remount();
    }

    fn apply_release(&mut self) -> Option<TransitionRequest> {
        if !self.released.replace(false) {
            return None;
        }

        let from_direction = self.interaction.direction();
        self.showing_first = !self.showing_first;
        self.toggle_count += 1;
        self.remount();

        tracing::info!(
            showing = %self.current_page().title,
            toggles = self.toggle_count,
            "Content toggled"
        );

        Some(TransitionRequest {
            easing: self.easing,
            duration: self.duration,
            showing_first: self.showing_first,
            from_direction,
        })
    }

    fn remount(&mut self) {
        self.released.set(false);
        self.interaction = Self::build_interaction(
            self.showing_first,
            &self.first,
            &self.second,
            self.threshold,
            &self.haptics,
            &self.released,
            self.host_observer.clone(),
        );
    }

    fn build_interaction(
        showing_first: bool,
        first: &PageConfig,
        second: &PageConfig,
        threshold: f64,
        haptics: &Rc<dyn HapticFeedback>,
        released: &Rc<Cell<bool>>,
        host_observer: Option<Rc<RefCell<StateObserver>>>,
    ) -> StickyInteraction {
        let (direction, label) = if showing_first {
            (PullDirection::PullUp, first.label.as_str())
        } else {
            (PullDirection::PullDown, second.label.as_str())
        };

        let released = released.clone();
        StickyInteraction::new(direction, label, move |state| {
            if let Some(observer) = &host_observer {
                let mut observer = observer.borrow_mut();
                (*observer)(state);
            }
            if state == TransitionState::Released {
                released.set(true);
            }
        })
        .with_threshold(threshold)
        .with_haptics(haptics.clone())
    }
}

impl fmt::Debug for ContentToggle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentToggle")
            .field("showing_first", &self.showing_first)
            .field("interaction", &self.interaction)
            .field("easing", &self.easing)
            .field("duration", &self.duration)
            .field("toggle_count", &self.toggle_count)
            .finish_non_exhaustive()
    }
}
