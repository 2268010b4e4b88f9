//! L3 Molecular Layer: Animation controllers
//!
//! Combines easing functions and timing utilities. `SpringBack` returns the
//! dragged offset to rest after a gesture settles; `SwapAnimator` plays the
//! content swap requested by the toggle controller.

use std::time::{Duration, Instant};

use sticky_core::TransitionRequest;

use super::easing::{EasingType, EasingTypeExt};
use super::timing::{is_complete_at, lerp, progress_at};

/// Active spring-back state
#[derive(Debug, Clone)]
struct ActiveSpring {
    /// Animation start time
    start: Instant,
    /// Offset when the gesture settled
    from: f64,
}

/// Offset spring-back controller
///
/// Call `start()` when a gesture settles, then `update()` each frame and feed
/// the returned offset back into the interaction.
#[derive(Debug, Clone)]
pub struct SpringBack {
    spring: Option<ActiveSpring>,
    duration: Duration,
    easing: EasingType,
    current: f64,
}

impl SpringBack {
    pub fn new(duration: Duration) -> Self {
        Self {
            spring: None,
            duration,
            easing: EasingType::Cubic,
            current: 0.0,
        }
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.spring.is_some()
    }

    #[inline]
    pub fn current(&self) -> f64 {
        self.current
    }

    /// Begin returning `from` to zero
    pub fn start(&mut self, from: f64, now: Instant) {
        self.current = from;
        if self.duration.is_zero() || from == 0.0 {
            self.current = 0.0;
            self.spring = None;
            return;
        }
        self.spring = Some(ActiveSpring { start: now, from });
    }

    /// Advance and return the current offset
    pub fn update(&mut self, now: Instant) -> f64 {
        if let Some(ref spring) = self.spring {
            if is_complete_at(spring.start, now, self.duration) {
                self.current = 0.0;
                self.spring = None;
            } else {
                let t = progress_at(spring.start, now, self.duration);
                self.current = lerp(spring.from, 0.0, self.easing.apply(t));
            }
        }
        self.current
    }

    /// Stop at the current offset, e.g. when the user grabs the content again
    pub fn cancel(&mut self) {
        self.spring = None;
    }

    pub fn reset(&mut self) {
        self.spring = None;
        self.current = 0.0;
    }
}

/// One frame of a running swap
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapFrame {
    /// Eased progress; overshoots 1.0 with bouncy easing
    pub progress: f64,
    pub request: TransitionRequest,
}

#[derive(Debug, Clone)]
struct ActiveSwap {
    start: Instant,
    request: TransitionRequest,
}

/// Content swap animation controller
#[derive(Debug, Clone, Default)]
pub struct SwapAnimator {
    swap: Option<ActiveSwap>,
}

impl SwapAnimator {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_animating(&self) -> bool {
        self.swap.is_some()
    }

    /// Start playing a swap; replaces any swap in progress
    pub fn start(&mut self, request: TransitionRequest, now: Instant) {
        if request.duration.is_zero() {
            self.swap = None;
            return;
        }
        self.swap = Some(ActiveSwap { start: now, request });
    }

    /// Advance the swap; `None` once it has finished
    pub fn update(&mut self, now: Instant) -> Option<SwapFrame> {
        let swap = self.swap.as_ref()?;
        if is_complete_at(swap.start, now, swap.request.duration) {
            self.swap = None;
            return None;
        }

        let t = progress_at(swap.start, now, swap.request.duration);
        Some(SwapFrame {
            progress: swap.request.easing.apply(t),
            request: swap.request,
        })
    }

    pub fn cancel(&mut self) {
        self.swap = None;
    }
}
