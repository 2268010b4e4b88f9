//! Terminal gesture tracking
//!
//! Turns mouse drags and wheel ticks into offset samples (in abstract units,
//! positive when content is dragged down) and a settle velocity when the
//! gesture ends. Velocity follows the scroll-view convention: content dragged
//! down yields a negative `dy`.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use sticky_core::config::UiConfig;
use sticky_core::ScrollVelocity;

/// Samples older than this (relative to the newest) do not count toward velocity
const VELOCITY_WINDOW: Duration = Duration::from_millis(100);
/// Upper bound on retained samples
const MAX_SAMPLES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq)]
enum GestureKind {
    Drag { start_row: u16 },
    Wheel,
}

#[derive(Debug, Clone)]
struct ActiveGesture {
    kind: GestureKind,
    /// Offset when the gesture began
    base: f64,
    offset: f64,
    last_input: Instant,
}

/// End of a gesture
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settle {
    pub offset: f64,
    pub velocity: ScrollVelocity,
}

#[derive(Debug, Clone)]
pub struct GestureTracker {
    units_per_row: f64,
    wheel_step: f64,
    settle_after: Duration,
    active: Option<ActiveGesture>,
    samples: VecDeque<(Instant, f64)>,
}

impl GestureTracker {
    pub fn new(units_per_row: f64, wheel_step: f64, settle_after: Duration) -> Self {
        Self {
            units_per_row,
            wheel_step,
            settle_after,
            active: None,
            samples: VecDeque::with_capacity(MAX_SAMPLES),
        }
    }

    pub fn from_config(config: &UiConfig) -> Self {
        Self::new(
            config.units_per_row,
            config.wheel_step,
            Duration::from_millis(config.settle_ms),
        )
    }

    #[inline]
    pub fn is_active(&self) -> bool {
        self.active.is_some()
    }

    pub fn is_dragging(&self) -> bool {
        matches!(
            self.active,
            Some(ActiveGesture {
                kind: GestureKind::Drag { .. },
                ..
            })
        )
    }

    /// Pointer pressed at `row`; the gesture continues from `current_offset`
    pub fn begin_drag(&mut self, row: u16, current_offset: f64, now: Instant) {
        self.samples.clear();
        self.active = Some(ActiveGesture {
            kind: GestureKind::Drag { start_row: row },
            base: current_offset,
            offset: current_offset,
            last_input: now,
        });
        self.record(now, current_offset);
    }

    /// Pointer moved to `row`; returns the new offset while dragging
    pub fn drag_to(&mut self, row: u16, now: Instant) -> Option<f64> {
        let gesture = self.active.as_mut()?;
        let GestureKind::Drag { start_row } = gesture.kind else {
            return None;
        };

        let rows = row as f64 - start_row as f64;
        gesture.offset = gesture.base + rows * self.units_per_row;
        gesture.last_input = now;
        let offset = gesture.offset;
        self.record(now, offset);
        Some(offset)
    }

    /// Pointer released; ends a drag
    pub fn end_drag(&mut self) -> Option<Settle> {
        if !self.is_dragging() {
            return None;
        }
        self.finish()
    }

    /// One wheel tick; `ticks` is positive for pulling content down
    ///
    /// Ignored while a drag is in progress: the pointer owns the offset.
    pub fn wheel(&mut self, ticks: i32, current_offset: f64, now: Instant) -> f64 {
        if self.is_dragging() {
            return self
                .active
                .as_ref()
                .map_or(current_offset, |gesture| gesture.offset);
        }

        if self.active.is_none() {
            self.samples.clear();
            self.active = Some(ActiveGesture {
                kind: GestureKind::Wheel,
                base: current_offset,
                offset: current_offset,
                last_input: now,
            });
            self.record(now, current_offset);
        }

        let step = ticks as f64 * self.wheel_step;
        let offset = match self.active.as_mut() {
            Some(gesture) => {
                gesture.offset += step;
                gesture.last_input = now;
                gesture.offset
            }
            None => current_offset + step,
        };
        self.record(now, offset);
        offset
    }

    /// Settle a wheel gesture once input has been idle long enough
    pub fn poll_settle(&mut self, now: Instant) -> Option<Settle> {
        let gesture = self.active.as_ref()?;
        if gesture.kind != GestureKind::Wheel {
            return None;
        }
        if now.saturating_duration_since(gesture.last_input) < self.settle_after {
            return None;
        }
        self.finish()
    }

    /// End whatever gesture is active right away
    pub fn force_settle(&mut self) -> Option<Settle> {
        self.finish()
    }

    /// Drop the gesture without producing a settle
    pub fn cancel(&mut self) {
        self.active = None;
        self.samples.clear();
    }

    fn finish(&mut self) -> Option<Settle> {
        let gesture = self.active.take()?;
        let velocity = self.velocity();
        self.samples.clear();
        tracing::trace!(offset = gesture.offset, dy = velocity.dy, "Gesture settled");
        Some(Settle {
            offset: gesture.offset,
            velocity,
        })
    }

    fn record(&mut self, at: Instant, offset: f64) {
        if self.samples.len() == MAX_SAMPLES {
            self.samples.pop_front();
        }
        self.samples.push_back((at, offset));
    }

    /// Negated offset rate (units per second) over the recent window
    fn velocity(&self) -> ScrollVelocity {
        let Some(&(last_at, last_offset)) = self.samples.back() else {
            return ScrollVelocity::default();
        };

        let first = self
            .samples
            .iter()
            .find(|(at, _)| last_at.saturating_duration_since(*at) <= VELOCITY_WINDOW);
        let Some(&(first_at, first_offset)) = first else {
            return ScrollVelocity::default();
        };

        let dt = last_at.saturating_duration_since(first_at).as_secs_f64();
        if dt <= f64::EPSILON {
            return ScrollVelocity::default();
        }
        ScrollVelocity::vertical(-(last_offset - first_offset) / dt)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tracker() -> GestureTracker {
        GestureTracker::new(10.0, 20.0, Duration::from_millis(180))
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_drag_offsets_follow_rows() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(5, 0.0, now);
        assert_eq!(tracker.drag_to(9, now + ms(10)), Some(40.0));
        assert_eq!(tracker.drag_to(2, now + ms(20)), Some(-30.0));
    }

    #[test]
    fn test_drag_continues_from_current_offset() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(5, 60.0, now);
        assert_eq!(tracker.drag_to(6, now + ms(10)), Some(70.0));
    }

    #[test]
    fn test_pulling_down_gives_negative_dy() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(0, 0.0, now);
        tracker.drag_to(10, now + ms(50));
        tracker.drag_to(15, now + ms(100));

        let settle = tracker.end_drag().unwrap();
        assert_eq!(settle.offset, 150.0);
        assert!(settle.velocity.dy < 0.0, "dy {}", settle.velocity.dy);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_reversing_drag_gives_positive_dy() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(0, 0.0, now);
        tracker.drag_to(20, now + ms(300));
        tracker.drag_to(16, now + ms(350));

        let settle = tracker.end_drag().unwrap();
        assert!(settle.velocity.dy > 0.0);
    }

    #[test]
    fn test_old_samples_leave_velocity_window() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(0, 0.0, now);
        tracker.drag_to(20, now + ms(50));
        tracker.drag_to(20, now + ms(500));

        let settle = tracker.end_drag().unwrap();
        assert_eq!(settle.velocity.dy, 0.0);
    }

    #[test]
    fn test_end_without_drag_is_none() {
        let mut tracker = tracker();
        assert!(tracker.end_drag().is_none());
    }

    #[test]
    fn test_wheel_settles_after_idle() {
        let now = Instant::now();
        let mut tracker = tracker();
        assert_eq!(tracker.wheel(1, 0.0, now), 20.0);
        assert_eq!(tracker.wheel(1, 20.0, now + ms(20)), 40.0);
        assert_eq!(tracker.wheel(-1, 40.0, now + ms(40)), 20.0);
        assert_eq!(tracker.wheel(3, 20.0, now + ms(60)), 80.0);

        assert!(tracker.poll_settle(now + ms(100)).is_none());
        let settle = tracker.poll_settle(now + ms(240)).unwrap();
        assert_eq!(settle.offset, 80.0);
        assert!(settle.velocity.dy < 0.0);
        assert!(!tracker.is_active());
    }

    #[test]
    fn test_wheel_during_drag_is_ignored() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(5, 0.0, now);
        assert_eq!(tracker.drag_to(8, now + ms(10)), Some(30.0));
        assert_eq!(tracker.wheel(2, 30.0, now + ms(20)), 30.0);
        assert!(tracker.is_dragging());

        assert_eq!(tracker.drag_to(9, now + ms(30)), Some(40.0));
        assert_eq!(tracker.end_drag().unwrap().offset, 40.0);
    }

    #[test]
    fn test_drag_ignores_wheel_settle() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.begin_drag(3, 0.0, now);
        assert!(tracker.poll_settle(now + Duration::from_secs(2)).is_none());
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_force_settle_and_cancel() {
        let now = Instant::now();
        let mut tracker = tracker();
        tracker.wheel(2, 0.0, now);
        let settle = tracker.force_settle().unwrap();
        assert_eq!(settle.offset, 40.0);

        tracker.begin_drag(1, 0.0, now);
        tracker.cancel();
        assert!(!tracker.is_active());
        assert!(tracker.force_settle().is_none());
    }
}
