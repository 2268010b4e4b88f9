//! Presentation values derived from interaction state
//!
//! Pure functions, no renderer types. Hosts map the returned scalars onto
//! whatever their drawing surface understands (rows, points, alpha).

use crate::interaction::{PullDirection, TransitionState};

/// Progress at which the indicator starts to appear
const OPACITY_START: f64 = 20.0;
/// Progress span over which the indicator fades in
const OPACITY_SPAN: f64 = 50.0;
/// Progress past which opacity stops growing
const OPACITY_CAP: f64 = 100.0;

/// Raw indicator opacity: `(min(|progress|, 100) - 20) / 50`
///
/// Not clamped; ranges over `[-0.4, 1.6]`. Use [`clamped_opacity`] when the
/// drawing surface needs a valid alpha.
#[inline]
pub fn pull_view_opacity(progress: f64) -> f64 {
    (progress.abs().min(OPACITY_CAP) - OPACITY_START) / OPACITY_SPAN
}

/// Indicator opacity clamped to `[0, 1]`
#[inline]
pub fn clamped_opacity(progress: f64) -> f64 {
    // `min` swallows NaN, so check the input
    if progress.is_nan() {
        return 0.0;
    }
    pull_view_opacity(progress).clamp(0.0, 1.0)
}

/// Indicator scale. Constant for now.
#[inline]
pub fn pull_view_scale_factor(_progress: f64) -> f64 {
    1.0
}

/// Counter-offset that pins content when dragged against the pull direction
#[inline]
pub fn scroll_offset(direction: PullDirection, min_y: f64) -> f64 {
    match direction {
        PullDirection::PullUp => {
            if min_y > 0.0 {
                -min_y
            } else {
                0.0
            }
        }
        PullDirection::PullDown => {
            if min_y < 0.0 {
                -min_y
            } else {
                0.0
            }
        }
    }
}

/// Visible content displacement after the rubber-band pin is applied
#[inline]
pub fn content_offset(direction: PullDirection, min_y: f64) -> f64 {
    min_y + scroll_offset(direction, min_y)
}

/// Indicator trails the content at half speed
#[inline]
pub fn indicator_offset(progress: f64) -> f64 {
    progress / 2.0
}

pub fn indicator_prompt(state: TransitionState) -> &'static str {
    match state {
        TransitionState::Pull => "Pull to",
        TransitionState::Release | TransitionState::Released => "Release to",
    }
}

/// Edge of the viewport the indicator is anchored to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndicatorEdge {
    Top,
    Bottom,
}

impl From<PullDirection> for IndicatorEdge {
    fn from(direction: PullDirection) -> Self {
        match direction {
            PullDirection::PullDown => IndicatorEdge::Top,
            PullDirection::PullUp => IndicatorEdge::Bottom,
        }
    }
}

/// Everything a host needs to draw the pull indicator
#[derive(Debug, Clone, PartialEq)]
pub struct PullIndicator<'a> {
    pub prompt: &'static str,
    pub label: &'a str,
    pub edge: IndicatorEdge,
    /// Opacity in `[0, 1]`
    pub opacity: f64,
    pub scale: f64,
    /// Displacement away from the anchored edge
    pub offset: f64,
}

impl<'a> PullIndicator<'a> {
    pub fn new(
        direction: PullDirection,
        state: TransitionState,
        label: &'a str,
        progress: f64,
    ) -> Self {
        Self {
            prompt: indicator_prompt(state),
            label,
            edge: direction.into(),
            opacity: clamped_opacity(progress),
            scale: pull_view_scale_factor(progress),
            offset: indicator_offset(progress),
        }
    }

    pub fn is_visible(&self) -> bool {
        self.opacity > 0.0
    }
}
