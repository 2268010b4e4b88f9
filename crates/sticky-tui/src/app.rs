use std::sync::Arc;
use std::time::Instant;

use ratatui::style::Color;
use sticky_core::presentation::content_offset;
use sticky_core::{
    AppConfig, ContentToggle, PageConfig, PullIndicator, TransitionRequest, TransitionState,
};

use crate::gesture::{GestureTracker, Settle};
use crate::haptics::{self, HapticsBackend};
use crate::input::{Action, PointerInput};
use crate::scroll::timing::units_to_rows;
use crate::scroll::{SpringBack, SwapAnimator, SwapFrame};
use crate::theme::{parse_hex_color, Theme};

/// Application state
pub struct App {
    /// Application configuration
    pub config: Arc<AppConfig>,
    pub theme: Theme,
    /// Page flag plus the mounted interaction
    pub toggle: ContentToggle,
    pub gesture: GestureTracker,
    pub spring: SpringBack,
    pub swap: SwapAnimator,
    /// Frame of the swap being played, if any
    pub swap_frame: Option<SwapFrame>,
    /// Content displacement last fed to the interaction
    pub offset: f64,
    pub haptics_backend: HapticsBackend,
    /// Whether the app should quit
    pub should_quit: bool,
    /// Status message
    pub status_message: Option<String>,
    first_color: Color,
    second_color: Color,
}

impl App {
    pub fn new(config: Arc<AppConfig>, theme: Theme, haptics_backend: HapticsBackend) -> Self {
        let toggle = ContentToggle::from_config(&config, haptics::provider(haptics_backend));
        let gesture = GestureTracker::from_config(&config.ui);
        let spring = SpringBack::new(config.transition.spring_back_duration());
        let first_color = page_color(&config.content.first, theme.bg1);
        let second_color = page_color(&config.content.second, theme.bg2);

        Self {
            config,
            theme,
            toggle,
            gesture,
            spring,
            swap: SwapAnimator::new(),
            swap_frame: None,
            offset: 0.0,
            haptics_backend,
            should_quit: false,
            status_message: None,
            first_color,
            second_color,
        }
    }

    #[inline]
    pub fn state(&self) -> TransitionState {
        self.toggle.interaction().state()
    }

    pub fn indicator(&self) -> PullIndicator<'_> {
        self.toggle.interaction().indicator()
    }

    /// Background of the first (`true`) or second page
    pub fn page_background(&self, first: bool) -> Color {
        if first {
            self.first_color
        } else {
            self.second_color
        }
    }

    /// Rows the mounted page is pushed away from rest
    pub fn content_shift_rows(&self) -> i32 {
        let direction = self.toggle.interaction().direction();
        units_to_rows(content_offset(direction, self.offset), self.config.ui.units_per_row)
    }

    /// Whether the loop should run at animation frame rate
    pub fn needs_animation(&self) -> bool {
        self.gesture.is_active() || self.spring.is_animating() || self.swap.is_animating()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }

    pub fn handle_action(&mut self, action: Action, now: Instant) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::PullDown => self.handle_pointer(PointerInput::Wheel { ticks: 1 }, now),
            Action::PullUp => self.handle_pointer(PointerInput::Wheel { ticks: -1 }, now),
            Action::Settle => {
                if let Some(settle) = self.gesture.force_settle() {
                    self.settle(settle, now);
                }
            }
            Action::Reset => {
                self.gesture.cancel();
                self.spring.reset();
                self.offset = 0.0;
                self.toggle.reset();
                self.set_status("Interaction reset");
            }
            Action::None => {}
        }
    }

    pub fn handle_pointer(&mut self, input: PointerInput, now: Instant) {
        // Content is being swapped, nothing to grab
        if self.swap.is_animating() {
            return;
        }

        match input {
            PointerInput::Press { row } => {
                self.spring.cancel();
                self.gesture.begin_drag(row, self.offset, now);
            }
            PointerInput::Drag { row } => {
                if let Some(offset) = self.gesture.drag_to(row, now) {
                    self.apply_offset(offset, now);
                }
            }
            PointerInput::Release => {
                if let Some(settle) = self.gesture.end_drag() {
                    self.settle(settle, now);
                }
            }
            PointerInput::Wheel { ticks } => {
                self.spring.cancel();
                let offset = self.gesture.wheel(ticks, self.offset, now);
                self.apply_offset(offset, now);
            }
        }
    }

    /// Advance time-driven state: wheel settling, spring-back and swap
    pub fn tick(&mut self, now: Instant) {
        if self.swap.is_animating() {
            self.swap_frame = self.swap.update(now);
        } else {
            self.swap_frame = None;
        }

        if let Some(settle) = self.gesture.poll_settle(now) {
            self.settle(settle, now);
        }

        if self.spring.is_animating() {
            let offset = self.spring.update(now);
            self.apply_offset(offset, now);
        }
    }

    fn apply_offset(&mut self, offset: f64, now: Instant) {
        self.offset = offset;
        if let Some(request) = self.toggle.handle_offset(offset) {
            self.start_swap(request, now);
        }
    }

    fn settle(&mut self, settle: Settle, now: Instant) {
        self.offset = settle.offset;
        match self.toggle.handle_velocity(settle.velocity) {
            Some(request) => self.start_swap(request, now),
            None => self.spring.start(self.offset, now),
        }
    }

    fn start_swap(&mut self, request: TransitionRequest, now: Instant) {
        self.offset = 0.0;
        self.spring.reset();
        self.gesture.cancel();
        self.swap.start(request, now);
        self.swap_frame = self.swap.update(now);

        let title = self.toggle.current_page().title.clone();
        self.set_status(format!("Showing {}", title));
    }
}

fn page_color(page: &PageConfig, fallback: Color) -> Color {
    parse_hex_color(&page.color).unwrap_or_else(|| {
        tracing::warn!("Invalid page color '{}', using theme color", page.color);
        fallback
    })
}
