//! Frame composition: stage (indicator + page) above a one-line status bar

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    widgets::Block,
    Frame,
};
use sticky_core::PullDirection;

use crate::app::App;
use crate::scroll::SwapFrame;
use crate::widgets::{PageWidget, PullIndicatorWidget, StatusBarWidget};

pub fn draw(frame: &mut Frame, app: &App) {
    let size = frame.area();

    // Main layout: stage + status bar
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(size);
    let stage = main_layout[0];

    frame.render_widget(
        Block::default().style(Style::default().bg(app.theme.bg0)),
        stage,
    );

    match app.swap_frame {
        Some(swap) => render_swap(frame, stage, app, swap),
        None => render_interaction(frame, stage, app),
    }

    StatusBarWidget::render(frame, main_layout[1], app);
}

fn render_interaction(frame: &mut Frame, stage: Rect, app: &App) {
    // Indicator first; the page covers it except in the gap left by the pull
    PullIndicatorWidget::render(
        frame,
        stage,
        &app.indicator(),
        &app.theme,
        app.config.ui.units_per_row,
    );

    let showing_first = app.toggle.is_showing_first();
    if let Some(area) = shifted_rect(stage, app.content_shift_rows()) {
        PageWidget::render(
            frame,
            area,
            app.toggle.current_page(),
            app.page_background(showing_first),
        );
    }
}

fn render_swap(frame: &mut Frame, stage: Rect, app: &App, swap: SwapFrame) {
    let (outgoing_shift, incoming_shift) =
        swap_shifts(stage.height, swap.progress, swap.request.from_direction);

    let showing_first = app.toggle.is_showing_first();
    if let Some(area) = shifted_rect(stage, outgoing_shift) {
        PageWidget::render(
            frame,
            area,
            app.toggle.other_page(),
            app.page_background(!showing_first),
        );
    }
    if let Some(area) = shifted_rect(stage, incoming_shift) {
        PageWidget::render(
            frame,
            area,
            app.toggle.current_page(),
            app.page_background(showing_first),
        );
    }
}

/// Row shifts of the outgoing and incoming page at eased `progress`
///
/// Pages keep moving the way the content was pulled: a pull-up sends the old
/// page out the top and brings the new one in from the bottom.
pub fn swap_shifts(height: u16, progress: f64, from_direction: PullDirection) -> (i32, i32) {
    let height = height as f64;
    let out = (progress * height).round() as i32;
    let incoming = ((1.0 - progress) * height).round() as i32;
    match from_direction {
        PullDirection::PullUp => (-out, incoming),
        PullDirection::PullDown => (out, -incoming),
    }
}

/// `area` with `shift` rows cut from the top (positive) or bottom (negative)
pub fn shifted_rect(area: Rect, shift: i32) -> Option<Rect> {
    let height = area.height as u32;
    let cut = shift.unsigned_abs();
    if cut >= height {
        return None;
    }

    // cut < height, so both fit in u16
    let remaining = (height - cut) as u16;
    if shift >= 0 {
        Some(Rect::new(area.x, area.y.saturating_add(cut as u16), area.width, remaining))
    } else {
        Some(Rect::new(area.x, area.y, area.width, remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;
    use std::time::{Duration, Instant};

    use ratatui::{backend::TestBackend, Terminal};
    use sticky_core::AppConfig;

    use crate::haptics::HapticsBackend;
    use crate::input::PointerInput;
    use crate::theme::Theme;

    fn screen_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_shifted_rect() {
        let area = Rect::new(0, 1, 30, 10);
        assert_eq!(shifted_rect(area, 0), Some(area));
        assert_eq!(shifted_rect(area, 3), Some(Rect::new(0, 4, 30, 7)));
        assert_eq!(shifted_rect(area, -3), Some(Rect::new(0, 1, 30, 7)));
        assert_eq!(shifted_rect(area, 10), None);
        assert_eq!(shifted_rect(area, -12), None);
        assert_eq!(shifted_rect(area, i32::MIN), None);
        assert_eq!(shifted_rect(area, i32::MAX), None);
    }

    #[test]
    fn test_draw_with_tiny_row_size() {
        let mut config = AppConfig::default();
        config.ui.units_per_row = 1e-9;
        assert!(config.validate().is_ok());

        let mut app = App::new(Arc::new(config), Theme::default(), HapticsBackend::Noop);
        app.handle_action(crate::input::Action::PullUp, Instant::now());
        assert_eq!(app.content_shift_rows(), -(u16::MAX as i32));

        let mut terminal = Terminal::new(TestBackend::new(40, 12)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();
        assert!(screen_text(&terminal).contains("PULL"));
    }

    #[test]
    fn test_swap_shifts() {
        assert_eq!(swap_shifts(20, 0.0, PullDirection::PullUp), (0, 20));
        assert_eq!(swap_shifts(20, 0.5, PullDirection::PullUp), (-10, 10));
        assert_eq!(swap_shifts(20, 1.0, PullDirection::PullDown), (20, 0));
        // Overshoot pushes the incoming page past rest
        assert_eq!(swap_shifts(20, 1.1, PullDirection::PullDown), (22, 2));
    }

    #[test]
    fn test_draw_idle_shows_first_page() {
        let app = App::new(Arc::new(AppConfig::default()), Theme::default(), HapticsBackend::Noop);
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("View 1"));
        assert!(text.contains("PULL"));
        assert!(!text.contains("Pull to"));
    }

    #[test]
    fn test_draw_release_shows_indicator() {
        let now = Instant::now();
        let mut app = App::new(Arc::new(AppConfig::default()), Theme::default(), HapticsBackend::Noop);
        app.handle_pointer(PointerInput::Press { row: 18 }, now);
        app.handle_pointer(PointerInput::Drag { row: 3 }, now + Duration::from_millis(40));

        let mut terminal = Terminal::new(TestBackend::new(60, 30)).unwrap();
        terminal.draw(|frame| draw(frame, &app)).unwrap();

        let text = screen_text(&terminal);
        assert!(text.contains("Release to"), "{}", text);
        assert!(text.contains("Open"));
        assert!(text.contains("RELEASE"));
    }
}
