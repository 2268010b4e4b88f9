use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sticky_core::TransitionState;

use crate::app::App;

pub struct StatusBarWidget;

impl StatusBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &App) {
        let theme = &app.theme;
        let state = app.state();
        let state_str = match state {
            TransitionState::Pull => "PULL",
            TransitionState::Release => "RELEASE",
            TransitionState::Released => "RELEASED",
        };
        let state_color = match state {
            TransitionState::Pull => theme.info,
            TransitionState::Release => theme.warning,
            TransitionState::Released => theme.success,
        };

        let status_text = if let Some(msg) = &app.status_message {
            format!(" {} ", msg)
        } else {
            format!(
                " {} | {:.0} | swaps: {} | haptics: {} ",
                app.toggle.interaction().direction(),
                app.offset,
                app.toggle.toggle_count(),
                app.haptics_backend,
            )
        };

        let help_hint = " drag/wheel:pull space:settle r:reset q:quit ";
        let used = state_str.len() + 2 + status_text.len() + help_hint.len();
        let padding_len = (area.width as usize).saturating_sub(used);

        let line = Line::from(vec![
            Span::styled(
                format!(" {} ", state_str),
                Style::default().fg(theme.bg0).bg(state_color),
            ),
            Span::styled(status_text, Style::default().fg(theme.fg0).bg(theme.bg2)),
            Span::styled(" ".repeat(padding_len), Style::default().bg(theme.bg2)),
            Span::styled(help_hint, Style::default().fg(theme.grey2).bg(theme.bg2)),
        ]);

        let paragraph = Paragraph::new(line);
        frame.render_widget(paragraph, area);
    }
}
