use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use sticky_core::{IndicatorEdge, PullIndicator};

use crate::scroll::timing::units_to_rows;
use crate::theme::{blend, Theme};

pub struct PullIndicatorWidget;

impl PullIndicatorWidget {
    /// Render the "Pull to / Release to" line in the gap the content leaves
    pub fn render(
        frame: &mut Frame,
        area: Rect,
        indicator: &PullIndicator<'_>,
        theme: &Theme,
        units_per_row: f64,
    ) {
        if !indicator.is_visible() || area.height == 0 {
            return;
        }

        let Some(row) = indicator_row(area, indicator, units_per_row) else {
            return;
        };

        let text_color = blend(theme.bg0, theme.fg0, indicator.opacity);
        let label_color = blend(theme.bg0, theme.accent, indicator.opacity);
        let arrow = match indicator.edge {
            IndicatorEdge::Top => "↓",
            IndicatorEdge::Bottom => "↑",
        };

        let line = Line::from(vec![
            Span::styled(
                format!("{} ", indicator.prompt),
                Style::default().fg(text_color),
            ),
            Span::styled(
                indicator.label.to_string(),
                Style::default()
                    .fg(label_color)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!(" {}", arrow), Style::default().fg(label_color)),
        ]);

        let paragraph = Paragraph::new(line)
            .alignment(Alignment::Center)
            .style(Style::default().bg(theme.bg0));
        frame.render_widget(paragraph, Rect::new(area.x, row, area.width, 1));
    }
}

/// Screen row of the indicator, trailing its edge by the indicator offset
pub fn indicator_row(area: Rect, indicator: &PullIndicator<'_>, units_per_row: f64) -> Option<u16> {
    if area.height == 0 {
        return None;
    }
    let max_rows = area.height - 1;
    let rows = units_to_rows(indicator.offset.abs(), units_per_row)
        .clamp(0, max_rows as i32) as u16;

    Some(match indicator.edge {
        IndicatorEdge::Top => area.y + rows,
        IndicatorEdge::Bottom => area.y + max_rows - rows,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use sticky_core::{PullDirection, TransitionState};

    #[test]
    fn test_indicator_row_top_and_bottom() {
        let area = Rect::new(0, 2, 40, 20);

        let top = PullIndicator::new(PullDirection::PullDown, TransitionState::Pull, "Back", 80.0);
        assert_eq!(indicator_row(area, &top, 10.0), Some(6));

        let bottom = PullIndicator::new(PullDirection::PullUp, TransitionState::Release, "Open", -140.0);
        assert_eq!(indicator_row(area, &bottom, 10.0), Some(2 + 19 - 7));
    }

    #[test]
    fn test_indicator_row_stays_inside() {
        let area = Rect::new(0, 0, 40, 5);
        let far = PullIndicator::new(PullDirection::PullDown, TransitionState::Release, "Back", 900.0);
        assert_eq!(indicator_row(area, &far, 10.0), Some(4));

        let empty = Rect::new(0, 0, 40, 0);
        assert_eq!(indicator_row(empty, &far, 10.0), None);
    }
}
