use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use sticky_core::PageConfig;
use unicode_width::UnicodeWidthStr;

pub struct PageWidget;

impl PageWidget {
    /// Render a full page: solid background with a framed title in the middle
    pub fn render(frame: &mut Frame, area: Rect, page: &PageConfig, background: Color) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let block = Block::default().style(Style::default().bg(background));
        frame.render_widget(block, area);

        let title = truncate_to_width(&page.title, area.width.saturating_sub(4) as usize);
        let title_width = UnicodeWidthStr::width(title.as_str()) as u16;
        let box_area = centered_rect(title_width + 4, 3, area);

        let title_block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::White))
            .style(Style::default().bg(background));
        let inner = title_block.inner(box_area);
        frame.render_widget(title_block, box_area);

        let paragraph = Paragraph::new(Line::from(Span::styled(
            title,
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )))
        .alignment(Alignment::Center);
        frame.render_widget(paragraph, inner);
    }
}

/// Helper function to create a centered rect, clipped to `area`
fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width.saturating_sub(width)) / 2;
    let y = area.y + (area.height.saturating_sub(height)) / 2;
    Rect::new(x, y, width, height)
}

/// Truncate to a display width, adding an ellipsis when cut
fn truncate_to_width(s: &str, max_width: usize) -> String {
    if UnicodeWidthStr::width(s) <= max_width {
        return s.to_string();
    }

    let mut out = String::new();
    let mut width = 0;
    for c in s.chars() {
        let w = unicode_width::UnicodeWidthChar::width(c).unwrap_or(0);
        if width + w + 1 > max_width {
            break;
        }
        out.push(c);
        width += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("View 1", 10), "View 1");
        assert_eq!(truncate_to_width("Very long title", 6), "Very …");
        assert_eq!(truncate_to_width("全角文字", 5), "全角…");
    }

    #[test]
    fn test_centered_rect_is_clipped() {
        let area = Rect::new(2, 3, 10, 2);
        let rect = centered_rect(20, 3, area);
        assert_eq!(rect, Rect::new(2, 3, 10, 2));

        let rect = centered_rect(4, 1, Rect::new(0, 0, 10, 5));
        assert_eq!(rect, Rect::new(3, 2, 4, 1));
    }
}
