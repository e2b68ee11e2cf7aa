//! Field rendering utilities for forms

use crate::state::FormField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Rows taken by a bordered single-line input
pub const FIELD_HEIGHT: u16 = 3;

/// Draw a required input box
pub fn draw_field(
    frame: &mut Frame,
    area: Rect,
    field: &FormField,
    is_active: bool,
    has_error: bool,
) {
    let border_style = if is_active {
        Style::default().fg(Color::Cyan)
    } else if has_error {
        Style::default().fg(Color::Red)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let cursor = if is_active { "▌" } else { "" };

    let value = if field.is_empty() && !is_active {
        Span::styled(
            field.field.placeholder(),
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::ITALIC),
        )
    } else {
        Span::styled(field.display_value(), Style::default().fg(Color::White))
    };

    let content = Paragraph::new(Line::from(vec![
        value,
        Span::styled(cursor, Style::default().fg(Color::Cyan)),
    ]));

    let title = Line::from(vec![
        Span::raw(format!(" {}", field.label)),
        Span::styled("*", Style::default().fg(Color::Red)),
        Span::raw(" "),
    ]);

    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .border_style(border_style);

    frame.render_widget(content.block(block), area);
}

/// Draw an inline validation message under a field
pub fn draw_error_text(frame: &mut Frame, area: Rect, message: &str) {
    let paragraph = Paragraph::new(Span::styled(message, Style::default().fg(Color::Red)))
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, area);
}

/// Rows needed to show `message` word-wrapped at `width` columns.
/// Words longer than a row are split across rows.
pub fn error_text_height(message: &str, width: u16) -> u16 {
    let width = usize::from(width.max(1));
    let mut rows: u16 = 1;
    let mut col = 0;
    for word in message.split_whitespace() {
        let mut len = word.chars().count();
        if col > 0 && col + 1 + len <= width {
            col += 1 + len;
            continue;
        }
        if col > 0 {
            rows += 1;
        }
        while len > width {
            rows += 1;
            len -= width;
        }
        col = len;
    }
    rows
}
