//! Layout components (content area and status bar)

use crate::app::App;
use crate::platform::SUBMIT_SHORTCUT;
use crate::state::Step;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Split the screen into content and a one-line status bar
pub fn create_layout(area: Rect) -> (Rect, Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Content
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    (chunks[0], chunks[1])
}

/// Draw the status bar
pub fn draw_status_bar(frame: &mut Frame, area: Rect, app: &App) {
    let step = app.state.current_step();

    let mut spans = vec![
        Span::styled(
            format!(" {} ", step.label()),
            Style::default().fg(Color::Black).bg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(
            get_step_hints(step, app.config.show_back_button),
            Style::default().fg(Color::Gray),
        ),
    ];

    if let Some(msg) = &app.status_message {
        spans.push(Span::raw(" | "));
        spans.push(Span::styled(msg, Style::default().fg(Color::Yellow)));
    }

    let status = Paragraph::new(Line::from(spans)).style(Style::default().bg(Color::DarkGray));
    frame.render_widget(status, area);

    let quit_hint = " ^C:quit ";
    let quit_area = Rect {
        x: area.x + area.width.saturating_sub(quit_hint.len() as u16),
        width: (quit_hint.len() as u16).min(area.width),
        ..area
    };
    let quit_widget =
        Paragraph::new(quit_hint).style(Style::default().bg(Color::DarkGray).fg(Color::Gray));
    frame.render_widget(quit_widget, quit_area);
}

/// Get keyboard hints for the current step
fn get_step_hints(step: Step, show_back: bool) -> String {
    match step {
        Step::Welcome => "Enter:begin  q:quit".to_string(),
        Step::Signup if show_back => {
            format!("Tab:next  Enter/{SUBMIT_SHORTCUT}:submit  Esc:back")
        }
        Step::Signup => format!("Tab:next  Enter/{SUBMIT_SHORTCUT}:submit"),
        Step::Review => "Esc/b:back  q:quit".to_string(),
    }
}
