//! Signup step rendering

use super::field_renderer::{draw_error_text, draw_field, error_text_height, FIELD_HEIGHT};
use crate::app::App;
use crate::state::{SignupButton, SignupField, SignupForm, SubmissionPhase};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Draw the signup form with inline errors and the button row
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let Some(form) = app.state.signup_form.as_ref() else {
        return;
    };

    let border_color = match form.phase() {
        SubmissionPhase::Invalid => Color::Red,
        SubmissionPhase::Valid => Color::Green,
        SubmissionPhase::Idle | SubmissionPhase::Submitted => Color::Cyan,
    };

    let block = Block::default()
        .title(Span::styled(
            format!(" {} ", app.config.page_title),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect {
        x: inner.x + 1,
        width: inner.width.saturating_sub(2),
        ..inner
    };

    let mut constraints = Vec::with_capacity(SignupField::ALL.len() * 2 + 4);
    for field in SignupField::ALL {
        constraints.push(Constraint::Length(FIELD_HEIGHT));
        let error_rows = form
            .errors()
            .get(field)
            .map(|err| error_text_height(&err.to_string(), inner.width))
            .unwrap_or(0);
        constraints.push(Constraint::Length(error_rows));
    }
    constraints.push(Constraint::Length(1)); // Required note
    constraints.push(Constraint::Length(1)); // Spacer
    constraints.push(Constraint::Length(BUTTON_HEIGHT));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(inner);

    for (idx, field) in SignupField::ALL.iter().enumerate() {
        draw_field(
            frame,
            chunks[idx * 2],
            form.field(*field),
            form.active_field_index == idx,
            form.errors().contains(*field),
        );
        if let Some(err) = form.errors().get(*field) {
            draw_error_text(frame, chunks[idx * 2 + 1], &err.to_string());
        }
    }

    let note_idx = SignupField::ALL.len() * 2;
    let note = Paragraph::new(Line::from(vec![
        Span::styled("*", Style::default().fg(Color::Red)),
        Span::styled(" required fields", Style::default().fg(Color::DarkGray)),
    ]));
    frame.render_widget(note, chunks[note_idx]);

    draw_buttons(frame, chunks[note_idx + 2], form, &app.config.submit_button_text);
}

fn draw_buttons(frame: &mut Frame, area: Rect, form: &SignupForm, submit_text: &str) {
    let on_buttons = form.is_buttons_row_active();
    let submit_width = (submit_text.chars().count() as u16 + 4).max(12);

    let mut constraints = Vec::new();
    if form.show_back_button {
        constraints.push(Constraint::Length(12));
        constraints.push(Constraint::Length(1));
    }
    constraints.push(Constraint::Length(submit_width));
    constraints.push(Constraint::Min(0));

    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    let submit_area = if form.show_back_button {
        render_button(
            frame,
            chunks[0],
            "Back",
            on_buttons && form.selected_button == SignupButton::Back,
            Color::Gray,
        );
        chunks[2]
    } else {
        chunks[0]
    };

    render_button(
        frame,
        submit_area,
        submit_text,
        on_buttons && form.selected_button == SignupButton::Submit,
        Color::Green,
    );
}
