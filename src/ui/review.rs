//! Review step showing the committed signup values

use crate::app::App;
use crate::state::SignupField;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default()
        .title(" Review ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Green));

    let Some(fields) = app.state.store.signup.as_ref() else {
        let empty = Paragraph::new("Nothing has been submitted yet.")
            .style(Style::default().fg(Color::DarkGray))
            .block(block);
        frame.render_widget(empty, area);
        return;
    };

    let label_style = Style::default().fg(Color::DarkGray);
    let mut lines = vec![
        Line::from(Span::styled(
            "Signup details saved",
            Style::default()
                .fg(Color::Green)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    for field in SignupField::ALL {
        let label = match field {
            SignupField::Name => "Hospital Name",
            SignupField::Id => app.config.id_label.as_str(),
            SignupField::Email => "Hospital email",
            SignupField::Password => "Password",
        };
        let value = if field.is_secret() {
            "•".repeat(fields.get(field).chars().count())
        } else {
            fields.get(field).to_string()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label:<16}"), label_style),
            Span::raw(value),
        ]));
    }

    frame.render_widget(Paragraph::new(lines).block(block), area);
}
