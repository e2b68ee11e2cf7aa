//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod review;
mod welcome;

use crate::app::App;
use crate::state::Step;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let (main_area, status_area) = layout::create_layout(frame.area());

    match app.state.current_step() {
        Step::Welcome => welcome::draw(frame, main_area),
        Step::Signup => forms::draw_signup(frame, main_area, app),
        Step::Review => review::draw(frame, main_area, app),
    }

    layout::draw_status_bar(frame, status_area, app);

    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
