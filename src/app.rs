//! Application state and core logic

use crate::config::SignupConfig;
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, Form, SignupButton, SignupForm, StageAction, Step, Validator};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What a key press on the signup step asks for
enum SignupIntent {
    Submit,
    Back,
}

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Host options for the signup step
    pub config: SignupConfig,
    validator: Validator,
    /// Whether the app should quit
    quit: bool,
    /// Transient message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance on the starting stage
    pub fn new(config: SignupConfig) -> Self {
        let validator = Validator::new(config.id_label.clone());
        let mut app = Self {
            state: AppState::default(),
            config,
            validator,
            quit: false,
            status_message: None,
        };
        app.sync_step();
        app
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    pub fn push_error(&mut self, message: impl Into<String>) {
        self.state.push_error(message.into());
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        // Error dialog is modal
        if self.state.has_errors() {
            if matches!(key.code, KeyCode::Enter | KeyCode::Esc) {
                self.state.dismiss_error();
            }
            return;
        }

        self.status_message = None;

        match self.state.current_step() {
            Step::Welcome => self.handle_welcome_key(key),
            Step::Signup => self.handle_signup_key(key),
            Step::Review => self.handle_review_key(key),
        }
    }

    fn handle_welcome_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter => self.advance_stage(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_review_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc | KeyCode::Backspace | KeyCode::Char('b') => self.step_back(),
            KeyCode::Char('q') => self.quit = true,
            _ => {}
        }
    }

    fn handle_signup_key(&mut self, key: KeyEvent) {
        let show_back = self.config.show_back_button;
        let Some(form) = self.state.signup_form.as_mut() else {
            return;
        };
        let on_buttons = form.is_buttons_row_active();

        let intent = match key.code {
            KeyCode::Char('s')
                if key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | SUBMIT_MODIFIER) =>
            {
                Some(SignupIntent::Submit)
            }
            KeyCode::Tab | KeyCode::Down => {
                form.next_field();
                None
            }
            KeyCode::BackTab | KeyCode::Up => {
                form.prev_field();
                None
            }
            KeyCode::Left | KeyCode::Right if on_buttons => {
                form.toggle_button();
                None
            }
            KeyCode::Enter if on_buttons => match form.selected_button {
                SignupButton::Back if show_back => Some(SignupIntent::Back),
                SignupButton::Back => None,
                SignupButton::Submit => Some(SignupIntent::Submit),
            },
            // Enter inside an input submits, like a native form
            KeyCode::Enter => Some(SignupIntent::Submit),
            KeyCode::Esc if show_back => Some(SignupIntent::Back),
            KeyCode::Char(c)
                if !key
                    .modifiers
                    .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) =>
            {
                form.input_char(c);
                None
            }
            KeyCode::Backspace => {
                form.backspace();
                None
            }
            _ => None,
        };

        match intent {
            Some(SignupIntent::Submit) => self.submit_signup(),
            Some(SignupIntent::Back) => self.step_back(),
            None => {}
        }
    }

    /// Validate the signup form and, when it passes, commit it and move on
    pub fn submit_signup(&mut self) {
        let Some(form) = self.state.signup_form.as_mut() else {
            return;
        };

        match form.submit(&self.validator) {
            Some(fields) => {
                self.state
                    .store
                    .dispatch(StageAction::CommitSignupFields(fields));
                tracing::info!("signup fields committed");
                self.advance_stage();
            }
            None => {
                let failing: Vec<_> = form.errors().fields().map(|f| f.key()).collect();
                tracing::debug!(?failing, "signup rejected");
                self.status_message = Some(format!(
                    "{} field(s) need attention",
                    form.errors().len()
                ));
            }
        }
    }

    fn advance_stage(&mut self) {
        let next = self.state.store.stage + 1;
        self.state.store.dispatch(StageAction::SetStage(next));
        tracing::info!(stage = next, "advanced stage");
        self.sync_step();
    }

    /// Go to the previous stage without validating or committing
    pub fn step_back(&mut self) {
        let previous = self.state.store.stage.saturating_sub(1);
        self.state.store.dispatch(StageAction::SetStage(previous));
        tracing::info!(stage = previous, "stepped back");
        self.sync_step();
    }

    /// Mount the signup form when its step becomes visible, drop it otherwise
    fn sync_step(&mut self) {
        match self.state.current_step() {
            Step::Signup => {
                if self.state.signup_form.is_none() {
                    self.state.signup_form = Some(SignupForm::new(
                        &self.state.store.signup_seed(),
                        &self.config.id_label,
                        self.config.show_back_button,
                    ));
                }
            }
            Step::Welcome | Step::Review => self.state.signup_form = None,
        }
    }
}
