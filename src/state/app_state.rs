//! Application state definitions

use super::forms::SignupForm;
use super::store::{StageState, SIGNUP_STAGE};

/// Step of the flow selected by the stage index
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Welcome,
    Signup,
    Review,
}

impl Step {
    pub fn from_stage(stage: u32) -> Self {
        match stage {
            0 => Self::Welcome,
            SIGNUP_STAGE => Self::Signup,
            _ => Self::Review,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Welcome => "Welcome",
            Self::Signup => "Signup",
            Self::Review => "Review",
        }
    }
}

/// Main application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub store: StageState,
    /// Mounted signup form, present only while the signup step is visible
    pub signup_form: Option<SignupForm>,
    /// Queue of error messages shown as a modal dialog
    errors: Vec<String>,
}

impl AppState {
    pub fn current_step(&self) -> Step {
        Step::from_stage(self.store.stage)
    }

    pub fn push_error(&mut self, message: String) {
        self.errors.push(message);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Oldest pending error
    pub fn current_error(&self) -> Option<&str> {
        self.errors.first().map(String::as_str)
    }

    pub fn dismiss_error(&mut self) {
        if !self.errors.is_empty() {
            self.errors.remove(0);
        }
    }
}
