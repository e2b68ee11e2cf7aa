//! Signup step form state

use super::field::{FormField, SignupField};
use super::validation::{ErrorMap, Validator};
use std::fmt;

/// Values of one signup submission attempt
#[derive(Clone, Default, PartialEq, Eq)]
pub struct SignupFields {
    pub name: String,
    pub id: String,
    pub email: String,
    pub password: String,
}

impl SignupFields {
    pub fn get(&self, field: SignupField) -> &str {
        match field {
            SignupField::Name => &self.name,
            SignupField::Id => &self.id,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
        }
    }
}

// Keeps passwords out of logs and panic messages
impl fmt::Debug for SignupFields {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SignupFields")
            .field("name", &self.name)
            .field("id", &self.id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
}

/// Where the form is in the submit cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionPhase {
    #[default]
    Idle,
    /// Submit requested, validation pending
    Submitted,
    Valid,
    Invalid,
}

/// Buttons on the action row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SignupButton {
    Back,
    #[default]
    Submit,
}

/// Local state of the signup step
#[derive(Debug, Clone)]
pub struct SignupForm {
    pub name: FormField,
    pub id: FormField,
    pub email: FormField,
    pub password: FormField,
    pub active_field_index: usize,
    pub selected_button: SignupButton,
    pub show_back_button: bool,
    errors: ErrorMap,
    phase: SubmissionPhase,
}

impl SignupForm {
    /// Index of the button row
    pub const BUTTONS_ROW: usize = 4;

    /// Build the form, seeding each input from a previously committed snapshot
    pub fn new(seed: &SignupFields, id_label: &str, show_back_button: bool) -> Self {
        Self {
            name: FormField::text_with_value(SignupField::Name, "Hospital Name", seed.name.clone()),
            id: FormField::text_with_value(SignupField::Id, id_label, seed.id.clone()),
            email: FormField::text_with_value(
                SignupField::Email,
                "Hospital email",
                seed.email.clone(),
            ),
            password: FormField::text_with_value(
                SignupField::Password,
                "Password",
                seed.password.clone(),
            ),
            active_field_index: 0,
            selected_button: SignupButton::Submit,
            show_back_button,
            errors: ErrorMap::default(),
            phase: SubmissionPhase::Idle,
        }
    }

    pub fn field(&self, field: SignupField) -> &FormField {
        match field {
            SignupField::Name => &self.name,
            SignupField::Id => &self.id,
            SignupField::Email => &self.email,
            SignupField::Password => &self.password,
        }
    }

    fn field_mut(&mut self, field: SignupField) -> &mut FormField {
        match field {
            SignupField::Name => &mut self.name,
            SignupField::Id => &mut self.id,
            SignupField::Email => &mut self.email,
            SignupField::Password => &mut self.password,
        }
    }

    /// Current values as a snapshot
    pub fn fields(&self) -> SignupFields {
        SignupFields {
            name: self.name.as_text().to_string(),
            id: self.id.as_text().to_string(),
            email: self.email.as_text().to_string(),
            password: self.password.as_text().to_string(),
        }
    }

    /// Replace exactly one field's value
    pub fn set_field(&mut self, field: SignupField, value: impl Into<String>) {
        self.field_mut(field).set_text(value.into());
        self.mark_edited();
    }

    /// Type a character into the active input
    pub fn input_char(&mut self, c: char) {
        if let Some(field) = self.active_signup_field() {
            let mut value = self.field(field).as_text().to_string();
            value.push(c);
            self.set_field(field, value);
        }
    }

    /// Delete the last character of the active input
    pub fn backspace(&mut self) {
        if let Some(field) = self.active_signup_field() {
            let mut value = self.field(field).as_text().to_string();
            if value.pop().is_some() {
                self.set_field(field, value);
            }
        }
    }

    // Errors from the last submit stay visible until the next one.
    fn mark_edited(&mut self) {
        self.phase = SubmissionPhase::Idle;
    }

    /// Validate the current values.
    ///
    /// Returns the snapshot to commit when every field passes; otherwise the
    /// failures are kept for rendering and `None` is returned.
    pub fn submit(&mut self, validator: &Validator) -> Option<SignupFields> {
        self.phase = SubmissionPhase::Submitted;
        let fields = self.fields();
        self.errors = validator.validate(&fields);

        if self.errors.is_empty() {
            self.phase = SubmissionPhase::Valid;
            Some(fields)
        } else {
            self.phase = SubmissionPhase::Invalid;
            None
        }
    }

    pub fn errors(&self) -> &ErrorMap {
        &self.errors
    }

    pub fn phase(&self) -> SubmissionPhase {
        self.phase
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == Self::BUTTONS_ROW
    }

    /// Field under the cursor, if the cursor is on an input
    pub fn active_signup_field(&self) -> Option<SignupField> {
        SignupField::ALL.get(self.active_field_index).copied()
    }

    /// Move between Back and Submit (no-op without a Back button)
    pub fn toggle_button(&mut self) {
        if !self.show_back_button {
            self.selected_button = SignupButton::Submit;
            return;
        }
        self.selected_button = match self.selected_button {
            SignupButton::Back => SignupButton::Submit,
            SignupButton::Submit => SignupButton::Back,
        };
    }
}

impl Form for SignupForm {
    fn field_count(&self) -> usize {
        5 // name, id, email, password, buttons
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(Self::BUTTONS_ROW);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty_form() -> SignupForm {
        SignupForm::new(&SignupFields::default(), "NABH ID", false)
    }

    fn fill(form: &mut SignupForm, name: &str, id: &str, email: &str, password: &str) {
        form.set_field(SignupField::Name, name);
        form.set_field(SignupField::Id, id);
        form.set_field(SignupField::Email, email);
        form.set_field(SignupField::Password, password);
    }

    mod signup_fields {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_get_reads_each_field() {
            let fields = SignupFields {
                name: "Acme".to_string(),
                id: "N1".to_string(),
                email: "a@b.com".to_string(),
                password: "pw".to_string(),
            };
            assert_eq!(fields.get(SignupField::Name), "Acme");
            assert_eq!(fields.get(SignupField::Id), "N1");
            assert_eq!(fields.get(SignupField::Email), "a@b.com");
            assert_eq!(fields.get(SignupField::Password), "pw");
        }

        #[test]
        fn test_debug_redacts_password() {
            let fields = SignupFields {
                password: "Secret12345".to_string(),
                ..Default::default()
            };
            let debug_str = format!("{:?}", fields);
            assert!(debug_str.contains("<redacted>"));
            assert!(!debug_str.contains("Secret12345"));
        }
    }

    mod field_state {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_new_without_seed_is_empty() {
            let form = empty_form();
            assert_eq!(form.fields(), SignupFields::default());
            assert_eq!(form.active_field_index, 0);
            assert_eq!(form.phase(), SubmissionPhase::Idle);
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_new_seeds_from_snapshot() {
            let seed = SignupFields {
                name: "St. Mary".to_string(),
                id: "N001".to_string(),
                email: "x@y.com".to_string(),
                password: "Passw0rd12".to_string(),
            };
            let form = SignupForm::new(&seed, "NABH ID", true);
            assert_eq!(form.fields(), seed);
        }

        #[test]
        fn test_id_label_is_configurable() {
            let form = SignupForm::new(&SignupFields::default(), "Licence No", false);
            assert_eq!(form.id.label, "Licence No");
        }

        #[test]
        fn test_set_field_isolation() {
            let mut form = empty_form();
            fill(&mut form, "Acme", "N1", "a@b.com", "pw");
            form.set_field(SignupField::Email, "new@b.com");

            let fields = form.fields();
            assert_eq!(fields.email, "new@b.com");
            assert_eq!(fields.name, "Acme");
            assert_eq!(fields.id, "N1");
            assert_eq!(fields.password, "pw");
        }

        #[test]
        fn test_typing_edits_only_active_field() {
            let mut form = empty_form();
            form.set_active_field(2);
            for c in "a@b.com".chars() {
                form.input_char(c);
            }
            form.backspace();
            assert_eq!(form.email.as_text(), "a@b.co");
            assert!(form.name.is_empty());
            assert!(form.id.is_empty());
            assert!(form.password.is_empty());
        }

        #[test]
        fn test_typing_on_buttons_row_is_ignored() {
            let mut form = empty_form();
            form.set_active_field(SignupForm::BUTTONS_ROW);
            form.input_char('x');
            form.backspace();
            assert_eq!(form.fields(), SignupFields::default());
        }

        #[test]
        fn test_backspace_on_empty_field_is_noop() {
            let mut form = empty_form();
            form.backspace();
            assert!(form.name.is_empty());
        }

        #[test]
        fn test_no_validation_on_change() {
            let mut form = empty_form();
            form.set_field(SignupField::Email, "bad");
            assert!(form.errors().is_empty());
            assert_eq!(form.phase(), SubmissionPhase::Idle);
        }
    }

    mod navigation {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_field_count() {
            assert_eq!(empty_form().field_count(), 5);
        }

        #[test]
        fn test_next_field_wraps() {
            let mut form = empty_form();
            for _ in 0..5 {
                form.next_field();
            }
            assert_eq!(form.active_field_index, 0);
        }

        #[test]
        fn test_prev_field_wraps_to_buttons() {
            let mut form = empty_form();
            form.prev_field();
            assert!(form.is_buttons_row_active());
        }

        #[test]
        fn test_set_active_field_clamps() {
            let mut form = empty_form();
            form.set_active_field(100);
            assert_eq!(form.active_field_index, SignupForm::BUTTONS_ROW);
        }

        #[test]
        fn test_active_signup_field_follows_cursor() {
            let mut form = empty_form();
            for expected in SignupField::ALL {
                assert_eq!(form.active_signup_field(), Some(expected));
                form.next_field();
            }
            assert!(form.active_signup_field().is_none());
        }

        #[test]
        fn test_toggle_button_without_back_stays_on_submit() {
            let mut form = empty_form();
            form.toggle_button();
            assert_eq!(form.selected_button, SignupButton::Submit);
        }

        #[test]
        fn test_toggle_button_with_back() {
            let mut form = SignupForm::new(&SignupFields::default(), "NABH ID", true);
            form.toggle_button();
            assert_eq!(form.selected_button, SignupButton::Back);
            form.toggle_button();
            assert_eq!(form.selected_button, SignupButton::Submit);
        }
    }

    mod submission {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_valid_submit_returns_snapshot() {
            let mut form = empty_form();
            fill(&mut form, "St. Mary", "N001", "x@y.com", "Passw0rd12");

            let committed = form.submit(&Validator::default());

            assert_eq!(committed, Some(form.fields()));
            assert_eq!(form.phase(), SubmissionPhase::Valid);
            assert!(form.errors().is_empty());
        }

        #[test]
        fn test_invalid_submit_keeps_errors() {
            let mut form = empty_form();
            fill(&mut form, "", "N001", "bad", "weak");

            assert!(form.submit(&Validator::default()).is_none());
            assert_eq!(form.phase(), SubmissionPhase::Invalid);
            let failing: Vec<_> = form.errors().fields().collect();
            assert_eq!(
                failing,
                vec![SignupField::Name, SignupField::Email, SignupField::Password]
            );
        }

        #[test]
        fn test_edit_after_invalid_returns_to_idle_and_keeps_errors() {
            let mut form = empty_form();
            assert!(form.submit(&Validator::default()).is_none());

            form.set_field(SignupField::Name, "Acme");

            assert_eq!(form.phase(), SubmissionPhase::Idle);
            assert_eq!(form.errors().len(), 4);
        }

        #[test]
        fn test_resubmit_recomputes_errors() {
            let mut form = empty_form();
            assert!(form.submit(&Validator::default()).is_none());
            assert_eq!(form.errors().len(), 4);

            fill(&mut form, "Acme", "N1", "bad", "Passw0rd12");
            assert!(form.submit(&Validator::default()).is_none());

            let failing: Vec<_> = form.errors().fields().collect();
            assert_eq!(failing, vec![SignupField::Email]);
        }

        #[test]
        fn test_invalid_then_valid() {
            let mut form = empty_form();
            assert!(form.submit(&Validator::default()).is_none());

            fill(&mut form, "Acme Hospital", "NABH123", "a@b.com", "Abcdefg123");
            assert!(form.submit(&Validator::default()).is_some());
            assert!(form.errors().is_empty());
        }
    }
}
