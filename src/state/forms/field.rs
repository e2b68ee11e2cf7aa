//! Form field value objects

use std::fmt;

/// The four inputs of the signup step
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum SignupField {
    Name,
    Id,
    Email,
    Password,
}

impl SignupField {
    /// All fields in display order
    pub const ALL: [SignupField; 4] = [Self::Name, Self::Id, Self::Email, Self::Password];

    /// Stable key used in error maps and logs
    pub fn key(&self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Id => "id",
            Self::Email => "email",
            Self::Password => "password",
        }
    }

    pub fn placeholder(&self) -> &'static str {
        match self {
            Self::Name => "Hospital name",
            Self::Id => "NABH ID",
            Self::Email => "email@example.com",
            Self::Password => "password",
        }
    }

    /// Password input is masked when rendered
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::Password)
    }
}

impl fmt::Display for SignupField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// Represents a single form input with its label and current text
#[derive(Debug, Clone)]
pub struct FormField {
    pub field: SignupField,
    pub label: String,
    value: String,
}

impl FormField {
    /// Create a field with an initial value
    pub fn text_with_value(field: SignupField, label: &str, value: String) -> Self {
        Self {
            field,
            label: label.to_string(),
            value,
        }
    }

    pub fn as_text(&self) -> &str {
        &self.value
    }

    pub fn set_text(&mut self, value: String) {
        self.value = value;
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Get the display value for rendering (secret fields are masked)
    pub fn display_value(&self) -> String {
        if self.field.is_secret() {
            "•".repeat(self.value.chars().count())
        } else {
            self.value.clone()
        }
    }
}
