//! Signup field validation
//!
//! Every field is checked on its own and all failures are reported
//! together. Validation is a pure function of the submitted values.

use super::field::SignupField;
use super::signup_form::SignupFields;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::LazyLock;
use thiserror::Error;

/// Minimum password length in characters
pub const PASSWORD_MIN_LENGTH: usize = 10;

/// Default label of the accreditation number field
pub const DEFAULT_ID_LABEL: &str = "NABH ID";

/// ASCII word characters
const WORD: &str = "0-9A-Za-z_";

/// Whitespace accepted inside a quoted local part
const SPACE: &str = r"\t\n\x0B\x0C\r \x{A0}\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Email shape: a local part and a labelled domain ending in a short TLD,
/// or an `@` followed by a (possibly bracketed) IPv4 literal. The second
/// alternative is only anchored at the end.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let atoms = format!(r"[{WORD}-]+(?:\.[{WORD}-]+)*");
    let quoted = format!(r#""[{WORD}{SPACE}-]+""#);
    let octet = "(25[0-5]|2[0-4][0-9]|1[0-9]{2}|[0-9]{1,2})";
    let pattern = format!(
        concat!(
            r"^(({quoted})|({atoms})|({quoted})({atoms}))",
            r"(@((?:[{WORD}-]+\.)*[{WORD}][{WORD}-]{{0,66}})\.([a-zA-Z]{{2,6}}(?:\.[a-zA-Z]{{2}})?)$)",
            r"|(@\[?({octet}\.)({octet}\.){{2}}{octet}\]?$)",
        ),
        quoted = quoted,
        atoms = atoms,
        WORD = WORD,
        octet = octet,
    );
    Regex::new(&pattern).expect("email pattern is valid")
});

/// A single field-level validation failure
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name required")]
    MissingName,
    #[error("{label} required")]
    MissingId { label: String },
    #[error("Valid Email required")]
    InvalidEmail,
    #[error(
        "The minimum password length is 10 characters and must contain \
         at least 1 lowercase letter, 1 uppercase letter and 1 number."
    )]
    WeakPassword,
}

/// Field name to failure. A missing key means the field is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorMap {
    errors: BTreeMap<SignupField, ValidationError>,
}

impl ErrorMap {
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: SignupField) -> Option<&ValidationError> {
        self.errors.get(&field)
    }

    pub fn contains(&self, field: SignupField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failing fields in display order
    pub fn fields(&self) -> impl Iterator<Item = SignupField> + '_ {
        self.errors.keys().copied()
    }

    fn insert(&mut self, field: SignupField, error: ValidationError) {
        self.errors.insert(field, error);
    }
}

/// Validates a signup snapshot
#[derive(Debug, Clone)]
pub struct Validator {
    id_label: String,
}

impl Validator {
    pub fn new(id_label: impl Into<String>) -> Self {
        Self {
            id_label: id_label.into(),
        }
    }

    pub fn validate(&self, fields: &SignupFields) -> ErrorMap {
        let mut errors = ErrorMap::default();

        if fields.name.is_empty() {
            errors.insert(SignupField::Name, ValidationError::MissingName);
        }

        if fields.id.is_empty() {
            errors.insert(
                SignupField::Id,
                ValidationError::MissingId {
                    label: self.id_label.clone(),
                },
            );
        }

        if fields.email.is_empty() || !is_valid_email(&fields.email) {
            errors.insert(SignupField::Email, ValidationError::InvalidEmail);
        }

        if fields.password.is_empty() || !meets_password_policy(&fields.password) {
            errors.insert(SignupField::Password, ValidationError::WeakPassword);
        }

        errors
    }
}

impl Default for Validator {
    fn default() -> Self {
        Self::new(DEFAULT_ID_LABEL)
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// True when some line of the password is long enough and mixes
/// lowercase, uppercase and digits.
pub fn meets_password_policy(password: &str) -> bool {
    password
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .any(|line| {
            line.chars().count() >= PASSWORD_MIN_LENGTH
                && line.chars().any(|c| c.is_ascii_lowercase())
                && line.chars().any(|c| c.is_ascii_uppercase())
                && line.chars().any(|c| c.is_ascii_digit())
        })
}
