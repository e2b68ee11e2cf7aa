//! Form domain layer
//!
//! Type-safe field state, validation and the submit cycle of the signup step.

mod field;
mod signup_form;
mod validation;

pub use field::{FormField, SignupField};
pub use signup_form::{Form, SignupButton, SignupFields, SignupForm, SubmissionPhase};
pub use validation::{Validator, DEFAULT_ID_LABEL};
