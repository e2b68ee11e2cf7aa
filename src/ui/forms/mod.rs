//! Form rendering module
//!
//! - `field_renderer`: input boxes and inline error text
//! - `signup_form`: the signup step

mod field_renderer;
mod signup_form;

pub use signup_form::draw_signup;
