//! Field validation for the registration form

mod dob;
mod rules;

pub use dob::*;
pub use rules::*;
