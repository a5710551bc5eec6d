//! Application state definitions

use crate::config::TuiConfig;
use crate::state::RegistrationForm;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    /// The registration form itself
    #[default]
    Registration,
    /// Success screen shown after submit; the form is gone at this point
    Confirmation,
}

/// Top-level mutable state owned by the App
#[derive(Debug)]
pub struct AppState {
    pub current_view: View,
    pub form: RegistrationForm,
}

impl AppState {
    pub fn new(config: &TuiConfig) -> Self {
        Self {
            current_view: View::default(),
            form: RegistrationForm::new(config.dob_policy.unwrap_or_default()),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(&TuiConfig::default())
    }
}
