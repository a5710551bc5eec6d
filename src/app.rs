//! Application core logic
//!
//! Keyboard events drive three things: editing the focused field, moving
//! focus (which blurs and validates the field being left), and the submit
//! action. Validation itself lives in [`crate::validation`]; this layer only
//! routes events and records verdicts through the form.

use crate::config::TuiConfig;
use crate::state::{AppState, Form, View};
use crate::validation::FieldId;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    /// Whether the app should quit
    quit: bool,
    /// One-line message shown in the status bar
    pub status_message: Option<String>,
}

impl App {
    /// Create a new App instance, loading user config (defaults on failure)
    pub fn new() -> Self {
        let config = TuiConfig::load().unwrap_or_else(|err| {
            tracing::warn!("failed to load config, using defaults: {err:#}");
            TuiConfig::default()
        });
        tracing::info!(
            policy = config.dob_policy.unwrap_or_default().label(),
            "starting registration form"
        );
        Self {
            state: AppState::new(&config),
            quit: false,
            status_message: None,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) {
        match self.state.current_view {
            View::Registration => self.handle_registration_key(key),
            View::Confirmation => self.handle_confirmation_key(key),
        }
    }

    fn handle_registration_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => self.quit = true,
            KeyCode::Tab | KeyCode::Down => self.advance_focus(),
            KeyCode::BackTab | KeyCode::Up => self.retreat_focus(),
            KeyCode::Enter => {
                if self.state.form.is_submit_row_active() {
                    self.submit();
                } else {
                    self.advance_focus();
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            KeyCode::Char('u') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.clear();
                }
            }
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = self.state.form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            _ => {}
        }
    }

    fn handle_confirmation_key(&mut self, key: KeyEvent) {
        if matches!(key.code, KeyCode::Enter | KeyCode::Esc | KeyCode::Char('q')) {
            self.quit = true;
        }
    }

    /// Move focus forward, validating the field being left
    fn advance_focus(&mut self) {
        self.blur_active();
        self.state.form.next_field();
    }

    /// Move focus backward, validating the field being left
    fn retreat_focus(&mut self) {
        self.blur_active();
        self.state.form.prev_field();
    }

    fn blur_active(&mut self) {
        let index = self.state.form.active_field();
        if let Some(verdict) = self.state.form.blur_active() {
            let id = FieldId::ALL[index];
            tracing::debug!(
                field = id.name(),
                valid = verdict.valid,
                phase = ?self.state.form.phase(),
                "field validated"
            );
        }
        self.status_message = None;
    }

    /// Submit the form; only reachable from the submit button row. The
    /// button renders disabled while the form is incomplete, so a rejected
    /// attempt is a no-op apart from the status-bar explanation.
    fn submit(&mut self) {
        match self.state.form.submit() {
            Ok(()) => {
                tracing::info!("registration submitted");
                self.state.current_view = View::Confirmation;
            }
            Err(err) => {
                self.status_message = Some(err.to_string());
            }
        }
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}
