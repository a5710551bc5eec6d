//! Form state management: verdict bookkeeping, focus traversal, submit gate

use thiserror::Error;

use super::field::FormField;
use crate::validation::{validate_field, DobPolicy, FieldId, Verdict};

/// Index of the submit button row, one past the last field
pub const SUBMIT_ROW: usize = FieldId::ALL.len();

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
    fn get_active_field_mut(&mut self) -> Option<&mut FormField>;
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// Lifecycle of the form as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    /// At least one field is missing a valid verdict
    Incomplete,
    /// Every verdict is valid; the submit action is available
    Ready,
    /// The submit action ran; terminal
    Submitted,
}

/// Why a submit attempt was rejected
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SubmitError {
    #[error("form is incomplete")]
    Incomplete,
    #[error("form was already submitted")]
    AlreadySubmitted,
}

/// The registration form: five fields, their latest verdicts, and the
/// currently focused row (fields 0-4, submit button 5)
#[derive(Debug, Clone)]
pub struct RegistrationForm {
    pub first_name: FormField,
    pub last_name: FormField,
    pub email: FormField,
    pub dob: FormField,
    pub zip_code: FormField,
    pub active_field_index: usize,
    dob_policy: DobPolicy,
    submitted: bool,
}

impl RegistrationForm {
    pub fn new(dob_policy: DobPolicy) -> Self {
        Self {
            first_name: FormField::new(FieldId::FirstName),
            last_name: FormField::new(FieldId::LastName),
            email: FormField::new(FieldId::Email),
            dob: FormField::new(FieldId::Dob),
            zip_code: FormField::new(FieldId::ZipCode),
            active_field_index: 0,
            dob_policy,
            submitted: false,
        }
    }

    pub fn dob_policy(&self) -> DobPolicy {
        self.dob_policy
    }

    fn field(&self, id: FieldId) -> &FormField {
        match id {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
            FieldId::Dob => &self.dob,
            FieldId::ZipCode => &self.zip_code,
        }
    }

    fn field_mut(&mut self, id: FieldId) -> &mut FormField {
        match id {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
            FieldId::Dob => &mut self.dob,
            FieldId::ZipCode => &mut self.zip_code,
        }
    }

    /// Overwrite the stored verdict for exactly one field
    pub fn record_verdict(&mut self, id: FieldId, verdict: Verdict) {
        self.field_mut(id).verdict = Some(verdict);
    }

    pub fn verdict(&self, id: FieldId) -> Option<&Verdict> {
        self.field(id).verdict.as_ref()
    }

    /// Validate a field's current text and record the result. The UI calls
    /// this when the field loses input focus.
    pub fn blur(&mut self, id: FieldId) -> Verdict {
        let verdict = validate_field(id, self.field(id).text(), self.dob_policy);
        self.record_verdict(id, verdict.clone());
        verdict
    }

    /// Blur whichever field currently holds focus; `None` on the submit row
    pub fn blur_active(&mut self) -> Option<Verdict> {
        let id = FieldId::ALL.get(self.active_field_index).copied()?;
        Some(self.blur(id))
    }

    /// True iff every field's latest verdict is valid. Fields never validated
    /// count as invalid, so a fresh form cannot submit.
    pub fn can_submit(&self) -> bool {
        FieldId::ALL.iter().all(|id| self.field(*id).is_valid())
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == SUBMIT_ROW
    }

    pub fn phase(&self) -> FormPhase {
        if self.submitted {
            FormPhase::Submitted
        } else if self.can_submit() {
            FormPhase::Ready
        } else {
            FormPhase::Incomplete
        }
    }

    /// All-or-nothing submit across the five fields; only valid from Ready
    pub fn submit(&mut self) -> Result<(), SubmitError> {
        if self.submitted {
            return Err(SubmitError::AlreadySubmitted);
        }
        if !self.can_submit() {
            return Err(SubmitError::Incomplete);
        }
        self.submitted = true;
        Ok(())
    }
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self::new(DobPolicy::default())
    }
}

impl Form for RegistrationForm {
    fn field_count(&self) -> usize {
        FieldId::ALL.len() + 1 // five fields plus the submit row
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(SUBMIT_ROW);
    }
    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let id = FieldId::ALL.get(self.active_field_index).copied()?;
        Some(self.field_mut(id))
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        FieldId::ALL.get(index).map(|id| self.field(*id))
    }
}
