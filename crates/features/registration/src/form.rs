//! Registration form state and its transitions.
//!
//! [`RegistrationForm`] is plain data. Every transition is a synchronous
//! method, which keeps the state machine testable without a runtime; the
//! controller applies them inside the `watch` channel.

use crate::field::{FieldId, TextControl};
use crate::gateway::SubmissionResult;
use crate::model::UserPayload;
use crate::validator::{self, FieldError};
use strum::IntoEnumIterator;

/// Submission lifecycle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

/// Why a submit did not start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SubmitRejection {
    /// At least one field fails validation; all fields are now touched.
    Invalid,
    /// A previous submission has not settled yet.
    AlreadySubmitting,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationForm {
    first_name: TextControl,
    last_name: TextControl,
    email: TextControl,
    notification_enabled: bool,
    status: SubmissionStatus,
    last_result: Option<SubmissionResult>,
}

impl Default for RegistrationForm {
    fn default() -> Self {
        Self {
            first_name: TextControl::default(),
            last_name: TextControl::default(),
            email: TextControl::default(),
            notification_enabled: true,
            status: SubmissionStatus::Idle,
            last_result: None,
        }
    }
}

impl RegistrationForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn control(&self, field: FieldId) -> &TextControl {
        match field {
            FieldId::FirstName => &self.first_name,
            FieldId::LastName => &self.last_name,
            FieldId::Email => &self.email,
        }
    }

    const fn control_mut(&mut self, field: FieldId) -> &mut TextControl {
        match field {
            FieldId::FirstName => &mut self.first_name,
            FieldId::LastName => &mut self.last_name,
            FieldId::Email => &mut self.email,
        }
    }

    #[must_use]
    pub fn value(&self, field: FieldId) -> &str {
        self.control(field).value()
    }

    #[must_use]
    pub const fn notification_enabled(&self) -> bool {
        self.notification_enabled
    }

    #[must_use]
    pub const fn status(&self) -> SubmissionStatus {
        self.status
    }

    /// Result of the last settled submission, cleared when a new one starts.
    #[must_use]
    pub const fn last_result(&self) -> Option<SubmissionResult> {
        self.last_result
    }

    #[must_use]
    pub const fn is_submitting(&self) -> bool {
        matches!(self.status, SubmissionStatus::Submitting)
    }

    /// `true` only after a submission settled with [`SubmissionResult::Success`].
    #[must_use]
    pub const fn submit_success(&self) -> bool {
        matches!(self.last_result, Some(SubmissionResult::Success))
    }

    pub fn set_value(&mut self, field: FieldId, value: impl Into<String>) {
        self.control_mut(field).set(value.into());
    }

    pub const fn set_notification_enabled(&mut self, enabled: bool) {
        self.notification_enabled = enabled;
    }

    /// Marks a field as visited (blur).
    pub const fn touch(&mut self, field: FieldId) {
        self.control_mut(field).touch();
    }

    pub fn touch_all(&mut self) {
        FieldId::iter().for_each(|field| self.touch(field));
    }

    /// Current rule violations of `field`, touched or not.
    #[must_use]
    pub fn errors(&self, field: FieldId) -> Vec<FieldError> {
        validator::validate(field, self.value(field))
    }

    #[must_use]
    pub fn is_valid(&self) -> bool {
        FieldId::iter().all(|field| validator::is_valid(field, self.value(field)))
    }

    /// A field is shown as invalid only once touched.
    #[must_use]
    pub fn is_field_invalid(&self, field: FieldId) -> bool {
        self.control(field).is_touched() && !validator::is_valid(field, self.value(field))
    }

    /// Wire payload built from the raw values.
    #[must_use]
    pub fn payload(&self) -> UserPayload {
        UserPayload::new(
            self.first_name.value(),
            self.last_name.value(),
            self.email.value(),
            self.notification_enabled,
        )
    }

    /// Passes the validator gate and enters [`SubmissionStatus::Submitting`].
    ///
    /// An invalid form gets all fields touched so their errors become visible.
    ///
    /// # Errors
    /// Returns the [`SubmitRejection`] when the submission must not start.
    pub fn begin_submit(&mut self) -> Result<UserPayload, SubmitRejection> {
        if self.is_submitting() {
            return Err(SubmitRejection::AlreadySubmitting);
        }
        if !self.is_valid() {
            self.touch_all();
            return Err(SubmitRejection::Invalid);
        }

        self.status = SubmissionStatus::Submitting;
        self.last_result = None;
        Ok(self.payload())
    }

    /// Records the outcome of the request started by [`Self::begin_submit`].
    ///
    /// A success resets every field to its initial value.
    pub fn settle(&mut self, result: SubmissionResult) {
        if result == SubmissionResult::Success {
            self.reset();
            self.status = SubmissionStatus::Succeeded;
        } else {
            self.status = SubmissionStatus::Failed;
        }
        self.last_result = Some(result);
    }

    /// Leaves `Submitting` without a result, used when a submission is dropped mid-flight.
    pub const fn abandon(&mut self) {
        if self.is_submitting() {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Returns to idle after the post-success redirect.
    pub const fn mark_idle(&mut self) {
        if matches!(self.status, SubmissionStatus::Succeeded) {
            self.status = SubmissionStatus::Idle;
        }
    }

    /// Restores the initial values and clears interaction flags.
    pub fn reset(&mut self) {
        self.first_name = TextControl::default();
        self.last_name = TextControl::default();
        self.email = TextControl::default();
        self.notification_enabled = true;
    }
}
