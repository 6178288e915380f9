//! Display strings and the render snapshot derived from form state.

use crate::field::FieldId;
use crate::form::RegistrationForm;
use crate::gateway::SubmissionResult;
use crate::validator::FieldError;
use strum::IntoEnumIterator;

pub const SUCCESS_MESSAGE: &str = "User registered successfully!";
pub const CONFLICT_MESSAGE: &str = "A user with this email already exists.";
pub const FAILURE_MESSAGE: &str = "An error occurred while registering. Please try again.";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BannerKind {
    Success,
    Failure,
}

/// Top-level feedback after a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Banner {
    pub kind: BannerKind,
    pub message: &'static str,
}

impl Banner {
    #[must_use]
    pub const fn for_result(result: SubmissionResult) -> Self {
        match result {
            SubmissionResult::Success => Self { kind: BannerKind::Success, message: SUCCESS_MESSAGE },
            SubmissionResult::DuplicateConflict => {
                Self { kind: BannerKind::Failure, message: CONFLICT_MESSAGE }
            },
            SubmissionResult::GenericFailure => {
                Self { kind: BannerKind::Failure, message: FAILURE_MESSAGE }
            },
        }
    }
}

/// Render state of a text input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub id: FieldId,
    pub label: &'static str,
    pub value: String,
    /// The user has edited the value at least once.
    pub dirty: bool,
    pub invalid: bool,
    /// Empty unless `invalid`.
    pub message: String,
}

/// Everything a front-end needs to draw the form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormView {
    pub fields: Vec<FieldView>,
    pub notification_enabled: bool,
    pub banner: Option<Banner>,
    pub is_submitting: bool,
    /// The submit control is disabled while a request is in flight.
    pub can_submit: bool,
}

impl FormView {
    #[must_use]
    pub fn field(&self, id: FieldId) -> Option<&FieldView> {
        self.fields.iter().find(|field| field.id == id)
    }

    /// Messages of all fields currently shown as invalid.
    pub fn visible_errors(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.fields.iter().filter(|f| f.invalid).map(|f| (f.label, f.message.as_str()))
    }
}

/// Text for one field error.
#[must_use]
pub fn message_for(field: FieldId, error: FieldError) -> String {
    match error {
        FieldError::Required => format!("{} is required.", field.label()),
        FieldError::Email => EMAIL_MESSAGE.to_owned(),
        FieldError::MinLength { required_length, .. } => {
            format!("{} must be at least {required_length} characters.", field.label())
        },
    }
}

/// The message shown under `field`, or an empty string when it is not invalid.
#[must_use]
pub fn error_message(form: &RegistrationForm, field: FieldId) -> String {
    if !form.is_field_invalid(field) {
        return String::new();
    }
    form.errors(field).first().map_or_else(String::new, |error| message_for(field, *error))
}

#[must_use]
pub fn banner(form: &RegistrationForm) -> Option<Banner> {
    form.last_result().map(Banner::for_result)
}

#[must_use]
pub fn render(form: &RegistrationForm) -> FormView {
    let fields = FieldId::iter()
        .map(|id| FieldView {
            id,
            label: id.label(),
            value: form.value(id).to_owned(),
            dirty: form.control(id).is_dirty(),
            invalid: form.is_field_invalid(id),
            message: error_message(form, id),
        })
        .collect();

    FormView {
        fields,
        notification_enabled: form.notification_enabled(),
        banner: banner(form),
        is_submitting: form.is_submitting(),
        can_submit: !form.is_submitting(),
    }
}
