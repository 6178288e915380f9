use crate::gateway::SubmissionResult;
use std::borrow::Cow;

/// HTTP status the user service answers with when the email is already registered.
pub const CONFLICT_STATUS: u16 = 409;

/// A specialized [`RegistrationError`] enum of this crate.
#[nwatch_derive::nwatch_error]
pub enum RegistrationError {
    /// The request never produced a response (connect, TLS, timeout, body encoding).
    #[error("Registration transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The service answered with a non-success status.
    #[error("Registration rejected with status {status}{}: {message}", format_context(.context))]
    Rejected { status: u16, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// The client was configured with an unusable endpoint.
    #[error("Registration config error{}: {message}", format_context(.context))]
    Config { message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// Internal fallback for unexpected issues or logic errors.
    #[error("Internal registration error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

impl RegistrationError {
    /// Maps the failure onto the user-facing outcome category.
    #[must_use]
    pub fn classify(&self) -> SubmissionResult {
        match self {
            Self::Rejected { status: CONFLICT_STATUS, .. } => SubmissionResult::DuplicateConflict,
            _ => SubmissionResult::GenericFailure,
        }
    }

    /// Returns the HTTP status when the service produced one.
    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Rejected { status, .. } => Some(*status),
            Self::Transport { source, .. } => source.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}
