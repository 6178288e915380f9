//! Pure, synchronous rule evaluation.

use crate::field::{FieldId, Rule};
use regex::Regex;
use std::sync::LazyLock;

const MAX_EMAIL_LENGTH: usize = 254;
const MAX_LOCAL_LENGTH: usize = 64;

/// A failed rule.
///
/// Variants are declared in display priority, so a sorted error list starts
/// with the error the presenter shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum FieldError {
    Required,
    Email,
    MinLength { required_length: usize, actual_length: usize },
}

/// Evaluates every rule of `field` against `value`.
///
/// The result is empty for a passing value and sorted by display priority
/// otherwise. An empty value yields only [`FieldError::Required`].
#[must_use]
pub fn validate(field: FieldId, value: &str) -> Vec<FieldError> {
    let mut errors: Vec<FieldError> =
        field.rules().iter().filter_map(|rule| check(*rule, value)).collect();
    errors.sort_unstable();
    errors
}

/// Convenience wrapper over [`validate`].
#[must_use]
pub fn is_valid(field: FieldId, value: &str) -> bool {
    validate(field, value).is_empty()
}

fn check(rule: Rule, value: &str) -> Option<FieldError> {
    match rule {
        Rule::Required => value.is_empty().then_some(FieldError::Required),
        // Length rules only apply to non-empty values, emptiness is `Required`'s job.
        // Counted in UTF-16 code units, like browser form validation.
        Rule::MinLength(required_length) => {
            let actual_length = value.encode_utf16().count();
            (!value.is_empty() && actual_length < required_length)
                .then_some(FieldError::MinLength { required_length, actual_length })
        },
        Rule::Email => (!value.is_empty() && !is_email_shaped(value)).then_some(FieldError::Email),
    }
}

/// Dot-atom local part, then hostname labels of 1..=63 characters that neither
/// start nor end with a hyphen. A dotless domain is accepted.
static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?(\.[A-Za-z0-9]([A-Za-z0-9-]{0,61}[A-Za-z0-9])?)*$",
    )
    .expect("EMAIL_REGEX: invalid regex pattern")
});

/// Checks the syntactic shape of an email address.
///
/// No DNS or deliverability checks. The pattern only admits ASCII, so the
/// length limits can be checked in bytes.
#[must_use]
pub fn is_email_shaped(value: &str) -> bool {
    value.len() <= MAX_EMAIL_LENGTH
        && value.find('@').is_some_and(|at| at <= MAX_LOCAL_LENGTH)
        && EMAIL_REGEX.is_match(value)
}
