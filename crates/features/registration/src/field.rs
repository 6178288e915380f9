//! Static field model of the registration form.

use strum_macros::{Display, EnumIter, IntoStaticStr};

/// Text fields of the registration form.
///
/// The string form (`firstName`, `lastName`, `email`) matches the wire keys and
/// is used as the input name by the front-ends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, IntoStaticStr)]
#[strum(serialize_all = "camelCase")]
pub enum FieldId {
    FirstName,
    LastName,
    Email,
}

/// A single validation rule attached to a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rule {
    /// The value must not be empty.
    Required,
    /// A non-empty value must have at least this many characters.
    MinLength(usize),
    /// A non-empty value must look like an email address.
    Email,
}

/// Minimum length of both name fields.
pub const NAME_MIN_LENGTH: usize = 2;

const NAME_RULES: &[Rule] = &[Rule::Required, Rule::MinLength(NAME_MIN_LENGTH)];
const EMAIL_RULES: &[Rule] = &[Rule::Required, Rule::Email];

impl FieldId {
    /// Every field in display order.
    pub const ALL: [Self; 3] = [Self::FirstName, Self::LastName, Self::Email];

    /// Human-readable label used in messages.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::FirstName => "First name",
            Self::LastName => "Last name",
            Self::Email => "Email",
        }
    }

    /// The fixed rule set of the field.
    #[must_use]
    pub const fn rules(self) -> &'static [Rule] {
        match self {
            Self::FirstName | Self::LastName => NAME_RULES,
            Self::Email => EMAIL_RULES,
        }
    }
}

/// Value and interaction flags of a text input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextControl {
    value: String,
    touched: bool,
    dirty: bool,
}

impl TextControl {
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Set once the input lost focus (or on a rejected submit).
    #[must_use]
    pub const fn is_touched(&self) -> bool {
        self.touched
    }

    /// Set once the user changed the value.
    #[must_use]
    pub const fn is_dirty(&self) -> bool {
        self.dirty
    }

    pub(crate) fn set(&mut self, value: String) {
        self.value = value;
        self.dirty = true;
    }

    pub(crate) const fn touch(&mut self) {
        self.touched = true;
    }
}
