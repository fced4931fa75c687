//! Per-field validation failures

use super::field::EnquiryField;
use serde::ser::{Serialize, SerializeMap, Serializer};
use std::collections::BTreeMap;
use std::fmt;

/// Why one field failed validation.
///
/// "Missing" always wins over the format-specific variants: a field that is
/// empty is reported as empty, never as malformed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldError {
    /// Empty after trimming, or unset
    Missing(EnquiryField),
    /// Email does not look like `local@domain.tld`
    InvalidEmail,
    /// Confirmation email differs from the email
    EmailMismatch,
    /// Phone is not a UK-style number
    InvalidPhone,
    /// Start date is today or earlier
    DateTooSoon,
}

impl FieldError {
    /// The field this failure belongs to
    pub fn field(&self) -> EnquiryField {
        match self {
            FieldError::Missing(field) => *field,
            FieldError::InvalidEmail => EnquiryField::Email,
            FieldError::EmailMismatch => EnquiryField::ConfirmEmail,
            FieldError::InvalidPhone => EnquiryField::Phone,
            FieldError::DateTooSoon => EnquiryField::ProjectDate,
        }
    }

    /// Message shown under the field
    pub fn message(&self) -> &'static str {
        match self {
            FieldError::Missing(field) => match field {
                EnquiryField::FirstName => "Please enter your first name.",
                EnquiryField::ProjectDescription => "Please describe your project.",
                EnquiryField::Email => "Please enter your email.",
                EnquiryField::ConfirmEmail => "Please confirm your email.",
                EnquiryField::Phone => "Please enter your phone number.",
                EnquiryField::PreferredContact => "Please choose how you'd like to be contacted.",
                EnquiryField::ProjectDate => "Please select a project start date.",
                EnquiryField::Duration => "Please enter your project duration.",
            },
            FieldError::InvalidEmail => "Please enter a valid email (e.g., name@email.com).",
            FieldError::EmailMismatch => "Emails do not match.",
            FieldError::InvalidPhone => {
                "Please enter a valid phone number (e.g., +447123456789 or 07123456789)."
            }
            FieldError::DateTooSoon => "Start date must be at least one day in the future.",
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, FieldError::Missing(_))
    }
}

impl fmt::Display for FieldError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

/// Failures for a whole draft, at most one per field.
///
/// Empty means the draft is valid. Iteration is in form order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorSet {
    errors: BTreeMap<EnquiryField, FieldError>,
}

impl ErrorSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a failure, replacing any earlier one for the same field.
    pub fn insert(&mut self, error: FieldError) {
        self.errors.insert(error.field(), error);
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn len(&self) -> usize {
        self.errors.len()
    }

    pub fn get(&self, field: EnquiryField) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Message for one field, if it failed
    pub fn message(&self, field: EnquiryField) -> Option<&'static str> {
        self.errors.get(&field).map(FieldError::message)
    }

    pub fn contains(&self, field: EnquiryField) -> bool {
        self.errors.contains_key(&field)
    }

    /// Failing fields, in form order
    pub fn fields(&self) -> impl Iterator<Item = EnquiryField> + '_ {
        self.errors.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (EnquiryField, &FieldError)> + '_ {
        self.errors.iter().map(|(field, error)| (*field, error))
    }
}

impl FromIterator<FieldError> for ErrorSet {
    fn from_iter<I: IntoIterator<Item = FieldError>>(iter: I) -> Self {
        let mut set = ErrorSet::new();
        for error in iter {
            set.insert(error);
        }
        set
    }
}

/// Serialized as `{ "firstName": "Please enter your first name.", ... }`
impl Serialize for ErrorSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (field, error) in &self.errors {
            map.serialize_entry(field.as_str(), error.message())?;
        }
        map.end()
    }
}
