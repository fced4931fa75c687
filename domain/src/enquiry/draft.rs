//! Enquiry draft entity

use super::contact_method::ContactMethod;
use super::field::EnquiryField;
use crate::core::error::DomainError;
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt::Display;
use std::str::FromStr;

/// Date format used by the form's date input.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// The in-progress contact enquiry (Entity)
///
/// Every field starts empty/unset and is edited independently. Nothing here
/// validates: a draft may hold any text until [`validate`](crate::validate)
/// judges it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnquiryDraft {
    pub first_name: String,
    pub project_description: String,
    pub email: String,
    pub confirm_email: String,
    pub phone: String,
    #[serde(deserialize_with = "blank_as_none")]
    pub preferred_contact: Option<ContactMethod>,
    #[serde(deserialize_with = "blank_as_none")]
    pub project_date: Option<NaiveDate>,
    pub duration: String,
}

impl EnquiryDraft {
    pub fn new() -> Self {
        Self::default()
    }

    // ==================== Builder Methods ====================

    pub fn with_first_name(mut self, value: impl Into<String>) -> Self {
        self.first_name = value.into();
        self
    }

    pub fn with_project_description(mut self, value: impl Into<String>) -> Self {
        self.project_description = value.into();
        self
    }

    pub fn with_email(mut self, value: impl Into<String>) -> Self {
        self.email = value.into();
        self
    }

    pub fn with_confirm_email(mut self, value: impl Into<String>) -> Self {
        self.confirm_email = value.into();
        self
    }

    pub fn with_phone(mut self, value: impl Into<String>) -> Self {
        self.phone = value.into();
        self
    }

    pub fn with_preferred_contact(mut self, method: ContactMethod) -> Self {
        self.preferred_contact = Some(method);
        self
    }

    pub fn with_project_date(mut self, date: NaiveDate) -> Self {
        self.project_date = Some(date);
        self
    }

    pub fn with_duration(mut self, value: impl Into<String>) -> Self {
        self.duration = value.into();
        self
    }

    // ==================== Raw Edits ====================

    /// Overwrite one field from raw form text.
    ///
    /// Text fields take the value verbatim. For the contact method and the
    /// date, blank text unsets the field and unparseable text is rejected
    /// with the draft left unchanged.
    pub fn set(&mut self, field: EnquiryField, raw: &str) -> Result<(), DomainError> {
        match field {
            EnquiryField::FirstName => self.first_name = raw.to_string(),
            EnquiryField::ProjectDescription => self.project_description = raw.to_string(),
            EnquiryField::Email => self.email = raw.to_string(),
            EnquiryField::ConfirmEmail => self.confirm_email = raw.to_string(),
            EnquiryField::Phone => self.phone = raw.to_string(),
            EnquiryField::PreferredContact => {
                self.preferred_contact = if raw.trim().is_empty() {
                    None
                } else {
                    Some(raw.parse()?)
                };
            }
            EnquiryField::ProjectDate => {
                self.project_date = parse_optional_date(raw)?;
            }
            EnquiryField::Duration => self.duration = raw.to_string(),
        }
        Ok(())
    }

    /// Reset one field to empty/unset.
    pub fn clear(&mut self, field: EnquiryField) {
        match field {
            EnquiryField::FirstName => self.first_name.clear(),
            EnquiryField::ProjectDescription => self.project_description.clear(),
            EnquiryField::Email => self.email.clear(),
            EnquiryField::ConfirmEmail => self.confirm_email.clear(),
            EnquiryField::Phone => self.phone.clear(),
            EnquiryField::PreferredContact => self.preferred_contact = None,
            EnquiryField::ProjectDate => self.project_date = None,
            EnquiryField::Duration => self.duration.clear(),
        }
    }

    /// Display text for one field; empty when unset.
    pub fn value(&self, field: EnquiryField) -> String {
        match field {
            EnquiryField::FirstName => self.first_name.clone(),
            EnquiryField::ProjectDescription => self.project_description.clone(),
            EnquiryField::Email => self.email.clone(),
            EnquiryField::ConfirmEmail => self.confirm_email.clone(),
            EnquiryField::Phone => self.phone.clone(),
            EnquiryField::PreferredContact => self
                .preferred_contact
                .map(|m| m.to_string())
                .unwrap_or_default(),
            EnquiryField::ProjectDate => self
                .project_date
                .map(|d| d.format(DATE_FORMAT).to_string())
                .unwrap_or_default(),
            EnquiryField::Duration => self.duration.clone(),
        }
    }

    /// Whether every field is still empty/unset.
    pub fn is_blank(&self) -> bool {
        EnquiryField::ALL
            .iter()
            .all(|field| self.value(*field).trim().is_empty())
    }
}

fn parse_optional_date(raw: &str) -> Result<Option<NaiveDate>, DomainError> {
    let raw = raw.trim();
    if raw.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(raw, DATE_FORMAT)
        .map(Some)
        .map_err(|_| DomainError::InvalidDate(raw.to_string()))
}

/// Deserialize an optional value where `""` (what an untouched form control
/// submits) means unset.
fn blank_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: Display,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw {
        Some(s) if !s.trim().is_empty() => s
            .trim()
            .parse()
            .map(Some)
            .map_err(serde::de::Error::custom),
        _ => Ok(None),
    }
}
