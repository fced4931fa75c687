//! Enquiry form field names

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One field of the contact enquiry form.
///
/// Variant order is the order the form presents them, and `Ord` follows it,
/// so maps keyed by `EnquiryField` iterate in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EnquiryField {
    FirstName,
    ProjectDescription,
    Email,
    ConfirmEmail,
    Phone,
    PreferredContact,
    ProjectDate,
    Duration,
}

impl EnquiryField {
    /// Every field, in form order.
    pub const ALL: [EnquiryField; 8] = [
        EnquiryField::FirstName,
        EnquiryField::ProjectDescription,
        EnquiryField::Email,
        EnquiryField::ConfirmEmail,
        EnquiryField::Phone,
        EnquiryField::PreferredContact,
        EnquiryField::ProjectDate,
        EnquiryField::Duration,
    ];

    /// Form key for this field (camelCase)
    pub fn as_str(&self) -> &'static str {
        match self {
            EnquiryField::FirstName => "firstName",
            EnquiryField::ProjectDescription => "projectDescription",
            EnquiryField::Email => "email",
            EnquiryField::ConfirmEmail => "confirmEmail",
            EnquiryField::Phone => "phone",
            EnquiryField::PreferredContact => "preferredContact",
            EnquiryField::ProjectDate => "projectDate",
            EnquiryField::Duration => "duration",
        }
    }

    /// Human-readable label shown next to the input
    pub fn label(&self) -> &'static str {
        match self {
            EnquiryField::FirstName => "First Name",
            EnquiryField::ProjectDescription => "Project Description",
            EnquiryField::Email => "Email",
            EnquiryField::ConfirmEmail => "Confirm Email",
            EnquiryField::Phone => "Phone Number",
            EnquiryField::PreferredContact => "Preferred Contact Method",
            EnquiryField::ProjectDate => "Project Start Date",
            EnquiryField::Duration => "Project Duration",
        }
    }

    /// Input hint for fields that have one
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            EnquiryField::Phone => Some("+44 7123 456 789"),
            EnquiryField::PreferredContact => Some("email | phone"),
            EnquiryField::ProjectDate => Some("YYYY-MM-DD"),
            EnquiryField::Duration => Some("e.g., 2 weeks, 1 month"),
            _ => None,
        }
    }
}

impl fmt::Display for EnquiryField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EnquiryField {
    type Err = DomainError;

    /// Accepts `confirmEmail`, `confirm_email`, or `confirm-email` (any case).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .trim()
            .chars()
            .filter(|c| *c != '_' && *c != '-')
            .collect::<String>()
            .to_lowercase();

        EnquiryField::ALL
            .into_iter()
            .find(|field| field.as_str().to_lowercase() == normalized)
            .ok_or_else(|| DomainError::UnknownField(s.to_string()))
    }
}
