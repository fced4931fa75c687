//! Preferred contact method value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How the enquirer would like to be contacted back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContactMethod {
    Email,
    Phone,
}

impl ContactMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContactMethod::Email => "email",
            ContactMethod::Phone => "phone",
        }
    }
}

impl fmt::Display for ContactMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ContactMethod {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "email" | "e-mail" => Ok(ContactMethod::Email),
            "phone" | "telephone" | "tel" => Ok(ContactMethod::Phone),
            _ => Err(DomainError::InvalidContactMethod(s.to_string())),
        }
    }
}
