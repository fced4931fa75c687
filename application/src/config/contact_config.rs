//! Contact recipient configuration.

use serde::{Deserialize, Serialize};

/// Default recipient address of enquiries
pub const DEFAULT_RECIPIENT_EMAIL: &str = "250365979@aston.ac.uk";

/// Default phone number on the contact card
pub const DEFAULT_RECIPIENT_PHONE: &str = "+44 783 367 4230";

/// Who enquiries are addressed to.
///
/// Supplied by the surrounding page, not by the enquirer: it appears on the
/// contact card and as the "To:" line of the enquiry summary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactConfig {
    pub recipient_email: String,
    pub recipient_phone: Option<String>,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient_email: DEFAULT_RECIPIENT_EMAIL.to_string(),
            recipient_phone: Some(DEFAULT_RECIPIENT_PHONE.to_string()),
        }
    }
}

impl ContactConfig {
    pub fn new(recipient_email: impl Into<String>) -> Self {
        Self {
            recipient_email: recipient_email.into(),
            recipient_phone: None,
        }
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.recipient_phone = Some(phone.into());
        self
    }

    /// `mailto:` link for the recipient
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.recipient_email)
    }
}
