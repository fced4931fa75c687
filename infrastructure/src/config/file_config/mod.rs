//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod contact;
mod output;
mod portfolio;
mod repl;

pub use contact::FileContactConfig;
pub use output::FileOutputConfig;
pub use portfolio::FilePortfolioConfig;
pub use repl::FileReplConfig;

use folio_domain::is_valid_email;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("contact.recipient_email cannot be empty")]
    EmptyRecipientEmail,

    #[error("contact.recipient_email is not a valid email: {0}")]
    InvalidRecipientEmail(String),

    #[error("portfolio.profile_file is empty; the bundled profile is used")]
    EmptyProfilePath,
}

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Enquiry recipient settings
    pub contact: FileContactConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Enquiry form REPL settings
    pub repl: FileReplConfig,
    /// Showcase content settings
    pub portfolio: FilePortfolioConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut issues = Vec::new();

        let email = self.contact.recipient_email.trim();
        if email.is_empty() {
            issues.push(ConfigValidationError::EmptyRecipientEmail);
        } else if !is_valid_email(email) {
            issues.push(ConfigValidationError::InvalidRecipientEmail(
                email.to_string(),
            ));
        }

        if let Some(path) = &self.portfolio.profile_file
            && path.trim().is_empty()
        {
            issues.push(ConfigValidationError::EmptyProfilePath);
        }

        issues
    }
}
