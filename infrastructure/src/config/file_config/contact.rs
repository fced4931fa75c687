//! Contact configuration from TOML (`[contact]` section)

use folio_application::ContactConfig;
use folio_application::config::contact_config::{
    DEFAULT_RECIPIENT_EMAIL, DEFAULT_RECIPIENT_PHONE,
};
use serde::{Deserialize, Serialize};

/// Raw contact configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileContactConfig {
    /// Address enquiries are sent to
    pub recipient_email: String,
    /// Phone number shown on the contact card
    pub recipient_phone: Option<String>,
}

impl Default for FileContactConfig {
    fn default() -> Self {
        Self {
            recipient_email: DEFAULT_RECIPIENT_EMAIL.to_string(),
            recipient_phone: Some(DEFAULT_RECIPIENT_PHONE.to_string()),
        }
    }
}

impl FileContactConfig {
    /// Convert into the application-level config
    pub fn to_contact_config(&self) -> ContactConfig {
        ContactConfig {
            recipient_email: self.recipient_email.trim().to_string(),
            recipient_phone: self
                .recipient_phone
                .as_deref()
                .map(str::trim)
                .filter(|p| !p.is_empty())
                .map(str::to_string),
        }
    }
}
