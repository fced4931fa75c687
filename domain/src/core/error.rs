//! Domain error types

use thiserror::Error;

/// Domain-level errors
///
/// These are contract errors raised while *building* domain values from raw
/// text. A draft that fails its field rules is not an error: that outcome is
/// an [`ErrorSet`](crate::ErrorSet).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Unknown enquiry field: {0}")]
    UnknownField(String),

    #[error("Invalid contact method: {0} (expected \"email\" or \"phone\")")]
    InvalidContactMethod(String),

    #[error("Invalid date: {0} (expected YYYY-MM-DD)")]
    InvalidDate(String),

    #[error("Unknown section: {0}")]
    UnknownSection(String),
}

impl DomainError {
    /// Check if this error came from parsing a field value (as opposed to a name)
    pub fn is_value_error(&self) -> bool {
        matches!(
            self,
            DomainError::InvalidContactMethod(_) | DomainError::InvalidDate(_)
        )
    }
}
