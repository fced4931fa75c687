//! Application layer for folio
//!
//! This crate contains the enquiry session use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::ContactConfig;
pub use ports::clock::{Clock, FixedClock};
pub use use_cases::enquiry_session::{EnquirySession, SessionState, SubmitOutcome};
