//! Application-level configuration.
//!
//! - [`ContactConfig`] - recipient details shown beside the form and in the summary

pub mod contact_config;

pub use contact_config::ContactConfig;
