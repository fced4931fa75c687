//! Presentation layer for folio
//!
//! This crate contains CLI definitions, output formatters for the portfolio
//! sections and enquiry results, and the interactive enquiry form.

pub mod cli;
pub mod config;
pub mod form;
pub mod output;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormatArg};
pub use config::{OutputConfig, ReplConfig};
pub use form::{
    EnquiryCheck, EnquiryFileError, EnquiryRepl, FormCommand, FormCommandError, LineOutcome,
    check_enquiry, check_enquiry_file,
};
pub use output::{
    console::ConsoleFormatter, formatter::OutputFormatter, formatter_for, json::JsonFormatter,
};
