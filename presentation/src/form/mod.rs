//! Enquiry form
//!
//! A line-oriented rendition of the contact form: each line edits one field
//! or issues a command against the enquiry session. A draft saved as JSON can
//! also be checked in one shot.

mod check;
mod command;
mod repl;

pub use check::{EnquiryCheck, EnquiryFileError, check_enquiry, check_enquiry_file};
pub use command::{FormCommand, FormCommandError};
pub use repl::{EnquiryRepl, LineOutcome};
