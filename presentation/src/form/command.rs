//! Form command parsing

use folio_domain::{DomainError, EnquiryField};
use thiserror::Error;

/// One line of input to the enquiry form
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormCommand {
    /// Overwrite a field with raw text
    Set(EnquiryField, String),
    /// Reset a field to empty/unset
    Clear(EnquiryField),
    /// Show the form with current values and messages
    Show,
    /// List field names
    Fields,
    Submit,
    /// Dismiss the enquiry summary
    Close,
    /// Start a fresh enquiry
    Reset,
    Help,
    Quit,
}

/// Errors from parsing a form line
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FormCommandError {
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    #[error("Missing field name (try /fields)")]
    MissingField,

    #[error(transparent)]
    Field(#[from] DomainError),
}

impl FormCommand {
    /// Parse a trimmed, non-empty line.
    ///
    /// Accepts slash commands (`/set email a@b.com`) and the assignment
    /// shorthand (`email = a@b.com`). The value keeps its inner and trailing
    /// text as typed; only the separator after the field name is dropped.
    pub fn parse(line: &str) -> Result<Self, FormCommandError> {
        if let Some(rest) = line.strip_prefix('/') {
            let (name, args) = split_word(rest);
            return match name.to_lowercase().as_str() {
                "set" | "s" => {
                    let (field, value) = split_word(args);
                    Ok(FormCommand::Set(parse_field(field)?, value.to_string()))
                }
                "clear" | "c" => Ok(FormCommand::Clear(parse_field(args.trim())?)),
                "show" | "form" => Ok(FormCommand::Show),
                "fields" => Ok(FormCommand::Fields),
                "submit" | "send" => Ok(FormCommand::Submit),
                "close" | "dismiss" => Ok(FormCommand::Close),
                "reset" | "new" => Ok(FormCommand::Reset),
                "help" | "h" | "?" => Ok(FormCommand::Help),
                "quit" | "exit" | "q" => Ok(FormCommand::Quit),
                _ => Err(FormCommandError::UnknownCommand(line.to_string())),
            };
        }

        match line.split_once('=') {
            Some((field, value)) => Ok(FormCommand::Set(
                parse_field(field.trim())?,
                value.trim_start().to_string(),
            )),
            None => Err(FormCommandError::UnknownCommand(line.to_string())),
        }
    }
}

fn parse_field(name: &str) -> Result<EnquiryField, FormCommandError> {
    if name.is_empty() {
        return Err(FormCommandError::MissingField);
    }
    Ok(name.parse()?)
}

/// Split off the first whitespace-delimited word
fn split_word(s: &str) -> (&str, &str) {
    let s = s.trim_start();
    match s.find(char::is_whitespace) {
        Some(idx) => {
            let (word, rest) = s.split_at(idx);
            (word, rest.trim_start())
        }
        None => (s, ""),
    }
}
