//! Non-interactive enquiry check (`folio --enquiry <FILE>`)

use crate::output::formatter_for;
use chrono::NaiveDate;
use folio_application::ContactConfig;
use folio_domain::{AcceptedEnquiry, EnquiryDraft, OutputFormat};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use thiserror::Error;
use tracing::info;

/// Errors reading an enquiry draft file
#[derive(Error, Debug)]
pub enum EnquiryFileError {
    #[error("Failed to read enquiry file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse enquiry file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Rendered result of checking one draft
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnquiryCheck {
    /// Summary when accepted, the error list otherwise
    pub output: String,
    pub accepted: bool,
}

impl EnquiryCheck {
    /// Process exit status: failure when the draft was rejected
    pub fn exit_code(&self) -> ExitCode {
        if self.accepted {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Validate `draft` and render the outcome in `format`
pub fn check_enquiry(
    draft: &EnquiryDraft,
    today: NaiveDate,
    contact: &ContactConfig,
    format: OutputFormat,
) -> EnquiryCheck {
    let formatter = formatter_for(format);

    match AcceptedEnquiry::accept(draft, today) {
        Ok(accepted) => {
            info!("Enquiry accepted");
            EnquiryCheck {
                output: formatter.format_summary(&accepted, contact),
                accepted: true,
            }
        }
        Err(errors) => {
            info!(count = errors.len(), "Enquiry rejected");
            EnquiryCheck {
                output: formatter.format_errors(&errors),
                accepted: false,
            }
        }
    }
}

/// Read a JSON draft from `path`, then [`check_enquiry`] it
pub fn check_enquiry_file(
    path: &Path,
    today: NaiveDate,
    contact: &ContactConfig,
    format: OutputFormat,
) -> Result<EnquiryCheck, EnquiryFileError> {
    let content = std::fs::read_to_string(path).map_err(|source| EnquiryFileError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let draft: EnquiryDraft =
        serde_json::from_str(&content).map_err(|source| EnquiryFileError::Parse {
            path: path.to_path_buf(),
            source,
        })?;

    Ok(check_enquiry(&draft, today, contact, format))
}
