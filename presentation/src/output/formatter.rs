//! Output formatter trait

use folio_application::ContactConfig;
use folio_domain::{AcceptedEnquiry, ErrorSet, Profile, Section};

/// Trait for rendering the page and enquiry results
pub trait OutputFormatter {
    /// Render the given sections of the page, optionally filtering the
    /// project showcase by tag
    fn format_page(
        &self,
        profile: &Profile,
        contact: &ContactConfig,
        sections: &[Section],
        tag: Option<&str>,
    ) -> String;

    /// Render every failing field of a rejected enquiry
    fn format_errors(&self, errors: &ErrorSet) -> String;

    /// Render the read-only summary of an accepted enquiry
    fn format_summary(&self, accepted: &AcceptedEnquiry, contact: &ContactConfig) -> String;
}
