//! Accepted enquiry value object

use super::contact_method::ContactMethod;
use super::draft::EnquiryDraft;
use super::error_set::ErrorSet;
use super::field::EnquiryField;
use super::validator::validate;
use chrono::NaiveDate;
use serde::Serialize;

/// A draft that passed validation at the moment it was submitted (Value Object)
///
/// The only way to build one is [`AcceptedEnquiry::accept`], so holding an
/// `AcceptedEnquiry` proves the snapshot was valid when taken. It never
/// changes afterwards; a later submission produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AcceptedEnquiry {
    draft: EnquiryDraft,
}

impl AcceptedEnquiry {
    /// Validate `draft` against `today`; on success take a snapshot of it.
    pub fn accept(draft: &EnquiryDraft, today: NaiveDate) -> Result<Self, ErrorSet> {
        let errors = validate(draft, today);
        if errors.is_empty() {
            Ok(Self {
                draft: draft.clone(),
            })
        } else {
            Err(errors)
        }
    }

    /// The snapshot as submitted
    pub fn draft(&self) -> &EnquiryDraft {
        &self.draft
    }

    pub fn first_name(&self) -> &str {
        &self.draft.first_name
    }

    pub fn email(&self) -> &str {
        &self.draft.email
    }

    /// Always set on an accepted enquiry.
    pub fn preferred_contact(&self) -> Option<ContactMethod> {
        self.draft.preferred_contact
    }

    /// Always set on an accepted enquiry.
    pub fn project_date(&self) -> Option<NaiveDate> {
        self.draft.project_date
    }

    /// `(label, value)` rows for a read-only summary, in form order.
    pub fn summary_rows(&self) -> Vec<(&'static str, String)> {
        EnquiryField::ALL
            .into_iter()
            .map(|field| (field.label(), self.draft.value(field)))
            .collect()
    }
}
