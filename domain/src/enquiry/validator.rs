//! Whole-draft validation pass.

use super::draft::EnquiryDraft;
use super::error_set::{ErrorSet, FieldError};
use super::field::EnquiryField;
use super::rules::{emails_match, is_at_least_one_day_ahead, is_valid_email, is_valid_phone};
use chrono::NaiveDate;

/// Validate every field of `draft` and collect all failures.
///
/// Fields are checked unconditionally; one failure never hides another, so
/// the caller can show every message at once. `today` is the only outside
/// input (used by the start-date rule), which keeps this a pure function.
pub fn validate(draft: &EnquiryDraft, today: NaiveDate) -> ErrorSet {
    EnquiryField::ALL
        .into_iter()
        .filter_map(|field| check_field(draft, field, today))
        .collect()
}

/// Check one field, returning its failure if any.
pub fn check_field(
    draft: &EnquiryDraft,
    field: EnquiryField,
    today: NaiveDate,
) -> Option<FieldError> {
    let missing = FieldError::Missing(field);

    match field {
        EnquiryField::FirstName => is_blank(&draft.first_name).then_some(missing),
        EnquiryField::ProjectDescription => is_blank(&draft.project_description).then_some(missing),
        EnquiryField::Email => {
            if is_blank(&draft.email) {
                Some(missing)
            } else if !is_valid_email(&draft.email) {
                Some(FieldError::InvalidEmail)
            } else {
                None
            }
        }
        EnquiryField::ConfirmEmail => {
            if is_blank(&draft.confirm_email) {
                Some(missing)
            } else if !emails_match(&draft.email, &draft.confirm_email) {
                Some(FieldError::EmailMismatch)
            } else {
                None
            }
        }
        EnquiryField::Phone => {
            if is_blank(&draft.phone) {
                Some(missing)
            } else if !is_valid_phone(&draft.phone) {
                Some(FieldError::InvalidPhone)
            } else {
                None
            }
        }
        EnquiryField::PreferredContact => draft.preferred_contact.is_none().then_some(missing),
        EnquiryField::ProjectDate => match draft.project_date {
            None => Some(missing),
            Some(date) if !is_at_least_one_day_ahead(date, today) => Some(FieldError::DateTooSoon),
            Some(_) => None,
        },
        EnquiryField::Duration => is_blank(&draft.duration).then_some(missing),
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}
