//! Enquiry session use case
//!
//! Coordinates one contact form: raw edits go into the draft, a submit
//! validates the whole draft, and a valid submission is kept as the
//! accepted enquiry until the next one replaces it.
//!
//! ```text
//! Editing --attempt_submit (invalid)--> Editing (errors stored)
//! Editing --attempt_submit (valid)----> Confirming
//! Confirming --dismiss_summary--------> Editing
//! ```

use crate::ports::clock::Clock;
use folio_domain::{AcceptedEnquiry, DomainError, EnquiryDraft, EnquiryField, ErrorSet};
use std::fmt;
use std::sync::Arc;
use tracing::{debug, info};

/// Where the form is in its edit/confirm cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SessionState {
    /// Accepting edits; errors from the last rejected submit may be showing
    #[default]
    Editing,
    /// A submission was accepted and its summary is showing
    Confirming,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SessionState::Editing => write!(f, "editing"),
            SessionState::Confirming => write!(f, "confirming"),
        }
    }
}

/// Result of [`EnquirySession::attempt_submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome<'a> {
    /// Draft was valid; the summary should be shown
    Accepted(&'a AcceptedEnquiry),
    /// Draft was invalid; every failing field is listed
    Rejected(&'a ErrorSet),
}

impl SubmitOutcome<'_> {
    pub fn is_accepted(&self) -> bool {
        matches!(self, SubmitOutcome::Accepted(_))
    }
}

/// Session store for one interactive enquiry form
///
/// Exclusively owned by a single form; every operation runs to completion
/// synchronously, so no locking is involved.
pub struct EnquirySession<C: Clock> {
    clock: Arc<C>,
    draft: EnquiryDraft,
    errors: ErrorSet,
    accepted: Option<AcceptedEnquiry>,
    state: SessionState,
}

impl<C: Clock> EnquirySession<C> {
    /// Start editing with an all-empty draft
    pub fn new(clock: Arc<C>) -> Self {
        Self {
            clock,
            draft: EnquiryDraft::default(),
            errors: ErrorSet::default(),
            accepted: None,
            state: SessionState::Editing,
        }
    }

    /// Start from a pre-filled draft
    pub fn with_draft(mut self, draft: EnquiryDraft) -> Self {
        self.draft = draft;
        self
    }

    // ==================== Commands ====================

    /// Overwrite one draft field from raw text.
    ///
    /// No validation runs and stored errors are left as they are; they only
    /// change on the next submit.
    pub fn update_field(&mut self, field: EnquiryField, raw: &str) -> Result<(), DomainError> {
        self.draft.set(field, raw)?;
        debug!(field = %field, "Draft field updated");
        Ok(())
    }

    /// Reset one draft field to empty/unset.
    pub fn clear_field(&mut self, field: EnquiryField) {
        self.draft.clear(field);
        debug!(field = %field, "Draft field cleared");
    }

    /// Typed access to the draft for programmatic edits.
    pub fn draft_mut(&mut self) -> &mut EnquiryDraft {
        &mut self.draft
    }

    /// Swap in a whole new draft.
    pub fn replace_draft(&mut self, draft: EnquiryDraft) {
        self.draft = draft;
        debug!("Draft replaced");
    }

    /// Validate the current draft.
    ///
    /// On success the draft is snapshotted as the accepted enquiry, stored
    /// errors are cleared and the session moves to `Confirming`. On failure
    /// the new errors replace the old ones, the session is `Editing`, and
    /// any earlier accepted enquiry is kept.
    pub fn attempt_submit(&mut self) -> SubmitOutcome<'_> {
        let today = self.clock.today();

        match AcceptedEnquiry::accept(&self.draft, today) {
            Ok(accepted) => {
                info!(
                    contact = %accepted
                        .preferred_contact()
                        .map(|m| m.to_string())
                        .unwrap_or_default(),
                    "Enquiry accepted"
                );
                self.errors = ErrorSet::default();
                self.state = SessionState::Confirming;
                SubmitOutcome::Accepted(self.accepted.insert(accepted))
            }
            Err(errors) => {
                info!(
                    failing = %errors
                        .fields()
                        .map(|f| f.as_str())
                        .collect::<Vec<_>>()
                        .join(","),
                    "Enquiry rejected with {} error(s)",
                    errors.len()
                );
                self.errors = errors;
                self.state = SessionState::Editing;
                SubmitOutcome::Rejected(&self.errors)
            }
        }
    }

    /// Hide the confirmation summary.
    ///
    /// The accepted enquiry and the draft are both kept, so a follow-up
    /// enquiry can start from the previous one. No-op while editing.
    pub fn dismiss_summary(&mut self) {
        if self.state == SessionState::Confirming {
            self.state = SessionState::Editing;
            debug!("Summary dismissed");
        }
    }

    /// Clear the draft and any stored errors for a fresh enquiry.
    ///
    /// The accepted enquiry is kept.
    pub fn reset_draft(&mut self) {
        self.draft = EnquiryDraft::default();
        self.errors = ErrorSet::default();
        self.state = SessionState::Editing;
        debug!("Draft reset");
    }

    // ==================== Queries ====================

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// Whether the presentation layer should show the enquiry summary
    pub fn show_confirmation(&self) -> bool {
        self.state == SessionState::Confirming
    }

    /// Errors from the last submit (empty after a valid one)
    pub fn errors(&self) -> &ErrorSet {
        &self.errors
    }

    /// The most recently accepted enquiry, if any
    pub fn accepted(&self) -> Option<&AcceptedEnquiry> {
        self.accepted.as_ref()
    }

    pub fn draft(&self) -> &EnquiryDraft {
        &self.draft
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::clock::FixedClock;
    use chrono::NaiveDate;
    use folio_domain::{ContactMethod, FieldError};

    // ==================== Helper ====================

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()
    }

    fn session() -> EnquirySession<FixedClock> {
        EnquirySession::new(Arc::new(FixedClock::new(today())))
    }

    fn fill_valid(session: &mut EnquirySession<FixedClock>) {
        for (field, value) in [
            (EnquiryField::FirstName, "Karim"),
            (EnquiryField::ProjectDescription, "Build a site"),
            (EnquiryField::Email, "a@b.com"),
            (EnquiryField::ConfirmEmail, "A@B.com"),
            (EnquiryField::Phone, "07123456789"),
            (EnquiryField::PreferredContact, "email"),
            (EnquiryField::ProjectDate, "2026-10-20"),
            (EnquiryField::Duration, "2 weeks"),
        ] {
            session.update_field(field, value).unwrap();
        }
    }

    // ==================== Initial state ====================

    #[test]
    fn test_new_session_is_editing_with_empty_draft() {
        let session = session();
        assert_eq!(session.state(), SessionState::Editing);
        assert!(session.draft().is_blank());
        assert!(session.errors().is_empty());
        assert!(session.accepted().is_none());
        assert!(!session.show_confirmation());
    }

    // ==================== update_field ====================

    #[test]
    fn test_update_field_does_not_validate_or_clear_errors() {
        let mut session = session();
        session.attempt_submit();
        assert_eq!(session.errors().len(), 8);

        session.update_field(EnquiryField::FirstName, "Karim").unwrap();
        assert_eq!(session.draft().first_name, "Karim");
        assert_eq!(session.errors().len(), 8);
        assert!(session.errors().contains(EnquiryField::FirstName));
    }

    #[test]
    fn test_update_field_rejects_bad_date() {
        let mut session = session();
        let err = session
            .update_field(EnquiryField::ProjectDate, "soon")
            .unwrap_err();
        assert!(err.is_value_error());
        assert!(session.draft().project_date.is_none());
    }

    // ==================== attempt_submit ====================

    #[test]
    fn test_valid_submit_moves_to_confirming() {
        let mut session = session();
        fill_valid(&mut session);

        let outcome = session.attempt_submit();
        match outcome {
            SubmitOutcome::Accepted(accepted) => {
                assert_eq!(accepted.first_name(), "Karim");
                assert_eq!(accepted.preferred_contact(), Some(ContactMethod::Email));
            }
            SubmitOutcome::Rejected(errors) => panic!("unexpected errors: {errors:?}"),
        }

        assert_eq!(session.state(), SessionState::Confirming);
        assert!(session.show_confirmation());
        assert!(session.errors().is_empty());
        assert_eq!(session.accepted().unwrap().draft(), session.draft());
    }

    #[test]
    fn test_valid_submit_clears_previous_errors() {
        let mut session = session();
        session.attempt_submit();
        assert!(!session.errors().is_empty());

        fill_valid(&mut session);
        assert!(session.attempt_submit().is_accepted());
        assert!(session.errors().is_empty());
    }

    #[test]
    fn test_invalid_submit_stores_errors_and_stays_editing() {
        let mut session = session();
        fill_valid(&mut session);
        session
            .update_field(EnquiryField::ConfirmEmail, "different@b.com")
            .unwrap();

        let outcome = session.attempt_submit();
        assert!(!outcome.is_accepted());

        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.errors().len(), 1);
        assert_eq!(
            session.errors().get(EnquiryField::ConfirmEmail),
            Some(&FieldError::EmailMismatch)
        );
        assert!(session.accepted().is_none());
    }

    #[test]
    fn test_failed_resubmit_keeps_prior_accepted_enquiry() {
        let mut session = session();
        fill_valid(&mut session);
        session.attempt_submit();
        session.dismiss_summary();
        let previous = session.accepted().cloned();

        session.update_field(EnquiryField::Phone, "123456").unwrap();
        session.attempt_submit();

        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.accepted().cloned(), previous);
        assert_eq!(session.accepted().unwrap().draft().phone, "07123456789");
        assert!(session.errors().contains(EnquiryField::Phone));
    }

    #[test]
    fn test_new_valid_submit_replaces_accepted_enquiry() {
        let mut session = session();
        fill_valid(&mut session);
        session.attempt_submit();
        session.dismiss_summary();

        session.update_field(EnquiryField::Duration, "1 month").unwrap();
        assert!(session.attempt_submit().is_accepted());
        assert_eq!(session.accepted().unwrap().draft().duration, "1 month");
    }

    #[test]
    fn test_invalid_errors_overwrite_previous_errors() {
        let mut session = session();
        session.attempt_submit();
        assert_eq!(session.errors().len(), 8);

        fill_valid(&mut session);
        session.update_field(EnquiryField::Duration, " ").unwrap();
        session.attempt_submit();
        let fields: Vec<_> = session.errors().fields().collect();
        assert_eq!(fields, vec![EnquiryField::Duration]);
    }

    #[test]
    fn test_date_today_is_rejected_tomorrow_accepted() {
        let mut session = session();
        fill_valid(&mut session);
        session
            .update_field(EnquiryField::ProjectDate, "2026-10-19")
            .unwrap();
        session.attempt_submit();
        assert_eq!(
            session.errors().get(EnquiryField::ProjectDate),
            Some(&FieldError::DateTooSoon)
        );

        session
            .update_field(EnquiryField::ProjectDate, "2026-10-20")
            .unwrap();
        assert!(session.attempt_submit().is_accepted());
    }

    // ==================== dismiss_summary / reset ====================

    #[test]
    fn test_dismiss_returns_to_editing_and_keeps_data() {
        let mut session = session();
        fill_valid(&mut session);
        session.attempt_submit();

        session.dismiss_summary();
        assert_eq!(session.state(), SessionState::Editing);
        assert!(!session.show_confirmation());
        assert!(session.accepted().is_some());
        assert_eq!(session.draft().first_name, "Karim");
    }

    #[test]
    fn test_dismiss_while_editing_is_noop() {
        let mut session = session();
        session.attempt_submit();
        session.dismiss_summary();
        assert_eq!(session.state(), SessionState::Editing);
        assert_eq!(session.errors().len(), 8);
    }

    #[test]
    fn test_reset_draft_keeps_accepted() {
        let mut session = session();
        fill_valid(&mut session);
        session.attempt_submit();

        session.reset_draft();
        assert!(session.draft().is_blank());
        assert!(session.errors().is_empty());
        assert_eq!(session.state(), SessionState::Editing);
        assert!(session.accepted().is_some());
    }

    #[test]
    fn test_with_draft_prefills() {
        let draft = EnquiryDraft::new().with_first_name("Karim");
        let session = session().with_draft(draft);
        assert_eq!(session.draft().first_name, "Karim");
    }
}
