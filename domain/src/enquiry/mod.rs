//! Contact enquiry subdomain.
//!
//! - [`field::EnquiryField`] - the closed set of form fields
//! - [`draft::EnquiryDraft`] - the in-progress record
//! - [`rules`] - pure per-field predicates
//! - [`validator::validate`] - the whole-draft validation pass
//! - [`error_set::ErrorSet`] - per-field failures
//! - [`accepted::AcceptedEnquiry`] - a snapshot that passed validation

pub mod accepted;
pub mod contact_method;
pub mod draft;
pub mod error_set;
pub mod field;
pub mod rules;
pub mod validator;
