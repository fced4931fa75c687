//! Domain layer for folio
//!
//! This crate contains the enquiry validation rules, the typed enquiry
//! records, and the portfolio content model. It has no dependencies on
//! infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Enquiry
//!
//! A contact enquiry moves through three shapes:
//!
//! - **Draft** ([`EnquiryDraft`]): the mutable record the form edits
//! - **ErrorSet** ([`ErrorSet`]): per-field failures produced by [`validate`]
//! - **Accepted** ([`AcceptedEnquiry`]): an immutable snapshot of a draft that passed
//!
//! ## Portfolio
//!
//! Static showcase content ([`Profile`]) rendered by the presentation layer.

pub mod config;
pub mod core;
pub mod enquiry;
pub mod portfolio;

// Re-export commonly used types
pub use config::OutputFormat;
pub use core::error::DomainError;
pub use enquiry::{
    accepted::AcceptedEnquiry,
    contact_method::ContactMethod,
    draft::EnquiryDraft,
    error_set::{ErrorSet, FieldError},
    field::EnquiryField,
    rules::{emails_match, is_at_least_one_day_ahead, is_valid_email, is_valid_phone},
    validator::validate,
};
pub use portfolio::{
    profile::{
        EducationEntry, Hero, Profile, Project, Skill, SkillLevel, SocialLink, WorkExperience,
    },
    section::Section,
};
