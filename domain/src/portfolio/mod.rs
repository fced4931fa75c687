//! Portfolio showcase content.
//!
//! - [`profile::Profile`] - everything the page shows outside the contact form
//! - [`section::Section`] - the anchor-navigable sections of the page

pub mod profile;
pub mod section;
