//! Page sections for anchor navigation

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One section of the single-page portfolio, in page order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Home,
    About,
    Portfolio,
    Contact,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::About,
        Section::Portfolio,
        Section::Contact,
    ];

    /// Anchor id (`#home`, `#about`, ...)
    pub fn anchor(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::About => "about",
            Section::Portfolio => "portfolio",
            Section::Contact => "contact",
        }
    }

    /// Navigation bar title
    pub fn title(&self) -> &'static str {
        match self {
            Section::Home => "Home",
            Section::About => "About Me",
            Section::Portfolio => "Portfolio",
            Section::Contact => "Get In Touch",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.anchor())
    }
}

impl std::str::FromStr for Section {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().trim_start_matches('#').to_lowercase().as_str() {
            "home" | "hero" => Ok(Section::Home),
            "about" | "about-me" | "education" | "skills" => Ok(Section::About),
            "portfolio" | "projects" | "work" => Ok(Section::Portfolio),
            "contact" => Ok(Section::Contact),
            _ => Err(DomainError::UnknownSection(s.to_string())),
        }
    }
}
