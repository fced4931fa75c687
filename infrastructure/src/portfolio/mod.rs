//! Portfolio profile loading
//!
//! The default profile is compiled into the binary; a config entry can point
//! at a replacement TOML file with the same shape.

use folio_domain::Profile;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Profile shipped with the binary
const BUNDLED_PROFILE: &str = include_str!("profile.toml");

/// Errors that can occur while loading a profile
#[derive(Error, Debug)]
pub enum ProfileLoadError {
    #[error("Could not read profile {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid profile {origin}: {source}")]
    Parse {
        origin: String,
        #[source]
        source: toml::de::Error,
    },
}

/// Loads [`Profile`] content from TOML
pub struct ProfileLoader;

impl ProfileLoader {
    /// The profile compiled into the binary
    pub fn bundled() -> Result<Profile, ProfileLoadError> {
        Self::parse(BUNDLED_PROFILE, "<bundled>")
    }

    /// Load a profile file
    pub fn from_file(path: &Path) -> Result<Profile, ProfileLoadError> {
        debug!("Loading profile from {}", path.display());
        let content = std::fs::read_to_string(path).map_err(|source| ProfileLoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::parse(&content, &path.display().to_string())
    }

    /// Load `path` when given, otherwise the bundled profile
    pub fn load(path: Option<&Path>) -> Result<Profile, ProfileLoadError> {
        match path {
            Some(path) => Self::from_file(path),
            None => Self::bundled(),
        }
    }

    fn parse(content: &str, origin: &str) -> Result<Profile, ProfileLoadError> {
        toml::from_str(content).map_err(|source| ProfileLoadError::Parse {
            origin: origin.to_string(),
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use folio_domain::SkillLevel;
    use std::io::Write;

    #[test]
    fn test_bundled_profile_parses() {
        let profile = ProfileLoader::bundled().unwrap();
        assert_eq!(profile.hero.highlight, "Creative Developer");
        assert_eq!(profile.projects.len(), 3);
        assert_eq!(profile.education.len(), 2);
        assert_eq!(profile.skills_at(SkillLevel::Advanced).count(), 3);
        assert!(profile.projects.iter().all(|p| p.source_url.is_some()));
    }

    #[test]
    fn test_bundled_profile_tags() {
        let profile = ProfileLoader::bundled().unwrap();
        assert_eq!(profile.projects_tagged("tailwind").len(), 2);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
name = "Someone"

[[projects]]
title = "CLI"
description = "A terminal tool"
"#
        )
        .unwrap();

        let profile = ProfileLoader::load(Some(file.path())).unwrap();
        assert_eq!(profile.name, "Someone");
        assert!(profile.projects[0].tags.is_empty());
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = ProfileLoader::from_file(Path::new("/nonexistent/profile.toml")).unwrap_err();
        assert!(matches!(err, ProfileLoadError::Io { .. }));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[[skills]]\nname = \"Rust\"\nlevel = \"guru\"").unwrap();
        let err = ProfileLoader::from_file(file.path()).unwrap_err();
        assert!(matches!(err, ProfileLoadError::Parse { .. }));
    }
}
