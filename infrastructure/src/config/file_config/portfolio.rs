//! Portfolio configuration from TOML (`[portfolio]` section)

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Raw portfolio configuration from TOML
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePortfolioConfig {
    /// Profile TOML replacing the bundled one
    pub profile_file: Option<String>,
}

impl FilePortfolioConfig {
    /// Profile file to load; a blank entry falls back to the bundled profile
    pub fn profile_path(&self) -> Option<PathBuf> {
        self.profile_file
            .as_deref()
            .map(str::trim)
            .filter(|p| !p.is_empty())
            .map(PathBuf::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_path_set() {
        let config = FilePortfolioConfig {
            profile_file: Some("me.toml".to_string()),
        };
        assert_eq!(config.profile_path(), Some(PathBuf::from("me.toml")));
    }

    #[test]
    fn test_blank_profile_path_uses_bundled() {
        let config = FilePortfolioConfig {
            profile_file: Some("   ".to_string()),
        };
        assert_eq!(config.profile_path(), None);
        assert_eq!(FilePortfolioConfig::default().profile_path(), None);
    }
}
