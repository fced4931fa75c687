//! `[output]` section: how pages and enquiry results are printed

use folio_domain::OutputFormat;
use serde::{Deserialize, Serialize};

/// Printing preferences from TOML
///
/// ```toml
/// [output]
/// format = "json"   # or "text"
/// color = false
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Format for pages, enquiry errors and summaries; unset means text
    pub format: Option<OutputFormat>,
    /// Colored text output; `--no-color` turns it off regardless
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

impl FileOutputConfig {
    /// The format to print with, a command-line choice beating the file
    pub fn resolve_format(&self, requested: Option<OutputFormat>) -> OutputFormat {
        requested.or(self.format).unwrap_or_default()
    }

    /// Whether to color text, given the `--no-color` flag
    pub fn resolve_color(&self, no_color: bool) -> bool {
        self.color && !no_color
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_json_enquiry_output_from_file() {
        let config: FileOutputConfig = toml::from_str("format = \"json\"").unwrap();
        assert_eq!(config.resolve_format(None), OutputFormat::Json);
        assert!(config.color);
    }

    #[test]
    fn test_command_line_format_wins() {
        let config = FileOutputConfig {
            format: Some(OutputFormat::Json),
            color: true,
        };
        assert_eq!(
            config.resolve_format(Some(OutputFormat::Text)),
            OutputFormat::Text
        );
        assert_eq!(FileOutputConfig::default().resolve_format(None), OutputFormat::Text);
    }

    #[test]
    fn test_no_color_flag_overrides_file() {
        let config = FileOutputConfig::default();
        assert!(config.resolve_color(false));
        assert!(!config.resolve_color(true));

        let plain: FileOutputConfig = toml::from_str("color = false").unwrap();
        assert!(!plain.resolve_color(false));
    }
}
