//! CLI command definitions

use clap::{Parser, ValueEnum};
use folio_domain::{OutputFormat, Section};
use std::path::PathBuf;

/// Output format for rendered sections and enquiry results
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormatArg {
    /// Human-readable text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormatArg> for OutputFormat {
    fn from(arg: OutputFormatArg) -> Self {
        match arg {
            OutputFormatArg::Text => OutputFormat::Text,
            OutputFormatArg::Json => OutputFormat::Json,
        }
    }
}

fn parse_section(s: &str) -> Result<Section, String> {
    s.parse::<Section>().map_err(|e| e.to_string())
}

/// CLI arguments for folio
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(author, version, about = "Personal portfolio in the terminal, with a contact-enquiry form")]
#[command(long_about = r#"
folio renders a personal portfolio (hero, about, project showcase, contact
details) and hosts the contact-enquiry form.

The enquiry form validates every field on submit and shows all problems at
once. A valid enquiry is shown as a summary before it is (notionally) sent.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file
2. ./folio.toml        Project-level config
3. ~/.config/folio/config.toml   Global config

Example:
  folio                         Show every section
  folio portfolio --tag react   Projects tagged React
  folio --contact               Fill in an enquiry interactively
  folio --enquiry draft.json -o json
"#)]
pub struct Cli {
    /// Section to show: home, about, portfolio, contact (all when omitted)
    #[arg(value_parser = parse_section)]
    pub section: Option<Section>,

    /// Open the interactive enquiry form
    #[arg(short, long, conflicts_with = "enquiry")]
    pub contact: bool,

    /// Validate an enquiry draft from a JSON file
    #[arg(short, long, value_name = "FILE")]
    pub enquiry: Option<PathBuf>,

    /// Only show projects with this technology tag
    #[arg(short, long, value_name = "TAG")]
    pub tag: Option<String>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormatArg>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Write logs to this file instead of stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}
