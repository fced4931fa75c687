//! CLI entrypoint for folio
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use folio_application::{Clock, EnquirySession};
use folio_domain::{OutputFormat, Section};
use folio_infrastructure::{ConfigLoader, FileConfig, ProfileLoader, SystemClock};
use folio_presentation::{
    Cli, ConsoleFormatter, EnquiryRepl, OutputConfig, ReplConfig, check_enquiry_file,
    formatter_for,
};
use std::path::Path;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    // Keep the guard alive so buffered file logs are flushed on exit
    let _log_guard = init_logging(cli.verbose, cli.log_file.as_deref())?;

    info!("Starting folio");

    if cli.show_config {
        ConfigLoader::print_config_sources();
        return Ok(ExitCode::SUCCESS);
    }

    let config = load_config(&cli)?;

    // CLI flags take priority over the config file
    let output_config = OutputConfig {
        format: config
            .output
            .resolve_format(cli.output.map(OutputFormat::from)),
        color: config.output.resolve_color(cli.no_color),
    };
    output_config.apply_color();

    let contact = config.contact.to_contact_config();

    // === Enquiry from file ===
    if let Some(path) = &cli.enquiry {
        let today = SystemClock::new().today();
        let check = check_enquiry_file(path, today, &contact, output_config.format)?;
        println!("{}", check.output);
        return Ok(check.exit_code());
    }

    // === Interactive enquiry form ===
    if cli.contact {
        println!("{}", ConsoleFormatter::format_contact_card(&contact));

        let repl_config = ReplConfig {
            history_file: config.repl.history_path(),
        };
        let session = EnquirySession::new(Arc::new(SystemClock::new()));
        let mut repl = EnquiryRepl::new(session, contact)
            .with_history(repl_config.resolve_history_path());

        repl.run().context("Enquiry form failed")?;
        return Ok(ExitCode::SUCCESS);
    }

    // === Page sections ===
    let profile = ProfileLoader::load(config.portfolio.profile_path().as_deref())?;

    let sections: Vec<Section> = match cli.section {
        Some(section) => vec![section],
        None => Section::ALL.to_vec(),
    };

    let formatter = formatter_for(output_config.format);
    println!(
        "{}",
        formatter.format_page(&profile, &contact, &sections, cli.tag.as_deref())
    );

    Ok(ExitCode::SUCCESS)
}

/// Install the tracing subscriber, writing to stderr or to `log_file`
fn init_logging(verbose: u8, log_file: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let filter = match verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    let Some(path) = log_file else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .with_writer(std::io::stderr)
            .init();
        return Ok(None);
    };

    let file_name = path
        .file_name()
        .with_context(|| format!("Log file path has no file name: {}", path.display()))?;
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create log directory {}", dir.display()))?;

    let appender = tracing_appender::rolling::never(dir, file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_ansi(false)
        .with_writer(writer)
        .init();

    Ok(Some(guard))
}

/// Load and validate configuration according to CLI flags
fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }

    // figment skips missing files, so an explicit path is checked here
    if let Some(path) = &cli.config
        && !path.exists()
    {
        bail!("Config file not found: {}", path.display());
    }

    let config = ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow::anyhow!("Failed to load configuration: {}", e))?;

    for issue in config.validate() {
        warn!("Config: {}", issue);
    }

    Ok(config)
}
