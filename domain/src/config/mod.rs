//! Display configuration value objects.

pub mod output_format;

pub use output_format::OutputFormat;
