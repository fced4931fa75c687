//! Infrastructure layer for folio
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, including configuration file loading
//! and the bundled portfolio profile.

pub mod clock;
pub mod config;
pub mod portfolio;

// Re-export commonly used types
pub use clock::SystemClock;
pub use config::{
    ConfigLoader, ConfigValidationError, FileConfig, FileContactConfig, FileOutputConfig,
    FilePortfolioConfig, FileReplConfig,
};
pub use portfolio::{ProfileLoadError, ProfileLoader};
