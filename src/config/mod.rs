//! Configuration module for doc-intake.
//!
//! This module handles:
//! - Loading configuration from TOML files
//! - CLI argument parsing and merging
//! - Configuration validation

pub mod loader;
pub mod modes;
pub mod validation;

pub use loader::{Config, FoldersConfig, MailConfig, OptionsConfig};
pub use modes::IntakeMode;
pub use validation::validate_config;
