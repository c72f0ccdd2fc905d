//! Configuration validation logic.

use crate::config::loader::Config;
use crate::error::{Error, Result};

/// Minimum sequence suffix width.
const MIN_SEQUENCE_WIDTH: usize = 1;

/// Maximum sequence suffix width (fits comfortably in u64).
const MAX_SEQUENCE_WIDTH: usize = 9;

/// Validate the entire configuration for the selected mode.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_pattern(&config.folders.prefix, config.folders.sequence_width)?;
    validate_subfolders(&config.folders.subfolders)?;
    validate_skip_extensions(config)?;

    if config.options.mode.allocates() && config.folders.base_directory.is_none() {
        return Err(Error::MissingConfig(
            "folders.base_directory (required for allocate/normal mode)".to_string(),
        ));
    }

    if config.options.mode.fetches() && config.mail.drop_directory.is_none() {
        return Err(Error::MissingConfig(
            "mail.drop_directory (required for fetch/normal mode)".to_string(),
        ));
    }

    Ok(())
}

/// Validate the folder naming pattern.
pub fn validate_pattern(prefix: &str, width: usize) -> Result<()> {
    if prefix.is_empty() {
        return Err(Error::MissingConfig("folders.prefix".to_string()));
    }

    if prefix.chars().any(|c| c == '/' || c == '\\') {
        return Err(Error::ConfigValidation {
            field: "folders.prefix".to_string(),
            message: format!("Prefix '{}' must not contain path separators", prefix),
        });
    }

    if !(MIN_SEQUENCE_WIDTH..=MAX_SEQUENCE_WIDTH).contains(&width) {
        return Err(Error::ConfigValidation {
            field: "folders.sequence_width".to_string(),
            message: format!(
                "Width must be between {} and {} (got {})",
                MIN_SEQUENCE_WIDTH, MAX_SEQUENCE_WIDTH, width
            ),
        });
    }

    Ok(())
}

/// Validate the subfolder names.
pub fn validate_subfolders(subfolders: &[String]) -> Result<()> {
    for name in subfolders {
        if name.trim().is_empty() {
            return Err(Error::ConfigValidation {
                field: "folders.subfolders".to_string(),
                message: "Subfolder names must not be empty".to_string(),
            });
        }

        if name.contains('/') || name.contains('\\') || name.contains("..") {
            return Err(Error::ConfigValidation {
                field: "folders.subfolders".to_string(),
                message: format!("Subfolder name '{}' must be a single path component", name),
            });
        }
    }

    Ok(())
}

/// Validate the extension skip list.
fn validate_skip_extensions(config: &Config) -> Result<()> {
    for ext in &config.options.skip_extensions {
        if !ext.starts_with('.') {
            return Err(Error::ConfigValidation {
                field: "options.skip_extensions".to_string(),
                message: format!("Extension '{}' must start with a dot", ext),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::IntakeMode;
    use std::path::PathBuf;

    fn base_config() -> Config {
        let mut config = Config::default();
        config.folders.base_directory = Some(PathBuf::from("/srv/log/trn"));
        config.mail.drop_directory = Some(PathBuf::from("/srv/mail-drop"));
        config
    }

    #[test]
    fn test_valid_config() {
        assert!(validate_config(&base_config()).is_ok());
    }

    #[test]
    fn test_empty_prefix_rejected() {
        let mut config = base_config();
        config.folders.prefix = String::new();
        assert!(validate_config(&config).is_err());
    }

    #[test]
    fn test_prefix_with_separator_rejected() {
        assert!(validate_pattern("TRN/", 4).is_err());
    }

    #[test]
    fn test_width_out_of_range_rejected() {
        assert!(validate_pattern("TRN-", 0).is_err());
        assert!(validate_pattern("TRN-", 12).is_err());
        assert!(validate_pattern("TRN-", 4).is_ok());
    }

    #[test]
    fn test_subfolder_with_separator_rejected() {
        assert!(validate_subfolders(&["a/b".to_string()]).is_err());
        assert!(validate_subfolders(&["..".to_string()]).is_err());
        assert!(validate_subfolders(&["1. main".to_string()]).is_ok());
    }

    #[test]
    fn test_allocate_mode_requires_base_directory() {
        let mut config = base_config();
        config.folders.base_directory = None;
        config.options.mode = IntakeMode::Allocate;
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_fetch_mode_requires_drop_directory() {
        let mut config = base_config();
        config.mail.drop_directory = None;
        config.options.mode = IntakeMode::Fetch;
        assert!(matches!(
            validate_config(&config),
            Err(Error::MissingConfig(_))
        ));
    }

    #[test]
    fn test_allocate_mode_does_not_require_drop_directory() {
        let mut config = base_config();
        config.mail.drop_directory = None;
        config.options.mode = IntakeMode::Allocate;
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_extension_without_dot_rejected() {
        let mut config = base_config();
        config.options.skip_extensions.insert("jpg".to_string());
        assert!(validate_config(&config).is_err());
    }
}
