//! Configuration structures and loading logic.

use crate::config::modes::IntakeMode;
use crate::error::{Error, Result};
use crate::fs::CollisionStyle;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};

/// Main configuration structure.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub folders: FoldersConfig,

    #[serde(default)]
    pub mail: MailConfig,

    #[serde(default)]
    pub options: OptionsConfig,
}

/// Transmittal folder allocation configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FoldersConfig {
    /// Base directory holding the numbered transmittal folders.
    #[serde(default)]
    pub base_directory: Option<PathBuf>,

    /// Fixed prefix of the folder naming convention.
    #[serde(default = "default_folder_prefix")]
    pub prefix: String,

    /// Width of the zero-padded sequence suffix.
    #[serde(default = "default_sequence_width")]
    pub sequence_width: usize,

    /// Standard subfolders created inside each new transmittal folder.
    #[serde(default = "default_subfolders")]
    pub subfolders: Vec<String>,
}

/// Mail source configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MailConfig {
    /// Drop directory: one subdirectory per message, one file per attachment.
    #[serde(default)]
    pub drop_directory: Option<PathBuf>,
}

/// Intake options configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OptionsConfig {
    /// Intake mode (normal, allocate, fetch).
    #[serde(default)]
    pub mode: IntakeMode,

    /// Destination directory for fetch-only mode.
    #[serde(default)]
    pub save_directory: Option<PathBuf>,

    /// Subfolder of the allocated transmittal folder that receives attachments.
    #[serde(default = "default_attachment_subfolder")]
    pub attachment_subfolder: String,

    /// Required filename prefix; attachments without it are skipped.
    #[serde(default = "default_required_prefix")]
    pub required_prefix: Option<String>,

    /// Extensions to skip entirely (lowercase, with leading dot).
    #[serde(default = "default_skip_extensions")]
    pub skip_extensions: HashSet<String>,

    /// Suffix style used when a destination filename already exists.
    #[serde(default)]
    pub collision_style: CollisionStyle,

    /// Maximum number of mail items examined per run.
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Whether to print a line for each saved attachment.
    #[serde(default = "default_true")]
    pub show_saved: bool,

    /// Whether to print a line for each skipped attachment.
    #[serde(default = "default_true")]
    pub show_skipped: bool,
}

impl Default for FoldersConfig {
    fn default() -> Self {
        Self {
            base_directory: None,
            prefix: default_folder_prefix(),
            sequence_width: default_sequence_width(),
            subfolders: default_subfolders(),
        }
    }
}

impl Default for OptionsConfig {
    fn default() -> Self {
        Self {
            mode: IntakeMode::default(),
            save_directory: None,
            attachment_subfolder: default_attachment_subfolder(),
            required_prefix: default_required_prefix(),
            skip_extensions: default_skip_extensions(),
            collision_style: CollisionStyle::default(),
            max_items: default_max_items(),
            show_saved: true,
            show_skipped: true,
        }
    }
}

fn default_folder_prefix() -> String {
    "SPP2-KLN-PRO-TRN-".to_string()
}

fn default_sequence_width() -> usize {
    4
}

fn default_subfolders() -> Vec<String> {
    vec![
        "1. main".to_string(),
        "2. attachments".to_string(),
        "3. docs".to_string(),
    ]
}

fn default_attachment_subfolder() -> String {
    "2. attachments".to_string()
}

fn default_required_prefix() -> Option<String> {
    Some("KLN-".to_string())
}

fn default_skip_extensions() -> HashSet<String> {
    [".jpg", ".jpeg", ".png", ".gif", ".bmp", ".tiff", ".webp"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

fn default_max_items() -> usize {
    200
}

fn default_true() -> bool {
    true
}

impl Config {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| {
            if e.kind() == std::io::ErrorKind::NotFound {
                Error::Config(format!(
                    "Configuration file not found: {}. Create one from config.example.toml",
                    path.display()
                ))
            } else {
                Error::Io(e)
            }
        })?;

        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Get the effective save directory for fetch-only mode.
    pub fn save_directory(&self) -> PathBuf {
        self.options
            .save_directory
            .clone()
            .unwrap_or_else(|| std::env::current_dir().unwrap_or_else(|_| PathBuf::from(".")))
    }
}
