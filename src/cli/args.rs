//! Command-line argument definitions using clap.

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::config::{Config, IntakeMode};

/// Document intake CLI.
#[derive(Parser, Debug)]
#[command(
    name = "doc-intake",
    version,
    about = "Automate intake of project transmittal folders and document attachments",
    long_about = "A CLI tool that allocates the next sequentially-numbered transmittal folder\n\
                  and saves inbound attachments under their canonical document codes."
)]
pub struct Args {
    /// Base directory holding the numbered transmittal folders.
    #[arg(short = 'b', long = "base", env = "DOC_INTAKE_BASE")]
    pub base_directory: Option<PathBuf>,

    /// Mail drop directory (one subdirectory per message).
    #[arg(short = 'm', long = "mail-drop", env = "DOC_INTAKE_MAIL_DROP")]
    pub drop_directory: Option<PathBuf>,

    /// Destination directory for fetch-only mode.
    #[arg(short = 'd', long = "directory")]
    pub save_directory: Option<PathBuf>,

    /// Folder naming prefix (e.g. "SPP2-KLN-PRO-TRN-").
    #[arg(short = 'p', long = "prefix")]
    pub folder_prefix: Option<String>,

    /// Intake mode.
    #[arg(long, value_enum)]
    pub mode: Option<IntakeModeArg>,

    /// Required attachment filename prefix (e.g. "KLN-").
    #[arg(long = "require-prefix")]
    pub required_prefix: Option<String>,

    /// Accept attachments regardless of filename prefix.
    #[arg(long)]
    pub no_prefix_filter: bool,

    /// Maximum number of mail items examined per run.
    #[arg(long)]
    pub max_items: Option<usize>,

    /// Path to configuration file.
    #[arg(short, long, default_value = "config.toml")]
    pub config: PathBuf,

    /// Hide per-file save and skip messages.
    #[arg(long, short)]
    pub quiet: bool,

    /// Enable debug logging.
    #[arg(long)]
    pub debug: bool,
}

/// CLI intake mode argument.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum IntakeModeArg {
    /// Allocate the next transmittal folder, then fetch attachments into it.
    Normal,
    /// Allocate the next transmittal folder only.
    Allocate,
    /// Fetch attachments into the save directory only.
    Fetch,
}

impl From<IntakeModeArg> for IntakeMode {
    fn from(arg: IntakeModeArg) -> Self {
        match arg {
            IntakeModeArg::Normal => IntakeMode::Normal,
            IntakeModeArg::Allocate => IntakeMode::Allocate,
            IntakeModeArg::Fetch => IntakeMode::Fetch,
        }
    }
}

impl Args {
    /// Merge CLI arguments into an existing config, overriding where specified.
    pub fn merge_into_config(self, config: &mut Config) {
        if let Some(base) = self.base_directory {
            config.folders.base_directory = Some(base);
        }

        if let Some(drop) = self.drop_directory {
            config.mail.drop_directory = Some(drop);
        }

        if let Some(dir) = self.save_directory {
            config.options.save_directory = Some(dir);
        }

        if let Some(prefix) = self.folder_prefix {
            config.folders.prefix = prefix;
        }

        if let Some(mode) = self.mode {
            config.options.mode = mode.into();
        }

        if let Some(prefix) = self.required_prefix {
            config.options.required_prefix = Some(prefix);
        }

        // --no-prefix-filter wins over --require-prefix
        if self.no_prefix_filter {
            config.options.required_prefix = None;
        }

        if let Some(max) = self.max_items {
            config.options.max_items = max;
        }

        if self.quiet {
            config.options.show_saved = false;
            config.options.show_skipped = false;
        }
    }
}
