//! doc-intake - automated intake of inbound project documents.
//!
//! This library automates two pieces of document-control drudgery:
//!
//! - Allocating sequentially-numbered transmittal folders following a fixed
//!   naming convention (`SPP2-KLN-PRO-TRN-0007` style), including the
//!   standard subfolders inside each one.
//! - Extracting attachments from a mail-like source, normalizing their
//!   filenames down to the canonical document code, and writing them to
//!   disk without collisions.
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//! use doc_intake::{allocate_folder, fetch_attachments, Config, DropDirSource, IntakeState};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::load(Path::new("config.toml"))?;
//!     let mut state = IntakeState::new();
//!
//!     let folder = allocate_folder(&config, &mut state)?;
//!     let dest = folder.join(&config.options.attachment_subfolder);
//!
//!     let source = DropDirSource::new(config.mail.drop_directory.clone().unwrap());
//!     fetch_attachments(&source, &config, &dest, &mut state)?;
//!     Ok(())
//! }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod fs;
pub mod intake;
pub mod mail;
pub mod output;

// Re-exports for convenience
pub use config::{Config, IntakeMode};
pub use error::{Error, Result};
pub use fs::{CodeExtractor, CollisionStyle, DocumentCode, SequencePattern};
pub use intake::{allocate_folder, fetch_attachments, IntakeState};
pub use mail::{Attachment, DropDirSource, MailMessage, MailSource};
