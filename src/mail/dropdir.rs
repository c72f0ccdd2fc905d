//! Drop-directory mail source.
//!
//! Reads a "mail drop" directory produced by a mail-client export: each
//! subdirectory is one message, each regular file inside it is one
//! attachment. This is the backend the shipped binary uses; anything
//! speaking the [`MailSource`] contract can replace it.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use crate::error::{Error, Result};
use crate::mail::source::{Attachment, MailMessage, MailSource};

/// Mail source backed by an exported drop directory.
pub struct DropDirSource {
    root: PathBuf,
}

impl DropDirSource {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl MailSource for DropDirSource {
    /// Enumerate message subdirectories, newest first by modification time.
    fn messages(&self) -> Result<Vec<MailMessage>> {
        if !self.root.is_dir() {
            return Err(Error::MailSource(format!(
                "Drop directory not found: {}",
                self.root.display()
            )));
        }

        let mut dirs: Vec<(PathBuf, SystemTime)> = Vec::new();
        for entry in fs::read_dir(&self.root)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                let modified = entry
                    .metadata()?
                    .modified()
                    .unwrap_or(SystemTime::UNIX_EPOCH);
                dirs.push((entry.path(), modified));
            }
        }
        dirs.sort_by(|a, b| b.1.cmp(&a.1));

        let mut messages = Vec::with_capacity(dirs.len());
        for (dir, _) in dirs {
            messages.push(read_message(&dir)?);
        }
        Ok(messages)
    }
}

fn read_message(dir: &Path) -> Result<MailMessage> {
    let id = dir
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or("message")
        .to_string();

    let mut attachments: Vec<Box<dyn Attachment>> = Vec::new();
    let mut paths: Vec<PathBuf> = Vec::new();
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        if entry.file_type()?.is_file() {
            paths.push(entry.path());
        }
    }
    // Stable order within a message, independent of readdir order.
    paths.sort();

    for path in paths {
        if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
            attachments.push(Box::new(FileAttachment {
                name: name.to_string(),
                path,
            }));
        }
    }

    Ok(MailMessage { id, attachments })
}

/// An attachment backed by a file in the drop directory.
struct FileAttachment {
    name: String,
    path: PathBuf,
}

impl Attachment for FileAttachment {
    fn file_name(&self) -> &str {
        &self.name
    }

    fn save_to(&self, path: &Path) -> io::Result<()> {
        fs::copy(&self.path, path)?;
        Ok(())
    }
}
