//! Intake run state tracking.

use std::path::PathBuf;

/// State and statistics for a single intake run.
#[derive(Debug, Default)]
pub struct IntakeState {
    // Folder allocation results
    pub allocated_folder: Option<PathBuf>,
    pub created_subfolders: Vec<PathBuf>,

    // Attachment statistics
    pub messages_examined: u64,
    pub saved_count: u64,
    pub skipped_no_prefix: u64,
    pub skipped_extension: u64,
    pub failed_count: u64,
}

impl IntakeState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a saved attachment.
    pub fn mark_saved(&mut self) {
        self.saved_count += 1;
    }

    /// Record an attachment skipped for lacking the required prefix.
    pub fn mark_skipped_no_prefix(&mut self) {
        self.skipped_no_prefix += 1;
    }

    /// Record an attachment skipped by the extension filter.
    pub fn mark_skipped_extension(&mut self) {
        self.skipped_extension += 1;
    }

    /// Record a per-item save failure.
    pub fn mark_failed(&mut self) {
        self.failed_count += 1;
    }

    /// Total attachments skipped by either filter.
    pub fn total_skipped(&self) -> u64 {
        self.skipped_no_prefix + self.skipped_extension
    }
}
