//! Transmittal folder allocation driver.

use std::path::PathBuf;

use crate::config::Config;
use crate::error::{Error, Result};
use crate::fs::paths::ensure_subfolders;
use crate::fs::sequence::SequencePattern;
use crate::intake::state::IntakeState;

/// Allocate and create the next transmittal folder under the base directory.
///
/// Scans the base directory for folders matching the configured pattern,
/// creates the next free one, and fills in the standard subfolders. The
/// created path is recorded on `state` and returned.
pub fn allocate_folder(config: &Config, state: &mut IntakeState) -> Result<PathBuf> {
    let base = config
        .folders
        .base_directory
        .as_ref()
        .ok_or_else(|| Error::MissingConfig("folders.base_directory".to_string()))?;

    let pattern = SequencePattern::new(&config.folders.prefix, config.folders.sequence_width);
    let next_name = pattern.next_in(base)?;
    let target = base.join(&next_name);

    if target.exists() {
        // Another writer got there between the scan and the create.
        tracing::warn!("Folder already exists: {}", target.display());
    } else {
        std::fs::create_dir(&target)?;
        tracing::info!("Created folder: {}", target.display());
    }

    let created = ensure_subfolders(&target, &config.folders.subfolders)?;
    for path in &created {
        tracing::debug!("Created subfolder: {}", path.display());
    }

    state.allocated_folder = Some(target.clone());
    state.created_subfolders = created;

    Ok(target)
}
