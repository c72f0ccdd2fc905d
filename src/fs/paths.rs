//! Path and directory management.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Suffix convention used when a destination filename already exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CollisionStyle {
    /// `report.pdf` → `report_1.pdf`, `report_2.pdf`, …
    #[default]
    Underscore,
    /// `report.pdf` → `report (1).pdf`, `report (2).pdf`, …
    Parenthesized,
}

impl CollisionStyle {
    fn candidate(&self, stem: &str, counter: u64, ext: &str) -> String {
        match self {
            CollisionStyle::Underscore => format!("{}_{}{}", stem, counter, ext),
            CollisionStyle::Parenthesized => format!("{} ({}){}", stem, counter, ext),
        }
    }
}

/// Resolve a collision-free destination path for `filename` under `dir`.
///
/// Returns `dir/filename` unchanged when it does not exist; otherwise probes
/// numbered variants in increasing order and returns the first absent one.
/// Only computes a path; creation and its failures belong to the caller.
pub fn resolve_unique(dir: &Path, filename: &str, style: CollisionStyle) -> PathBuf {
    let path = dir.join(filename);
    if !path.exists() {
        return path;
    }

    let (stem, ext) = match filename.rfind('.') {
        Some(pos) if pos > 0 => (&filename[..pos], &filename[pos..]),
        _ => (filename, ""),
    };

    let mut counter = 1;
    loop {
        let candidate = dir.join(style.candidate(stem, counter, ext));
        if !candidate.exists() {
            return candidate;
        }
        counter += 1;
    }
}

/// Ensure a directory exists, creating it and any missing parents.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Create the standard subfolders under a freshly allocated folder.
///
/// Existing subfolders are left alone; the returned list names only the ones
/// actually created this run.
pub fn ensure_subfolders(root: &Path, names: &[String]) -> Result<Vec<PathBuf>> {
    let mut created = Vec::new();
    for name in names {
        let path = root.join(name);
        if !path.exists() {
            std::fs::create_dir(&path)?;
            created.push(path);
        }
    }
    Ok(created)
}
