//! Sequential folder-number allocation.
//!
//! Transmittal folders follow a fixed convention: a textual prefix plus a
//! zero-padded decimal suffix (e.g. `SPP2-KLN-PRO-TRN-0007`). The allocator
//! scans an existing listing, finds the highest used number, and renders the
//! next free name.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::{Error, Result};

/// A folder naming pattern: fixed prefix + fixed-width zero-padded number.
#[derive(Debug, Clone)]
pub struct SequencePattern {
    prefix: String,
    width: usize,
    matcher: Regex,
}

impl SequencePattern {
    /// Build a pattern from a prefix and a suffix width.
    pub fn new(prefix: &str, width: usize) -> Self {
        // Anchored on both ends: prefix-only or wrong-width suffixes must not match.
        let matcher = Regex::new(&format!(r"^{}(\d{{{}}})$", regex::escape(prefix), width))
            .expect("sequence pattern is a valid regex");

        Self {
            prefix: prefix.to_string(),
            width,
            matcher,
        }
    }

    /// Match a name against the pattern, returning its sequence number.
    ///
    /// Only full matches count: the prefix, exactly `width` decimal digits,
    /// end of string. `PREFIX-12` or `PREFIX-abcd` return `None` for width 4.
    pub fn match_name(&self, name: &str) -> Option<u64> {
        self.matcher
            .captures(name)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse().ok())
    }

    /// Render a sequence number as a folder name.
    ///
    /// Numbers wider than the configured width render with however many
    /// digits they need; the width is a padding minimum, not a cap.
    pub fn render(&self, number: u64) -> String {
        format!("{}{:0width$}", self.prefix, number, width = self.width)
    }

    /// Compute the next unused name from a listing of existing names.
    ///
    /// Entries not matching the pattern are skipped. An empty or unrelated
    /// listing yields sequence 0. Gaps are tolerated; only the maximum
    /// matters. Pure computation over the supplied snapshot.
    pub fn next_name<I, S>(&self, existing: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let next = existing
            .into_iter()
            .filter_map(|name| self.match_name(name.as_ref()))
            .max()
            .map_or(0, |max| max + 1);

        self.render(next)
    }

    /// Compute the next unused name from the subdirectories of `base`.
    ///
    /// An absent base directory is an explicit error, never a silent
    /// sequence 0.
    pub fn next_in(&self, base: &Path) -> Result<String> {
        if !base.exists() {
            return Err(Error::BaseNotFound(base.to_path_buf()));
        }

        let mut names = Vec::new();
        for entry in fs::read_dir(base)? {
            let entry = entry?;
            if entry.file_type()?.is_dir() {
                if let Some(name) = entry.file_name().to_str() {
                    names.push(name.to_string());
                }
            }
        }

        Ok(self.next_name(names))
    }
}
