//! Filesystem module.
//!
//! Provides:
//! - Sequential folder-number allocation
//! - Document code extraction and filename sanitization
//! - Collision-safe destination paths

pub mod codes;
pub mod paths;
pub mod sequence;

pub use codes::{has_required_prefix, CodeExtractor, DocumentCode};
pub use paths::{ensure_dir, ensure_subfolders, resolve_unique, CollisionStyle};
pub use sequence::SequencePattern;
