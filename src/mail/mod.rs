//! Mail source module.
//!
//! Provides:
//! - The backend-agnostic [`MailSource`] / [`Attachment`] contract
//! - The drop-directory backend used by the shipped binary

pub mod dropdir;
pub mod source;

pub use dropdir::DropDirSource;
pub use source::{Attachment, MailMessage, MailSource};
