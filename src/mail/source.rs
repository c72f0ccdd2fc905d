//! Mail source abstraction.
//!
//! The intake driver only needs to enumerate mail-like items and, for each
//! attachment, read its raw filename and ask it to save itself somewhere.
//! No particular mail backend is assumed.

use std::io;
use std::path::Path;

use crate::error::Result;

/// A single attachment carried by a mail item.
pub trait Attachment {
    /// The raw filename as received from the source.
    fn file_name(&self) -> &str;

    /// Save the attachment's bytes to `path`.
    fn save_to(&self, path: &Path) -> io::Result<()>;
}

/// A mail-like item carrying zero or more attachments.
pub struct MailMessage {
    /// Source-specific identifier, used only for reporting.
    pub id: String,

    pub attachments: Vec<Box<dyn Attachment>>,
}

/// A source of mail-like items.
///
/// Implementations return items newest-first; the driver caps how many it
/// examines.
pub trait MailSource {
    fn messages(&self) -> Result<Vec<MailMessage>>;
}
