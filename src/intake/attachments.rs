//! Attachment intake driver.
//!
//! Per-attachment pipeline: extension skip list, required-prefix filter,
//! code extraction, collision-free path resolution, save. A failing item is
//! reported and counted; the batch keeps going.

use std::path::Path;

use crate::config::Config;
use crate::error::Result;
use crate::fs::codes::{has_required_prefix, CodeExtractor};
use crate::fs::paths::{ensure_dir, resolve_unique};
use crate::intake::state::IntakeState;
use crate::mail::source::MailSource;
use crate::output::{create_item_bar, print_error, print_success, print_warning};

/// Fetch attachments from the mail source into `dest`.
pub fn fetch_attachments(
    source: &dyn MailSource,
    config: &Config,
    dest: &Path,
    state: &mut IntakeState,
) -> Result<()> {
    ensure_dir(dest)?;

    let messages = source.messages()?;
    let count = messages.len().min(config.options.max_items);
    tracing::info!("Examining {} mail item(s)", count);

    let extractor = CodeExtractor::new();
    let bar = create_item_bar(count as u64, "Processing mail items");

    for message in messages.into_iter().take(config.options.max_items) {
        state.messages_examined += 1;

        for attachment in &message.attachments {
            let raw = attachment.file_name();

            if let Some(ext) = extension_of(raw) {
                if config.options.skip_extensions.contains(&ext) {
                    state.mark_skipped_extension();
                    if config.options.show_skipped {
                        bar.suspend(|| print_warning(&format!("SKIP (image): {}", raw)));
                    }
                    continue;
                }
            }

            if let Some(prefix) = &config.options.required_prefix {
                if !has_required_prefix(raw, prefix) {
                    state.mark_skipped_no_prefix();
                    if config.options.show_skipped {
                        bar.suspend(|| print_warning(&format!("SKIP (no code prefix): {}", raw)));
                    }
                    continue;
                }
            }

            let doc = extractor.extract(raw);
            let target = resolve_unique(dest, &doc.file_name(), config.options.collision_style);

            match attachment.save_to(&target) {
                Ok(()) => {
                    state.mark_saved();
                    if config.options.show_saved {
                        bar.suspend(|| {
                            print_success(&format!(
                                "Saved: {}",
                                target.file_name().unwrap_or_default().to_string_lossy()
                            ))
                        });
                    }
                }
                Err(e) => {
                    // Per-item failure; the rest of the batch still runs.
                    state.mark_failed();
                    bar.suspend(|| {
                        print_error(&format!("Failed to save '{}' ({}): {}", raw, message.id, e))
                    });
                }
            }
        }

        bar.inc(1);
    }

    bar.finish_and_clear();
    Ok(())
}

/// Lowercased extension of a filename, dot included.
fn extension_of(filename: &str) -> Option<String> {
    match filename.rfind('.') {
        Some(pos) if pos > 0 => Some(filename[pos..].to_lowercase()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mail::source::{Attachment, MailMessage};
    use std::io;
    use std::path::PathBuf;

    struct FakeAttachment {
        name: String,
        fail: bool,
    }

    impl Attachment for FakeAttachment {
        fn file_name(&self) -> &str {
            &self.name
        }

        fn save_to(&self, path: &Path) -> io::Result<()> {
            if self.fail {
                return Err(io::Error::new(io::ErrorKind::PermissionDenied, "denied"));
            }
            std::fs::write(path, b"data")
        }
    }

    struct FakeSource {
        messages: Vec<Vec<(&'static str, bool)>>,
    }

    impl MailSource for FakeSource {
        fn messages(&self) -> Result<Vec<MailMessage>> {
            Ok(self
                .messages
                .iter()
                .enumerate()
                .map(|(i, atts)| MailMessage {
                    id: format!("msg-{}", i),
                    attachments: atts
                        .iter()
                        .map(|(name, fail)| {
                            Box::new(FakeAttachment {
                                name: name.to_string(),
                                fail: *fail,
                            }) as Box<dyn Attachment>
                        })
                        .collect(),
                })
                .collect())
        }
    }

    fn quiet_config() -> Config {
        let mut config = Config::default();
        config.options.show_saved = false;
        config.options.show_skipped = false;
        config
    }

    #[test]
    fn test_pipeline_filters_normalizes_and_saves() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            messages: vec![vec![
                ("KLN-SPP2-DOC-001_R00 design notes.pdf", false),
                ("site photo.jpg", false),
                ("minutes.docx", false),
            ]],
        };

        let mut state = IntakeState::new();
        fetch_attachments(&source, &quiet_config(), dir.path(), &mut state).unwrap();

        assert!(dir.path().join("KLN-SPP2-DOC-001_R00.pdf").is_file());
        assert_eq!(state.saved_count, 1);
        assert_eq!(state.skipped_extension, 1);
        assert_eq!(state.skipped_no_prefix, 1);
        assert_eq!(state.failed_count, 0);
    }

    #[test]
    fn test_colliding_codes_get_numbered_suffixes() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            messages: vec![vec![
                ("KLN-DOC-001_R00 first copy.pdf", false),
                ("KLN-DOC-001_R00 second copy.pdf", false),
            ]],
        };

        let mut state = IntakeState::new();
        fetch_attachments(&source, &quiet_config(), dir.path(), &mut state).unwrap();

        assert!(dir.path().join("KLN-DOC-001_R00.pdf").is_file());
        assert!(dir.path().join("KLN-DOC-001_R00_1.pdf").is_file());
        assert_eq!(state.saved_count, 2);
    }

    #[test]
    fn test_save_failure_does_not_abort_batch() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            messages: vec![vec![
                ("KLN-DOC-001_R00.pdf", true),
                ("KLN-DOC-002_R00.pdf", false),
            ]],
        };

        let mut state = IntakeState::new();
        fetch_attachments(&source, &quiet_config(), dir.path(), &mut state).unwrap();

        assert_eq!(state.failed_count, 1);
        assert_eq!(state.saved_count, 1);
        assert!(dir.path().join("KLN-DOC-002_R00.pdf").is_file());
    }

    #[test]
    fn test_max_items_caps_messages_examined() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            messages: vec![
                vec![("KLN-DOC-001_R00.pdf", false)],
                vec![("KLN-DOC-002_R00.pdf", false)],
                vec![("KLN-DOC-003_R00.pdf", false)],
            ],
        };

        let mut config = quiet_config();
        config.options.max_items = 2;

        let mut state = IntakeState::new();
        fetch_attachments(&source, &config, dir.path(), &mut state).unwrap();

        assert_eq!(state.messages_examined, 2);
        assert_eq!(state.saved_count, 2);
        assert!(!dir.path().join("KLN-DOC-003_R00.pdf").exists());
    }

    #[test]
    fn test_prefix_filter_disabled_accepts_everything() {
        let dir = tempfile::tempdir().unwrap();
        let source = FakeSource {
            messages: vec![vec![("minutes 2025 week 45.docx", false)]],
        };

        let mut config = quiet_config();
        config.options.required_prefix = None;

        let mut state = IntakeState::new();
        fetch_attachments(&source, &config, dir.path(), &mut state).unwrap();

        assert_eq!(state.saved_count, 1);
        assert!(dir.path().join("minutes.docx").is_file());
    }

    #[test]
    fn test_destination_created_if_missing() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("2. attachments");
        let source = FakeSource {
            messages: vec![vec![("KLN-DOC-001_R00.pdf", false)]],
        };

        let mut state = IntakeState::new();
        fetch_attachments(&source, &quiet_config(), &dest, &mut state).unwrap();
        assert!(dest.join("KLN-DOC-001_R00.pdf").is_file());
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("a.PDF"), Some(".pdf".to_string()));
        assert_eq!(extension_of("archive.tar.gz"), Some(".gz".to_string()));
        assert_eq!(extension_of("README"), None);
        assert_eq!(extension_of(".hidden"), None);
    }
}
