//! Document code extraction from human-authored filenames.
//!
//! Inbound attachments arrive with free-text descriptions appended after a
//! stable revision or date token, e.g.
//! `KLN-SPP2-MAR-WE-GN00-045_R00 Fire Alarm System Part-2 (MOXA).pdf`.
//! Extraction peels off the descriptive suffix and keeps the part that
//! uniquely identifies the document revision.

use regex::Regex;

/// One extraction rule: a pattern whose first match marks the cut point.
///
/// The code is everything up to and including the matched token.
#[derive(Debug)]
struct CodeRule {
    name: &'static str,
    token: Regex,
}

impl CodeRule {
    fn new(name: &'static str, pattern: &str) -> Self {
        Self {
            name,
            token: Regex::new(pattern).expect("code rule pattern is a valid regex"),
        }
    }

    /// Apply the rule to a stem, returning the code portion on a match.
    fn apply<'a>(&self, stem: &'a str) -> Option<&'a str> {
        self.token.find(stem).map(|m| &stem[..m.end()])
    }
}

/// Extracts canonical document codes from raw attachment filenames.
#[derive(Debug)]
pub struct CodeExtractor {
    rules: Vec<CodeRule>,
}

impl Default for CodeExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl CodeExtractor {
    /// Build the extractor with the standard rule chain.
    ///
    /// Rule order matters: revision markers beat date markers, which beat
    /// the space-based fallback.
    pub fn new() -> Self {
        Self {
            rules: vec![
                CodeRule::new("underscore-revision", r"(?i)_R\d{2}"),
                CodeRule::new("hyphen-revision", r"(?i)-R\d{2}"),
                CodeRule::new("date-stamp", r"_\d{8}"),
            ],
        }
    }

    /// Extract the canonical code and extension from a raw filename.
    ///
    /// Rules are tried in priority order against the stem; the first match
    /// wins. With no match the fallback keeps everything before the first
    /// space (the whole stem if there is none). The code is sanitized for
    /// the target filesystem; the extension is appended as received.
    pub fn extract(&self, raw_filename: &str) -> DocumentCode {
        let (stem, extension) = split_extension(raw_filename);

        let mut matched_rule = None;
        let mut code = None;
        for rule in &self.rules {
            if let Some(cut) = rule.apply(stem) {
                matched_rule = Some(rule.name);
                code = Some(cut.to_string());
                break;
            }
        }

        let code = code.unwrap_or_else(|| {
            stem.split(' ').next().unwrap_or(stem).to_string()
        });

        tracing::debug!(
            "Extracted code '{}' from '{}' (rule: {})",
            code,
            raw_filename,
            matched_rule.unwrap_or("fallback")
        );

        DocumentCode {
            code: sanitize_code(&code),
            extension: extension.to_string(),
        }
    }
}

/// A canonical document code plus the original file extension.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentCode {
    pub code: String,
    pub extension: String,
}

impl DocumentCode {
    /// The normalized filename: code + original extension.
    pub fn file_name(&self) -> String {
        format!("{}{}", self.code, self.extension)
    }
}

/// Split a filename into stem and extension (extension keeps its dot).
///
/// A leading dot or a trailing dot-less name yields an empty extension.
/// A dot followed by a path separator is not an extension boundary; the
/// whole name stays in the stem, where sanitization neutralizes the
/// separator.
fn split_extension(filename: &str) -> (&str, &str) {
    match filename.rfind('.') {
        Some(pos) if pos > 0 && !filename[pos..].contains(['/', '\\']) => {
            (&filename[..pos], &filename[pos..])
        }
        _ => (filename, ""),
    }
}

/// Replace filesystem-unsafe characters in a code with underscores.
fn sanitize_code(code: &str) -> String {
    code.chars()
        .map(|c| match c {
            '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect()
}

/// Check whether a filename's stem starts with an organizational prefix.
///
/// Case-insensitive, prefix-only. Used by the intake filter to reject
/// attachments without a document code before extraction runs.
pub fn has_required_prefix(filename: &str, prefix: &str) -> bool {
    let (stem, _) = split_extension(filename);
    stem.to_uppercase().starts_with(&prefix.to_uppercase())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(raw: &str) -> String {
        CodeExtractor::new().extract(raw).file_name()
    }

    #[test]
    fn test_underscore_revision_cuts_descriptive_suffix() {
        assert_eq!(
            extract("KLN-SPP2-MAR-WE-GN00-045_R00 Fire Alarm System Part-2 (MOXA).pdf"),
            "KLN-SPP2-MAR-WE-GN00-045_R00.pdf"
        );
    }

    #[test]
    fn test_underscore_revision_with_underscore_suffix() {
        assert_eq!(
            extract("KLN-SPP2-STQ-AR-GN00-326_R00_Prokon_Proyapi_Reply.xlsx"),
            "KLN-SPP2-STQ-AR-GN00-326_R00.xlsx"
        );
    }

    #[test]
    fn test_revision_marker_case_insensitive() {
        assert_eq!(
            extract("KLN-SPP2-MES-CV-GN00-103_r01_method.pdf"),
            "KLN-SPP2-MES-CV-GN00-103_r01.pdf"
        );
    }

    #[test]
    fn test_hyphen_revision() {
        assert_eq!(
            extract("KLN-SPP2-ELE-DW-001-R02 single line diagram.dwg"),
            "KLN-SPP2-ELE-DW-001-R02.dwg"
        );
    }

    #[test]
    fn test_date_stamp_rule() {
        assert_eq!(
            extract("KLN-PRO-SPP2-MOM-PM-037_20251105_engineer comments.docx"),
            "KLN-PRO-SPP2-MOM-PM-037_20251105.docx"
        );
    }

    #[test]
    fn test_revision_beats_date_stamp() {
        assert_eq!(
            extract("KLN-SPP2-DOC-001_R00_20251105 comments.pdf"),
            "KLN-SPP2-DOC-001_R00.pdf"
        );
    }

    #[test]
    fn test_first_token_governs_cut_point() {
        assert_eq!(
            extract("KLN-SPP2-DOC-001_R00 superseded by _R01.pdf"),
            "KLN-SPP2-DOC-001_R00.pdf"
        );
    }

    #[test]
    fn test_fallback_cuts_at_first_space() {
        assert_eq!(
            extract("KLN-SPP2-GEN-001 cover letter.pdf"),
            "KLN-SPP2-GEN-001.pdf"
        );
    }

    #[test]
    fn test_fallback_whole_stem_without_space() {
        assert_eq!(extract("REPORTFINAL.pdf"), "REPORTFINAL.pdf");
    }

    #[test]
    fn test_no_extension() {
        let doc = CodeExtractor::new().extract("KLN-SPP2-DOC-001_R00 notes");
        assert_eq!(doc.code, "KLN-SPP2-DOC-001_R00");
        assert_eq!(doc.extension, "");
        assert_eq!(doc.file_name(), "KLN-SPP2-DOC-001_R00");
    }

    #[test]
    fn test_extension_case_preserved() {
        assert_eq!(
            extract("KLN-SPP2-DOC-002_R01 scan.PDF"),
            "KLN-SPP2-DOC-002_R01.PDF"
        );
    }

    #[test]
    fn test_extraction_idempotent_on_code() {
        let first = CodeExtractor::new().extract("KLN-SPP2-MAR-WE-GN00-045_R00 rev notes.pdf");
        let second = CodeExtractor::new().extract(&first.file_name());
        assert_eq!(first, second);
    }

    #[test]
    fn test_unsafe_characters_replaced() {
        let doc = CodeExtractor::new().extract("KLN:SPP2*DOC?001.pdf");
        assert_eq!(doc.code, "KLN_SPP2_DOC_001");
        assert!(!doc
            .code
            .chars()
            .any(|c| matches!(c, '\\' | '/' | ':' | '*' | '?' | '"' | '<' | '>' | '|')));
    }

    #[test]
    fn test_separator_after_dot_is_not_an_extension() {
        let doc = CodeExtractor::new().extract("a.b/c");
        assert_eq!(doc.code, "a_b_c");
        assert_eq!(doc.extension, "");

        let doc = CodeExtractor::new().extract(r"report.v1\final");
        assert_eq!(doc.code, "report.v1_final");
        assert_eq!(doc.extension, "");
    }

    #[test]
    fn test_has_required_prefix() {
        assert!(has_required_prefix("KLN-SPP2-DOC-001_R00.pdf", "KLN-"));
        assert!(has_required_prefix("kln-spp2-doc-001_r00.pdf", "KLN-"));
        assert!(!has_required_prefix("scan0001.pdf", "KLN-"));
        // Prefix check runs on the stem, not the extension.
        assert!(!has_required_prefix("notes.kln-", "KLN-"));
    }
}
