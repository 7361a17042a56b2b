//! Client-side upload validation
//!
//! A file is accepted when its declared MIME type OR its extension is one of
//! PDF/DOC/DOCX, and its size does not exceed the configured maximum. The
//! size check runs first, so an oversized file is always `TooLarge`.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const MIME_PDF: &str = "application/pdf";
pub const MIME_DOC: &str = "application/msword";
pub const MIME_DOCX: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

pub const ACCEPTED_MIME_TYPES: [&str; 3] = [MIME_PDF, MIME_DOC, MIME_DOCX];
pub const ACCEPTED_EXTENSIONS: [&str; 3] = [".pdf", ".doc", ".docx"];

pub const BYTES_PER_MB: u64 = 1024 * 1024;
pub const DEFAULT_MAX_UPLOAD_MB: u64 = 10;

/// A file the user picked or dropped, reduced to what validation needs
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UploadCandidate {
    pub name: String,
    pub mime_type: String,
    pub extension: String,
    pub size_bytes: u64,
}

impl UploadCandidate {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, size_bytes: u64) -> Self {
        let name = name.into();
        let extension = extension_of(&name);
        Self {
            name,
            mime_type: mime_type.into(),
            extension,
            size_bytes,
        }
    }

    /// Size in KB with one decimal, e.g. "48.8 KB"
    pub fn size_label(&self) -> String {
        format!("{:.1} KB", self.size_bytes as f64 / 1024.0)
    }
}

/// `.` + lowercase text after the last dot; a name without a dot yields
/// `.` + the whole name, which never matches an accepted extension.
pub fn extension_of(name: &str) -> String {
    let tail = name.rsplit('.').next().unwrap_or(name);
    format!(".{}", tail.to_lowercase())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum UploadRejection {
    #[error("Only PDF, DOC or DOCX files are accepted.")]
    UnsupportedType,
    #[error("File is too large. Maximum size is {limit_mb}MB.")]
    TooLarge { limit_mb: u64 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UploadPolicy {
    pub max_bytes: u64,
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self::with_limit_mb(DEFAULT_MAX_UPLOAD_MB)
    }
}

impl UploadPolicy {
    /// Limits beyond `u64::MAX` bytes are capped there
    pub fn with_limit_mb(limit_mb: u64) -> Self {
        Self {
            max_bytes: limit_mb.saturating_mul(BYTES_PER_MB),
        }
    }

    pub fn limit_mb(&self) -> u64 {
        self.max_bytes / BYTES_PER_MB
    }

    pub fn is_accepted_type(candidate: &UploadCandidate) -> bool {
        ACCEPTED_MIME_TYPES.contains(&candidate.mime_type.as_str())
            || ACCEPTED_EXTENSIONS.contains(&candidate.extension.as_str())
    }

    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadRejection> {
        if candidate.size_bytes > self.max_bytes {
            return Err(UploadRejection::TooLarge {
                limit_mb: self.limit_mb(),
            });
        }
        if !Self::is_accepted_type(candidate) {
            return Err(UploadRejection::UnsupportedType);
        }
        Ok(())
    }

    /// Value for the `accept` attribute of the file input
    pub fn accept_attribute() -> String {
        ACCEPTED_EXTENSIONS
            .iter()
            .chain(ACCEPTED_MIME_TYPES.iter())
            .copied()
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_pdf_is_accepted() {
        let candidate = UploadCandidate::new("contract.pdf", MIME_PDF, 50 * 1024);
        assert_eq!(UploadPolicy::default().validate(&candidate), Ok(()));
    }

    #[test]
    fn test_oversize_is_too_large_with_limit_10() {
        let policy = UploadPolicy::default();
        for (name, mime) in [
            ("a.pdf", MIME_PDF),
            ("b.doc", MIME_DOC),
            ("c.docx", MIME_DOCX),
            ("d.png", "image/png"),
        ] {
            let candidate = UploadCandidate::new(name, mime, 11 * BYTES_PER_MB);
            assert_eq!(
                policy.validate(&candidate),
                Err(UploadRejection::TooLarge { limit_mb: 10 }),
                "{name}"
            );
        }
    }

    #[test]
    fn test_exact_limit_is_accepted() {
        let candidate = UploadCandidate::new("edge.pdf", MIME_PDF, 10 * BYTES_PER_MB);
        assert!(UploadPolicy::default().validate(&candidate).is_ok());
    }

    #[test]
    fn test_unsupported_when_mime_and_extension_both_miss() {
        let policy = UploadPolicy::default();
        for (name, mime) in [
            ("notes.txt", "text/plain"),
            ("scan.png", "image/png"),
            ("README", ""),
        ] {
            let candidate = UploadCandidate::new(name, mime, 1024);
            assert_eq!(
                policy.validate(&candidate),
                Err(UploadRejection::UnsupportedType),
                "{name}"
            );
        }
    }

    #[test]
    fn test_either_mime_or_extension_is_enough() {
        let policy = UploadPolicy::default();
        // Browsers often report an empty type for .doc files
        let by_extension = UploadCandidate::new("Agreement.DOC", "", 2048);
        assert!(policy.validate(&by_extension).is_ok());

        let by_mime = UploadCandidate::new("download", MIME_DOCX, 2048);
        assert!(policy.validate(&by_mime).is_ok());
    }

    #[test]
    fn test_extension_of() {
        assert_eq!(extension_of("contract.final.PDF"), ".pdf");
        assert_eq!(extension_of("noext"), ".noext");
        assert_eq!(extension_of("trailing."), ".");
    }

    #[test]
    fn test_configured_limit() {
        let policy = UploadPolicy::with_limit_mb(2);
        let candidate = UploadCandidate::new("a.pdf", MIME_PDF, 3 * BYTES_PER_MB);
        assert_eq!(
            policy.validate(&candidate),
            Err(UploadRejection::TooLarge { limit_mb: 2 })
        );
    }

    #[test]
    fn test_huge_limit_saturates() {
        let policy = UploadPolicy::with_limit_mb(u64::MAX / 1024);
        assert_eq!(policy.max_bytes, u64::MAX);
        let candidate = UploadCandidate::new("a.pdf", MIME_PDF, 500 * BYTES_PER_MB);
        assert_eq!(policy.validate(&candidate), Ok(()));
    }

    #[test]
    fn test_rejection_messages() {
        assert_eq!(
            UploadRejection::TooLarge { limit_mb: 10 }.to_string(),
            "File is too large. Maximum size is 10MB."
        );
        assert_eq!(
            UploadRejection::UnsupportedType.to_string(),
            "Only PDF, DOC or DOCX files are accepted."
        );
    }

    #[test]
    fn test_size_label_and_accept_attribute() {
        let candidate = UploadCandidate::new("contract.pdf", MIME_PDF, 51_200);
        assert_eq!(candidate.size_label(), "50.0 KB");
        let accept = UploadPolicy::accept_attribute();
        assert!(accept.starts_with(".pdf,.doc,.docx,application/pdf"));
    }
}
