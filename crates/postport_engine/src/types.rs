use std::fmt;
use std::path::PathBuf;

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum FailureKind {
    Malformed,
    Read,
    CreateDir,
    Write,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::Malformed => write!(f, "malformed document"),
            FailureKind::Read => write!(f, "read failed"),
            FailureKind::CreateDir => write!(f, "cannot create post directory"),
            FailureKind::Write => write!(f, "write failed"),
        }
    }
}

/// One post that could not be scanned or exported.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DocumentFailure {
    pub slug: String,
    pub kind: FailureKind,
    pub message: String,
}

impl DocumentFailure {
    pub(crate) fn new(slug: &str, kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            slug: slug.to_string(),
            kind,
            message: message.into(),
        }
    }
}

impl fmt::Display for DocumentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}: {}", self.slug, self.kind, self.message)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageCopyOutcome {
    pub source: PathBuf,
    pub destination: PathBuf,
    /// Bytes copied, or the reason the copy failed.
    pub result: Result<u64, String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportedDocument {
    pub slug: String,
    pub dir: PathBuf,
    pub index_path: PathBuf,
    pub images: Vec<ImageCopyOutcome>,
    /// Referenced filenames with no match among the discovered images.
    pub unmatched_images: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    pub documents: Vec<ExportedDocument>,
    pub failures: Vec<DocumentFailure>,
}

impl ExportSummary {
    pub fn exported_count(&self) -> usize {
        self.documents.len()
    }

    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn copied_images(&self) -> usize {
        self.image_outcomes().filter(|o| o.result.is_ok()).count()
    }

    pub fn failed_images(&self) -> usize {
        self.image_outcomes().filter(|o| o.result.is_err()).count()
    }

    fn image_outcomes(&self) -> impl Iterator<Item = &ImageCopyOutcome> {
        self.documents.iter().flat_map(|d| d.images.iter())
    }
}

pub(crate) fn join_failures(failures: &[DocumentFailure]) -> String {
    failures
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
