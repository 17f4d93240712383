//! Source root discovery.
//!
//! The source root is one level deep:
//!
//! ```text
//! source/
//! ├── welcome.md          # post, slug `welcome`
//! ├── welcome/            # asset folder, every file is a discovered image
//! │   └── pic.jpg
//! └── .DS_Store           # ignored
//! ```
//!
//! Asset folders are not associated with posts here; images are matched to
//! posts by basename at export time.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use postport_core::SourceDocument;
use postport_logging::{port_debug, port_info, port_warn};
use thiserror::Error;

use crate::images::DiscoveredImages;
use crate::settings::{ConvertSettings, ScanPolicy};
use crate::types::{join_failures, DocumentFailure, FailureKind};

#[derive(Debug, Error)]
pub enum ScanError {
    #[error("cannot list source directory {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{}", describe_malformed(.failures, .parsed))]
    Malformed {
        failures: Vec<DocumentFailure>,
        parsed: usize,
    },
}

fn describe_malformed(failures: &[DocumentFailure], parsed: &usize) -> String {
    format!(
        "{} source document(s) failed, {} parsed:\n{}",
        failures.len(),
        parsed,
        join_failures(failures)
    )
}

#[derive(Debug, Clone, Default)]
pub struct ScanReport {
    pub documents: Vec<SourceDocument>,
    pub images: DiscoveredImages,
    /// Posts skipped under [`ScanPolicy::SkipMalformed`]; always empty otherwise.
    pub failures: Vec<DocumentFailure>,
}

pub fn scan(root: &Path, settings: &ConvertSettings) -> Result<ScanReport, ScanError> {
    port_info!("Scanning {:?}", root);
    let entries = collect_entries(root, settings).map_err(|source| ScanError::Io {
        path: root.to_path_buf(),
        source,
    })?;

    let mut report = ScanReport::default();
    for path in entries {
        if path.is_dir() {
            collect_asset_folder(&path, settings, &mut report.images);
            continue;
        }
        let name = file_name(&path);
        let Some(slug) = settings.post_slug(&name) else {
            port_debug!("Skipping non-post file {:?}", path);
            continue;
        };
        match read_post(&path, slug) {
            Ok(doc) => report.documents.push(doc),
            Err(failure) => {
                port_warn!("Cannot convert {:?}: {}", path, failure);
                report.failures.push(failure);
            }
        }
    }

    port_info!(
        "Scanned {} post(s), {} failed, {} image(s) discovered",
        report.documents.len(),
        report.failures.len(),
        report.images.len()
    );

    if !report.failures.is_empty() && settings.scan_policy == ScanPolicy::AllOrNothing {
        return Err(ScanError::Malformed {
            failures: report.failures,
            parsed: report.documents.len(),
        });
    }
    Ok(report)
}

fn read_post(path: &Path, slug: &str) -> Result<SourceDocument, DocumentFailure> {
    let text = fs::read_to_string(path)
        .map_err(|e| DocumentFailure::new(slug, FailureKind::Read, e.to_string()))?;
    SourceDocument::parse(slug, &text)
        .map_err(|e| DocumentFailure::new(slug, FailureKind::Malformed, e.to_string()))
}

fn collect_asset_folder(dir: &Path, settings: &ConvertSettings, images: &mut DiscoveredImages) {
    let entries = match collect_entries(dir, settings) {
        Ok(entries) => entries,
        Err(err) => {
            port_warn!("Skipping unreadable asset folder {:?}: {}", dir, err);
            return;
        }
    };
    for path in entries {
        if path.is_dir() {
            port_debug!("Ignoring nested directory {:?}", path);
            continue;
        }
        images.push(path);
    }
}

fn collect_entries(path: &Path, settings: &ConvertSettings) -> io::Result<Vec<PathBuf>> {
    let mut entries: Vec<PathBuf> = fs::read_dir(path)?
        .map(|entry| entry.map(|e| e.path()))
        .collect::<io::Result<Vec<_>>>()?
        .into_iter()
        .filter(|p| {
            let ignored = settings.is_ignored(&file_name(p));
            if ignored {
                port_debug!("Ignoring metadata entry {:?}", p);
            }
            !ignored
        })
        .collect();

    entries.sort();
    Ok(entries)
}

fn file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_default()
}
