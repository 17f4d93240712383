use std::path::Path;

use postport_core::{build_target_document, TargetDocument};
use postport_logging::port_info;
use serde::Serialize;
use thiserror::Error;

use crate::export::{ExportError, Exporter};
use crate::scan::{scan, ScanError};
use crate::settings::ConvertSettings;
use crate::types::{DocumentFailure, ExportSummary};

#[derive(Debug, Error)]
pub enum ConvertError {
    #[error(transparent)]
    Scan(#[from] ScanError),
    #[error(transparent)]
    Export(#[from] ExportError),
}

/// Outcome of a full source-to-target run.
#[derive(Debug, Clone, Serialize)]
pub struct ConversionReport {
    pub scanned: usize,
    pub discovered_images: usize,
    /// Posts left out under `ScanPolicy::SkipMalformed`.
    pub skipped: Vec<DocumentFailure>,
    pub export: ExportSummary,
}

impl ConversionReport {
    pub fn converted(&self) -> usize {
        self.export.exported_count()
    }
}

/// Scan `source_root`, convert every post and export into `target_root`.
pub fn convert_blog(
    source_root: &Path,
    target_root: &Path,
    author: &str,
    settings: &ConvertSettings,
) -> Result<ConversionReport, ConvertError> {
    let scanned = scan(source_root, settings)?;

    let targets: Vec<TargetDocument> = scanned
        .documents
        .iter()
        .map(|doc| build_target_document(doc, author))
        .collect();
    port_info!("Assembled {} target document(s)", targets.len());

    let exporter = Exporter::new(settings.clone())?;
    let export = exporter.export(target_root, &targets, &scanned.images)?;

    Ok(ConversionReport {
        scanned: scanned.documents.len(),
        discovered_images: scanned.images.len(),
        skipped: scanned.failures,
        export,
    })
}
