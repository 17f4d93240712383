use std::io;
use std::path::Path;
use std::sync::Arc;

use postport_core::{target_dir_name, TargetDocument};
use postport_logging::{port_info, port_warn};
use thiserror::Error;

use crate::copy::{CopyPool, ImageCopier, TokioImageCopier};
use crate::images::DiscoveredImages;
use crate::persist::{create_post_dir, ensure_target_root, AtomicFileWriter, PersistError};
use crate::settings::ConvertSettings;
use crate::types::{join_failures, DocumentFailure, ExportSummary, ExportedDocument, FailureKind};

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("target directory unusable: {0}")]
    TargetRoot(#[source] PersistError),
    #[error("cannot start image copy runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("{}", describe_incomplete(.0))]
    Incomplete(Box<ExportSummary>),
}

fn describe_incomplete(summary: &ExportSummary) -> String {
    format!(
        "{} of {} document(s) failed to export:\n{}",
        summary.failures.len(),
        summary.failures.len() + summary.exported_count(),
        join_failures(&summary.failures)
    )
}

/// Writes target posts and their images under a target root.
pub struct Exporter {
    settings: ConvertSettings,
    pool: CopyPool,
}

impl Exporter {
    pub fn new(settings: ConvertSettings) -> Result<Self, ExportError> {
        Self::with_copier(settings, Arc::new(TokioImageCopier))
    }

    pub fn with_copier(
        settings: ConvertSettings,
        copier: Arc<dyn ImageCopier>,
    ) -> Result<Self, ExportError> {
        let pool = CopyPool::new(copier).map_err(ExportError::Runtime)?;
        Ok(Self { settings, pool })
    }

    /// Export every document, continuing past per-document failures.
    ///
    /// Returns [`ExportError::Incomplete`] with the full summary if any
    /// document failed. Image copy failures never fail a document.
    pub fn export(
        &self,
        target_root: &Path,
        documents: &[TargetDocument],
        images: &DiscoveredImages,
    ) -> Result<ExportSummary, ExportError> {
        ensure_target_root(target_root).map_err(ExportError::TargetRoot)?;

        let mut summary = ExportSummary::default();
        for doc in documents {
            match self.export_document(target_root, doc, images) {
                Ok(exported) => {
                    port_info!(
                        "Exported {} -> {:?} ({} image(s))",
                        doc.slug,
                        exported.dir,
                        exported.images.len()
                    );
                    summary.documents.push(exported);
                }
                Err(failure) => {
                    port_warn!("Export failed for {}", failure);
                    summary.failures.push(failure);
                }
            }
        }

        if summary.is_complete() {
            Ok(summary)
        } else {
            Err(ExportError::Incomplete(Box::new(summary)))
        }
    }

    fn export_document(
        &self,
        target_root: &Path,
        doc: &TargetDocument,
        images: &DiscoveredImages,
    ) -> Result<ExportedDocument, DocumentFailure> {
        let dir_name = target_dir_name(&doc.date, &doc.slug);
        let dir = create_post_dir(target_root, &dir_name)
            .map_err(|e| DocumentFailure::new(&doc.slug, FailureKind::CreateDir, e.to_string()))?;

        let writer = AtomicFileWriter::new(dir.clone());
        let index_path = writer
            .write(&self.settings.index_filename, &doc.content)
            .map_err(|e| DocumentFailure::new(&doc.slug, FailureKind::Write, e.to_string()))?;

        if doc.images.is_empty() {
            return Ok(ExportedDocument {
                slug: doc.slug.clone(),
                dir,
                index_path,
                images: Vec::new(),
                unmatched_images: Vec::new(),
            });
        }

        let matched = images.matching_for(&doc.slug, &doc.images);
        let unmatched_images = images.unmatched(&doc.images);
        if matched.is_empty() {
            port_warn!(
                "No discovered images match {} (referenced: {:?})",
                doc.slug,
                doc.images
            );
        } else if !unmatched_images.is_empty() {
            port_warn!("{} references missing image(s) {:?}", doc.slug, unmatched_images);
        }

        let outcomes = self.pool.copy_into(&matched, &dir);
        Ok(ExportedDocument {
            slug: doc.slug.clone(),
            dir,
            index_path,
            images: outcomes,
            unmatched_images,
        })
    }
}

/// Export with the default tokio-backed image copier.
pub fn export(
    target_root: &Path,
    documents: &[TargetDocument],
    images: &DiscoveredImages,
    settings: &ConvertSettings,
) -> Result<ExportSummary, ExportError> {
    Exporter::new(settings.clone())?.export(target_root, documents, images)
}
