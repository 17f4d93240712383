//! Postport engine: filesystem side of the conversion pipeline.
mod convert;
mod copy;
mod export;
mod images;
mod persist;
mod scan;
mod settings;
mod types;

pub use convert::{convert_blog, ConversionReport, ConvertError};
pub use copy::{CopyPool, ImageCopier, TokioImageCopier};
pub use export::{export, ExportError, Exporter};
pub use images::DiscoveredImages;
pub use persist::{create_post_dir, ensure_target_root, AtomicFileWriter, PersistError};
pub use scan::{scan, ScanError, ScanReport};
pub use settings::{ConvertSettings, ScanPolicy};
pub use types::{
    DocumentFailure, ExportSummary, ExportedDocument, FailureKind, ImageCopyOutcome,
};
