use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use futures_util::future::join_all;
use postport_logging::{port_debug, port_warn};
use tokio::runtime::{Builder, Runtime};

use crate::types::ImageCopyOutcome;

#[async_trait::async_trait]
pub trait ImageCopier: Send + Sync {
    /// Copy one file, returning the number of bytes written.
    async fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64>;
}

#[derive(Debug, Clone, Copy, Default)]
pub struct TokioImageCopier;

#[async_trait::async_trait]
impl ImageCopier for TokioImageCopier {
    async fn copy(&self, source: &Path, destination: &Path) -> io::Result<u64> {
        tokio::fs::copy(source, destination).await
    }
}

/// Runs the image copies of one post concurrently.
pub struct CopyPool {
    runtime: Runtime,
    copier: Arc<dyn ImageCopier>,
}

impl CopyPool {
    pub fn new(copier: Arc<dyn ImageCopier>) -> io::Result<Self> {
        let runtime = Builder::new_multi_thread()
            .thread_name("postport-copy")
            .build()?;
        Ok(Self { runtime, copier })
    }

    /// Copy every source into `dir`, keeping its filename.
    ///
    /// Blocks until all copies finish. Failures are logged and reported in
    /// the outcomes, never returned as an error.
    pub fn copy_into(&self, sources: &[&Path], dir: &Path) -> Vec<ImageCopyOutcome> {
        let mut jobs: Vec<(PathBuf, PathBuf)> = Vec::with_capacity(sources.len());
        for source in sources {
            let Some(name) = source.file_name() else {
                port_warn!("Skipping image without a filename: {:?}", source);
                continue;
            };
            jobs.push((source.to_path_buf(), dir.join(name)));
        }

        let handles: Vec<_> = jobs
            .iter()
            .map(|(source, destination)| {
                let copier = Arc::clone(&self.copier);
                let source = source.clone();
                let destination = destination.clone();
                self.runtime
                    .spawn(async move { copier.copy(&source, &destination).await })
            })
            .collect();

        let results = self.runtime.block_on(join_all(handles));

        jobs.into_iter()
            .zip(results)
            .map(|((source, destination), joined)| {
                let result = match joined {
                    Ok(Ok(bytes)) => {
                        port_debug!("Copied {:?} -> {:?} ({} bytes)", source, destination, bytes);
                        Ok(bytes)
                    }
                    Ok(Err(err)) => Err(err.to_string()),
                    Err(join_err) => Err(join_err.to_string()),
                };
                if let Err(reason) = &result {
                    port_warn!("Failed to copy {:?} -> {:?}: {}", source, destination, reason);
                }
                ImageCopyOutcome {
                    source,
                    destination,
                    result,
                }
            })
            .collect()
    }
}
