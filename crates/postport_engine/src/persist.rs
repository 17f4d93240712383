use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("target root missing or not writable: {0}")]
    TargetRoot(String),
    #[error("post directory already exists: {0:?}")]
    AlreadyExists(PathBuf),
    #[error("io error: {0}")]
    Io(#[from] io::Error),
}

/// Ensure the target root exists and is writable; create it if missing.
pub fn ensure_target_root(dir: &Path) -> Result<(), PersistError> {
    if dir.exists() {
        let meta = fs::metadata(dir).map_err(|e| PersistError::TargetRoot(e.to_string()))?;
        if !meta.is_dir() {
            return Err(PersistError::TargetRoot("path is not a directory".into()));
        }
    } else {
        fs::create_dir_all(dir).map_err(|e| PersistError::TargetRoot(e.to_string()))?;
    }
    // Basic writability probe: try creating a temp file.
    NamedTempFile::new_in(dir).map_err(|e| PersistError::TargetRoot(e.to_string()))?;
    Ok(())
}

/// Create `{root}/{name}`. An existing directory is an error, never reused.
pub fn create_post_dir(root: &Path, name: &str) -> Result<PathBuf, PersistError> {
    let dir = root.join(name);
    match fs::create_dir(&dir) {
        Ok(()) => Ok(dir),
        Err(err) if err.kind() == io::ErrorKind::AlreadyExists => {
            Err(PersistError::AlreadyExists(dir))
        }
        Err(err) => Err(PersistError::Io(err)),
    }
}

/// Atomically write content to `{dir}/{filename}` by writing a temp file then renaming.
///
/// The directory must already exist.
pub struct AtomicFileWriter {
    dir: PathBuf,
}

impl AtomicFileWriter {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    pub fn write(&self, filename: &str, content: &str) -> Result<PathBuf, PersistError> {
        let target = self.dir.join(filename);
        let mut tmp = NamedTempFile::new_in(&self.dir)?;
        tmp.write_all(content.as_bytes())?;
        tmp.flush()?;
        tmp.as_file_mut().sync_all()?;

        // `persist` renames over an existing file, so `target` is never missing.
        tmp.persist(&target).map_err(|e| PersistError::Io(e.error))?;
        Ok(target)
    }
}
