//! Writes rendered artifacts to disk.

use std::path::{Path, PathBuf};

use tracing::info;

use crate::error::IoError;
use crate::export::Artifact;

/// Writes each artifact into `dir`, creating it if needed. Returns the
/// written paths in order.
///
/// # Errors
///
/// [`IoError::Io`] when the directory or a file cannot be written.
pub fn write_artifacts(dir: &Path, artifacts: &[Artifact]) -> Result<Vec<PathBuf>, IoError> {
    std::fs::create_dir_all(dir).map_err(|e| IoError::io(dir, &e))?;
    let mut written = Vec::with_capacity(artifacts.len());
    for artifact in artifacts {
        let path = dir.join(&artifact.file_name);
        std::fs::write(&path, &artifact.bytes).map_err(|e| IoError::io(&path, &e))?;
        info!(path = %path.display(), bytes = artifact.bytes.len(), "wrote export");
        written.push(path);
    }
    Ok(written)
}
