//! Persist a manifest back to disk.

use std::io::Write;
use std::path::Path;

use serde_yaml::Value;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::error::BumpError;

use super::reader::Manifest;

impl Manifest {
    /// Serialize the document to YAML text ending in a single newline.
    pub fn to_yaml(&self) -> Result<String, BumpError> {
        let mut yaml = serde_yaml::to_string(&Value::Mapping(self.document.clone()))
            .map_err(BumpError::SerializeFailed)?;

        if !yaml.ends_with('\n') {
            yaml.push('\n');
        }

        Ok(yaml)
    }

    /// Write the document back to its own path.
    pub fn save(&self) -> Result<(), BumpError> {
        let yaml = self.to_yaml()?;
        write_atomic(&self.path, &yaml)
    }
}

/// Replace the file at `path` with `content`.
///
/// The content goes to a temp file in the same directory, which is then
/// renamed over `path`, so a failed write never truncates the original.
/// The original file's permissions are carried over.
pub fn write_atomic(path: &Path, content: &str) -> Result<(), BumpError> {
    let write_failed = |source: std::io::Error| BumpError::WriteFailed {
        path: path.to_path_buf(),
        source,
    };

    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut temp = NamedTempFile::new_in(dir).map_err(write_failed)?;
    temp.write_all(content.as_bytes()).map_err(write_failed)?;
    temp.as_file().sync_all().map_err(write_failed)?;

    if let Ok(metadata) = std::fs::metadata(path) {
        temp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_failed)?;
    }

    temp.persist(path).map_err(|e| write_failed(e.error))?;

    debug!(path = %path.display(), bytes = content.len(), "Wrote manifest");

    Ok(())
}
