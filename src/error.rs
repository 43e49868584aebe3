//! Error types for pubbump modules using thiserror.

use std::path::PathBuf;

use thiserror::Error;

/// Errors from bumping a manifest version.
#[derive(Error, Debug)]
pub enum BumpError {
    #[error("Failed to read manifest {}: {source}", path.display())]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write manifest {}: {source}", path.display())]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Manifest {} is not valid YAML: {source}", path.display())]
    InvalidManifest {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("Manifest {} must be a YAML mapping at the top level", path.display())]
    NotAMapping { path: PathBuf },

    #[error("Failed to serialize manifest: {0}")]
    SerializeFailed(#[source] serde_yaml::Error),

    #[error("Manifest has no top-level 'version' field")]
    MissingField,

    #[error("Malformed version '{value}': {reason}. Expected MAJOR.MINOR.PATCH+BUILD")]
    MalformedVersion { value: String, reason: String },
}

impl BumpError {
    pub(crate) fn malformed(value: impl Into<String>, reason: impl Into<String>) -> Self {
        BumpError::MalformedVersion {
            value: value.into(),
            reason: reason.into(),
        }
    }
}
