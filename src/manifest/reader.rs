//! Load a pubspec-style manifest and access its `version` field.

use std::path::{Path, PathBuf};

use serde_yaml::{Mapping, Value};
use tracing::debug;

use crate::error::BumpError;
use crate::version::ManifestVersion;

/// Top-level key holding the version string.
pub const VERSION_KEY: &str = "version";

/// A loaded manifest document.
///
/// The document is held as a YAML mapping, which keeps key order, so writing
/// it back preserves every other field at the value level.
#[derive(Debug, Clone)]
pub struct Manifest {
    pub path: PathBuf,
    pub document: Mapping,
}

impl Manifest {
    /// Read and parse the manifest at `path`.
    pub fn load(path: &Path) -> Result<Self, BumpError> {
        let content = std::fs::read_to_string(path).map_err(|source| BumpError::ReadFailed {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "Read manifest");

        Self::from_yaml(path, &content)
    }

    /// Parse manifest content that was read from `path`.
    pub fn from_yaml(path: &Path, content: &str) -> Result<Self, BumpError> {
        let value: Value =
            serde_yaml::from_str(content).map_err(|source| BumpError::InvalidManifest {
                path: path.to_path_buf(),
                source,
            })?;

        match value {
            Value::Mapping(document) => Ok(Self {
                path: path.to_path_buf(),
                document,
            }),
            _ => Err(BumpError::NotAMapping {
                path: path.to_path_buf(),
            }),
        }
    }

    /// The raw `version` string.
    ///
    /// Returns `MissingField` when the key is absent and `MalformedVersion`
    /// when YAML resolved it to something other than a string, e.g. an
    /// unquoted `1.0` loads as a float.
    pub fn version_str(&self) -> Result<&str, BumpError> {
        match self.document.get(VERSION_KEY) {
            None => Err(BumpError::MissingField),
            Some(Value::String(s)) => Ok(s),
            Some(Value::Number(n)) => Err(BumpError::malformed(
                n.to_string(),
                "expected a string, found a number",
            )),
            Some(Value::Null) => Err(BumpError::malformed("~", "version is null")),
            Some(other) => Err(BumpError::malformed(
                format!("{other:?}"),
                "expected a string",
            )),
        }
    }

    /// The parsed `version` field.
    pub fn version(&self) -> Result<ManifestVersion, BumpError> {
        self.version_str()?.parse()
    }

    /// Replace the `version` field in place. Key position is unchanged.
    pub fn set_version(&mut self, version: &ManifestVersion) {
        self.document.insert(
            Value::String(VERSION_KEY.to_string()),
            Value::String(version.to_string()),
        );
    }
}
