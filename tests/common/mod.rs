//! Shared test utilities for integration tests.
//!
//! Not all functions are used by every test file, but they're shared across tests.
#![allow(dead_code)]

use std::path::{Path, PathBuf};

/// Get the path to test fixtures directory.
pub fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Get the path to a manifest fixture.
pub fn manifest_fixture(name: &str) -> PathBuf {
    fixtures_dir().join("manifests").join(name)
}

/// Read a fixture file as a string.
pub fn read_fixture(path: PathBuf) -> String {
    std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {:?}: {}", path, e))
}

/// Parse a YAML file into a generic value.
pub fn read_yaml(path: &Path) -> serde_yaml::Value {
    let content = std::fs::read_to_string(path)
        .unwrap_or_else(|e| panic!("Failed to read {:?}: {}", path, e));
    serde_yaml::from_str(&content).unwrap_or_else(|e| panic!("Invalid YAML in {:?}: {}", path, e))
}

/// A scratch project directory holding a `pubspec.yaml`.
pub struct TestProject {
    pub dir: tempfile::TempDir,
}

impl TestProject {
    /// Create a project whose manifest has the given content.
    pub fn with_manifest(content: &str) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp directory");
        std::fs::write(dir.path().join("pubspec.yaml"), content)
            .expect("Failed to write manifest");
        Self { dir }
    }

    /// Create a project with a minimal manifest declaring `version`.
    pub fn with_version(version: &str) -> Self {
        Self::with_manifest(&format!("name: test_app\nversion: {}\n", version))
    }

    /// Create a project from the realistic pubspec fixture.
    pub fn from_fixture() -> Self {
        Self::with_manifest(&read_fixture(manifest_fixture("pubspec.yaml")))
    }

    /// Path to the project's manifest.
    pub fn manifest_path(&self) -> PathBuf {
        self.dir.path().join("pubspec.yaml")
    }

    /// Current raw manifest content.
    pub fn manifest_content(&self) -> String {
        std::fs::read_to_string(self.manifest_path()).expect("Failed to read manifest")
    }

    /// The `version` value as currently written on disk.
    pub fn version_on_disk(&self) -> String {
        read_yaml(&self.manifest_path())["version"]
            .as_str()
            .expect("version should be a string")
            .to_string()
    }

    /// Create `<project>/android/scripts` and return it, so that `../../pubspec.yaml`
    /// resolves to this project's manifest.
    pub fn nested_workdir(&self) -> PathBuf {
        let workdir = self.dir.path().join("android").join("scripts");
        std::fs::create_dir_all(&workdir).expect("Failed to create nested dir");
        workdir
    }
}
