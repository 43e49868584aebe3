//! pubbump - A CLI tool that bumps the patch version of a Flutter pubspec.yaml.
//!
//! # Overview
//!
//! pubbump reads the top-level `version` field (`MAJOR.MINOR.PATCH+BUILD`),
//! increments PATCH, and writes the manifest back atomically. The build
//! metadata, which Flutter stamps as the Android `versionCode`, is passed
//! through unchanged.

pub mod bumper;
pub mod error;
pub mod manifest;
pub mod version;

// Re-export commonly used types
pub use bumper::{BumpOutcome, bump_patch, plan_patch_bump, read_version};
pub use error::BumpError;
pub use manifest::{DEFAULT_MANIFEST_PATH, Manifest};
pub use version::ManifestVersion;
