//! Manifest (pubspec.yaml) loading and atomic persistence.

pub mod reader;
pub mod writer;

pub use reader::{Manifest, VERSION_KEY};
pub use writer::write_atomic;

/// Manifest path used when none is given: the Flutter project root, two
/// directories above the release scripts.
pub const DEFAULT_MANIFEST_PATH: &str = "../../pubspec.yaml";
