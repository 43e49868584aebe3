//! Manifest version parsing and patch bumping.

pub mod bump;
pub mod parse;

pub use bump::bump_patch_str;
pub use parse::ManifestVersion;
