//! Patch increments on manifest versions.

use crate::error::BumpError;

use super::parse::ManifestVersion;

impl ManifestVersion {
    /// Return the next patch version.
    ///
    /// Only `patch` changes: there is no carry into `minor`, and the build
    /// metadata passes through untouched.
    pub fn next_patch(&self) -> Result<ManifestVersion, BumpError> {
        let patch = self
            .patch
            .checked_add(1)
            .ok_or_else(|| BumpError::malformed(self.to_string(), "patch component overflows"))?;

        Ok(ManifestVersion {
            patch,
            ..self.clone()
        })
    }
}

/// Bump the patch component of a raw version string.
pub fn bump_patch_str(value: &str) -> Result<String, BumpError> {
    let version: ManifestVersion = value.parse()?;
    Ok(version.next_patch()?.to_string())
}
