//! Read-increment-write of a manifest's version field.

use std::path::Path;

use tracing::debug;

use crate::error::BumpError;
use crate::manifest::Manifest;
use crate::version::ManifestVersion;

/// The version transition produced by a bump.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BumpOutcome {
    pub previous: ManifestVersion,
    pub current: ManifestVersion,
}

/// Read the current version from the manifest at `path`.
pub fn read_version(path: &Path) -> Result<ManifestVersion, BumpError> {
    Manifest::load(path)?.version()
}

/// Compute the patch bump for the manifest at `path` without writing it.
pub fn plan_patch_bump(path: &Path) -> Result<BumpOutcome, BumpError> {
    let manifest = Manifest::load(path)?;
    plan(&manifest)
}

/// Increment the patch component of the manifest's `version` and write the
/// manifest back to `path`.
///
/// Every other field is preserved at the value level. The write is atomic:
/// on failure the original file is left as it was. Calling this twice bumps
/// twice. No locking is done, so concurrent callers on one path race.
pub fn bump_patch(path: &Path) -> Result<BumpOutcome, BumpError> {
    let mut manifest = Manifest::load(path)?;
    let outcome = plan(&manifest)?;

    manifest.set_version(&outcome.current);
    manifest.save()?;

    debug!(
        path = %path.display(),
        from = %outcome.previous,
        to = %outcome.current,
        "Bumped patch version"
    );

    Ok(outcome)
}

fn plan(manifest: &Manifest) -> Result<BumpOutcome, BumpError> {
    let previous = manifest.version()?;
    let current = previous.next_patch()?;

    Ok(BumpOutcome { previous, current })
}
