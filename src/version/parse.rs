//! Parsing and formatting of `MAJOR.MINOR.PATCH+BUILD` manifest versions.

use std::fmt;
use std::str::FromStr;

use crate::error::BumpError;

/// A pubspec version: a three-part numeric core plus opaque build metadata.
///
/// Flutter stamps the core as the Android `versionName` and the build
/// metadata as the Android `versionCode`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManifestVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
    pub build: String,
}

impl ManifestVersion {
    pub fn new(major: u64, minor: u64, patch: u64, build: impl Into<String>) -> Self {
        Self {
            major,
            minor,
            patch,
            build: build.into(),
        }
    }

    /// The `MAJOR.MINOR.PATCH` core, as used for the Android `versionName`.
    pub fn version_name(&self) -> String {
        format!("{}.{}.{}", self.major, self.minor, self.patch)
    }

    /// The build metadata, as used for the Android `versionCode`.
    pub fn version_code(&self) -> &str {
        &self.build
    }
}

impl fmt::Display for ManifestVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}+{}", self.version_name(), self.build)
    }
}

impl FromStr for ManifestVersion {
    type Err = BumpError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        // Only the first '+' separates; the build half is kept verbatim.
        let Some((core, build)) = s.split_once('+') else {
            return Err(BumpError::malformed(s, "missing '+' build separator"));
        };

        if build.is_empty() {
            return Err(BumpError::malformed(s, "build metadata after '+' is empty"));
        }

        let parts: Vec<&str> = core.split('.').collect();
        let [major, minor, patch] = parts.as_slice() else {
            return Err(BumpError::malformed(
                s,
                format!("expected 3 numeric components, found {}", parts.len()),
            ));
        };

        Ok(Self {
            major: parse_component(s, "major", major)?,
            minor: parse_component(s, "minor", minor)?,
            patch: parse_component(s, "patch", patch)?,
            build: build.to_string(),
        })
    }
}

/// Parse one numeric component. Leading zeros are accepted; signs are not.
fn parse_component(value: &str, name: &str, component: &str) -> Result<u64, BumpError> {
    if component.is_empty() || !component.bytes().all(|b| b.is_ascii_digit()) {
        return Err(BumpError::malformed(
            value,
            format!("{name} component '{component}' is not a non-negative integer"),
        ));
    }

    component.parse::<u64>().map_err(|e| {
        BumpError::malformed(value, format!("{name} component '{component}': {e}"))
    })
}
