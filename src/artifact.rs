//! Version file parsing and artifact URL construction.

use std::fmt;
use std::fs;
use std::path::Path;

use crate::error::{CiError, Result};

/// Marker that puts a version into the snapshot repository.
pub const SNAPSHOT_MARKER: &str = "SNAPSHOT";

/// Which repository bucket a version is published to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VersionKind {
    Snapshot,
    Release,
}

/// Version identifier of the Java client library
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactVersion {
    raw: String,
}

impl ArtifactVersion {
    /// Parse a version string, trimming surrounding whitespace.
    pub fn parse(input: &str) -> Result<Self> {
        let raw = input.trim();
        if raw.is_empty() {
            return Err(CiError::version("version string is empty"));
        }

        Ok(ArtifactVersion {
            raw: raw.to_string(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn kind(&self) -> VersionKind {
        if self.raw.contains(SNAPSHOT_MARKER) {
            VersionKind::Snapshot
        } else {
            VersionKind::Release
        }
    }

    pub fn is_snapshot(&self) -> bool {
        self.kind() == VersionKind::Snapshot
    }
}

impl fmt::Display for ArtifactVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

/// Reads the version from the first line of `path`.
///
/// # Returns
/// * `Ok(ArtifactVersion)` - The parsed version
/// * `Err` - If the file cannot be read or its first line is blank
pub fn read_version_file<P: AsRef<Path>>(path: P) -> Result<ArtifactVersion> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let first_line = content.lines().next().unwrap_or("");

    ArtifactVersion::parse(first_line).map_err(|_| {
        CiError::version(format!("no version found in '{}'", path.display()))
    })
}

/// Location of the artifact inside the binary repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArtifactCoordinates {
    pub base_url: String,
    pub snapshot_repository: String,
    pub release_repository: String,
    pub group_path: String,
    pub artifact_id: String,
}

impl ArtifactCoordinates {
    /// Repository bucket holding `version`.
    pub fn repository_for(&self, version: &ArtifactVersion) -> &str {
        match version.kind() {
            VersionKind::Snapshot => &self.snapshot_repository,
            VersionKind::Release => &self.release_repository,
        }
    }

    /// Full download URL of the jar for `version`.
    pub fn url_for(&self, version: &ArtifactVersion) -> String {
        format!(
            "{}/{}/{}/{}/{}/{}-{}.jar",
            self.base_url.trim_end_matches('/'),
            self.repository_for(version),
            self.group_path.trim_matches('/'),
            self.artifact_id,
            version,
            self.artifact_id,
            version
        )
    }
}
