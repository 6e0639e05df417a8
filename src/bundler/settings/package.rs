//! Project coordinate metadata.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Metadata of the project the archive is built for.
///
/// Maps to the project's own Maven coordinates and its pom file.
///
/// # Examples
///
/// ```
/// use cba_bundler::bundler::ProjectMetadata;
///
/// let project = ProjectMetadata {
///     group_id: "com.example".into(),
///     artifact_id: "proj".into(),
///     version: "1.0".into(),
///     descriptor_file: "pom.xml".into(),
///     snapshot: false,
/// };
/// assert_eq!(project.maven_dir(), "META-INF/maven/com.example/proj");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectMetadata {
    /// Project groupId
    pub group_id: String,

    /// Project artifactId
    pub artifact_id: String,

    /// Project version, e.g. "1.0" or "1.1-SNAPSHOT"
    pub version: String,

    /// The project's own descriptor (pom.xml).
    pub descriptor_file: PathBuf,

    /// Whether the project artifact is a snapshot.
    ///
    /// Default: false
    #[serde(default)]
    pub snapshot: bool,
}

impl ProjectMetadata {
    /// Version recorded in `pom.properties`.
    ///
    /// Snapshot artifacts keep their own version as-is; there is no
    /// timestamped snapshot resolution.
    pub fn effective_version(&self) -> &str {
        &self.version
    }

    /// `META-INF/maven/<groupId>/<artifactId>`
    pub fn maven_dir(&self) -> String {
        format!("META-INF/maven/{}/{}", self.group_id, self.artifact_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_version_is_unchanged() {
        let project = ProjectMetadata {
            group_id: "com.example".into(),
            artifact_id: "proj".into(),
            version: "1.1-SNAPSHOT".into(),
            descriptor_file: PathBuf::from("pom.xml"),
            snapshot: true,
        };
        assert_eq!(project.effective_version(), "1.1-SNAPSHOT");
    }
}
