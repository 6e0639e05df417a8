//! Resolved dependency descriptors.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Scope whose artifacts are embedded in the archive.
pub const COMPILE_SCOPE: &str = "compile";

/// Artifact type used when a descriptor does not name one.
pub const DEFAULT_ARTIFACT_TYPE: &str = "jar";

/// One resolved dependency handed over by the build orchestrator.
///
/// # Examples
///
/// ```
/// use cba_bundler::bundler::DependencyDescriptor;
///
/// let dep = DependencyDescriptor::new("org.example", "libC", "3.1")
///     .with_type("war")
///     .with_file("/repo/libC-3.1.war");
///
/// assert!(dep.is_includable());
/// assert_eq!(dep.coordinate(), "org.example:libC:3.1:war");
/// assert_eq!(dep.entry_name(), "libC-3.1.war");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyDescriptor {
    /// Maven groupId
    pub group_id: String,

    /// Maven artifactId
    pub artifact_id: String,

    /// Maven version
    pub version: String,

    /// Artifact type (packaging extension).
    ///
    /// Default: `jar`
    #[serde(default, rename = "type")]
    pub artifact_type: Option<String>,

    /// Dependency scope. Absent is treated as `compile`.
    #[serde(default)]
    pub scope: Option<String>,

    /// Location of the already-downloaded artifact.
    #[serde(default)]
    pub file: Option<PathBuf>,
}

impl DependencyDescriptor {
    /// Creates a descriptor with no type, scope, or resolved file.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
            artifact_type: None,
            scope: None,
            file: None,
        }
    }

    /// Sets the artifact type.
    pub fn with_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = Some(artifact_type.into());
        self
    }

    /// Sets the scope.
    pub fn with_scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = Some(scope.into());
        self
    }

    /// Sets the resolved artifact file.
    pub fn with_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.file = Some(file.into());
        self
    }

    /// Only compile-scope (or unscoped) dependencies go into the archive.
    pub fn is_includable(&self) -> bool {
        match self.scope.as_deref() {
            None => true,
            Some(scope) => scope == COMPILE_SCOPE,
        }
    }

    /// Artifact type, defaulting to `jar`.
    pub fn artifact_type(&self) -> &str {
        self.artifact_type.as_deref().unwrap_or(DEFAULT_ARTIFACT_TYPE)
    }

    /// `group:artifact:version:type`
    pub fn coordinate(&self) -> String {
        format!(
            "{}:{}:{}:{}",
            self.group_id,
            self.artifact_id,
            self.version,
            self.artifact_type()
        )
    }

    /// Ordering key for deterministic staging: the full coordinate.
    pub fn sort_key(&self) -> String {
        self.coordinate()
    }

    /// Archive root entry name: `<artifactId>-<version>.<type>`
    pub fn entry_name(&self) -> String {
        format!(
            "{}-{}.{}",
            self.artifact_id,
            self.version,
            self.artifact_type()
        )
    }

    /// Resolved file, treating an empty path as unresolved.
    pub fn resolved_file(&self) -> Option<&std::path::Path> {
        self.file
            .as_deref()
            .filter(|path| !path.as_os_str().is_empty())
    }
}
