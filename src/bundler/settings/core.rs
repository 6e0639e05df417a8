//! Immutable parameters of one archive build.

use super::ProjectMetadata;
use std::path::{Path, PathBuf};

/// Extension of the produced archive.
pub const ARCHIVE_EXTENSION: &str = "cba";

/// Location of the composite bundle manifest, relative to a project basedir
/// and inside the archive.
pub const MANIFEST_PATH: &str = "META-INF/COMPOSITEBUNDLE.MF";

/// Parameters for one build invocation.
///
/// Constructed once via [`ArchiveRequestBuilder`](super::ArchiveRequestBuilder)
/// and never mutated afterwards.
///
/// # Examples
///
/// ```
/// use cba_bundler::bundler::{ArchiveRequestBuilder, ProjectMetadata};
/// use std::path::Path;
///
/// # fn example() -> cba_bundler::bundler::Result<()> {
/// let request = ArchiveRequestBuilder::new()
///     .output_directory("target")
///     .final_name("proj-1.0")
///     .basedir(".")
///     .project(ProjectMetadata::default())
///     .build()?;
///
/// assert_eq!(request.work_directory(), Path::new("target/proj-1.0"));
/// assert_eq!(request.archive_path(), Path::new("target/proj-1.0.cba"));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, Debug)]
pub struct ArchiveRequest {
    output_directory: PathBuf,
    final_name: String,
    manifest_file: PathBuf,
    project: ProjectMetadata,
}

impl ArchiveRequest {
    pub(super) fn new(
        output_directory: PathBuf,
        final_name: String,
        manifest_file: PathBuf,
        project: ProjectMetadata,
    ) -> Self {
        Self {
            output_directory,
            final_name,
            manifest_file,
            project,
        }
    }

    /// Directory the archive is written to.
    pub fn output_directory(&self) -> &Path {
        &self.output_directory
    }

    /// Base name of the archive, without extension.
    pub fn final_name(&self) -> &str {
        &self.final_name
    }

    /// Composite bundle manifest to embed.
    pub fn manifest_file(&self) -> &Path {
        &self.manifest_file
    }

    /// Project metadata.
    pub fn project(&self) -> &ProjectMetadata {
        &self.project
    }

    /// Staging directory: `<outputDirectory>/<finalName>`
    pub fn work_directory(&self) -> PathBuf {
        self.output_directory.join(&self.final_name)
    }

    /// Produced archive: `<outputDirectory>/<finalName>.cba`
    pub fn archive_path(&self) -> PathBuf {
        self.output_directory
            .join(format!("{}.{}", self.final_name, ARCHIVE_EXTENSION))
    }
}
