//! Builder for constructing ArchiveRequest.

use super::{ArchiveRequest, ProjectMetadata, core::MANIFEST_PATH};
use std::path::{Path, PathBuf};

/// Builder for constructing [`ArchiveRequest`].
///
/// # Examples
///
/// ```no_run
/// use cba_bundler::bundler::{ArchiveRequestBuilder, ProjectMetadata};
///
/// # fn example() -> cba_bundler::bundler::Result<()> {
/// let request = ArchiveRequestBuilder::new()
///     .output_directory("target")
///     .final_name("proj-1.0")
///     .manifest_file("META-INF/COMPOSITEBUNDLE.MF")
///     .project(ProjectMetadata {
///         group_id: "com.example".into(),
///         artifact_id: "proj".into(),
///         version: "1.0".into(),
///         descriptor_file: "pom.xml".into(),
///         snapshot: false,
///     })
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Default)]
pub struct ArchiveRequestBuilder {
    output_directory: Option<PathBuf>,
    final_name: Option<String>,
    manifest_file: Option<PathBuf>,
    basedir: Option<PathBuf>,
    project: Option<ProjectMetadata>,
}

impl ArchiveRequestBuilder {
    /// Creates a new request builder.
    pub fn new() -> Self {
        Default::default()
    }

    /// Sets the output directory.
    ///
    /// # Required
    pub fn output_directory<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.output_directory = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the archive base name.
    ///
    /// # Required
    pub fn final_name(mut self, name: impl Into<String>) -> Self {
        self.final_name = Some(name.into());
        self
    }

    /// Sets the composite bundle manifest explicitly.
    ///
    /// Default: `<basedir>/META-INF/COMPOSITEBUNDLE.MF`
    pub fn manifest_file<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.manifest_file = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets the project base directory used to derive the default manifest.
    pub fn basedir<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.basedir = Some(path.as_ref().to_path_buf());
        self
    }

    /// Sets project metadata.
    ///
    /// # Required
    pub fn project(mut self, project: ProjectMetadata) -> Self {
        self.project = Some(project);
        self
    }

    /// Builds the request.
    ///
    /// # Errors
    ///
    /// Returns an error if `output_directory`, `final_name` or `project` is
    /// missing, if `final_name` is empty, or if neither `manifest_file` nor
    /// `basedir` is set.
    pub fn build(self) -> crate::bundler::Result<ArchiveRequest> {
        use crate::bundler::error::Context;

        let final_name = self.final_name.context("final_name is required")?;
        if final_name.trim().is_empty() {
            crate::bail!("final_name must not be empty");
        }

        let manifest_file = match (self.manifest_file, self.basedir) {
            (Some(path), _) => path,
            (None, Some(basedir)) => basedir.join(MANIFEST_PATH),
            (None, None) => crate::bail!("manifest_file or basedir is required"),
        };

        Ok(ArchiveRequest::new(
            self.output_directory
                .context("output_directory is required")?,
            final_name,
            manifest_file,
            self.project.context("project is required")?,
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundler::Error;

    #[test]
    fn manifest_defaults_under_basedir() {
        let request = ArchiveRequestBuilder::new()
            .output_directory("/work/target")
            .final_name("proj-1.0")
            .basedir("/work")
            .project(ProjectMetadata::default())
            .build()
            .unwrap();

        assert_eq!(
            request.manifest_file(),
            Path::new("/work/META-INF/COMPOSITEBUNDLE.MF")
        );
        assert_eq!(request.work_directory(), Path::new("/work/target/proj-1.0"));
        assert_eq!(request.archive_path(), Path::new("/work/target/proj-1.0.cba"));
    }

    #[test]
    fn explicit_manifest_wins_over_basedir() {
        let request = ArchiveRequestBuilder::new()
            .output_directory("out")
            .final_name("x")
            .basedir("/work")
            .manifest_file("/elsewhere/CB.MF")
            .project(ProjectMetadata::default())
            .build()
            .unwrap();
        assert_eq!(request.manifest_file(), Path::new("/elsewhere/CB.MF"));
    }

    #[test]
    fn missing_fields_are_reported() {
        let err = ArchiveRequestBuilder::new()
            .final_name("x")
            .basedir(".")
            .project(ProjectMetadata::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m.contains("output_directory")));

        let err = ArchiveRequestBuilder::new()
            .output_directory("out")
            .final_name("x")
            .project(ProjectMetadata::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m.contains("manifest_file")));

        let err = ArchiveRequestBuilder::new()
            .output_directory("out")
            .final_name("  ")
            .basedir(".")
            .project(ProjectMetadata::default())
            .build()
            .unwrap_err();
        assert!(matches!(err, Error::GenericError(ref m) if m.contains("empty")));
    }
}
