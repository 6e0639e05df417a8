//! Archive build pipeline.
//!
//! This module provides the [`ArchiveBuilder`] that validates a request,
//! stages files into the working directory and writes the `.cba` archive.

use crate::bundler::{
    ArchiveRequest, DependencyDescriptor, Error, MANIFEST_PATH, Result,
    utils::fs::{collect_files, copy_file, create_dir_all},
};
use serde::Serialize;
use std::path::PathBuf;

use super::{
    archive::{StagedEntries, write_archive},
    pom_properties::{POM_PROPERTIES_FILE, PomProperties},
};

/// File name of the project descriptor inside the archive.
pub const POM_FILE: &str = "pom.xml";

/// Result of a successful build.
///
/// The builder keeps no handle on the archive; the caller records
/// `produced_file_path` as the project's output artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArchiveOutput {
    /// Path of the generated `<finalName>.cba`
    pub produced_file_path: PathBuf,

    /// Entry paths written, in archive order
    pub entries: Vec<String>,

    /// Archive size in bytes
    pub size: u64,

    /// Entry conflicts resolved while staging
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub warnings: Vec<String>,
}

/// Builds composite bundle archives.
///
/// # Examples
///
/// ```no_run
/// use cba_bundler::bundler::{
///     ArchiveBuilder, ArchiveRequestBuilder, DependencyDescriptor, ProjectMetadata,
/// };
///
/// # fn example() -> cba_bundler::bundler::Result<()> {
/// let request = ArchiveRequestBuilder::new()
///     .output_directory("target")
///     .final_name("proj-1.0")
///     .basedir(".")
///     .project(ProjectMetadata {
///         group_id: "com.example".into(),
///         artifact_id: "proj".into(),
///         version: "1.0".into(),
///         descriptor_file: "pom.xml".into(),
///         snapshot: false,
///     })
///     .build()?;
///
/// let deps = vec![
///     DependencyDescriptor::new("org.example", "libA", "1.0")
///         .with_file("/repo/libA-1.0.jar"),
/// ];
///
/// let output = ArchiveBuilder::new(request).build(&deps)?;
/// println!("Created {}", output.produced_file_path.display());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct ArchiveBuilder {
    request: ArchiveRequest,
}

impl ArchiveBuilder {
    /// Creates a builder for one request.
    pub fn new(request: ArchiveRequest) -> Self {
        Self { request }
    }

    /// Returns the request this builder was created with.
    pub fn request(&self) -> &ArchiveRequest {
        &self.request
    }

    /// Runs the full pipeline.
    ///
    /// # Errors
    ///
    /// - [`Error::NoDependencies`] if no descriptor is includable
    /// - [`Error::UnresolvedArtifact`] for an includable descriptor without a file
    /// - [`Error::MissingManifest`] if the manifest does not exist
    /// - [`Error::IoFailure`] and friends for filesystem or zip failures
    ///
    /// Files already staged in the working directory are left in place on
    /// failure. The archive itself is only ever replaced by a complete one.
    pub fn build(&self, descriptors: &[DependencyDescriptor]) -> Result<ArchiveOutput> {
        let request = &self.request;
        let work_dir = request.work_directory();

        log::info!("Building composite bundle archive {}", request.final_name());
        log::debug!("Work directory: {}", work_dir.display());
        log::debug!("Output directory: {}", request.output_directory().display());
        log::debug!("Composite bundle manifest: {}", request.manifest_file().display());

        if descriptors.is_empty() {
            return Err(Error::NoDependencies);
        }

        let mut warnings = Vec::new();
        let mut entries = self.stage_dependencies(descriptors, &mut warnings)?;

        let manifest = request.manifest_file();
        if !manifest.is_file() {
            return Err(Error::MissingManifest {
                path: manifest.to_path_buf(),
            });
        }
        log::info!("Using COMPOSITEBUNDLE.MF from: {}", manifest.display());
        create_dir_all(&work_dir.join("META-INF"))?;
        copy_file(manifest, &work_dir.join(MANIFEST_PATH))?;

        let project = request.project();
        let version = project.effective_version();
        let maven_dir = work_dir.join(project.maven_dir());

        copy_file(&project.descriptor_file, &maven_dir.join(POM_FILE))?;
        PomProperties::new(&project.group_id, &project.artifact_id, version)
            .write_to(&maven_dir.join(POM_PROPERTIES_FILE))?;

        for (name, path) in collect_files(&work_dir)? {
            if let Some(previous) = entries.stage(name.as_str(), path) {
                let message = format!(
                    "Working directory file {} replaces staged {}",
                    name,
                    previous.display()
                );
                log::warn!("{}", message);
                warnings.push(message);
            }
        }

        let archive_path = request.archive_path();
        let size = write_archive(&archive_path, &entries)?;

        log::info!(
            "Created {} ({} entries, {} bytes)",
            archive_path.display(),
            entries.len(),
            size
        );

        Ok(ArchiveOutput {
            produced_file_path: archive_path,
            entries: entries.names(),
            size,
            warnings,
        })
    }

    /// Stages includable dependencies at the archive root.
    ///
    /// Descriptors are processed in coordinate order, so when two of them map
    /// to the same entry name the later coordinate wins regardless of input
    /// order. Each replacement is recorded in `warnings`.
    fn stage_dependencies(
        &self,
        descriptors: &[DependencyDescriptor],
        warnings: &mut Vec<String>,
    ) -> Result<StagedEntries> {
        let mut includable: Vec<&DependencyDescriptor> =
            descriptors.iter().filter(|d| d.is_includable()).collect();
        includable.sort_by_cached_key(|d| d.sort_key());

        for skipped in descriptors.iter().filter(|d| !d.is_includable()) {
            log::debug!(
                "Skipping {} with scope {}",
                skipped.coordinate(),
                skipped.scope.as_deref().unwrap_or_default()
            );
        }

        if includable.is_empty() {
            return Err(Error::NoDependencies);
        }

        let mut entries = StagedEntries::new();
        for dep in includable {
            let coordinate = dep.coordinate();
            log::info!("Dependency artifact [{}]", coordinate);

            let file = dep
                .resolved_file()
                .ok_or_else(|| Error::UnresolvedArtifact {
                    coordinate: coordinate.clone(),
                })?;
            log::debug!("File location: {}", file.display());

            let name = dep.entry_name();
            if let Some(previous) = entries.stage(name.as_str(), file) {
                let message = format!(
                    "Duplicate archive entry {}: {} replaces {}",
                    name,
                    coordinate,
                    previous.display()
                );
                log::warn!("{}", message);
                warnings.push(message);
            }
        }

        Ok(entries)
    }
}
