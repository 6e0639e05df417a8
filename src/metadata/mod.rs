//! Build descriptor loading.
//!
//! The build orchestrator hands over its resolved dependency set and project
//! metadata as a TOML file:
//!
//! ```toml
//! output_directory = "target"
//! final_name = "proj-1.0"
//!
//! [project]
//! group_id = "com.example"
//! artifact_id = "proj"
//! version = "1.0"
//! descriptor_file = "pom.xml"
//!
//! [[dependency]]
//! group_id = "org.example"
//! artifact_id = "libA"
//! version = "1.0"
//! scope = "compile"
//! file = "/home/me/.m2/repository/org/example/libA/1.0/libA-1.0.jar"
//! ```
//!
//! Relative paths are resolved against the directory holding the descriptor,
//! which also serves as the project basedir.

use crate::bundler::{ArchiveRequestBuilder, DependencyDescriptor, ProjectMetadata};
use crate::error::{BundlerError, CliError, Result};
use path_absolutize::Absolutize;
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Default descriptor file name.
pub const DEFAULT_DESCRIPTOR: &str = "cba.toml";

/// Inputs for one archive build, as written by the orchestrator.
#[derive(Debug, Clone, Deserialize)]
pub struct BuildDescriptor {
    /// Output directory for the archive
    #[serde(default)]
    pub output_directory: Option<PathBuf>,

    /// Archive base name
    #[serde(default)]
    pub final_name: Option<String>,

    /// Composite bundle manifest; defaults to `<basedir>/META-INF/COMPOSITEBUNDLE.MF`
    #[serde(default)]
    pub manifest_file: Option<PathBuf>,

    /// Project coordinates and pom location
    pub project: ProjectMetadata,

    /// Resolved dependencies
    #[serde(default, rename = "dependency")]
    pub dependencies: Vec<DependencyDescriptor>,

    /// Directory the descriptor was loaded from
    #[serde(skip)]
    pub basedir: PathBuf,
}

impl BuildDescriptor {
    /// Request builder pre-filled with everything the descriptor provides.
    pub fn request_builder(&self) -> ArchiveRequestBuilder {
        let mut builder = ArchiveRequestBuilder::new()
            .basedir(&self.basedir)
            .project(self.project.clone());
        if let Some(dir) = &self.output_directory {
            builder = builder.output_directory(dir);
        }
        if let Some(name) = &self.final_name {
            builder = builder.final_name(name.clone());
        }
        if let Some(manifest) = &self.manifest_file {
            builder = builder.manifest_file(manifest);
        }
        builder
    }
}

/// Load a build descriptor (single read + parse).
///
/// Relative paths inside the file are made absolute against its directory.
pub fn load_descriptor(path: &Path) -> Result<BuildDescriptor> {
    let content = std::fs::read_to_string(path).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "read_build_descriptor".to_string(),
            reason: format!("Failed to read {}: {}", path.display(), e),
        })
    })?;

    let mut descriptor = parse_descriptor(&content).map_err(|e| {
        BundlerError::Cli(CliError::ExecutionFailed {
            command: "parse_build_descriptor".to_string(),
            reason: format!("Failed to parse {}: {}", path.display(), e),
        })
    })?;

    let basedir = path
        .parent()
        .map(|p| absolutize(p, Path::new(".")))
        .transpose()?
        .unwrap_or_else(|| PathBuf::from("."));

    descriptor.output_directory = descriptor
        .output_directory
        .map(|p| absolutize(&p, &basedir))
        .transpose()?;
    descriptor.manifest_file = descriptor
        .manifest_file
        .map(|p| absolutize(&p, &basedir))
        .transpose()?;
    descriptor.project.descriptor_file = absolutize(&descriptor.project.descriptor_file, &basedir)?;
    for dep in &mut descriptor.dependencies {
        if let Some(file) = dep.resolved_file() {
            dep.file = Some(absolutize(file, &basedir)?);
        }
    }
    descriptor.basedir = basedir;

    log::debug!(
        "Loaded build descriptor {} ({} dependencies)",
        path.display(),
        descriptor.dependencies.len()
    );

    Ok(descriptor)
}

/// Parse descriptor text without touching the filesystem.
pub fn parse_descriptor(content: &str) -> std::result::Result<BuildDescriptor, toml::de::Error> {
    toml::from_str(content)
}

/// Resolve `path` against `base` (itself resolved against the cwd).
pub fn absolutize(path: &Path, base: &Path) -> Result<PathBuf> {
    let base = if base.as_os_str().is_empty() {
        Path::new(".")
    } else {
        base
    };
    let base = base.absolutize()?;
    Ok(path.absolutize_from(&*base)?.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    const DESCRIPTOR: &str = r#"
        output_directory = "target"
        final_name = "proj-1.0"

        [project]
        group_id = "com.example"
        artifact_id = "proj"
        version = "1.0"
        descriptor_file = "pom.xml"

        [[dependency]]
        group_id = "org.example"
        artifact_id = "libA"
        version = "1.0"
        scope = "compile"
        file = "repo/libA-1.0.jar"

        [[dependency]]
        group_id = "org.example"
        artifact_id = "libC"
        version = "3.1"
        type = "war"
    "#;

    #[test]
    fn parses_dependencies_and_project() {
        let descriptor = parse_descriptor(DESCRIPTOR).unwrap();
        assert_eq!(descriptor.project.artifact_id, "proj");
        assert!(!descriptor.project.snapshot);
        assert_eq!(descriptor.dependencies.len(), 2);
        assert_eq!(descriptor.dependencies[1].entry_name(), "libC-3.1.war");
        assert!(descriptor.manifest_file.is_none());
    }

    #[test]
    fn load_resolves_relative_paths_against_descriptor_dir() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join(DEFAULT_DESCRIPTOR);
        std::fs::write(&path, DESCRIPTOR).unwrap();

        let descriptor = load_descriptor(&path).unwrap();
        let root = temp.path().absolutize().unwrap().into_owned();

        assert_eq!(descriptor.basedir, root);
        assert_eq!(descriptor.output_directory, Some(root.join("target")));
        assert_eq!(descriptor.project.descriptor_file, root.join("pom.xml"));
        assert_eq!(
            descriptor.dependencies[0].file,
            Some(root.join("repo/libA-1.0.jar"))
        );
        assert_eq!(descriptor.dependencies[1].file, None);

        let request = descriptor.request_builder().build().unwrap();
        assert_eq!(
            request.manifest_file(),
            root.join("META-INF/COMPOSITEBUNDLE.MF")
        );
    }

    #[test]
    fn missing_file_is_execution_failure() {
        let temp = tempfile::tempdir().unwrap();
        let err = load_descriptor(&temp.path().join("absent.toml")).unwrap_err();
        assert!(matches!(
            err,
            BundlerError::Cli(CliError::ExecutionFailed { ref command, .. })
                if command == "read_build_descriptor"
        ));
    }

    #[test]
    fn malformed_descriptor_is_parse_failure() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("bad.toml");
        std::fs::write(&path, "final_name = \"x\"\n").unwrap();

        let err = load_descriptor(&path).unwrap_err();
        assert!(matches!(
            err,
            BundlerError::Cli(CliError::ExecutionFailed { ref command, .. })
                if command == "parse_build_descriptor"
        ));
    }
}
