//! Shared fixtures for archive builder tests

#![allow(dead_code)]

use cba_bundler::bundler::{
    ArchiveRequest, ArchiveRequestBuilder, DependencyDescriptor, ProjectMetadata,
};
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const MANIFEST: &str = "CompositeBundle-ManifestVersion: 1\n\
Bundle-SymbolicName: com.example.proj\n\
Bundle-Version: 1.0.0\n";

pub const POM: &str = "<project>\n  <groupId>com.example</groupId>\n  <artifactId>proj</artifactId>\n  <version>1.0</version>\n</project>\n";

/// A project directory with manifest, pom and a local artifact repository
pub struct Fixture {
    pub temp: TempDir,
}

impl Fixture {
    pub fn new() -> Self {
        let temp = tempfile::tempdir().expect("Failed to create temp dir");
        let fixture = Self { temp };
        std::fs::create_dir_all(fixture.basedir().join("META-INF")).unwrap();
        std::fs::write(fixture.manifest(), MANIFEST).unwrap();
        std::fs::write(fixture.pom(), POM).unwrap();
        std::fs::create_dir_all(fixture.repo()).unwrap();
        fixture
    }

    pub fn basedir(&self) -> PathBuf {
        self.temp.path().join("project")
    }

    pub fn manifest(&self) -> PathBuf {
        self.basedir().join("META-INF/COMPOSITEBUNDLE.MF")
    }

    pub fn pom(&self) -> PathBuf {
        self.basedir().join("pom.xml")
    }

    pub fn repo(&self) -> PathBuf {
        self.temp.path().join("repo")
    }

    pub fn target(&self) -> PathBuf {
        self.basedir().join("target")
    }

    pub fn archive(&self) -> PathBuf {
        self.target().join("proj-1.0.cba")
    }

    /// Writes an artifact file with content derived from its name
    pub fn artifact(&self, file_name: &str) -> PathBuf {
        let path = self.repo().join(file_name);
        std::fs::write(&path, format!("contents of {file_name}\n").repeat(64)).unwrap();
        path
    }

    pub fn project(&self, snapshot: bool) -> ProjectMetadata {
        ProjectMetadata {
            group_id: "com.example".into(),
            artifact_id: "proj".into(),
            version: if snapshot { "1.0-SNAPSHOT" } else { "1.0" }.into(),
            descriptor_file: self.pom(),
            snapshot,
        }
    }

    pub fn request(&self) -> ArchiveRequest {
        self.request_for(self.project(false))
    }

    pub fn request_for(&self, project: ProjectMetadata) -> ArchiveRequest {
        ArchiveRequestBuilder::new()
            .output_directory(self.target())
            .final_name("proj-1.0")
            .basedir(self.basedir())
            .project(project)
            .build()
            .expect("Failed to build request")
    }

    /// libA (compile), libB (test), libC (war, no scope)
    pub fn scenario_dependencies(&self) -> Vec<DependencyDescriptor> {
        vec![
            DependencyDescriptor::new("org.example", "libA", "1.0")
                .with_type("jar")
                .with_scope("compile")
                .with_file(self.artifact("libA-1.0.jar")),
            DependencyDescriptor::new("org.example", "libB", "2.0")
                .with_type("jar")
                .with_scope("test")
                .with_file(self.artifact("libB-2.0.jar")),
            DependencyDescriptor::new("org.example", "libC", "3.1")
                .with_type("war")
                .with_file(self.artifact("libC-3.1.war")),
        ]
    }
}

/// Entry names of a zip archive
pub fn entry_names(archive: &Path) -> BTreeSet<String> {
    let file = File::open(archive).expect("Failed to open archive");
    let archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    archive.file_names().map(String::from).collect()
}

/// Bytes of one archive entry
pub fn entry_bytes(archive: &Path, name: &str) -> Vec<u8> {
    let file = File::open(archive).expect("Failed to open archive");
    let mut archive = zip::ZipArchive::new(file).expect("Failed to read archive");
    let mut entry = archive.by_name(name).expect("Entry not found");
    let mut bytes = Vec::new();
    entry.read_to_end(&mut bytes).unwrap();
    bytes
}
