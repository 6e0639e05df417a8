//! Configuration structures for archive building.
//!
//! This module provides the inputs of one build: the request (output
//! location, manifest, project metadata) and the resolved dependency
//! descriptors, plus a builder for constructing requests.

mod builder;
mod core;
mod dependency;
mod package;

pub use builder::ArchiveRequestBuilder;
pub use self::core::{ARCHIVE_EXTENSION, ArchiveRequest, MANIFEST_PATH};
pub use dependency::{COMPILE_SCOPE, DEFAULT_ARTIFACT_TYPE, DependencyDescriptor};
pub use package::ProjectMetadata;
