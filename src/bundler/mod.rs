//! Composite bundle archive core.
//!
//! Inputs live in [`settings`], the pipeline in [`builder`], errors in
//! [`error`].

pub mod builder;
pub mod error;
pub mod settings;
pub mod utils;

pub use builder::{ArchiveBuilder, ArchiveOutput};
pub use error::{Error, Result};
pub use settings::{
    ARCHIVE_EXTENSION, ArchiveRequest, ArchiveRequestBuilder, DependencyDescriptor,
    MANIFEST_PATH, ProjectMetadata,
};
