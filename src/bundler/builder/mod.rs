//! Composite bundle archive building.
//!
//! This module provides the [`ArchiveBuilder`] that turns a resolved
//! [`ArchiveRequest`](crate::bundler::ArchiveRequest) and dependency set into
//! one `.cba` file.
//!
//! # Overview
//!
//! The builder:
//! 1. Stages compile-scope dependency artifacts at the archive root
//! 2. Copies the composite bundle manifest into the working directory
//! 3. Adds the project pom and a generated `pom.properties`
//! 4. Archives everything under the working directory
//! 5. Writes `<outputDirectory>/<finalName>.cba` and returns [`ArchiveOutput`]
//!
//! # Module Organization
//!
//! - [`archive`] - Staged entry table and zip writing
//! - [`checksum`] - SHA256 checksum calculation for archives
//! - [`orchestrator`] - The [`ArchiveBuilder`] pipeline
//! - [`pom_properties`] - `pom.properties` rendering

pub mod archive;
pub mod checksum;
mod orchestrator;
pub mod pom_properties;

pub use orchestrator::{ArchiveBuilder, ArchiveOutput, POM_FILE};
