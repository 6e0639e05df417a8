//! Composite Bundle Archive builder library
//!
//! This library packages a project's resolved compile-scope dependencies,
//! its `COMPOSITEBUNDLE.MF` manifest and Maven coordinate metadata into a
//! `.cba` zip archive for OSGi composite bundle deployment.
//!
//! It can be used both as a CLI tool and as a library dependency.

pub mod bundler;
pub mod cli;
pub mod error;
pub mod metadata;

// Re-export commonly used types
pub use error::{BundlerError, CliError, Result};
