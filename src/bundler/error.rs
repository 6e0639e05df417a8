//! Error taxonomy for archive building.
//!
//! Every variant is fatal to the current build. Nothing is retried here;
//! the caller decides whether to surface, clean up, or re-run.

use std::{
    fmt::Display,
    io,
    path::{Path, PathBuf},
};
use thiserror::Error;

/// Result type alias for archive building operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors raised while assembling a composite bundle archive.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The includable dependency set is empty.
    #[error("there are no dependency artifacts to create the cba")]
    NoDependencies,

    /// An includable dependency has no resolved file location.
    #[error("{coordinate} could not be resolved")]
    UnresolvedArtifact {
        /// `group:artifact:version:type` of the offending dependency
        coordinate: String,
    },

    /// The composite bundle manifest does not exist.
    #[error("CompositeBundle manifest file not available: {}", path.display())]
    MissingManifest {
        /// Configured manifest path
        path: PathBuf,
    },

    /// A filesystem operation failed.
    #[error("{context} {}: {source}", path.display())]
    IoFailure {
        /// What was being done
        context: &'static str,
        /// Path involved
        path: PathBuf,
        /// Underlying cause
        #[source]
        source: io::Error,
    },

    /// The zip writer failed.
    #[error("error creating cba: {0}")]
    Zip(#[from] zip::result::ZipError),

    /// Working directory traversal failed.
    #[error("error walking working directory: {0}")]
    WalkDir(#[from] walkdir::Error),

    /// Path prefix stripping failed.
    #[error("{0}")]
    StripPrefix(#[from] std::path::StripPrefixError),

    /// Anything else.
    #[error("{0}")]
    GenericError(String),
}

impl Error {
    /// Whether the caller can fix this by correcting its inputs.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            Self::NoDependencies | Self::UnresolvedArtifact { .. } | Self::MissingManifest { .. }
        )
    }
}

/// Attach a filesystem context and path to an IO error.
pub trait ErrorExt<T> {
    /// Maps the error into [`Error::IoFailure`].
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T>;
}

impl<T> ErrorExt<T> for std::result::Result<T, io::Error> {
    fn fs_context(self, context: &'static str, path: impl AsRef<Path>) -> Result<T> {
        self.map_err(|source| Error::IoFailure {
            context,
            path: path.as_ref().to_path_buf(),
            source,
        })
    }
}

/// Turn `None` or a foreign error into a [`Error::GenericError`].
pub trait Context<T> {
    /// Attach a message.
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static;
}

impl<T> Context<T> for Option<T> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.ok_or_else(|| Error::GenericError(context.to_string()))
    }
}

impl<T, E: Display> Context<T> for std::result::Result<T, E> {
    fn context<C>(self, context: C) -> Result<T>
    where
        C: Display + Send + Sync + 'static,
    {
        self.map_err(|e| Error::GenericError(format!("{context}: {e}")))
    }
}

/// Return early with a [`Error::GenericError`].
#[macro_export]
macro_rules! bail {
    ($msg:literal $(,)?) => {
        return Err($crate::bundler::Error::GenericError(format!($msg)))
    };
    ($fmt:expr, $($arg:tt)*) => {
        return Err($crate::bundler::Error::GenericError(format!($fmt, $($arg)*)))
    };
}
