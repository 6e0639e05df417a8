//! Top-level error types for the command line tool.
//!
//! This module wraps archive-building errors together with CLI and
//! descriptor errors, and maps them to exit codes and recovery hints.

use thiserror::Error;

/// Result type alias for CLI operations
pub type Result<T> = std::result::Result<T, BundlerError>;

/// Main error type for all CLI operations
#[derive(Error, Debug)]
pub enum BundlerError {
    /// CLI argument errors
    #[error("CLI error: {0}")]
    Cli(#[from] CliError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Archive building errors
    #[error("Bundler error: {0}")]
    Bundler(#[from] crate::bundler::Error),
}

/// CLI-specific errors
#[derive(Error, Debug)]
pub enum CliError {
    /// Invalid command line arguments
    #[error("Invalid arguments: {reason}")]
    InvalidArguments {
        /// Reason for the error
        reason: String,
    },

    /// Command execution failed
    #[error("Command execution failed: {command} - {reason}")]
    ExecutionFailed {
        /// Command that failed
        command: String,
        /// Reason for the error
        reason: String,
    },
}

impl BundlerError {
    /// Get actionable recovery suggestions for this error
    pub fn recovery_suggestions(&self) -> Vec<String> {
        use crate::bundler::Error;

        match self {
            Self::Bundler(Error::NoDependencies) => vec![
                "Declare at least one compile-scope [[dependency]] in the build descriptor"
                    .to_string(),
            ],
            Self::Bundler(Error::UnresolvedArtifact { coordinate }) => vec![format!(
                "Resolve {coordinate} and set its `file` in the build descriptor"
            )],
            Self::Bundler(Error::MissingManifest { path }) => vec![
                format!("Create {}", path.display()),
                "Or point --manifest at an existing COMPOSITEBUNDLE.MF".to_string(),
            ],
            Self::Cli(CliError::ExecutionFailed { command, .. })
                if command.ends_with("build_descriptor") =>
            {
                vec!["Pass --descriptor <FILE> or set CBA_DESCRIPTOR".to_string()]
            }
            _ => vec!["Check the error message above for specific details".to_string()],
        }
    }

    /// Whether re-running with corrected inputs can succeed
    pub fn is_recoverable(&self) -> bool {
        match self {
            Self::Bundler(e) => e.is_input_error(),
            Self::Cli(_) => true,
            Self::Io(_) | Self::Json(_) => false,
        }
    }

    /// Process exit code: 2 for input errors, 1 otherwise
    pub fn exit_code(&self) -> i32 {
        if self.is_recoverable() { 2 } else { 1 }
    }
}
