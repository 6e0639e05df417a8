//! Command line argument parsing and validation.
//!
//! This module provides CLI argument parsing using clap, with validation
//! of argument combinations.

use crate::metadata::DEFAULT_DESCRIPTOR;
use clap::Parser;
use std::path::PathBuf;

/// Composite Bundle Archive builder
#[derive(Parser, Debug)]
#[command(
    name = "cba_bundler",
    version,
    about = "Builds a Composite Bundle Archive (.cba) from resolved dependencies",
    long_about = "Packages compile-scope dependency artifacts, a COMPOSITEBUNDLE.MF manifest and
Maven coordinate metadata (pom.xml, pom.properties) into <output-directory>/<final-name>.cba.

Inputs come from a TOML build descriptor written by the build orchestrator.

Usage:
  cba_bundler
  cba_bundler --descriptor target/cba.toml --final-name proj-1.0
  cba_bundler --manifest src/main/META-INF/COMPOSITEBUNDLE.MF --checksum --json

Exit code 0 = archive guaranteed to exist at the reported path."
)]
pub struct Args {
    /// Build descriptor listing project metadata and resolved dependencies
    #[arg(
        short = 'd',
        long,
        value_name = "FILE",
        env = "CBA_DESCRIPTOR",
        default_value = DEFAULT_DESCRIPTOR
    )]
    pub descriptor: PathBuf,

    /// Output directory for the archive (overrides the descriptor)
    #[arg(short = 'o', long, value_name = "DIR", env = "CBA_OUTPUT_DIRECTORY")]
    pub output_directory: Option<PathBuf>,

    /// Archive base name without extension (overrides the descriptor)
    #[arg(short = 'n', long, value_name = "NAME", env = "CBA_FINAL_NAME")]
    pub final_name: Option<String>,

    /// Composite bundle manifest (overrides the descriptor)
    #[arg(short = 'm', long, value_name = "FILE")]
    pub manifest: Option<PathBuf>,

    /// Write <archive>.sha256 next to the archive
    #[arg(long)]
    pub checksum: bool,

    /// Print the build result as JSON on stdout
    #[arg(long)]
    pub json: bool,

    /// Show staging details
    #[arg(short, long)]
    pub verbose: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    /// Parse command line arguments
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Validate arguments for consistency
    pub fn validate(&self) -> Result<(), String> {
        if self.verbose && self.quiet {
            return Err("--verbose and --quiet cannot be used together".to_string());
        }

        if self
            .final_name
            .as_deref()
            .is_some_and(|name| name.trim().is_empty())
        {
            return Err("Final name cannot be empty".to_string());
        }

        if self.descriptor.as_os_str().is_empty() {
            return Err("Descriptor path cannot be empty".to_string());
        }

        Ok(())
    }
}

/// Configuration derived from command line arguments
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    /// Output manager for terminal output
    output: super::OutputManager,
}

impl From<&Args> for RuntimeConfig {
    fn from(args: &Args) -> Self {
        // JSON goes to stdout alone
        let output = super::OutputManager::new(args.verbose, args.quiet || args.json);

        Self { output }
    }
}

impl RuntimeConfig {
    /// Print verbose message if in verbose mode
    pub fn verbose_println(&self, message: &str) -> std::io::Result<()> {
        self.output.verbose(message)
    }

    /// Print warning message if not in quiet mode
    pub fn warn(&self, message: &str) -> std::io::Result<()> {
        self.output.warn(message)
    }

    /// Print success message if not in quiet mode
    pub fn success(&self, message: &str) -> std::io::Result<()> {
        self.output.success(message)
    }

    /// Print progress message
    pub fn progress(&self, message: &str) -> std::io::Result<()> {
        self.output.progress(message)
    }

    /// Print section header
    pub fn section(&self, title: &str) -> std::io::Result<()> {
        self.output.section(title)
    }

    /// Print indented text
    pub fn indent(&self, message: &str) -> std::io::Result<()> {
        self.output.indent(message)
    }
}
