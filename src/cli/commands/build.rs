//! The archive build command.

use crate::bundler::{
    ArchiveBuilder, ArchiveOutput,
    builder::checksum::{calculate_sha256, write_checksum_file},
};
use crate::cli::{Args, RuntimeConfig};
use crate::error::{BundlerError, CliError, Result};
use crate::metadata::{absolutize, load_descriptor};
use serde::Serialize;
use std::path::{Path, PathBuf};

/// Machine-readable build result printed with `--json`.
#[derive(Debug, Serialize)]
pub struct BuildReport {
    #[serde(flatten)]
    pub output: ArchiveOutput,

    /// Hex-encoded SHA-256 of the archive
    pub sha256: String,

    /// Side-car written with `--checksum`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checksum_file: Option<PathBuf>,
}

/// Loads the descriptor, builds the archive and reports the result.
///
/// # Returns
///
/// * `Ok(0)` - The archive exists at the reported path
/// * `Err` - Any load, validation or build failure
pub async fn execute(args: &Args, config: &RuntimeConfig) -> Result<i32> {
    config.section("Composite Bundle Archive")?;

    let descriptor = load_descriptor(&args.descriptor)?;
    config.verbose_println(&format!("Descriptor: {}", args.descriptor.display()))?;

    let cwd = Path::new(".");
    let mut request = descriptor.request_builder();
    if let Some(dir) = &args.output_directory {
        request = request.output_directory(absolutize(dir, cwd)?);
    }
    if let Some(name) = &args.final_name {
        request = request.final_name(name.clone());
    }
    if let Some(manifest) = &args.manifest {
        request = request.manifest_file(absolutize(manifest, cwd)?);
    }
    let request = request.build()?;

    config.progress(&format!(
        "Packaging {}:{}:{}",
        request.project().group_id,
        request.project().artifact_id,
        request.project().effective_version()
    ))?;
    config.verbose_println(&format!("Work directory: {}", request.work_directory().display()))?;
    config.verbose_println(&format!("Manifest: {}", request.manifest_file().display()))?;

    let skipped = descriptor
        .dependencies
        .iter()
        .filter(|d| !d.is_includable())
        .count();
    if skipped > 0 {
        config.verbose_println(&format!("Skipping {skipped} non-compile dependencies"))?;
    }

    let dependencies = descriptor.dependencies;
    let output = tokio::task::spawn_blocking(move || ArchiveBuilder::new(request).build(&dependencies))
        .await
        .map_err(|e| {
            BundlerError::Cli(CliError::ExecutionFailed {
                command: "build_archive".to_string(),
                reason: format!("Archive build task panicked: {}", e),
            })
        })??;

    let sha256 = calculate_sha256(&output.produced_file_path).await?;
    let checksum_file = if args.checksum {
        Some(write_checksum_file(&output.produced_file_path, &sha256).await?)
    } else {
        None
    };

    for warning in &output.warnings {
        config.warn(warning)?;
    }
    config.success(&format!(
        "Created {} ({} entries, {} bytes)",
        output.produced_file_path.display(),
        output.entries.len(),
        output.size
    ))?;
    for entry in &output.entries {
        config.verbose_println(entry)?;
    }
    config.indent(&format!("SHA256: {sha256}"))?;
    if let Some(path) = &checksum_file {
        config.indent(&format!("Checksum: {}", path.display()))?;
    }

    if args.json {
        let report = BuildReport {
            output,
            sha256,
            checksum_file,
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    }

    Ok(0)
}
