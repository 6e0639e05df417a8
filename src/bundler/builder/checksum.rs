//! Archive checksum calculation.
//!
//! This module provides SHA256 checksum calculation for produced archives.

use crate::{bail, bundler::Result, bundler::error::ErrorExt};
use sha2::{Digest, Sha256};
use tokio::io::AsyncReadExt;

/// Extension of the checksum side-car written next to an archive.
pub const CHECKSUM_EXTENSION: &str = "sha256";

/// Calculates SHA256 checksum of a file.
///
/// Reads in 8KB chunks and computes the SHA-256 hash.
///
/// # Returns
///
/// * `Ok(String)` - Hex-encoded SHA-256 hash (64 characters)
/// * `Err` - If the path cannot be read or is not a regular file
pub async fn calculate_sha256(path: &std::path::Path) -> Result<String> {
    let metadata = tokio::fs::metadata(path)
        .await
        .fs_context("reading checksum target metadata", path)?;

    if !metadata.is_file() {
        bail!("Path is not a file: {}", path.display());
    }

    let mut file = tokio::fs::File::open(path)
        .await
        .fs_context("opening file for checksum", path)?;
    let mut hasher = Sha256::new();
    let mut buffer = vec![0u8; 8192];

    loop {
        let n = file
            .read(&mut buffer)
            .await
            .fs_context("reading file for checksum", path)?;
        if n == 0 {
            break;
        }
        hasher.update(&buffer[..n]);
    }

    Ok(format!("{:x}", hasher.finalize()))
}

/// Writes `<archive>.sha256` in `sha256sum` format and returns its path.
pub async fn write_checksum_file(
    archive: &std::path::Path,
    checksum: &str,
) -> Result<std::path::PathBuf> {
    let file_name = archive
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default();
    let mut target = archive.as_os_str().to_owned();
    target.push(".");
    target.push(CHECKSUM_EXTENSION);
    let target = std::path::PathBuf::from(target);

    tokio::fs::write(&target, format!("{checksum}  {file_name}\n"))
        .await
        .fs_context("writing checksum file", &target)?;
    Ok(target)
}
