//! Staged entry table and zip output.

use crate::bundler::error::{ErrorExt, Result};
use std::{
    collections::BTreeMap,
    fs::File,
    io::{BufWriter, Write},
    path::{Path, PathBuf},
};
use zip::{CompressionMethod, DateTime, ZipWriter, write::SimpleFileOptions};

/// Archive entries keyed by their path inside the archive.
///
/// Iteration is in entry-path order, so the written archive does not depend
/// on the order entries were staged in.
#[derive(Debug, Clone, Default)]
pub struct StagedEntries {
    entries: BTreeMap<String, PathBuf>,
}

impl StagedEntries {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Stages `source` under `name`, returning the source it replaced.
    pub fn stage(&mut self, name: impl Into<String>, source: impl Into<PathBuf>) -> Option<PathBuf> {
        self.entries.insert(name.into(), source.into())
    }

    /// Entry paths in archive order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    #[allow(clippy::len_without_is_empty)]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    fn iter(&self) -> impl Iterator<Item = (&String, &PathBuf)> {
        self.entries.iter()
    }
}

/// Writes `entries` as a deflate-compressed zip at `dest`.
///
/// The archive is assembled in a temporary sibling and renamed into place,
/// replacing any existing file. All entries carry the same DOS timestamp.
/// Sources larger than 4 GiB are written with ZIP64 headers.
/// Returns the size of the written archive in bytes.
pub fn write_archive(dest: &Path, entries: &StagedEntries) -> Result<u64> {
    if let Some(parent) = dest.parent() {
        crate::bundler::utils::fs::create_dir_all(parent)?;
    }

    let mut tmp_name = dest.as_os_str().to_owned();
    tmp_name.push(".part");
    let tmp = PathBuf::from(tmp_name);

    if let Err(e) = write_zip(&tmp, entries) {
        let _ = std::fs::remove_file(&tmp);
        return Err(e);
    }

    std::fs::rename(&tmp, dest).fs_context("moving archive into place", dest)?;

    let size = std::fs::metadata(dest)
        .fs_context("reading archive metadata", dest)?
        .len();
    Ok(size)
}

fn write_zip(path: &Path, entries: &StagedEntries) -> Result<()> {
    let file = File::create(path).fs_context("creating archive", path)?;
    let mut zip = ZipWriter::new(BufWriter::new(file));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .last_modified_time(DateTime::default());

    for (name, source) in entries.iter() {
        log::debug!("Adding {} from {}", name, source.display());
        let mut input = File::open(source).fs_context("opening archive entry source", source)?;
        let len = input
            .metadata()
            .fs_context("reading archive entry metadata", source)?
            .len();
        zip.start_file(name.as_str(), options.large_file(needs_zip64(len)))?;
        std::io::copy(&mut input, &mut zip).fs_context("writing archive entry", source)?;
    }

    let mut writer = zip.finish()?;
    writer.flush().fs_context("flushing archive", path)?;
    Ok(())
}

/// Entries at or beyond 4 GiB need ZIP64 size fields.
fn needs_zip64(len: u64) -> bool {
    len >= u64::from(u32::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    #[test]
    fn restaging_replaces_source() {
        let mut entries = StagedEntries::new();
        assert!(entries.stage("a-1.jar", "/first").is_none());
        assert_eq!(entries.stage("a-1.jar", "/second"), Some(PathBuf::from("/first")));
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn writes_entries_in_name_order_and_replaces_existing() {
        let temp = tempfile::tempdir().unwrap();
        let b = temp.path().join("b.bin");
        let a = temp.path().join("a.bin");
        std::fs::write(&b, b"bee").unwrap();
        std::fs::write(&a, b"ay").unwrap();

        let mut entries = StagedEntries::new();
        entries.stage("z/b.bin", &b);
        entries.stage("a.bin", &a);

        let dest = temp.path().join("out/test.cba");
        std::fs::create_dir_all(temp.path().join("out")).unwrap();
        std::fs::write(&dest, b"stale").unwrap();

        let size = write_archive(&dest, &entries).unwrap();
        assert_eq!(size, std::fs::metadata(&dest).unwrap().len());
        assert!(!temp.path().join("out/test.cba.part").exists());

        let mut archive = zip::ZipArchive::new(File::open(&dest).unwrap()).unwrap();
        let names: Vec<String> = archive.file_names().map(String::from).collect();
        // file_names() order is unspecified; check by index instead
        assert_eq!(names.len(), 2);
        assert_eq!(archive.by_index(0).unwrap().name(), "a.bin");
        assert_eq!(archive.by_index(1).unwrap().name(), "z/b.bin");

        let mut entry = archive.by_name("z/b.bin").unwrap();
        assert_eq!(entry.compression(), CompressionMethod::Deflated);
        let mut content = String::new();
        entry.read_to_string(&mut content).unwrap();
        assert_eq!(content, "bee");
    }

    #[test]
    fn zip64_only_for_oversized_sources() {
        assert!(!needs_zip64(0));
        assert!(!needs_zip64(u64::from(u32::MAX) - 1));
        assert!(needs_zip64(u64::from(u32::MAX)));
        assert!(needs_zip64(5 * 1024 * 1024 * 1024));
    }

    #[test]
    fn missing_source_leaves_no_archive() {
        let temp = tempfile::tempdir().unwrap();
        let mut entries = StagedEntries::new();
        entries.stage("ghost.jar", temp.path().join("ghost.jar"));

        let dest = temp.path().join("test.cba");
        assert!(write_archive(&dest, &entries).is_err());
        assert!(!dest.exists());
        assert!(!temp.path().join("test.cba.part").exists());
    }
}
