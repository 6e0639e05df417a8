//! `pom.properties` generation.
//!
//! Output is compatible with `java.util.Properties::load`: keys in sorted
//! order, no timestamp line, so identical coordinates produce identical bytes.

use crate::bundler::error::{ErrorExt, Result};
use std::{collections::BTreeMap, fmt::Write as _, path::Path};

/// File name of the properties side-car.
pub const POM_PROPERTIES_FILE: &str = "pom.properties";

/// Maven coordinate properties of the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PomProperties {
    entries: BTreeMap<&'static str, String>,
}

impl PomProperties {
    /// Creates properties for the given coordinates.
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        let mut entries = BTreeMap::new();
        entries.insert("groupId", group_id.into());
        entries.insert("artifactId", artifact_id.into());
        entries.insert("version", version.into());
        Self { entries }
    }

    /// Renders the properties file content.
    pub fn render(&self) -> String {
        let mut out = format!("#Created by cba_bundler {}\n", env!("CARGO_PKG_VERSION"));
        for (key, value) in &self.entries {
            let _ = writeln!(out, "{}={}", escape(key, true), escape(value, false));
        }
        out
    }

    /// Writes the file, creating parent directories as needed.
    pub fn write_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).fs_context("creating maven metadata directory", parent)?;
        }
        std::fs::write(path, self.render()).fs_context("writing pom.properties", path)
    }
}

/// Escapes text the way `Properties::store` does.
fn escape(text: &str, is_key: bool) -> String {
    let mut out = String::with_capacity(text.len());
    for (i, c) in text.chars().enumerate() {
        match c {
            ' ' if i == 0 || is_key => out.push_str("\\ "),
            '\\' => out.push_str("\\\\"),
            '\t' => out.push_str("\\t"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\x0c' => out.push_str("\\f"),
            '=' | ':' | '#' | '!' => {
                out.push('\\');
                out.push(c);
            }
            ' '..='~' => out.push(c),
            _ => {
                let mut units = [0u16; 2];
                for unit in c.encode_utf16(&mut units) {
                    let _ = write!(out, "\\u{:04X}", unit);
                }
            }
        }
    }
    out
}
