//! Terminal output honoring verbose and quiet modes.
//!
//! Progress goes to stdout, warnings to stderr. Symbols are colored only
//! when the target stream supports it.

use owo_colors::{OwoColorize, Stream};
use std::io::{self, Write};

pub mod symbols {
    pub const SUCCESS: &str = "✓";
    pub const WARNING: &str = "⚠";
    pub const ARROW: &str = "→";
    pub const SECTION: &str = "═══";
}

/// Prints user-facing progress lines.
#[derive(Debug, Clone, Copy)]
pub struct OutputManager {
    verbose: bool,
    quiet: bool,
}

impl OutputManager {
    /// Creates an output manager. `quiet` wins over `verbose`.
    pub fn new(verbose: bool, quiet: bool) -> Self {
        Self { verbose, quiet }
    }

    pub fn is_verbose(&self) -> bool {
        self.verbose && !self.quiet
    }

    pub fn is_quiet(&self) -> bool {
        self.quiet
    }

    /// Detail line, only in verbose mode.
    pub fn verbose(&self, message: &str) -> io::Result<()> {
        if !self.is_verbose() {
            return Ok(());
        }
        self.line(&format!(
            "  {}",
            message.if_supports_color(Stream::Stdout, |s| s.dimmed())
        ))
    }

    pub fn progress(&self, message: &str) -> io::Result<()> {
        self.line(&format!(
            "{} {}",
            symbols::ARROW.if_supports_color(Stream::Stdout, |s| s.blue()),
            message
        ))
    }

    pub fn success(&self, message: &str) -> io::Result<()> {
        self.line(&format!(
            "{} {}",
            symbols::SUCCESS.if_supports_color(Stream::Stdout, |s| s.green()),
            message
        ))
    }

    pub fn section(&self, title: &str) -> io::Result<()> {
        self.line(&format!(
            "{} {} {}",
            symbols::SECTION,
            title.if_supports_color(Stream::Stdout, |s| s.bold()),
            symbols::SECTION
        ))
    }

    pub fn indent(&self, message: &str) -> io::Result<()> {
        self.line(&format!("  {message}"))
    }

    /// Warning on stderr.
    pub fn warn(&self, message: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut err = io::stderr().lock();
        writeln!(
            err,
            "{} {}",
            symbols::WARNING.if_supports_color(Stream::Stderr, |s| s.yellow()),
            message.if_supports_color(Stream::Stderr, |s| s.yellow())
        )
    }

    fn line(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let mut out = io::stdout().lock();
        writeln!(out, "{text}")?;
        out.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiet_overrides_verbose() {
        let output = OutputManager::new(true, true);
        assert!(!output.is_verbose());
        assert!(output.is_quiet());
        assert!(output.progress("hidden").is_ok());
        assert!(output.warn("hidden").is_ok());
    }
}
