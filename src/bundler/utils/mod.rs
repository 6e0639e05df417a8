//! Shared helpers for staging files.

pub mod fs;
