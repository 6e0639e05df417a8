//! Command execution functions.

pub mod build;
