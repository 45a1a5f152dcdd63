//! File system helpers used by both pipelines.
//!
//! Thin wrappers over `std::fs` that attach the path to the error, since
//! a failed read or write always aborts the run and the message is all
//! the user sees.

use std::path::Path;

use anyhow::{Context, Result};

/// Ensure a directory exists, creating it and any parents if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if path.exists() {
        return Ok(());
    }
    std::fs::create_dir_all(path)
        .with_context(|| format!("failed to create directory {}", path.display()))
}

/// Read a file to a string.
pub fn read_text(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))
}

/// Write a string to a file, fully overwriting any prior content.
pub fn write_text(path: &Path, content: &str) -> Result<()> {
    std::fs::write(path, content).with_context(|| format!("failed to write {}", path.display()))
}
