//! Filesystem helpers for git-auto-profile.
//!
//! Every path this tool touches may legitimately be absent on first run, so
//! reads treat a missing file as empty and directory creation is idempotent.
//! Writes go through [`atomic_write_file`] so a crash never leaves a
//! half-written `.gitconfig` behind.

pub mod atomic;

pub use atomic::atomic_write_file;

use crate::error::{GapError, Result};
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// Read a file, returning `None` if it does not exist.
pub fn read_optional<P: AsRef<Path>>(path: P) -> Result<Option<String>> {
    let path = path.as_ref();
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(GapError::UserError(format!(
            "failed to read '{}': {}",
            path.display(),
            e
        ))),
    }
}

/// Read a file, treating a missing file as an empty document.
pub fn read_to_string_or_empty<P: AsRef<Path>>(path: P) -> Result<String> {
    Ok(read_optional(path)?.unwrap_or_default())
}

/// Create a directory and its parents if they do not exist yet.
pub fn ensure_dir<P: AsRef<Path>>(path: P) -> Result<()> {
    let path = path.as_ref();
    fs::create_dir_all(path).map_err(|e| {
        GapError::UserError(format!(
            "failed to create directory '{}': {}",
            path.display(),
            e
        ))
    })
}
