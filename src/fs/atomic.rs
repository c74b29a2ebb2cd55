//! Atomic file replacement.
//!
//! Content is written to `.{filename}.tmp` next to the target, synced, and
//! renamed over the target. Rename replaces an existing file on every
//! supported platform, and the temp file lives in the same directory so the
//! rename never crosses filesystems.
//!
//! A symlinked target (a dotfile manager's `~/.gitconfig`, say) is resolved
//! first, so the link survives and the file it points at receives the new
//! content. An existing file's permissions carry over to the replacement.
//!
//! This protects against torn writes only. Two processes editing the same
//! file still race, and the last writer wins.

use crate::error::{GapError, Result};
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Atomically replace `path` with `content`, creating parent directories.
pub fn atomic_write_file<P: AsRef<Path>>(path: P, content: &str) -> Result<()> {
    let resolved = resolve_target(path.as_ref());
    let path = resolved.as_path();

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
        && !parent.exists()
    {
        super::ensure_dir(parent)?;
    }

    let temp_path = temp_path_for(path)?;
    write_and_sync(&temp_path, content.as_bytes())?;

    if let Ok(metadata) = fs::metadata(path)
        && metadata.is_file()
        && let Err(e) = fs::set_permissions(&temp_path, metadata.permissions())
    {
        let _ = fs::remove_file(&temp_path);
        return Err(GapError::UserError(format!(
            "failed to copy permissions of '{}': {}",
            path.display(),
            e
        )));
    }

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        GapError::UserError(format!(
            "failed to atomically replace '{}': {}",
            path.display(),
            e
        ))
    })?;

    tracing::debug!(path = %path.display(), bytes = content.len(), "wrote file");
    Ok(())
}

/// Follow symlinks to the file that should actually be replaced.
///
/// A dangling link resolves to its target path, which is created.
fn resolve_target(path: &Path) -> PathBuf {
    let is_link = fs::symlink_metadata(path)
        .map(|m| m.file_type().is_symlink())
        .unwrap_or(false);
    if !is_link {
        return path.to_path_buf();
    }

    fs::canonicalize(path).unwrap_or_else(|_| match fs::read_link(path) {
        Ok(target) => match path.parent() {
            Some(parent) => parent.join(target),
            None => target,
        },
        Err(_) => path.to_path_buf(),
    })
}

fn temp_path_for(target: &Path) -> Result<PathBuf> {
    let parent = target.parent().unwrap_or(Path::new("."));
    let filename = target
        .file_name()
        .and_then(|n| n.to_str())
        .ok_or_else(|| {
            GapError::UserError(format!("invalid file path '{}'", target.display()))
        })?;

    Ok(parent.join(format!(".{}.tmp", filename)))
}

fn write_and_sync(path: &Path, content: &[u8]) -> Result<()> {
    let mut file = File::create(path).map_err(|e| {
        GapError::UserError(format!(
            "failed to create temporary file '{}': {}",
            path.display(),
            e
        ))
    })?;

    file.write_all(content)
        .and_then(|()| file.sync_all())
        .map_err(|e| {
            let _ = fs::remove_file(path);
            GapError::UserError(format!(
                "failed to write temporary file '{}': {}",
                path.display(),
                e
            ))
        })
}
