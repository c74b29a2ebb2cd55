//! SSH private key discovery.
//!
//! Keys are recognized by content rather than by name: a file is a private
//! key if it carries a PEM-style `PRIVATE KEY` armor or the legacy SSH1
//! header. Public keys (`*.pub`) are skipped without being read.

use crate::context::GapContext;
use crate::error::{GapError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Key file names that ssh tries on its own.
const DEFAULT_KEY_NAMES: &[&str] = &["id_ed25519", "id_rsa"];

const LEGACY_HEADER: &str = "SSH PRIVATE KEY FILE FORMAT 1.1";

/// A private key found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SshKey {
    /// Absolute path to the key file.
    pub path: PathBuf,
    /// File name inside the scanned directory.
    pub file_name: String,
    /// Whether ssh would use this key without being told.
    pub is_default: bool,
}

impl SshKey {
    /// The `~/.ssh/<file>` form used in profile files and listings.
    pub fn display_path(&self, ctx: &GapContext) -> String {
        ctx.shrink_path(&self.path)
    }
}

/// Whether `content` looks like an SSH private key.
pub fn looks_like_private_key(content: &str) -> bool {
    (content.contains("-----BEGIN ") && content.contains(" PRIVATE KEY-----"))
        || content.starts_with(LEGACY_HEADER)
}

/// All private keys in `dir`, sorted by file name.
///
/// A missing directory and unreadable entries are skipped rather than
/// reported.
pub fn scan_keys(dir: &Path) -> Vec<SshKey> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::debug!(dir = %dir.display(), error = %e, "ssh directory not readable");
            return Vec::new();
        }
    };

    let mut keys: Vec<SshKey> = entries
        .filter_map(|entry| entry.ok())
        .filter_map(|entry| {
            let path = entry.path();
            let file_name = path.file_name()?.to_str()?.to_string();
            if file_name.ends_with(".pub") || !path.is_file() {
                return None;
            }
            // Binary files and permission errors both land here.
            let content = fs::read_to_string(&path).ok()?;
            if !looks_like_private_key(&content) {
                return None;
            }
            Some(SshKey {
                is_default: DEFAULT_KEY_NAMES.contains(&file_name.as_str()),
                path,
                file_name,
            })
        })
        .collect();

    keys.sort_by(|a, b| a.file_name.cmp(&b.file_name));
    keys
}

/// Pick a key when the user did not name one.
///
/// Prefers `id_ed25519`, then `id_rsa`, then the only key present. With
/// several non-default keys there is no safe guess and the candidates are
/// listed in the error.
pub fn choose_key<'a>(keys: &'a [SshKey], ctx: &GapContext) -> Result<&'a SshKey> {
    if keys.is_empty() {
        return Err(GapError::NotFound(format!(
            "no SSH private keys found in {}",
            ctx.shrink_path(&ctx.ssh_dir)
        )));
    }

    for name in DEFAULT_KEY_NAMES {
        if let Some(key) = keys.iter().find(|k| k.file_name == *name) {
            return Ok(key);
        }
    }

    if let [only] = keys {
        return Ok(only);
    }

    let candidates: Vec<String> = keys.iter().map(|k| k.display_path(ctx)).collect();
    Err(GapError::UserError(format!(
        "several SSH keys found; choose one with --ssh-key/--key:\n  {}",
        candidates.join("\n  ")
    )))
}
