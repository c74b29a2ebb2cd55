//! `~`-relative path expansion and shrinking.
//!
//! Settings and include rules store paths the way a human would type them
//! (`~/.git-auto-profile/profiles`), while filesystem calls need absolute
//! paths. Both directions are total: they never fail. Callers normally go
//! through `GapContext::expand_path` and `GapContext::shrink_path`, which
//! supply the resolved home and working directories.

use std::path::{Component, Path, PathBuf};

/// Marker for the user's home directory.
pub const HOME_MARKER: &str = "~";

/// Expand a `~`-relative path against `home`, or resolve a relative path
/// against `cwd`.
pub fn expand_with(path: &str, home: &Path, cwd: &Path) -> PathBuf {
    if let Some(rest) = path.strip_prefix(HOME_MARKER) {
        let rest = rest.trim_start_matches(['/', '\\']);
        if rest.is_empty() {
            return home.to_path_buf();
        }
        return normalize(&home.join(rest));
    }

    let candidate = Path::new(path);
    if candidate.is_absolute() {
        normalize(candidate)
    } else {
        normalize(&cwd.join(candidate))
    }
}

/// Replace a leading `home` with `~`; other paths are returned unchanged.
///
/// The prefix test is component-wise, so `/home/user2` is not shrunk against
/// a home of `/home/user`.
pub fn shrink_with(path: &Path, home: &Path) -> String {
    match path.strip_prefix(home) {
        Ok(rest) if rest.as_os_str().is_empty() => HOME_MARKER.to_string(),
        Ok(rest) => format!("{}/{}", HOME_MARKER, rest.display()),
        Err(_) => path.display().to_string(),
    }
}

/// Lexically resolve `.` and `..` without touching the filesystem.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                out.pop();
            }
            other => out.push(other.as_os_str()),
        }
    }
    out
}
