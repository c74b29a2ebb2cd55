//! Well-known locations for git-auto-profile.
//!
//! Every command works against the same handful of files under the user's
//! home directory. This module resolves them once per invocation so the rest
//! of the code never calls `dirs::home_dir` itself, and tests can point the
//! whole tool at a temporary directory with [`GapContext::from_home`].

use crate::error::{GapError, Result};
use crate::paths;
use std::env;
use std::path::{Path, PathBuf};

/// Application directory name under the home directory.
pub const APP_DIR_NAME: &str = ".git-auto-profile";

/// Resolved paths for one invocation. All paths are absolute.
#[derive(Debug, Clone)]
pub struct GapContext {
    /// The user's home directory.
    pub home: PathBuf,

    /// Working directory the command was invoked from.
    pub cwd: PathBuf,

    /// `~/.git-auto-profile/`.
    pub app_dir: PathBuf,

    /// `~/.git-auto-profile/config.json`.
    pub settings_path: PathBuf,

    /// `~/.gitconfig`, the shared file holding the managed block.
    pub gitconfig_path: PathBuf,

    /// `~/.ssh/`, scanned for private keys.
    pub ssh_dir: PathBuf,
}

impl GapContext {
    /// Resolve the context from the current user's home and working directory.
    pub fn resolve() -> Result<Self> {
        let home = dirs::home_dir().ok_or_else(|| {
            GapError::UserError("could not determine the home directory".to_string())
        })?;
        let cwd = env::current_dir().map_err(|e| {
            GapError::UserError(format!("failed to get current working directory: {}", e))
        })?;

        Ok(Self::from_home(home).with_cwd(cwd))
    }

    /// Build a context rooted at `home`, with `home` as the working directory.
    pub fn from_home(home: impl Into<PathBuf>) -> Self {
        let home = home.into();
        let app_dir = home.join(APP_DIR_NAME);

        Self {
            cwd: home.clone(),
            settings_path: app_dir.join("config.json"),
            gitconfig_path: home.join(".gitconfig"),
            ssh_dir: home.join(".ssh"),
            app_dir,
            home,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<PathBuf>) -> Self {
        self.cwd = cwd.into();
        self
    }

    /// `~/.git-auto-profile/events.ndjson`.
    pub fn events_file(&self) -> PathBuf {
        self.app_dir.join("events.ndjson")
    }

    /// Expand `~` against this context's home; relative paths resolve against `cwd`.
    pub fn expand_path(&self, path: &str) -> PathBuf {
        paths::expand_with(path, &self.home, &self.cwd)
    }

    /// Replace a leading home directory with `~`.
    pub fn shrink_path(&self, path: &Path) -> String {
        paths::shrink_with(path, &self.home)
    }
}
