//! Process-wide settings stored in `~/.git-auto-profile/config.json`.
//!
//! The file holds a single field:
//!
//! ```json
//! {
//!   "profilesPath": "~/.git-auto-profile/profiles"
//! }
//! ```
//!
//! Settings are read fresh by every command; nothing is cached between
//! invocations.

use crate::error::{GapError, Result};
use crate::context::GapContext;
use crate::fs;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Default location for profile files, as written into settings.
pub const DEFAULT_PROFILES_PATH: &str = "~/.git-auto-profile/profiles";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Directory holding profile files, `~`-relative or absolute.
    pub profiles_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            profiles_path: DEFAULT_PROFILES_PATH.to_string(),
        }
    }
}

impl Settings {
    pub fn new(profiles_path: impl Into<String>) -> Self {
        Self {
            profiles_path: profiles_path.into(),
        }
    }

    /// Load settings, returning `None` when the file does not exist.
    pub fn try_load<P: AsRef<Path>>(path: P) -> Result<Option<Self>> {
        match fs::read_optional(path.as_ref())? {
            Some(content) => Self::from_json(&content).map(Some),
            None => Ok(None),
        }
    }

    /// Load settings, treating a missing file as "not initialized".
    pub fn require<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        Self::try_load(path)?.ok_or_else(|| {
            GapError::NotFound(format!(
                "git-auto-profile is not initialized (no settings at {}). Run `gap init` first.",
                path.display()
            ))
        })
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let settings: Settings = serde_json::from_str(json)
            .map_err(|e| GapError::UserError(format!("failed to parse settings JSON: {}", e)))?;
        settings.validate()?;
        Ok(settings)
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map(|mut json| {
                json.push('\n');
                json
            })
            .map_err(|e| GapError::UserError(format!("failed to serialize settings: {}", e)))
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        self.validate()?;
        fs::atomic_write_file(path, &self.to_json()?)
    }

    pub fn validate(&self) -> Result<()> {
        if self.profiles_path.trim().is_empty() {
            return Err(GapError::UserError(
                "settings validation failed: profilesPath must not be empty".to_string(),
            ));
        }
        Ok(())
    }

    /// Absolute profiles directory.
    pub fn profiles_dir(&self, ctx: &GapContext) -> PathBuf {
        ctx.expand_path(&self.profiles_path)
    }
}
