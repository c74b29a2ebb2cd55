//! The profiles directory.

use super::{PROFILE_EXTENSION, Profile, ProfileSummary};
use crate::error::{GapError, Result};
use crate::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// One `<name>.conf` file per profile inside a single directory.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    dir: PathBuf,
}

/// A profile file found on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredProfile {
    pub name: String,
    pub path: PathBuf,
}

impl ProfileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(file_name(name))
    }

    pub fn exists(&self, name: &str) -> bool {
        self.path_for(name).is_file()
    }

    pub fn write(&self, name: &str, profile: &Profile) -> Result<PathBuf> {
        let path = self.path_for(name);
        fs::atomic_write_file(&path, &profile.serialize())?;
        Ok(path)
    }

    pub fn read_summary(&self, name: &str) -> Result<ProfileSummary> {
        let path = self.path_for(name);
        let content = fs::read_optional(&path)?.ok_or_else(|| {
            GapError::NotFound(format!("profile '{}' not found at {}", name, path.display()))
        })?;
        Ok(ProfileSummary::parse(&content))
    }

    /// Delete a profile file. A missing file is a [`GapError::NotFound`].
    pub fn remove(&self, name: &str) -> Result<()> {
        let path = self.path_for(name);
        std::fs::remove_file(&path).map_err(|e| {
            if e.kind() == ErrorKind::NotFound {
                GapError::NotFound(format!("profile '{}' not found at {}", name, path.display()))
            } else {
                GapError::UserError(format!(
                    "failed to remove profile '{}': {}",
                    path.display(),
                    e
                ))
            }
        })
    }

    /// All profile files, sorted by name. A missing directory has none.
    pub fn list(&self) -> Result<Vec<StoredProfile>> {
        let entries = match std::fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(GapError::UserError(format!(
                    "failed to read profiles directory '{}': {}",
                    self.dir.display(),
                    e
                )));
            }
        };

        let mut profiles: Vec<StoredProfile> = entries
            .filter_map(|entry| entry.ok())
            .map(|entry| entry.path())
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let name = profile_name_of(&path)?;
                Some(StoredProfile { name, path })
            })
            .collect();

        profiles.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(profiles)
    }
}

fn file_name(name: &str) -> String {
    format!("{}.{}", name, PROFILE_EXTENSION)
}

/// Profile name for a path ending in `.conf`; `None` for anything else.
///
/// Works on the path strings stored in include rules as well as real files.
pub fn profile_name_of(path: &Path) -> Option<String> {
    if path.extension()?.to_str()? != PROFILE_EXTENSION {
        return None;
    }
    path.file_stem()?.to_str().map(str::to_string)
}

/// The path string an include rule records for a profile.
///
/// Built from the profiles path exactly as written in settings, so a
/// `~`-relative setting yields a `~`-relative rule that git expands itself.
pub fn rule_path_for(profiles_path: &str, name: &str) -> String {
    format!(
        "{}/{}",
        profiles_path.trim_end_matches('/'),
        file_name(name)
    )
}
