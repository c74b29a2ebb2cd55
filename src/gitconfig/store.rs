//! File-backed rule store.

use super::{block, rules, Rule};
use crate::error::Result;
use crate::fs;
use std::path::{Path, PathBuf};

/// Rule operations against a shared config file on disk.
///
/// Each call reads the whole file fresh, transforms it in memory, and writes
/// it back whole. A missing file reads as an empty document. Nothing is
/// cached between calls.
#[derive(Debug, Clone)]
pub struct RuleStore {
    path: PathBuf,
}

impl RuleStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String> {
        fs::read_to_string_or_empty(&self.path)
    }

    /// Create an empty managed block if the file has none. Safe to repeat.
    pub fn ensure_managed_block(&self) -> Result<()> {
        let document = self.read()?;
        let updated = block::ensure_block_exists(&document);
        if updated != document {
            tracing::debug!(path = %self.path.display(), "adding managed block");
            fs::atomic_write_file(&self.path, &updated)?;
        }
        Ok(())
    }

    /// Add a rule. The file is left untouched when this fails.
    pub fn add_rule(&self, url_pattern: &str, profile_path: &str) -> Result<()> {
        let document = self.read()?;
        let updated = rules::add_rule(&document, url_pattern, profile_path)?;
        fs::atomic_write_file(&self.path, &updated)?;
        tracing::debug!(url_pattern, profile_path, "added include rule");
        Ok(())
    }

    /// Remove all rules for `profile_path`; a no-op if there are none.
    pub fn remove_rule(&self, profile_path: &str) -> Result<()> {
        let document = self.read()?;
        let updated = rules::remove_rule(&document, profile_path)?;
        if updated != document {
            fs::atomic_write_file(&self.path, &updated)?;
            tracing::debug!(profile_path, "removed include rules");
        }
        Ok(())
    }

    /// Remove one specific rule, leaving other rules for its path in place.
    pub fn remove_exact_rule(&self, url_pattern: &str, profile_path: &str) -> Result<()> {
        let document = self.read()?;
        let updated = rules::remove_exact_rule(&document, url_pattern, profile_path)?;
        if updated != document {
            fs::atomic_write_file(&self.path, &updated)?;
            tracing::debug!(url_pattern, profile_path, "removed include rule");
        }
        Ok(())
    }

    /// All rules in on-disk order; empty when the file or block is absent.
    pub fn list_rules(&self) -> Result<Vec<Rule>> {
        Ok(rules::list_rules(&self.read()?))
    }
}
