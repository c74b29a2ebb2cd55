//! Profile records and their on-disk text form.
//!
//! A profile is one small git config file holding an identity:
//!
//! ```text
//! [user]
//!     name = Jane Doe
//!     email = jane@example.com
//! [core]
//!     sshCommand = ssh -i ~/.ssh/id_work
//! ```
//!
//! Values are written verbatim with no escaping. Reading goes the other way
//! only loosely: [`ProfileSummary::parse`] picks known keys out of whatever
//! lines are present.

mod store;

#[cfg(test)]
mod tests;

pub use store::{ProfileStore, profile_name_of, rule_path_for};

use crate::error::{GapError, Result};
use regex::Regex;
use std::sync::LazyLock;

/// File extension of profile files.
pub const PROFILE_EXTENSION: &str = "conf";

static NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9_-]+$").expect("valid profile name regex"));

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// A git identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Profile {
    /// Value for `user.name`.
    pub name: String,
    /// Value for `user.email`.
    pub email: String,
    /// Private key passed to `ssh -i`, usually `~`-relative.
    pub ssh_key: String,
}

impl Profile {
    /// Render the profile file contents. Sections and keys are in fixed order.
    pub fn serialize(&self) -> String {
        format!(
            "[user]\n    name = {}\n    email = {}\n[core]\n    sshCommand = ssh -i {}\n",
            self.name, self.email, self.ssh_key
        )
    }

    /// Check field values before anything is written.
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(GapError::UserError("user name is required".to_string()));
        }
        validate_email(&self.email)?;
        if self.ssh_key.trim().is_empty() {
            return Err(GapError::UserError("SSH key path is required".to_string()));
        }
        Ok(())
    }
}

/// Fields recovered from an existing profile file; any may be missing.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileSummary {
    pub name: Option<String>,
    pub email: Option<String>,
    pub ssh_key: Option<String>,
}

impl ProfileSummary {
    pub fn parse(content: &str) -> Self {
        let mut summary = Self::default();

        for line in content.lines() {
            let line = line.trim();
            if let Some(value) = line.strip_prefix("name = ") {
                summary.name = Some(value.to_string());
            } else if let Some(value) = line.strip_prefix("email = ") {
                summary.email = Some(value.to_string());
            } else if let Some(command) = line.strip_prefix("sshCommand = ") {
                summary.ssh_key = identity_file(command);
            }
        }

        summary
    }
}

/// The argument following `-i` in an ssh command line.
fn identity_file(command: &str) -> Option<String> {
    let words = shell_words::split(command).ok()?;
    let mut iter = words.into_iter();
    while let Some(word) = iter.next() {
        if word == "-i" {
            return iter.next();
        }
        if let Some(attached) = word.strip_prefix("-i")
            && !attached.is_empty()
        {
            return Some(attached.to_string());
        }
    }
    None
}

/// Profile names become file names, so they are restricted to `[A-Za-z0-9_-]`.
pub fn validate_profile_name(name: &str) -> Result<()> {
    if name.is_empty() {
        return Err(GapError::UserError("profile name is required".to_string()));
    }
    if !NAME_RE.is_match(name) {
        return Err(GapError::UserError(format!(
            "invalid profile name '{}': use only letters, numbers, hyphens, and underscores",
            name
        )));
    }
    Ok(())
}

pub fn validate_email(email: &str) -> Result<()> {
    if email.is_empty() {
        return Err(GapError::UserError("email is required".to_string()));
    }
    if !EMAIL_RE.is_match(email) {
        return Err(GapError::UserError(format!(
            "invalid email format: '{}'",
            email
        )));
    }
    Ok(())
}
