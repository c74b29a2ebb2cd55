//! Include rules and the line-pair protocol inside the managed block.
//!
//! A rule is written as two adjacent lines:
//!
//! ```text
//! [includeIf "hasconfig:remote.*.url:<glob>"]
//!     path = <profile-file-path>
//! ```
//!
//! The body is parsed into [`Entry`] values once, edited structurally, and
//! serialized back. Lines that do not form a complete pair are kept as
//! [`Entry::Other`] so that listing and removal can skip them.

use super::block::ManagedBlock;
use crate::error::{GapError, Result};

/// Literal prefix of the condition embedded in a rule header.
const URL_CONDITION_PREFIX: &str = "hasconfig:remote.*.url:";

/// Literal prefix of the path line.
const PATH_PREFIX: &str = "path = ";

/// An association between a URL glob and a profile file path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub url_pattern: String,
    pub profile_path: String,
}

impl Rule {
    pub fn new(url_pattern: impl Into<String>, profile_path: impl Into<String>) -> Self {
        Self {
            url_pattern: url_pattern.into(),
            profile_path: profile_path.into(),
        }
    }

    /// The two lines this rule occupies on disk.
    pub fn to_lines(&self) -> [String; 2] {
        [
            format!("[includeIf \"{}{}\"]", URL_CONDITION_PREFIX, self.url_pattern),
            format!("    {}{}", PATH_PREFIX, self.profile_path),
        ]
    }
}

/// One parsed unit of the managed block body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Entry {
    /// A header line followed by its path line, with the raw text of both.
    Rule { rule: Rule, lines: [String; 2] },
    /// Any line that is not part of a recognized pair, blank lines included.
    Other(String),
}

/// Extract the URL pattern from a rule header line.
fn header_pattern(line: &str) -> Option<&str> {
    let line = line.trim();
    if !line.starts_with("[includeIf") {
        return None;
    }
    let (_, rest) = line.split_once(URL_CONDITION_PREFIX)?;
    let end = rest.find('"')?;
    let pattern = &rest[..end];
    (!pattern.is_empty()).then_some(pattern)
}

/// Extract the profile path from a path line.
fn path_value(line: &str) -> Option<&str> {
    let value = line.trim().strip_prefix(PATH_PREFIX)?.trim();
    (!value.is_empty()).then_some(value)
}

/// Parse a managed block body into entries.
pub fn parse_body(body: &str) -> Vec<Entry> {
    let lines: Vec<&str> = body.lines().collect();

    let mut entries = Vec::with_capacity(lines.len());
    let mut i = 0;
    while i < lines.len() {
        if let Some(pattern) = header_pattern(lines[i])
            && let Some(path) = lines.get(i + 1).and_then(|next| path_value(next))
        {
            entries.push(Entry::Rule {
                rule: Rule::new(pattern, path),
                lines: [lines[i].to_string(), lines[i + 1].to_string()],
            });
            i += 2;
            continue;
        }

        entries.push(Entry::Other(lines[i].to_string()));
        i += 1;
    }

    entries
}

/// Serialize entries back into a body.
pub fn render_body(entries: &[Entry]) -> String {
    let mut lines: Vec<&str> = Vec::new();
    for entry in entries {
        match entry {
            Entry::Rule { lines: pair, .. } => lines.extend(pair.iter().map(String::as_str)),
            Entry::Other(line) => lines.push(line),
        }
    }
    lines.join("\n")
}

/// All complete rules in the document, in on-disk order.
///
/// A document without a managed block has no rules.
pub fn list_rules(document: &str) -> Vec<Rule> {
    let Some(block) = ManagedBlock::locate(document) else {
        return Vec::new();
    };

    parse_body(block.body)
        .into_iter()
        .filter_map(|entry| match entry {
            Entry::Rule { rule, .. } => Some(rule),
            Entry::Other(_) => None,
        })
        .collect()
}

/// Append a rule to the managed block.
///
/// Fails with [`GapError::ConfigError`] if the block is missing and with
/// [`GapError::DuplicateRule`] if any header in the block already carries
/// `url_pattern`.
pub fn add_rule(document: &str, url_pattern: &str, profile_path: &str) -> Result<String> {
    check_rule_values(url_pattern, profile_path)?;
    let block = ManagedBlock::locate(document).ok_or_else(GapError::missing_managed_block)?;
    let mut entries = parse_body(block.body);

    let duplicate = entries.iter().any(|entry| match entry {
        Entry::Rule { rule, .. } => rule.url_pattern == url_pattern,
        Entry::Other(line) => header_pattern(line) == Some(url_pattern),
    });
    if duplicate {
        return Err(GapError::DuplicateRule(url_pattern.to_string()));
    }

    let rule = Rule::new(url_pattern, profile_path);
    let lines = rule.to_lines();
    entries.push(Entry::Rule { rule, lines });

    Ok(block.splice(&render_body(&entries)))
}

/// Reject values that would not read back as written.
///
/// A `"` ends the header's quoted condition early, and a line break in
/// either value would split the pair or forge a sentinel line.
fn check_rule_values(url_pattern: &str, profile_path: &str) -> Result<()> {
    if url_pattern.contains(['"', '\n', '\r']) {
        return Err(GapError::UserError(format!(
            "invalid URL pattern {:?}: quotes and line breaks are not allowed",
            url_pattern
        )));
    }
    if profile_path.contains(['\n', '\r']) {
        return Err(GapError::UserError(format!(
            "invalid profile path {:?}: line breaks are not allowed",
            profile_path
        )));
    }
    Ok(())
}

/// Remove the single rule pairing `url_pattern` with `profile_path`.
///
/// Other rules for the same path and every non-rule line stay as they are.
/// A rule that is not present leaves the document unchanged.
pub fn remove_exact_rule(document: &str, url_pattern: &str, profile_path: &str) -> Result<String> {
    let block = ManagedBlock::locate(document).ok_or_else(GapError::missing_managed_block)?;
    let entries = parse_body(block.body);
    let kept: Vec<Entry> = entries
        .iter()
        .filter(|entry| {
            !matches!(entry, Entry::Rule { rule, .. }
                if rule.url_pattern == url_pattern && rule.profile_path == profile_path)
        })
        .cloned()
        .collect();

    if kept.len() == entries.len() {
        return Ok(document.to_string());
    }
    Ok(block.splice(&render_body(&kept)))
}

/// Remove every rule pointing at `profile_path`.
///
/// Orphaned path lines naming `profile_path` are dropped too, and blank
/// lines are not carried over. Removing a path that is not present leaves
/// the rules untouched.
pub fn remove_rule(document: &str, profile_path: &str) -> Result<String> {
    let block = ManagedBlock::locate(document).ok_or_else(GapError::missing_managed_block)?;

    let kept: Vec<Entry> = parse_body(block.body)
        .into_iter()
        .filter(|entry| match entry {
            Entry::Rule { rule, .. } => rule.profile_path != profile_path,
            Entry::Other(line) => {
                !line.trim().is_empty() && path_value(line) != Some(profile_path)
            }
        })
        .collect();

    Ok(block.splice(&render_body(&kept)))
}
