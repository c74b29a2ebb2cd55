//! Locating the managed block inside arbitrary config text.

use super::{MANAGED_END, MANAGED_START};

/// A view of the managed region inside a document.
///
/// Recomputed from the document text on every read; never stored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ManagedBlock<'a> {
    /// Byte offset of the start sentinel.
    pub start_offset: usize,
    /// Byte offset of the end sentinel.
    pub end_offset: usize,
    /// Trimmed text strictly between the sentinels.
    pub body: &'a str,
    /// Document text up to and including the start sentinel.
    pub prefix: &'a str,
    /// Document text from the end sentinel onward, sentinel included.
    pub suffix: &'a str,
}

impl<'a> ManagedBlock<'a> {
    /// Find the managed block in `document`.
    ///
    /// Each sentinel is searched for independently and the first occurrence
    /// wins. Returns `None` when either sentinel is missing or the end
    /// sentinel comes before the start sentinel.
    pub fn locate(document: &'a str) -> Option<Self> {
        let start_offset = document.find(MANAGED_START)?;
        let end_offset = document.find(MANAGED_END)?;

        let body_start = start_offset + MANAGED_START.len();
        if end_offset < body_start {
            return None;
        }

        Some(Self {
            start_offset,
            end_offset,
            body: document[body_start..end_offset].trim(),
            prefix: &document[..body_start],
            suffix: &document[end_offset..],
        })
    }

    /// Rebuild the document with `body` in place of the current body.
    ///
    /// Text outside the sentinels is carried over byte for byte.
    pub fn splice(&self, body: &str) -> String {
        let body = body.trim();
        let mut out = String::with_capacity(self.prefix.len() + body.len() + self.suffix.len() + 2);
        out.push_str(self.prefix);
        out.push('\n');
        if !body.is_empty() {
            out.push_str(body);
            out.push('\n');
        }
        out.push_str(self.suffix);
        out
    }
}

/// Append an empty managed block to `document` unless one is already present.
///
/// Existing content is preserved verbatim; non-empty documents get a blank
/// separator line before the start sentinel. Calling this on its own output
/// returns the output unchanged.
pub fn ensure_block_exists(document: &str) -> String {
    if ManagedBlock::locate(document).is_some() {
        return document.to_string();
    }

    let mut out = document.to_string();
    if !out.is_empty() && !out.ends_with('\n') {
        out.push('\n');
    }
    if !document.trim().is_empty() {
        out.push('\n');
    }
    out.push_str(MANAGED_START);
    out.push('\n');
    out.push_str(MANAGED_END);
    out.push('\n');
    out
}
