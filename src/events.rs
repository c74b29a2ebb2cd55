//! Audit log for git-auto-profile.
//!
//! Every command that changes state on disk appends one NDJSON line to
//! `~/.git-auto-profile/events.ndjson`:
//!
//! - `ts`: RFC3339 timestamp
//! - `action`: what happened (init, create, remove, clone)
//! - `actor`: `user@HOST`
//! - `profile`: the profile involved, if any
//! - `details`: freeform object with action-specific details
//!
//! The log is informational. Commands report a failed append as a warning
//! and carry on.

use crate::context::GapContext;
use crate::error::{GapError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fs::OpenOptions;
use std::io::Write;

/// Actions that can be logged as events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventAction {
    Init,
    Create,
    Remove,
    #[serde(rename = "clone")]
    CloneRepo,
}

/// One line of the audit log.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub ts: DateTime<Utc>,
    pub action: EventAction,
    pub actor: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub profile: Option<String>,
    pub details: Value,
}

impl Event {
    pub fn new(action: EventAction) -> Self {
        Self {
            ts: Utc::now(),
            action,
            actor: actor_string(),
            profile: None,
            details: Value::Object(serde_json::Map::new()),
        }
    }

    pub fn with_profile(mut self, name: impl Into<String>) -> Self {
        self.profile = Some(name.into());
        self
    }

    pub fn with_details(mut self, details: Value) -> Self {
        self.details = details;
        self
    }

    pub fn to_ndjson_line(&self) -> Result<String> {
        serde_json::to_string(self)
            .map_err(|e| GapError::UserError(format!("failed to serialize event to JSON: {}", e)))
    }
}

fn actor_string() -> String {
    let user = std::env::var("USER")
        .or_else(|_| std::env::var("USERNAME"))
        .unwrap_or_else(|_| "unknown".to_string());

    let host = hostname::get()
        .map(|h| h.to_string_lossy().to_string())
        .unwrap_or_else(|_| "unknown".to_string());

    format!("{}@{}", user, host)
}

/// Append an event to the audit log, creating the file if needed.
pub fn append_event(ctx: &GapContext, event: &Event) -> Result<()> {
    let events_file = ctx.events_file();
    let json_line = event.to_ndjson_line()?;

    crate::fs::ensure_dir(&ctx.app_dir)?;

    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&events_file)
        .map_err(|e| {
            GapError::UserError(format!(
                "failed to open events file '{}': {}",
                events_file.display(),
                e
            ))
        })?;

    writeln!(file, "{}", json_line).map_err(|e| {
        GapError::UserError(format!(
            "failed to write event to '{}': {}",
            events_file.display(),
            e
        ))
    })
}

/// Append an event, downgrading failure to a warning.
pub fn record(ctx: &GapContext, event: Event) {
    if let Err(e) = append_event(ctx, &event) {
        tracing::warn!(action = ?event.action, error = %e, "failed to log event");
    }
}
