//! Error types for the gap CLI.
//!
//! Uses thiserror for derive macros and provides user-actionable error messages.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for git-auto-profile operations.
///
/// Each variant maps to a specific exit code. The engine modules only ever
/// return these as values; translating them into console output and a process
/// exit code happens once, in `main`.
#[derive(Error, Debug)]
pub enum GapError {
    /// A file that was expected to exist is absent.
    #[error("{0}")]
    NotFound(String),

    /// The managed block is required but missing from the shared config file.
    #[error("{0}")]
    ConfigError(String),

    /// An include rule with the same URL pattern is already present.
    #[error("a profile with URL pattern '{0}' already exists")]
    DuplicateRule(String),

    /// User provided invalid arguments or the system is in an invalid state.
    #[error("{0}")]
    UserError(String),

    /// Git operation failed.
    #[error("Git operation failed: {0}")]
    GitError(String),
}

impl GapError {
    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            GapError::NotFound(_) => exit_codes::USER_ERROR,
            GapError::UserError(_) => exit_codes::USER_ERROR,
            GapError::ConfigError(_) => exit_codes::CONFIG_FAILURE,
            GapError::DuplicateRule(_) => exit_codes::CONFIG_FAILURE,
            GapError::GitError(_) => exit_codes::GIT_FAILURE,
        }
    }

    /// The error returned whenever a mutating operation finds no managed block.
    pub fn missing_managed_block() -> Self {
        GapError::ConfigError(
            "managed block not found in .gitconfig. Run `gap init` first.".to_string(),
        )
    }
}

/// Result type alias for git-auto-profile operations.
pub type Result<T> = std::result::Result<T, GapError>;
