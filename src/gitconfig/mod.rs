//! The managed block inside `~/.gitconfig`.
//!
//! The tool owns one sentinel-delimited region of the user's global git
//! config and keeps its `includeIf` rules there. Everything outside the
//! sentinels belongs to the user and is never rewritten.
//!
//! The pure text operations live in [`block`] and [`rules`]; [`RuleStore`]
//! wraps them in a read-modify-write cycle against a file on disk.

pub mod block;
pub mod rules;
mod store;


pub use rules::Rule;
pub use store::RuleStore;

/// Line opening the managed block.
pub const MANAGED_START: &str = "# --- GIT-AUTO-PROFILE MANAGED BLOCK ---";

/// Line closing the managed block.
pub const MANAGED_END: &str = "# --- END GIT-AUTO-PROFILE MANAGED BLOCK ---";
