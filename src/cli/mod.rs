//! CLI argument parsing for gap.
//!
//! Uses clap derive macros for declarative argument definitions.
//! This module defines the command structure; actual implementations
//! are in the `commands` module.

use clap::{Parser, Subcommand};

/// gap: automatic Git identity switching based on remote URL patterns.
///
/// Each profile is a small git config file holding a user name, email and
/// SSH key. Rules in a managed block of `~/.gitconfig` include a profile
/// whenever a repository's remote URL matches the rule's pattern.
#[derive(Parser, Debug)]
#[command(name = "gap")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands for gap.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Initialize git-auto-profile.
    ///
    /// Writes settings, creates the profiles directory, and adds the
    /// managed block to `~/.gitconfig`. Safe to run repeatedly.
    Init(InitArgs),

    /// Create a new profile and associate a URL pattern with it.
    #[command(alias = "add")]
    Create(CreateArgs),

    /// List profiles with their identities and URL patterns.
    List,

    /// Remove a profile and its include rules.
    Remove(RemoveArgs),

    /// Show the active profile and where each identity value comes from.
    Whoami,

    /// List SSH private keys found in `~/.ssh`.
    Keys,

    /// Clone a repository using a specific SSH key.
    Clone(CloneArgs),
}

/// Arguments for the `init` command.
#[derive(Parser, Debug)]
pub struct InitArgs {
    /// Directory for profile files (`~`-relative paths are kept as written).
    #[arg(long)]
    pub profiles_path: Option<String>,

    /// Overwrite existing settings.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `create` command.
#[derive(Parser, Debug)]
pub struct CreateArgs {
    /// Profile name (letters, numbers, hyphens, underscores).
    pub name: String,

    /// Value for `user.name`.
    #[arg(long)]
    pub user_name: String,

    /// Value for `user.email`.
    #[arg(long)]
    pub email: String,

    /// Remote URL pattern, e.g. `git@github.com:your-org/**`.
    #[arg(short, long)]
    pub pattern: String,

    /// SSH private key; defaults to the standard key in `~/.ssh`.
    #[arg(long)]
    pub ssh_key: Option<String>,

    /// Overwrite an existing profile file with the same name. A rule that
    /// already pairs this pattern with the profile is kept as is.
    #[arg(long)]
    pub force: bool,
}

/// Arguments for the `remove` command.
#[derive(Parser, Debug)]
pub struct RemoveArgs {
    /// Profile name to remove.
    pub name: String,
}

/// Arguments for the `clone` command.
#[derive(Parser, Debug)]
pub struct CloneArgs {
    /// Repository URL to clone.
    pub url: String,

    /// SSH private key to use; defaults to the standard key in `~/.ssh`.
    #[arg(short, long)]
    pub key: Option<String>,
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }
}
