//! Command implementations for gap.
//!
//! This module routes parsed CLI commands to their handlers. Every handler
//! takes the resolved [`GapContext`] so tests can point it at a temporary
//! home directory.

mod clone;
mod create;
mod init;
mod keys;
mod list;
mod remove;
mod whoami;

use crate::cli::Command;
use crate::context::GapContext;
use crate::error::Result;

/// Dispatch a command to its implementation.
pub fn dispatch(ctx: &GapContext, command: Command) -> Result<()> {
    match command {
        Command::Init(args) => init::cmd_init(ctx, args),
        Command::Create(args) => create::cmd_create(ctx, args),
        Command::List => list::cmd_list(ctx),
        Command::Remove(args) => remove::cmd_remove(ctx, args),
        Command::Whoami => whoami::cmd_whoami(ctx),
        Command::Keys => keys::cmd_keys(ctx),
        Command::Clone(args) => clone::cmd_clone(ctx, args),
    }
}
