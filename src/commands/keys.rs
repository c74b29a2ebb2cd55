//! Implementation of the `gap keys` command.

use crate::context::GapContext;
use crate::error::Result;
use crate::ssh::{self, SshKey};

/// Execute the `gap keys` command.
pub fn cmd_keys(ctx: &GapContext) -> Result<()> {
    let keys = ssh::scan_keys(&ctx.ssh_dir);

    if keys.is_empty() {
        println!("No SSH private keys found in {}.", ctx.shrink_path(&ctx.ssh_dir));
        return Ok(());
    }

    println!("SSH keys in {}:", ctx.shrink_path(&ctx.ssh_dir));
    for key in &keys {
        println!("  {}", key_line(ctx, key));
    }
    Ok(())
}

fn key_line(ctx: &GapContext, key: &SshKey) -> String {
    if key.is_default {
        format!("{} (default)", key.display_path(ctx))
    } else {
        key.display_path(ctx)
    }
}
