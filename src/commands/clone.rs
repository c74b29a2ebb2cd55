//! Implementation of the `gap clone` command.
//!
//! A fresh clone has no remote yet, so no include rule can apply during the
//! clone itself. The key is passed to git for this one invocation only.

use crate::cli::CloneArgs;
use crate::context::GapContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::git;
use crate::ssh;
use serde_json::json;
use std::path::PathBuf;

/// The key to clone with: `--key` if given, otherwise a discovered key.
pub fn resolve_clone_key(ctx: &GapContext, requested: Option<&str>) -> Result<PathBuf> {
    match requested {
        Some(key) => Ok(ctx.expand_path(key)),
        None => {
            let keys = ssh::scan_keys(&ctx.ssh_dir);
            Ok(ssh::choose_key(&keys, ctx)?.path.clone())
        }
    }
}

/// Execute the `gap clone` command.
pub fn cmd_clone(ctx: &GapContext, args: CloneArgs) -> Result<()> {
    let key = resolve_clone_key(ctx, args.key.as_deref())?;
    println!("Cloning {} with {}", args.url, ctx.shrink_path(&key));

    git::clone_with_key(&ctx.cwd, &args.url, &key)?;

    events::record(
        ctx,
        Event::new(EventAction::CloneRepo).with_details(json!({
            "url": args.url,
            "key": ctx.shrink_path(&key),
        })),
    );
    Ok(())
}
