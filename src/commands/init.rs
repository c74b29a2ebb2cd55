//! Implementation of the `gap init` command.
//!
//! # What `gap init` does
//!
//! 1. Writes `~/.git-auto-profile/config.json` (kept as-is on re-init unless `--force`)
//! 2. Creates the profiles directory
//! 3. Adds an empty managed block to `~/.gitconfig` if it has none
//!
//! Every step is idempotent, so running it again repairs a partial setup
//! without touching existing rules.

use crate::cli::InitArgs;
use crate::context::GapContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::fs::ensure_dir;
use crate::gitconfig::RuleStore;
use crate::settings::{DEFAULT_PROFILES_PATH, Settings};
use serde_json::json;

/// Execute the `gap init` command.
pub fn cmd_init(ctx: &GapContext, args: InitArgs) -> Result<()> {
    let existing = Settings::try_load(&ctx.settings_path)?;
    let reinitialized = existing.is_some();

    let settings = match existing {
        Some(current) if !args.force => {
            if let Some(requested) = &args.profiles_path
                && requested != &current.profiles_path
            {
                println!(
                    "Already initialized with profiles at {}; use --force to change it.",
                    current.profiles_path
                );
            }
            current
        }
        _ => {
            let settings = Settings::new(
                args.profiles_path
                    .unwrap_or_else(|| DEFAULT_PROFILES_PATH.to_string()),
            );
            ensure_dir(&ctx.app_dir)?;
            settings.save(&ctx.settings_path)?;
            settings
        }
    };

    let profiles_dir = settings.profiles_dir(ctx);
    ensure_dir(&profiles_dir)?;

    let store = RuleStore::new(&ctx.gitconfig_path);
    let block_ready = match store.ensure_managed_block() {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: failed to update .gitconfig: {}", e);
            false
        }
    };

    events::record(
        ctx,
        Event::new(EventAction::Init).with_details(json!({
            "profiles_path": settings.profiles_path,
            "reinitialized": reinitialized,
            "force": args.force,
            "managed_block": block_ready,
        })),
    );

    println!("Initialized git-auto-profile.");
    println!();
    println!("Settings:          {}", ctx.shrink_path(&ctx.settings_path));
    println!("Profile directory: {}", settings.profiles_path);
    println!("Git config:        {}", ctx.shrink_path(&ctx.gitconfig_path));
    println!();
    println!("Create a profile with `gap create <name> --user-name ... --email ... --pattern ...`.");

    Ok(())
}
