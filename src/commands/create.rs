//! Implementation of the `gap create` command.
//!
//! Writes a profile file and an include rule pointing at it. The rule goes
//! in first because it is the step that can be refused (duplicate pattern,
//! missing managed block); if the profile file then fails to write, that
//! one rule is taken out again so the two never disagree. A rule that
//! already pairs the pattern with this profile is reused.

use crate::cli::CreateArgs;
use crate::context::GapContext;
use crate::error::{GapError, Result};
use crate::events::{self, Event, EventAction};
use crate::gitconfig::RuleStore;
use crate::pattern;
use crate::profile::{Profile, ProfileStore, rule_path_for, validate_profile_name};
use crate::settings::Settings;
use crate::ssh;
use serde_json::json;

/// Execute the `gap create` command.
pub fn cmd_create(ctx: &GapContext, args: CreateArgs) -> Result<()> {
    validate_profile_name(&args.name)?;
    let url_pattern = args.pattern.trim();
    if url_pattern.is_empty() {
        return Err(GapError::UserError("URL pattern is required".to_string()));
    }

    let settings = Settings::require(&ctx.settings_path)?;
    let profiles = ProfileStore::new(settings.profiles_dir(ctx));

    if profiles.exists(&args.name) && !args.force {
        return Err(GapError::UserError(format!(
            "profile '{}' already exists at {}. Use --force to overwrite it.",
            args.name,
            ctx.shrink_path(&profiles.path_for(&args.name))
        )));
    }

    let ssh_key = match &args.ssh_key {
        Some(key) => key.clone(),
        None => {
            let keys = ssh::scan_keys(&ctx.ssh_dir);
            ssh::choose_key(&keys, ctx)?.display_path(ctx)
        }
    };

    let profile = Profile {
        name: args.user_name.trim().to_string(),
        email: args.email.trim().to_string(),
        ssh_key,
    };
    profile.validate()?;

    let store = RuleStore::new(&ctx.gitconfig_path);
    let existing_rules = store.list_rules()?;
    if let Some(shadow) = pattern::shadowing_rule(&existing_rules, url_pattern) {
        eprintln!(
            "Warning: existing pattern '{}' ({}) already matches '{}' and comes first.",
            shadow.url_pattern, shadow.profile_path, url_pattern
        );
    }

    let rule_path = rule_path_for(&settings.profiles_path, &args.name);
    let rule_exists = existing_rules
        .iter()
        .any(|rule| rule.url_pattern == url_pattern && rule.profile_path == rule_path);
    if !rule_exists {
        store.add_rule(url_pattern, &rule_path)?;
    }

    let profile_file = match profiles.write(&args.name, &profile) {
        Ok(path) => path,
        Err(e) => {
            if !rule_exists
                && let Err(rollback) = store.remove_exact_rule(url_pattern, &rule_path)
            {
                tracing::warn!(error = %rollback, "failed to roll back include rule");
            }
            return Err(e);
        }
    };

    events::record(
        ctx,
        Event::new(EventAction::Create)
            .with_profile(&args.name)
            .with_details(json!({
                "pattern": url_pattern,
                "rule_path": rule_path,
                "ssh_key": profile.ssh_key,
            })),
    );

    println!("Profile created.");
    println!();
    println!("Profile:  {}", args.name);
    println!("File:     {}", ctx.shrink_path(&profile_file));
    println!("Pattern:  {}", url_pattern);
    println!("SSH key:  {}", profile.ssh_key);

    Ok(())
}
