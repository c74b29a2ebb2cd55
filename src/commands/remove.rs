//! Implementation of the `gap remove` command.

use crate::cli::RemoveArgs;
use crate::context::GapContext;
use crate::error::Result;
use crate::events::{self, Event, EventAction};
use crate::gitconfig::RuleStore;
use crate::profile::{ProfileStore, rule_path_for, validate_profile_name};
use crate::settings::Settings;
use serde_json::json;

/// Execute the `gap remove` command.
///
/// Deletes the profile file, then every include rule that points at it.
/// A `.gitconfig` without a managed block only produces a warning, since
/// the profile itself is already gone by then.
pub fn cmd_remove(ctx: &GapContext, args: RemoveArgs) -> Result<()> {
    validate_profile_name(&args.name)?;

    let settings = Settings::require(&ctx.settings_path)?;
    let profiles = ProfileStore::new(settings.profiles_dir(ctx));
    profiles.remove(&args.name)?;

    let rule_path = rule_path_for(&settings.profiles_path, &args.name);
    let rules_updated = match RuleStore::new(&ctx.gitconfig_path).remove_rule(&rule_path) {
        Ok(()) => true,
        Err(e) => {
            eprintln!("Warning: failed to update .gitconfig: {}", e);
            false
        }
    };

    events::record(
        ctx,
        Event::new(EventAction::Remove)
            .with_profile(&args.name)
            .with_details(json!({
                "rule_path": rule_path,
                "rules_updated": rules_updated,
            })),
    );

    println!("Profile \"{}\" removed.", args.name);
    Ok(())
}
