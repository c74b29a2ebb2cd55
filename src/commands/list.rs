//! Implementation of the `gap list` command.

use crate::context::GapContext;
use crate::error::Result;
use crate::gitconfig::{Rule, RuleStore};
use crate::profile::{ProfileStore, ProfileSummary, profile_name_of};
use crate::settings::Settings;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// A profile file together with the patterns that include it.
#[derive(Debug)]
pub struct ProfileListing {
    pub name: String,
    pub path: PathBuf,
    pub summary: Option<ProfileSummary>,
    pub patterns: Vec<String>,
}

/// Gather every profile in the profiles directory and attach its patterns.
///
/// Rules are matched to profiles by the file stem of the rule's path, so a
/// rule still finds its profile when the profiles path is written
/// differently (`~/x` vs `/home/u/x`).
pub fn collect_profiles(ctx: &GapContext) -> Result<Vec<ProfileListing>> {
    let settings = Settings::require(&ctx.settings_path)?;
    let store = ProfileStore::new(settings.profiles_dir(ctx));
    let rules = RuleStore::new(&ctx.gitconfig_path).list_rules()?;
    let mut patterns = patterns_by_profile(&rules);

    store
        .list()?
        .into_iter()
        .map(|stored| {
            let summary = match store.read_summary(&stored.name) {
                Ok(summary) => Some(summary),
                Err(e) => {
                    tracing::warn!(profile = %stored.name, error = %e, "could not read profile");
                    None
                }
            };
            Ok(ProfileListing {
                patterns: patterns.remove(&stored.name).unwrap_or_default(),
                name: stored.name,
                path: stored.path,
                summary,
            })
        })
        .collect()
}

fn patterns_by_profile(rules: &[Rule]) -> BTreeMap<String, Vec<String>> {
    let mut map: BTreeMap<String, Vec<String>> = BTreeMap::new();
    for rule in rules {
        if let Some(name) = profile_name_of(Path::new(&rule.profile_path)) {
            map.entry(name).or_default().push(rule.url_pattern.clone());
        }
    }
    map
}

/// Execute the `gap list` command.
pub fn cmd_list(ctx: &GapContext) -> Result<()> {
    let profiles = collect_profiles(ctx)?;

    if profiles.is_empty() {
        println!("No profiles found.");
        println!("Run `gap create` to create your first profile.");
        return Ok(());
    }

    println!(
        "Found {} profile{}:",
        profiles.len(),
        if profiles.len() == 1 { "" } else { "s" }
    );
    println!();

    for (index, profile) in profiles.iter().enumerate() {
        println!("{}. {}", index + 1, profile.name);
        match &profile.summary {
            Some(summary) => {
                println!("   Name:    {}", or_not_set(&summary.name));
                println!("   Email:   {}", or_not_set(&summary.email));
                println!("   SSH Key: {}", or_not_set(&summary.ssh_key));
            }
            None => println!(
                "   (could not read {})",
                ctx.shrink_path(&profile.path)
            ),
        }

        if profile.patterns.is_empty() {
            println!("   URL Patterns: not configured");
        } else {
            println!("   URL Patterns:");
            for pattern in &profile.patterns {
                println!("     - {}", pattern);
            }
        }

        if index + 1 < profiles.len() {
            println!();
        }
    }

    Ok(())
}

fn or_not_set(value: &Option<String>) -> &str {
    value.as_deref().unwrap_or("not set")
}
