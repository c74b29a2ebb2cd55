//! Implementation of the `gap whoami` command.
//!
//! Shows which profile git would apply to the current repository and the
//! identity values git actually resolves, each with the file that set it.

use crate::context::GapContext;
use crate::error::Result;
use crate::git::{self, ConfigOrigin};
use crate::gitconfig::{Rule, RuleStore};
use crate::pattern;
use crate::profile::profile_name_of;
use crate::settings::Settings;
use std::path::Path;

/// Keys shown by `gap whoami`, with their display labels.
const IDENTITY_KEYS: &[(&str, &str)] = &[
    ("user.name", "Name"),
    ("user.email", "Email"),
    ("core.sshCommand", "SSH"),
];

/// The profile that applies to a repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActiveProfile {
    /// The repository has no `origin` remote.
    NoRemote,
    /// No rule matches the remote URL.
    NoMatch { url: String },
    /// The first matching rule.
    Matched { name: String, rule: Rule },
}

/// Resolve the active profile for `remote_url` against rules in file order.
pub fn resolve_active_profile(rules: &[Rule], remote_url: Option<&str>) -> ActiveProfile {
    let Some(url) = remote_url else {
        return ActiveProfile::NoRemote;
    };

    match pattern::first_match(rules, url) {
        Some(rule) => ActiveProfile::Matched {
            name: profile_name_of(Path::new(&rule.profile_path))
                .unwrap_or_else(|| rule.profile_path.clone()),
            rule: rule.clone(),
        },
        None => ActiveProfile::NoMatch {
            url: url.to_string(),
        },
    }
}

/// Execute the `gap whoami` command.
pub fn cmd_whoami(ctx: &GapContext) -> Result<()> {
    if !git::is_inside_work_tree(&ctx.cwd) {
        println!("Not inside a git repository. Showing global values.");
        println!();
        print_identity(ctx)?;
        return Ok(());
    }

    let root = git::repo_root(&ctx.cwd)?;
    println!("Repository: {}", ctx.shrink_path(&root));

    let remote = git::remote_url(&ctx.cwd, "origin")?;
    println!("Remote:     {}", remote.as_deref().unwrap_or("not set"));

    match Settings::try_load(&ctx.settings_path)? {
        None => println!("Profile:    git-auto-profile is not initialized"),
        Some(_) => {
            let rules = RuleStore::new(&ctx.gitconfig_path).list_rules()?;
            match resolve_active_profile(&rules, remote.as_deref()) {
                ActiveProfile::NoRemote => println!("Profile:    none (no origin remote)"),
                ActiveProfile::NoMatch { .. } => println!("Profile:    none (no pattern matches)"),
                ActiveProfile::Matched { name, rule } => {
                    println!("Profile:    {}", name);
                    println!("Pattern:    {}", rule.url_pattern);
                }
            }
        }
    }

    println!();
    print_identity(ctx)
}

fn print_identity(ctx: &GapContext) -> Result<()> {
    for (key, label) in IDENTITY_KEYS {
        let origin = git::config_with_origin(&ctx.cwd, key)?;
        println!("{:<6} {}", format!("{}:", label), describe(ctx, origin.as_ref()));
    }
    Ok(())
}

fn describe(ctx: &GapContext, origin: Option<&ConfigOrigin>) -> String {
    match origin {
        None => "not set".to_string(),
        Some(origin) if origin.source.is_empty() => origin.value.clone(),
        Some(origin) => format!(
            "{} (from {})",
            origin.value,
            ctx.shrink_path(Path::new(&origin.source))
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{TestHome, create_test_repo_with_origin};

    fn rules() -> Vec<Rule> {
        vec![
            Rule::new("git@github.com:work/**", "~/.git-auto-profile/profiles/work.conf"),
            Rule::new("git@github.com:**", "~/.git-auto-profile/profiles/personal.conf"),
        ]
    }

    #[test]
    fn first_matching_rule_wins() {
        let active = resolve_active_profile(&rules(), Some("git@github.com:work/api.git"));
        assert_eq!(
            active,
            ActiveProfile::Matched {
                name: "work".to_string(),
                rule: rules()[0].clone(),
            }
        );

        let active = resolve_active_profile(&rules(), Some("git@github.com:me/dots.git"));
        assert!(matches!(active, ActiveProfile::Matched { ref name, .. } if name == "personal"));
    }

    #[test]
    fn no_remote_and_no_match() {
        assert_eq!(resolve_active_profile(&rules(), None), ActiveProfile::NoRemote);
        assert_eq!(
            resolve_active_profile(&rules(), Some("https://gitlab.com/x/y.git")),
            ActiveProfile::NoMatch {
                url: "https://gitlab.com/x/y.git".to_string()
            }
        );
    }

    #[test]
    fn describe_shrinks_origin_file() {
        let home = TestHome::new();
        let origin = ConfigOrigin {
            source: home.path().join(".gitconfig").display().to_string(),
            value: "Jane".to_string(),
        };
        assert_eq!(describe(&home.ctx, Some(&origin)), "Jane (from ~/.gitconfig)");
        assert_eq!(describe(&home.ctx, None), "not set");
    }

    #[test]
    fn whoami_inside_repository() {
        let home = TestHome::new();
        let repo = create_test_repo_with_origin("git@github.com:work/api.git");
        let ctx = home.ctx.clone().with_cwd(repo.path());

        cmd_whoami(&ctx).unwrap();
    }

    #[test]
    fn whoami_outside_repository() {
        let home = TestHome::new();
        cmd_whoami(&home.ctx).unwrap();
    }
}
