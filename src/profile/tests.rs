//! Tests for profile records and the profiles directory.

use super::*;
use std::path::Path;
use tempfile::TempDir;

fn work_profile() -> Profile {
    Profile {
        name: "Jane Doe".to_string(),
        email: "jane@work.example.com".to_string(),
        ssh_key: "~/.ssh/id_work".to_string(),
    }
}

#[test]
fn serialize_has_fixed_layout() {
    assert_eq!(
        work_profile().serialize(),
        "[user]\n    name = Jane Doe\n    email = jane@work.example.com\n[core]\n    sshCommand = ssh -i ~/.ssh/id_work\n"
    );
}

#[test]
fn summary_recovers_serialized_fields() {
    let summary = ProfileSummary::parse(&work_profile().serialize());

    assert_eq!(summary.name.as_deref(), Some("Jane Doe"));
    assert_eq!(summary.email.as_deref(), Some("jane@work.example.com"));
    assert_eq!(summary.ssh_key.as_deref(), Some("~/.ssh/id_work"));
}

#[test]
fn summary_tolerates_missing_fields() {
    let summary = ProfileSummary::parse("[user]\n    email = a@b.co\n");

    assert_eq!(summary.name, None);
    assert_eq!(summary.email.as_deref(), Some("a@b.co"));
    assert_eq!(summary.ssh_key, None);
}

#[test]
fn summary_reads_hand_edited_ssh_commands() {
    let summary = ProfileSummary::parse(
        "[core]\n\tsshCommand = ssh -o IdentitiesOnly=yes -i \"/keys/my key\"\n",
    );
    assert_eq!(summary.ssh_key.as_deref(), Some("/keys/my key"));

    let summary = ProfileSummary::parse("sshCommand = ssh -i/keys/attached\n");
    assert_eq!(summary.ssh_key.as_deref(), Some("/keys/attached"));

    let summary = ProfileSummary::parse("sshCommand = ssh -v\n");
    assert_eq!(summary.ssh_key, None);
}

#[test]
fn profile_names_are_restricted() {
    assert!(validate_profile_name("work-github_2").is_ok());
    assert!(validate_profile_name("").is_err());
    assert!(validate_profile_name("../evil").is_err());
    assert!(validate_profile_name("has space").is_err());
}

#[test]
fn emails_are_checked() {
    assert!(validate_email("a@b.co").is_ok());
    assert!(validate_email("").is_err());
    assert!(validate_email("no-at.example.com").is_err());
    assert!(validate_email("a@nodot").is_err());
    assert!(validate_email("a b@c.de").is_err());
}

#[test]
fn validate_requires_all_fields() {
    assert!(work_profile().validate().is_ok());

    let mut missing_name = work_profile();
    missing_name.name = "  ".to_string();
    assert!(missing_name.validate().is_err());

    let mut missing_key = work_profile();
    missing_key.ssh_key = String::new();
    assert!(missing_key.validate().is_err());
}

#[test]
fn rule_paths_keep_settings_form() {
    assert_eq!(
        rule_path_for("~/.git-auto-profile/profiles", "work"),
        "~/.git-auto-profile/profiles/work.conf"
    );
    assert_eq!(rule_path_for("/abs/profiles/", "work"), "/abs/profiles/work.conf");
}

#[test]
fn profile_name_of_requires_conf_extension() {
    assert_eq!(
        profile_name_of(Path::new("~/.git-auto-profile/profiles/work.conf")).as_deref(),
        Some("work")
    );
    assert_eq!(profile_name_of(Path::new("/p/notes.txt")), None);
    assert_eq!(profile_name_of(Path::new("/p/work")), None);
}

#[test]
fn store_write_read_list_remove() {
    let temp_dir = TempDir::new().unwrap();
    let store = ProfileStore::new(temp_dir.path().join("profiles"));

    assert!(store.list().unwrap().is_empty());

    store.write("work", &work_profile()).unwrap();
    store
        .write(
            "personal",
            &Profile {
                name: "Jane".to_string(),
                email: "jane@home.example".to_string(),
                ssh_key: "~/.ssh/id_ed25519".to_string(),
            },
        )
        .unwrap();
    std::fs::write(temp_dir.path().join("profiles").join("README.md"), "x").unwrap();

    let names: Vec<_> = store.list().unwrap().into_iter().map(|p| p.name).collect();
    assert_eq!(names, vec!["personal", "work"]);
    assert!(store.exists("work"));

    let summary = store.read_summary("work").unwrap();
    assert_eq!(summary.email.as_deref(), Some("jane@work.example.com"));

    store.remove("work").unwrap();
    assert!(!store.exists("work"));
    assert!(matches!(store.remove("work"), Err(GapError::NotFound(_))));
    assert!(matches!(store.read_summary("work"), Err(GapError::NotFound(_))));
}
