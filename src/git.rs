//! Git command runner for git-auto-profile.
//!
//! The managed block engine never shells out; only the diagnostic and clone
//! commands do, and they all go through this module.

use crate::error::{GapError, Result};
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

/// Result of a successful git command execution.
#[derive(Debug, Clone)]
pub struct GitOutput {
    /// Standard output from the command (trimmed).
    pub stdout: String,
    /// Standard error from the command (trimmed).
    pub stderr: String,
}

impl GitOutput {
    fn from_output(output: &Output) -> Self {
        Self {
            stdout: String::from_utf8_lossy(&output.stdout).trim().to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
    }
}

/// Run a git command in `cwd` with captured output.
///
/// # Returns
///
/// * `Ok(GitOutput)` - On exit code 0
/// * `Err(GapError::GitError)` - On spawn failure or non-zero exit
pub fn run_git<P: AsRef<Path>>(cwd: P, args: &[&str]) -> Result<GitOutput> {
    let output = spawn_captured(cwd.as_ref(), args)?;
    let git_output = GitOutput::from_output(&output);

    if output.status.success() {
        Ok(git_output)
    } else {
        let exit_code = output.status.code().unwrap_or(-1);
        let error_msg = if git_output.stderr.is_empty() {
            git_output.stdout
        } else {
            git_output.stderr
        };

        Err(GapError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.first().unwrap_or(&""),
            exit_code,
            error_msg
        )))
    }
}

fn spawn_captured(cwd: &Path, args: &[&str]) -> Result<Output> {
    tracing::debug!(cwd = %cwd.display(), ?args, "running git");
    Command::new("git")
        .current_dir(cwd)
        .args(args)
        .output()
        .map_err(|e| {
            GapError::GitError(format!(
                "failed to execute git {}: {} (is git installed?)",
                args.first().unwrap_or(&""),
                e
            ))
        })
}

/// Whether `cwd` is inside a git work tree.
///
/// Any failure, including git reporting "not a git repository", counts as no.
pub fn is_inside_work_tree<P: AsRef<Path>>(cwd: P) -> bool {
    run_git(cwd, &["rev-parse", "--is-inside-work-tree"])
        .map(|out| out.stdout == "true")
        .unwrap_or(false)
}

/// The top-level directory of the repository containing `cwd`.
pub fn repo_root<P: AsRef<Path>>(cwd: P) -> Result<PathBuf> {
    run_git(cwd, &["rev-parse", "--show-toplevel"])
        .map(|out| PathBuf::from(out.stdout))
        .map_err(|_| {
            GapError::UserError(
                "not inside a git repository. Run this command from within a git repository."
                    .to_string(),
            )
        })
}

/// The configured URL of `remote`, or `None` if the remote has no URL.
pub fn remote_url<P: AsRef<Path>>(cwd: P, remote: &str) -> Result<Option<String>> {
    let key = format!("remote.{}.url", remote);
    config_get(cwd.as_ref(), &["config", "--get", &key]).map(|out| out.map(|o| o.stdout))
}

/// A config value together with the file that set it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigOrigin {
    /// Origin as reported by git, with the `file:` prefix removed.
    pub source: String,
    pub value: String,
}

/// Look up `key` with `git config --show-origin --get`.
pub fn config_with_origin<P: AsRef<Path>>(cwd: P, key: &str) -> Result<Option<ConfigOrigin>> {
    let out = config_get(cwd.as_ref(), &["config", "--show-origin", "--get", key])?;
    Ok(out.map(|o| parse_show_origin(&o.stdout)))
}

fn parse_show_origin(line: &str) -> ConfigOrigin {
    let (source, value) = line.split_once('\t').unwrap_or(("", line));
    ConfigOrigin {
        source: source.strip_prefix("file:").unwrap_or(source).to_string(),
        value: value.to_string(),
    }
}

/// `git config --get` exits 1 when the key is unset; that is `Ok(None)`.
fn config_get(cwd: &Path, args: &[&str]) -> Result<Option<GitOutput>> {
    let output = spawn_captured(cwd, args)?;
    match output.status.code() {
        Some(0) => Ok(Some(GitOutput::from_output(&output))),
        Some(1) => Ok(None),
        code => Err(GapError::GitError(format!(
            "git {} failed (exit code {}): {}",
            args.join(" "),
            code.unwrap_or(-1),
            String::from_utf8_lossy(&output.stderr).trim()
        ))),
    }
}

/// The `core.sshCommand` value that selects a specific private key.
pub fn ssh_command_for_key(key: &Path) -> String {
    format!("ssh -i {}", key.display())
}

/// Clone `url` into `cwd` using `key`, with git's output going to the terminal.
pub fn clone_with_key<P: AsRef<Path>>(cwd: P, url: &str, key: &Path) -> Result<()> {
    let ssh_config = format!("core.sshCommand={}", ssh_command_for_key(key));
    tracing::debug!(url, key = %key.display(), "cloning");

    let status = Command::new("git")
        .current_dir(cwd.as_ref())
        .args(["-c", &ssh_config, "clone", url])
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .map_err(|e| GapError::GitError(format!("failed to execute git clone: {}", e)))?;

    if status.success() {
        Ok(())
    } else {
        Err(GapError::GitError(format!(
            "git clone failed with exit code {}",
            status.code().unwrap_or(-1)
        )))
    }
}
