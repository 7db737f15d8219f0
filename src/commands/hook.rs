//! `hook install`: wires `format-guard check` into git's commit-msg hook.

use std::fs;
use std::path::{Path, PathBuf};

use crate::cli::{HookAction, HookArgs};
use crate::git::{GIT_PROGRAM, GitRepo};
use crate::process::{Invocation, ProcessRunner, SystemRunner};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, FormatGuardError, Result};

/// Marks hooks written by this command.
pub const HOOK_MARKER: &str = "# installed by format-guard";

const HOOK_NAME: &str = "commit-msg";

#[must_use]
pub fn run_hook(args: &HookArgs) -> i32 {
    match &args.action {
        HookAction::Install { force } => {
            let installed = std::env::current_dir()
                .map_err(FormatGuardError::from)
                .and_then(|cwd| GitRepo::discover(&cwd))
                .and_then(|repo| run_hook_install_impl(&SystemRunner, &repo, *force));
            match installed {
                Ok(path) => {
                    println!("Installed {HOOK_NAME} hook: {}", path.display());
                    EXIT_SUCCESS
                }
                Err(e) => {
                    eprintln!("Error: {e}");
                    EXIT_CONFIG_ERROR
                }
            }
        }
    }
}

#[must_use]
pub fn hook_script() -> String {
    format!("#!/bin/sh\n{HOOK_MARKER}\nexec format-guard check \"$1\"\n")
}

/// Writes the hook and returns its path.
///
/// # Errors
/// Returns an error if the hooks directory cannot be resolved, a foreign
/// hook exists and `force` is false, or the file cannot be written.
pub fn run_hook_install_impl<R: ProcessRunner + ?Sized>(
    runner: &R,
    repo: &GitRepo,
    force: bool,
) -> Result<PathBuf> {
    let hooks_dir = hooks_dir(runner, repo.workdir())?;
    let hook_path = hooks_dir.join(HOOK_NAME);

    if hook_path.exists() && !force {
        let existing = fs::read_to_string(&hook_path).unwrap_or_default();
        if !existing.contains(HOOK_MARKER) {
            return Err(FormatGuardError::Config(format!(
                "A {HOOK_NAME} hook already exists: {}. Use --force to overwrite.",
                hook_path.display()
            )));
        }
    }

    fs::create_dir_all(&hooks_dir)?;
    fs::write(&hook_path, hook_script())?;
    make_executable(&hook_path)?;
    tracing::info!(path = %hook_path.display(), "hook installed");
    Ok(hook_path)
}

/// `git rev-parse --git-path hooks` honours `core.hooksPath` and worktrees.
fn hooks_dir<R: ProcessRunner + ?Sized>(runner: &R, workdir: &Path) -> Result<PathBuf> {
    let invocation = Invocation::new(GIT_PROGRAM)
        .args(["rev-parse", "--git-path", "hooks"])
        .current_dir(workdir);
    let output = runner.run(&invocation)?;
    if !output.success() {
        return Err(FormatGuardError::Git(format!(
            "Failed to locate the hooks directory:\n{}",
            output.diagnostic()
        )));
    }
    let relative = output.stdout_text();
    Ok(workdir.join(relative.trim_end()))
}

#[cfg(unix)]
fn make_executable(path: &Path) -> Result<()> {
    use std::os::unix::fs::PermissionsExt;

    let mut perms = fs::metadata(path)?.permissions();
    perms.set_mode(0o755);
    fs::set_permissions(path, perms)?;
    Ok(())
}

#[cfg(not(unix))]
fn make_executable(_path: &Path) -> Result<()> {
    Ok(())
}

#[cfg(test)]
#[path = "hook_tests.rs"]
mod tests;
