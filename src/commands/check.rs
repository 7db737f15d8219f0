use std::fs;
use std::path::Path;

use tracing::{error, warn};

use crate::cli::{CheckArgs, Cli};
use crate::files::StagedFile;
use crate::git::{GitRepo, StagedDiff};
use crate::output::{JsonFormatter, OutputFormat, OutputFormatter, Tally, TextFormatter};
use crate::process::{ProcessRunner, SystemRunner};
use crate::task::{TaskContext, TaskReport, run_task, selected_tasks};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, EXIT_VERDICT_FAILED, FormatGuardError, Result};

use super::{color_choice_to_mode, load_config};

#[must_use]
pub fn run_check(args: &CheckArgs, cli: &Cli) -> i32 {
    let result = std::env::current_dir()
        .map_err(FormatGuardError::from)
        .and_then(|cwd| run_check_impl(args, cli, &SystemRunner, &cwd));
    match result {
        Ok((output, exit_code)) => {
            print!("{output}");
            exit_code
        }
        Err(e) => {
            eprintln!("Error: {e}");
            if e.is_config_error() {
                EXIT_CONFIG_ERROR
            } else {
                EXIT_VERDICT_FAILED
            }
        }
    }
}

/// Runs the selected tasks from `cwd` and returns the rendered output with
/// the exit code.
///
/// Errors raised while a task classifies files are folded into that task's
/// report as a failed verdict; only configuration problems and failures
/// before any task starts are returned as `Err`.
///
/// # Errors
/// Returns an error if configuration is invalid, the repository or message
/// cannot be read, or the staged file list cannot be obtained.
pub fn run_check_impl<R: ProcessRunner + ?Sized>(
    args: &CheckArgs,
    cli: &Cli,
    runner: &R,
    cwd: &Path,
) -> Result<(String, i32)> {
    let repo = GitRepo::discover(cwd)?;
    let loaded = load_config(args.config.as_deref(), cli.no_config, Some(repo.workdir()))
        .map_err(into_config_error)?;
    let config = loaded.config;

    let message = clean_message(&read_message(args, cwd)?, &repo.comment_prefix(runner));
    let files = collect_files(args, runner, &repo)?;

    let ctx = TaskContext {
        runner,
        workdir: repo.workdir(),
        message: &message,
        files: &files,
    };

    let reports = selected_tasks(&config, args.task)
        .into_iter()
        .map(|kind| match run_task(kind, &config, &ctx) {
            Err(e) if !e.is_config_error() => {
                error!(task = kind.name(), error = %e, "task aborted");
                Ok(TaskReport::from_error(kind, &e))
            }
            other => other,
        })
        .collect::<Result<Vec<_>>>()?;

    let output = match args.format {
        OutputFormat::Text => {
            TextFormatter::with_verbose(color_choice_to_mode(cli.color), cli.verbose)
                .format(&reports)?
        }
        OutputFormat::Json => JsonFormatter.format(&reports)?,
    };

    let exit_code = if Tally::of(&reports).any_failed() {
        EXIT_VERDICT_FAILED
    } else {
        EXIT_SUCCESS
    };
    Ok((output, exit_code))
}

/// A config file that cannot be read is still a configuration problem.
fn into_config_error(e: FormatGuardError) -> FormatGuardError {
    match e {
        FormatGuardError::FileRead { path, source } => FormatGuardError::Config(format!(
            "Cannot read {}: {source}",
            path.display()
        )),
        other => other,
    }
}

/// Marks the start of the diff `git commit --verbose` appends to the message.
const SCISSORS: &str = "------------------------ >8 ------------------------";

fn read_message(args: &CheckArgs, cwd: &Path) -> Result<String> {
    match (&args.message, &args.message_file) {
        (Some(message), _) => Ok(message.clone()),
        (None, Some(path)) => {
            let path = cwd.join(path);
            fs::read_to_string(&path).map_err(|source| FormatGuardError::FileRead { path, source })
        }
        (None, None) => {
            warn!("no commit message given, checking as untagged");
            Ok(String::new())
        }
    }
}

/// The message as git will store it: everything from the scissors line on
/// is dropped, then comment lines.
fn clean_message(raw: &str, comment: &str) -> String {
    let scissors = format!("{comment} {SCISSORS}");
    raw.lines()
        .take_while(|line| *line != scissors)
        .filter(|line| !line.starts_with(comment))
        .collect::<Vec<_>>()
        .join("\n")
}

fn collect_files<R: ProcessRunner + ?Sized>(
    args: &CheckArgs,
    runner: &R,
    repo: &GitRepo,
) -> Result<Vec<StagedFile>> {
    if args.files.is_empty() {
        return StagedDiff::new(runner, repo.workdir()).staged_files();
    }
    args.files
        .iter()
        .map(|path| repo.relative_path(path).map(StagedFile::new))
        .collect()
}

#[cfg(test)]
#[path = "check_tests.rs"]
mod tests;
