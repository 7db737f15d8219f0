use std::path::Path;

use serde::Serialize;
use tracing::debug;

use crate::files::StagedFile;
use crate::process::{Invocation, ProcessRunner};
use crate::{FormatGuardError, Result};

use super::GIT_PROGRAM;

/// One `--numstat` record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiffStatLine {
    pub added: usize,
    pub removed: usize,
    /// git reports `-` counts for binary content; both counts are 0 then.
    pub binary: bool,
    pub path: String,
}

impl DiffStatLine {
    /// No line changes once whitespace is ignored.
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        !self.binary && self.added == 0 && self.removed == 0
    }
}

/// Parse `git diff --numstat -z` output.
///
/// Records look like `<added>\t<removed>\t<path>\0`. Records with an empty
/// path are skipped.
///
/// # Errors
/// Returns an error if a record is not three tab-separated fields or a count
/// is neither a number nor `-`.
pub fn parse_numstat(output: &[u8]) -> Result<Vec<DiffStatLine>> {
    let mut lines = Vec::new();
    for record in output.split(|b| *b == 0) {
        let record = String::from_utf8_lossy(record);
        let record: &str = &record;
        if record.is_empty() {
            continue;
        }

        let mut fields = record.splitn(3, '\t');
        let (Some(added), Some(removed), Some(path)) = (fields.next(), fields.next(), fields.next())
        else {
            return Err(FormatGuardError::Git(format!(
                "Unexpected numstat record: {record:?}"
            )));
        };
        if path.is_empty() {
            continue;
        }

        let binary = added == "-" || removed == "-";
        lines.push(DiffStatLine {
            added: parse_count(added, record)?,
            removed: parse_count(removed, record)?,
            binary,
            path: path.to_string(),
        });
    }
    Ok(lines)
}

fn parse_count(field: &str, record: &str) -> Result<usize> {
    if field == "-" {
        return Ok(0);
    }
    field.parse().map_err(|_| {
        FormatGuardError::Git(format!("Invalid line count {field:?} in numstat record {record:?}"))
    })
}

/// Split NUL-separated path output, dropping empty entries.
#[must_use]
pub fn parse_nul_paths(output: &[u8]) -> Vec<String> {
    output
        .split(|b| *b == 0)
        .filter(|s| !s.is_empty())
        .map(|s| String::from_utf8_lossy(s).into_owned())
        .collect()
}

/// Bulk diff queries against the index.
///
/// For every query here a non-zero exit code means the query itself failed.
/// "Differences found" is always decided from the output, never the exit code.
pub struct StagedDiff<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    workdir: &'a Path,
}

impl<'a, R: ProcessRunner + ?Sized> StagedDiff<'a, R> {
    #[must_use]
    pub const fn new(runner: &'a R, workdir: &'a Path) -> Self {
        Self { runner, workdir }
    }

    fn git_diff(&self, args: &[&str], files: &[StagedFile], failure: &str) -> Result<Vec<u8>> {
        // Staged paths are file names, never globs or pathspec magic.
        let invocation = Invocation::new(GIT_PROGRAM)
            .args(["--literal-pathspecs", "diff"])
            .args(args)
            .arg("--")
            .args(files.iter().map(StagedFile::path))
            .current_dir(self.workdir);
        let output = self.runner.run(&invocation)?;

        if !output.success() {
            return Err(FormatGuardError::Git(format!(
                "{failure}:\n{}",
                output.stderr_text()
            )));
        }
        Ok(output.stdout)
    }

    /// Per-file added/removed counts with all whitespace ignored.
    ///
    /// `--name-only` would silently drop `--ignore-all-space`, and
    /// `--exit-code` does not report differences without `--quiet`, so the
    /// counts are parsed instead.
    ///
    /// # Errors
    /// Returns an error if git fails or prints malformed records.
    pub fn numstat_ignoring_whitespace(&self, files: &[StagedFile]) -> Result<Vec<DiffStatLine>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }
        let stdout = self.git_diff(
            &[
                "--cached",
                "--numstat",
                "--ignore-all-space",
                "--no-renames",
                "--no-ext-diff",
                "-z",
            ],
            files,
            "Failed to compare staged changes",
        )?;
        let lines = parse_numstat(&stdout)?;
        debug!(records = lines.len(), "numstat parsed");
        Ok(lines)
    }

    /// Paths among `files` that do not exist in `HEAD`.
    ///
    /// # Errors
    /// Returns an error if git fails.
    pub fn newly_added(&self, files: &[StagedFile]) -> Result<Vec<String>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }
        let stdout = self.git_diff(
            &["--cached", "--name-only", "--no-renames", "-z", "--diff-filter=A"],
            files,
            "Failed to identify newly added files",
        )?;
        Ok(parse_nul_paths(&stdout))
    }

    /// Every path that is added, copied, modified, renamed or retyped in the index.
    ///
    /// # Errors
    /// Returns an error if git fails.
    pub fn staged_files(&self) -> Result<Vec<StagedFile>> {
        let invocation = Invocation::new(GIT_PROGRAM)
            .args([
                "diff",
                "--cached",
                "--name-only",
                "--no-renames",
                "-z",
                "--diff-filter=ACMRT",
            ])
            .current_dir(self.workdir);
        let output = self.runner.run(&invocation)?;
        if !output.success() {
            return Err(FormatGuardError::Git(format!(
                "Failed to list staged files:\n{}",
                output.stderr_text()
            )));
        }
        Ok(parse_nul_paths(&output.stdout)
            .into_iter()
            .map(StagedFile::new)
            .collect())
    }
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
