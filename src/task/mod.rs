//! The whitespace and formatting checks run for one commit.
//!
//! Each task narrows the staged files to its own extensions, looks for its
//! own tag in the commit message, classifies what is left and turns that
//! into a [`Verdict`].

mod formatting;
mod whitespace;

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::Serialize;

use crate::analyzer::Classifications;
use crate::config::Config;
use crate::files::StagedFile;
use crate::policy::Verdict;
use crate::process::ProcessRunner;
use crate::tag::Category;
use crate::{FormatGuardError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskKind {
    Whitespace,
    Formatting,
}

impl TaskKind {
    pub const ALL: [Self; 2] = [Self::Whitespace, Self::Formatting];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Formatting => "formatting",
        }
    }

    #[must_use]
    pub const fn category(self) -> Category {
        match self {
            Self::Whitespace => Category::Whitespace,
            Self::Formatting => Category::Format,
        }
    }

    fn enabled_in(self, config: &Config) -> bool {
        match self {
            Self::Whitespace => config.whitespace.enabled,
            Self::Formatting => config.formatting.enabled,
        }
    }
}

impl fmt::Display for TaskKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for TaskKind {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "whitespace" => Ok(Self::Whitespace),
            "formatting" | "format" => Ok(Self::Formatting),
            _ => Err(format!("Unknown task: {s}")),
        }
    }
}

/// Inputs shared by every task in a run.
pub struct TaskContext<'a, R: ProcessRunner + ?Sized> {
    pub runner: &'a R,
    pub workdir: &'a Path,
    pub message: &'a str,
    /// Staged files in the order the host supplied them.
    pub files: &'a [StagedFile],
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskReport {
    pub task: TaskKind,
    pub verdict: Verdict,
    #[serde(skip_serializing_if = "Classifications::is_empty")]
    pub classifications: Classifications,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_type: Option<&'static str>,
}

impl TaskReport {
    #[must_use]
    pub const fn new(task: TaskKind, verdict: Verdict, classifications: Classifications) -> Self {
        Self {
            task,
            verdict,
            classifications,
            error_type: None,
        }
    }

    #[must_use]
    pub fn skipped(task: TaskKind, reason: impl Into<String>) -> Self {
        Self::new(task, Verdict::skip(reason), Classifications::default())
    }

    /// A runtime failure becomes a failed verdict carrying the diagnostic.
    #[must_use]
    pub fn from_error(task: TaskKind, error: &FormatGuardError) -> Self {
        Self {
            task,
            verdict: Verdict::fail(error.to_string(), Vec::new()),
            classifications: Classifications::default(),
            error_type: Some(error.error_type()),
        }
    }
}

/// Tasks to run: the one requested, or every task enabled in `config`.
#[must_use]
pub fn selected_tasks(config: &Config, only: Option<TaskKind>) -> Vec<TaskKind> {
    only.map_or_else(
        || {
            TaskKind::ALL
                .into_iter()
                .filter(|kind| kind.enabled_in(config))
                .collect()
        },
        |kind| vec![kind],
    )
}

/// # Errors
/// Returns configuration errors and any error raised while classifying.
pub fn run_task<R: ProcessRunner + ?Sized>(
    kind: TaskKind,
    config: &Config,
    ctx: &TaskContext<'_, R>,
) -> Result<TaskReport> {
    let _span = tracing::info_span!("task", task = kind.name()).entered();
    let report = match kind {
        TaskKind::Whitespace => whitespace::run(&config.whitespace, ctx)?,
        TaskKind::Formatting => formatting::run(&config.formatting, ctx)?,
    };
    tracing::info!(status = report.verdict.status(), "task finished");
    Ok(report)
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
