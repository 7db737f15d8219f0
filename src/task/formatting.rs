use std::collections::HashSet;

use tracing::warn;

use crate::analyzer::{Classifications, FormattingDeltaAnalyzer};
use crate::config::{FormattingConfig, resolve_fixers};
use crate::files::filter_by_extensions;
use crate::policy::{NO_ELIGIBLE_FILES, decide, new_files_under_tag};
use crate::process::ProcessRunner;
use crate::tag::TagMatcher;
use crate::Result;

use super::{TaskContext, TaskKind, TaskReport};

pub(super) const NO_FIXERS: &str = "no fixer is configured";

pub(super) fn run<R: ProcessRunner + ?Sized>(
    config: &FormattingConfig,
    ctx: &TaskContext<'_, R>,
) -> Result<TaskReport> {
    let kind = TaskKind::Formatting;
    let eligible = filter_by_extensions(ctx.files, &config.triggered_by);
    if eligible.is_empty() {
        return Ok(TaskReport::skipped(kind, NO_ELIGIBLE_FILES));
    }

    let fixers = resolve_fixers(config)?;
    if fixers.is_empty() {
        warn!("formatting task enabled without any fixer");
        return Ok(TaskReport::skipped(kind, NO_FIXERS));
    }

    let tag_present = TagMatcher::new(kind.category())?.matches(ctx.message);
    let analyzer = FormattingDeltaAnalyzer::new(ctx.runner, ctx.workdir, &fixers);
    let new_files: HashSet<String> = analyzer.newly_added(&eligible)?.into_iter().collect();

    // A tagged commit cannot contain new files; no need to run any fixer.
    if tag_present && !new_files.is_empty() {
        let listed = eligible
            .iter()
            .filter(|file| new_files.contains(file.path()))
            .map(|file| file.path().to_string())
            .collect();
        let verdict = new_files_under_tag(kind.category(), listed);
        return Ok(TaskReport::new(kind, verdict, Classifications::default()));
    }

    let classifications = analyzer.classify_with_new_files(&eligible, &new_files)?;
    let verdict = decide(kind.category(), tag_present, &classifications);

    Ok(TaskReport::new(kind, verdict, classifications))
}

#[cfg(test)]
#[path = "formatting_tests.rs"]
mod tests;
