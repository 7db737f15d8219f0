use crate::analyzer::WhitespaceDeltaAnalyzer;
use crate::config::WhitespaceConfig;
use crate::files::filter_by_extensions;
use crate::policy::{NO_ELIGIBLE_FILES, decide};
use crate::process::ProcessRunner;
use crate::tag::TagMatcher;
use crate::Result;

use super::{TaskContext, TaskKind, TaskReport};

pub(super) fn run<R: ProcessRunner + ?Sized>(
    config: &WhitespaceConfig,
    ctx: &TaskContext<'_, R>,
) -> Result<TaskReport> {
    let kind = TaskKind::Whitespace;
    let eligible = filter_by_extensions(ctx.files, &config.triggered_by);
    if eligible.is_empty() {
        return Ok(TaskReport::skipped(kind, NO_ELIGIBLE_FILES));
    }

    let tag_present = TagMatcher::new(kind.category())?.matches(ctx.message);
    let classifications = WhitespaceDeltaAnalyzer::new(ctx.runner, ctx.workdir).classify(&eligible)?;
    let verdict = decide(kind.category(), tag_present, &classifications);

    Ok(TaskReport::new(kind, verdict, classifications))
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
