//! Reconciles the commit message tag with per-file classifications.

use std::fmt;

use serde::Serialize;

use crate::analyzer::Classifications;
use crate::tag::Category;

/// Skip reason when nothing staged is eligible for a task.
pub const NO_ELIGIBLE_FILES: &str = "no staged files match the configured extensions";

/// Final answer for one task.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    Skip {
        reason: String,
    },
    Fail {
        reason: String,
        offending_paths: Vec<String>,
    },
}

impl Verdict {
    #[must_use]
    pub fn skip(reason: impl Into<String>) -> Self {
        Self::Skip {
            reason: reason.into(),
        }
    }

    #[must_use]
    pub fn fail(reason: impl Into<String>, offending_paths: Vec<String>) -> Self {
        Self::Fail {
            reason: reason.into(),
            offending_paths,
        }
    }

    #[must_use]
    pub const fn is_fail(&self) -> bool {
        matches!(self, Self::Fail { .. })
    }

    #[must_use]
    pub const fn status(&self) -> &'static str {
        match self {
            Self::Pass => "passed",
            Self::Skip { .. } => "skipped",
            Self::Fail { .. } => "failed",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pass => write!(f, "passed"),
            Self::Skip { reason } => write!(f, "skipped: {reason}"),
            Self::Fail {
                reason,
                offending_paths,
            } => {
                write!(f, "{reason}")?;
                for path in offending_paths {
                    write!(f, "\n{path}")?;
                }
                Ok(())
            }
        }
    }
}

/// Failure when a tagged commit adds files that have no previous version.
#[must_use]
pub fn new_files_under_tag(category: Category, new_files: Vec<String>) -> Verdict {
    Verdict::fail(
        format!(
            "The commit is marked as {}-only, but some staged files are new to the repository:",
            category.noun()
        ),
        new_files,
    )
}

/// Apply the decision table.
///
/// | tag | functional | cosmetic | verdict                           |
/// |-----|------------|----------|-----------------------------------|
/// | yes | any        | -        | fail, list functional paths       |
/// | yes | none       | -        | pass                              |
/// | no  | none       | -        | fail, ask for the tag             |
/// | no  | some       | some     | fail, list cosmetic paths         |
/// | no  | some       | none     | pass                              |
///
/// An empty file set is skipped before the table applies. A tagged commit
/// that contains new files fails with the new-file listing.
#[must_use]
pub fn decide(category: Category, tag_present: bool, classifications: &Classifications) -> Verdict {
    if classifications.is_empty() {
        return Verdict::skip(NO_ELIGIBLE_FILES);
    }

    let noun = category.noun();
    let functional = classifications.functional_paths();

    if tag_present {
        let new_files = classifications.new_file_paths();
        if !new_files.is_empty() {
            return new_files_under_tag(category, new_files);
        }
        if !functional.is_empty() {
            return Verdict::fail(
                format!(
                    "Non-{noun} changes detected in commit marked {noun} only. \
                     Please unstage the files with non-{noun} changes:"
                ),
                functional,
            );
        }
        return Verdict::Pass;
    }

    if functional.is_empty() {
        return Verdict::fail(
            format!(
                "The staged changes only differ in {noun}. Please mark the commit with \"{}\" \
                 after the issue number for ease of auditing.",
                category.display_tag()
            ),
            Vec::new(),
        );
    }

    let cosmetic = classifications.cosmetic_paths();
    if !cosmetic.is_empty() {
        return Verdict::fail(
            format!(
                "{}-only changes detected in commit not marked as {noun} only. \
                 Please unstage the files with {noun}-only changes:",
                capitalize(noun)
            ),
            cosmetic,
        );
    }

    Verdict::Pass
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

#[cfg(test)]
#[path = "policy_tests.rs"]
mod tests;
