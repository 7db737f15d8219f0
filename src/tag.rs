//! Commit message tag matching.
//!
//! A tag is an issue identifier followed by a bracketed category label, for
//! example `PROJ-12 [Format]`. The label is matched case-insensitively and the
//! tag may appear anywhere in the message.

use regex::{Regex, RegexBuilder};
use serde::Serialize;

use crate::{FormatGuardError, Result};

/// Category of cosmetic change a commit can be marked with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Whitespace,
    Format,
}

impl Category {
    /// Label expected between the brackets.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Whitespace => "Whitespace",
            Self::Format => "Format",
        }
    }

    /// Tag text shown to the author when asking them to add it.
    #[must_use]
    pub const fn display_tag(self) -> &'static str {
        match self {
            Self::Whitespace => "[Whitespace]",
            Self::Format => "[Format]",
        }
    }

    /// Noun used in verdict messages ("whitespace-only", "non-formatting").
    #[must_use]
    pub const fn noun(self) -> &'static str {
        match self {
            Self::Whitespace => "whitespace",
            Self::Format => "formatting",
        }
    }
}

/// Matches one category tag against commit messages.
#[derive(Debug, Clone)]
pub struct TagMatcher {
    category: Category,
    pattern: Regex,
}

impl TagMatcher {
    /// Build the matcher for a category.
    ///
    /// # Errors
    /// Returns `PatternEngine` if the pattern cannot be compiled.
    pub fn new(category: Category) -> Result<Self> {
        let source = format!(r"[A-Z0-9-]+\s+\[{}\]", regex::escape(category.label()));
        let pattern = RegexBuilder::new(&source)
            .case_insensitive(true)
            .build()
            .map_err(FormatGuardError::PatternEngine)?;
        Ok(Self { category, pattern })
    }

    #[must_use]
    pub const fn category(&self) -> Category {
        self.category
    }

    /// Whether the message carries this category's tag anywhere.
    #[must_use]
    pub fn matches(&self, commit_message: &str) -> bool {
        self.pattern.is_match(commit_message)
    }
}

#[cfg(test)]
#[path = "tag_tests.rs"]
mod tests;
