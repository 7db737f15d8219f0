mod formatting;
mod whitespace;

pub use formatting::FormattingDeltaAnalyzer;
pub use whitespace::WhitespaceDeltaAnalyzer;

use serde::Serialize;

use crate::fixer::FixerKind;

/// Outcome for a single staged path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    Functional,
    Cosmetic,
}

/// Why a path was classified the way it was.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Evidence {
    /// Line counts from the whitespace-insensitive diff.
    LineDelta { added: usize, removed: usize },
    /// git could not count lines (binary content).
    BinaryDelta,
    /// The path is absent from `HEAD`.
    NewFile,
    /// Running this fixer over the committed version reproduced the staged bytes.
    FixerMatch { fixer: FixerKind },
    /// No configured fixer reproduced the staged bytes.
    NoFixerMatch,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileClassification {
    pub path: String,
    pub classification: Classification,
    pub evidence: Evidence,
}

impl FileClassification {
    #[must_use]
    pub fn functional(path: impl Into<String>, evidence: Evidence) -> Self {
        Self {
            path: path.into(),
            classification: Classification::Functional,
            evidence,
        }
    }

    #[must_use]
    pub fn cosmetic(path: impl Into<String>, evidence: Evidence) -> Self {
        Self {
            path: path.into(),
            classification: Classification::Cosmetic,
            evidence,
        }
    }

    #[must_use]
    pub const fn is_functional(&self) -> bool {
        matches!(self.classification, Classification::Functional)
    }

    #[must_use]
    pub const fn is_new_file(&self) -> bool {
        matches!(self.evidence, Evidence::NewFile)
    }
}

/// Per-file classifications in the order the files were supplied.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Classifications {
    entries: Vec<FileClassification>,
}

impl Classifications {
    #[must_use]
    pub const fn new(entries: Vec<FileClassification>) -> Self {
        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[FileClassification] {
        &self.entries
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn get(&self, path: &str) -> Option<&FileClassification> {
        self.entries.iter().find(|entry| entry.path == path)
    }

    #[must_use]
    pub fn functional_paths(&self) -> Vec<String> {
        self.paths_where(FileClassification::is_functional)
    }

    #[must_use]
    pub fn cosmetic_paths(&self) -> Vec<String> {
        self.paths_where(|entry| !entry.is_functional())
    }

    #[must_use]
    pub fn new_file_paths(&self) -> Vec<String> {
        self.paths_where(FileClassification::is_new_file)
    }

    fn paths_where(&self, predicate: impl Fn(&FileClassification) -> bool) -> Vec<String> {
        self.entries
            .iter()
            .filter(|entry| predicate(entry))
            .map(|entry| entry.path.clone())
            .collect()
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
