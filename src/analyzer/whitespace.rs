use std::collections::HashMap;
use std::path::Path;

use tracing::{debug, info};

use crate::files::StagedFile;
use crate::git::{DiffStatLine, StagedDiff};
use crate::process::ProcessRunner;
use crate::Result;

use super::{Classifications, Evidence, FileClassification};

/// Classifies staged files from one whitespace-insensitive numstat query.
pub struct WhitespaceDeltaAnalyzer<'a, R: ProcessRunner + ?Sized> {
    diff: StagedDiff<'a, R>,
}

impl<'a, R: ProcessRunner + ?Sized> WhitespaceDeltaAnalyzer<'a, R> {
    #[must_use]
    pub const fn new(runner: &'a R, workdir: &'a Path) -> Self {
        Self {
            diff: StagedDiff::new(runner, workdir),
        }
    }

    /// A file is cosmetic iff both counts are zero with whitespace ignored.
    ///
    /// A requested path that git does not report has no staged delta at all
    /// and counts as cosmetic with zero counts.
    ///
    /// # Errors
    /// Returns an error if the diff query fails.
    pub fn classify(&self, files: &[StagedFile]) -> Result<Classifications> {
        let stats = self.diff.numstat_ignoring_whitespace(files)?;
        Ok(classify_from_stats(files, &stats))
    }
}

/// Map numstat records back onto the input order.
#[must_use]
pub fn classify_from_stats(files: &[StagedFile], stats: &[DiffStatLine]) -> Classifications {
    let by_path: HashMap<&str, &DiffStatLine> =
        stats.iter().map(|line| (line.path.as_str(), line)).collect();

    let entries = files
        .iter()
        .map(|file| {
            let Some(line) = by_path.get(file.path()) else {
                debug!(path = file.path(), "no staged delta reported");
                return FileClassification::cosmetic(
                    file.path(),
                    Evidence::LineDelta {
                        added: 0,
                        removed: 0,
                    },
                );
            };

            if line.binary {
                return FileClassification::functional(file.path(), Evidence::BinaryDelta);
            }
            let evidence = Evidence::LineDelta {
                added: line.added,
                removed: line.removed,
            };
            if line.is_unchanged() {
                FileClassification::cosmetic(file.path(), evidence)
            } else {
                FileClassification::functional(file.path(), evidence)
            }
        })
        .collect();

    let classifications = Classifications::new(entries);
    info!(
        functional = classifications.functional_paths().len(),
        cosmetic = classifications.cosmetic_paths().len(),
        "whitespace classification done"
    );
    classifications
}

#[cfg(test)]
#[path = "whitespace_tests.rs"]
mod tests;
