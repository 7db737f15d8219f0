use std::collections::HashSet;
use std::path::Path;

use rayon::prelude::*;
use tracing::{debug, info};

use crate::fixer::{FixerConfig, FixerInvoker};
use crate::files::StagedFile;
use crate::git::{ContentSnapshotter, Revision, StagedDiff};
use crate::process::ProcessRunner;
use crate::Result;

use super::{Classifications, Evidence, FileClassification};

/// Classifies staged files by re-running fixers over their committed version.
pub struct FormattingDeltaAnalyzer<'a, R: ProcessRunner + ?Sized> {
    diff: StagedDiff<'a, R>,
    snapshotter: ContentSnapshotter<'a, R>,
    invoker: FixerInvoker<'a, R>,
    fixers: &'a [FixerConfig],
}

impl<'a, R: ProcessRunner + ?Sized> FormattingDeltaAnalyzer<'a, R> {
    /// `fixers` are tried in slice order.
    #[must_use]
    pub const fn new(runner: &'a R, workdir: &'a Path, fixers: &'a [FixerConfig]) -> Self {
        Self {
            diff: StagedDiff::new(runner, workdir),
            snapshotter: ContentSnapshotter::new(runner, workdir),
            invoker: FixerInvoker::new(runner, workdir),
            fixers,
        }
    }

    /// Paths among `files` that have no committed version.
    ///
    /// # Errors
    /// Returns an error if the diff query fails.
    pub fn newly_added(&self, files: &[StagedFile]) -> Result<Vec<String>> {
        self.diff.newly_added(files)
    }

    /// Classify every file. New files are functional without running fixers.
    ///
    /// # Errors
    /// Returns the first reconstruction, fixer or diff error; no partial
    /// result is returned.
    pub fn classify(&self, files: &[StagedFile]) -> Result<Classifications> {
        let new_files: HashSet<String> = self.newly_added(files)?.into_iter().collect();
        self.classify_with_new_files(files, &new_files)
    }

    /// Classify with an already known set of new paths.
    ///
    /// # Errors
    /// Same as [`Self::classify`].
    pub fn classify_with_new_files(
        &self,
        files: &[StagedFile],
        new_files: &HashSet<String>,
    ) -> Result<Classifications> {
        // collect() on an indexed parallel iterator keeps input order
        let entries = files
            .par_iter()
            .map(|file| {
                if new_files.contains(file.path()) {
                    debug!(path = file.path(), "new file");
                    Ok(FileClassification::functional(file.path(), Evidence::NewFile))
                } else {
                    self.classify_existing(file.path())
                }
            })
            .collect::<Result<Vec<_>>>()?;

        let classifications = Classifications::new(entries);
        info!(
            functional = classifications.functional_paths().len(),
            cosmetic = classifications.cosmetic_paths().len(),
            "formatting classification done"
        );
        Ok(classifications)
    }

    /// Compare the staged digest with each fixer's output; first match wins.
    ///
    /// # Errors
    /// Returns an error if a version cannot be reconstructed or a fixer fails.
    pub fn classify_existing(&self, path: &str) -> Result<FileClassification> {
        let staged = self.snapshotter.snapshot(path, Revision::StagedIndex)?;

        for fixer in self.fixers {
            let committed = self.snapshotter.materialize(path, Revision::LastCommitted)?;
            self.invoker.apply(fixer, committed.path(), path)?;
            let fixed = committed.digest()?;

            if fixed == staged {
                debug!(path, fixer = fixer.kind().name(), "reproduced by fixer");
                return Ok(FileClassification::cosmetic(
                    path,
                    Evidence::FixerMatch {
                        fixer: fixer.kind(),
                    },
                ));
            }
        }

        Ok(FileClassification::functional(path, Evidence::NoFixerMatch))
    }
}

#[cfg(test)]
#[path = "formatting_tests.rs"]
mod tests;
