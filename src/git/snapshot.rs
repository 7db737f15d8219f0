use std::path::Path;

use tempfile::NamedTempFile;
use tracing::debug;

use crate::digest::ContentDigest;
use crate::process::{Invocation, ProcessRunner};
use crate::{FormatGuardError, Result};

use super::GIT_PROGRAM;

/// Which version of a path to reconstruct.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Revision {
    /// The blob recorded in `HEAD`.
    LastCommitted,
    /// Stage 0 of the index, i.e. what is about to be committed.
    StagedIndex,
}

impl Revision {
    /// Object name understood by `git show`.
    #[must_use]
    pub fn object_name(self, path: &str) -> String {
        match self {
            Self::LastCommitted => format!("HEAD:{path}"),
            Self::StagedIndex => format!(":0:{path}"),
        }
    }

    #[must_use]
    pub const fn describe(self) -> &'static str {
        match self {
            Self::LastCommitted => "last committed",
            Self::StagedIndex => "staged",
        }
    }

    const fn temp_prefix(self) -> &'static str {
        match self {
            Self::LastCommitted => "fixer_",
            Self::StagedIndex => "staged_",
        }
    }
}

/// One materialized file version, deleted when dropped.
#[derive(Debug)]
pub struct Snapshot {
    file: NamedTempFile,
}

impl Snapshot {
    /// Location of the materialized bytes. Valid only while `self` lives.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }

    /// Digest of the file as it is right now.
    ///
    /// # Errors
    /// Returns an error if the file cannot be read.
    pub fn digest(&self) -> Result<ContentDigest> {
        ContentDigest::of_file(self.path())
    }
}

/// Materializes historical and staged file content through `git show`.
pub struct ContentSnapshotter<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    workdir: &'a Path,
}

impl<'a, R: ProcessRunner + ?Sized> ContentSnapshotter<'a, R> {
    #[must_use]
    pub const fn new(runner: &'a R, workdir: &'a Path) -> Self {
        Self { runner, workdir }
    }

    /// Write the given version of `path` to a fresh temp file.
    ///
    /// The temp file keeps the source extension so extension-sensitive fixers
    /// treat it like the original.
    ///
    /// # Errors
    /// Returns `Reconstruction` if git exits non-zero, or an IO error if the
    /// temp file cannot be created.
    pub fn materialize(&self, path: &str, revision: Revision) -> Result<Snapshot> {
        let suffix = Path::new(path)
            .extension()
            .map(|ext| format!(".{}", ext.to_string_lossy()))
            .unwrap_or_default();
        let file = tempfile::Builder::new()
            .prefix(revision.temp_prefix())
            .suffix(&suffix)
            .tempfile()?;

        // git show: the exit code is reliable for "object could not be read".
        let invocation = Invocation::new(GIT_PROGRAM)
            .arg("show")
            .arg(revision.object_name(path))
            .current_dir(self.workdir)
            .stdout_to(file.path());
        let output = self.runner.run(&invocation)?;

        if !output.success() {
            return Err(FormatGuardError::Reconstruction {
                path: path.to_string(),
                revision: revision.describe(),
                stderr: output.stderr_text(),
            });
        }

        debug!(path, revision = revision.describe(), temp = %file.path().display(), "materialized");
        Ok(Snapshot { file })
    }

    /// Digest of the given version of `path`. The temp file is gone on return.
    ///
    /// # Errors
    /// Same as [`Self::materialize`], plus read errors while hashing.
    pub fn snapshot(&self, path: &str, revision: Revision) -> Result<ContentDigest> {
        self.materialize(path, revision)?.digest()
    }
}

#[cfg(test)]
#[path = "snapshot_tests.rs"]
mod tests;
