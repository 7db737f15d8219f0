use std::path::Path;

use tracing::debug;

use crate::process::ProcessRunner;
use crate::{FormatGuardError, Result};

use super::FixerConfig;

/// Runs a fixer over a materialized file.
pub struct FixerInvoker<'a, R: ProcessRunner + ?Sized> {
    runner: &'a R,
    workdir: &'a Path,
}

impl<'a, R: ProcessRunner + ?Sized> FixerInvoker<'a, R> {
    /// Fixers run from the repository root so relative `config_path` values
    /// resolve the same way they do for developers.
    #[must_use]
    pub const fn new(runner: &'a R, workdir: &'a Path) -> Self {
        Self { runner, workdir }
    }

    /// Rewrite `target` in place. `source_path` only labels diagnostics.
    ///
    /// # Errors
    /// Returns `FixerInvocation` with the tool's output when it exits non-zero.
    pub fn apply(&self, fixer: &FixerConfig, target: &Path, source_path: &str) -> Result<()> {
        let invocation = fixer.invocation(target).current_dir(self.workdir);
        let output = self.runner.run(&invocation)?;

        // fixers: only exit code 0 counts as success
        if !output.success() {
            return Err(FormatGuardError::FixerInvocation {
                fixer: fixer.kind().name(),
                path: source_path.to_string(),
                output: output.diagnostic(),
            });
        }

        debug!(fixer = fixer.kind().name(), path = source_path, "fixer applied");
        Ok(())
    }
}
