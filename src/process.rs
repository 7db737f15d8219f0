//! External process invocation.
//!
//! Every git query and fixer run goes through a [`ProcessRunner`] handed to the
//! component that needs it. Arguments are passed as a vector straight to the
//! spawned program; nothing is ever interpolated into a shell command line.

use std::ffi::{OsStr, OsString};
use std::fs::File;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::{FormatGuardError, Result};

/// A fully described external command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub program: OsString,
    pub args: Vec<OsString>,
    pub cwd: Option<PathBuf>,
    /// When set, stdout is written to this file (truncated) instead of captured.
    pub stdout_to: Option<PathBuf>,
}

impl Invocation {
    #[must_use]
    pub fn new(program: impl AsRef<OsStr>) -> Self {
        Self {
            program: program.as_ref().to_os_string(),
            args: Vec::new(),
            cwd: None,
            stdout_to: None,
        }
    }

    #[must_use]
    pub fn arg(mut self, arg: impl AsRef<OsStr>) -> Self {
        self.args.push(arg.as_ref().to_os_string());
        self
    }

    #[must_use]
    pub fn args<I, S>(mut self, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        self.args
            .extend(args.into_iter().map(|a| a.as_ref().to_os_string()));
        self
    }

    #[must_use]
    pub fn current_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.cwd = Some(dir.into());
        self
    }

    #[must_use]
    pub fn stdout_to(mut self, path: impl Into<PathBuf>) -> Self {
        self.stdout_to = Some(path.into());
        self
    }

    /// Program name for diagnostics.
    #[must_use]
    pub fn program_name(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }
}

/// Captured result of a finished process.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProcessOutput {
    pub code: Option<i32>,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ProcessOutput {
    #[must_use]
    pub const fn success(&self) -> bool {
        matches!(self.code, Some(0))
    }

    #[must_use]
    pub fn stderr_text(&self) -> String {
        String::from_utf8_lossy(&self.stderr).trim_end().to_string()
    }

    #[must_use]
    pub fn stdout_text(&self) -> String {
        String::from_utf8_lossy(&self.stdout).trim_end().to_string()
    }

    /// Stderr, or stdout when the tool reported nothing on stderr.
    #[must_use]
    pub fn diagnostic(&self) -> String {
        let stderr = self.stderr_text();
        if stderr.is_empty() {
            self.stdout_text()
        } else {
            stderr
        }
    }
}

/// Runs external commands synchronously.
pub trait ProcessRunner: Sync {
    /// Run the invocation to completion.
    ///
    /// A non-zero exit is NOT an error here; callers decide what the exit code
    /// means for their query.
    ///
    /// # Errors
    /// Returns an error if the process cannot be spawned or its output file
    /// cannot be created.
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput>;
}

/// Runner backed by `std::process::Command`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRunner;

impl ProcessRunner for SystemRunner {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        debug!(program = %invocation.program_name(), args = ?invocation.args, "running");

        let mut command = Command::new(&invocation.program);
        command.args(&invocation.args).stdin(Stdio::null());
        if let Some(cwd) = &invocation.cwd {
            command.current_dir(cwd);
        }
        if let Some(path) = &invocation.stdout_to {
            command.stdout(Stdio::from(File::create(path)?));
        }

        let output = command.output().map_err(|source| FormatGuardError::Spawn {
            program: invocation.program_name(),
            source,
        })?;

        Ok(ProcessOutput {
            code: output.status.code(),
            stdout: output.stdout,
            stderr: output.stderr,
        })
    }
}

#[cfg(test)]
#[path = "process_tests.rs"]
mod tests;
