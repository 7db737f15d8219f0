use std::path::{Component, Path, PathBuf};

use tracing::debug;

use crate::git::GIT_PROGRAM;
use crate::process::{Invocation, ProcessRunner};
use crate::{FormatGuardError, Result};

/// Comment prefix git writes into commit message templates by default.
const DEFAULT_COMMENT_PREFIX: &str = "#";

/// The repository a hook runs against.
///
/// Only discovery goes through gix; every content query shells out to git so
/// the staged index is read exactly the way `git commit` sees it.
#[derive(Debug, Clone)]
pub struct GitRepo {
    workdir: PathBuf,
}

impl GitRepo {
    /// Find the repository containing the given path.
    ///
    /// # Errors
    /// Returns an error if no git repository is found or it is bare.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path)
            .map_err(|e| FormatGuardError::GitRepoNotFound(format!("{}: {e}", path.display())))?;
        let workdir = repo
            .workdir()
            .ok_or_else(|| FormatGuardError::Git("Repository has no working directory".into()))?;
        let workdir = workdir
            .canonicalize()
            .unwrap_or_else(|_| workdir.to_path_buf());
        Ok(Self { workdir })
    }

    /// Use a known working directory without discovery.
    #[must_use]
    pub fn at(workdir: impl Into<PathBuf>) -> Self {
        Self {
            workdir: workdir.into(),
        }
    }

    #[must_use]
    pub fn workdir(&self) -> &Path {
        &self.workdir
    }

    /// The prefix git uses for comment lines in the commit message file.
    ///
    /// Honours `core.commentChar`. `auto`, an unset value, or a failed
    /// lookup fall back to `#`.
    pub fn comment_prefix<R: ProcessRunner + ?Sized>(&self, runner: &R) -> String {
        let invocation = Invocation::new(GIT_PROGRAM)
            .args(["config", "--get", "core.commentChar"])
            .current_dir(&self.workdir);
        match runner.run(&invocation) {
            Ok(output) if output.success() => {
                let value = output.stdout_text();
                let value = value.trim();
                if value.is_empty() || value == "auto" {
                    DEFAULT_COMMENT_PREFIX.to_string()
                } else {
                    value.to_string()
                }
            }
            Ok(_) => DEFAULT_COMMENT_PREFIX.to_string(),
            Err(e) => {
                debug!(error = %e, "core.commentChar lookup failed");
                DEFAULT_COMMENT_PREFIX.to_string()
            }
        }
    }

    /// Express a user-supplied path relative to the repository root, using `/`.
    ///
    /// Relative inputs are taken as already relative to the root, which is
    /// where git runs hooks.
    ///
    /// # Errors
    /// Returns an error for absolute paths outside the repository or paths that
    /// climb above the root.
    pub fn relative_path(&self, path: &Path) -> Result<String> {
        let relative = if path.is_absolute() {
            let absolute = path.canonicalize().unwrap_or_else(|_| path.to_path_buf());
            absolute
                .strip_prefix(&self.workdir)
                .map(Path::to_path_buf)
                .map_err(|_| {
                    FormatGuardError::Git(format!(
                        "{} is outside the repository at {}",
                        path.display(),
                        self.workdir.display()
                    ))
                })?
        } else {
            path.to_path_buf()
        };

        let mut parts = Vec::new();
        for component in relative.components() {
            match component {
                Component::Normal(part) => parts.push(part.to_string_lossy().into_owned()),
                Component::CurDir => {}
                _ => {
                    return Err(FormatGuardError::Git(format!(
                        "{} does not name a file inside the repository",
                        path.display()
                    )));
                }
            }
        }
        Ok(parts.join("/"))
    }
}
