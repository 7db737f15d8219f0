//! Fixtures shared by unit tests: throwaway git repositories and fake fixers.

use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::files::StagedFile;
use crate::git::GitRepo;
use crate::process::{Invocation, ProcessOutput, ProcessRunner};
use crate::Result;

pub struct TestRepo {
    pub dir: TempDir,
}

impl TestRepo {
    pub fn new() -> Self {
        let dir = TempDir::new().unwrap();
        let repo = Self { dir };
        repo.git(&["init", "--quiet"]);
        repo.git(&["config", "user.email", "test@test.com"]);
        repo.git(&["config", "user.name", "Test User"]);
        repo.git(&["config", "core.autocrlf", "false"]);
        repo.git(&["config", "commit.gpgsign", "false"]);
        repo
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn repo(&self) -> GitRepo {
        GitRepo::at(self.path())
    }

    pub fn git(&self, args: &[&str]) {
        let output = Command::new("git")
            .args(args)
            .current_dir(self.path())
            .output()
            .expect("Failed to run git");
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    pub fn write(&self, name: &str, content: &str) {
        let path = self.path().join(name);
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(path, content).unwrap();
    }

    pub fn stage(&self, name: &str, content: &str) {
        self.write(name, content);
        self.git(&["add", name]);
    }

    pub fn commit(&self, message: &str) {
        self.git(&["commit", "--quiet", "-m", message]);
    }

    /// Commit `files` as the baseline the staged changes are compared to.
    pub fn commit_files(&self, files: &[(&str, &str)]) {
        for (name, content) in files {
            self.stage(name, content);
        }
        self.commit("Initial commit");
    }
}

/// A runner for code paths that must not start any process.
pub struct NoProcesses;

impl ProcessRunner for NoProcesses {
    fn run(&self, invocation: &Invocation) -> Result<ProcessOutput> {
        panic!("unexpected process: {}", invocation.program_name());
    }
}

pub fn staged(paths: &[&str]) -> Vec<StagedFile> {
    paths.iter().map(|p| StagedFile::new(*p)).collect()
}

/// Write an executable shell script into `dir`.
#[cfg(unix)]
pub fn write_script(dir: &Path, name: &str, body: &str) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join(name);
    std::fs::write(&path, format!("#!/bin/sh\n{body}\n")).unwrap();
    let mut perms = std::fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    std::fs::set_permissions(&path, perms).unwrap();
    path
}

/// A "formatter" that strips trailing whitespace from the last argument.
#[cfg(unix)]
pub fn trailing_space_fixer(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "strip-fixer",
        r#"for f; do :; done
sed -e 's/[[:space:]]*$//' "$f" > "$f.tmp" && cat "$f.tmp" > "$f" && rm "$f.tmp""#,
    )
}

/// A "formatter" that expands tabs into four spaces in the last argument.
#[cfg(unix)]
pub fn tab_expanding_fixer(dir: &Path) -> PathBuf {
    write_script(
        dir,
        "tab-fixer",
        r#"for f; do :; done
sed -e 's/	/    /g' "$f" > "$f.tmp" && cat "$f.tmp" > "$f" && rm "$f.tmp""#,
    )
}

/// A fixer that records its arguments to `args.log` next to itself and succeeds.
#[cfg(unix)]
pub fn recording_fixer(dir: &Path) -> PathBuf {
    let log = dir.join("args.log");
    write_script(
        dir,
        "recording-fixer",
        &format!(r#"for a; do printf '%s\n' "$a" >> "{}"; done"#, log.display()),
    )
}

/// A fixer that always fails with a diagnostic on stderr.
#[cfg(unix)]
pub fn failing_fixer(dir: &Path) -> PathBuf {
    write_script(dir, "broken-fixer", "echo 'fixer exploded' >&2\nexit 2")
}
