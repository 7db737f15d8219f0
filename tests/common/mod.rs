#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the format-guard binary.
#[macro_export]
macro_rules! format_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("format-guard"))
    };
}

/// A throwaway git repository with a committed baseline.
pub struct TestFixture {
    pub dir: TempDir,
    /// Stands in for the user config directory so a developer's own
    /// config never leaks into a test.
    pub xdg: TempDir,
}

impl TestFixture {
    pub fn new() -> Self {
        let fixture = Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
            xdg: TempDir::new().expect("Failed to create temp directory"),
        };
        fixture.git(&["init", "--quiet"]);
        fixture.git(&["config", "user.email", "test@test.com"]);
        fixture.git(&["config", "user.name", "Test User"]);
        fixture.git(&["config", "core.autocrlf", "false"]);
        fixture.git(&["config", "commit.gpgsign", "false"]);
        fixture
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The binary, run inside the repository with an isolated environment.
    pub fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = format_guard!();
        cmd.current_dir(self.path())
            .env("XDG_CONFIG_HOME", self.xdg.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn git(&self, args: &[&str]) {
        let output = self.git_output(args, &[]);
        assert!(
            output.status.success(),
            "git {args:?} failed: {}",
            String::from_utf8_lossy(&output.stderr)
        );
    }

    /// Run git with extra environment, returning its raw output.
    pub fn git_output(&self, args: &[&str], envs: &[(&str, &std::ffi::OsStr)]) -> std::process::Output {
        let mut command = Command::new("git");
        command.args(args).current_dir(self.path());
        for (key, value) in envs {
            command.env(key, value);
        }
        command.output().expect("Failed to run git")
    }

    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    pub fn create_config(&self, content: &str) {
        self.create_file(".format-guard.toml", content);
    }

    pub fn stage(&self, relative_path: &str, content: &str) {
        self.create_file(relative_path, content);
        self.git(&["add", relative_path]);
    }

    pub fn commit_files(&self, files: &[(&str, &str)]) {
        for (name, content) in files {
            self.stage(name, content);
        }
        self.git(&["commit", "--quiet", "-m", "Initial commit"]);
    }

    /// Commit a css file, then stage a whitespace-only edit of it.
    pub fn whitespace_only_change(&self) {
        self.commit_files(&[("style.css", "a { color: red; }\n")]);
        self.stage("style.css", "a {\tcolor:red;   }\n");
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

/// Write an executable fake fixer that strips trailing whitespace from
/// its last argument.
#[cfg(unix)]
pub fn trailing_space_fixer(dir: &Path) -> PathBuf {
    use std::os::unix::fs::PermissionsExt;

    let path = dir.join("strip-fixer");
    fs::write(
        &path,
        "#!/bin/sh\nfor f; do :; done\n\
         sed -e 's/[[:space:]]*$//' \"$f\" > \"$f.tmp\" && cat \"$f.tmp\" > \"$f\" && rm \"$f.tmp\"\n",
    )
    .expect("Failed to write fixer");
    let mut perms = fs::metadata(&path).unwrap().permissions();
    perms.set_mode(0o755);
    fs::set_permissions(&path, perms).unwrap();
    path
}

/// Config that runs only the formatting task with the given fixer.
pub fn formatting_config(fixer: &Path) -> String {
    format!(
        "[whitespace]\nenabled = false\n\n[formatting]\nfixer_path = \"{}\"\n",
        fixer.display()
    )
}
