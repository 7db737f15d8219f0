use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum FormatGuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Failed to retrieve the {revision} version of {path}:\n{stderr}")]
    Reconstruction {
        path: String,
        revision: &'static str,
        stderr: String,
    },

    #[error("Failed to run {fixer} on the committed version of {path}:\n{output}")]
    FixerInvocation {
        fixer: &'static str,
        path: String,
        output: String,
    },

    #[error("Failed to check commit message:\n{0}")]
    PatternEngine(#[source] regex::Error),

    #[error("Failed to start {program}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read file: {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),
}

impl FormatGuardError {
    /// Short, stable name of the error kind for machine-readable output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) | Self::TomlParse(_) => "Config",
            Self::Reconstruction { .. } => "Reconstruction",
            Self::FixerInvocation { .. } => "FixerInvocation",
            Self::PatternEngine(_) => "PatternEngine",
            Self::Spawn { .. } => "Spawn",
            Self::FileRead { .. } => "FileRead",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "Serialization",
            Self::Git(_) | Self::GitRepoNotFound(_) => "Git",
        }
    }

    /// Configuration mistakes are reported with a distinct exit code.
    #[must_use]
    pub const fn is_config_error(&self) -> bool {
        matches!(self, Self::Config(_) | Self::TomlParse(_))
    }
}

pub type Result<T> = std::result::Result<T, FormatGuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
