//! External formatters ("fixers").
//!
//! The set of fixers is closed. Each kind has a fixed option schema, with a
//! default for every key, and a fixed argument template.

mod invoker;

pub use invoker::FixerInvoker;

use std::path::Path;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::process::Invocation;
use crate::{FormatGuardError, Result};

/// Known fixer identifiers as they appear in configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FixerKind {
    PhpCsFixer,
    Phpcbf,
}

impl FixerKind {
    pub const ALL: [Self; 2] = [Self::PhpCsFixer, Self::Phpcbf];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::PhpCsFixer => "php_cs_fixer",
            Self::Phpcbf => "phpcbf",
        }
    }

    /// Option keys with their defaults. Every option is a string.
    #[must_use]
    pub const fn defaults(self) -> &'static [(&'static str, &'static str)] {
        match self {
            Self::PhpCsFixer => &[
                ("fixer_path", "php-cs-fixer"),
                ("config_path", ".php-cs-fixer.dist.php"),
            ],
            Self::Phpcbf => &[("fixer_path", "phpcbf"), ("standard", "PSR12")],
        }
    }
}

impl FromStr for FixerKind {
    type Err = FormatGuardError;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.name() == s)
            .ok_or_else(|| FormatGuardError::Config(format!("Invalid fixer name \"{s}\".")))
    }
}

/// A validated fixer configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "fixer", rename_all = "snake_case")]
pub enum FixerConfig {
    PhpCsFixer {
        fixer_path: String,
        config_path: String,
    },
    Phpcbf {
        fixer_path: String,
        standard: String,
    },
}

impl FixerConfig {
    /// Validate user options for a named fixer and fill in defaults.
    ///
    /// # Errors
    /// Returns a configuration error for an unknown fixer name, an unknown
    /// option key, or an option whose type differs from its default.
    pub fn from_options(name: &str, options: &toml::Table) -> Result<Self> {
        let kind: FixerKind = name.parse()?;
        let defaults = kind.defaults();

        for (key, value) in options {
            if !defaults.iter().any(|(k, _)| k == key) {
                return Err(FormatGuardError::Config(format!(
                    "Unrecognized config value \"{key}\" for fixer \"{name}\"."
                )));
            }
            if !value.is_str() {
                return Err(FormatGuardError::Config(format!(
                    "Invalid type for config value \"{key}\": expected string, received {}.",
                    value.type_str()
                )));
            }
        }

        let get = |key: &str| -> String {
            options
                .get(key)
                .and_then(toml::Value::as_str)
                .or_else(|| defaults.iter().find(|(k, _)| *k == key).map(|(_, v)| *v))
                .unwrap_or_default()
                .to_string()
        };

        Ok(match kind {
            FixerKind::PhpCsFixer => Self::PhpCsFixer {
                fixer_path: get("fixer_path"),
                config_path: get("config_path"),
            },
            FixerKind::Phpcbf => Self::Phpcbf {
                fixer_path: get("fixer_path"),
                standard: get("standard"),
            },
        })
    }

    /// Single php-cs-fixer configured through `fixer_path` / `config_path`.
    #[must_use]
    pub fn single(fixer_path: Option<&str>, config_path: Option<&str>) -> Self {
        let defaults = FixerKind::PhpCsFixer.defaults();
        Self::PhpCsFixer {
            fixer_path: fixer_path.unwrap_or(defaults[0].1).to_string(),
            config_path: config_path.unwrap_or(defaults[1].1).to_string(),
        }
    }

    #[must_use]
    pub const fn kind(&self) -> FixerKind {
        match self {
            Self::PhpCsFixer { .. } => FixerKind::PhpCsFixer,
            Self::Phpcbf { .. } => FixerKind::Phpcbf,
        }
    }

    #[must_use]
    pub fn fixer_path(&self) -> &str {
        match self {
            Self::PhpCsFixer { fixer_path, .. } | Self::Phpcbf { fixer_path, .. } => fixer_path,
        }
    }

    /// Command that rewrites `target` in place.
    #[must_use]
    pub fn invocation(&self, target: &Path) -> Invocation {
        match self {
            Self::PhpCsFixer {
                fixer_path,
                config_path,
            } => Invocation::new(fixer_path)
                .args(["fix", "--quiet", "--config"])
                .arg(config_path)
                .arg(target),
            Self::Phpcbf {
                fixer_path,
                standard,
            } => Invocation::new(fixer_path)
                .arg("-q")
                .arg(format!("--standard={standard}"))
                .arg(target),
        }
    }
}

/// Resolve a `fixer_config` table, keeping its order as the priority order.
///
/// # Errors
/// Returns the first configuration error found.
pub fn resolve_fixer_configs(raw: &IndexMap<String, toml::Table>) -> Result<Vec<FixerConfig>> {
    raw.iter()
        .map(|(name, options)| FixerConfig::from_options(name, options))
        .collect()
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
