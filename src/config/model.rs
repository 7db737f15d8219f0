use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Supported config version.
pub const CONFIG_VERSION: &str = "1";

/// Root of `.format-guard.toml`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Config schema version; omitted means current.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,

    #[serde(default)]
    pub whitespace: WhitespaceConfig,

    #[serde(default)]
    pub formatting: FormattingConfig,
}

/// `[whitespace]`: whitespace-only change detection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct WhitespaceConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    /// Extensions that make a staged file eligible.
    #[serde(default = "default_whitespace_extensions")]
    pub triggered_by: Vec<String>,
}

impl Default for WhitespaceConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            triggered_by: default_whitespace_extensions(),
        }
    }
}

/// `[formatting]`: formatter-reproducible change detection.
///
/// Fixers come either from the single-fixer keys (`fixer_path`,
/// `config_path`) or from `fixer_config`, never both.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct FormattingConfig {
    #[serde(default = "default_true")]
    pub enabled: bool,

    #[serde(default = "default_formatting_extensions")]
    pub triggered_by: Vec<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixer_path: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub config_path: Option<String>,

    /// Fixer name to options, tried in document order.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fixer_config: Option<IndexMap<String, toml::Table>>,
}

impl Default for FormattingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            triggered_by: default_formatting_extensions(),
            fixer_path: None,
            config_path: None,
            fixer_config: None,
        }
    }
}

impl FormattingConfig {
    /// Whether the single-fixer keys are in use.
    #[must_use]
    pub const fn uses_single_fixer(&self) -> bool {
        self.fixer_path.is_some() || self.config_path.is_some()
    }
}

const fn default_true() -> bool {
    true
}

fn default_whitespace_extensions() -> Vec<String> {
    ["php", "phtml", "xml", "yml", "js", "less", "css"]
        .into_iter()
        .map(String::from)
        .collect()
}

fn default_formatting_extensions() -> Vec<String> {
    ["php", "phtml"].into_iter().map(String::from).collect()
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
