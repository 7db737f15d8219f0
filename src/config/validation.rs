//! Semantic checks that run after the TOML document has parsed.

use crate::config::{Config, FormattingConfig};
use crate::fixer::{FixerConfig, resolve_fixer_configs};
use crate::{FormatGuardError, Result};

/// # Errors
/// Returns a configuration error for an empty `triggered_by`, for mixing
/// the single-fixer keys with `fixer_config`, or for invalid fixer options.
pub fn validate_config(config: &Config) -> Result<()> {
    validate_triggered_by("whitespace", &config.whitespace.triggered_by)?;
    validate_triggered_by("formatting", &config.formatting.triggered_by)?;
    resolve_fixers(&config.formatting)?;
    Ok(())
}

/// Fixers in priority order. An empty list means the formatting task has
/// nothing to compare against and is skipped.
///
/// # Errors
/// Returns a configuration error when both fixer variants are configured or
/// a `fixer_config` entry is invalid.
pub fn resolve_fixers(formatting: &FormattingConfig) -> Result<Vec<FixerConfig>> {
    match (&formatting.fixer_config, formatting.uses_single_fixer()) {
        (Some(_), true) => Err(FormatGuardError::Config(
            "formatting.fixer_path and formatting.config_path cannot be combined with \
             formatting.fixer_config"
                .to_string(),
        )),
        (Some(table), false) => resolve_fixer_configs(table),
        (None, true) => Ok(vec![FixerConfig::single(
            formatting.fixer_path.as_deref(),
            formatting.config_path.as_deref(),
        )]),
        (None, false) => Ok(Vec::new()),
    }
}

fn validate_triggered_by(section: &str, extensions: &[String]) -> Result<()> {
    if extensions.is_empty() {
        return Err(FormatGuardError::Config(format!(
            "{section}.triggered_by must list at least one extension"
        )));
    }
    if let Some(blank) = extensions.iter().find(|ext| ext.trim_start_matches('.').is_empty()) {
        return Err(FormatGuardError::Config(format!(
            "{section}.triggered_by contains an empty extension: \"{blank}\""
        )));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validation_tests.rs"]
mod tests;
