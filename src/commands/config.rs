use std::fmt::Write;
use std::path::Path;

use crate::cli::{Cli, ConfigAction, ConfigArgs};
use crate::config::{Config, LoadResult, resolve_fixers};
use crate::fixer::FixerConfig;
use crate::output::OutputFormat;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::load_config;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Validate { config } => run_config_validate(config.as_deref(), cli),
        ConfigAction::Show { config, format } => run_config_show(config.as_deref(), *format, cli),
    }
}

fn run_config_validate(config_path: Option<&Path>, cli: &Cli) -> i32 {
    match run_config_validate_impl(config_path, cli.no_config) {
        Ok(result) => {
            let source = result.source.as_deref().map_or_else(
                || "built-in defaults".to_string(),
                |path| path.display().to_string(),
            );
            println!("Configuration is valid: {source}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Loads and validates the configuration that `check` would use.
///
/// # Errors
/// Returns an error if the file cannot be read, contains invalid TOML, or
/// fails semantic validation.
pub fn run_config_validate_impl(config_path: Option<&Path>, no_config: bool) -> Result<LoadResult> {
    load_config(config_path, no_config, None)
}

fn run_config_show(config_path: Option<&Path>, format: OutputFormat, cli: &Cli) -> i32 {
    match run_config_show_impl(config_path, format, cli.no_config) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Shows the effective configuration.
///
/// # Errors
/// Returns an error if the configuration cannot be loaded or serialization fails.
pub fn run_config_show_impl(
    config_path: Option<&Path>,
    format: OutputFormat,
    no_config: bool,
) -> Result<String> {
    let result = load_config(config_path, no_config, None)?;

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&result.config)?;
            Ok(format!("{json}\n"))
        }
        OutputFormat::Text => format_config_text(&result),
    }
}

/// Human-readable view with fixers already resolved into priority order.
///
/// # Errors
/// Returns an error if the fixer settings are invalid.
pub fn format_config_text(result: &LoadResult) -> Result<String> {
    let config: &Config = &result.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n");
    let _ = match &result.source {
        Some(path) => writeln!(output, "source: {}\n", path.display()),
        None => writeln!(output, "source: built-in defaults\n"),
    };

    output.push_str("[whitespace]\n");
    let _ = writeln!(output, "  enabled = {}", config.whitespace.enabled);
    let _ = writeln!(output, "  triggered_by = {:?}", config.whitespace.triggered_by);

    output.push_str("\n[formatting]\n");
    let _ = writeln!(output, "  enabled = {}", config.formatting.enabled);
    let _ = writeln!(output, "  triggered_by = {:?}", config.formatting.triggered_by);

    let fixers = resolve_fixers(&config.formatting)?;
    if fixers.is_empty() {
        output.push_str("  fixers = none (task is skipped)\n");
    }
    for (priority, fixer) in fixers.iter().enumerate() {
        let _ = writeln!(output, "  fixer {} = {}", priority + 1, describe_fixer(fixer));
    }

    Ok(output)
}

fn describe_fixer(fixer: &FixerConfig) -> String {
    match fixer {
        FixerConfig::PhpCsFixer {
            fixer_path,
            config_path,
        } => format!("php_cs_fixer (fixer_path = \"{fixer_path}\", config_path = \"{config_path}\")"),
        FixerConfig::Phpcbf {
            fixer_path,
            standard,
        } => format!("phpcbf (fixer_path = \"{fixer_path}\", standard = \"{standard}\")"),
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
