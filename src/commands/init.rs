use std::fs;

use crate::cli::InitArgs;
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, FormatGuardError, Result};

#[must_use]
pub fn run_init(args: &InitArgs) -> i32 {
    match run_init_impl(args) {
        Ok(()) => EXIT_SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            EXIT_CONFIG_ERROR
        }
    }
}

/// Writes the commented configuration template.
///
/// # Errors
/// Returns an error if the file already exists (without --force) or cannot be written.
pub fn run_init_impl(args: &InitArgs) -> Result<()> {
    let output_path = &args.output;

    if output_path.exists() && !args.force {
        return Err(FormatGuardError::Config(format!(
            "Configuration file already exists: {}. Use --force to overwrite.",
            output_path.display()
        )));
    }

    fs::write(output_path, generate_config_template())?;

    println!("Created configuration file: {}", output_path.display());
    Ok(())
}

#[must_use]
pub fn generate_config_template() -> String {
    r#"# format-guard configuration file
version = "1"

# Whitespace-only changes. Tag such commits with "<ISSUE-ID> [Whitespace]".
[whitespace]
enabled = true
triggered_by = ["php", "phtml", "xml", "yml", "js", "less", "css"]

# Changes an approved formatter reproduces from the last committed version.
# Tag such commits with "<ISSUE-ID> [Format]".
[formatting]
enabled = true
triggered_by = ["php", "phtml"]

# Either a single php-cs-fixer:
# fixer_path = "php-cs-fixer"
# config_path = ".php-cs-fixer.dist.php"

# Or several fixers, tried in the order they appear here.
# Without any fixer the formatting task is skipped.
[formatting.fixer_config.php_cs_fixer]
fixer_path = "php-cs-fixer"
config_path = ".php-cs-fixer.dist.php"

# [formatting.fixer_config.phpcbf]
# fixer_path = "phpcbf"
# standard = "PSR12"
"#
    .to_string()
}

#[cfg(test)]
#[path = "init_tests.rs"]
mod tests;
