use std::path::PathBuf;

use tempfile::TempDir;

use super::*;

fn write_config(dir: &TempDir, content: &str) -> PathBuf {
    let path = dir.path().join("guard.toml");
    std::fs::write(&path, content).unwrap();
    path
}

#[test]
fn validate_accepts_good_file() {
    let dir = TempDir::new().unwrap();
    let path = write_config(&dir, "[formatting]\nfixer_path = \"php-cs-fixer\"\n");

    let result = run_config_validate_impl(Some(&path), false).unwrap();
    assert_eq!(result.source, Some(path));
}

#[test]
fn validate_rejects_unknown_fixer_option() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        "[formatting.fixer_config.phpcbf]\nconfig_path = \"x\"\n",
    );

    let err = run_config_validate_impl(Some(&path), false).unwrap_err();
    assert!(
        err.to_string()
            .contains("Unrecognized config value \"config_path\" for fixer \"phpcbf\".")
    );
}

#[test]
fn validate_reports_missing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing.toml");

    assert!(run_config_validate_impl(Some(&path), false).is_err());
}

#[test]
fn no_config_uses_defaults() {
    let result = run_config_validate_impl(None, true).unwrap();
    assert!(result.source.is_none());
    assert_eq!(result.config, Config::default());
}

#[test]
fn show_text_lists_fixers_in_priority_order() {
    let dir = TempDir::new().unwrap();
    let path = write_config(
        &dir,
        r#"
[formatting.fixer_config.phpcbf]
standard = "PSR2"

[formatting.fixer_config.php_cs_fixer]
"#,
    );

    let output = run_config_show_impl(Some(&path), OutputFormat::Text, false).unwrap();

    assert!(output.contains("=== Effective Configuration ==="));
    assert!(output.contains(&format!("source: {}", path.display())));
    assert!(output.contains(
        "  fixer 1 = phpcbf (fixer_path = \"phpcbf\", standard = \"PSR2\")"
    ));
    assert!(output.contains(
        "  fixer 2 = php_cs_fixer (fixer_path = \"php-cs-fixer\", \
         config_path = \".php-cs-fixer.dist.php\")"
    ));
}

#[test]
fn show_text_notes_missing_fixers() {
    let output = run_config_show_impl(None, OutputFormat::Text, true).unwrap();

    assert!(output.contains("source: built-in defaults"));
    assert!(output.contains("fixers = none (task is skipped)"));
    assert!(output.contains("triggered_by = [\"php\", \"phtml\"]"));
}

#[test]
fn show_json_is_parseable() {
    let output = run_config_show_impl(None, OutputFormat::Json, true).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

    assert_eq!(parsed["whitespace"]["enabled"], true);
    assert_eq!(parsed["formatting"]["triggered_by"][1], "phtml");
}
