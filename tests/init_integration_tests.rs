//! Integration tests for the `init` command.

mod common;

use common::TestFixture;
use predicates::prelude::*;

#[test]
fn init_creates_default_config_file() {
    let fixture = TestFixture::new();

    fixture
        .cmd()
        .args(["init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created configuration file"));

    let content = std::fs::read_to_string(fixture.path().join(".format-guard.toml")).unwrap();
    assert!(content.contains("[whitespace]"));
    assert!(content.contains("[formatting.fixer_config.php_cs_fixer]"));
}

#[test]
fn init_creates_config_at_custom_path() {
    let fixture = TestFixture::new();
    let custom_path = fixture.path().join("ci").join("guard.toml");
    std::fs::create_dir_all(custom_path.parent().unwrap()).unwrap();

    fixture
        .cmd()
        .args(["init", "--output", custom_path.to_str().unwrap()])
        .assert()
        .success();

    assert!(custom_path.exists());
}

#[test]
fn init_fails_if_config_exists() {
    let fixture = TestFixture::new();
    fixture.create_config("# existing config\n");

    fixture
        .cmd()
        .args(["init"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));
}

#[test]
fn generated_config_validates() {
    let fixture = TestFixture::new();
    fixture.cmd().args(["init"]).assert().success();

    fixture
        .cmd()
        .args(["config", "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"));
}
