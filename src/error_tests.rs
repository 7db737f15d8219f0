use std::path::PathBuf;

use super::*;

#[test]
fn error_display_config() {
    let err = FormatGuardError::Config("Invalid fixer name \"black\".".to_string());
    assert_eq!(
        err.to_string(),
        "Configuration error: Invalid fixer name \"black\"."
    );
}

#[test]
fn error_display_reconstruction_includes_stderr() {
    let err = FormatGuardError::Reconstruction {
        path: "src/a.php".to_string(),
        revision: "last committed",
        stderr: "fatal: path 'src/a.php' does not exist in 'HEAD'".to_string(),
    };
    let message = err.to_string();
    assert!(message.contains("last committed version of src/a.php"));
    assert!(message.contains("does not exist in 'HEAD'"));
}

#[test]
fn error_display_fixer_invocation_includes_output() {
    let err = FormatGuardError::FixerInvocation {
        fixer: "phpcbf",
        path: "a.php".to_string(),
        output: "ERROR: the \"PSR99\" coding standard is not installed".to_string(),
    };
    let message = err.to_string();
    assert!(message.starts_with("Failed to run phpcbf"));
    assert!(message.contains("PSR99"));
}

#[test]
fn error_display_file_read() {
    let err = FormatGuardError::FileRead {
        path: PathBuf::from("COMMIT_EDITMSG"),
        source: std::io::Error::new(std::io::ErrorKind::NotFound, "file not found"),
    };
    assert!(err.to_string().contains("COMMIT_EDITMSG"));
}

#[test]
fn error_display_git() {
    let err = FormatGuardError::Git("Failed to compare staged changes".to_string());
    assert_eq!(err.to_string(), "Git error: Failed to compare staged changes");
}

#[test]
fn error_type_returns_correct_type() {
    assert_eq!(
        FormatGuardError::Config("test".to_string()).error_type(),
        "Config"
    );
    assert_eq!(
        FormatGuardError::Reconstruction {
            path: "a".to_string(),
            revision: "staged",
            stderr: String::new(),
        }
        .error_type(),
        "Reconstruction"
    );
    assert_eq!(FormatGuardError::Git("test".to_string()).error_type(), "Git");
    assert_eq!(
        FormatGuardError::GitRepoNotFound("test".to_string()).error_type(),
        "Git"
    );
    assert_eq!(
        FormatGuardError::Io(std::io::Error::other("test")).error_type(),
        "IO"
    );
}

#[test]
fn only_configuration_errors_are_config_errors() {
    assert!(FormatGuardError::Config("x".to_string()).is_config_error());
    assert!(!FormatGuardError::Git("x".to_string()).is_config_error());
    assert!(
        !FormatGuardError::FixerInvocation {
            fixer: "php-cs-fixer",
            path: "a.php".to_string(),
            output: String::new(),
        }
        .is_config_error()
    );
}
