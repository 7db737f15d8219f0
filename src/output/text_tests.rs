use crate::analyzer::Classifications;
use crate::fixer::FixerKind;
use crate::task::TaskKind;

use super::*;

fn failed_formatting() -> TaskReport {
    TaskReport::new(
        TaskKind::Formatting,
        Verdict::fail(
            "Formatting-only changes detected in commit not marked as formatting only. \
             Please unstage the files with formatting-only changes:",
            vec!["b.php".to_string()],
        ),
        Classifications::new(vec![
            FileClassification::functional("a.php", Evidence::NoFixerMatch),
            FileClassification::cosmetic(
                "b.php",
                Evidence::FixerMatch {
                    fixer: FixerKind::PhpCsFixer,
                },
            ),
        ]),
    )
}

#[test]
fn failure_shows_reason_and_offending_paths() {
    let output = TextFormatter::new(ColorMode::Never)
        .format(&[failed_formatting()])
        .unwrap();

    assert!(output.contains("✗ FAILED: formatting"));
    assert!(output.contains("  Formatting-only changes detected"));
    assert!(output.contains("    b.php\n"));
    assert!(!output.contains("a.php"));
    assert!(output.contains("Summary: 0 passed, 1 failed, 0 skipped"));
}

#[test]
fn pass_and_skip_lines() {
    let reports = vec![
        TaskReport::new(TaskKind::Whitespace, Verdict::Pass, Classifications::default()),
        TaskReport::skipped(TaskKind::Formatting, "no fixer is configured"),
    ];
    let output = TextFormatter::new(ColorMode::Never).format(&reports).unwrap();

    assert!(output.contains("✓ PASSED: whitespace"));
    assert!(output.contains("- SKIPPED: formatting (no fixer is configured)"));
    assert!(output.contains("Summary: 1 passed, 0 failed, 1 skipped"));
}

#[test]
fn verbose_lists_evidence_per_file() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&[failed_formatting()])
        .unwrap();

    assert!(output.contains("a.php: functional (no fixer reproduces it)"));
    assert!(output.contains("b.php: cosmetic (reproduced by php_cs_fixer)"));
}

#[test]
fn line_delta_evidence_wording() {
    let report = TaskReport::new(
        TaskKind::Whitespace,
        Verdict::Pass,
        Classifications::new(vec![FileClassification::functional(
            "a.css",
            Evidence::LineDelta {
                added: 3,
                removed: 1,
            },
        )]),
    );
    let output = TextFormatter::with_verbose(ColorMode::Never, 1)
        .format(&[report])
        .unwrap();

    assert!(output.contains("a.css: functional (+3 -1 ignoring whitespace)"));
}

#[test]
fn colors_wrap_status_when_forced() {
    let output = TextFormatter::new(ColorMode::Always)
        .format(&[failed_formatting()])
        .unwrap();

    assert!(output.contains("\x1b[31mFAILED\x1b[0m"));
}

#[test]
fn never_mode_has_no_escape_codes() {
    let output = TextFormatter::with_verbose(ColorMode::Never, 2)
        .format(&[failed_formatting()])
        .unwrap();

    assert!(!output.contains('\x1b'));
}
