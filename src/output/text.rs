use std::fmt::Write;

use crate::analyzer::{Classification, Evidence, FileClassification};
use crate::error::Result;
use crate::policy::Verdict;
use crate::task::TaskReport;

use super::{OutputFormatter, Tally};

/// Color output mode for terminal display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ColorMode {
    /// Colors if stdout is a TTY and `NO_COLOR` is not set
    #[default]
    Auto,
    Always,
    Never,
}

mod ansi {
    pub const RED: &str = "\x1b[31m";
    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const DIM: &str = "\x1b[2m";
    pub const RESET: &str = "\x1b[0m";
}

pub struct TextFormatter {
    use_colors: bool,
    verbose: u8,
}

impl TextFormatter {
    #[must_use]
    pub fn new(mode: ColorMode) -> Self {
        Self::with_verbose(mode, 0)
    }

    /// With `verbose > 0` every classified file is listed with its evidence.
    #[must_use]
    pub fn with_verbose(mode: ColorMode, verbose: u8) -> Self {
        Self {
            use_colors: Self::should_use_colors(mode),
            verbose,
        }
    }

    fn should_use_colors(mode: ColorMode) -> bool {
        match mode {
            ColorMode::Always => true,
            ColorMode::Never => false,
            ColorMode::Auto => {
                if std::env::var_os("NO_COLOR").is_some() {
                    return false;
                }
                std::io::IsTerminal::is_terminal(&std::io::stdout())
            }
        }
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_report(&self, report: &TaskReport, out: &mut String) {
        let task = report.task.name();
        match &report.verdict {
            Verdict::Pass => {
                let _ = writeln!(out, "✓ {}: {task}", self.paint("PASSED", ansi::GREEN));
            }
            Verdict::Skip { reason } => {
                let _ = writeln!(
                    out,
                    "- {}: {task} ({reason})",
                    self.paint("SKIPPED", ansi::YELLOW)
                );
            }
            Verdict::Fail {
                reason,
                offending_paths,
            } => {
                let _ = writeln!(out, "✗ {}: {task}", self.paint("FAILED", ansi::RED));
                for line in reason.lines() {
                    let _ = writeln!(out, "  {line}");
                }
                for path in offending_paths {
                    let _ = writeln!(out, "    {path}");
                }
            }
        }

        if self.verbose > 0 {
            for entry in report.classifications.entries() {
                let _ = writeln!(out, "  {}", self.describe(entry));
            }
        }
    }

    fn describe(&self, entry: &FileClassification) -> String {
        let label = match entry.classification {
            Classification::Functional => "functional",
            Classification::Cosmetic => "cosmetic",
        };
        let why = match &entry.evidence {
            Evidence::LineDelta { added, removed } => {
                format!("+{added} -{removed} ignoring whitespace")
            }
            Evidence::BinaryDelta => "binary content".to_string(),
            Evidence::NewFile => "new file".to_string(),
            Evidence::FixerMatch { fixer } => format!("reproduced by {}", fixer.name()),
            Evidence::NoFixerMatch => "no fixer reproduces it".to_string(),
        };
        format!("{}: {label} {}", entry.path, self.paint(&format!("({why})"), ansi::DIM))
    }
}

impl OutputFormatter for TextFormatter {
    fn format(&self, reports: &[TaskReport]) -> Result<String> {
        let mut out = String::new();
        for report in reports {
            self.write_report(report, &mut out);
        }

        let tally = Tally::of(reports);
        let _ = writeln!(
            out,
            "\nSummary: {} passed, {} failed, {} skipped",
            tally.passed, tally.failed, tally.skipped
        );
        Ok(out)
    }
}

#[cfg(test)]
#[path = "text_tests.rs"]
mod tests;
