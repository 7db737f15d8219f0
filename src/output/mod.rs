mod json;
mod text;

pub use json::JsonFormatter;
pub use text::{ColorMode, TextFormatter};

use crate::error::Result;
use crate::policy::Verdict;
use crate::task::TaskReport;

/// Renders task reports for the terminal or for tooling.
pub trait OutputFormatter {
    /// # Errors
    /// Returns an error if the formatting fails.
    fn format(&self, reports: &[TaskReport]) -> Result<String>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" => Ok(Self::Text),
            "json" => Ok(Self::Json),
            _ => Err(format!("Unknown output format: {s}")),
        }
    }
}

/// Pass, skip and fail counts across reports.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, serde::Serialize)]
pub struct Tally {
    pub passed: usize,
    pub skipped: usize,
    pub failed: usize,
}

impl Tally {
    #[must_use]
    pub const fn any_failed(&self) -> bool {
        self.failed > 0
    }

    #[must_use]
    pub fn of(reports: &[TaskReport]) -> Self {
        reports.iter().fold(Self::default(), |mut tally, report| {
            match report.verdict {
                Verdict::Pass => tally.passed += 1,
                Verdict::Skip { .. } => tally.skipped += 1,
                Verdict::Fail { .. } => tally.failed += 1,
            }
            tally
        })
    }
}

#[cfg(test)]
#[path = "mod_tests.rs"]
mod tests;
