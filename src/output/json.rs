use serde::Serialize;

use crate::error::Result;
use crate::task::TaskReport;

use super::{OutputFormatter, Tally};

pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    summary: Tally,
    tasks: &'a [TaskReport],
}

impl OutputFormatter for JsonFormatter {
    fn format(&self, reports: &[TaskReport]) -> Result<String> {
        let output = JsonOutput {
            summary: Tally::of(reports),
            tasks: reports,
        };
        Ok(serde_json::to_string_pretty(&output)?)
    }
}

#[cfg(test)]
#[path = "json_tests.rs"]
mod tests;
