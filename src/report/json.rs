//! JSON output formatter.
//!
//! Machine-readable scan output for tooling integration.

use std::io::Write;

use serde::Serialize;

use super::{ReportFormatter, ScanReport};
use crate::practice::PracticeEvaluation;

/// Formats scan output as JSON.
pub struct JsonFormatter;

#[derive(Serialize)]
struct JsonOutput<'a> {
    #[serde(flatten)]
    report: &'a ScanReport,
    summary: JsonSummary,
}

#[derive(Serialize)]
struct JsonSummary {
    total: usize,
    practicing: usize,
    not_practicing: usize,
    unknown: usize,
}

impl JsonFormatter {
    /// Create a new JSON formatter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for JsonFormatter {
    fn format<W: Write>(&self, report: &ScanReport, writer: &mut W) -> std::io::Result<()> {
        let output = JsonOutput {
            report,
            summary: JsonSummary {
                total: report.outcomes.len(),
                practicing: report.count(PracticeEvaluation::Practicing),
                not_practicing: report.count(PracticeEvaluation::NotPracticing),
                unknown: report.count(PracticeEvaluation::Unknown),
            },
        };
        let json = serde_json::to_string_pretty(&output)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))?;
        writeln!(writer, "{}", json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::practice::{PracticeId, PracticeEvaluation};
    use crate::project::Language;
    use crate::report::PracticeOutcome;
    use std::path::PathBuf;

    #[test]
    fn output_parses_back_with_summary() {
        let report = ScanReport {
            root_path: PathBuf::from("/repo"),
            language: Language::Kotlin,
            outcomes: vec![PracticeOutcome {
                id: PracticeId::new("ci-configured"),
                name: "CI Configured".to_string(),
                evaluation: PracticeEvaluation::Unknown,
            }],
            skipped: 0,
        };

        let mut out = Vec::new();
        JsonFormatter::new().format(&report, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["language"], "Kotlin");
        assert_eq!(value["outcomes"][0]["evaluation"], "unknown");
        assert_eq!(value["summary"]["total"], 1);
        assert_eq!(value["summary"]["unknown"], 1);
    }
}
