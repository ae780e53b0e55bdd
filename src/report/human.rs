//! Human-readable output formatter.

use std::io::Write;

use super::{ReportFormatter, ScanReport};
use crate::practice::PracticeEvaluation;

/// Formats scan output for terminal display.
pub struct HumanFormatter;

impl HumanFormatter {
    /// Create a new human formatter.
    pub fn new() -> Self {
        Self
    }

    fn verdict_mark(evaluation: PracticeEvaluation) -> &'static str {
        match evaluation {
            PracticeEvaluation::Practicing => "+",
            PracticeEvaluation::NotPracticing => "-",
            PracticeEvaluation::Unknown => "?",
        }
    }
}

impl Default for HumanFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportFormatter for HumanFormatter {
    fn format<W: Write>(&self, report: &ScanReport, writer: &mut W) -> std::io::Result<()> {
        writeln!(
            writer,
            "Scanned {} ({})",
            report.root_path.display(),
            report.language
        )?;
        writeln!(writer)?;

        for outcome in &report.outcomes {
            writeln!(
                writer,
                "  [{}] {:<32} {}",
                Self::verdict_mark(outcome.evaluation),
                outcome.name,
                outcome.evaluation
            )?;
        }

        writeln!(writer)?;
        writeln!(
            writer,
            "{} practicing, {} not practicing, {} unknown, {} skipped",
            report.count(PracticeEvaluation::Practicing),
            report.count(PracticeEvaluation::NotPracticing),
            report.count(PracticeEvaluation::Unknown),
            report.skipped
        )?;
        Ok(())
    }
}
