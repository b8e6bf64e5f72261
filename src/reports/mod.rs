//! Report generation for diff results.
//!
//! Two output formats are supported:
//! - JSON: the edit set itself plus counts, for programmatic consumers
//! - Summary: compact shell-friendly output

mod json;
mod summary;
mod types;

pub use json::JsonReporter;
pub use summary::SummaryReporter;
pub use types::{DiffOutcome, ReportFormat, ReportMetadata};

use std::io::Write;
use thiserror::Error;

/// Errors that can occur during report generation
#[derive(Error, Debug)]
pub enum ReportError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("Format error: {0}")]
    FormatError(#[from] std::fmt::Error),
}

/// Trait for report generators
pub trait ReportGenerator {
    /// Render a report for a diff outcome
    fn generate(&self, outcome: &DiffOutcome, metadata: &ReportMetadata)
        -> Result<String, ReportError>;

    /// Write report to a writer
    fn write_report(
        &self,
        outcome: &DiffOutcome,
        metadata: &ReportMetadata,
        writer: &mut dyn Write,
    ) -> Result<(), ReportError> {
        let report = self.generate(outcome, metadata)?;
        writer.write_all(report.as_bytes())?;
        Ok(())
    }

    /// Get the format this generator produces
    fn format(&self) -> ReportFormat;
}

/// Create a report generator for the given format
#[must_use]
pub fn create_reporter(format: ReportFormat, pretty: bool, colored: bool) -> Box<dyn ReportGenerator> {
    match format {
        ReportFormat::Json => Box::new(JsonReporter::new().pretty(pretty)),
        ReportFormat::Summary => {
            let reporter = SummaryReporter::new();
            Box::new(if colored { reporter } else { reporter.no_color() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::EditSet;

    #[test]
    fn test_create_reporter_format() {
        assert_eq!(create_reporter(ReportFormat::Json, true, false).format(), ReportFormat::Json);
        assert_eq!(
            create_reporter(ReportFormat::Summary, false, false).format(),
            ReportFormat::Summary
        );
    }

    #[test]
    fn test_write_report_to_buffer() {
        let outcome = DiffOutcome::Flat(EditSet::new(vec![1], vec![], vec![]));
        let mut buffer = Vec::new();
        create_reporter(ReportFormat::Summary, false, false)
            .write_report(&outcome, &ReportMetadata::default(), &mut buffer)
            .expect("write to vec");
        let text = String::from_utf8(buffer).expect("utf-8");
        assert!(text.contains("insertions"));
    }
}
