//! JSON report generator.

use super::{DiffOutcome, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use serde::Serialize;

/// JSON report generator
pub struct JsonReporter {
    /// Pretty print output
    pretty: bool,
}

impl JsonReporter {
    /// Create a new JSON reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { pretty: true }
    }

    /// Set pretty printing
    #[must_use]
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }
}

impl Default for JsonReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for JsonReporter {
    fn generate(
        &self,
        outcome: &DiffOutcome,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let (insertions, deletions, reloads) = outcome.counts();
        let report = JsonDiffReport {
            tool: ToolInfo {
                name: env!("CARGO_PKG_NAME"),
                version: env!("CARGO_PKG_VERSION"),
            },
            metadata,
            has_changes: outcome.has_changes(),
            summary: JsonSummary {
                insertions,
                deletions,
                reloads,
            },
            outcome,
        };

        let rendered = if self.pretty {
            serde_json::to_string_pretty(&report)
        } else {
            serde_json::to_string(&report)
        };
        rendered.map_err(|e| ReportError::SerializationError(e.to_string()))
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Json
    }
}

#[derive(Serialize)]
struct JsonDiffReport<'a> {
    tool: ToolInfo,
    metadata: &'a ReportMetadata,
    has_changes: bool,
    summary: JsonSummary,
    #[serde(flatten)]
    outcome: &'a DiffOutcome,
}

#[derive(Serialize)]
struct ToolInfo {
    name: &'static str,
    version: &'static str,
}

#[derive(Serialize)]
struct JsonSummary {
    insertions: usize,
    deletions: usize,
    reloads: usize,
}
