//! Summary report generator for shell output.
//!
//! Provides a compact, human-readable summary for terminal usage.

use super::{DiffOutcome, ReportError, ReportFormat, ReportGenerator, ReportMetadata};
use std::fmt::{Display, Write as _};

/// Apply ANSI color formatting if colored output is enabled.
fn ansi_color(text: &str, color: &str, colored: bool) -> String {
    if colored {
        match color {
            "red" => format!("\x1b[31m{text}\x1b[0m"),
            "green" => format!("\x1b[32m{text}\x1b[0m"),
            "yellow" => format!("\x1b[33m{text}\x1b[0m"),
            "bold" => format!("\x1b[1m{text}\x1b[0m"),
            "dim" => format!("\x1b[2m{text}\x1b[0m"),
            _ => text.to_string(),
        }
    } else {
        text.to_string()
    }
}

fn join<T: Display>(positions: &[T]) -> String {
    positions
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Summary reporter for shell output
pub struct SummaryReporter {
    /// Use colored output
    colored: bool,
}

impl SummaryReporter {
    /// Create a new summary reporter
    #[must_use]
    pub const fn new() -> Self {
        Self { colored: true }
    }

    /// Disable colored output
    #[must_use]
    pub const fn no_color(mut self) -> Self {
        self.colored = false;
        self
    }

    fn color(&self, text: &str, color: &str) -> String {
        ansi_color(text, color, self.colored)
    }

    fn line(
        &self,
        out: &mut String,
        label: &str,
        color: &str,
        positions: String,
        count: usize,
    ) -> std::fmt::Result {
        if count == 0 {
            writeln!(out, "  {:<11} {}", format!("{label}:"), self.color("0", "dim"))
        } else {
            writeln!(
                out,
                "  {:<11} {} [{}]",
                format!("{label}:"),
                self.color(&count.to_string(), color),
                positions
            )
        }
    }
}

impl Default for SummaryReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportGenerator for SummaryReporter {
    fn generate(
        &self,
        outcome: &DiffOutcome,
        metadata: &ReportMetadata,
    ) -> Result<String, ReportError> {
        let mut out = String::new();

        let old = metadata.old_path.as_deref().unwrap_or("old");
        let new = metadata.new_path.as_deref().unwrap_or("new");
        writeln!(out, "{}", self.color(&format!("Diff: {old} -> {new}"), "bold"))?;
        if let Some(key) = &metadata.identity_key {
            writeln!(out, "  identity key: {key}")?;
        }

        let (insertions, deletions, reloads) = match outcome {
            DiffOutcome::Flat(update) => (
                join(&update.insertions),
                join(&update.deletions),
                join(&update.reloads),
            ),
            DiffOutcome::Sectioned(update) => {
                writeln!(out, "  sections changed: {}", join(&update.sections()))?;
                (
                    join(update.insertions()),
                    join(update.deletions()),
                    join(update.reloads()),
                )
            }
        };
        let (inserted, deleted, reloaded) = outcome.counts();

        self.line(&mut out, "insertions", "green", insertions, inserted)?;
        self.line(&mut out, "deletions", "red", deletions, deleted)?;
        self.line(&mut out, "reloads", "yellow", reloads, reloaded)?;

        if !outcome.has_changes() {
            writeln!(out, "{}", self.color("No changes", "dim"))?;
        }

        Ok(out)
    }

    fn format(&self) -> ReportFormat {
        ReportFormat::Summary
    }
}
