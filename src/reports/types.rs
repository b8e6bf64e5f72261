//! Report type definitions.

use crate::diff::{EditSet, MultiSectionEditSet};
use clap::ValueEnum;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Output format for reports
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum ReportFormat {
    /// Structured JSON output
    #[default]
    Json,
    /// Brief human-readable summary
    Summary,
}

impl std::fmt::Display for ReportFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Json => write!(f, "json"),
            Self::Summary => write!(f, "summary"),
        }
    }
}

/// The diff outcome a report describes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", content = "edits", rename_all = "lowercase")]
pub enum DiffOutcome {
    /// One flat sequence pair
    Flat(EditSet),
    /// Several sections diffed independently
    Sectioned(MultiSectionEditSet),
}

impl DiffOutcome {
    #[must_use]
    pub fn has_changes(&self) -> bool {
        match self {
            Self::Flat(update) => update.has_changes(),
            Self::Sectioned(update) => update.has_changes(),
        }
    }

    /// Counts of (insertions, deletions, reloads).
    #[must_use]
    pub fn counts(&self) -> (usize, usize, usize) {
        match self {
            Self::Flat(update) => (
                update.insertions.len(),
                update.deletions.len(),
                update.reloads.len(),
            ),
            Self::Sectioned(update) => (
                update.insertions().len(),
                update.deletions().len(),
                update.reloads().len(),
            ),
        }
    }
}

/// Where the compared sequences came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ReportMetadata {
    /// Path to the old sequence file
    pub old_path: Option<String>,
    /// Path to the new sequence file
    pub new_path: Option<String>,
    /// Identity key used to match elements, if any
    pub identity_key: Option<String>,
}
