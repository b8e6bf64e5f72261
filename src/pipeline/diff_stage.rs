//! Diff computation stage.
//!
//! Builds the engine from configuration and runs a flat or sectioned diff.

use super::ParsedSequences;
use crate::config::DiffConfig;
use crate::diff::DiffEngine;
use crate::error::{Result, UpdaterError};
use crate::reports::DiffOutcome;

/// Run the diff between two parsed inputs.
///
/// Both inputs must have the same shape; they always do when parsed with the
/// same [`InputConfig`](crate::config::InputConfig).
pub fn compute_diff(
    config: &DiffConfig,
    old: &ParsedSequences,
    new: &ParsedSequences,
) -> Result<DiffOutcome> {
    let quiet = config.app.behavior.quiet;
    let engine = DiffEngine::from_settings(&config.app.diff);

    if !quiet {
        tracing::info!("Computing sequence diff...");
    }

    let outcome = match (old, new) {
        (ParsedSequences::Flat(old), ParsedSequences::Flat(new)) => {
            DiffOutcome::Flat(engine.diff(old, new))
        }
        (ParsedSequences::Sectioned(old), ParsedSequences::Sectioned(new)) => {
            DiffOutcome::Sectioned(engine.diff_sections(old, new))
        }
        _ => {
            return Err(UpdaterError::validation(
                "old and new inputs must both be flat or both be sectioned",
            ))
        }
    };

    if !quiet {
        let (insertions, deletions, reloads) = outcome.counts();
        tracing::info!(
            "Diff complete: {} insertions, {} deletions, {} reloads",
            insertions,
            deletions,
            reloads
        );
    }

    Ok(outcome)
}
