//! Diff command handler.
//!
//! Implements the `diff` subcommand for comparing two sequence files.

use crate::config::DiffConfig;
use crate::pipeline::{
    compute_diff, exit_codes, parse_sequences_with_context, should_use_color, write_output,
    OutputTarget,
};
use crate::reports::{create_reporter, DiffOutcome, ReportMetadata};
use anyhow::{Context, Result};

/// Run the diff command, returning the desired exit code.
///
/// The caller is responsible for calling `std::process::exit()` with the
/// returned code when it is non-zero.
pub fn run_diff(config: &DiffConfig) -> Result<i32> {
    let app = &config.app;
    let quiet = app.behavior.quiet;

    let old = parse_sequences_with_context(&config.paths.old, &app.input, quiet)
        .context("Failed to load old sequences")?;
    let new = parse_sequences_with_context(&config.paths.new, &app.input, quiet)
        .context("Failed to load new sequences")?;

    let outcome = compute_diff(config, &old, &new)?;
    let exit_code = determine_exit_code(config, &outcome);

    let metadata = ReportMetadata {
        old_path: Some(config.paths.old.display().to_string()),
        new_path: Some(config.paths.new.display().to_string()),
        identity_key: app.input.identity_key.clone(),
    };
    let target = OutputTarget::from_option(app.output.file.clone());
    // Never write escape codes into files.
    let colored = matches!(target, OutputTarget::Stdout) && should_use_color(app.output.no_color);

    let reporter = create_reporter(app.output.format, app.output.pretty, colored);
    let report = reporter
        .generate(&outcome, &metadata)
        .context("Failed to render report")?;
    write_output(&report, &target, quiet)?;

    Ok(exit_code)
}

/// Determine the appropriate exit code based on diff results and config flags.
fn determine_exit_code(config: &DiffConfig, outcome: &DiffOutcome) -> i32 {
    if config.app.behavior.fail_on_change && outcome.has_changes() {
        return exit_codes::CHANGES_DETECTED;
    }
    exit_codes::SUCCESS
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, DiffPaths};
    use crate::diff::EditSet;
    use std::path::PathBuf;

    fn config(fail_on_change: bool) -> DiffConfig {
        DiffConfig {
            paths: DiffPaths {
                old: PathBuf::from("old.json"),
                new: PathBuf::from("new.json"),
            },
            app: AppConfig::builder().fail_on_change(fail_on_change).build(),
        }
    }

    #[test]
    fn test_exit_code_on_change() {
        let changed = DiffOutcome::Flat(EditSet::new(vec![0], vec![], vec![]));
        let unchanged = DiffOutcome::Flat(EditSet::default());

        assert_eq!(determine_exit_code(&config(true), &changed), exit_codes::CHANGES_DETECTED);
        assert_eq!(determine_exit_code(&config(true), &unchanged), exit_codes::SUCCESS);
        assert_eq!(determine_exit_code(&config(false), &changed), exit_codes::SUCCESS);
    }
}
