//! Pipeline orchestration for sequence diffing.
//!
//! Shared parse → diff → report logic used by the CLI command handlers.

mod diff_stage;
mod output;
mod parse;

pub use diff_stage::compute_diff;
pub use output::{should_use_color, write_output, OutputTarget};
pub use parse::{
    parse_elements_str, parse_sections_str, parse_sequences_str, parse_sequences_with_context,
    ParsedSequences,
};

/// Exit codes for CI/CD integration
pub mod exit_codes {
    /// Success - no changes detected (or changes without --fail-on-change)
    pub const SUCCESS: i32 = 0;
    /// Changes were detected and --fail-on-change was set
    pub const CHANGES_DETECTED: i32 = 1;
    /// An error occurred
    pub const ERROR: i32 = 3;
}
