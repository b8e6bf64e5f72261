//! Configuration types for array-updater operations.

use super::defaults::DEFAULT_LARGE_INPUT_WARNING_CELLS;
use crate::reports::ReportFormat;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Unified application configuration that can be loaded from CLI args or config files.
///
/// CLI arguments are layered over file settings with [`AppConfig::merge`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Diff engine settings
    pub diff: DiffSettings,
    /// How input files are interpreted
    pub input: InputConfig,
    /// Output configuration (format, file, pretty printing)
    pub output: OutputConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create a new `AppConfig` with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the table size above which a warning is logged.
    pub const fn large_input_warning_cells(mut self, cells: u64) -> Self {
        self.config.diff.large_input_warning_cells = cells;
        self
    }

    /// Diff sections in parallel.
    pub const fn parallel_sections(mut self, parallel: bool) -> Self {
        self.config.diff.parallel_sections = parallel;
        self
    }

    /// Match elements by this top-level field.
    pub fn identity_key(mut self, key: Option<String>) -> Self {
        self.config.input.identity_key = key;
        self
    }

    /// Treat inputs as arrays of sections.
    pub const fn sectioned(mut self, sectioned: bool) -> Self {
        self.config.input.sectioned = sectioned;
        self
    }

    /// Set the output format.
    pub const fn output_format(mut self, format: ReportFormat) -> Self {
        self.config.output.format = format;
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: Option<PathBuf>) -> Self {
        self.config.output.file = file;
        self
    }

    /// Pretty-print JSON output.
    pub const fn pretty(mut self, pretty: bool) -> Self {
        self.config.output.pretty = pretty;
        self
    }

    /// Disable colored output.
    pub const fn no_color(mut self, no_color: bool) -> Self {
        self.config.output.no_color = no_color;
        self
    }

    /// Enable fail-on-change mode.
    pub const fn fail_on_change(mut self, fail: bool) -> Self {
        self.config.behavior.fail_on_change = fail;
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}

// ============================================================================
// Section configurations
// ============================================================================

/// Diff engine settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct DiffSettings {
    /// Log a warning when `(old_len + 1) * (new_len + 1)` exceeds this value
    pub large_input_warning_cells: u64,
    /// Diff independent sections on a thread pool
    pub parallel_sections: bool,
}

impl Default for DiffSettings {
    fn default() -> Self {
        Self {
            large_input_warning_cells: DEFAULT_LARGE_INPUT_WARNING_CELLS,
            parallel_sections: false,
        }
    }
}

/// How input files are interpreted.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct InputConfig {
    /// Top-level field identifying an element across snapshots.
    /// When unset, elements are identified by their full value.
    pub identity_key: Option<String>,
    /// Inputs are arrays of sections (arrays of elements)
    pub sectioned: bool,
}

/// Output-related configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct OutputConfig {
    /// Output format
    pub format: ReportFormat,
    /// Output file path (None for stdout)
    pub file: Option<PathBuf>,
    /// Pretty-print JSON output
    pub pretty: bool,
    /// Disable colored output
    pub no_color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: ReportFormat::Json,
            file: None,
            pretty: true,
            no_color: false,
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Exit with code 1 if any changes are detected
    pub fail_on_change: bool,
    /// Suppress non-essential output
    pub quiet: bool,
}

// ============================================================================
// Command configuration
// ============================================================================

/// Paths for the diff command.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffPaths {
    /// Path to the old sequence file
    pub old: PathBuf,
    /// Path to the new sequence file
    pub new: PathBuf,
}

/// Fully resolved configuration for one `diff` invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DiffConfig {
    pub paths: DiffPaths,
    pub app: AppConfig,
}
