//! Default configurations and presets for array-updater.

use super::types::{AppConfig, BehaviorConfig, DiffSettings, InputConfig, OutputConfig};
use crate::reports::ReportFormat;

// ============================================================================
// Default Values
// ============================================================================

/// Table size above which the engine logs a warning (roughly 2000 x 2000 elements).
pub const DEFAULT_LARGE_INPUT_WARNING_CELLS: u64 = 4_000_000;

// ============================================================================
// Configuration Presets
// ============================================================================

/// Named configuration presets for common use cases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigPreset {
    /// Default settings: pretty JSON, no failure on change
    Default,
    /// CI: compact JSON, quiet, exit 1 when anything changed
    Ci,
    /// Strict: warn early about large inputs, fail on change
    Strict,
}

impl ConfigPreset {
    /// Get the preset name as a string.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Ci => "ci",
            Self::Strict => "strict",
        }
    }

    /// Parse a preset from a string name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "ci" | "ci-cd" | "pipeline" => Some(Self::Ci),
            "strict" => Some(Self::Strict),
            _ => None,
        }
    }

    /// Get a description of this preset.
    #[must_use]
    pub const fn description(&self) -> &'static str {
        match self {
            Self::Default => "Pretty JSON output, never fails on changes",
            Self::Ci => "Compact JSON output for pipelines, exits 1 when sequences differ",
            Self::Strict => "Fails on changes and warns about inputs above 250k table cells",
        }
    }

    /// Get all available presets.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Default, Self::Ci, Self::Strict]
    }
}

impl std::fmt::Display for ConfigPreset {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

impl AppConfig {
    /// Create an `AppConfig` from a named preset.
    #[must_use]
    pub fn from_preset(preset: ConfigPreset) -> Self {
        match preset {
            ConfigPreset::Default => Self::default(),
            ConfigPreset::Ci => Self {
                diff: DiffSettings::default(),
                input: InputConfig::default(),
                output: OutputConfig {
                    format: ReportFormat::Json,
                    pretty: false,
                    no_color: true,
                    ..OutputConfig::default()
                },
                behavior: BehaviorConfig {
                    fail_on_change: true,
                    quiet: true,
                },
            },
            ConfigPreset::Strict => Self {
                diff: DiffSettings {
                    large_input_warning_cells: 250_000,
                    ..DiffSettings::default()
                },
                behavior: BehaviorConfig {
                    fail_on_change: true,
                    quiet: false,
                },
                ..Self::default()
            },
        }
    }
}
