//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::defaults::{ConfigPreset, DEFAULT_LARGE_INPUT_WARNING_CELLS};
use super::types::AppConfig;
use crate::reports::ReportFormat;
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".array-updater.yaml",
    ".array-updater.yml",
    "array-updater.yaml",
    "array-updater.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. User config directory (~/.config/array-updater/)
/// 4. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    if let Ok(cwd) = std::env::current_dir() {
        if let Some(path) = find_config_in_dir(&cwd) {
            return Some(path);
        }
    }

    if let Some(config_dir) = dirs::config_dir() {
        if let Some(path) = find_config_in_dir(&config_dir.join("array-updater")) {
            return Some(path);
        }
    }

    dirs::home_dir().and_then(|home| find_config_in_dir(&home))
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => {
                tracing::debug!("Loaded config from {}", path.display());
                (config, Some(path))
            }
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Merge another config into this one, with `other` taking precedence.
    ///
    /// Only values in `other` that differ from the defaults override, so a
    /// CLI-built config can be layered over a file config.
    pub fn merge(&mut self, other: &Self) {
        // Diff settings
        if other.diff.large_input_warning_cells != DEFAULT_LARGE_INPUT_WARNING_CELLS {
            self.diff.large_input_warning_cells = other.diff.large_input_warning_cells;
        }
        if other.diff.parallel_sections {
            self.diff.parallel_sections = true;
        }

        // Input config
        if other.input.identity_key.is_some() {
            self.input.identity_key.clone_from(&other.input.identity_key);
        }
        if other.input.sectioned {
            self.input.sectioned = true;
        }

        // Output config - only override if explicitly set
        if other.output.format != ReportFormat::default() {
            self.output.format = other.output.format;
        }
        if other.output.file.is_some() {
            self.output.file.clone_from(&other.output.file);
        }
        if !other.output.pretty {
            self.output.pretty = false;
        }
        if other.output.no_color {
            self.output.no_color = true;
        }

        // Behavior config (booleans - if set to true, override)
        if other.behavior.fail_on_change {
            self.behavior.fail_on_change = true;
        }
        if other.behavior.quiet {
            self.behavior.quiet = true;
        }
    }

    /// Load from file and merge with CLI overrides.
    #[must_use]
    pub fn from_file_with_overrides(
        config_path: Option<&Path>,
        cli_overrides: &Self,
    ) -> (Self, Option<PathBuf>) {
        let (mut config, loaded_from) = load_or_default(config_path);
        config.merge(cli_overrides);
        (config, loaded_from)
    }

    /// Build the effective config from every layer, lowest precedence first:
    /// preset (or defaults), config file, CLI settings, explicit overrides.
    #[must_use]
    pub fn resolve(
        preset: Option<ConfigPreset>,
        config_path: Option<&Path>,
        cli: &Self,
        overrides: &ConfigOverrides,
    ) -> (Self, Option<PathBuf>) {
        let mut config = preset.map_or_else(Self::default, Self::from_preset);
        let (file_config, loaded_from) = load_or_default(config_path);
        config.merge(&file_config);
        config.merge(cli);
        overrides.apply(&mut config);
        (config, loaded_from)
    }
}

/// Settings given explicitly on the command line.
///
/// [`AppConfig::merge`] only carries values that differ from the defaults,
/// so it cannot switch a file's `sectioned: true` back off or force the
/// default output format. Every `Some` here wins unconditionally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConfigOverrides {
    pub format: Option<ReportFormat>,
    pub sectioned: Option<bool>,
    pub parallel_sections: Option<bool>,
    pub pretty: Option<bool>,
}

impl ConfigOverrides {
    /// Write every explicit setting into `config`.
    pub fn apply(&self, config: &mut AppConfig) {
        if let Some(format) = self.format {
            config.output.format = format;
        }
        if let Some(sectioned) = self.sectioned {
            config.input.sectioned = sectioned;
        }
        if let Some(parallel) = self.parallel_sections {
            config.diff.parallel_sections = parallel;
        }
        if let Some(pretty) = self.pretty {
            config.output.pretty = pretty;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example config file content.
#[must_use]
pub fn generate_example_config() -> String {
    let example = AppConfig::default();
    format!(
        r"# array-updater configuration
# Place this file at .array-updater.yaml in your project root or ~/.config/array-updater/

{}
",
        serde_yaml::to_string(&example).unwrap_or_default()
    )
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    #[test]
    fn test_find_config_in_dir() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".array-updater.yaml");
        std::fs::write(&config_path, "input:\n  identity_key: id\n").unwrap();

        let found = find_config_in_dir(tmp.path());
        assert_eq!(found, Some(config_path));
    }

    #[test]
    fn test_find_config_in_dir_not_found() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_config_in_dir(tmp.path()), None);
    }

    #[test]
    fn test_load_config_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("config.yaml");

        let yaml = r#"
diff:
  large_input_warning_cells: 1000
  parallel_sections: true
input:
  identity_key: id
  sectioned: true
output:
  format: summary
behavior:
  fail_on_change: true
"#;
        std::fs::write(&config_path, yaml).unwrap();

        let config = load_config_file(&config_path).unwrap();
        assert_eq!(config.diff.large_input_warning_cells, 1000);
        assert!(config.diff.parallel_sections);
        assert_eq!(config.input.identity_key.as_deref(), Some("id"));
        assert!(config.input.sectioned);
        assert_eq!(config.output.format, ReportFormat::Summary);
        assert!(config.behavior.fail_on_change);
    }

    #[test]
    fn test_load_config_file_not_found() {
        let result = load_config_file(Path::new("/nonexistent/config.yaml"));
        assert!(matches!(result, Err(ConfigFileError::NotFound(_))));
    }

    #[test]
    fn test_load_config_file_invalid_yaml() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("broken.yaml");
        std::fs::write(&config_path, "diff: [unterminated").unwrap();

        let result = load_config_file(&config_path);
        assert!(matches!(result, Err(ConfigFileError::Parse(_))));
    }

    #[test]
    fn test_config_merge() {
        let mut base = AppConfig::builder()
            .identity_key(Some("uuid".to_string()))
            .output_format(ReportFormat::Summary)
            .build();
        let override_config = AppConfig::builder()
            .identity_key(Some("id".to_string()))
            .pretty(false)
            .fail_on_change(true)
            .build();

        base.merge(&override_config);

        assert_eq!(base.input.identity_key.as_deref(), Some("id"));
        assert_eq!(base.output.format, ReportFormat::Summary);
        assert!(!base.output.pretty);
        assert!(base.behavior.fail_on_change);
    }

    #[test]
    fn test_overrides_beat_file_values() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join(".array-updater.yaml");
        std::fs::write(
            &config_path,
            "diff:\n  parallel_sections: true\ninput:\n  sectioned: true\noutput:\n  format: summary\n",
        )
        .unwrap();

        let (plain, _) =
            AppConfig::from_file_with_overrides(Some(&config_path), &AppConfig::default());
        assert!(plain.input.sectioned);
        assert_eq!(plain.output.format, ReportFormat::Summary);

        let overrides = ConfigOverrides {
            format: Some(ReportFormat::Json),
            sectioned: Some(false),
            parallel_sections: Some(false),
            pretty: None,
        };
        let (config, loaded_from) =
            AppConfig::resolve(None, Some(&config_path), &AppConfig::default(), &overrides);
        assert_eq!(loaded_from, Some(config_path));
        assert!(!config.input.sectioned);
        assert!(!config.diff.parallel_sections);
        assert_eq!(config.output.format, ReportFormat::Json);
        assert!(config.output.pretty);
    }

    #[test]
    fn test_resolve_layers_preset_under_file() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("array-updater.yaml");
        std::fs::write(&config_path, "input:\n  identity_key: id\n").unwrap();

        let (config, _) = AppConfig::resolve(
            Some(ConfigPreset::Ci),
            Some(&config_path),
            &AppConfig::default(),
            &ConfigOverrides::default(),
        );
        assert_eq!(config.input.identity_key.as_deref(), Some("id"));
        assert!(config.behavior.fail_on_change);
        assert!(config.behavior.quiet);
        assert!(!config.output.pretty);

        // An explicit --pretty still beats the preset's compact output.
        let overrides = ConfigOverrides {
            pretty: Some(true),
            ..ConfigOverrides::default()
        };
        let (config, _) = AppConfig::resolve(
            Some(ConfigPreset::Ci),
            Some(&config_path),
            &AppConfig::default(),
            &overrides,
        );
        assert!(config.output.pretty);
    }

    #[test]
    fn test_generate_example_config() {
        let example = generate_example_config();
        assert!(example.contains("input:"));
        assert!(example.contains("large_input_warning_cells"));
        let parsed: AppConfig = serde_yaml::from_str(&example).unwrap();
        assert_eq!(parsed, AppConfig::default());
    }

    #[test]
    fn test_discover_explicit_path() {
        let tmp = TempDir::new().unwrap();
        let config_path = tmp.path().join("custom-config.yaml");
        let mut file = std::fs::File::create(&config_path).unwrap();
        writeln!(file, "input:\n  sectioned: true").unwrap();

        let discovered = discover_config_file(Some(&config_path));
        assert_eq!(discovered, Some(config_path));
    }
}
