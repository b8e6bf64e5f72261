//! array-updater: identity-aware diff of ordered sequences
//!
//! Computes the insertions, deletions, and reloads that turn one JSON array
//! (or array of sections) into another.

#![allow(clippy::struct_excessive_bools, clippy::needless_pass_by_value)]

use anyhow::{Context, Result};
use array_updater::{
    cli,
    config::{
        file::CONFIG_FILE_NAMES, AppConfig, ConfigOverrides, ConfigPreset, DiffConfig, DiffPaths,
        Validatable,
    },
    pipeline::exit_codes,
    reports::ReportFormat,
};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "array-updater")]
#[command(version)]
#[command(about = "Identity-aware diff of ordered sequences", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  No changes detected (or changes without --fail-on-change)
    1  Changes detected with --fail-on-change
    3  Error occurred

EXAMPLES:
    # Diff two arrays of records keyed by their \"id\" field
    array-updater diff old.json new.json --key id

    # Diff arrays of sections and print a readable summary
    array-updater diff old.json new.json --sectioned -o summary

    # CI check
    array-updater diff old.json new.json --key id --fail-on-change --quiet")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for the `diff` subcommand
#[derive(Parser)]
struct DiffArgs {
    /// Path to the old JSON document
    old: PathBuf,

    /// Path to the new JSON document
    new: PathBuf,

    /// Top-level field that identifies an element (whole value when unset)
    #[arg(short, long)]
    key: Option<String>,

    /// Start from a named preset (default, ci, strict) before applying the config file
    #[arg(long, value_parser = parse_preset)]
    preset: Option<ConfigPreset>,

    /// Inputs are arrays of sections, each an array of elements
    #[arg(long, overrides_with = "no_sectioned")]
    sectioned: bool,

    /// Inputs are flat arrays, even if the config file says otherwise
    #[arg(long)]
    no_sectioned: bool,

    /// Output format [default: json]
    #[arg(short, long)]
    output: Option<ReportFormat>,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Pretty-print JSON output
    #[arg(long, overrides_with = "compact")]
    pretty: bool,

    /// Single-line JSON output
    #[arg(long)]
    compact: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long)]
    no_color: bool,

    /// Diff sections on the thread pool
    #[arg(long, overrides_with = "no_parallel")]
    parallel: bool,

    /// Diff sections one after another
    #[arg(long)]
    no_parallel: bool,

    /// Exit with code 1 if any changes detected
    #[arg(long)]
    fail_on_change: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two sequence files
    Diff(DiffArgs),

    /// Print the JSON schema of the configuration file
    ConfigSchema {
        /// Write the schema to a file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Inspect or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .array-updater.yaml in the current directory
    Init,
}

fn main() {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .init();

    match run(cli) {
        Ok(exit_code) => {
            if exit_code != exit_codes::SUCCESS {
                std::process::exit(exit_code);
            }
        }
        Err(err) => {
            eprintln!("Error: {err:#}");
            std::process::exit(exit_codes::ERROR);
        }
    }
}

/// Dispatch to command handlers
fn run(cli: Cli) -> Result<i32> {
    match cli.command {
        Commands::Diff(args) => {
            let cli_config = AppConfig::builder()
                .identity_key(args.key)
                .output_file(args.output_file)
                .no_color(args.no_color)
                .fail_on_change(args.fail_on_change)
                .quiet(args.quiet)
                .build();
            let overrides = ConfigOverrides {
                format: args.output,
                sectioned: flag_pair(args.sectioned, args.no_sectioned),
                parallel_sections: flag_pair(args.parallel, args.no_parallel),
                pretty: flag_pair(args.pretty, args.compact),
            };

            let (app, loaded_from) = AppConfig::resolve(
                args.preset,
                cli.config.as_deref(),
                &cli_config,
                &overrides,
            );
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }

            let errors = app.validate();
            if !errors.is_empty() {
                let messages: Vec<String> = errors.iter().map(ToString::to_string).collect();
                anyhow::bail!("invalid configuration: {}", messages.join("; "));
            }

            let config = DiffConfig {
                paths: DiffPaths {
                    old: args.old,
                    new: args.new,
                },
                app,
            };
            cli::run_diff(&config)
        }

        Commands::ConfigSchema { output } => {
            let schema = array_updater::config::generate_json_schema();
            match output {
                Some(path) => {
                    std::fs::write(&path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(exit_codes::SUCCESS)
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) =
                    array_updater::config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    dirs::config_dir().map(|p| p.join("array-updater").display().to_string()),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match array_updater::config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(exit_codes::SUCCESS)
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".array-updater.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = array_updater::config::generate_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(exit_codes::SUCCESS)
            }
        },
    }
}

/// Collapse a `--flag` / `--no-flag` pair into an explicit setting, if any.
const fn flag_pair(on: bool, off: bool) -> Option<bool> {
    match (on, off) {
        (true, _) => Some(true),
        (_, true) => Some(false),
        _ => None,
    }
}

/// Parse a preset name, accepting the aliases `ConfigPreset::from_name` knows.
fn parse_preset(name: &str) -> std::result::Result<ConfigPreset, String> {
    ConfigPreset::from_name(name).ok_or_else(|| {
        let known: Vec<&str> = ConfigPreset::all().iter().map(ConfigPreset::name).collect();
        format!("unknown preset '{name}' (expected one of: {})", known.join(", "))
    })
}
