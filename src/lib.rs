//! **Identity-aware diffing of ordered sequences.**
//!
//! `array-updater` computes the minimal set of edits that turns one ordered
//! collection into another, the way a list or table view needs them to
//! animate a data change: which positions of the old collection were
//! deleted, which positions of the new collection were inserted, and which
//! surviving elements kept their identity but changed content and must be
//! reloaded in place.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the [`Updatable`] trait. Elements answer two questions:
//!   "is this the same entity?" (`same_identity`) and "does it look the
//!   same?" (`same_content`). [`Record`] implements it for JSON values keyed
//!   by a field, [`ByValue`] for anything with `PartialEq`.
//! - **[`diff`]**: [`diff`](diff::diff) / [`SequenceComparison`] build a
//!   longest-common-subsequence table keyed on identity and backtrack it into
//!   an [`EditSet`]. [`MultiSectionEditSet`] aggregates per-section results as
//!   `(section, item)` [`CompoundPosition`]s. [`DiffEngine`] wires both up
//!   with logging and optional parallel section diffs.
//! - **[`pipeline`]**, **[`reports`]**, **[`config`]**, **[`cli`]**: JSON
//!   input loading, JSON and summary rendering, YAML configuration, and the
//!   command handlers behind the `array-updater` binary.
//!
//! ## Diffing Two Sequences
//!
//! ```
//! use array_updater::{apply_edit_set, diff, EditSet};
//!
//! let old = ["a", "b", "c", "d"];
//! let new = ["a", "c", "e", "d"];
//!
//! let edits = diff(&old, &new);
//! assert_eq!(edits, EditSet::new(vec![2], vec![1], vec![]));
//!
//! // Replaying the edits on `old` yields `new`.
//! assert_eq!(apply_edit_set(&old, &new, &edits), Some(new.to_vec()));
//! ```
//!
//! ## Identity vs. Content
//!
//! ```
//! use array_updater::{diff, Updatable};
//!
//! #[derive(Clone)]
//! struct Row {
//!     id: u32,
//!     title: &'static str,
//! }
//!
//! impl Updatable for Row {
//!     fn same_identity(&self, other: &Self) -> bool {
//!         self.id == other.id
//!     }
//!     fn same_content(&self, other: &Self) -> bool {
//!         self.title == other.title
//!     }
//! }
//!
//! let old = [Row { id: 1, title: "draft" }, Row { id: 2, title: "done" }];
//! let new = [Row { id: 1, title: "final" }, Row { id: 2, title: "done" }];
//!
//! let edits = diff(&old, &new);
//! assert!(edits.insertions.is_empty() && edits.deletions.is_empty());
//! assert_eq!(edits.reloads, vec![0]);
//! ```
//!
//! ## Sections
//!
//! ```
//! use array_updater::{diff, CompoundPosition, MultiSectionEditSet};
//!
//! let mut aggregate = MultiSectionEditSet::no_update();
//! aggregate.merge(&diff(&[1, 2], &[1, 2, 3]), 0);
//! aggregate.merge(&diff(&[4], &[]), 1);
//!
//! assert_eq!(aggregate.insertions(), &[CompoundPosition::new(0, 2)]);
//! assert_eq!(aggregate.deletions(), &[CompoundPosition::new(1, 0)]);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    clippy::struct_excessive_bools,
    clippy::fn_params_excessive_bools,
    // Variable names like `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod cli;
pub mod config;
pub mod diff;
pub mod error;
pub mod model;
pub mod pipeline;
pub mod reports;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigPreset};
pub use config::{BehaviorConfig, DiffSettings, InputConfig, OutputConfig};
pub use config::{ConfigError, Validatable};
pub use config::{DiffConfig, DiffPaths};
pub use diff::{
    apply_edit_set, compound_positions, diff, to_compound_position, CompoundPosition, DiffEngine,
    EditSet, EditStep, MultiSectionEditSet, SequenceComparison,
};
pub use error::{ErrorContext, InputErrorKind, Result, UpdaterError};
pub use model::{ByValue, Record, Updatable};
pub use pipeline::{parse_sequences_str, ParsedSequences};
pub use reports::{DiffOutcome, ReportFormat, ReportGenerator};
