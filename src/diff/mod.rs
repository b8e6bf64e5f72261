//! Sequence diff engine.
//!
//! Computes the minimal set of insertions, deletions and reloads that turns
//! an old sequence into a new one, where elements are matched by *identity*
//! rather than by full equality (see [`Updatable`](crate::model::Updatable)).
//!
//! # Architecture
//!
//! - [`SequenceComparison`]: identity-keyed LCS table plus an iterative backtrack
//! - [`EditSet`]: flat insert/delete/reload positions for one sequence pair
//! - [`MultiSectionEditSet`]: per-section edit sets folded into compound
//!   `(section, item)` positions, kept sorted and deduplicated
//! - [`DiffEngine`]: configured entry point for flat and sectioned diffs
//!
//! # Example
//!
//! ```
//! use array_updater::diff::{diff, EditSet, MultiSectionEditSet};
//!
//! let first = diff(&[1, 2, 3], &[1, 3]);
//! let second = diff(&["x"], &["x", "y"]);
//!
//! let mut update = MultiSectionEditSet::no_update();
//! update.merge(&first, 0);
//! update.merge(&second, 1);
//! assert_eq!(update.section(1), EditSet::new(vec![1], vec![], vec![]));
//! ```

mod apply;
mod comparison;
mod edit_set;
mod engine;
mod multi;
mod position;

pub use apply::apply_edit_set;
pub use comparison::{diff, SequenceComparison};
pub use edit_set::{EditSet, EditStep};
pub use engine::DiffEngine;
pub use multi::MultiSectionEditSet;
pub use position::{compound_positions, to_compound_position, CompoundPosition};
