//! Flat edit sets produced by a single sequence comparison.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One edit instruction.
///
/// Insert positions index the new sequence; delete and reload positions
/// index the old sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", content = "index", rename_all = "lowercase")]
pub enum EditStep {
    /// Element at this new-sequence position was added.
    Insert(usize),
    /// Element at this old-sequence position was removed.
    Delete(usize),
    /// Element at this old-sequence position kept its identity but changed content.
    Reload(usize),
}

impl EditStep {
    /// Position referenced by this step.
    #[must_use]
    pub const fn index(&self) -> usize {
        match self {
            Self::Insert(i) | Self::Delete(i) | Self::Reload(i) => *i,
        }
    }
}

impl fmt::Display for EditStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Insert(i) => write!(f, "+{i}"),
            Self::Delete(i) => write!(f, "-{i}"),
            Self::Reload(i) => write!(f, "~{i}"),
        }
    }
}

/// Insertions, deletions and reloads transforming one sequence into another.
///
/// Each list is ascending. Sets returned by [`diff`](super::diff) are never
/// mutated afterwards; [`with_step`](Self::with_step) builds a new value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EditSet {
    /// Positions in the new sequence that were inserted.
    pub insertions: Vec<usize>,
    /// Positions in the old sequence that were deleted.
    pub deletions: Vec<usize>,
    /// Positions in the old sequence whose content changed.
    pub reloads: Vec<usize>,
}

impl EditSet {
    #[must_use]
    pub const fn new(insertions: Vec<usize>, deletions: Vec<usize>, reloads: Vec<usize>) -> Self {
        Self {
            insertions,
            deletions,
            reloads,
        }
    }

    /// True iff any of the three lists is non-empty.
    #[must_use]
    pub fn has_changes(&self) -> bool {
        !(self.insertions.is_empty() && self.deletions.is_empty() && self.reloads.is_empty())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_changes()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.insertions.len() + self.deletions.len() + self.reloads.len()
    }

    /// Return a copy of this set with `step` appended to its category.
    #[must_use]
    pub fn with_step(&self, step: EditStep) -> Self {
        let mut update = self.clone();
        update.push_step(step);
        update
    }

    /// Append `step` to its category in place.
    pub fn push_step(&mut self, step: EditStep) {
        match step {
            EditStep::Insert(i) => self.insertions.push(i),
            EditStep::Delete(i) => self.deletions.push(i),
            EditStep::Reload(i) => self.reloads.push(i),
        }
    }

    /// All steps in replay order: deletions, then reloads, then insertions.
    ///
    /// Same order [`apply_edit_set`](super::apply_edit_set) follows.
    pub fn steps(&self) -> impl Iterator<Item = EditStep> + '_ {
        self.deletions
            .iter()
            .map(|&i| EditStep::Delete(i))
            .chain(self.reloads.iter().map(|&i| EditStep::Reload(i)))
            .chain(self.insertions.iter().map(|&i| EditStep::Insert(i)))
    }
}

impl FromIterator<EditStep> for EditSet {
    fn from_iter<I: IntoIterator<Item = EditStep>>(iter: I) -> Self {
        let mut update = Self::default();
        for step in iter {
            update.push_step(step);
        }
        update
    }
}

impl fmt::Display for EditSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "insertions: {:?}, deletions: {:?}, reloads: {:?}",
            self.insertions, self.deletions, self.reloads
        )
    }
}
