//! Identity-keyed longest-common-subsequence comparison.
//!
//! The table is an LCS length table where two elements "match" when they
//! share an identity, not when they are fully equal. Elements that persist
//! with changed content therefore stay aligned and surface as reloads.
//!
//! Time and memory are both O(n·m). Callers diffing very large sequences
//! are responsible for bounding their input; the engine only logs a warning
//! (see [`DiffEngine`](super::DiffEngine)).

use super::{EditSet, EditStep};
use crate::model::Updatable;

/// LCS table over two sequences, ready to be walked into an [`EditSet`].
#[derive(Debug)]
pub struct SequenceComparison<'a, T> {
    old: &'a [T],
    new: &'a [T],
    /// Row-major `(old.len() + 1) x (new.len() + 1)` table.
    table: Vec<usize>,
}

impl<'a, T: Updatable> SequenceComparison<'a, T> {
    /// Build the comparison table for `old` and `new`.
    #[must_use]
    pub fn new(old: &'a [T], new: &'a [T]) -> Self {
        let (n, m) = (old.len(), new.len());
        let width = m + 1;
        let mut table = vec![0usize; (n + 1) * width];

        for i in 1..=n {
            for j in 1..=m {
                table[i * width + j] = if old[i - 1].same_identity(&new[j - 1]) {
                    table[(i - 1) * width + (j - 1)] + 1
                } else {
                    table[(i - 1) * width + j].max(table[i * width + (j - 1)])
                };
            }
        }

        tracing::debug!(
            old_len = n,
            new_len = m,
            cells = table.len(),
            "built sequence comparison table"
        );

        Self { old, new, table }
    }

    /// Number of elements kept (matched by identity) between the two sequences.
    #[must_use]
    pub fn common_len(&self) -> usize {
        self.cell(self.old.len(), self.new.len())
    }

    #[inline]
    fn cell(&self, i: usize, j: usize) -> usize {
        self.table[i * (self.new.len() + 1) + j]
    }

    /// Walk the table from `(n, m)` back to `(0, 0)` and collect the edits.
    ///
    /// At each cell the first matching rule wins: insert, then delete, then
    /// reload (or unchanged). Preferring insert over delete on ties keeps the
    /// output deterministic.
    #[must_use]
    pub fn edit_set(&self) -> EditSet {
        let (mut i, mut j) = (self.old.len(), self.new.len());
        let mut steps = Vec::with_capacity(i + j);

        while i > 0 || j > 0 {
            let here = self.cell(i, j);
            if j > 0 && here == self.cell(i, j - 1) {
                steps.push(EditStep::Insert(j - 1));
                j -= 1;
            } else if i > 0 && here == self.cell(i - 1, j) {
                steps.push(EditStep::Delete(i - 1));
                i -= 1;
            } else {
                // Strictly greater than both neighbours, so this is an identity match.
                if !self.old[i - 1].same_content(&self.new[j - 1]) {
                    steps.push(EditStep::Reload(i - 1));
                }
                i -= 1;
                j -= 1;
            }
        }

        // Collected from the end of both sequences; flip to ascending order.
        steps.reverse();
        let update: EditSet = steps.into_iter().collect();

        tracing::debug!(
            insertions = update.insertions.len(),
            deletions = update.deletions.len(),
            reloads = update.reloads.len(),
            "sequence comparison complete"
        );

        update
    }
}

/// Compute the edit set transforming `old` into `new`.
///
/// ```
/// use array_updater::{diff, EditSet};
///
/// let update = diff(&["a", "b", "d", "e"], &["b", "e"]);
/// assert_eq!(update, EditSet::new(vec![], vec![0, 2], vec![]));
/// ```
#[must_use]
pub fn diff<T: Updatable>(old: &[T], new: &[T]) -> EditSet {
    SequenceComparison::new(old, new).edit_set()
}
