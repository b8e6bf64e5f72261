//! Multi-section edit sets.
//!
//! A sectioned list is diffed one section at a time. [`MultiSectionEditSet`]
//! folds the resulting flat [`EditSet`]s into a single set of compound
//! positions that a consumer can apply in one batch.
//!
//! Every mutation keeps the three lists deduplicated and sorted by
//! `(section, item)`. That makes [`merge`](MultiSectionEditSet::merge)
//! idempotent and order-insensitive.

use super::position::{compound_positions, CompoundPosition};
use super::EditSet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Aggregate of per-section edit sets, addressed by compound position.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "SectionedParts")]
pub struct MultiSectionEditSet {
    insertions: Vec<CompoundPosition>,
    deletions: Vec<CompoundPosition>,
    reloads: Vec<CompoundPosition>,
}

/// Unnormalised wire form; deserialisation re-establishes the sort/dedupe invariant.
#[derive(Deserialize)]
struct SectionedParts {
    #[serde(default)]
    insertions: Vec<CompoundPosition>,
    #[serde(default)]
    deletions: Vec<CompoundPosition>,
    #[serde(default)]
    reloads: Vec<CompoundPosition>,
}

impl From<SectionedParts> for MultiSectionEditSet {
    fn from(parts: SectionedParts) -> Self {
        Self::new(parts.insertions, parts.deletions, parts.reloads)
    }
}

impl MultiSectionEditSet {
    /// Build an aggregate from arbitrary position lists, sorting and deduplicating them.
    #[must_use]
    pub fn new(
        insertions: Vec<CompoundPosition>,
        deletions: Vec<CompoundPosition>,
        reloads: Vec<CompoundPosition>,
    ) -> Self {
        Self {
            insertions: normalized(insertions),
            deletions: normalized(deletions),
            reloads: normalized(reloads),
        }
    }

    /// The empty aggregate.
    #[must_use]
    pub const fn no_update() -> Self {
        Self {
            insertions: Vec::new(),
            deletions: Vec::new(),
            reloads: Vec::new(),
        }
    }

    /// Lift a flat edit set into `group`.
    #[must_use]
    pub fn from_edit_set(update: &EditSet, group: usize) -> Self {
        Self::new(
            compound_positions(&update.insertions, group),
            compound_positions(&update.deletions, group),
            compound_positions(&update.reloads, group),
        )
    }

    /// Union the edits of `update`, lifted into `group`, into this aggregate.
    pub fn merge(&mut self, update: &EditSet, group: usize) {
        tracing::trace!(group, steps = update.total(), "merging edit set into aggregate");
        union_into(&mut self.insertions, compound_positions(&update.insertions, group));
        union_into(&mut self.deletions, compound_positions(&update.deletions, group));
        union_into(&mut self.reloads, compound_positions(&update.reloads, group));
    }

    /// Union another aggregate into this one.
    pub fn merge_all(&mut self, other: &Self) {
        union_into(&mut self.insertions, other.insertions.iter().copied());
        union_into(&mut self.deletions, other.deletions.iter().copied());
        union_into(&mut self.reloads, other.reloads.iter().copied());
    }

    /// The aggregate transforming the new sequences back into the old ones.
    #[must_use]
    pub fn inverse(&self) -> Self {
        Self {
            insertions: self.deletions.clone(),
            deletions: self.insertions.clone(),
            reloads: self.reloads.clone(),
        }
    }

    #[must_use]
    pub fn has_changes(&self) -> bool {
        !(self.insertions.is_empty() && self.deletions.is_empty() && self.reloads.is_empty())
    }

    /// Same as `!has_changes()`.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        !self.has_changes()
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.insertions.len() + self.deletions.len() + self.reloads.len()
    }

    #[must_use]
    pub fn insertions(&self) -> &[CompoundPosition] {
        &self.insertions
    }

    #[must_use]
    pub fn deletions(&self) -> &[CompoundPosition] {
        &self.deletions
    }

    #[must_use]
    pub fn reloads(&self) -> &[CompoundPosition] {
        &self.reloads
    }

    /// Project the edits of one section back to a flat [`EditSet`].
    #[must_use]
    pub fn section(&self, group: usize) -> EditSet {
        let items = |positions: &[CompoundPosition]| -> Vec<usize> {
            positions
                .iter()
                .filter(|p| p.section == group)
                .map(|p| p.item)
                .collect()
        };
        EditSet::new(
            items(&self.insertions),
            items(&self.deletions),
            items(&self.reloads),
        )
    }

    /// Sections that carry at least one edit, ascending.
    #[must_use]
    pub fn sections(&self) -> Vec<usize> {
        self.insertions
            .iter()
            .chain(&self.deletions)
            .chain(&self.reloads)
            .map(|p| p.section)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

fn normalized(mut positions: Vec<CompoundPosition>) -> Vec<CompoundPosition> {
    positions.sort_unstable();
    positions.dedup();
    positions
}

fn union_into(target: &mut Vec<CompoundPosition>, extra: impl IntoIterator<Item = CompoundPosition>) {
    target.extend(extra);
    target.sort_unstable();
    target.dedup();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn at(section: usize, items: &[usize]) -> Vec<CompoundPosition> {
        compound_positions(items, section)
    }

    #[test]
    fn test_no_update_is_empty() {
        assert_eq!(MultiSectionEditSet::default(), MultiSectionEditSet::no_update());
        assert!(!MultiSectionEditSet::no_update().has_changes());
    }

    #[test]
    fn test_merge_dedupes_and_sorts() {
        let mut aggregate = MultiSectionEditSet::no_update();
        aggregate.merge(&EditSet::new(vec![], vec![0, 2], vec![]), 0);
        aggregate.merge(&EditSet::new(vec![0, 4], vec![0, 3], vec![1]), 0);

        let expected = MultiSectionEditSet::from_edit_set(
            &EditSet::new(vec![0, 4], vec![0, 2, 3], vec![1]),
            0,
        );
        assert_eq!(aggregate, expected);
        assert_eq!(aggregate.deletions(), at(0, &[0, 2, 3]).as_slice());
    }

    #[test]
    fn test_merge_across_sections_orders_by_section() {
        let mut aggregate = MultiSectionEditSet::no_update();
        aggregate.merge(&EditSet::new(vec![1], vec![], vec![]), 2);
        aggregate.merge(&EditSet::new(vec![5, 0], vec![], vec![]), 0);
        assert_eq!(
            aggregate.insertions(),
            &[
                CompoundPosition::new(0, 0),
                CompoundPosition::new(0, 5),
                CompoundPosition::new(2, 1),
            ]
        );
        assert_eq!(aggregate.sections(), vec![0, 2]);
    }

    #[test]
    fn test_inverse_swaps_insertions_and_deletions() {
        let aggregate = MultiSectionEditSet::from_edit_set(
            &EditSet::new(vec![0, 4], vec![0, 3], vec![1]),
            0,
        );
        let inverse = aggregate.inverse();
        assert_eq!(inverse.insertions(), aggregate.deletions());
        assert_eq!(inverse.deletions(), aggregate.insertions());
        assert_eq!(inverse.reloads(), aggregate.reloads());
        assert_eq!(inverse.inverse(), aggregate);
    }

    #[test]
    fn test_section_projection() {
        let mut aggregate = MultiSectionEditSet::no_update();
        aggregate.merge(&EditSet::new(vec![1], vec![0], vec![]), 0);
        aggregate.merge(&EditSet::new(vec![], vec![2], vec![3]), 1);
        assert_eq!(aggregate.section(1), EditSet::new(vec![], vec![2], vec![3]));
        assert!(!aggregate.section(7).has_changes());
        assert_eq!(aggregate.total(), 4);
    }

    #[test]
    fn test_merge_all_matches_sequential_merge() {
        let a = EditSet::new(vec![0], vec![1], vec![]);
        let b = EditSet::new(vec![2], vec![], vec![0]);

        let mut sequential = MultiSectionEditSet::no_update();
        sequential.merge(&a, 0);
        sequential.merge(&b, 1);

        let mut combined = MultiSectionEditSet::from_edit_set(&b, 1);
        combined.merge_all(&MultiSectionEditSet::from_edit_set(&a, 0));
        assert_eq!(combined, sequential);
    }

    #[test]
    fn test_deserialize_normalizes() {
        let json = r#"{"insertions":[{"section":1,"item":0},{"section":0,"item":3},{"section":1,"item":0}]}"#;
        let aggregate: MultiSectionEditSet = serde_json::from_str(json).expect("deserialize");
        assert_eq!(
            aggregate.insertions(),
            &[CompoundPosition::new(0, 3), CompoundPosition::new(1, 0)]
        );
        assert!(aggregate.deletions().is_empty());
    }
}
