//! Property-based tests for edit sets.
//!
//! Ensures the diff engine produces replayable, well-formed edit sets for
//! arbitrary inputs, and that section aggregation keeps its invariants.

use array_updater::{apply_edit_set, diff, CompoundPosition, EditSet, MultiSectionEditSet, Updatable};
use proptest::prelude::*;

/// Element with a small identity space so sequences share many ids.
#[derive(Debug, Clone, PartialEq)]
struct Item {
    id: u8,
    rev: u8,
}

impl Updatable for Item {
    fn same_identity(&self, other: &Self) -> bool {
        self.id == other.id
    }

    fn same_content(&self, other: &Self) -> bool {
        self.rev == other.rev
    }
}

fn items(max_len: usize) -> impl Strategy<Value = Vec<Item>> {
    prop::collection::vec((0u8..12, 0u8..3).prop_map(|(id, rev)| Item { id, rev }), 0..max_len)
}

fn edit_set() -> impl Strategy<Value = EditSet> {
    let indices = || prop::collection::vec(0usize..40, 0..8);
    (indices(), indices(), indices()).prop_map(|(ins, del, rel)| EditSet::new(ins, del, rel))
}

fn is_strictly_ascending<T: Ord>(items: &[T]) -> bool {
    items.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(500))]

    #[test]
    fn apply_reproduces_new(old in items(24), new in items(24)) {
        let edits = diff(&old, &new);
        prop_assert_eq!(apply_edit_set(&old, &new, &edits), Some(new.clone()));
    }

    #[test]
    fn edit_lists_are_sorted_and_in_bounds(old in items(24), new in items(24)) {
        let edits = diff(&old, &new);
        prop_assert!(is_strictly_ascending(&edits.insertions));
        prop_assert!(is_strictly_ascending(&edits.deletions));
        prop_assert!(is_strictly_ascending(&edits.reloads));
        prop_assert!(edits.insertions.iter().all(|&i| i < new.len()));
        prop_assert!(edits.deletions.iter().all(|&i| i < old.len()));
        prop_assert!(edits.reloads.iter().all(|&i| i < old.len()));
        prop_assert!(edits.reloads.iter().all(|i| !edits.deletions.contains(i)));
    }

    #[test]
    fn survivors_balance_lengths(old in items(24), new in items(24)) {
        let edits = diff(&old, &new);
        prop_assert_eq!(
            old.len() - edits.deletions.len(),
            new.len() - edits.insertions.len()
        );
    }

    #[test]
    fn self_diff_is_empty(seq in items(32)) {
        prop_assert!(!diff(&seq, &seq).has_changes());
    }

    #[test]
    fn inverse_is_involution(a in edit_set(), b in edit_set(), group in 0usize..4) {
        let mut aggregate = MultiSectionEditSet::from_edit_set(&a, group);
        aggregate.merge(&b, group + 1);
        let inverse = aggregate.inverse();
        prop_assert_eq!(inverse.inverse(), aggregate.clone());
        prop_assert_eq!(inverse.insertions(), aggregate.deletions());
        prop_assert_eq!(inverse.deletions(), aggregate.insertions());
    }

    #[test]
    fn merge_is_idempotent(a in edit_set(), group in 0usize..4) {
        let mut once = MultiSectionEditSet::no_update();
        once.merge(&a, group);
        let mut twice = once.clone();
        twice.merge(&a, group);
        prop_assert_eq!(once, twice);
    }

    #[test]
    fn merge_is_order_insensitive(a in edit_set(), b in edit_set(), ga in 0usize..3, gb in 0usize..3) {
        let mut ab = MultiSectionEditSet::no_update();
        ab.merge(&a, ga);
        ab.merge(&b, gb);

        let mut ba = MultiSectionEditSet::no_update();
        ba.merge(&b, gb);
        ba.merge(&a, ga);

        prop_assert_eq!(ab, ba);
    }

    #[test]
    fn aggregates_stay_sorted_and_deduped(sets in prop::collection::vec((edit_set(), 0usize..4), 0..6)) {
        let mut aggregate = MultiSectionEditSet::no_update();
        for (set, group) in &sets {
            aggregate.merge(set, *group);
        }
        let lists: [&[CompoundPosition]; 3] =
            [aggregate.insertions(), aggregate.deletions(), aggregate.reloads()];
        for list in lists {
            prop_assert!(is_strictly_ascending(list));
        }
    }
}
