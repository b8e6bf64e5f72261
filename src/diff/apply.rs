//! Replaying an edit set against the old sequence.

use super::EditSet;
use std::collections::HashSet;

/// Rebuild the new sequence from `old` by applying `update`.
///
/// Deleted positions of `old` are dropped, reloaded positions take the
/// content of their aligned element in `new`, and inserted positions of
/// `new` are spliced in last, in ascending order. Elements that were neither
/// deleted nor reloaded are cloned from `old`.
///
/// Returns `None` if `update` does not describe a transformation between
/// these two sequences (a position out of bounds, or a survivor count that
/// does not line up).
///
/// ```
/// use array_updater::{apply_edit_set, diff};
///
/// let old = vec![1, 2, 3];
/// let new = vec![0, 2, 3, 4];
/// let update = diff(&old, &new);
/// assert_eq!(apply_edit_set(&old, &new, &update), Some(new));
/// ```
pub fn apply_edit_set<T: Clone>(old: &[T], new: &[T], update: &EditSet) -> Option<Vec<T>> {
    if update.deletions.iter().chain(&update.reloads).any(|&i| i >= old.len())
        || update.insertions.iter().any(|&j| j >= new.len())
    {
        return None;
    }

    let deleted: HashSet<usize> = update.deletions.iter().copied().collect();
    let reloaded: HashSet<usize> = update.reloads.iter().copied().collect();
    let inserted: HashSet<usize> = update.insertions.iter().copied().collect();

    let survivors: Vec<usize> = (0..old.len()).filter(|i| !deleted.contains(i)).collect();
    let aligned: Vec<usize> = (0..new.len()).filter(|j| !inserted.contains(j)).collect();
    if survivors.len() != aligned.len() {
        return None;
    }

    let mut result: Vec<T> = survivors
        .iter()
        .zip(&aligned)
        .map(|(&i, &j)| {
            if reloaded.contains(&i) {
                new[j].clone()
            } else {
                old[i].clone()
            }
        })
        .collect();

    let mut sorted_insertions = update.insertions.clone();
    sorted_insertions.sort_unstable();
    sorted_insertions.dedup();
    for j in sorted_insertions {
        if j > result.len() {
            return None;
        }
        result.insert(j, new[j].clone());
    }

    Some(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diff::diff;
    use crate::model::Record;
    use serde_json::json;

    #[test]
    fn test_apply_reproduces_new() {
        let old = vec!["a", "c", "d", "e"];
        let new = vec!["e", "b", "c", "d", "a"];
        let update = diff(&old, &new);
        assert_eq!(apply_edit_set(&old, &new, &update), Some(new));
    }

    #[test]
    fn test_apply_takes_reloaded_content() {
        let key = Some("id");
        let old: Vec<Record> = [json!({"id": 1, "v": "old"}), json!({"id": 2, "v": "same"})]
            .into_iter()
            .filter_map(|v| Record::from_value(v, key))
            .collect();
        let new: Vec<Record> = [json!({"id": 1, "v": "new"}), json!({"id": 2, "v": "same"})]
            .into_iter()
            .filter_map(|v| Record::from_value(v, key))
            .collect();

        let update = diff(&old, &new);
        assert_eq!(update, EditSet::new(vec![], vec![], vec![0]));
        assert_eq!(apply_edit_set(&old, &new, &update), Some(new));
    }

    #[test]
    fn test_apply_rejects_mismatched_update() {
        let old = vec![1, 2];
        let new = vec![1, 2];
        assert_eq!(
            apply_edit_set(&old, &new, &EditSet::new(vec![], vec![5], vec![])),
            None
        );
        assert_eq!(
            apply_edit_set(&old, &new, &EditSet::new(vec![], vec![0], vec![])),
            None
        );
    }

    #[test]
    fn test_apply_empty_update_clones_old() {
        let old = vec![3, 1, 2];
        assert_eq!(apply_edit_set(&old, &old, &EditSet::default()), Some(old.clone()));
    }
}
