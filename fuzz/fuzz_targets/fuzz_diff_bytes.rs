#![no_main]
use array_updater::{apply_edit_set, diff, MultiSectionEditSet};
use libfuzzer_sys::fuzz_target;

/// Fuzz the diff engine with arbitrary byte sequences.
///
/// The first byte picks a split point; the rest is divided into an old and a
/// new sequence. Whatever the input, replaying the edits on the old sequence
/// must rebuild the new one, and aggregating the edits must be idempotent.
fuzz_target!(|data: &[u8]| {
    let Some((&split, rest)) = data.split_first() else {
        return;
    };
    let (old, new) = rest.split_at(usize::from(split).min(rest.len()));

    let edits = diff(old, new);
    assert_eq!(apply_edit_set(old, new, &edits).as_deref(), Some(new));

    let mut aggregate = MultiSectionEditSet::from_edit_set(&edits, 0);
    let before = aggregate.clone();
    aggregate.merge(&edits, 0);
    assert_eq!(aggregate, before);
});
