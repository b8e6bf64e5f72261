//! Compound `(section, item)` positions.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A position inside one of several independently diffed sections.
///
/// Ordering is by section, then item, matching the order in which a
/// sectioned list view enumerates its rows.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
pub struct CompoundPosition {
    pub section: usize,
    pub item: usize,
}

impl CompoundPosition {
    #[must_use]
    pub const fn new(section: usize, item: usize) -> Self {
        Self { section, item }
    }
}

impl fmt::Display for CompoundPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.section, self.item)
    }
}

impl From<(usize, usize)> for CompoundPosition {
    fn from((section, item): (usize, usize)) -> Self {
        Self::new(section, item)
    }
}

/// Map a flat index within `group` to a compound position.
#[must_use]
pub const fn to_compound_position(index: usize, group: usize) -> CompoundPosition {
    CompoundPosition::new(group, index)
}

/// Map every index in `indices` into `group`.
pub fn compound_positions(indices: &[usize], group: usize) -> Vec<CompoundPosition> {
    indices
        .iter()
        .map(|&index| to_compound_position(index, group))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ordering_is_section_major() {
        let mut positions = vec![
            CompoundPosition::new(1, 0),
            CompoundPosition::new(0, 5),
            CompoundPosition::new(0, 2),
        ];
        positions.sort();
        assert_eq!(
            positions,
            vec![
                CompoundPosition::from((0_usize, 2_usize)),
                CompoundPosition::new(0, 5),
                CompoundPosition::new(1, 0),
            ]
        );
    }

    #[test]
    fn test_compound_positions() {
        assert_eq!(
            compound_positions(&[0, 3], 2),
            vec![CompoundPosition::new(2, 0), CompoundPosition::new(2, 3)]
        );
        assert_eq!(to_compound_position(4, 1).to_string(), "1.4");
    }
}
