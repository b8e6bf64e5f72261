//! Configurable diff engine for flat and sectioned sequences.

use super::{diff, EditSet, MultiSectionEditSet};
use crate::config::{DiffSettings, DEFAULT_LARGE_INPUT_WARNING_CELLS};
use crate::model::Updatable;
use rayon::prelude::*;

/// Sequence diff engine.
///
/// The comparison itself is a pure function ([`diff`]); the engine adds the
/// knobs a caller usually wants around it: an advisory warning for inputs
/// large enough to make the O(n·m) table expensive, and optional parallel
/// diffing of independent sections.
#[derive(Debug, Clone)]
pub struct DiffEngine {
    large_input_warning_cells: u64,
    parallel_sections: bool,
}

impl DiffEngine {
    /// Create a new diff engine with default settings
    #[must_use]
    pub const fn new() -> Self {
        Self {
            large_input_warning_cells: DEFAULT_LARGE_INPUT_WARNING_CELLS,
            parallel_sections: false,
        }
    }

    /// Create an engine from the `diff` section of the application config.
    #[must_use]
    pub const fn from_settings(settings: &DiffSettings) -> Self {
        Self {
            large_input_warning_cells: settings.large_input_warning_cells,
            parallel_sections: settings.parallel_sections,
        }
    }

    /// Log a warning when a comparison table would exceed `cells` entries.
    ///
    /// The diff still runs; bounding input size is the caller's job.
    #[must_use]
    pub const fn with_large_input_warning(mut self, cells: u64) -> Self {
        self.large_input_warning_cells = cells;
        self
    }

    /// Diff independent sections on the rayon thread pool.
    #[must_use]
    pub const fn with_parallel_sections(mut self, parallel: bool) -> Self {
        self.parallel_sections = parallel;
        self
    }

    #[must_use]
    pub const fn large_input_warning_cells(&self) -> u64 {
        self.large_input_warning_cells
    }

    #[must_use]
    pub const fn parallel_sections(&self) -> bool {
        self.parallel_sections
    }

    /// Compute the edit set transforming `old` into `new`.
    pub fn diff<T: Updatable>(&self, old: &[T], new: &[T]) -> EditSet {
        self.check_size(old.len(), new.len(), None);
        diff(old, new)
    }

    /// Diff section `k` of `old` against section `k` of `new` for every `k`.
    ///
    /// A section present on only one side is compared against an empty
    /// sequence, so it shows up as all deletions or all insertions.
    pub fn diff_sections<T, S>(&self, old: &[S], new: &[S]) -> MultiSectionEditSet
    where
        T: Updatable + Sync,
        S: AsRef<[T]> + Sync,
    {
        let count = old.len().max(new.len());
        let section_diff = |group: usize| {
            let old_section = old.get(group).map_or(&[][..], |section| section.as_ref());
            let new_section = new.get(group).map_or(&[][..], |section| section.as_ref());
            self.check_size(old_section.len(), new_section.len(), Some(group));
            (group, diff(old_section, new_section))
        };

        let updates: Vec<(usize, EditSet)> = if self.parallel_sections {
            (0..count).into_par_iter().map(section_diff).collect()
        } else {
            (0..count).map(section_diff).collect()
        };

        let mut aggregate = MultiSectionEditSet::no_update();
        for (group, update) in &updates {
            aggregate.merge(update, *group);
        }

        tracing::debug!(
            sections = count,
            changed_sections = aggregate.sections().len(),
            steps = aggregate.total(),
            "sectioned diff complete"
        );

        aggregate
    }

    fn check_size(&self, old_len: usize, new_len: usize, group: Option<usize>) {
        let cells = (old_len as u64 + 1).saturating_mul(new_len as u64 + 1);
        if cells > self.large_input_warning_cells {
            tracing::warn!(
                old_len,
                new_len,
                cells,
                threshold = self.large_input_warning_cells,
                section = ?group,
                "large comparison table; diff cost grows with old_len * new_len"
            );
        }
    }
}

impl Default for DiffEngine {
    fn default() -> Self {
        Self::new()
    }
}
