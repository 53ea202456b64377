// SnaffleSleuth - core/filter.rs
//
// Triage-level filter engine for parsed records.
// Core layer: pure logic, no I/O or CLI dependencies.

use crate::core::model::LogEntry;
use std::collections::HashSet;

/// Current filter selection.
///
/// An EMPTY selection means "no filter applied" — every record passes. This
/// mirrors the consolidator UI, where un-ticking every triage level shows
/// the full table rather than an empty one. Callers that want "exclude
/// everything" must not reach for an empty set; that state does not exist
/// in this engine.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    /// Triage levels to include, compared case-sensitively (empty = all).
    pub triage_levels: HashSet<String>,
}

impl FilterState {
    /// Returns true if no filter is active.
    pub fn is_empty(&self) -> bool {
        self.triage_levels.is_empty()
    }

    /// Build a selection from any iterable of level names.
    pub fn with_levels<I, S>(levels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            triage_levels: levels.into_iter().map(Into::into).collect(),
        }
    }
}

/// Apply the filter to a slice of entries, returning indices of matching
/// entries in their original parse order.
///
/// Returns indices into the original slice rather than copies, so repeated
/// re-filtering against the same collection never re-parses or reallocates
/// the records themselves. Referentially transparent: same entries and
/// selection always yield the same indices.
pub fn apply_filter(entries: &[LogEntry], filter: &FilterState) -> Vec<usize> {
    if filter.is_empty() {
        return (0..entries.len()).collect();
    }

    entries
        .iter()
        .enumerate()
        .filter(|(_, entry)| filter.triage_levels.contains(&entry.triage_level))
        .map(|(idx, _)| idx)
        .collect()
}
