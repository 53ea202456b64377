// SnaffleSleuth - core/summary.rs
//
// Aggregation of parsed records for dashboard-style display.
// Core layer: pure logic, no I/O or CLI dependencies.

use crate::core::model::{LogCollection, LogEntry};
use std::collections::BTreeMap;

/// Summary statistics for one parse request.
///
/// Surfaced to the user after every parse so that format drift shows up as
/// a climbing `failed_lines` count rather than silently shrinking output.
#[derive(Debug, Clone, Default)]
pub struct ParseSummary {
    /// Total lines seen, including blank ones.
    pub lines_processed: u64,

    /// Records that matched the grammar.
    pub total_entries: usize,

    /// Non-blank lines that did not match.
    pub failed_lines: usize,

    /// Record counts per triage level.
    pub triage_counts: BTreeMap<String, usize>,
}

/// Count records grouped by their exact `triage_level` string.
///
/// Case-sensitive, no normalisation: "Red" and "red" are distinct levels.
/// The level set is whatever was discovered at parse time; levels with no
/// records are absent from the map. Iteration order is alphabetical
/// (`BTreeMap`), giving a stable display order for open-ended level names.
pub fn triage_counts(entries: &[LogEntry]) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for entry in entries {
        *counts.entry(entry.triage_level.clone()).or_insert(0) += 1;
    }
    counts
}

/// Build the full parse summary for a collection.
pub fn summarise(collection: &LogCollection) -> ParseSummary {
    ParseSummary {
        lines_processed: collection.lines_processed,
        total_entries: collection.entries.len(),
        failed_lines: collection.failed_lines,
        triage_counts: triage_counts(&collection.entries),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::parser::parse_log;

    fn record_line(level: &str) -> String {
        format!(
            r"2020-05-30 19:37:18 +08:00 [File] {{{level}}}<Rule1|R|pat> 1kB|01/01/2020>(\\h\s\f.txt) ctx"
        )
    }

    #[test]
    fn test_counts_group_by_exact_level() {
        let text = format!(
            "{}\n{}\n{}\n",
            record_line("Red"),
            record_line("Red"),
            record_line("Green")
        );
        let collection = parse_log(&text);
        let counts = triage_counts(&collection.entries);

        assert_eq!(counts.len(), 2);
        assert_eq!(counts.get("Red"), Some(&2));
        assert_eq!(counts.get("Green"), Some(&1));
        assert_eq!(counts.get("Yellow"), None, "absent level must be absent");
    }

    #[test]
    fn test_counts_sum_to_entry_total() {
        let text = format!(
            "{}\n{}\n{}\n{}\n",
            record_line("Red"),
            record_line("Yellow"),
            record_line("Black"),
            record_line("Red")
        );
        let collection = parse_log(&text);
        let counts = triage_counts(&collection.entries);
        assert_eq!(counts.values().sum::<usize>(), collection.entries.len());
    }

    #[test]
    fn test_counts_are_case_sensitive_and_sorted() {
        let text = format!(
            "{}\n{}\n{}\n",
            record_line("red"),
            record_line("Red"),
            record_line("Black")
        );
        let collection = parse_log(&text);
        let counts = triage_counts(&collection.entries);

        assert_eq!(counts.get("Red"), Some(&1));
        assert_eq!(counts.get("red"), Some(&1));
        // BTreeMap iterates alphabetically; uppercase sorts before lowercase.
        let levels: Vec<_> = counts.keys().cloned().collect();
        assert_eq!(levels, vec!["Black", "Red", "red"]);
    }

    #[test]
    fn test_summarise_bundles_collection_accounting() {
        let text = format!("{}\n\ngarbage\n{}\n", record_line("Red"), record_line("Green"));
        let collection = parse_log(&text);
        let summary = summarise(&collection);

        assert_eq!(summary.lines_processed, 4);
        assert_eq!(summary.total_entries, 2);
        assert_eq!(summary.failed_lines, 1);
        assert_eq!(summary.triage_counts.len(), 2);
    }

    #[test]
    fn test_empty_collection_summary() {
        let summary = summarise(&LogCollection::default());
        assert_eq!(summary.total_entries, 0);
        assert_eq!(summary.failed_lines, 0);
        assert!(summary.triage_counts.is_empty());
    }
}
