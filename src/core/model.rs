// SnaffleSleuth - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no CLI,
// no platform dependencies.
//
// These types are the shared vocabulary across parsing, filtering,
// aggregation, and export.

use serde::Serialize;

use crate::util::error::ParseFailure;

// =============================================================================
// Log Entry (one parsed Snaffler record)
// =============================================================================

/// A single parsed Snaffler scan record.
///
/// Every field is kept verbatim as matched from the source line — no date
/// parsing, no size normalisation — so that an exported row reproduces the
/// original text exactly. An entry exists only if the full line matched the
/// record grammar; entries are immutable once created.
#[derive(Debug, Clone, Serialize)]
pub struct LogEntry {
    /// Textual timestamp, `YYYY-MM-DD HH:MM:SS ±HH:MM`.
    pub timestamp: String,

    /// Category of the scanned artefact, e.g. "File" or "Share".
    pub entry_type: String,

    /// Severity label attached to the matched rule, e.g. "Red".
    ///
    /// The set of levels is open and discovered at parse time. Snaffler
    /// deployments routinely define custom levels, so this is plain text
    /// compared for exact (case-sensitive) equality, never a closed enum.
    pub triage_level: String,

    /// Name of the rule that matched.
    pub rule_name: String,

    /// Access the scanner had to the file, e.g. "R" or "RW".
    pub permission: String,

    /// The regex or description that triggered the match. May itself
    /// contain `|`. Carried for display and JSON export; the CSV column
    /// set does not include it.
    pub match_pattern: String,

    /// Reported file size as free text, e.g. "208kB".
    pub file_size: String,

    /// Reported last-modified date as free text.
    pub last_modified: String,

    /// Full path of the matched file or share.
    pub file_path: String,

    /// Trailing free-text content showing what triggered the rule match.
    /// Trimmed of surrounding whitespace; may be empty.
    pub match_context: String,
}

impl LogEntry {
    /// Server name derived from a UNC `file_path`.
    ///
    /// `\\HOST\share\dir\file.txt` yields `HOST`. Returns `None` for
    /// non-UNC paths and for degenerate paths with an empty host segment.
    pub fn server(&self) -> Option<&str> {
        let rest = self.file_path.strip_prefix(r"\\")?;
        rest.split('\\').next().filter(|host| !host.is_empty())
    }
}

// =============================================================================
// Log Collection (output of one parse request)
// =============================================================================

/// An insertion-ordered set of parsed records plus per-line failure
/// accounting, produced by one call to `parser::parse_log`.
///
/// Created fresh per parse and owned exclusively by the caller; collections
/// are never merged across inputs.
#[derive(Debug, Default)]
pub struct LogCollection {
    /// Successfully parsed records, in original line order.
    pub entries: Vec<LogEntry>,

    /// Number of non-blank lines that did not match the record grammar.
    /// Never capped: every rejected line is counted.
    pub failed_lines: usize,

    /// Total lines seen in the input, including blank ones.
    pub lines_processed: u64,

    /// Failure diagnostics, capped at `MAX_PARSE_FAILURES_TRACKED`.
    pub failures: Vec<ParseFailure>,
}
