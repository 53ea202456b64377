// SnaffleSleuth - core/export.rs
//
// CSV and JSON export of filtered records.
// Core layer: writes to any Write trait object; the caller owns the
// destination (file, buffer, HTTP response body, ...).

use crate::core::model::LogEntry;
use crate::util::error::ExportError;
use std::io::Write;
use std::path::Path;

/// Column header for CSV export. Fixed: downstream tooling keys on these
/// names, so the order and spelling never change. There is deliberately no
/// column for `match_pattern` — rule regexes are noise in a triage
/// spreadsheet and stay available via the JSON export.
const CSV_HEADER: [&str; 9] = [
    "Timestamp",
    "Log Entry Type",
    "Triage Level",
    "Matched Rule Name",
    "R/RW",
    "File Size",
    "File Last Modified",
    "Full File Path",
    "Match Context",
];

/// Export records to CSV, one row per record in input order.
///
/// Fields containing commas, quotes, or line breaks are quoted with internal
/// quotes doubled (the csv crate's default necessary-quoting). An empty
/// record set produces the header row only. Returns the number of data rows
/// written. `export_path` is used for error context only.
pub fn export_csv<W: Write>(
    entries: &[LogEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);

    csv_writer
        .write_record(CSV_HEADER)
        .map_err(|e| ExportError::Csv {
            path: export_path.to_path_buf(),
            source: e,
        })?;

    let mut count = 0;
    for entry in entries {
        csv_writer
            .write_record([
                &entry.timestamp,
                &entry.entry_type,
                &entry.triage_level,
                &entry.rule_name,
                &entry.permission,
                &entry.file_size,
                &entry.last_modified,
                &entry.file_path,
                &entry.match_context,
            ])
            .map_err(|e| ExportError::Csv {
                path: export_path.to_path_buf(),
                source: e,
            })?;
        count += 1;
    }

    csv_writer.flush().map_err(|e| ExportError::Io {
        path: export_path.to_path_buf(),
        source: e,
    })?;

    Ok(count)
}

/// Export records to JSON (pretty-printed array of objects, input order).
///
/// Unlike the CSV export this carries all ten record fields, including
/// `match_pattern`.
pub fn export_json<W: Write>(
    entries: &[LogEntry],
    writer: W,
    export_path: &Path,
) -> Result<usize, ExportError> {
    serde_json::to_writer_pretty(writer, entries).map_err(|e| ExportError::Json {
        path: export_path.to_path_buf(),
        source: e,
    })?;
    Ok(entries.len())
}
