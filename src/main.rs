// SnaffleSleuth - main.rs
//
// CLI entry point. Handles:
// 1. Argument parsing
// 2. Logging initialisation (debug mode support)
// 3. Reading the input log (file or stdin)
// 4. Driving the core pipeline: parse -> summarise -> filter -> export

use clap::Parser;
use std::io::Read;
use std::path::PathBuf;

use snafflesleuth::core::export::{export_csv, export_json};
use snafflesleuth::core::filter::{apply_filter, FilterState};
use snafflesleuth::core::model::{LogCollection, LogEntry};
use snafflesleuth::core::parser::parse_log;
use snafflesleuth::core::summary::summarise;
use snafflesleuth::util;
use snafflesleuth::util::constants;
use snafflesleuth::util::error::{Result, SnaffleSleuthError};

/// SnaffleSleuth - Snaffler log consolidator.
///
/// Parses Snaffler security-scan output into structured records, reports
/// per-triage-level counts, and exports the (optionally filtered) records
/// as CSV or JSON.
#[derive(Parser, Debug)]
#[command(name = "SnaffleSleuth", version, about)]
struct Cli {
    /// Snaffler log file to parse ('-' reads from stdin).
    input: PathBuf,

    /// Triage level to include in the export (repeatable).
    /// No levels given = no filter, all records are exported.
    #[arg(short = 't', long = "triage", value_name = "LEVEL")]
    triage: Vec<String>,

    /// Export destination (defaults to snaffle_export_<timestamp>.csv
    /// in the current directory).
    #[arg(short = 'o', long = "output")]
    output: Option<PathBuf>,

    /// Export JSON instead of CSV.
    #[arg(long = "json")]
    json: bool,

    /// Print the first N filtered records to stdout before exporting.
    #[arg(long = "preview", value_name = "N")]
    preview: Option<usize>,

    /// Parse and report only; write no export file.
    #[arg(long = "summary-only")]
    summary_only: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Initialise logging subsystem
    util::logging::init(cli.debug);

    tracing::info!(
        version = constants::APP_VERSION,
        debug = cli.debug,
        "SnaffleSleuth starting"
    );

    if let Err(e) = run(cli) {
        tracing::error!(error = %e, "Fatal error");
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let text = read_input(&cli.input)?;

    let collection = parse_log(&text);
    print_summary(&collection);
    log_failures(&collection);

    let filter = FilterState::with_levels(cli.triage);
    let selected: Vec<LogEntry> = apply_filter(&collection.entries, &filter)
        .into_iter()
        .map(|idx| collection.entries[idx].clone())
        .collect();

    if !filter.is_empty() {
        println!(
            "Filter matched {} of {} records",
            selected.len(),
            collection.entries.len()
        );
    }

    if let Some(n) = cli.preview {
        print_preview(&selected, n);
    }

    if cli.summary_only {
        return Ok(());
    }

    let export_path = cli.output.unwrap_or_else(|| default_export_path(cli.json));
    let file = std::fs::File::create(&export_path).map_err(|e| SnaffleSleuthError::Io {
        path: export_path.clone(),
        operation: "create export file",
        source: e,
    })?;

    let written = if cli.json {
        export_json(&selected, file, &export_path)?
    } else {
        export_csv(&selected, file, &export_path)?
    };

    tracing::info!(records = written, path = %export_path.display(), "Export complete");
    println!("Exported {written} records to {}", export_path.display());

    Ok(())
}

/// Read the whole input as text. Snaffler logs are occasionally littered
/// with undecodable bytes (copy-pasted console output, mixed codepages);
/// they are replaced rather than treated as fatal, so one bad byte never
/// costs the user the rest of a large capture.
fn read_input(input: &PathBuf) -> Result<String> {
    let bytes = if input.as_os_str() == "-" {
        let mut buf = Vec::new();
        std::io::stdin()
            .lock()
            .read_to_end(&mut buf)
            .map_err(|e| SnaffleSleuthError::Io {
                path: input.clone(),
                operation: "read stdin",
                source: e,
            })?;
        buf
    } else {
        std::fs::read(input).map_err(|e| SnaffleSleuthError::Io {
            path: input.clone(),
            operation: "read input file",
            source: e,
        })?
    };

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Print the parse summary: totals first, then per-level counts in the
/// aggregator's stable (alphabetical) order.
fn print_summary(collection: &LogCollection) {
    let summary = summarise(collection);

    println!(
        "Parsed {} records from {} lines ({} unparsed)",
        summary.total_entries, summary.lines_processed, summary.failed_lines
    );
    for (level, count) in &summary.triage_counts {
        println!("  {level:<12} {count}");
    }
}

/// Surface retained failure diagnostics at debug level so format drift can
/// be investigated without rerunning.
fn log_failures(collection: &LogCollection) {
    for failure in &collection.failures {
        tracing::debug!(line = failure.line_number, snippet = %failure.snippet, "Unparsed line");
    }
    if collection.failed_lines > collection.failures.len() {
        tracing::debug!(
            tracked = collection.failures.len(),
            total = collection.failed_lines,
            "Further unparsed lines not tracked"
        );
    }
}

/// Print the first `n` records with the match context shortened for the
/// terminal. Exports always carry the full context.
fn print_preview(entries: &[LogEntry], n: usize) {
    for entry in entries.iter().take(n) {
        let mut context: String = entry
            .match_context
            .chars()
            .take(constants::MATCH_CONTEXT_PREVIEW_LEN)
            .collect();
        if entry.match_context.chars().count() > constants::MATCH_CONTEXT_PREVIEW_LEN {
            context.push_str("...");
        }
        let server = entry.server().unwrap_or("-");
        println!(
            "{} [{}] {{{}}} {} {} {} | {}",
            entry.timestamp,
            entry.entry_type,
            entry.triage_level,
            server,
            entry.file_path,
            entry.permission,
            context
        );
    }
}

/// Default export filename: snaffle_export_<YYYYmmdd_HHMMSS>.<ext> in the
/// working directory.
fn default_export_path(json: bool) -> PathBuf {
    let stamp = chrono::Local::now().format(constants::EXPORT_TIMESTAMP_FORMAT);
    let ext = if json { "json" } else { "csv" };
    PathBuf::from(format!("{}{stamp}.{ext}", constants::EXPORT_FILE_PREFIX))
}
