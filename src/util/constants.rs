// SnaffleSleuth - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "SnaffleSleuth";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default log level when neither RUST_LOG nor --debug is set.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Parsing limits
// =============================================================================

/// Maximum number of per-line failure diagnostics retained in a
/// `LogCollection`. The `failed_lines` counter itself is never capped; this
/// bounds only the retained snippets so a pathological input of millions of
/// malformed lines cannot grow memory without limit.
pub const MAX_PARSE_FAILURES_TRACKED: usize = 1_000;

/// Maximum length of the raw-line snippet kept in a failure diagnostic.
pub const FAILURE_SNIPPET_LEN: usize = 120;

// =============================================================================
// Display
// =============================================================================

/// Match context is truncated to this many characters in the preview listing.
/// Full context is always exported untruncated.
pub const MATCH_CONTEXT_PREVIEW_LEN: usize = 200;

// =============================================================================
// Export
// =============================================================================

/// Prefix for default export filenames.
pub const EXPORT_FILE_PREFIX: &str = "snaffle_export_";

/// chrono format string for the timestamp portion of default export filenames.
pub const EXPORT_TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";
