//! Fixed names and defaults shared by the library and the CLI
//!
//! There are no configuration files: every invocation is parameterized by
//! command-line flags, some of which fall back to the environment variables
//! named here.

/// Name of the synthetic provenance column added by merge and consumed by split
pub const PROVENANCE_COLUMN: &str = "source_dataset";

/// Default file name for the merged (and optionally feature-enriched) table
pub const DEFAULT_COMBINED_FILE: &str = "processed_combined_data.csv";

/// Default file name prefix for tables recovered by split
pub const DEFAULT_SPLIT_PREFIX: &str = "processed_";

/// Default number of rows shown by previews
pub const DEFAULT_PREVIEW_ROWS: usize = 5;

/// Number of provenance groups a typical train/test workflow expects at split time
pub const EXPECTED_GROUP_COUNT: usize = 2;

/// Environment variable holding the log filter (`tracing_subscriber::EnvFilter` syntax)
pub const LOG_ENV_VAR: &str = "REJOIN_LOG";

/// Environment variable overriding the split output directory
pub const OUTPUT_DIR_ENV_VAR: &str = "REJOIN_OUTPUT_DIR";
