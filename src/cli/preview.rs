use clap::Parser;
use std::path::PathBuf;

use crate::config::DEFAULT_PREVIEW_ROWS;

/// Arguments for the preview command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Show the first rows:\n    rejoin preview train.csv\n\n\
                  Show more rows:\n    rejoin preview processed_combined_data.csv -n 20")]
pub struct PreviewArgs {
    /// CSV file to inspect
    pub input: PathBuf,

    /// Number of rows to show
    #[arg(long, short = 'n', value_name = "ROWS", default_value_t = DEFAULT_PREVIEW_ROWS)]
    pub rows: usize,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}
