use clap::Parser;
use std::path::PathBuf;

use crate::config::{DEFAULT_SPLIT_PREFIX, OUTPUT_DIR_ENV_VAR};

/// Arguments for the split command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Split next to the current directory:\n    rejoin split processed_combined_data.csv\n\n\
                  Split into a directory:\n    rejoin split combined.csv -d out/\n\n\
                  Change the file name prefix:\n    rejoin split combined.csv --prefix final_")]
pub struct SplitArgs {
    /// Combined CSV file (must carry the source_dataset column)
    pub input: PathBuf,

    /// Directory for the output files
    #[arg(long, short = 'd', value_name = "DIR", env = OUTPUT_DIR_ENV_VAR, default_value = ".")]
    pub output_dir: PathBuf,

    /// Prefix for each output file name
    #[arg(long, value_name = "PREFIX", default_value = DEFAULT_SPLIT_PREFIX)]
    pub prefix: String,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}
