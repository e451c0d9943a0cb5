use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use super::features::FeatureSelection;
use crate::config::DEFAULT_COMBINED_FILE;

/// Arguments for the merge command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Merge train and test:\n    rejoin merge train.csv test.csv --label target\n\n\
                  Use custom source names:\n    rejoin merge a/data.csv b/data.csv --name-a train --name-b test\n\n\
                  Merge and add calendar features:\n    rejoin merge train.csv test.csv --date-column date --features year,month\n\n\
                  Machine-readable report:\n    rejoin merge train.csv test.csv --json")]
#[command(group(
    ArgGroup::new("feature_request")
        .args(["features", "all_features"])
        .multiple(true)
        .requires("date_column")
))]
pub struct MergeArgs {
    /// First input (usually the training set)
    pub first: PathBuf,

    /// Second input (usually the test set)
    pub second: PathBuf,

    /// Column present only in the first input (e.g. the target)
    #[arg(long, short = 'l', value_name = "COLUMN")]
    pub label: Option<String>,

    /// Source name for rows from the first input (defaults to its file name)
    #[arg(long, value_name = "NAME")]
    pub name_a: Option<String>,

    /// Source name for rows from the second input (defaults to its file name)
    #[arg(long, value_name = "NAME")]
    pub name_b: Option<String>,

    /// Output file
    #[arg(long, short = 'o', value_name = "FILE", default_value = DEFAULT_COMBINED_FILE)]
    pub output: PathBuf,

    /// Generate calendar features from this datetime column after merging
    #[arg(long, value_name = "COLUMN")]
    pub date_column: Option<String>,

    #[command(flatten)]
    pub selection: FeatureSelection,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}
