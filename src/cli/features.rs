use clap::{Args, Parser};
use std::path::PathBuf;

/// Which calendar features to generate
#[derive(Args, Debug, Clone, Default)]
pub struct FeatureSelection {
    /// Features to generate, comma-separated (e.g. year,month,day_of_week).
    /// Defaults to all features
    #[arg(long, value_name = "LIST", value_delimiter = ',', num_args = 1..)]
    pub features: Vec<String>,

    /// Generate every available feature
    #[arg(long, conflicts_with = "features")]
    pub all_features: bool,
}

/// Arguments for the features command
#[derive(Parser, Debug)]
#[command(after_help = "EXAMPLES:\n  \
                  Add every calendar feature in place:\n    rejoin features processed_combined_data.csv --column date\n\n\
                  Add selected features:\n    rejoin features combined.csv --column date --features year,month,day_of_week\n\n\
                  Write to a new file:\n    rejoin features combined.csv --column date -o with_features.csv\n\n\
                  Available features:\n    year, month, day, hour, minute, second, day_of_week, day_of_year,\n    \
                  iso_week_of_year, quarter")]
pub struct FeaturesArgs {
    /// Combined CSV file (must carry the source_dataset column)
    pub input: PathBuf,

    /// Datetime column to derive features from
    #[arg(long, short = 'c', value_name = "COLUMN")]
    pub column: String,

    #[command(flatten)]
    pub selection: FeatureSelection,

    /// Output file (defaults to overwriting the input)
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Print a JSON report instead of text
    #[arg(long)]
    pub json: bool,
}
