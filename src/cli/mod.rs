//! CLI definitions using clap derive API
//!
//! This module is organized into submodules for each command's argument types:
//! - merge: Merge command arguments
//! - features: Features command arguments (and the shared feature selection)
//! - split: Split command arguments
//! - preview: Preview command arguments
//! - completions: Completions command arguments

use clap::builder::{Styles, styling::AnsiColor};
use clap::{Parser, Subcommand};

pub mod completions;
pub mod features;
pub mod merge;
pub mod preview;
pub mod split;

pub use completions::CompletionsArgs;
pub use features::{FeatureSelection, FeaturesArgs};
pub use merge::MergeArgs;
pub use preview::PreviewArgs;
pub use split::SplitArgs;

/// Rejoin - merge, enrich and split train/test CSV files
#[derive(Parser, Debug)]
#[command(
    name = "rejoin",
    author,
    version,
    styles = Styles::styled()
        .header(AnsiColor::Green.on_default().bold())
        .usage(AnsiColor::Green.on_default().bold())
        .literal(AnsiColor::Cyan.on_default().bold())
        .placeholder(AnsiColor::Cyan.on_default()),
    about = "Merge train/test CSV files, derive calendar features, and split them back apart",
    long_about = "Rejoin stacks two CSV files (typically train and test) into one table tagged \
                  with a source_dataset column, derives calendar features from a datetime \
                  column so both sets are engineered identically, and splits the combined \
                  table back into one file per source.",
    after_help = "\x1b[1m\x1b[32mExamples:\x1b[0m\n   \
                  rejoin merge train.csv test.csv --label target  \x1b[90m# Stack both files\x1b[0m\n   \
                  rejoin features processed_combined_data.csv -c date  \x1b[90m# Add calendar features\x1b[0m\n   \
                  rejoin split processed_combined_data.csv -d out  \x1b[90m# One file per source\x1b[0m\n   \
                  rejoin preview train.csv                        \x1b[90m# Peek at a file\x1b[0m\n   \
                  rejoin interactive                              \x1b[90m# Guided session\x1b[0m\n\n\
                  "
)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Merge two CSV files into one table tagged by source
    Merge(MergeArgs),

    /// Derive calendar features from a datetime column of a combined file
    Features(FeaturesArgs),

    /// Split a combined file back into one file per source
    Split(SplitArgs),

    /// Show the columns and first rows of a CSV file
    Preview(PreviewArgs),

    /// Walk through merge, features and split with prompts
    Interactive,

    /// Show version information
    #[command(hide = true)]
    Version,

    /// Generate shell completions
    Completions(CompletionsArgs),
}
