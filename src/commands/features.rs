//! Features command implementation

use tracing::info;

use super::helpers::{load_combined, resolve_features, save_combined};
use crate::cli::FeaturesArgs;
use crate::error::Result;
use crate::operations::generate;
use crate::report::FeatureReport;
use crate::ui::formatter::formatter;

pub fn run(args: FeaturesArgs) -> Result<()> {
    let features = resolve_features(&args.selection)?;
    let combined = load_combined(&args.input)?;

    let enriched = generate(&combined, &args.column, &features)?;

    let output = args.output.as_deref().unwrap_or(&args.input);
    save_combined(output, &enriched)?;
    info!(output = %output.display(), features = features.len(), "wrote enriched table");

    let report = FeatureReport::new(output, &args.column, &combined, &enriched);
    formatter(args.json).format_features(&report)
}
