//! Merge command implementation

use tracing::info;

use super::helpers::{resolve_features, resolve_source_id, save_combined};
use crate::cli::MergeArgs;
use crate::common::csv_codec::read_table;
use crate::error::Result;
use crate::operations::{MergeInput, generate, merge};
use crate::report::{FeatureReport, MergeReport};
use crate::ui::formatter::formatter;

pub fn run(args: MergeArgs) -> Result<()> {
    let first_id = resolve_source_id(args.name_a.as_deref(), &args.first)?;
    let second_id = resolve_source_id(args.name_b.as_deref(), &args.second)?;

    // Resolve features before any I/O so a typo fails fast
    let features = match args.date_column {
        Some(_) => Some(resolve_features(&args.selection)?),
        None => None,
    };

    let first = read_table(&args.first)?;
    let second = read_table(&args.second)?;

    let merged = merge(
        MergeInput::new(&first, &first_id),
        MergeInput::new(&second, &second_id),
        args.label.as_deref(),
    )?;

    let mut combined = merged.table;
    let mut feature_report = None;
    if let (Some(column), Some(features)) = (args.date_column.as_deref(), features.as_ref()) {
        let enriched = generate(&combined, column, features)?;
        feature_report = Some(FeatureReport::new(&args.output, column, &combined, &enriched));
        combined = enriched;
    }

    save_combined(&args.output, &combined)?;
    info!(output = %args.output.display(), rows = combined.row_count(), "wrote combined table");

    let mut report = MergeReport::new(
        &args.output,
        &combined,
        args.label.as_deref(),
        merged.schema_mismatch,
    );
    if let Some(feature_report) = feature_report {
        report = report.with_features(feature_report);
    }

    formatter(args.json).format_merge(&report)
}
