//! Interactive session: merge, optional features, save, optional split
//!
//! Each stage runs against the [`Session`]; a failed feature step is reported
//! and can be retried without re-reading the inputs.

use std::path::{Path, PathBuf};

use console::Style;
use tracing::debug;

use super::helpers::save_combined;
use super::split::write_parts;
use crate::common::csv_codec::read_table;
use crate::config::{DEFAULT_COMBINED_FILE, DEFAULT_PREVIEW_ROWS, DEFAULT_SPLIT_PREFIX};
use crate::domain::{SourceId, Table};
use crate::error::Result;
use crate::operations::{MergeInput, Session};
use crate::report::{FeatureReport, MergeReport, PreviewReport, SplitReport};
use crate::ui::display::{display_merge, display_preview, display_split};
use crate::ui::prompt::{confirm, prompt_path, select_column, select_features, select_label_column};
use crate::ui::InteractiveProgressReporter;

pub fn run() -> Result<()> {
    let Some(first_path) = prompt_path("First CSV file (e.g. train.csv):", None)? else {
        return Ok(());
    };
    let Some(second_path) = prompt_path("Second CSV file (e.g. test.csv):", None)? else {
        return Ok(());
    };
    let first_path = PathBuf::from(first_path);
    let second_path = PathBuf::from(second_path);

    let first = read_table(&first_path)?;
    let second = read_table(&second_path)?;
    let Some((first_id, second_id)) = source_ids(&first_path, &second_path)? else {
        return Ok(());
    };

    let label = select_label_column(&label_candidates(&first))?;

    let mut session = Session::new();
    let schema_mismatch = session.merge(
        MergeInput::new(&first, &first_id),
        MergeInput::new(&second, &second_id),
        label.as_deref(),
    )?;
    if let Some(combined) = session.combined() {
        display_preview(&PreviewReport::combined("Combined table", combined, DEFAULT_PREVIEW_ROWS));
    }

    let feature_report = if confirm("Generate calendar features from a datetime column?", true)? {
        generate_features(&mut session)?
    } else {
        None
    };

    let Some(output) = prompt_path("Save combined file as:", Some(DEFAULT_COMBINED_FILE))? else {
        return Ok(());
    };
    let output = PathBuf::from(output);
    let Some(combined) = session.combined() else {
        return Ok(());
    };
    save_combined(&output, combined)?;

    let mut report = MergeReport::new(&output, combined, label.as_deref(), schema_mismatch);
    if let Some(mut feature_report) = feature_report {
        feature_report.output = report.output.clone();
        report = report.with_features(feature_report);
    }
    display_merge(&report);

    if confirm("Split the combined table back into one file per source?", true)? {
        split_session(&session, &output)?;
    }

    Ok(())
}

/// File names by default; prompts for names when both inputs share one
fn source_ids(first: &Path, second: &Path) -> Result<Option<(SourceId, SourceId)>> {
    let first_id = SourceId::from_path(first)?;
    let second_id = SourceId::from_path(second)?;
    if first_id != second_id {
        return Ok(Some((first_id, second_id)));
    }

    println!(
        "{} both files are named '{}'; choose a name for each",
        Style::new().yellow().bold().apply_to("Note:"),
        first_id
    );
    let Some(first_name) = prompt_path("Name for rows from the first file:", Some("train"))? else {
        return Ok(None);
    };
    let Some(second_name) = prompt_path("Name for rows from the second file:", Some("test"))? else {
        return Ok(None);
    };
    Ok(Some((SourceId::new(first_name)?, SourceId::new(second_name)?)))
}

/// Any column of the first table may serve as the label
fn label_candidates(first: &Table) -> Vec<String> {
    first.column_names().map(ToString::to_string).collect()
}

/// Run the feature stage until it succeeds or the user gives up
fn generate_features(session: &mut Session) -> Result<Option<FeatureReport>> {
    loop {
        let Some(before) = session.combined().cloned() else {
            return Ok(None);
        };
        let columns: Vec<String> = before.data().column_names().map(ToString::to_string).collect();

        let Some(column) = select_column("Datetime column:", columns)? else {
            return Ok(None);
        };
        let Some(features) = select_features()? else {
            return Ok(None);
        };

        match session.generate_features(&column, &features) {
            Ok(_) => {
                let Some(after) = session.combined() else {
                    return Ok(None);
                };
                display_preview(&PreviewReport::combined(
                    "With calendar features",
                    after,
                    DEFAULT_PREVIEW_ROWS,
                ));
                return Ok(Some(FeatureReport::new(Path::new(""), &column, &before, after)));
            }
            Err(e) => {
                debug!(error = %e, "feature generation failed, table unchanged");
                eprintln!("{} {}", Style::new().red().bold().apply_to("Error:"), e);
                if !confirm("Try again with different settings?", true)? {
                    return Ok(None);
                }
            }
        }
    }
}

fn split_session(session: &Session, combined_path: &Path) -> Result<()> {
    let Some(result) = session.split() else {
        return Ok(());
    };
    let Some(dir) = prompt_path("Output directory:", Some("."))? else {
        return Ok(());
    };

    let mut reporter = InteractiveProgressReporter::new(result.parts.len() as u64);
    let files = write_parts(&result, Path::new(&dir), DEFAULT_SPLIT_PREFIX, &mut reporter)?;

    for (part, file) in result.parts.iter().zip(&files) {
        display_preview(&PreviewReport::new(
            Path::new(&file.path),
            &part.table,
            DEFAULT_PREVIEW_ROWS,
            None,
        ));
        println!();
    }

    display_split(&SplitReport {
        input: combined_path.display().to_string(),
        files,
        group_count: result.group_count,
    });
    Ok(())
}
