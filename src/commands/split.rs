//! Split command implementation

use std::collections::HashSet;
use std::path::Path;

use tracing::info;

use super::helpers::load_combined;
use crate::cli::SplitArgs;
use crate::common::csv_codec::write_table;
use crate::common::fs::split_output_name;
use crate::error::Result;
use crate::error::fs::write_failed;
use crate::operations::{Split, split};
use crate::report::{SplitFile, SplitReport};
use crate::ui::formatter::formatter;
use crate::ui::{InteractiveProgressReporter, ProgressReporter, SilentProgressReporter};

pub fn run(args: SplitArgs) -> Result<()> {
    let combined = load_combined(&args.input)?;
    let result = split(&combined);

    let mut reporter: Box<dyn ProgressReporter> = if args.json {
        Box::new(SilentProgressReporter)
    } else {
        Box::new(InteractiveProgressReporter::new(result.parts.len() as u64))
    };

    let files = write_parts(&result, &args.output_dir, &args.prefix, reporter.as_mut())?;

    let report = SplitReport {
        input: args.input.display().to_string(),
        files,
        group_count: result.group_count,
    };
    formatter(args.json).format_split(&report)
}

/// Write one CSV per part into `dir`.
///
/// All file names are checked before anything is written, so an unusable
/// source name leaves the directory untouched.
pub fn write_parts(
    result: &Split,
    dir: &Path,
    prefix: &str,
    reporter: &mut dyn ProgressReporter,
) -> Result<Vec<SplitFile>> {
    let mut targets = Vec::with_capacity(result.parts.len());
    let mut seen = HashSet::new();
    for part in &result.parts {
        let path = dir.join(split_output_name(prefix, &part.source)?);
        if !seen.insert(path.clone()) {
            return Err(write_failed(&path, "two sources map to the same output file"));
        }
        targets.push(path);
    }

    let mut files = Vec::with_capacity(targets.len());
    for (part, path) in result.parts.iter().zip(targets) {
        reporter.update_file(&path.display().to_string());
        if let Err(e) = write_table(&path, &part.table) {
            reporter.abandon();
            return Err(e);
        }
        reporter.inc_file();
        info!(source = %part.source, path = %path.display(), rows = part.table.row_count(), "wrote split part");

        files.push(SplitFile {
            source: part.source.as_str().to_string(),
            path: path.display().to_string(),
            rows: part.table.row_count(),
            columns: part.table.column_count(),
        });
    }
    reporter.finish();

    Ok(files)
}
