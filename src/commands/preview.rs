//! Preview command implementation

use crate::cli::PreviewArgs;
use crate::common::csv_codec::read_table;
use crate::config::PROVENANCE_COLUMN;
use crate::domain::CombinedTable;
use crate::error::Result;
use crate::report::{PreviewReport, SourceCount};
use crate::ui::formatter::formatter;

pub fn run(args: PreviewArgs) -> Result<()> {
    let table = read_table(&args.input)?;

    // Provenance summary only when the file carries the column
    let sources = if table.contains_column(PROVENANCE_COLUMN) {
        let combined = CombinedTable::from_table(table.clone())?;
        Some(SourceCount::observed(&combined))
    } else {
        None
    };

    let report = PreviewReport::new(&args.input, &table, args.rows, sources);
    formatter(args.json).format_preview(&report)
}
