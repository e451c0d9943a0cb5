//! Display functions for reports, advisories and table previews
//!
//! Summaries go to stdout. Advisories go to stderr so they never end up in a
//! redirected CSV or report.

use console::Style;
use miette::Diagnostic;

use crate::report::{FeatureReport, MergeReport, PreviewReport, SourceCount, SplitReport};

/// Longest cell rendered in a preview before truncation
const MAX_CELL_WIDTH: usize = 24;

macro_rules! display_field {
    ($label:expr, $value:expr) => {
        println!("  {} {}", Style::new().bold().apply_to($label), $value);
    };
}

/// Render a non-blocking advisory on stderr
pub fn display_advisory(advisory: &dyn Diagnostic) {
    eprintln!(
        "{} {}",
        Style::new().yellow().bold().apply_to("Warning:"),
        advisory
    );
    if let Some(help) = advisory.help() {
        eprintln!("  {} {}", Style::new().dim().apply_to("help:"), help);
    }
}

fn display_sources(sources: &[SourceCount]) {
    println!("  {}", Style::new().bold().apply_to("Rows per source:"));
    for count in sources {
        println!(
            "    {} {}",
            Style::new().cyan().apply_to(&count.source),
            Style::new().dim().apply_to(format!("({} rows)", count.rows))
        );
    }
}

pub fn display_merge(report: &MergeReport) {
    if let Some(ref mismatch) = report.schema_mismatch {
        display_advisory(mismatch);
    }

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Merged into"),
        report.output
    );
    display_field!("Rows:", report.rows);
    display_field!("Columns:", report.columns.len());
    display_sources(&report.sources);

    if let (Some(label), Some(source)) = (&report.label_column, &report.unlabelled_source) {
        println!(
            "  {} rows from '{}' have an empty '{}' column",
            Style::new().dim().apply_to("note:"),
            source,
            label
        );
    }

    if let Some(ref features) = report.features {
        display_added_columns(features);
    }
}

fn display_added_columns(report: &FeatureReport) {
    println!(
        "  {} {}",
        Style::new().bold().apply_to(format!("Added from '{}':", report.datetime_column)),
        report.added_columns.join(", ")
    );
}

pub fn display_features(report: &FeatureReport) {
    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Generated features in"),
        report.output
    );
    display_added_columns(report);
    display_field!("Rows:", report.rows);
}

pub fn display_split(report: &SplitReport) {
    if let Some(ref group_count) = report.group_count {
        display_advisory(group_count);
    }

    println!(
        "{} {}",
        Style::new().green().bold().apply_to("Split"),
        report.input
    );
    if report.files.is_empty() {
        println!("  {}", Style::new().dim().apply_to("No rows, nothing written"));
        return;
    }
    for file in &report.files {
        println!(
            "  {} -> {} {}",
            Style::new().cyan().apply_to(&file.source),
            file.path,
            Style::new()
                .dim()
                .apply_to(format!("({} rows, {} columns)", file.rows, file.columns))
        );
    }
}

pub fn display_preview(report: &PreviewReport) {
    println!("{}", Style::new().bold().yellow().apply_to(&report.path));
    display_field!("Columns:", report.columns.join(", "));
    display_field!("Rows:", report.rows);
    println!();

    for line in render_table(&report.columns, &report.head) {
        println!("{line}");
    }
    if report.rows > report.head.len() {
        println!(
            "{}",
            Style::new()
                .dim()
                .apply_to(format!("... {} more rows", report.rows - report.head.len()))
        );
    }

    if let Some(ref sources) = report.sources {
        println!();
        display_sources(sources);
    }
}

fn truncate(cell: &str) -> String {
    if cell.chars().count() > MAX_CELL_WIDTH {
        let kept: String = cell.chars().take(MAX_CELL_WIDTH - 3).collect();
        format!("{kept}...")
    } else {
        cell.to_string()
    }
}

/// Lay out a header and rows as aligned text lines. Missing cells render empty.
pub fn render_table(columns: &[String], rows: &[Vec<Option<String>>]) -> Vec<String> {
    let header: Vec<String> = columns.iter().map(|c| truncate(c)).collect();
    let body: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| truncate(cell.as_deref().unwrap_or("")))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = header.iter().map(|h| h.chars().count()).collect();
    for row in &body {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let format_row = |cells: &[String]| {
        cells
            .iter()
            .zip(&widths)
            .map(|(cell, &width)| format!("{cell:<width$}"))
            .collect::<Vec<_>>()
            .join("  ")
            .trim_end()
            .to_string()
    };

    let mut lines = Vec::with_capacity(body.len() + 2);
    lines.push(
        Style::new()
            .bold()
            .apply_to(format_row(&header))
            .to_string(),
    );
    lines.push(
        widths
            .iter()
            .map(|&w| "-".repeat(w))
            .collect::<Vec<_>>()
            .join("  "),
    );
    lines.extend(body.iter().map(|row| format_row(row)));
    lines
}
