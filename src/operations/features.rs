//! Derive calendar features from a timestamp column
//!
//! Every value of the chosen column is parsed up front; a single bad value
//! fails the whole call and nothing is appended. On success one integer column
//! per requested feature is appended, named `<column>_<feature>`, in request
//! order. Existing columns and provenance tags are left as they were.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use tracing::{debug, info};

use crate::domain::{Column, CombinedTable, FeatureSet};
use crate::error::features::{column_exists, unparseable_timestamp};
use crate::error::{RejoinError, Result};

/// Layouts carrying a UTC offset; the local wall-clock time is kept
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f %:z",
    "%Y-%m-%d %H:%M:%S%.f %z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%Y-%m-%dT%H:%M:%S%.f%z",
];

/// Date-time layouts tried after the offset forms, most specific first
const DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y/%m/%d %H:%M",
    "%m/%d/%Y %H:%M:%S%.f",
    "%m/%d/%Y %H:%M",
];

/// Date-only layouts; midnight is assumed. Slashed dates without a leading
/// year are read month first.
const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%Y/%m/%d", "%m/%d/%Y"];

/// Parse one timestamp.
///
/// Values with an offset keep their local wall-clock time; the offset is
/// dropped.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    if value.is_empty() {
        return None;
    }

    if let Ok(ts) = DateTime::parse_from_rfc3339(value) {
        return Some(ts.naive_local());
    }

    OFFSET_FORMATS
        .iter()
        .find_map(|format| DateTime::parse_from_str(value, format).ok())
        .map(|ts| ts.naive_local())
        .or_else(|| {
            DATETIME_FORMATS
                .iter()
                .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
        })
        .or_else(|| parse_hour_only(value))
        .or_else(|| {
            DATE_FORMATS.iter().find_map(|format| {
                NaiveDate::parse_from_str(value, format)
                    .ok()
                    .and_then(|date| date.and_hms_opt(0, 0, 0))
            })
        })
        .or_else(|| parse_compact_date(value))
}

/// `2021-01-01T10`; chrono will not build a time without minutes
fn parse_hour_only(value: &str) -> Option<NaiveDateTime> {
    if value.len() != 13 || value.as_bytes().get(10) != Some(&b'T') {
        return None;
    }
    NaiveDateTime::parse_from_str(&format!("{value}:00"), "%Y-%m-%dT%H:%M").ok()
}

/// `20210131`
fn parse_compact_date(value: &str) -> Option<NaiveDateTime> {
    if value.len() != 8 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let dashed = format!("{}-{}-{}", &value[..4], &value[4..6], &value[6..]);
    NaiveDate::parse_from_str(&dashed, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

/// Parse every cell of `column`; reports the first failing row (1-based)
fn parse_column(column: &Column) -> Result<Vec<NaiveDateTime>> {
    column
        .cells()
        .iter()
        .enumerate()
        .map(|(row, cell)| {
            let raw = cell.as_deref().unwrap_or_default();
            parse_timestamp(raw).ok_or_else(|| unparseable_timestamp(column.name(), row + 1, raw))
        })
        .collect()
}

/// Append the requested calendar features for `datetime_column`.
///
/// Returns a new table; `table` itself is not modified.
pub fn generate(
    table: &CombinedTable,
    datetime_column: &str,
    features: &FeatureSet,
) -> Result<CombinedTable> {
    if features.is_empty() {
        return Err(RejoinError::EmptyFeatureSet);
    }

    let source = table.data().require_column(datetime_column)?;

    for feature in features.iter() {
        let name = feature.column_name(datetime_column);
        if table.data().contains_column(&name) {
            return Err(column_exists(name));
        }
    }

    let timestamps = parse_column(source)?;
    debug!(
        column = datetime_column,
        rows = timestamps.len(),
        "parsed timestamps"
    );

    let mut data = table.data().clone();
    for feature in features.iter() {
        let cells = timestamps
            .iter()
            .map(|ts| Some(feature.value(ts).to_string()))
            .collect();
        data.push_column(Column::new(feature.column_name(datetime_column), cells))?;
    }

    info!(
        column = datetime_column,
        features = features.len(),
        "date features generated"
    );

    Ok(table.clone().with_data(data))
}
