//! Formatters for command reports in different modes
//!
//! This module provides a trait-based approach to presenting command results,
//! supporting styled text for people and JSON for scripts.

use serde::Serialize;

use super::display;
use crate::error::Result;
use crate::report::{FeatureReport, MergeReport, PreviewReport, SplitReport};

/// Formatter trait for presenting command reports
///
/// This trait allows different display strategies (text, JSON) by
/// implementing the same interface.
pub trait ReportFormatter {
    fn format_merge(&self, report: &MergeReport) -> Result<()>;

    fn format_features(&self, report: &FeatureReport) -> Result<()>;

    fn format_split(&self, report: &SplitReport) -> Result<()>;

    fn format_preview(&self, report: &PreviewReport) -> Result<()>;
}

/// Styled text for the terminal
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format_merge(&self, report: &MergeReport) -> Result<()> {
        display::display_merge(report);
        Ok(())
    }

    fn format_features(&self, report: &FeatureReport) -> Result<()> {
        display::display_features(report);
        Ok(())
    }

    fn format_split(&self, report: &SplitReport) -> Result<()> {
        display::display_split(report);
        Ok(())
    }

    fn format_preview(&self, report: &PreviewReport) -> Result<()> {
        display::display_preview(report);
        Ok(())
    }
}

/// JSON formatter for programmatic output
pub struct JsonFormatter;

impl JsonFormatter {
    fn print(value: &impl Serialize) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }
}

impl ReportFormatter for JsonFormatter {
    fn format_merge(&self, report: &MergeReport) -> Result<()> {
        Self::print(report)
    }

    fn format_features(&self, report: &FeatureReport) -> Result<()> {
        Self::print(report)
    }

    fn format_split(&self, report: &SplitReport) -> Result<()> {
        Self::print(report)
    }

    fn format_preview(&self, report: &PreviewReport) -> Result<()> {
        Self::print(report)
    }
}

/// Pick the formatter for a command's `--json` flag
pub fn formatter(json: bool) -> Box<dyn ReportFormatter> {
    if json {
        Box::new(JsonFormatter)
    } else {
        Box::new(TextFormatter)
    }
}
