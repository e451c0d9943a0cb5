//! Interactive prompts for the guided session
//!
//! Every prompt is skippable: ESC returns `None` (or `false`) and the caller
//! decides what skipping means.

use inquire::{Confirm, MultiSelect, Select, Text};

use crate::domain::{CalendarFeature, FeatureSet};
use crate::error::Result;

const SELECT_HELP: &str = "↑↓ to move, ENTER to select, ESC to skip";

/// Label shown for "no label column"
pub const NO_LABEL: &str = "(no label column)";

/// Ask for a file path
pub fn prompt_path(message: &str, default: Option<&str>) -> Result<Option<String>> {
    let mut prompt = Text::new(message).with_help_message("ESC to cancel");
    if let Some(default) = default {
        prompt = prompt.with_default(default);
    }
    let answer = prompt.prompt_skippable()?;
    Ok(answer.map(|s| s.trim().to_string()).filter(|s| !s.is_empty()))
}

/// Pick one column
pub fn select_column(message: &str, columns: Vec<String>) -> Result<Option<String>> {
    if columns.is_empty() {
        return Ok(None);
    }
    let selection = Select::new(message, columns)
        .with_starting_cursor(0)
        .with_page_size(10)
        .with_help_message(SELECT_HELP)
        .prompt_skippable()?;
    Ok(selection)
}

/// Pick the label column, or explicitly none
pub fn select_label_column(columns: &[String]) -> Result<Option<String>> {
    let mut items = vec![NO_LABEL.to_string()];
    items.extend(columns.iter().cloned());
    let selection = select_column(
        "Label column (from the first file)",
        items,
    )?;
    Ok(selection.filter(|choice| choice != NO_LABEL))
}

/// Pick calendar features, all selected up front
pub fn select_features() -> Result<Option<FeatureSet>> {
    let labels: Vec<&str> = CalendarFeature::ALL.iter().map(|f| f.label()).collect();
    let Some(chosen) = MultiSelect::new("Features to generate", labels.clone())
        .with_all_selected_by_default()
        .with_page_size(10)
        .with_help_message("↑↓ to move, SPACE to toggle, ENTER to confirm, ESC to skip")
        .prompt_skippable()?
    else {
        return Ok(None);
    };

    let features = chosen.iter().filter_map(|label| {
        labels
            .iter()
            .position(|l| l == label)
            .map(|index| CalendarFeature::ALL[index])
    });
    Ok(Some(FeatureSet::new(features)))
}

/// Yes/no question; skipping counts as no
pub fn confirm(message: &str, default: bool) -> Result<bool> {
    let answer = Confirm::new(message)
        .with_default(default)
        .with_help_message("Press Enter to accept the default, ESC to skip")
        .prompt_skippable()?;
    Ok(answer.unwrap_or(false))
}
