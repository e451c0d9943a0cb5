//! UI/Progress presentation layer
//!
//! This module handles:
//! - Progress reporting while output files are written
//! - Styled terminal output for reports, advisories and table previews
//! - Interactive prompts for the guided session
//!
//! All progress reporting goes through the ProgressReporter trait, so `--json`
//! runs can swap in a silent implementation and keep stdout machine-readable.

pub mod display;
pub mod formatter;
pub mod prompt;

use indicatif::{ProgressBar, ProgressStyle};

/// Progress reporter for writing a batch of output files
pub trait ProgressReporter {
    /// Show the file about to be written
    fn update_file(&mut self, file_name: &str);

    /// Mark one file as written
    fn inc_file(&mut self);

    /// All files written
    fn finish(&mut self);

    /// Abandon on error
    fn abandon(&mut self);
}

/// Interactive progress reporter with a visual progress bar
pub struct InteractiveProgressReporter {
    file_pb: ProgressBar,
}

impl InteractiveProgressReporter {
    /// Create a reporter for `total_files` outputs
    pub fn new(total_files: u64) -> Self {
        let file_style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(file_style);

        Self { file_pb }
    }
}

impl ProgressReporter for InteractiveProgressReporter {
    fn update_file(&mut self, file_name: &str) {
        // Truncate long names for display
        let display_name = if file_name.chars().count() > 50 {
            let tail: String = file_name
                .chars()
                .rev()
                .take(47)
                .collect::<Vec<_>>()
                .into_iter()
                .rev()
                .collect();
            format!("...{tail}")
        } else {
            file_name.to_string()
        };
        self.file_pb.set_message(display_name);
    }

    fn inc_file(&mut self) {
        self.file_pb.inc(1);
    }

    fn finish(&mut self) {
        self.file_pb.finish_and_clear();
    }

    fn abandon(&mut self) {
        self.file_pb.abandon();
    }
}

/// Silent progress reporter for `--json` output
#[derive(Default)]
pub struct SilentProgressReporter;

impl ProgressReporter for SilentProgressReporter {
    fn update_file(&mut self, _file_name: &str) {}

    fn inc_file(&mut self) {}

    fn finish(&mut self) {}

    fn abandon(&mut self) {}
}
