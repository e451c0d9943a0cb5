//! Rejoin - merge, enrich and split train/test CSV files
//!
//! Two tables are stacked into one, each row tagged with the input it came
//! from (the `source_dataset` column). Calendar features can then be derived
//! from a datetime column once, for both inputs alike, and the combined table
//! is finally split back into one table per source.
//!
//! The core stages live in [`operations`] and never touch the file system;
//! [`commands`] wires them to CSV files and the terminal.

pub mod advisory;
pub mod cli;
pub mod commands;
pub mod common;
pub mod config;
pub mod domain;
pub mod error;
pub mod logging;
pub mod operations;
pub mod report;
pub mod ui;

#[cfg(test)]
mod test_fixtures;
