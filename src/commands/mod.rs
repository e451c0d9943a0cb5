//! Command implementations for the rejoin CLI

pub mod completions;
pub mod features;
mod helpers;
pub mod interactive;
pub mod merge;
pub mod preview;
pub mod split;
pub mod version;
