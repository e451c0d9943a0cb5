//! Version command implementation

use crate::config::PROVENANCE_COLUMN;
use crate::domain::CalendarFeature;
use crate::error::Result;

/// Run version command
pub fn run() -> Result<()> {
    println!("rejoin {}", env!("CARGO_PKG_VERSION"));
    println!();
    println!("Build info:");
    println!("  Rust version: {}", rustc_version());
    println!("  Profile: {}", build_profile());
    println!();
    println!("Data format:");
    println!("  Provenance column: {PROVENANCE_COLUMN}");
    println!("  Calendar features: {}", CalendarFeature::ALL.len());

    Ok(())
}

fn rustc_version() -> &'static str {
    env!("CARGO_PKG_RUST_VERSION")
}

fn build_profile() -> &'static str {
    if cfg!(debug_assertions) {
        "debug"
    } else {
        "release"
    }
}
