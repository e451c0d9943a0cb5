//! Common utility modules for shared functionality across the codebase.

pub mod csv_codec;
pub mod fs;
