//! The three core stages and the session that threads them together
//!
//! - [`merge`]: union two tables under a provenance tag
//! - [`features`]: append calendar features derived from a timestamp column
//! - [`split`]: partition a tagged table back into its sources
//! - [`session`]: explicit state carried between the stages
//!
//! All stages borrow their inputs and return fresh tables; nothing here does
//! I/O or prints.

pub mod features;
pub mod merge;
pub mod session;
pub mod split;

pub use features::{generate, parse_timestamp};
pub use merge::{MergeInput, Merged, check_schemas, merge};
pub use session::Session;
pub use split::{Split, SplitPart, split};
