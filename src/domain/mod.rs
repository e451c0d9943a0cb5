//! Domain models for rejoin
//!
//! Pure data types: tables, provenance tags, column schemas and the calendar
//! feature menu. No I/O happens here.

pub mod calendar;
pub mod provenance;
pub mod schema;
pub mod table;

pub use calendar::{CalendarFeature, FeatureSet};
pub use provenance::{CombinedTable, SourceDomain, SourceId};
pub use schema::ColumnSchema;
pub use table::{Cell, Column, Table};
