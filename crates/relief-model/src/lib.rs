//! Shared types for the flood relief dataset: severity levels, district
//! records, resource needs and summary aggregates.

pub mod schema;
pub mod severity;

pub use schema::*;
pub use severity::*;
