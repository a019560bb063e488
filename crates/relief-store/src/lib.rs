//! In-memory district dataset and the aggregates computed over it.

pub mod store;
pub mod summary;

pub use store::*;
pub use summary::*;
