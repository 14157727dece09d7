//! Read-only record snapshots consumed by the aggregation layer.
//!
//! The records are owned by the data-access collaborator; this crate never
//! mutates or persists them.

pub mod types;

pub use types::*;
