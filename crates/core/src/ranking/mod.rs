//! Top-N ranking with period-over-period growth.

pub mod growth;
pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use growth::growth_percent;
pub use service::RankingService;
pub use types::{RankCandidate, RankedEntity};
