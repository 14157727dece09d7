//! Period analytics report.
//!
//! Resolves a period request and summarizes membership, attendance and
//! finance for it.

pub mod service;
pub mod types;

#[cfg(test)]
mod tests;

pub use service::AnalyticsService;
pub use types::{AnalyticsReport, FinanceChart};
