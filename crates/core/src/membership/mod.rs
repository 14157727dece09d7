//! Member register statistics.

pub mod stats;

#[cfg(test)]
mod tests;

pub use stats::{GROWTH_WINDOW_DAYS, GrowthPoint, MemberCards, MemberListCards, MemberStats};
