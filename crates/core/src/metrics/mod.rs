//! KPI card helpers.
//!
//! Percentages here are truncated toward zero to whole numbers, matching the
//! way dashboard cards display them. Every ratio with a zero denominator is
//! reported as zero.

pub mod attendance;
pub mod demographics;
pub mod kpi;

#[cfg(test)]
mod tests;

pub use attendance::{AttendanceStats, SUNDAY_SAMPLE_SIZE};
pub use demographics::{
    AgeGroup, DistributionEntry, age_distribution, distribution, gender_distribution,
    top_distribution,
};
pub use kpi::{GivingProgress, average, giving_progress, percent_of, retention_rate};
