//! Dashboard aggregation logic for Congregate.
//!
//! This crate turns raw congregation records into chart- and card-ready
//! numbers. It has ZERO web or database dependencies: records arrive through
//! the [`source::RecordSource`] trait and every computation is a pure function
//! of those records and a resolved period.
//!
//! # Modules
//!
//! - `records` - Attendance, finance, expense, member and impact records
//! - `period` - Period presets and explicit date ranges
//! - `aggregation` - Zero-filled daily/monthly buckets and year-over-year totals
//! - `activity` - Merged recent-activity feed
//! - `ranking` - Top-N ranking with growth percentages
//! - `metrics` - KPI ratios, distributions and attendance cards
//! - `dashboard` - Overview dashboard
//! - `analytics` - Period analytics report
//! - `membership` - Member register statistics
//! - `listing` - Sorted, filtered, paginated list screens
//! - `source` - Record access trait and in-memory snapshot

pub mod activity;
pub mod aggregation;
pub mod analytics;
pub mod dashboard;
pub mod listing;
pub mod membership;
pub mod metrics;
pub mod period;
pub mod ranking;
pub mod records;
pub mod source;
