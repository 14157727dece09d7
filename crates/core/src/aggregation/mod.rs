//! Period-bucketed aggregation for charts.
//!
//! Every bucket in the requested range is generated first and then filled
//! from the grouped records, so empty days or months are reported as zero
//! instead of disappearing from the series.

pub mod float;
pub mod service;
pub mod types;


pub use service::BucketAggregator;
pub use types::{
    Bucket, BucketSeries, DAILY_THRESHOLD_DAYS, Granularity, MONTH_LABELS, Reducer, YearOverYear,
};
