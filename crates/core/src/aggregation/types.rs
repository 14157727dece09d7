//! Aggregation data types.

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;

/// Ranges spanning at most this many days are bucketed by day.
pub const DAILY_THRESHOLD_DAYS: i64 = 90;

/// Month abbreviations, January first.
pub const MONTH_LABELS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Size of one bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One bucket per calendar day.
    Daily,
    /// One bucket per calendar month.
    Monthly,
}

impl Granularity {
    /// Daily when `end - start` is at most [`DAILY_THRESHOLD_DAYS`], monthly otherwise.
    #[must_use]
    pub fn for_range(range: &DateRange) -> Self {
        if range.span_days() <= DAILY_THRESHOLD_DAYS {
            Self::Daily
        } else {
            Self::Monthly
        }
    }

    /// First day of the bucket containing `date`.
    #[must_use]
    pub fn bucket_start(self, date: NaiveDate) -> NaiveDate {
        match self {
            Self::Daily => date,
            Self::Monthly => date.with_day(1).unwrap_or(date),
        }
    }

    /// Chart label for the bucket starting at `start`: `05 Mar` or `Mar 2025`.
    #[must_use]
    pub fn label(self, start: NaiveDate) -> String {
        match self {
            Self::Daily => start.format("%d %b").to_string(),
            Self::Monthly => start.format("%b %Y").to_string(),
        }
    }

    /// Start dates of every bucket touching `range`, ascending.
    #[must_use]
    pub fn bucket_starts(self, range: &DateRange) -> Vec<NaiveDate> {
        match self {
            Self::Daily => {
                let days = usize::try_from(range.num_days()).unwrap_or_default();
                range.start().iter_days().take(days).collect()
            }
            Self::Monthly => {
                let last = self.bucket_start(range.end());
                let mut current = self.bucket_start(range.start());
                let mut starts = Vec::new();
                while current <= last {
                    starts.push(current);
                    match current.checked_add_months(chrono::Months::new(1)) {
                        Some(next) => current = next,
                        None => break,
                    }
                }
                starts
            }
        }
    }
}

/// How the values inside one bucket are combined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reducer {
    /// Total of the values (money, headcounts).
    Sum,
    /// Mean of the values (rates, per-service averages).
    Average,
}

/// Running total for one bucket.
#[derive(Debug, Clone, Copy, Default)]
pub(crate) struct Accumulator {
    sum: Decimal,
    count: u32,
}

impl Accumulator {
    pub(crate) fn push(&mut self, value: Decimal) {
        self.sum += value;
        self.count += 1;
    }

    /// Empty buckets reduce to zero for both reducers.
    pub(crate) fn finish(self, reducer: Reducer) -> Decimal {
        match reducer {
            Reducer::Sum => self.sum,
            Reducer::Average if self.count == 0 => Decimal::ZERO,
            Reducer::Average => self.sum / Decimal::from(self.count),
        }
    }
}

/// One time slot of a chart series.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bucket {
    /// Display label.
    pub label: String,
    /// First day of the slot.
    pub starts_on: NaiveDate,
    /// Aggregated value, zero when no records fell in the slot.
    #[serde(with = "rust_decimal::serde::float")]
    pub value: Decimal,
}

/// Ordered buckets covering a whole range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketSeries {
    /// Bucket size.
    pub granularity: Granularity,
    /// Buckets in ascending date order.
    pub buckets: Vec<Bucket>,
}

impl BucketSeries {
    /// Labels in order.
    #[must_use]
    pub fn labels(&self) -> Vec<String> {
        self.buckets.iter().map(|b| b.label.clone()).collect()
    }

    /// Values in order.
    #[must_use]
    pub fn values(&self) -> Vec<Decimal> {
        self.buckets.iter().map(|b| b.value).collect()
    }

    /// Sum of all bucket values.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.buckets.iter().map(|b| b.value).sum()
    }

    /// Number of buckets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.buckets.len()
    }

    /// Whether the series has no buckets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buckets.is_empty()
    }

    /// Rounds every value to whole numbers (half away from zero).
    #[must_use]
    pub fn rounded(mut self) -> Self {
        for bucket in &mut self.buckets {
            bucket.value = bucket
                .value
                .round_dp_with_strategy(0, rust_decimal::RoundingStrategy::MidpointAwayFromZero);
        }
        self
    }
}

/// January to December totals for a year next to the year before it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearOverYear {
    /// Month labels, `Jan` to `Dec`.
    pub labels: Vec<String>,
    /// `[reference_year, reference_year - 1]`.
    pub years: [i32; 2],
    /// Monthly totals for the reference year; index 0 is January.
    #[serde(with = "super::float::series")]
    pub this_year: Vec<Decimal>,
    /// Monthly totals for the year before.
    #[serde(with = "super::float::series")]
    pub last_year: Vec<Decimal>,
}
