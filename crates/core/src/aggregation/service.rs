//! Bucketed aggregation.

use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;

use super::types::{
    Accumulator, Bucket, BucketSeries, Granularity, MONTH_LABELS, Reducer, YearOverYear,
};
use crate::period::DateRange;
use crate::records::Dated;

/// Groups dated records into fixed-size time buckets.
pub struct BucketAggregator;

impl BucketAggregator {
    /// Aggregates `records` over `range`, choosing the granularity from the
    /// range length.
    ///
    /// Records outside `range` are ignored. Every day (or month) touching the
    /// range yields exactly one bucket, in ascending order.
    pub fn aggregate<R, F>(
        records: &[R],
        range: &DateRange,
        reducer: Reducer,
        selector: F,
    ) -> BucketSeries
    where
        R: Dated,
        F: Fn(&R) -> Decimal,
    {
        Self::aggregate_with(
            records,
            range,
            Granularity::for_range(range),
            reducer,
            selector,
        )
    }

    /// Same as [`aggregate`](Self::aggregate) with a forced granularity.
    pub fn aggregate_with<R, F>(
        records: &[R],
        range: &DateRange,
        granularity: Granularity,
        reducer: Reducer,
        selector: F,
    ) -> BucketSeries
    where
        R: Dated,
        F: Fn(&R) -> Decimal,
    {
        let mut groups: HashMap<NaiveDate, Accumulator> = HashMap::new();
        for record in records.iter().filter(|r| range.contains(r.date())) {
            groups
                .entry(granularity.bucket_start(record.date()))
                .or_default()
                .push(selector(record));
        }

        let buckets: Vec<Bucket> = granularity
            .bucket_starts(range)
            .into_iter()
            .map(|starts_on| Bucket {
                label: granularity.label(starts_on),
                starts_on,
                value: groups
                    .get(&starts_on)
                    .copied()
                    .unwrap_or_default()
                    .finish(reducer),
            })
            .collect();

        tracing::debug!(
            ?granularity,
            buckets = buckets.len(),
            grouped = groups.len(),
            "Aggregated records"
        );

        BucketSeries {
            granularity,
            buckets,
        }
    }

    /// Sums `selector` per calendar month of `year`; index 0 is January.
    pub fn monthly_totals<R, F>(records: &[R], year: i32, selector: F) -> [Decimal; 12]
    where
        R: Dated,
        F: Fn(&R) -> Decimal,
    {
        let mut totals = [Decimal::ZERO; 12];
        let Ok(range) = DateRange::calendar_year(year) else {
            return totals;
        };

        let series =
            Self::aggregate_with(records, &range, Granularity::Monthly, Reducer::Sum, selector);
        for bucket in series.buckets {
            if let Some(slot) = usize::try_from(bucket.starts_on.month0())
                .ok()
                .and_then(|idx| totals.get_mut(idx))
            {
                *slot = bucket.value;
            }
        }
        totals
    }

    /// Monthly totals for `reference_year` next to the year before it.
    pub fn year_over_year<R, F>(records: &[R], reference_year: i32, selector: F) -> YearOverYear
    where
        R: Dated,
        F: Fn(&R) -> Decimal,
    {
        let this_year = Self::monthly_totals(records, reference_year, &selector);
        let last_year = Self::monthly_totals(records, reference_year - 1, &selector);

        YearOverYear {
            labels: MONTH_LABELS.iter().map(ToString::to_string).collect(),
            years: [reference_year, reference_year - 1],
            this_year: this_year.to_vec(),
            last_year: last_year.to_vec(),
        }
    }
}
