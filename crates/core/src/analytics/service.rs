//! Analytics report assembly.

use std::collections::HashSet;

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};

use super::types::{AnalyticsReport, FinanceChart};
use crate::aggregation::{BucketAggregator, Granularity, Reducer};
use crate::metrics::{age_distribution, average, gender_distribution};
use crate::period::{PeriodRequest, PeriodResolver};
use crate::source::RecordSource;

/// Builds the analytics report.
pub struct AnalyticsService;

impl AnalyticsService {
    /// Resolves `request` against `today` and summarizes the period.
    ///
    /// The attendance chart sums per day on short periods and averages per
    /// service on monthly buckets. The finance chart is always monthly.
    pub fn report<S: RecordSource>(
        source: &S,
        request: &PeriodRequest,
        today: NaiveDate,
    ) -> Result<AnalyticsReport, S::Error> {
        let period = PeriodResolver::resolve(request, today);
        let range = period.range;

        let members = source.members()?;
        let mut attendance = source.attendance(&range)?;
        attendance.retain(|r| range.contains(r.date));
        let finance = source.finance(&range)?;
        let expenses = source.expenses(&range)?;

        let total_families = members
            .iter()
            .filter_map(|m| m.family_id)
            .collect::<HashSet<_>>()
            .len();

        let headcounts: Vec<Decimal> = attendance
            .iter()
            .map(|r| Decimal::from(r.total()))
            .collect();

        let granularity = Granularity::for_range(&range);
        let attendance_chart = match granularity {
            Granularity::Daily => BucketAggregator::aggregate_with(
                &attendance,
                &range,
                granularity,
                Reducer::Sum,
                |r| Decimal::from(r.total()),
            ),
            Granularity::Monthly => BucketAggregator::aggregate_with(
                &attendance,
                &range,
                granularity,
                Reducer::Average,
                |r| Decimal::from(r.total()),
            )
            .rounded(),
        };

        let income = BucketAggregator::aggregate_with(
            &finance,
            &range,
            Granularity::Monthly,
            Reducer::Sum,
            |r| r.amount,
        );
        let spent = BucketAggregator::aggregate_with(
            &expenses,
            &range,
            Granularity::Monthly,
            Reducer::Sum,
            |r| r.amount,
        );

        let report = AnalyticsReport {
            total_members: members.len(),
            total_families,
            avg_attendance: average(&headcounts)
                .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero),
            total_income: income.total(),
            attendance_chart,
            gender: gender_distribution(&members),
            age_groups: age_distribution(&members, today),
            new_members: members
                .iter()
                .filter(|m| m.membership_date.is_some_and(|d| range.contains(d)))
                .count(),
            total_first_timers: attendance.iter().map(|r| u64::from(r.first_timers)).sum(),
            finance_chart: FinanceChart {
                labels: income.labels(),
                income: income.values(),
                expense: spent.values(),
            },
            period,
        };

        tracing::debug!(
            label = %report.period.label,
            ?granularity,
            services = attendance.len(),
            "Built analytics report"
        );
        Ok(report)
    }
}
