//! Analytics report types.

use rust_decimal::Decimal;
use serde::Serialize;

use crate::aggregation::BucketSeries;
use crate::metrics::DistributionEntry;
use crate::period::ResolvedPeriod;

/// The analytics page for one period.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnalyticsReport {
    /// Resolved bounds and label.
    pub period: ResolvedPeriod,
    /// Members on the register, regardless of period.
    pub total_members: usize,
    /// Distinct families among members.
    pub total_families: usize,
    /// Mean headcount per service in the period, rounded.
    pub avg_attendance: Decimal,
    /// Income received in the period.
    pub total_income: Decimal,
    /// Attendance per bucket: daily sums, or monthly per-service averages rounded.
    pub attendance_chart: BucketSeries,
    /// Members per gender.
    pub gender: Vec<DistributionEntry>,
    /// Members per age bin.
    pub age_groups: Vec<DistributionEntry>,
    /// Members whose membership date falls in the period.
    pub new_members: usize,
    /// First timers recorded in the period.
    pub total_first_timers: u64,
    /// Monthly income against expenses.
    pub finance_chart: FinanceChart,
}

/// Income and expense bars sharing month labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FinanceChart {
    /// `Mon YYYY` labels.
    pub labels: Vec<String>,
    /// Income per month.
    #[serde(with = "crate::aggregation::float::series")]
    pub income: Vec<Decimal>,
    /// Expenses per month.
    #[serde(with = "crate::aggregation::float::series")]
    pub expense: Vec<Decimal>,
}
