//! Dashboard data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::activity::ActivityItem;
use crate::aggregation::YearOverYear;
use crate::metrics::GivingProgress;
use crate::period::DateRange;
use crate::ranking::RankedEntity;

/// Everything the overview page renders.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardOverview {
    /// Filter the cards were computed for, if any.
    pub filter: Option<DateRange>,
    /// KPI cards.
    pub cards: OverviewCards,
    /// Year shown by the trend charts.
    pub chart_year: i32,
    /// Monthly attendance, chart year against the year before.
    pub attendance_trend: YearOverYear,
    /// Monthly giving, chart year against the year before.
    pub giving_trend: YearOverYear,
    /// Monthly expenses, chart year against the year before.
    pub expense_trend: YearOverYear,
    /// Services held in the summary week.
    pub service_summary: Vec<ServiceSummary>,
    /// Recent activity feed.
    pub activity: Vec<ActivityItem>,
    /// Parish performance ranking for the chart year.
    pub top_parishes: Vec<RankedEntity>,
}

/// Top-row KPI cards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverviewCards {
    /// Headcount in the filter, or at the latest recorded service date.
    pub total_attendance: u64,
    /// Mean headcount, truncated.
    pub month_avg: Decimal,
    /// First timers in the filter, or since Monday.
    pub new_visitors: u64,
    /// Giving in the filter, or since Monday, against the goal.
    pub giving: GivingProgress,
    /// Active members as a percentage of all members.
    pub retention_rate: Decimal,
    /// Members on the register.
    pub total_members: usize,
    /// People reached in the filter, or ever.
    pub total_impact: u64,
}

/// One row of the weekly service table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceSummary {
    /// Service label.
    pub name: String,
    /// Service date.
    pub date: NaiveDate,
    /// Headcount.
    pub count: u64,
    /// Headcount as a truncated percentage of capacity.
    pub percent: Decimal,
    /// Where the service is held.
    pub medium: String,
    /// Day of the week.
    pub day: String,
    /// Start time.
    pub time: String,
}
