//! Overview dashboard assembly.

use std::collections::BTreeMap;

use chrono::{Datelike, Days, NaiveDate};
use congregate_shared::config::DashboardConfig;
use rust_decimal::Decimal;

use super::types::{DashboardOverview, OverviewCards, ServiceSummary};
use crate::activity::{ActivityItem, ActivityMerger, ActivityQuery, ActivityStreams};
use crate::aggregation::BucketAggregator;
use crate::metrics::{average, giving_progress, percent_of, retention_rate};
use crate::period::DateRange;
use crate::ranking::RankingService;
use crate::records::{AttendanceRecord, MemberRecord};
use crate::source::RecordSource;

/// Days of activity shown when no filter is set.
const ACTIVITY_WINDOW_DAYS: u64 = 30;

/// Days covered by the service summary, the reference date included.
const SERVICE_WEEK_DAYS: u64 = 7;

/// Builds the overview dashboard.
pub struct DashboardService;

impl DashboardService {
    /// Builds the overview for `today`, optionally restricted to `filter`.
    pub fn overview<S: RecordSource>(
        source: &S,
        config: &DashboardConfig,
        filter: Option<DateRange>,
        today: NaiveDate,
    ) -> Result<DashboardOverview, S::Error> {
        let members = source.members()?;
        let cards = match &filter {
            Some(range) => Self::filtered_cards(source, config, range, &members)?,
            None => Self::current_cards(source, config, today, &members)?,
        };

        let current_year = filter.map_or_else(
            || DateRange::year_of(today),
            |range| DateRange::year_of(range.start()),
        );
        let chart_year = current_year.start().year();
        let both_years = current_year.years_earlier(1).union(&current_year);

        let attendance = source.attendance(&both_years)?;
        let finance = source.finance(&both_years)?;
        let expenses = source.expenses(&both_years)?;

        let service_summary = Self::service_summary(source, config, filter.as_ref(), today)?;
        let activity = Self::activity(source, config, filter, today)?;
        let top_parishes = RankingService::rank_parishes(
            &source.parishes()?,
            &finance,
            &members,
            &current_year,
            config.ranking_top_n,
            &config.default_location,
        );

        tracing::debug!(
            ?filter,
            chart_year,
            services = service_summary.len(),
            activity = activity.len(),
            parishes = top_parishes.len(),
            "Built overview dashboard"
        );

        Ok(DashboardOverview {
            filter,
            cards,
            chart_year,
            attendance_trend: BucketAggregator::year_over_year(&attendance, chart_year, |r| {
                Decimal::from(r.total())
            }),
            giving_trend: BucketAggregator::year_over_year(&finance, chart_year, |r| r.amount),
            expense_trend: BucketAggregator::year_over_year(&expenses, chart_year, |r| r.amount),
            service_summary,
            activity,
            top_parishes,
        })
    }

    fn filtered_cards<S: RecordSource>(
        source: &S,
        config: &DashboardConfig,
        range: &DateRange,
        members: &[MemberRecord],
    ) -> Result<OverviewCards, S::Error> {
        let attendance = source.attendance(range)?;
        let attendance: Vec<&AttendanceRecord> =
            attendance.iter().filter(|r| range.contains(r.date)).collect();
        let headcounts: Vec<Decimal> =
            attendance.iter().map(|r| Decimal::from(r.total())).collect();

        let giving: Decimal = source
            .finance(range)?
            .iter()
            .filter(|r| range.contains(r.date))
            .map(|r| r.amount)
            .sum();
        let total_impact = source
            .impacts(range)?
            .iter()
            .filter(|r| range.contains(r.date))
            .map(|r| u64::from(r.people_impacted))
            .sum();

        Ok(OverviewCards {
            total_attendance: attendance.iter().map(|r| r.total()).sum(),
            month_avg: average(&headcounts).trunc(),
            new_visitors: attendance.iter().map(|r| u64::from(r.first_timers)).sum(),
            giving: giving_progress(giving, config.weekly_giving_goal, Some(range)),
            retention_rate: retention_rate(members),
            total_members: members.len(),
            total_impact,
        })
    }

    fn current_cards<S: RecordSource>(
        source: &S,
        config: &DashboardConfig,
        today: NaiveDate,
        members: &[MemberRecord],
    ) -> Result<OverviewCards, S::Error> {
        let week_start = today
            .checked_sub_days(Days::new(u64::from(today.weekday().num_days_from_monday())))
            .unwrap_or(today);
        let this_week = DateRange::new(week_start, today).unwrap_or(DateRange::single_day(today));
        let this_month = DateRange::month_of(today);

        let total_attendance = match source.latest_attendance_date()? {
            Some(latest) => {
                let day = DateRange::single_day(latest);
                source
                    .attendance(&day)?
                    .iter()
                    .filter(|r| r.date == latest)
                    .map(AttendanceRecord::total)
                    .sum()
            }
            None => 0,
        };

        // Mean of per-day totals over the days that have records.
        let mut per_day: BTreeMap<NaiveDate, u64> = BTreeMap::new();
        for record in source.attendance(&this_month)? {
            if this_month.contains(record.date) {
                *per_day.entry(record.date).or_default() += record.total();
            }
        }
        let day_totals: Vec<Decimal> = per_day.values().copied().map(Decimal::from).collect();

        let new_visitors = source
            .attendance(&this_week)?
            .iter()
            .filter(|r| this_week.contains(r.date))
            .map(|r| u64::from(r.first_timers))
            .sum();
        let giving: Decimal = source
            .finance(&this_week)?
            .iter()
            .filter(|r| this_week.contains(r.date))
            .map(|r| r.amount)
            .sum();
        let total_impact = source
            .impacts(&DateRange::unbounded())?
            .iter()
            .map(|r| u64::from(r.people_impacted))
            .sum();

        Ok(OverviewCards {
            total_attendance,
            month_avg: average(&day_totals).trunc(),
            new_visitors,
            giving: giving_progress(giving, config.weekly_giving_goal, None),
            retention_rate: retention_rate(members),
            total_members: members.len(),
            total_impact,
        })
    }

    /// Services in the seven days ending at the reference date: the filter end
    /// when it is not after the latest recorded service, else that latest date.
    fn service_summary<S: RecordSource>(
        source: &S,
        config: &DashboardConfig,
        filter: Option<&DateRange>,
        today: NaiveDate,
    ) -> Result<Vec<ServiceSummary>, S::Error> {
        let latest = source.latest_attendance_date()?.unwrap_or(today);
        let reference = filter
            .map(DateRange::end)
            .filter(|end| *end <= latest)
            .unwrap_or(latest);
        let week = DateRange::trailing_days(reference, SERVICE_WEEK_DAYS - 1);

        let mut services: Vec<AttendanceRecord> = source
            .attendance(&week)?
            .into_iter()
            .filter(|r| week.contains(r.date))
            .collect();
        services.sort_by_key(|r| r.date);

        let capacity = Decimal::from(config.service_capacity);
        Ok(services
            .into_iter()
            .map(|record| {
                let count = record.total();
                let (medium, day, time) = match config.service_slot(&record.service) {
                    Some(slot) => (slot.medium.clone(), slot.day.clone(), slot.time.clone()),
                    None => (
                        "Physical".to_string(),
                        record.date.format("%A").to_string(),
                        "TBD".to_string(),
                    ),
                };
                ServiceSummary {
                    name: record.service,
                    date: record.date,
                    count,
                    percent: percent_of(Decimal::from(count), capacity),
                    medium,
                    day,
                    time,
                }
            })
            .collect())
    }

    fn activity<S: RecordSource>(
        source: &S,
        config: &DashboardConfig,
        filter: Option<DateRange>,
        today: NaiveDate,
    ) -> Result<Vec<ActivityItem>, S::Error> {
        let range =
            filter.unwrap_or_else(|| DateRange::trailing_days(today, ACTIVITY_WINDOW_DAYS));

        let finance = source.finance(&range)?;
        let expenses = source.expenses(&range)?;
        let attendance = source.attendance(&range)?;
        let impacts = source.impacts(&range)?;
        let streams = ActivityStreams {
            finance: &finance,
            expenses: &expenses,
            attendance: &attendance,
            impacts: &impacts,
        };
        let query = ActivityQuery::new(range)
            .with_limit(config.activity_limit)
            .with_per_stream_limit(config.activity_per_stream)
            .with_currency(config.currency);

        Ok(ActivityMerger::merge(&streams, &query))
    }
}
