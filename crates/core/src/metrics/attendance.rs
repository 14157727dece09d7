//! Attendance page cards.

use chrono::NaiveDate;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

use super::kpi::average;
use crate::listing::AttendanceTab;
use crate::period::DateRange;
use crate::records::AttendanceRecord;

/// Number of recent Sunday services averaged.
pub const SUNDAY_SAMPLE_SIZE: usize = 12;

/// Summary cards above the attendance list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceStats {
    /// Mean headcount of the latest Sunday services, truncated.
    pub avg_sunday: Decimal,
    /// First timers recorded this month.
    pub first_timers_month: u64,
    /// Percent change of this month's headcount against last month's, one decimal.
    pub growth_rate: Decimal,
    /// Services on record.
    pub services_recorded: usize,
}

impl AttendanceStats {
    /// Computes the cards for the month containing `today`.
    #[must_use]
    pub fn compute(records: &[AttendanceRecord], today: NaiveDate) -> Self {
        let mut sundays: Vec<&AttendanceRecord> = records
            .iter()
            .filter(|r| AttendanceTab::Sunday.matches(r))
            .collect();
        sundays.sort_by_key(|r| std::cmp::Reverse(r.date));
        let sunday_totals: Vec<Decimal> = sundays
            .iter()
            .take(SUNDAY_SAMPLE_SIZE)
            .map(|r| Decimal::from(r.total()))
            .collect();

        let this_month = DateRange::month_of(today);
        let last_month = this_month
            .start()
            .pred_opt()
            .map_or(this_month, DateRange::month_of);

        let headcount = |range: &DateRange| -> u64 {
            records
                .iter()
                .filter(|r| range.contains(r.date))
                .map(AttendanceRecord::total)
                .sum()
        };
        let current = headcount(&this_month);
        let previous = headcount(&last_month);

        let growth_rate = if previous == 0 {
            Decimal::ZERO
        } else {
            ((Decimal::from(current) - Decimal::from(previous)) / Decimal::from(previous)
                * Decimal::ONE_HUNDRED)
                .round_dp_with_strategy(1, RoundingStrategy::MidpointAwayFromZero)
        };

        Self {
            avg_sunday: average(&sunday_totals).trunc(),
            first_timers_month: records
                .iter()
                .filter(|r| this_month.contains(r.date))
                .map(|r| u64::from(r.first_timers))
                .sum(),
            growth_rate,
            services_recorded: records.len(),
        }
    }
}
