//! Tests for the analytics report.

use chrono::NaiveDate;
use congregate_shared::types::FamilyId;
use rust_decimal_macros::dec;

use super::AnalyticsService;
use crate::aggregation::Granularity;
use crate::period::{PeriodPreset, PeriodRequest};
use crate::records::{AttendanceRecord, ExpenseRecord, FinanceRecord, Gender, MemberRecord};
use crate::source::Snapshot;

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn snapshot() -> Snapshot {
    let family = FamilyId::new();
    let mut ada = MemberRecord::new("Ada", "Obi", day(2023, 1, 1));
    ada.family_id = Some(family);
    ada.gender = Some(Gender::Female);
    ada.date_of_birth = Some(day(1990, 5, 1));
    ada.membership_date = Some(day(2024, 3, 10));
    let mut obi = MemberRecord::new("Obi", "Obi", day(2023, 1, 1));
    obi.family_id = Some(family);
    obi.gender = Some(Gender::Male);
    obi.membership_date = Some(day(2025, 6, 1));
    let mut eze = MemberRecord::new("Eze", "Nwa", day(2024, 8, 1));
    eze.family_id = Some(FamilyId::new());

    Snapshot {
        attendance: vec![
            AttendanceRecord::new(day(2024, 3, 3), "Sunday Service", 100, 0, 3),
            AttendanceRecord::new(day(2024, 3, 10), "Sunday Service", 101, 0, 0),
            AttendanceRecord::new(day(2024, 7, 7), "Sunday Service", 90, 0, 1),
            AttendanceRecord::new(day(2025, 6, 1), "Sunday Service", 150, 0, 6),
            AttendanceRecord::new(day(2025, 6, 1), "Youth Night", 30, 0, 0),
        ],
        finance: vec![
            FinanceRecord::new(day(2024, 1, 14), "Tithe", dec!(1000)),
            FinanceRecord::new(day(2024, 12, 1), "Offering", dec!(250.50)),
            FinanceRecord::new(day(2025, 6, 1), "Tithe", dec!(700)),
        ],
        expenses: vec![ExpenseRecord::new(day(2024, 12, 5), "Utilities", dec!(90))],
        members: vec![ada, obi, eze],
        ..Snapshot::default()
    }
}

#[test]
fn test_previous_year_report_is_monthly() {
    let report = AnalyticsService::report(
        &snapshot(),
        &PeriodRequest::Preset(PeriodPreset::PreviousCalendarYear),
        day(2025, 6, 15),
    )
    .unwrap();

    assert_eq!(report.period.label, "2024 (Jan - Dec)");
    assert_eq!(report.total_members, 3);
    assert_eq!(report.total_families, 2);
    // (103 + 101 + 91) / 3
    assert_eq!(report.avg_attendance, dec!(98));
    assert_eq!(report.total_income, dec!(1250.50));
    assert_eq!(report.new_members, 1);
    assert_eq!(report.total_first_timers, 4);

    let chart = &report.attendance_chart;
    assert_eq!(chart.granularity, Granularity::Monthly);
    assert_eq!(chart.len(), 12);
    assert_eq!(chart.buckets[2].label, "Mar 2024");
    // Headcounts include first timers: (103 + 101) / 2
    assert_eq!(chart.buckets[2].value, dec!(102));
    assert_eq!(chart.buckets[6].value, dec!(91));
    assert_eq!(chart.buckets[0].value, dec!(0));

    let finance = &report.finance_chart;
    assert_eq!(finance.labels.len(), 12);
    assert_eq!(finance.income[0], dec!(1000));
    assert_eq!(finance.income[11], dec!(250.50));
    assert_eq!(finance.expense[11], dec!(90));
}

#[test]
fn test_short_period_report_is_daily() {
    let report = AnalyticsService::report(
        &snapshot(),
        &PeriodRequest::Preset(PeriodPreset::Last30Days),
        day(2025, 6, 15),
    )
    .unwrap();

    let chart = &report.attendance_chart;
    assert_eq!(chart.granularity, Granularity::Daily);
    assert_eq!(chart.len(), 31);
    let june_first = chart.buckets.iter().find(|b| b.label == "01 Jun").unwrap();
    // 156 + 30
    assert_eq!(june_first.value, dec!(186));

    assert_eq!(report.avg_attendance, dec!(93));
    assert_eq!(report.new_members, 1);
    // Finance stays monthly: May and June.
    assert_eq!(report.finance_chart.labels, vec!["May 2025", "Jun 2025"]);
    assert_eq!(report.finance_chart.income, vec![dec!(0), dec!(700)]);
}

#[test]
fn test_demographics() {
    let report = AnalyticsService::report(
        &snapshot(),
        &PeriodRequest::default(),
        day(2025, 6, 15),
    )
    .unwrap();

    let gender: Vec<(&str, u64)> = report
        .gender
        .iter()
        .map(|e| (e.label.as_str(), e.count))
        .collect();
    assert_eq!(gender, vec![("Female", 1), ("Male", 1), ("Unknown", 1)]);

    assert_eq!(report.age_groups[2].label, "20-35 (Young Adults)");
    assert_eq!(report.age_groups[2].count, 1);
    assert_eq!(report.age_groups[5].count, 2);
}
