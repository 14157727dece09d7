//! Tests for KPI helpers.

use chrono::NaiveDate;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;
use crate::period::DateRange;
use crate::records::{AttendanceRecord, Gender, MemberRecord, MemberStatus};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[rstest]
#[case(dec!(0), dec!(0), dec!(0))]
#[case(dec!(5), dec!(0), dec!(0))]
#[case(dec!(1), dec!(3), dec!(33))]
#[case(dec!(2), dec!(3), dec!(66))]
#[case(dec!(150), dec!(100), dec!(150))]
fn test_percent_of_truncates(#[case] part: Decimal, #[case] whole: Decimal, #[case] expected: Decimal) {
    assert_eq!(percent_of(part, whole), expected);
}

#[test]
fn test_retention_rate() {
    let mut members: Vec<MemberRecord> = (0..3)
        .map(|_| MemberRecord::new("A", "B", day(2024, 1, 1)))
        .collect();
    members[2].status = MemberStatus::Inactive;

    assert_eq!(retention_rate(&members), dec!(66));
    assert_eq!(retention_rate(&[]), Decimal::ZERO);
}

#[test]
fn test_average() {
    assert_eq!(average(&[]), Decimal::ZERO);
    assert_eq!(average(&[dec!(1), dec!(2)]), dec!(1.5));
}

#[test]
fn test_giving_progress_scales_goal_by_weeks() {
    let weekly = dec!(50000);

    let this_week = giving_progress(dec!(25000), weekly, None);
    assert_eq!(this_week.goal, dec!(50000));
    assert_eq!(this_week.percentage, dec!(50));

    let four_weeks = DateRange::new(day(2025, 3, 1), day(2025, 3, 29)).unwrap();
    let progress = giving_progress(dec!(100000), weekly, Some(&four_weeks));
    assert_eq!(progress.goal, dec!(200000));
    assert_eq!(progress.percentage, dec!(50));

    let short = DateRange::new(day(2025, 3, 1), day(2025, 3, 3)).unwrap();
    assert_eq!(giving_progress(dec!(1), weekly, Some(&short)).goal, weekly);
}

#[rstest]
#[case(None, AgeGroup::Unknown)]
#[case(Some(0), AgeGroup::Children)]
#[case(Some(12), AgeGroup::Children)]
#[case(Some(13), AgeGroup::Youth)]
#[case(Some(19), AgeGroup::Youth)]
#[case(Some(20), AgeGroup::YoungAdults)]
#[case(Some(35), AgeGroup::YoungAdults)]
#[case(Some(36), AgeGroup::Adults)]
#[case(Some(55), AgeGroup::Adults)]
#[case(Some(56), AgeGroup::Seniors)]
fn test_age_group_bins(#[case] age: Option<i64>, #[case] expected: AgeGroup) {
    assert_eq!(AgeGroup::for_age(age), expected);
}

#[test]
fn test_age_distribution_lists_every_bin() {
    let today = day(2025, 6, 1);
    let mut child = MemberRecord::new("C", "D", today);
    child.date_of_birth = Some(day(2018, 1, 1));
    let unknown = MemberRecord::new("U", "K", today);

    let entries = age_distribution(&[child, unknown], today);

    assert_eq!(entries.len(), 6);
    assert_eq!(entries[0].label, "0-12 (Children)");
    assert_eq!(entries[0].count, 1);
    assert_eq!(entries[4].count, 0);
    assert_eq!(entries[5].label, "Unknown");
    assert_eq!(entries[5].count, 1);
}

#[test]
fn test_distribution_keeps_first_seen_order() {
    let labels = ["b", "a", "b", "c", "a", "b"];
    let entries = distribution(&labels, |l| (*l).to_string());

    let pairs: Vec<(&str, u64)> = entries.iter().map(|e| (e.label.as_str(), e.count)).collect();
    assert_eq!(pairs, vec![("b", 3), ("a", 2), ("c", 1)]);

    let top = top_distribution(&labels, |l| (*l).to_string(), 2);
    assert_eq!(top.len(), 2);
    assert_eq!(top[1].label, "a");
}

#[test]
fn test_gender_distribution_counts_unknown() {
    let mut female = MemberRecord::new("F", "A", day(2024, 1, 1));
    female.gender = Some(Gender::Female);
    let unknown = MemberRecord::new("U", "A", day(2024, 1, 1));

    let entries = gender_distribution(&[female, unknown]);
    assert_eq!(entries[0].label, "Female");
    assert_eq!(entries[1].label, "Unknown");
}

#[test]
fn test_attendance_stats() {
    let today = day(2025, 6, 20);
    let mut records = vec![
        AttendanceRecord::new(day(2025, 5, 4), "Sunday Service", 100, 0, 0),
        AttendanceRecord::new(day(2025, 5, 11), "SUNDAY Service", 200, 0, 0),
        AttendanceRecord::new(day(2025, 6, 1), "Sunday Service", 120, 20, 10),
        AttendanceRecord::new(day(2025, 6, 4), "Midweek Service", 50, 0, 5),
    ];
    for week in 0..15 {
        records.push(AttendanceRecord::new(
            day(2024, 1, 7) + chrono::Days::new(7 * week),
            "Sunday Service",
            1,
            0,
            0,
        ));
    }

    let stats = AttendanceStats::compute(&records, today);

    // Latest 12 Sundays: 100, 200, 150 and nine services of 1.
    assert_eq!(stats.avg_sunday, dec!(38));
    assert_eq!(stats.first_timers_month, 15);
    // June 205 vs May 300.
    assert_eq!(stats.growth_rate, dec!(-31.7));
    assert_eq!(stats.services_recorded, 19);
}

#[test]
fn test_attendance_growth_is_zero_without_last_month() {
    let records = vec![AttendanceRecord::new(day(2025, 6, 1), "Sunday Service", 10, 0, 0)];
    let stats = AttendanceStats::compute(&records, day(2025, 6, 2));
    assert_eq!(stats.growth_rate, Decimal::ZERO);
    assert_eq!(stats.avg_sunday, dec!(10));
}
