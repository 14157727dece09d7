//! Tests for member statistics.

use chrono::NaiveDate;
use rust_decimal_macros::dec;

use super::MemberStats;
use crate::records::{MemberRecord, MemberStatus, MemberType};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn member(created_on: NaiveDate, kind: MemberType, ministry: Option<&str>) -> MemberRecord {
    let mut member = MemberRecord::new("Test", "Member", created_on);
    member.member_type = kind;
    member.ministry = ministry.map(str::to_string);
    member
}

fn register() -> Vec<MemberRecord> {
    let mut members = vec![
        member(day(2025, 6, 3), MemberType::Guest, None),
        member(day(2025, 5, 30), MemberType::Guest, Some("Choir")),
        member(day(2025, 6, 10), MemberType::NewConvert, Some("Choir")),
        member(day(2024, 1, 1), MemberType::Worker, Some("Ushering")),
        member(day(2023, 1, 1), MemberType::Member, Some("Choir")),
        member(day(2023, 1, 1), MemberType::Member, Some("Media")),
    ];
    members[0].membership_date = Some(day(2025, 6, 3));
    members[2].membership_date = Some(day(2025, 2, 14));
    members[3].membership_date = Some(day(2024, 1, 1));
    members[4].membership_date = Some(day(2025, 2, 1));
    members[5].status = MemberStatus::Inactive;
    members
}

#[test]
fn test_cards() {
    let stats = MemberStats::compute(&register(), day(2025, 6, 20));

    assert_eq!(stats.cards.total, 6);
    assert_eq!(stats.cards.active, 5);
    assert_eq!(stats.cards.new_this_month, 1);
    assert_eq!(stats.cards.guests, 2);
    assert_eq!(stats.cards.workers, 1);

    assert_eq!(stats.list_cards.total_members, 6);
    assert_eq!(stats.list_cards.first_timers_month, 1);
    assert_eq!(stats.list_cards.new_converts_month, 1);
    assert_eq!(stats.list_cards.retention_rate, dec!(83));
}

#[test]
fn test_growth_covers_window_with_zero_months() {
    let stats = MemberStats::compute(&register(), day(2025, 6, 20));

    let points: Vec<(&str, u64)> = stats
        .growth
        .iter()
        .map(|p| (p.month.as_str(), p.count))
        .collect();
    assert_eq!(
        points,
        vec![
            ("2024-12", 0),
            ("2025-01", 0),
            ("2025-02", 2),
            ("2025-03", 0),
            ("2025-04", 0),
            ("2025-05", 0),
            ("2025-06", 1),
        ]
    );
}

#[test]
fn test_distributions() {
    let stats = MemberStats::compute(&register(), day(2025, 6, 20));

    assert_eq!(stats.type_distribution[0].label, "Guest");
    assert_eq!(stats.type_distribution[0].count, 2);
    assert_eq!(stats.status_distribution.len(), 2);
    assert_eq!(stats.status_distribution[1].label, "inactive");

    let ministries: Vec<(&str, u64)> = stats
        .ministry_distribution
        .iter()
        .map(|e| (e.label.as_str(), e.count))
        .collect();
    assert_eq!(
        ministries,
        vec![("Choir", 3), ("Unassigned", 1), ("Ushering", 1), ("Media", 1)]
    );
}

#[test]
fn test_empty_register() {
    let stats = MemberStats::compute(&[], day(2025, 6, 20));
    assert_eq!(stats.cards.total, 0);
    assert_eq!(stats.list_cards.retention_rate, dec!(0));
    assert!(stats.growth.iter().all(|p| p.count == 0));
    assert!(stats.ministry_distribution.is_empty());
}
