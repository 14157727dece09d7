//! Tests for ranking and growth.

use chrono::NaiveDate;
use congregate_shared::types::ParishId;
use proptest::prelude::*;
use rstest::rstest;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::{RankCandidate, RankingService, growth_percent};
use crate::period::DateRange;
use crate::records::{FinanceRecord, MemberRecord, Parish};

fn day(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn parish(name: &str, address: Option<&str>) -> Parish {
    Parish {
        id: ParishId::new(),
        name: name.to_string(),
        address: address.map(str::to_string),
    }
}

#[rstest]
#[case(dec!(0), dec!(0), dec!(0))]
#[case(dec!(150), dec!(0), dec!(100))]
#[case(dec!(300), dec!(200), dec!(50))]
#[case(dec!(100), dec!(200), dec!(-50))]
#[case(dec!(0), dec!(200), dec!(-100))]
#[case(dec!(101), dec!(200), dec!(-50))]
#[case(dec!(1), dec!(3), dec!(-67))]
#[case(dec!(2), dec!(3), dec!(-33))]
#[case(dec!(5), dec!(-10), dec!(150))]
#[case(dec!(-5), dec!(0), dec!(0))]
fn test_growth_policy(#[case] current: Decimal, #[case] prior: Decimal, #[case] expected: Decimal) {
    assert_eq!(growth_percent(current, prior), expected);
}

#[rstest]
#[case(Decimal::MAX, dec!(0.5), Decimal::MAX)]
#[case(Decimal::MIN, dec!(1), Decimal::MIN)]
#[case(dec!(1), Decimal::new(1, 28), Decimal::MAX)]
#[case(Decimal::MAX, Decimal::MIN, dec!(100))]
fn test_growth_saturates_instead_of_overflowing(
    #[case] current: Decimal,
    #[case] prior: Decimal,
    #[case] expected: Decimal,
) {
    assert_eq!(growth_percent(current, prior), expected);
}

struct Team(&'static str);

impl RankCandidate for Team {
    fn name(&self) -> &str {
        self.0
    }
}

#[test]
fn test_rank_sorts_descending_and_truncates() {
    let teams = [Team("a"), Team("b"), Team("c"), Team("d")];
    let scores = |t: &Team, _: &DateRange| match t.0 {
        "a" => dec!(10),
        "b" => dec!(40),
        "c" => dec!(20),
        _ => dec!(30),
    };
    let range = DateRange::year_of(day(2025, 1, 1));

    let ranked = RankingService::rank(
        &teams,
        scores,
        |_, _| Decimal::ZERO,
        &range,
        &range.years_earlier(1),
        3,
        "Main Campus",
    );

    let names: Vec<&str> = ranked.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(names, vec!["b", "d", "c"]);
    assert!(ranked.iter().all(|r| r.location == "Main Campus"));
}

#[test]
fn test_rank_parishes() {
    let north = parish("North", Some("12 Hill Rd"));
    let south = parish("South", None);
    let quiet = parish("Quiet", Some("  "));
    let finance = vec![
        FinanceRecord::new(day(2025, 3, 1), "Returns", dec!(300)).for_parish(north.id),
        FinanceRecord::new(day(2024, 3, 1), "Returns", dec!(200)).for_parish(north.id),
        FinanceRecord::new(day(2025, 7, 9), "Returns", dec!(500)).for_parish(south.id),
        FinanceRecord::new(day(2025, 7, 9), "Offering", dec!(9000)),
    ];
    let mut members = Vec::new();
    for created in [day(2023, 5, 1), day(2024, 6, 1), day(2025, 2, 1)] {
        let mut member = MemberRecord::new("M", "N", created);
        member.parish_id = Some(north.id);
        members.push(member);
    }
    let mut late = MemberRecord::new("L", "T", day(2026, 1, 2));
    late.parish_id = Some(north.id);
    members.push(late);

    let ranked = RankingService::rank_parishes(
        &[north, south, quiet],
        &finance,
        &members,
        &DateRange::year_of(day(2025, 6, 1)),
        5,
        "Main Campus",
    );

    assert_eq!(ranked.len(), 3);

    assert_eq!(ranked[0].name, "South");
    assert_eq!(ranked[0].current, dec!(500));
    assert_eq!(ranked[0].growth, dec!(100));
    assert_eq!(ranked[0].location, "Main Campus");

    assert_eq!(ranked[1].name, "North");
    assert_eq!(ranked[1].location, "12 Hill Rd");
    assert_eq!(ranked[1].growth, dec!(50));
    assert_eq!(ranked[1].secondary, dec!(3));
    assert_eq!(ranked[1].secondary_growth, dec!(50));

    assert_eq!(ranked[2].name, "Quiet");
    assert_eq!(ranked[2].current, Decimal::ZERO);
    assert_eq!(ranked[2].growth, Decimal::ZERO);
    assert_eq!(ranked[2].location, "Main Campus");
}

proptest! {
    /// Output is sorted, capped, and ties keep input order.
    #[test]
    fn test_rank_is_stable(scores in prop::collection::vec(0i64..5, 0..12), top_n in 0usize..8) {
        let names: Vec<String> = (0..scores.len()).map(|i| format!("p{i}")).collect();
        let parishes: Vec<Parish> = names.iter().map(|n| parish(n, None)).collect();
        let range = DateRange::year_of(day(2025, 1, 1));

        let ranked = RankingService::rank(
            &parishes,
            |p: &Parish, _: &DateRange| {
                let idx = names.iter().position(|n| *n == p.name).unwrap();
                Decimal::from(scores[idx])
            },
            |_, _| Decimal::ZERO,
            &range,
            &range.years_earlier(1),
            top_n,
            "Main Campus",
        );

        prop_assert_eq!(ranked.len(), top_n.min(scores.len()));
        for pair in ranked.windows(2) {
            prop_assert!(pair[0].current >= pair[1].current);
            if pair[0].current == pair[1].current {
                let first: usize = pair[0].name[1..].parse().unwrap();
                let second: usize = pair[1].name[1..].parse().unwrap();
                prop_assert!(first < second);
            }
        }
    }
}
