//! Member statistics.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::aggregation::{BucketAggregator, Granularity, Reducer};
use crate::metrics::{DistributionEntry, distribution, retention_rate, top_distribution};
use crate::period::DateRange;
use crate::records::{Dated, MemberRecord, MemberType};

/// Days of membership growth charted.
pub const GROWTH_WINDOW_DAYS: u64 = 180;

/// Ministries listed in the ministry chart.
const TOP_MINISTRIES: usize = 5;

/// Label for members without a ministry.
const UNASSIGNED: &str = "Unassigned";

/// Header cards of the members page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberCards {
    /// Everyone on the register.
    pub total: usize,
    /// Active members.
    pub active: usize,
    /// Members whose membership date is in the current month.
    pub new_this_month: usize,
    /// Guests.
    pub guests: usize,
    /// Workers.
    pub workers: usize,
}

/// Cards above the member list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberListCards {
    /// Everyone on the register.
    pub total_members: usize,
    /// Guests created this month.
    pub first_timers_month: usize,
    /// New converts created this month.
    pub new_converts_month: usize,
    /// Active share, truncated percent.
    pub retention_rate: Decimal,
}

/// New members in one month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrowthPoint {
    /// `YYYY-MM`.
    pub month: String,
    /// Members whose membership date falls in the month.
    pub count: u64,
}

/// Everything the members pages chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberStats {
    /// Header cards.
    pub cards: MemberCards,
    /// List page cards.
    pub list_cards: MemberListCards,
    /// Monthly new members over the growth window, oldest first.
    pub growth: Vec<GrowthPoint>,
    /// Members per type.
    pub type_distribution: Vec<DistributionEntry>,
    /// Members per status.
    pub status_distribution: Vec<DistributionEntry>,
    /// Largest ministries.
    pub ministry_distribution: Vec<DistributionEntry>,
}

/// A membership start date.
struct Joined(NaiveDate);

impl Dated for Joined {
    fn date(&self) -> NaiveDate {
        self.0
    }
}

impl MemberStats {
    /// Computes the statistics as of `today`.
    #[must_use]
    pub fn compute(members: &[MemberRecord], today: NaiveDate) -> Self {
        let this_month = DateRange::month_of(today);
        let of_type = |kind: MemberType| members.iter().filter(move |m| m.member_type == kind);
        let created_this_month =
            |kind: MemberType| of_type(kind).filter(|m| m.created_in_month_of(today)).count();

        let cards = MemberCards {
            total: members.len(),
            active: members.iter().filter(|m| m.is_active()).count(),
            new_this_month: members
                .iter()
                .filter(|m| m.membership_date.is_some_and(|d| this_month.contains(d)))
                .count(),
            guests: of_type(MemberType::Guest).count(),
            workers: of_type(MemberType::Worker).count(),
        };

        let list_cards = MemberListCards {
            total_members: members.len(),
            first_timers_month: created_this_month(MemberType::Guest),
            new_converts_month: created_this_month(MemberType::NewConvert),
            retention_rate: retention_rate(members),
        };

        Self {
            cards,
            list_cards,
            growth: Self::growth(members, today),
            type_distribution: distribution(members, |m| m.member_type.label().to_string()),
            status_distribution: distribution(members, |m| m.status.as_str().to_string()),
            ministry_distribution: top_distribution(
                members,
                |m| m.ministry.clone().unwrap_or_else(|| UNASSIGNED.to_string()),
                TOP_MINISTRIES,
            ),
        }
    }

    fn growth(members: &[MemberRecord], today: NaiveDate) -> Vec<GrowthPoint> {
        let joined: Vec<Joined> = members
            .iter()
            .filter_map(|m| m.membership_date.map(Joined))
            .collect();
        let window = DateRange::trailing_days(today, GROWTH_WINDOW_DAYS);

        BucketAggregator::aggregate_with(
            &joined,
            &window,
            Granularity::Monthly,
            Reducer::Sum,
            |_| Decimal::ONE,
        )
        .buckets
        .into_iter()
        .map(|bucket| GrowthPoint {
            month: bucket.starts_on.format("%Y-%m").to_string(),
            count: u64::try_from(bucket.value).unwrap_or_default(),
        })
        .collect()
    }
}
