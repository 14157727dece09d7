//! Ranking service.

use congregate_shared::types::ParishId;
use rust_decimal::Decimal;

use super::growth::growth_percent;
use super::types::{RankCandidate, RankedEntity};
use crate::period::DateRange;
use crate::records::{FinanceRecord, MemberRecord, Parish};

/// Ranks candidates by a metric and reports growth against a prior period.
pub struct RankingService;

impl RankingService {
    /// Scores every candidate over `current` and `prior`, sorts descending by
    /// the current primary metric and keeps the first `top_n`.
    ///
    /// The sort is stable: ties keep candidate order. Candidates without
    /// records stay in with zeros.
    pub fn rank<C, P, S>(
        candidates: &[C],
        primary: P,
        secondary: S,
        current: &DateRange,
        prior: &DateRange,
        top_n: usize,
        default_location: &str,
    ) -> Vec<RankedEntity>
    where
        C: RankCandidate,
        P: Fn(&C, &DateRange) -> Decimal,
        S: Fn(&C, &DateRange) -> Decimal,
    {
        let mut ranked: Vec<RankedEntity> = candidates
            .iter()
            .map(|candidate| {
                let now = primary(candidate, current);
                let before = primary(candidate, prior);
                let secondary_now = secondary(candidate, current);
                let secondary_before = secondary(candidate, prior);

                RankedEntity {
                    name: candidate.name().to_string(),
                    location: candidate
                        .location()
                        .filter(|l| !l.trim().is_empty())
                        .unwrap_or(default_location)
                        .to_string(),
                    current: now,
                    growth: growth_percent(now, before),
                    secondary: secondary_now,
                    secondary_growth: growth_percent(secondary_now, secondary_before),
                }
            })
            .collect();

        ranked.sort_by(|a, b| b.current.cmp(&a.current));
        ranked.truncate(top_n);

        tracing::debug!(
            candidates = candidates.len(),
            kept = ranked.len(),
            "Ranked candidates"
        );
        ranked
    }

    /// Parish performance: returns attributed to each parish over `current`
    /// against the same range a year earlier, with the cumulative member count
    /// (members created on or before the end of each range) as the secondary
    /// metric.
    pub fn rank_parishes(
        parishes: &[Parish],
        finance: &[FinanceRecord],
        members: &[MemberRecord],
        current: &DateRange,
        top_n: usize,
        default_location: &str,
    ) -> Vec<RankedEntity> {
        Self::rank(
            parishes,
            |parish, range| parish_returns(finance, parish.id, range),
            |parish, range| parish_members(members, parish.id, range),
            current,
            &current.years_earlier(1),
            top_n,
            default_location,
        )
    }
}

fn parish_returns(finance: &[FinanceRecord], parish: ParishId, range: &DateRange) -> Decimal {
    finance
        .iter()
        .filter(|r| r.parish_id == Some(parish) && range.contains(r.date))
        .map(|r| r.amount)
        .sum()
}

fn parish_members(members: &[MemberRecord], parish: ParishId, range: &DateRange) -> Decimal {
    let count = members
        .iter()
        .filter(|m| m.parish_id == Some(parish) && m.created_on <= range.end())
        .count();
    Decimal::from(count)
}
