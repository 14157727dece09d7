//! Ratio and goal helpers.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;
use crate::records::MemberRecord;

/// `part / whole * 100`, truncated; zero when `whole` is zero.
#[must_use]
pub fn percent_of(part: Decimal, whole: Decimal) -> Decimal {
    if whole.is_zero() {
        return Decimal::ZERO;
    }
    (part / whole * Decimal::ONE_HUNDRED).trunc()
}

/// Share of active members, truncated percent.
#[must_use]
pub fn retention_rate(members: &[MemberRecord]) -> Decimal {
    let active = members.iter().filter(|m| m.is_active()).count();
    percent_of(Decimal::from(active), Decimal::from(members.len()))
}

/// Arithmetic mean; zero for no values.
#[must_use]
pub fn average(values: &[Decimal]) -> Decimal {
    if values.is_empty() {
        return Decimal::ZERO;
    }
    values.iter().sum::<Decimal>() / Decimal::from(values.len())
}

/// Giving measured against the weekly goal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GivingProgress {
    /// Amount given.
    pub total: Decimal,
    /// Goal for the measured window.
    pub goal: Decimal,
    /// `total / goal`, truncated percent.
    pub percentage: Decimal,
}

/// Compares `total` against `weekly_goal`.
///
/// With an explicit range the goal is multiplied by the number of whole weeks
/// in `end - start`, with a minimum of one week.
#[must_use]
pub fn giving_progress(
    total: Decimal,
    weekly_goal: Decimal,
    range: Option<&DateRange>,
) -> GivingProgress {
    let weeks = range.map_or(1, |r| (r.span_days() / 7).max(1));
    let goal = weekly_goal * Decimal::from(weeks);

    GivingProgress {
        total,
        goal,
        percentage: percent_of(total, goal),
    }
}
