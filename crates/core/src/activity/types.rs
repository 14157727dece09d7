//! Activity feed types.

use chrono::NaiveDate;
use congregate_shared::types::Currency;
use serde::{Deserialize, Serialize};

use crate::period::DateRange;
use crate::records::{AttendanceRecord, CommunityImpactRecord, ExpenseRecord, FinanceRecord};

/// Feed length used when the caller does not configure one.
pub const DEFAULT_ACTIVITY_LIMIT: usize = 10;

/// Which stream an item came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    /// Income received.
    Finance,
    /// Money spent.
    Expense,
    /// Service attendance.
    Attendance,
    /// Outreach event.
    Impact,
}

impl ActivityKind {
    /// Icon name rendered next to the item.
    #[must_use]
    pub const fn icon(self) -> &'static str {
        match self {
            Self::Finance => "banknote",
            Self::Expense => "credit-card",
            Self::Attendance => "users",
            Self::Impact => "heart",
        }
    }

    /// Accent color.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Self::Finance => "green",
            Self::Expense => "red",
            Self::Attendance => "blue",
            Self::Impact => "teal",
        }
    }
}

/// One row of the feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    /// Source stream.
    pub kind: ActivityKind,
    /// Day the activity happened.
    pub date: NaiveDate,
    /// Headline.
    pub title: String,
    /// Detail line.
    pub description: String,
    /// Icon name.
    pub icon: String,
    /// Accent color.
    pub color: String,
}

/// Borrowed record streams to merge.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActivityStreams<'a> {
    /// Income records.
    pub finance: &'a [FinanceRecord],
    /// Expense records.
    pub expenses: &'a [ExpenseRecord],
    /// Attendance records.
    pub attendance: &'a [AttendanceRecord],
    /// Community impact records.
    pub impacts: &'a [CommunityImpactRecord],
}

/// Window and caps for one merge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActivityQuery {
    /// Only records inside this range are considered.
    pub range: DateRange,
    /// Maximum items returned.
    pub limit: usize,
    /// Keep only this many of the newest records from each stream.
    pub per_stream_limit: Option<usize>,
    /// Currency for amount descriptions.
    pub currency: Currency,
}

impl ActivityQuery {
    /// A query over `range` with the default cap and no per-stream cap.
    #[must_use]
    pub const fn new(range: DateRange) -> Self {
        Self {
            range,
            limit: DEFAULT_ACTIVITY_LIMIT,
            per_stream_limit: None,
            currency: Currency::Usd,
        }
    }

    /// Sets the overall cap.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = limit;
        self
    }

    /// Sets the per-stream cap.
    #[must_use]
    pub const fn with_per_stream_limit(mut self, per_stream_limit: Option<usize>) -> Self {
        self.per_stream_limit = per_stream_limit;
        self
    }

    /// Sets the currency.
    #[must_use]
    pub const fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }
}
