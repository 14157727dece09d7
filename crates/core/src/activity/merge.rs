//! Activity merging.

use congregate_shared::types::Money;

use super::types::{ActivityItem, ActivityKind, ActivityQuery, ActivityStreams};
use crate::records::Dated;

/// Builds the recent-activity feed.
pub struct ActivityMerger;

impl ActivityMerger {
    /// Merges the streams into one newest-first list of at most `query.limit` items.
    ///
    /// Streams are concatenated as finance, expense, attendance, impact before
    /// a stable sort, so same-day items keep that order.
    #[must_use]
    pub fn merge(streams: &ActivityStreams<'_>, query: &ActivityQuery) -> Vec<ActivityItem> {
        let mut items = Vec::new();

        items.extend(Self::recent(streams.finance, query).into_iter().map(|r| {
            Self::item(
                ActivityKind::Finance,
                r.date,
                format!("{} Received", r.category),
                format!("Amount: {}", Money::new(r.amount, query.currency)),
            )
        }));
        items.extend(Self::recent(streams.expenses, query).into_iter().map(|r| {
            Self::item(
                ActivityKind::Expense,
                r.date,
                format!("Expense: {}", r.category),
                format!("Amount: {}", Money::new(r.amount, query.currency)),
            )
        }));
        items.extend(Self::recent(streams.attendance, query).into_iter().map(|r| {
            Self::item(
                ActivityKind::Attendance,
                r.date,
                r.service.clone(),
                format!("Attendance: {}", r.total()),
            )
        }));
        items.extend(Self::recent(streams.impacts, query).into_iter().map(|r| {
            Self::item(
                ActivityKind::Impact,
                r.date,
                r.name.clone(),
                format!("Reached: {}", r.people_impacted),
            )
        }));

        items.sort_by(|a, b| b.date.cmp(&a.date));
        items.truncate(query.limit);

        tracing::debug!(items = items.len(), range = %query.range, "Merged activity feed");
        items
    }

    /// In-range records of one stream, newest first, capped per stream.
    fn recent<'a, R: Dated>(records: &'a [R], query: &ActivityQuery) -> Vec<&'a R> {
        let mut in_range: Vec<&R> = records
            .iter()
            .filter(|r| query.range.contains(r.date()))
            .collect();
        if let Some(cap) = query.per_stream_limit {
            in_range.sort_by_key(|r| std::cmp::Reverse(r.date()));
            in_range.truncate(cap);
        }
        in_range
    }

    fn item(
        kind: ActivityKind,
        date: chrono::NaiveDate,
        title: String,
        description: String,
    ) -> ActivityItem {
        ActivityItem {
            kind,
            date,
            title,
            description,
            icon: kind.icon().to_string(),
            color: kind.color().to_string(),
        }
    }
}
