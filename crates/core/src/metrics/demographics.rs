//! Label/count distributions and age bins.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::records::MemberRecord;

/// One slice of a pie or bar chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DistributionEntry {
    /// Slice label.
    pub label: String,
    /// Items in the slice.
    pub count: u64,
}

/// Counts `items` per `key`, labels in first-seen order.
pub fn distribution<T, F>(items: &[T], key: F) -> Vec<DistributionEntry>
where
    F: Fn(&T) -> String,
{
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut entries: Vec<DistributionEntry> = Vec::new();

    for item in items {
        let label = key(item);
        match index.get(&label) {
            Some(&at) => entries[at].count += 1,
            None => {
                index.insert(label.clone(), entries.len());
                entries.push(DistributionEntry { label, count: 1 });
            }
        }
    }
    entries
}

/// The `n` largest slices, largest first; ties keep first-seen order.
pub fn top_distribution<T, F>(items: &[T], key: F, n: usize) -> Vec<DistributionEntry>
where
    F: Fn(&T) -> String,
{
    let mut entries = distribution(items, key);
    entries.sort_by(|a, b| b.count.cmp(&a.count));
    entries.truncate(n);
    entries
}

/// Members per gender; members without one are counted as "Unknown".
#[must_use]
pub fn gender_distribution(members: &[MemberRecord]) -> Vec<DistributionEntry> {
    distribution(members, |m| {
        m.gender.map_or("Unknown", |g| g.label()).to_string()
    })
}

/// Age bins used by the demographics chart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeGroup {
    /// 0 to 12.
    Children,
    /// 13 to 19.
    Youth,
    /// 20 to 35.
    YoungAdults,
    /// 36 to 55.
    Adults,
    /// 56 and over.
    Seniors,
    /// No date of birth.
    Unknown,
}

impl AgeGroup {
    /// All bins in chart order.
    pub const ALL: [Self; 6] = [
        Self::Children,
        Self::Youth,
        Self::YoungAdults,
        Self::Adults,
        Self::Seniors,
        Self::Unknown,
    ];

    /// Bin for an age in whole years.
    #[must_use]
    pub const fn for_age(age: Option<i64>) -> Self {
        match age {
            None => Self::Unknown,
            Some(..=12) => Self::Children,
            Some(13..=19) => Self::Youth,
            Some(20..=35) => Self::YoungAdults,
            Some(36..=55) => Self::Adults,
            Some(_) => Self::Seniors,
        }
    }

    /// Chart label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Children => "0-12 (Children)",
            Self::Youth => "13-19 (Youth)",
            Self::YoungAdults => "20-35 (Young Adults)",
            Self::Adults => "36-55 (Adults)",
            Self::Seniors => "56+ (Seniors)",
            Self::Unknown => "Unknown",
        }
    }
}

/// Members per age bin as of `today`. Every bin is present, empty ones with zero.
#[must_use]
pub fn age_distribution(members: &[MemberRecord], today: NaiveDate) -> Vec<DistributionEntry> {
    let mut counts: HashMap<AgeGroup, u64> = HashMap::new();
    for member in members {
        *counts.entry(AgeGroup::for_age(member.age_on(today))).or_default() += 1;
    }

    AgeGroup::ALL
        .iter()
        .map(|group| DistributionEntry {
            label: group.label().to_string(),
            count: counts.get(group).copied().unwrap_or_default(),
        })
        .collect()
}
