//! Listing query types.

use std::cmp::Ordering;
use std::str::FromStr;

use crate::period::DateRange;
use crate::records::{AttendanceRecord, MemberRecord, MemberStatus, MemberType};

use super::error::ListingError;

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortOrder {
    /// Smallest first.
    #[default]
    Ascending,
    /// Largest first.
    Descending,
}

/// A sort column and direction, written `column` or `-column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SortSpec<K> {
    /// Column.
    pub key: K,
    /// Direction.
    pub order: SortOrder,
}

impl<K> SortSpec<K> {
    /// Ascending on `key`.
    #[must_use]
    pub const fn ascending(key: K) -> Self {
        Self {
            key,
            order: SortOrder::Ascending,
        }
    }

    /// Descending on `key`.
    #[must_use]
    pub const fn descending(key: K) -> Self {
        Self {
            key,
            order: SortOrder::Descending,
        }
    }

    /// Applies the direction to an ascending comparison.
    pub(crate) fn apply(&self, ordering: Ordering) -> Ordering {
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }
}

impl<K: FromStr<Err = ListingError>> FromStr for SortSpec<K> {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.strip_prefix('-') {
            Some(column) => Ok(Self::descending(column.parse()?)),
            None => Ok(Self::ascending(s.parse()?)),
        }
    }
}

/// Sortable member columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MemberSortKey {
    /// Register order.
    Id,
    /// First name.
    FirstName,
    /// Last name.
    LastName,
    /// Creation date.
    CreatedOn,
    /// Membership date; members without one sort first.
    MembershipDate,
    /// Status.
    Status,
}

impl MemberSortKey {
    pub(crate) fn compare(self, a: &MemberRecord, b: &MemberRecord) -> Ordering {
        match self {
            Self::Id => a.id.cmp(&b.id),
            Self::FirstName => a.first_name.to_lowercase().cmp(&b.first_name.to_lowercase()),
            Self::LastName => a.last_name.to_lowercase().cmp(&b.last_name.to_lowercase()),
            Self::CreatedOn => a.created_on.cmp(&b.created_on),
            Self::MembershipDate => a.membership_date.cmp(&b.membership_date),
            Self::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

impl FromStr for MemberSortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "id" => Ok(Self::Id),
            "first_name" => Ok(Self::FirstName),
            "last_name" => Ok(Self::LastName),
            "created_on" | "created_at" => Ok(Self::CreatedOn),
            "membership_date" => Ok(Self::MembershipDate),
            "status" => Ok(Self::Status),
            other => Err(ListingError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Sortable attendance columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttendanceSortKey {
    /// Service date.
    Date,
    /// Service label.
    Service,
    /// Total headcount.
    Total,
    /// First timers.
    FirstTimers,
}

impl AttendanceSortKey {
    pub(crate) fn compare(self, a: &AttendanceRecord, b: &AttendanceRecord) -> Ordering {
        match self {
            Self::Date => a.date.cmp(&b.date),
            Self::Service => a.service.cmp(&b.service),
            Self::Total => a.total().cmp(&b.total()),
            Self::FirstTimers => a.first_timers.cmp(&b.first_timers),
        }
    }
}

impl FromStr for AttendanceSortKey {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "date" => Ok(Self::Date),
            "service" | "service_type" => Ok(Self::Service),
            "total" | "total_count" => Ok(Self::Total),
            "first_timers" => Ok(Self::FirstTimers),
            other => Err(ListingError::UnknownSortKey(other.to_string())),
        }
    }
}

/// Attendance list tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AttendanceTab {
    /// Every service.
    #[default]
    All,
    /// Services whose label mentions Sunday.
    Sunday,
    /// Services whose label mentions Midweek.
    Midweek,
    /// Services whose label mentions Special.
    Special,
}

impl AttendanceTab {
    /// Whether a record belongs on this tab (case-insensitive label match).
    #[must_use]
    pub fn matches(self, record: &AttendanceRecord) -> bool {
        let needle = match self {
            Self::All => return true,
            Self::Sunday => "sunday",
            Self::Midweek => "midweek",
            Self::Special => "special",
        };
        record.service.to_lowercase().contains(needle)
    }
}

impl FromStr for AttendanceTab {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "all" => Ok(Self::All),
            "sunday" => Ok(Self::Sunday),
            "midweek" => Ok(Self::Midweek),
            "special" => Ok(Self::Special),
            _ => Err(ListingError::UnknownTab(s.to_string())),
        }
    }
}

/// Member list tabs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MemberTab {
    /// Everyone on the register.
    #[default]
    Members,
    /// Guests.
    FirstTimers,
    /// New converts.
    NewConverts,
}

impl MemberTab {
    /// Whether a member belongs on this tab.
    #[must_use]
    pub fn matches(self, member: &MemberRecord) -> bool {
        match self {
            Self::Members => true,
            Self::FirstTimers => member.member_type == MemberType::Guest,
            Self::NewConverts => member.member_type == MemberType::NewConvert,
        }
    }
}

impl FromStr for MemberTab {
    type Err = ListingError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "members" => Ok(Self::Members),
            "first_timers" => Ok(Self::FirstTimers),
            "new_converts" => Ok(Self::NewConverts),
            _ => Err(ListingError::UnknownTab(s.to_string())),
        }
    }
}

/// Member list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemberFilter {
    /// Case-insensitive match on first name, last name or email.
    pub search: Option<String>,
    /// Tab.
    pub tab: MemberTab,
    /// Exact status.
    pub status: Option<MemberStatus>,
    /// Exact ministry name.
    pub ministry: Option<String>,
}

impl MemberFilter {
    /// Whether `member` passes every filter.
    #[must_use]
    pub fn matches(&self, member: &MemberRecord) -> bool {
        self.tab.matches(member)
            && self.status.is_none_or(|status| member.status == status)
            && self
                .ministry
                .as_deref()
                .is_none_or(|ministry| member.ministry.as_deref() == Some(ministry))
            && self.search.as_deref().is_none_or(|term| search_matches(member, term))
    }
}

fn search_matches(member: &MemberRecord, term: &str) -> bool {
    let term = term.trim().to_lowercase();
    if term.is_empty() {
        return true;
    }
    [
        Some(member.first_name.as_str()),
        Some(member.last_name.as_str()),
        member.email.as_deref(),
    ]
    .into_iter()
    .flatten()
    .any(|field| field.to_lowercase().contains(&term))
}

/// Attendance list filters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttendanceFilter {
    /// Earliest date, inclusive.
    pub from: Option<chrono::NaiveDate>,
    /// Latest date, inclusive.
    pub to: Option<chrono::NaiveDate>,
    /// Tab; when unset, `service` applies instead.
    pub tab: Option<AttendanceTab>,
    /// Case-insensitive service label fragment.
    pub service: Option<String>,
}

impl AttendanceFilter {
    /// Restricts both ends to `range`.
    #[must_use]
    pub fn within(range: &DateRange) -> Self {
        Self {
            from: Some(range.start()),
            to: Some(range.end()),
            ..Self::default()
        }
    }

    /// Whether `record` passes every filter.
    #[must_use]
    pub fn matches(&self, record: &AttendanceRecord) -> bool {
        let in_dates = self.from.is_none_or(|from| record.date >= from)
            && self.to.is_none_or(|to| record.date <= to);
        let in_tab = match (self.tab, self.service.as_deref()) {
            (Some(tab), _) => tab.matches(record),
            (None, Some(fragment)) => record
                .service
                .to_lowercase()
                .contains(&fragment.trim().to_lowercase()),
            (None, None) => true,
        };
        in_dates && in_tab
    }
}
