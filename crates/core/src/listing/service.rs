//! Listing service.

use congregate_shared::types::{PageRequest, PageResponse};

use super::types::{
    AttendanceFilter, AttendanceSortKey, MemberFilter, MemberSortKey, SortSpec,
};
use crate::records::{AttendanceRecord, MemberRecord};

/// Filters, sorts and paginates list screens.
pub struct ListingService;

impl ListingService {
    /// Member list page. Without a sort the rows keep the order of `members`.
    #[must_use]
    pub fn members(
        members: &[MemberRecord],
        filter: &MemberFilter,
        sort: Option<SortSpec<MemberSortKey>>,
        page: PageRequest,
    ) -> PageResponse<MemberRecord> {
        let mut rows: Vec<MemberRecord> =
            members.iter().filter(|m| filter.matches(m)).cloned().collect();
        if let Some(sort) = sort {
            rows.sort_by(|a, b| sort.apply(sort.key.compare(a, b)));
        }

        tracing::debug!(matched = rows.len(), page = page.page, "Listed members");
        PageResponse::paginate(rows, page)
    }

    /// Attendance list page. Without a sort the newest service comes first.
    #[must_use]
    pub fn attendance(
        records: &[AttendanceRecord],
        filter: &AttendanceFilter,
        sort: Option<SortSpec<AttendanceSortKey>>,
        page: PageRequest,
    ) -> PageResponse<AttendanceRecord> {
        let sort = sort.unwrap_or(SortSpec::descending(AttendanceSortKey::Date));
        let mut rows: Vec<AttendanceRecord> =
            records.iter().filter(|r| filter.matches(r)).cloned().collect();
        rows.sort_by(|a, b| sort.apply(sort.key.compare(a, b)));

        tracing::debug!(matched = rows.len(), page = page.page, "Listed attendance");
        PageResponse::paginate(rows, page)
    }
}
