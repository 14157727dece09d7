//! Sorted, filtered and paginated list screens.
//!
//! Sort columns and tabs are closed enums parsed from query strings, so an
//! unknown column is rejected instead of reaching the comparator.

pub mod error;
pub mod service;
pub mod types;


pub use error::ListingError;
pub use service::ListingService;
pub use types::{
    AttendanceFilter, AttendanceSortKey, AttendanceTab, MemberFilter, MemberSortKey, MemberTab,
    SortOrder, SortSpec,
};
