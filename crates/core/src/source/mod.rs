//! Record access.
//!
//! Services read through [`RecordSource`] so the host decides where records
//! live. [`Snapshot`] is the in-memory implementation used by the reporter
//! and by tests.

pub mod snapshot;


pub use snapshot::Snapshot;

use chrono::NaiveDate;

use crate::period::DateRange;
use crate::records::{
    AttendanceRecord, CommunityImpactRecord, ExpenseRecord, FinanceRecord, MemberRecord, Parish,
};

/// Read-only access to the record store.
///
/// Range queries may return records outside the range; callers filter again.
pub trait RecordSource {
    /// Failure raised by the underlying store.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Attendance records dated inside `range`.
    fn attendance(&self, range: &DateRange) -> Result<Vec<AttendanceRecord>, Self::Error>;

    /// Income records dated inside `range`.
    fn finance(&self, range: &DateRange) -> Result<Vec<FinanceRecord>, Self::Error>;

    /// Expense records dated inside `range`.
    fn expenses(&self, range: &DateRange) -> Result<Vec<ExpenseRecord>, Self::Error>;

    /// Community impact records dated inside `range`.
    fn impacts(&self, range: &DateRange) -> Result<Vec<CommunityImpactRecord>, Self::Error>;

    /// Every member on the register.
    fn members(&self) -> Result<Vec<MemberRecord>, Self::Error>;

    /// Every parish.
    fn parishes(&self) -> Result<Vec<Parish>, Self::Error>;

    /// Date of the most recent attendance record, if any.
    fn latest_attendance_date(&self) -> Result<Option<NaiveDate>, Self::Error>;
}
