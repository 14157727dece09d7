//! In-memory record snapshot.

use std::convert::Infallible;
use std::io::Read;

use chrono::NaiveDate;
use congregate_shared::AppResult;
use serde::{Deserialize, Serialize};

use super::RecordSource;
use crate::period::DateRange;
use crate::records::{
    AttendanceRecord, CommunityImpactRecord, Dated, ExpenseRecord, FinanceRecord, MemberRecord,
    Parish,
};

/// Every record held in memory.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Snapshot {
    /// Attendance records.
    pub attendance: Vec<AttendanceRecord>,
    /// Income records.
    pub finance: Vec<FinanceRecord>,
    /// Expense records.
    pub expenses: Vec<ExpenseRecord>,
    /// Community impact records.
    pub impacts: Vec<CommunityImpactRecord>,
    /// Member register.
    pub members: Vec<MemberRecord>,
    /// Parishes.
    pub parishes: Vec<Parish>,
}

impl Snapshot {
    /// Reads a JSON snapshot. Missing collections are empty.
    pub fn from_reader<R: Read>(reader: R) -> AppResult<Self> {
        let snapshot: Self = serde_json::from_reader(reader)?;
        tracing::info!(
            attendance = snapshot.attendance.len(),
            finance = snapshot.finance.len(),
            expenses = snapshot.expenses.len(),
            impacts = snapshot.impacts.len(),
            members = snapshot.members.len(),
            parishes = snapshot.parishes.len(),
            "Loaded record snapshot"
        );
        Ok(snapshot)
    }
}

fn within<R: Dated + Clone>(records: &[R], range: &DateRange) -> Vec<R> {
    records
        .iter()
        .filter(|r| range.contains(r.date()))
        .cloned()
        .collect()
}

impl RecordSource for Snapshot {
    type Error = Infallible;

    fn attendance(&self, range: &DateRange) -> Result<Vec<AttendanceRecord>, Self::Error> {
        Ok(within(&self.attendance, range))
    }

    fn finance(&self, range: &DateRange) -> Result<Vec<FinanceRecord>, Self::Error> {
        Ok(within(&self.finance, range))
    }

    fn expenses(&self, range: &DateRange) -> Result<Vec<ExpenseRecord>, Self::Error> {
        Ok(within(&self.expenses, range))
    }

    fn impacts(&self, range: &DateRange) -> Result<Vec<CommunityImpactRecord>, Self::Error> {
        Ok(within(&self.impacts, range))
    }

    fn members(&self) -> Result<Vec<MemberRecord>, Self::Error> {
        Ok(self.members.clone())
    }

    fn parishes(&self) -> Result<Vec<Parish>, Self::Error> {
        Ok(self.parishes.clone())
    }

    fn latest_attendance_date(&self) -> Result<Option<NaiveDate>, Self::Error> {
        Ok(self.attendance.iter().map(|r| r.date).max())
    }
}
