//! Record data types.

use chrono::{Datelike, NaiveDate};
use congregate_shared::types::{FamilyId, MemberId, MinistryId, ParishId};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A record that belongs to a single calendar day.
pub trait Dated {
    /// The day the record is reported under.
    fn date(&self) -> NaiveDate;
}

/// Attendance headcount for one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AttendanceRecord {
    /// Service date.
    pub date: NaiveDate,
    /// Service label (e.g. "Sunday Service").
    pub service: String,
    /// Adults present.
    #[serde(default)]
    pub adults: u32,
    /// Children present.
    #[serde(default)]
    pub children: u32,
    /// First-time visitors.
    #[serde(default)]
    pub first_timers: u32,
    /// Parish the service belongs to.
    #[serde(default)]
    pub parish_id: Option<ParishId>,
    /// Ministry that ran the service.
    #[serde(default)]
    pub ministry_id: Option<MinistryId>,
}

impl AttendanceRecord {
    /// Creates a record with no parish or ministry reference.
    #[must_use]
    pub fn new(
        date: NaiveDate,
        service: impl Into<String>,
        adults: u32,
        children: u32,
        first_timers: u32,
    ) -> Self {
        Self {
            date,
            service: service.into(),
            adults,
            children,
            first_timers,
            parish_id: None,
            ministry_id: None,
        }
    }

    /// Total headcount: adults + children + first timers.
    #[must_use]
    pub fn total(&self) -> u64 {
        u64::from(self.adults) + u64::from(self.children) + u64::from(self.first_timers)
    }
}

/// Income received (tithes, offerings, pledges, ...).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FinanceRecord {
    /// Date received.
    pub date: NaiveDate,
    /// Income category.
    pub category: String,
    /// Amount received, never negative.
    pub amount: Decimal,
    /// Giving member.
    #[serde(default)]
    pub member_id: Option<MemberId>,
    /// Receiving ministry.
    #[serde(default)]
    pub ministry_id: Option<MinistryId>,
    /// Parish the returns are attributed to.
    #[serde(default)]
    pub parish_id: Option<ParishId>,
    /// Free-form note.
    #[serde(default)]
    pub description: Option<String>,
}

impl FinanceRecord {
    /// Creates an unattributed income record.
    #[must_use]
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            member_id: None,
            ministry_id: None,
            parish_id: None,
            description: None,
        }
    }

    /// Attributes the income to a parish.
    #[must_use]
    pub fn for_parish(mut self, parish_id: ParishId) -> Self {
        self.parish_id = Some(parish_id);
        self
    }
}

/// Money spent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExpenseRecord {
    /// Date spent.
    pub date: NaiveDate,
    /// Expense category (Maintenance, Salaries, Utilities, ...).
    pub category: String,
    /// Amount spent, never negative.
    pub amount: Decimal,
    /// Member who authorized the expense.
    #[serde(default)]
    pub authorized_by: Option<MemberId>,
    /// Free-form note.
    #[serde(default)]
    pub description: Option<String>,
}

impl ExpenseRecord {
    /// Creates an expense record.
    #[must_use]
    pub fn new(date: NaiveDate, category: impl Into<String>, amount: Decimal) -> Self {
        Self {
            date,
            category: category.into(),
            amount,
            authorized_by: None,
            description: None,
        }
    }
}

/// An outreach event and how many people it reached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommunityImpactRecord {
    /// Event date.
    pub date: NaiveDate,
    /// Event name (e.g. "Mobile Food Pantry").
    pub name: String,
    /// People reached.
    #[serde(default)]
    pub people_impacted: u32,
}

impl CommunityImpactRecord {
    /// Creates an impact record.
    #[must_use]
    pub fn new(date: NaiveDate, name: impl Into<String>, people_impacted: u32) -> Self {
        Self {
            date,
            name: name.into(),
            people_impacted,
        }
    }
}

/// Membership status.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    /// Regularly attending.
    #[default]
    Active,
    /// No longer attending.
    Inactive,
}

impl MemberStatus {
    /// Lowercase label used in distributions.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
        }
    }
}

/// Kind of person on the register.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MemberType {
    /// Full member.
    #[default]
    Member,
    /// Visitor, also counted as a first timer.
    Guest,
    /// Volunteer worker.
    Worker,
    /// Recently converted.
    NewConvert,
}

impl MemberType {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Member => "Member",
            Self::Guest => "Guest",
            Self::Worker => "Worker",
            Self::NewConvert => "New Convert",
        }
    }
}

/// Recorded gender.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Male.
    Male,
    /// Female.
    Female,
}

impl Gender {
    /// Display label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Male => "Male",
            Self::Female => "Female",
        }
    }
}

/// A person on the congregation register.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Member ID.
    pub id: MemberId,
    /// First name.
    pub first_name: String,
    /// Last name.
    pub last_name: String,
    /// Email address.
    #[serde(default)]
    pub email: Option<String>,
    /// Day the record was created.
    pub created_on: NaiveDate,
    /// Day the person became a member.
    #[serde(default)]
    pub membership_date: Option<NaiveDate>,
    /// Membership status.
    #[serde(default)]
    pub status: MemberStatus,
    /// Member type.
    #[serde(default)]
    pub member_type: MemberType,
    /// Gender.
    #[serde(default)]
    pub gender: Option<Gender>,
    /// Date of birth.
    #[serde(default)]
    pub date_of_birth: Option<NaiveDate>,
    /// Home parish.
    #[serde(default)]
    pub parish_id: Option<ParishId>,
    /// Ministry name.
    #[serde(default)]
    pub ministry: Option<String>,
    /// Family group.
    #[serde(default)]
    pub family_id: Option<FamilyId>,
}

impl MemberRecord {
    /// Creates an active member with only the required fields set.
    #[must_use]
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        created_on: NaiveDate,
    ) -> Self {
        Self {
            id: MemberId::new(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: None,
            created_on,
            membership_date: None,
            status: MemberStatus::Active,
            member_type: MemberType::Member,
            gender: None,
            date_of_birth: None,
            parish_id: None,
            ministry: None,
            family_id: None,
        }
    }

    /// Whether the member is active.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status == MemberStatus::Active
    }

    /// Age in whole years as of `today` (days / 365), if the birth date is known.
    #[must_use]
    pub fn age_on(&self, today: NaiveDate) -> Option<i64> {
        self.date_of_birth
            .map(|dob| today.signed_duration_since(dob).num_days().div_euclid(365))
    }

    /// Whether the member was created in the same month as `day`.
    #[must_use]
    pub fn created_in_month_of(&self, day: NaiveDate) -> bool {
        self.created_on.year() == day.year() && self.created_on.month() == day.month()
    }
}

/// A parish, the candidate unit of the performance ranking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parish {
    /// Parish ID.
    pub id: ParishId,
    /// Parish name.
    pub name: String,
    /// Street address.
    #[serde(default)]
    pub address: Option<String>,
}

impl<T: Dated> Dated for &T {
    fn date(&self) -> NaiveDate {
        (**self).date()
    }
}

impl Dated for AttendanceRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for FinanceRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for ExpenseRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

impl Dated for CommunityImpactRecord {
    fn date(&self) -> NaiveDate {
        self.date
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_attendance_total_is_sum_of_counts() {
        let record = AttendanceRecord::new(day(2025, 3, 2), "Sunday Service", 120, 40, 7);
        assert_eq!(record.total(), 167);
    }

    #[test]
    fn test_member_age() {
        let mut member = MemberRecord::new("Ada", "Obi", day(2020, 1, 1));
        assert_eq!(member.age_on(day(2025, 1, 1)), None);

        member.date_of_birth = Some(day(2000, 6, 15));
        assert_eq!(member.age_on(day(2025, 6, 20)), Some(25));
    }

    #[test]
    fn test_member_deserializes_with_defaults() {
        let json = r#"{
            "id": "0191b6a4-6a5e-7c1a-9f3e-2b7d4c1e8a90",
            "first_name": "Grace",
            "last_name": "Eze",
            "created_on": "2024-02-10",
            "member_type": "new_convert"
        }"#;
        let member: MemberRecord = serde_json::from_str(json).unwrap();
        assert_eq!(member.status, MemberStatus::Active);
        assert_eq!(member.member_type, MemberType::NewConvert);
        assert!(member.membership_date.is_none());
    }
}
