//! Period data types.

use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, Days, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::PeriodError;

/// Date format accepted from query strings.
pub const QUERY_DATE_FORMAT: &str = "%Y-%m-%d";

/// Inclusive calendar date range. `start <= end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct DateRange {
    start: NaiveDate,
    end: NaiveDate,
}

impl DateRange {
    /// Creates a range, rejecting `start > end`.
    pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, PeriodError> {
        if start > end {
            return Err(PeriodError::InvalidRange { start, end });
        }
        Ok(Self { start, end })
    }

    /// A range covering exactly one day.
    #[must_use]
    pub const fn single_day(day: NaiveDate) -> Self {
        Self {
            start: day,
            end: day,
        }
    }

    /// Every representable date.
    #[must_use]
    pub const fn unbounded() -> Self {
        Self {
            start: NaiveDate::MIN,
            end: NaiveDate::MAX,
        }
    }

    /// January 1 to December 31 of `year`.
    pub fn calendar_year(year: i32) -> Result<Self, PeriodError> {
        let start =
            NaiveDate::from_ymd_opt(year, 1, 1).ok_or(PeriodError::YearOutOfRange(year))?;
        let end =
            NaiveDate::from_ymd_opt(year, 12, 31).ok_or(PeriodError::YearOutOfRange(year))?;
        Ok(Self { start, end })
    }

    /// January 1 to December 31 of the year containing `day`.
    #[must_use]
    pub fn year_of(day: NaiveDate) -> Self {
        Self {
            start: day.with_ordinal(1).unwrap_or(day),
            end: NaiveDate::from_ymd_opt(day.year(), 12, 31).unwrap_or(day),
        }
    }

    /// First to last day of the month containing `day`.
    #[must_use]
    pub fn month_of(day: NaiveDate) -> Self {
        let start = day.with_day(1).unwrap_or(day);
        let end = start
            .checked_add_months(chrono::Months::new(1))
            .and_then(|next| next.pred_opt())
            .unwrap_or(day);
        Self { start, end }
    }

    /// `today - days` through `today`.
    #[must_use]
    pub fn trailing_days(today: NaiveDate, days: u64) -> Self {
        let start = today.checked_sub_days(Days::new(days)).unwrap_or(NaiveDate::MIN);
        Self { start, end: today }
    }

    /// Parses a `YYYY-MM-DD` pair; `None` unless both parse and are ordered.
    #[must_use]
    pub fn parse_pair(start: Option<&str>, end: Option<&str>) -> Option<Self> {
        let start = parse_date(start?).ok()?;
        let end = parse_date(end?).ok()?;
        Self::new(start, end).ok()
    }

    /// First day.
    #[must_use]
    pub const fn start(&self) -> NaiveDate {
        self.start
    }

    /// Last day (inclusive).
    #[must_use]
    pub const fn end(&self) -> NaiveDate {
        self.end
    }

    /// Whether `date` falls inside the range, both ends included.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// `end - start` in days; zero for a single-day range.
    #[must_use]
    pub fn span_days(&self) -> i64 {
        self.end.signed_duration_since(self.start).num_days()
    }

    /// Number of calendar days covered, both ends included.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        self.span_days() + 1
    }

    /// The same range shifted back by whole years (Feb 29 maps to Feb 28).
    #[must_use]
    pub fn years_earlier(&self, years: u32) -> Self {
        let shift = |date: NaiveDate| {
            date.checked_sub_months(chrono::Months::new(12 * years))
                .unwrap_or(NaiveDate::MIN)
        };
        Self {
            start: shift(self.start),
            end: shift(self.end),
        }
    }

    /// Smallest range covering both `self` and `other`.
    #[must_use]
    pub fn union(&self, other: &Self) -> Self {
        Self {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl fmt::Display for DateRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} - {}",
            self.start.format("%d %b %Y"),
            self.end.format("%d %b %Y")
        )
    }
}

/// Parses a `YYYY-MM-DD` date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, PeriodError> {
    NaiveDate::parse_from_str(raw.trim(), QUERY_DATE_FORMAT)
        .map_err(|_| PeriodError::InvalidDate(raw.to_string()))
}

/// Named reporting windows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PeriodPreset {
    /// Today and the 30 days before it.
    Last30Days,
    /// Today and the 90 days before it.
    Last3Months,
    /// Today and the 180 days before it.
    Last6Months,
    /// Today and the 365 days before it.
    Last12Months,
    /// January 1 of this year through today.
    YearToDate,
    /// January 1 through December 31 of last year.
    #[default]
    PreviousCalendarYear,
}

impl PeriodPreset {
    /// All presets in menu order.
    pub const ALL: [Self; 6] = [
        Self::Last30Days,
        Self::Last3Months,
        Self::Last6Months,
        Self::Last12Months,
        Self::YearToDate,
        Self::PreviousCalendarYear,
    ];

    /// Canonical name.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Last30Days => "last_30_days",
            Self::Last3Months => "last_3_months",
            Self::Last6Months => "last_6_months",
            Self::Last12Months => "last_12_months",
            Self::YearToDate => "year_to_date",
            Self::PreviousCalendarYear => "previous_calendar_year",
        }
    }
}

impl fmt::Display for PeriodPreset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PeriodPreset {
    type Err = PeriodError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "last_30_days" | "1m" => Ok(Self::Last30Days),
            "last_3_months" | "3m" => Ok(Self::Last3Months),
            "last_6_months" | "6m" => Ok(Self::Last6Months),
            "last_12_months" | "12m" => Ok(Self::Last12Months),
            "year_to_date" | "ytd" => Ok(Self::YearToDate),
            "previous_calendar_year" | "last_year" => Ok(Self::PreviousCalendarYear),
            _ => Err(PeriodError::UnknownPreset(s.to_string())),
        }
    }
}

/// What the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodRequest {
    /// A named preset.
    Preset(PeriodPreset),
    /// Explicit inclusive bounds.
    Range(DateRange),
}

impl Default for PeriodRequest {
    fn default() -> Self {
        Self::Preset(PeriodPreset::default())
    }
}

impl PeriodRequest {
    /// Builds a request from explicit dates, falling back to the default
    /// preset when `start > end`.
    #[must_use]
    pub fn explicit(start: NaiveDate, end: NaiveDate) -> Self {
        match DateRange::new(start, end) {
            Ok(range) => Self::Range(range),
            Err(err) => {
                tracing::warn!(error = %err, "Explicit period rejected, using default preset");
                Self::default()
            }
        }
    }

    /// Builds a request from raw query values.
    ///
    /// A complete, valid start/end pair wins; otherwise a recognized preset;
    /// otherwise the default preset.
    #[must_use]
    pub fn from_query(start: Option<&str>, end: Option<&str>, preset: Option<&str>) -> Self {
        if let Some(range) = DateRange::parse_pair(start, end) {
            return Self::Range(range);
        }
        if start.is_some() || end.is_some() {
            tracing::warn!(?start, ?end, "Ignoring malformed explicit period");
        }

        match preset.map(str::parse::<PeriodPreset>) {
            Some(Ok(preset)) => Self::Preset(preset),
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Unrecognized period preset, using default");
                Self::default()
            }
            None => Self::default(),
        }
    }
}

/// Concrete bounds and label for a request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedPeriod {
    /// Preset that produced the bounds, if any.
    pub preset: Option<PeriodPreset>,
    /// Inclusive bounds.
    pub range: DateRange,
    /// Display label.
    pub label: String,
}
