//! Period resolution.

use chrono::{Datelike, NaiveDate};

use super::types::{DateRange, PeriodPreset, PeriodRequest, ResolvedPeriod};

/// Resolves period requests against a reference day.
pub struct PeriodResolver;

impl PeriodResolver {
    /// Resolves a request to concrete bounds and a label.
    ///
    /// Never fails: anything that cannot be honored falls back to the
    /// previous calendar year.
    #[must_use]
    pub fn resolve(request: &PeriodRequest, today: NaiveDate) -> ResolvedPeriod {
        match request {
            PeriodRequest::Range(range) => ResolvedPeriod {
                preset: None,
                range: *range,
                label: range.to_string(),
            },
            PeriodRequest::Preset(preset) => Self::resolve_preset(*preset, today),
        }
    }

    /// Resolves a named preset.
    #[must_use]
    pub fn resolve_preset(preset: PeriodPreset, today: NaiveDate) -> ResolvedPeriod {
        let (range, label) = match preset {
            PeriodPreset::YearToDate => {
                let start = today.with_ordinal(1).unwrap_or(today);
                let range =
                    DateRange::new(start, today).unwrap_or_else(|_| DateRange::single_day(today));
                (range, "Year to Date".to_string())
            }
            PeriodPreset::PreviousCalendarYear => {
                let year = today.year() - 1;
                let range = DateRange::calendar_year(year)
                    .unwrap_or_else(|_| DateRange::single_day(today));
                (range, format!("{year} (Jan - Dec)"))
            }
            PeriodPreset::Last30Days => (DateRange::trailing_days(today, 30), "Last 30 Days".to_string()),
            PeriodPreset::Last3Months => (DateRange::trailing_days(today, 90), "Last 3 Months".to_string()),
            PeriodPreset::Last6Months => (DateRange::trailing_days(today, 180), "Last 6 Months".to_string()),
            PeriodPreset::Last12Months => {
                (DateRange::trailing_days(today, 365), "Last 12 Months".to_string())
            }
        };

        tracing::debug!(%preset, start = %range.start(), end = %range.end(), "Resolved period");

        ResolvedPeriod {
            preset: Some(preset),
            range,
            label,
        }
    }
}
