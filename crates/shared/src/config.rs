//! Application configuration management.

use rust_decimal::Decimal;
use serde::Deserialize;

use crate::types::Currency;

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Dashboard and report tuning.
    pub dashboard: DashboardConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
    /// Report runner configuration.
    pub report: ReportConfig,
}

/// Dashboard configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DashboardConfig {
    /// Currency used when formatting amounts in activity descriptions.
    #[serde(default)]
    pub currency: Currency,
    /// Weekly giving target used by the giving progress card.
    #[serde(default = "default_weekly_giving_goal")]
    pub weekly_giving_goal: Decimal,
    /// Seats per service used for the capacity percentage.
    #[serde(default = "default_service_capacity")]
    pub service_capacity: u32,
    /// Maximum number of items in the activity feed.
    #[serde(default = "default_activity_limit")]
    pub activity_limit: usize,
    /// Most recent items taken from each stream before merging.
    #[serde(default = "default_activity_per_stream")]
    pub activity_per_stream: Option<usize>,
    /// Number of parishes in the performance ranking.
    #[serde(default = "default_ranking_top_n")]
    pub ranking_top_n: usize,
    /// Location shown for a parish without an address.
    #[serde(default = "default_location")]
    pub default_location: String,
    /// Known services and how they are held.
    #[serde(default = "default_service_schedule")]
    pub service_schedule: Vec<ServiceSlot>,
}

/// Schedule metadata for a named service.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ServiceSlot {
    /// Service label as recorded on attendance.
    pub service: String,
    /// Where the service is held.
    pub medium: String,
    /// Day of the week.
    pub day: String,
    /// Start time.
    pub time: String,
}

impl ServiceSlot {
    fn new(service: &str, medium: &str, day: &str, time: &str) -> Self {
        Self {
            service: service.to_string(),
            medium: medium.to_string(),
            day: day.to_string(),
            time: time.to_string(),
        }
    }
}

fn default_weekly_giving_goal() -> Decimal {
    Decimal::from(50_000)
}

fn default_service_capacity() -> u32 {
    1000
}

fn default_activity_limit() -> usize {
    10
}

#[allow(clippy::unnecessary_wraps)]
fn default_activity_per_stream() -> Option<usize> {
    Some(5)
}

fn default_ranking_top_n() -> usize {
    5
}

fn default_location() -> String {
    "Main Campus".to_string()
}

fn default_service_schedule() -> Vec<ServiceSlot> {
    vec![
        ServiceSlot::new("Evening Sacrifice", "Online(Zoom)/Physical", "Monday", "6:00pm"),
        ServiceSlot::new("Marriage Counselling", "Online (YouTube)", "Wednesday", "7:30pm"),
        ServiceSlot::new("Blast Service", "Physical (Church Hall)", "Thursday", "6:30pm"),
        ServiceSlot::new("Evangelism", "Physical (Church Hall)", "Saturday", "2:00pm"),
        ServiceSlot::new("Sunday Service", "Online/Physical", "Sunday", "9:00am"),
        ServiceSlot::new("9:00 AM Classic", "Physical", "Sunday", "9:00am"),
        ServiceSlot::new("11:00 AM Modern", "Physical", "Sunday", "11:00am"),
    ]
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            currency: Currency::default(),
            weekly_giving_goal: default_weekly_giving_goal(),
            service_capacity: default_service_capacity(),
            activity_limit: default_activity_limit(),
            activity_per_stream: default_activity_per_stream(),
            ranking_top_n: default_ranking_top_n(),
            default_location: default_location(),
            service_schedule: default_service_schedule(),
        }
    }
}

impl DashboardConfig {
    /// Looks up the schedule entry for a service label.
    #[must_use]
    pub fn service_slot(&self, service: &str) -> Option<&ServiceSlot> {
        self.service_schedule.iter().find(|slot| slot.service == service)
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// Filter directive used when `RUST_LOG` is not set.
    #[serde(default = "default_log_filter")]
    pub filter: String,
    /// Emit JSON lines instead of human-readable output.
    #[serde(default)]
    pub json: bool,
}

fn default_log_filter() -> String {
    "congregate=info".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: default_log_filter(),
            json: false,
        }
    }
}

/// Report runner configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ReportConfig {
    /// Path to the JSON record snapshot.
    #[serde(default = "default_snapshot_path")]
    pub snapshot_path: String,
    /// Named period preset (e.g. `ytd`, `last_30_days`).
    #[serde(default)]
    pub period: Option<String>,
    /// Explicit start date (`YYYY-MM-DD`).
    #[serde(default)]
    pub start_date: Option<String>,
    /// Explicit end date (`YYYY-MM-DD`).
    #[serde(default)]
    pub end_date: Option<String>,
    /// Reference date (`YYYY-MM-DD`); the local date when unset.
    #[serde(default)]
    pub today: Option<String>,
}

fn default_snapshot_path() -> String {
    "data/snapshot.json".to_string()
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            snapshot_path: default_snapshot_path(),
            period: None,
            start_date: None,
            end_date: None,
            today: None,
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(config::Environment::with_prefix("CONGREGATE").separator("__"))
            .build()?;

        config.try_deserialize()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_load_defaults_without_sources() {
        temp_env::with_vars_unset(
            [
                "CONGREGATE__DASHBOARD__SERVICE_CAPACITY",
                "CONGREGATE__REPORT__PERIOD",
                "CONGREGATE__LOGGING__JSON",
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.dashboard.service_capacity, 1000);
                assert_eq!(config.dashboard.weekly_giving_goal, dec!(50000));
                assert_eq!(config.dashboard.activity_limit, 10);
                assert_eq!(config.dashboard.activity_per_stream, Some(5));
                assert_eq!(config.dashboard.ranking_top_n, 5);
                assert_eq!(config.report.snapshot_path, "data/snapshot.json");
                assert!(config.report.period.is_none());
                assert!(!config.logging.json);
            },
        );
    }

    #[test]
    fn test_environment_overrides() {
        temp_env::with_vars(
            [
                ("CONGREGATE__DASHBOARD__SERVICE_CAPACITY", Some("400")),
                ("CONGREGATE__REPORT__PERIOD", Some("ytd")),
                ("CONGREGATE__LOGGING__JSON", Some("true")),
            ],
            || {
                let config = AppConfig::load().unwrap();
                assert_eq!(config.dashboard.service_capacity, 400);
                assert_eq!(config.report.period.as_deref(), Some("ytd"));
                assert!(config.logging.json);
            },
        );
    }

    #[test]
    fn test_service_slot_lookup() {
        let config = DashboardConfig::default();
        let slot = config.service_slot("Blast Service").unwrap();
        assert_eq!(slot.day, "Thursday");
        assert_eq!(slot.time, "6:30pm");
        assert!(config.service_slot("Unknown Service").is_none());
    }
}
