//! Congregate report runner
//!
//! Loads a record snapshot, builds every dashboard for the configured period
//! and writes them to stdout as one JSON document.

use std::fs::File;
use std::io::{BufReader, Write};

use anyhow::Context;
use chrono::NaiveDate;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use congregate_core::analytics::{AnalyticsReport, AnalyticsService};
use congregate_core::dashboard::{DashboardOverview, DashboardService};
use congregate_core::membership::MemberStats;
use congregate_core::metrics::AttendanceStats;
use congregate_core::period::{DateRange, PeriodRequest, types::parse_date};
use congregate_core::source::Snapshot;
use congregate_shared::AppConfig;
use congregate_shared::config::LoggingConfig;

/// Everything written to stdout.
#[derive(Debug, Serialize)]
struct Report {
    generated_on: NaiveDate,
    overview: DashboardOverview,
    analytics: AnalyticsReport,
    members: MemberStats,
    attendance: AttendanceStats,
}

fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load().context("Failed to load configuration")?;
    init_tracing(&config.logging);

    let today = match config.report.today.as_deref() {
        Some(raw) => parse_date(raw)?,
        None => chrono::Local::now().date_naive(),
    };

    let path = &config.report.snapshot_path;
    let file = File::open(path).with_context(|| format!("Failed to open snapshot {path}"))?;
    let snapshot = Snapshot::from_reader(BufReader::new(file))?;

    let start = config.report.start_date.as_deref();
    let end = config.report.end_date.as_deref();
    let request = PeriodRequest::from_query(start, end, config.report.period.as_deref());
    let filter = DateRange::parse_pair(start, end);

    let report = Report {
        generated_on: today,
        overview: DashboardService::overview(&snapshot, &config.dashboard, filter, today)?,
        analytics: AnalyticsService::report(&snapshot, &request, today)?,
        members: MemberStats::compute(&snapshot.members, today),
        attendance: AttendanceStats::compute(&snapshot.attendance, today),
    };
    info!(
        period = %report.analytics.period.label,
        %today,
        "Report generated"
    );

    let mut out = std::io::stdout().lock();
    serde_json::to_writer_pretty(&mut out, &report)?;
    writeln!(out)?;

    Ok(())
}

/// JSON lines when configured, human-readable otherwise. Logs go to stderr so
/// stdout carries only the report.
fn init_tracing(logging: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&logging.filter));

    if logging.json {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json().with_target(true).with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_target(true).with_writer(std::io::stderr))
            .init();
    }
}
