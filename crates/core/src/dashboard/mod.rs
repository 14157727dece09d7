//! Overview dashboard.
//!
//! Assembles the landing page: KPI cards, year-over-year trend charts, the
//! weekly service summary, the activity feed and the parish ranking. Cards
//! follow an optional date filter; without one they describe the current
//! week, month or latest service.

pub mod service;
pub mod types;


pub use service::DashboardService;
pub use types::*;
