//! Reporting period resolution.
//!
//! Turns a requested reporting window (explicit dates or a named preset)
//! into concrete inclusive calendar bounds and a display label. Resolution
//! never fails: malformed input degrades to the previous calendar year.

pub mod error;
pub mod resolver;
pub mod types;


pub use error::PeriodError;
pub use resolver::PeriodResolver;
pub use types::{DateRange, PeriodPreset, PeriodRequest, ResolvedPeriod};
