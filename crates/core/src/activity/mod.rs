//! Recent-activity feed.
//!
//! Merges finance, expense, attendance and community-impact records into one
//! capped, newest-first list of display items.

pub mod merge;
pub mod types;


pub use merge::ActivityMerger;
pub use types::{ActivityItem, ActivityKind, ActivityQuery, ActivityStreams, DEFAULT_ACTIVITY_LIMIT};
