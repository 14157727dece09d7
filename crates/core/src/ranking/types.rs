//! Ranking types.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::records::Parish;

/// Something that can appear in a ranking.
pub trait RankCandidate {
    /// Display name.
    fn name(&self) -> &str;

    /// Location, if known.
    fn location(&self) -> Option<&str> {
        None
    }
}

impl RankCandidate for Parish {
    fn name(&self) -> &str {
        &self.name
    }

    fn location(&self) -> Option<&str> {
        self.address.as_deref()
    }
}

/// One ranked row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RankedEntity {
    /// Display name.
    pub name: String,
    /// Location, or the configured default.
    pub location: String,
    /// Primary metric over the current period.
    pub current: Decimal,
    /// Growth of the primary metric, whole percent.
    pub growth: Decimal,
    /// Secondary metric over the current period.
    pub secondary: Decimal,
    /// Growth of the secondary metric, whole percent.
    pub secondary_growth: Decimal,
}
