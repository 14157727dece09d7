//! Chart values written as JSON numbers.
//!
//! Charting front ends plot numbers, not the string form `Decimal` uses
//! everywhere else.

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Serialize, Deserialize)]
#[serde(transparent)]
struct Point(#[serde(with = "rust_decimal::serde::float")] Decimal);

/// `#[serde(with)]` helper for a `Vec<Decimal>` series.
pub mod series {
    use super::{Decimal, Deserialize, Deserializer, Point, Serializer};

    /// Writes each value as a JSON number.
    pub fn serialize<S: Serializer>(values: &[Decimal], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_seq(values.iter().copied().map(Point))
    }

    /// Reads a list of JSON numbers.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<Decimal>, D::Error> {
        let points = Vec::<Point>::deserialize(deserializer)?;
        Ok(points.into_iter().map(|p| p.0).collect())
    }
}
