//! Strongly-typed identifiers used across the forecasting layer.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use crate::error::{ForecastError, TelemetryField};

/// Identifier of an inventory item (SKU) within a batch.
///
/// Always positive. Data sources supply raw signed integers; conversion goes
/// through `TryFrom<i64>` so a zero or negative id is rejected at the boundary.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct ItemId(u64);

impl ItemId {
    pub fn get(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ItemId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

impl TryFrom<i64> for ItemId {
    type Error = ForecastError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        if value <= 0 {
            return Err(ForecastError::invalid(
                value,
                TelemetryField::Id,
                value,
                "must be a positive integer",
            ));
        }
        Ok(Self(value as u64))
    }
}

impl From<ItemId> for i64 {
    fn from(value: ItemId) -> Self {
        value.0 as i64
    }
}

/// Parse a decimal id.
///
/// If the text is not an integer at all, the id is unknown: the error reports
/// `id: 0` and carries the raw text in `value`.
impl FromStr for ItemId {
    type Err = ForecastError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let raw = s.trim().parse::<i64>().map_err(|e| {
            ForecastError::invalid(0, TelemetryField::Id, s, format!("ItemId: {e}"))
        })?;
        Self::try_from(raw)
    }
}
