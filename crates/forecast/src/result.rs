use serde::{Deserialize, Serialize};

use replenish_core::{Entity, ItemId, ValueObject};

/// Projected days until stock runs out at the current sales velocity.
///
/// Zero velocity never depletes, so it gets its own variant instead of a
/// division artifact (`NaN`/`inf`) leaking to callers.
#[derive(Debug, Copy, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "days", rename_all = "camelCase")]
pub enum DaysOfSupply {
    Finite(f64),
    Infinite,
}

impl DaysOfSupply {
    pub fn is_infinite(&self) -> bool {
        matches!(self, DaysOfSupply::Infinite)
    }

    /// Unrounded day count, `None` for infinite supply.
    pub fn as_days(&self) -> Option<f64> {
        match self {
            DaysOfSupply::Finite(d) => Some(*d),
            DaysOfSupply::Infinite => None,
        }
    }

    /// Day count rounded to one decimal (display precision).
    pub fn rounded(&self) -> Option<f64> {
        self.as_days().map(|d| (d * 10.0).round() / 10.0)
    }
}

impl ValueObject for DaysOfSupply {}

impl core::fmt::Display for DaysOfSupply {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            DaysOfSupply::Finite(d) => write!(f, "{:.1}", (d * 10.0).round() / 10.0),
            DaysOfSupply::Infinite => f.write_str("∞"),
        }
    }
}

/// Binary replenishment decision.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReorderStatus {
    Reorder,
    Hold,
}

impl ReorderStatus {
    /// Reorder at or below the threshold (`inventory == threshold` reorders).
    pub fn classify(current_inventory: u64, safety_stock: u64) -> Self {
        if current_inventory <= safety_stock {
            ReorderStatus::Reorder
        } else {
            ReorderStatus::Hold
        }
    }

    pub fn is_reorder(&self) -> bool {
        matches!(self, ReorderStatus::Reorder)
    }
}

impl core::fmt::Display for ReorderStatus {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            ReorderStatus::Reorder => f.write_str("Reorder"),
            ReorderStatus::Hold => f.write_str("Hold"),
        }
    }
}

/// Forecast for one item; same `id` as the telemetry it was derived from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ForecastResult {
    pub id: ItemId,
    pub sales_per_day: f64,
    pub days_of_supply: DaysOfSupply,
    /// Reorder point: units needed to cover the lead time.
    pub safety_stock: u64,
    pub status: ReorderStatus,
}

impl Entity for ForecastResult {
    type Id = ItemId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Fleet-wide statistics over one batch.
///
/// `reorder_count <= total` always holds for summaries built by the engine.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FleetSummary {
    pub total: usize,
    pub reorder_count: usize,
}

impl FleetSummary {
    pub fn hold_count(&self) -> usize {
        self.total.saturating_sub(self.reorder_count)
    }

    /// Share of items needing a reorder, in \[0, 1\]. An empty fleet is 0.
    pub fn reorder_ratio(&self) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.reorder_count as f64 / self.total as f64
    }
}

impl ValueObject for FleetSummary {}
