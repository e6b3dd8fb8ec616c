use serde::{Deserialize, Serialize};

use replenish_core::{Entity, ForecastError, ForecastOutcome, ItemId, TelemetryField};

/// Per-item inventory telemetry, as supplied by a data source.
///
/// Quantities are signed so that a bad feed is representable and gets rejected
/// by [`ItemTelemetry::validate`] instead of wrapping silently at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemTelemetry {
    pub id: i64,
    pub name: String,
    /// Units on hand.
    pub current_inventory: i64,
    /// Average units sold per week.
    pub avg_sales_per_week: i64,
    /// Days between placing a reorder and receiving stock.
    pub lead_time_days: i64,
}

impl ItemTelemetry {
    pub fn new(
        id: i64,
        name: impl Into<String>,
        current_inventory: i64,
        avg_sales_per_week: i64,
        lead_time_days: i64,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            current_inventory,
            avg_sales_per_week,
            lead_time_days,
        }
    }

    /// Check every field against its domain constraint.
    ///
    /// Fields are checked in declaration order; the first violation wins.
    pub fn validate(&self) -> ForecastOutcome<ValidTelemetry> {
        let id = ItemId::try_from(self.id)?;

        if self.name.trim().is_empty() {
            return Err(ForecastError::invalid(
                self.id,
                TelemetryField::Name,
                format!("{:?}", self.name),
                "name cannot be empty",
            ));
        }

        let current_inventory =
            non_negative(self.id, TelemetryField::CurrentInventory, self.current_inventory)?;
        let avg_sales_per_week =
            non_negative(self.id, TelemetryField::AvgSalesPerWeek, self.avg_sales_per_week)?;
        let lead_time_days = non_negative(self.id, TelemetryField::LeadTimeDays, self.lead_time_days)?;

        Ok(ValidTelemetry {
            id,
            current_inventory,
            avg_sales_per_week,
            lead_time_days,
        })
    }
}

impl Entity for ItemTelemetry {
    type Id = i64;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

fn non_negative(id: i64, field: TelemetryField, value: i64) -> ForecastOutcome<u64> {
    u64::try_from(value).map_err(|_| ForecastError::invalid(id, field, value, "must be >= 0"))
}

/// Telemetry that passed validation; the only input the engine computes on.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct ValidTelemetry {
    id: ItemId,
    current_inventory: u64,
    avg_sales_per_week: u64,
    lead_time_days: u64,
}

impl ValidTelemetry {
    pub fn id(&self) -> ItemId {
        self.id
    }

    pub fn current_inventory(&self) -> u64 {
        self.current_inventory
    }

    pub fn avg_sales_per_week(&self) -> u64 {
        self.avg_sales_per_week
    }

    pub fn lead_time_days(&self) -> u64 {
        self.lead_time_days
    }
}
