//! Forecasting error model.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::id::ItemId;

/// Result type used across the forecasting layer.
pub type ForecastOutcome<T> = Result<T, ForecastError>;

/// A field of an inventory telemetry record.
///
/// `Display` renders the camelCase name used on the wire, so error messages
/// line up with what a data source actually sent.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TelemetryField {
    Id,
    Name,
    CurrentInventory,
    AvgSalesPerWeek,
    LeadTimeDays,
}

impl TelemetryField {
    pub fn as_str(&self) -> &'static str {
        match self {
            TelemetryField::Id => "id",
            TelemetryField::Name => "name",
            TelemetryField::CurrentInventory => "currentInventory",
            TelemetryField::AvgSalesPerWeek => "avgSalesPerWeek",
            TelemetryField::LeadTimeDays => "leadTimeDays",
        }
    }
}

impl core::fmt::Display for TelemetryField {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Forecast-level error.
///
/// Only deterministic input failures live here. The engine performs no IO, so
/// there is nothing transient to retry.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForecastError {
    /// A telemetry field violated its domain constraint.
    ///
    /// `id` is the raw identifier as supplied, which may itself be the invalid field.
    #[error("invalid telemetry for item {id}: {field} = {value} ({reason})")]
    InvalidTelemetry {
        id: i64,
        field: TelemetryField,
        value: String,
        reason: String,
    },

    /// Two records in the same batch share an identifier.
    #[error("duplicate item id {id} at position {index} (first seen at position {first_index})")]
    DuplicateId {
        id: ItemId,
        first_index: usize,
        index: usize,
    },
}

impl ForecastError {
    pub fn invalid(
        id: i64,
        field: TelemetryField,
        value: impl core::fmt::Display,
        reason: impl Into<String>,
    ) -> Self {
        Self::InvalidTelemetry {
            id,
            field,
            value: value.to_string(),
            reason: reason.into(),
        }
    }

    pub fn duplicate(id: ItemId, first_index: usize, index: usize) -> Self {
        Self::DuplicateId {
            id,
            first_index,
            index,
        }
    }

    /// Raw identifier of the offending record.
    pub fn item_id(&self) -> i64 {
        match self {
            ForecastError::InvalidTelemetry { id, .. } => *id,
            ForecastError::DuplicateId { id, .. } => id.get() as i64,
        }
    }

    /// The field at fault, if the error concerns a single field.
    pub fn field(&self) -> Option<TelemetryField> {
        match self {
            ForecastError::InvalidTelemetry { field, .. } => Some(*field),
            ForecastError::DuplicateId { .. } => Some(TelemetryField::Id),
        }
    }
}
