//! `replenish-forecast`
//!
//! **Responsibility:** the replenishment forecast engine.
//!
//! Given per-item inventory telemetry, derive sales velocity, days of supply,
//! a safety-stock threshold and a reorder decision, then aggregate fleet-wide.
//!
//! The engine is pure and synchronous:
//! - It never generates its own inputs (data sources live in `replenish-datasource`).
//! - It performs no IO and keeps no state between calls.
//! - Any simulated latency belongs to the caller.

pub mod batch;
pub mod engine;
pub mod result;
pub mod telemetry;

pub use batch::{compute_batch, compute_batch_lenient, BatchForecast, LenientBatch, Rejection};
pub use engine::{compute_fleet_summary, compute_forecast, DAYS_PER_WEEK};
pub use result::{DaysOfSupply, FleetSummary, ForecastResult, ReorderStatus};
pub use telemetry::{ItemTelemetry, ValidTelemetry};

pub use replenish_core::{ForecastError, ForecastOutcome, ItemId, TelemetryField};
