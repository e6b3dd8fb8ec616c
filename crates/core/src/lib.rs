//! `replenish-core` — shared building blocks for replenishment forecasting.
//!
//! This crate contains **pure** primitives (no IO, no configuration).

pub mod entity;
pub mod error;
pub mod id;
pub mod value_object;

pub use entity::Entity;
pub use error::{ForecastError, ForecastOutcome, TelemetryField};
pub use id::ItemId;
pub use value_object::ValueObject;
