//! `replenish-datasource`
//!
//! **Responsibility:** supply `ItemTelemetry` to the forecast engine.
//!
//! Sources are collaborators, not part of the engine: the engine accepts data
//! from any of them and never generates its own inputs.
//! - `FixtureSource`: fixed in-memory records (tests, demos).
//! - `JsonSource`: a JSON array of telemetry records.
//! - `SyntheticSource`: seeded random fleet for exercising the engine.

pub mod fixture;
pub mod json;
pub mod source;
pub mod synthetic;

pub use fixture::FixtureSource;
pub use json::JsonSource;
pub use source::{SourceError, TelemetrySource};
pub use synthetic::{SyntheticConfig, SyntheticSource};
