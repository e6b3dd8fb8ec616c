//! `replenish-cli` — presentation layer around the forecast engine.
//!
//! Loads telemetry from a configured source, runs one analysis and renders the
//! result as a dashboard-style table or JSON. Configuration comes from the
//! environment; the engine itself never sees it.

pub mod config;
pub mod report;
pub mod run;

pub use config::{AppConfig, ConfigError, OutputFormat, SourceKind};
pub use report::{render, render_json, render_table};
pub use run::{build_source, run_analysis, Analysis};
