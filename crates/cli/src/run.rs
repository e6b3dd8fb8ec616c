use std::time::{Duration, Instant};

use anyhow::Context;
use tracing::info;

use replenish_datasource::{JsonSource, SourceError, SyntheticConfig, SyntheticSource, TelemetrySource};
use replenish_forecast::{compute_batch, BatchForecast, ItemTelemetry};

use crate::config::{AppConfig, SourceKind};

/// One completed analysis: the telemetry that went in and what came out.
#[derive(Debug, Clone, PartialEq)]
pub struct Analysis {
    pub items: Vec<ItemTelemetry>,
    pub batch: BatchForecast,
}

pub fn build_source(config: &AppConfig) -> Result<Box<dyn TelemetrySource>, SourceError> {
    Ok(match &config.source {
        SourceKind::Synthetic => Box::new(SyntheticSource::new(
            SyntheticConfig::default()
                .with_count(config.item_count)
                .with_seed(config.seed),
        )?),
        SourceKind::JsonFile(path) => Box::new(JsonSource::from_path(path)),
    })
}

/// Load a batch, wait out the simulated latency, then forecast it.
///
/// The delay only affects how long this call takes; the forecast is computed
/// after it, in one synchronous step.
pub fn run_analysis(source: &dyn TelemetrySource, delay: Duration) -> anyhow::Result<Analysis> {
    let items = source
        .load()
        .with_context(|| format!("loading telemetry from {} source", source.name()))?;
    info!(source = source.name(), items = items.len(), "running forecast analysis");

    if !delay.is_zero() {
        info!(delay_ms = delay.as_millis() as u64, "simulating analysis latency");
        std::thread::sleep(delay);
    }

    let started = Instant::now();
    let batch = compute_batch(&items).context("forecasting telemetry batch")?;

    info!(
        total = batch.summary.total,
        reorder_count = batch.summary.reorder_count,
        elapsed_us = started.elapsed().as_micros() as u64,
        "analysis complete"
    );

    Ok(Analysis { items, batch })
}
