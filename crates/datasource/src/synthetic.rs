use std::ops::Range;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::debug;

use replenish_forecast::ItemTelemetry;

use crate::source::{SourceError, TelemetrySource};

/// Shape of a synthetic fleet.
///
/// Defaults reproduce the demo dashboard: 100 SKUs, stock in `[0, 100)`,
/// weekly sales in `[5, 55)`, lead times in `[2, 16)` days.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyntheticConfig {
    pub count: usize,
    pub seed: u64,
    pub inventory: Range<i64>,
    pub weekly_sales: Range<i64>,
    pub lead_time_days: Range<i64>,
}

impl Default for SyntheticConfig {
    fn default() -> Self {
        Self {
            count: 100,
            seed: 42,
            inventory: 0..100,
            weekly_sales: 5..55,
            lead_time_days: 2..16,
        }
    }
}

impl SyntheticConfig {
    pub fn with_count(mut self, count: usize) -> Self {
        self.count = count;
        self
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_inventory(mut self, range: Range<i64>) -> Self {
        self.inventory = range;
        self
    }

    pub fn with_weekly_sales(mut self, range: Range<i64>) -> Self {
        self.weekly_sales = range;
        self
    }

    pub fn with_lead_time_days(mut self, range: Range<i64>) -> Self {
        self.lead_time_days = range;
        self
    }

    fn check(&self) -> Result<(), SourceError> {
        for (label, range) in [
            ("inventory", &self.inventory),
            ("weekly_sales", &self.weekly_sales),
            ("lead_time_days", &self.lead_time_days),
        ] {
            if range.is_empty() {
                return Err(SourceError::InvalidConfig(format!(
                    "{label} range {range:?} is empty"
                )));
            }
            if range.start < 0 {
                return Err(SourceError::InvalidConfig(format!(
                    "{label} range {range:?} must start at >= 0"
                )));
            }
        }
        Ok(())
    }
}

/// Seeded random fleet. The same config always yields the same items.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    config: SyntheticConfig,
}

impl SyntheticSource {
    pub fn new(config: SyntheticConfig) -> Result<Self, SourceError> {
        config.check()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &SyntheticConfig {
        &self.config
    }
}

impl TelemetrySource for SyntheticSource {
    fn name(&self) -> &str {
        "synthetic"
    }

    fn load(&self) -> Result<Vec<ItemTelemetry>, SourceError> {
        let cfg = &self.config;
        let mut rng = StdRng::seed_from_u64(cfg.seed);

        let items: Vec<ItemTelemetry> = (1..=cfg.count as i64)
            .map(|id| {
                ItemTelemetry::new(
                    id,
                    format!("ITEM {id}"),
                    rng.gen_range(cfg.inventory.clone()),
                    rng.gen_range(cfg.weekly_sales.clone()),
                    rng.gen_range(cfg.lead_time_days.clone()),
                )
            })
            .collect();

        debug!(seed = cfg.seed, items = items.len(), "synthetic telemetry generated");
        Ok(items)
    }
}
