use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::warn;

use replenish_observability::LogFormat;

pub const ENV_SOURCE: &str = "REPLENISH_SOURCE";
pub const ENV_ITEM_COUNT: &str = "REPLENISH_ITEM_COUNT";
pub const ENV_SEED: &str = "REPLENISH_SEED";
pub const ENV_OUTPUT: &str = "REPLENISH_OUTPUT";
pub const ENV_DELAY_MS: &str = "REPLENISH_DELAY_MS";
pub const ENV_LOG_FORMAT: &str = "REPLENISH_LOG_FORMAT";

/// Where telemetry comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SourceKind {
    Synthetic,
    JsonFile(PathBuf),
}

#[derive(Debug, Copy, Clone, Default, PartialEq, Eq)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid value for {var}: {value:?} ({reason})")]
pub struct ConfigError {
    pub var: &'static str,
    pub value: String,
    pub reason: String,
}

impl ConfigError {
    fn new(var: &'static str, value: &str, reason: impl Into<String>) -> Self {
        Self {
            var,
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Runtime configuration for one analysis run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub source: SourceKind,
    /// Synthetic fleet size.
    pub item_count: usize,
    /// Synthetic generator seed.
    pub seed: u64,
    pub output: OutputFormat,
    /// Simulated analysis latency, applied by the runner before computing.
    pub delay: Duration,
    pub log_format: LogFormat,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            source: SourceKind::Synthetic,
            item_count: 100,
            seed: 42,
            output: OutputFormat::Table,
            delay: Duration::ZERO,
            log_format: LogFormat::Json,
        }
    }
}

impl AppConfig {
    /// Read configuration from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    /// Read configuration through an arbitrary variable lookup; unset
    /// variables keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut cfg = Self::default();

        if let Some(raw) = lookup(ENV_SOURCE) {
            cfg.source = match raw.trim() {
                "" => return Err(ConfigError::new(ENV_SOURCE, &raw, "cannot be empty")),
                "synthetic" => SourceKind::Synthetic,
                path => SourceKind::JsonFile(PathBuf::from(path)),
            };
        }

        if let Some(raw) = lookup(ENV_ITEM_COUNT) {
            cfg.item_count = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(ENV_ITEM_COUNT, &raw, format!("{e}")))?;
        }

        if let Some(raw) = lookup(ENV_SEED) {
            cfg.seed = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(ENV_SEED, &raw, format!("{e}")))?;
        }

        if let Some(raw) = lookup(ENV_OUTPUT) {
            cfg.output = match raw.trim().to_ascii_lowercase().as_str() {
                "table" => OutputFormat::Table,
                "json" => OutputFormat::Json,
                _ => {
                    return Err(ConfigError::new(
                        ENV_OUTPUT,
                        &raw,
                        "expected \"table\" or \"json\"",
                    ));
                }
            };
        }

        if let Some(raw) = lookup(ENV_DELAY_MS) {
            let ms: u64 = raw
                .trim()
                .parse()
                .map_err(|e| ConfigError::new(ENV_DELAY_MS, &raw, format!("{e}")))?;
            cfg.delay = Duration::from_millis(ms);
        }

        if let Some(raw) = lookup(ENV_LOG_FORMAT) {
            cfg.log_format = raw
                .parse()
                .map_err(|e| ConfigError::new(ENV_LOG_FORMAT, &raw, format!("{e}")))?;
        }

        Ok(cfg)
    }

    /// Log which settings fell back to defaults. Call after tracing is up.
    pub fn warn_on_defaults<F>(&self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if self.source == SourceKind::Synthetic && lookup(ENV_SOURCE).is_none() {
            warn!(
                seed = self.seed,
                items = self.item_count,
                "{ENV_SOURCE} not set; using synthetic telemetry"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |k| map.get(k).cloned()
    }

    #[test]
    fn empty_environment_yields_defaults() {
        let cfg = AppConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(cfg, AppConfig::default());
        assert_eq!(cfg.item_count, 100);
        assert_eq!(cfg.delay, Duration::ZERO);
    }

    #[test]
    fn reads_every_variable() {
        let cfg = AppConfig::from_lookup(lookup(&[
            (ENV_SOURCE, "/data/telemetry.json"),
            (ENV_ITEM_COUNT, "25"),
            (ENV_SEED, "7"),
            (ENV_OUTPUT, "JSON"),
            (ENV_DELAY_MS, "800"),
            (ENV_LOG_FORMAT, "pretty"),
        ]))
        .unwrap();

        assert_eq!(cfg.source, SourceKind::JsonFile(PathBuf::from("/data/telemetry.json")));
        assert_eq!(cfg.item_count, 25);
        assert_eq!(cfg.seed, 7);
        assert_eq!(cfg.output, OutputFormat::Json);
        assert_eq!(cfg.delay, Duration::from_millis(800));
        assert_eq!(cfg.log_format, LogFormat::Pretty);
    }

    #[test]
    fn invalid_values_name_the_variable() {
        let err = AppConfig::from_lookup(lookup(&[(ENV_ITEM_COUNT, "-3")])).unwrap_err();
        assert_eq!(err.var, ENV_ITEM_COUNT);
        assert_eq!(err.value, "-3");

        let err = AppConfig::from_lookup(lookup(&[(ENV_OUTPUT, "html")])).unwrap_err();
        assert_eq!(err.var, ENV_OUTPUT);

        let err = AppConfig::from_lookup(lookup(&[(ENV_SOURCE, "  ")])).unwrap_err();
        assert_eq!(err.var, ENV_SOURCE);
    }
}
