use std::path::PathBuf;
use std::sync::Arc;

use thiserror::Error;

use replenish_forecast::ItemTelemetry;

/// Producer of a telemetry batch.
///
/// Each `load` returns a fresh batch; sources do not validate domain
/// constraints, that is the engine's job.
pub trait TelemetrySource: Send + Sync {
    /// Short label for logs.
    fn name(&self) -> &str;

    fn load(&self) -> Result<Vec<ItemTelemetry>, SourceError>;
}

impl<S> TelemetrySource for Arc<S>
where
    S: TelemetrySource + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<ItemTelemetry>, SourceError> {
        (**self).load()
    }
}

impl<S> TelemetrySource for Box<S>
where
    S: TelemetrySource + ?Sized,
{
    fn name(&self) -> &str {
        (**self).name()
    }

    fn load(&self) -> Result<Vec<ItemTelemetry>, SourceError> {
        (**self).load()
    }
}

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("malformed telemetry: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid source configuration: {0}")]
    InvalidConfig(String),
}
