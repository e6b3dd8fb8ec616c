use std::path::{Path, PathBuf};

use tracing::debug;

use replenish_forecast::ItemTelemetry;

use crate::source::{SourceError, TelemetrySource};

/// Telemetry read from a JSON array of camelCase records.
///
/// ```json
/// [{"id":1,"name":"ITEM 1","currentInventory":5,"avgSalesPerWeek":14,"leadTimeDays":7}]
/// ```
#[derive(Debug, Clone)]
pub enum JsonSource {
    File(PathBuf),
    Inline(String),
}

impl JsonSource {
    pub fn from_path(path: impl AsRef<Path>) -> Self {
        Self::File(path.as_ref().to_path_buf())
    }

    pub fn inline(json: impl Into<String>) -> Self {
        Self::Inline(json.into())
    }
}

impl TelemetrySource for JsonSource {
    fn name(&self) -> &str {
        match self {
            JsonSource::File(_) => "json-file",
            JsonSource::Inline(_) => "json",
        }
    }

    fn load(&self) -> Result<Vec<ItemTelemetry>, SourceError> {
        let items: Vec<ItemTelemetry> = match self {
            JsonSource::File(path) => {
                let raw = std::fs::read_to_string(path).map_err(|source| SourceError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&raw)?
            }
            JsonSource::Inline(raw) => serde_json::from_str(raw)?,
        };
        debug!(source = self.name(), items = items.len(), "telemetry loaded");
        Ok(items)
    }
}
