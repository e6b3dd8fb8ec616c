use replenish_forecast::ItemTelemetry;

use crate::source::{SourceError, TelemetrySource};

/// Fixed in-memory telemetry. Every `load` returns the same records.
#[derive(Debug, Clone, Default)]
pub struct FixtureSource {
    items: Vec<ItemTelemetry>,
}

impl FixtureSource {
    pub fn new(items: Vec<ItemTelemetry>) -> Self {
        Self { items }
    }

    pub fn with_item(mut self, item: ItemTelemetry) -> Self {
        self.items.push(item);
        self
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl FromIterator<ItemTelemetry> for FixtureSource {
    fn from_iter<T: IntoIterator<Item = ItemTelemetry>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl TelemetrySource for FixtureSource {
    fn name(&self) -> &str {
        "fixture"
    }

    fn load(&self) -> Result<Vec<ItemTelemetry>, SourceError> {
        Ok(self.items.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_records_unchanged() {
        let source = FixtureSource::default()
            .with_item(ItemTelemetry::new(1, "ITEM 1", 5, 14, 7))
            .with_item(ItemTelemetry::new(2, "ITEM 2", -1, 7, 2));

        assert_eq!(source.len(), 2);
        let items = source.load().unwrap();
        assert_eq!(items[1].current_inventory, -1);
        assert_eq!(source.load().unwrap(), items);
    }
}
