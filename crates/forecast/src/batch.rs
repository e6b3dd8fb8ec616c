use std::borrow::Borrow;
use std::collections::HashMap;
use std::collections::hash_map::Entry;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use replenish_core::{ForecastError, ForecastOutcome, ItemId};

use crate::engine::{compute_fleet_summary, forecast_valid};
use crate::result::{FleetSummary, ForecastResult};
use crate::telemetry::ItemTelemetry;

/// Output of a fully successful batch: one result per input item, in input order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BatchForecast {
    pub results: Vec<ForecastResult>,
    pub summary: FleetSummary,
}

impl BatchForecast {
    pub fn into_parts(self) -> (Vec<ForecastResult>, FleetSummary) {
        (self.results, self.summary)
    }
}

/// An item excluded from a lenient batch.
#[derive(Debug, Clone, PartialEq)]
pub struct Rejection {
    /// Zero-based position in the input sequence.
    pub index: usize,
    pub error: ForecastError,
}

/// Output of [`compute_batch_lenient`].
///
/// `summary` covers accepted items only.
#[derive(Debug, Clone, PartialEq)]
pub struct LenientBatch {
    pub results: Vec<ForecastResult>,
    pub summary: FleetSummary,
    pub rejected: Vec<Rejection>,
}

impl LenientBatch {
    pub fn is_complete(&self) -> bool {
        self.rejected.is_empty()
    }
}

/// Forecast a whole batch: validate, map, then aggregate.
///
/// Fail-fast: the first invalid or duplicate item (in input order) fails the
/// batch and no results are returned.
pub fn compute_batch<I>(items: I) -> ForecastOutcome<BatchForecast>
where
    I: IntoIterator,
    I::Item: Borrow<ItemTelemetry>,
{
    let mut seen = HashMap::new();
    let mut results = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        match admit(&mut seen, index, item.borrow()) {
            Ok(result) => results.push(result),
            Err(err) => {
                warn!(index, item_id = err.item_id(), error = %err, "forecast batch rejected");
                return Err(err);
            }
        }
    }

    let summary = compute_fleet_summary(&results);
    debug!(
        total = summary.total,
        reorder_count = summary.reorder_count,
        "forecast batch computed"
    );

    Ok(BatchForecast { results, summary })
}

/// Partial-success variant of [`compute_batch`].
///
/// Every item that fails validation is reported in `rejected` and skipped; the
/// rest are forecast as usual. For duplicate ids the first occurrence wins.
pub fn compute_batch_lenient<I>(items: I) -> LenientBatch
where
    I: IntoIterator,
    I::Item: Borrow<ItemTelemetry>,
{
    let mut seen = HashMap::new();
    let mut results = Vec::new();
    let mut rejected = Vec::new();

    for (index, item) in items.into_iter().enumerate() {
        match admit(&mut seen, index, item.borrow()) {
            Ok(result) => results.push(result),
            Err(error) => {
                warn!(index, item_id = error.item_id(), error = %error, "forecast item skipped");
                rejected.push(Rejection { index, error });
            }
        }
    }

    let summary = compute_fleet_summary(&results);
    debug!(
        total = summary.total,
        reorder_count = summary.reorder_count,
        rejected = rejected.len(),
        "lenient forecast batch computed"
    );

    LenientBatch {
        results,
        summary,
        rejected,
    }
}

fn admit(
    seen: &mut HashMap<ItemId, usize>,
    index: usize,
    item: &ItemTelemetry,
) -> ForecastOutcome<ForecastResult> {
    let valid = item.validate()?;
    match seen.entry(valid.id()) {
        Entry::Occupied(first) => Err(ForecastError::duplicate(valid.id(), *first.get(), index)),
        Entry::Vacant(slot) => {
            slot.insert(index);
            Ok(forecast_valid(&valid))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::{DaysOfSupply, ReorderStatus};
    use proptest::prelude::*;
    use replenish_core::TelemetryField;

    fn fixture() -> Vec<ItemTelemetry> {
        vec![
            ItemTelemetry::new(1, "ITEM 1", 5, 14, 7),
            ItemTelemetry::new(2, "ITEM 2", 100, 7, 2),
            ItemTelemetry::new(3, "ITEM 3", 0, 0, 5),
        ]
    }

    #[test]
    fn reference_batch_summary() {
        let batch = compute_batch(fixture()).unwrap();
        assert_eq!(
            batch.summary,
            FleetSummary {
                total: 3,
                reorder_count: 2
            }
        );
        let statuses: Vec<_> = batch.results.iter().map(|r| r.status).collect();
        assert_eq!(
            statuses,
            vec![ReorderStatus::Reorder, ReorderStatus::Hold, ReorderStatus::Reorder]
        );
        assert_eq!(batch.results[2].days_of_supply, DaysOfSupply::Infinite);
    }

    #[test]
    fn accepts_borrowed_items_and_preserves_order() {
        let mut items = fixture();
        items.reverse();
        let (results, summary) = compute_batch(&items).unwrap().into_parts();
        let ids: Vec<u64> = results.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![3, 2, 1]);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn empty_batch_is_not_an_error() {
        let batch = compute_batch(Vec::<ItemTelemetry>::new()).unwrap();
        assert_eq!(batch.summary, FleetSummary::default());
        assert!(batch.results.is_empty());
    }

    #[test]
    fn invalid_item_fails_whole_batch() {
        let mut items = fixture();
        items.push(ItemTelemetry::new(4, "ITEM 4", -2, 7, 2));
        items.push(ItemTelemetry::new(5, "ITEM 5", 1, 1, -1));

        let err = compute_batch(&items).unwrap_err();
        match err {
            ForecastError::InvalidTelemetry { id, field, value, .. } => {
                assert_eq!(id, 4);
                assert_eq!(field, TelemetryField::CurrentInventory);
                assert_eq!(value, "-2");
            }
            other => panic!("Expected InvalidTelemetry, got {other:?}"),
        }
    }

    #[test]
    fn duplicate_id_fails_whole_batch() {
        let mut items = fixture();
        items.push(ItemTelemetry::new(2, "ITEM 2 again", 1, 1, 1));

        let err = compute_batch(&items).unwrap_err();
        assert_eq!(
            err,
            ForecastError::duplicate(ItemId::try_from(2).unwrap(), 1, 3)
        );
    }

    #[test]
    fn lenient_batch_skips_and_reports_bad_items() {
        let items = vec![
            ItemTelemetry::new(1, "ITEM 1", 5, 14, 7),
            ItemTelemetry::new(0, "no id", 5, 14, 7),
            ItemTelemetry::new(2, "ITEM 2", 100, 7, 2),
            ItemTelemetry::new(1, "ITEM 1 dup", 50, 7, 2),
            ItemTelemetry::new(3, "", 1, 1, 1),
        ];

        let batch = compute_batch_lenient(&items);
        assert!(!batch.is_complete());

        let ids: Vec<u64> = batch.results.iter().map(|r| r.id.get()).collect();
        assert_eq!(ids, vec![1, 2]);
        assert_eq!(
            batch.summary,
            FleetSummary {
                total: 2,
                reorder_count: 1
            }
        );

        let rejected: Vec<(usize, Option<TelemetryField>)> = batch
            .rejected
            .iter()
            .map(|r| (r.index, r.error.field()))
            .collect();
        assert_eq!(
            rejected,
            vec![
                (1, Some(TelemetryField::Id)),
                (3, Some(TelemetryField::Id)),
                (4, Some(TelemetryField::Name)),
            ]
        );
        assert!(matches!(
            batch.rejected[1].error,
            ForecastError::DuplicateId { first_index: 0, index: 3, .. }
        ));
    }

    #[test]
    fn lenient_and_strict_agree_on_clean_input() {
        let strict = compute_batch(fixture()).unwrap();
        let lenient = compute_batch_lenient(fixture());
        assert!(lenient.is_complete());
        assert_eq!(strict.results, lenient.results);
        assert_eq!(strict.summary, lenient.summary);
    }

    proptest! {
        #![proptest_config(ProptestConfig {
            cases: 256,
            ..ProptestConfig::default()
        })]

        /// Property: a clean batch yields one result per item with matching ids.
        #[test]
        fn batch_covers_every_item(
            rows in prop::collection::vec((0i64..500, 0i64..200, 0i64..30), 0..64)
        ) {
            let items: Vec<ItemTelemetry> = rows
                .iter()
                .enumerate()
                .map(|(i, (inv, sales, lead))| {
                    let id = i as i64 + 1;
                    ItemTelemetry::new(id, format!("ITEM {id}"), *inv, *sales, *lead)
                })
                .collect();

            let batch = compute_batch(&items).unwrap();
            prop_assert_eq!(batch.summary.total, items.len());
            prop_assert!(batch.summary.reorder_count <= batch.summary.total);
            for (item, result) in items.iter().zip(&batch.results) {
                prop_assert_eq!(result.id.get() as i64, item.id);
            }
        }
    }
}
