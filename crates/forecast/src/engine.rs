use replenish_core::ForecastOutcome;

use crate::result::{DaysOfSupply, FleetSummary, ForecastResult, ReorderStatus};
use crate::telemetry::{ItemTelemetry, ValidTelemetry};

pub const DAYS_PER_WEEK: u64 = 7;

/// Forecast a single item.
///
/// Model:
/// - `sales_per_day = avg_sales_per_week / 7`
/// - `days_of_supply = current_inventory / sales_per_day`, infinite at zero velocity
/// - `safety_stock = ceil(sales_per_day * lead_time_days)`
/// - `Reorder` iff `current_inventory <= safety_stock`
pub fn compute_forecast(item: &ItemTelemetry) -> ForecastOutcome<ForecastResult> {
    let valid = item.validate()?;
    Ok(forecast_valid(&valid))
}

pub(crate) fn forecast_valid(item: &ValidTelemetry) -> ForecastResult {
    let weekly = item.avg_sales_per_week();
    let safety_stock = safety_stock(weekly, item.lead_time_days());

    ForecastResult {
        id: item.id(),
        sales_per_day: weekly as f64 / DAYS_PER_WEEK as f64,
        days_of_supply: days_of_supply(item.current_inventory(), weekly),
        safety_stock,
        status: ReorderStatus::classify(item.current_inventory(), safety_stock),
    }
}

/// Aggregate per-item forecasts into fleet statistics.
pub fn compute_fleet_summary(results: &[ForecastResult]) -> FleetSummary {
    FleetSummary {
        total: results.len(),
        reorder_count: results.iter().filter(|r| r.status.is_reorder()).count(),
    }
}

fn days_of_supply(current_inventory: u64, weekly_sales: u64) -> DaysOfSupply {
    if weekly_sales == 0 {
        return DaysOfSupply::Infinite;
    }
    // inventory / (weekly / 7), rearranged to divide once.
    DaysOfSupply::Finite(current_inventory as f64 * DAYS_PER_WEEK as f64 / weekly_sales as f64)
}

/// `ceil(weekly * lead / 7)` in integers; a float ceiling can overshoot by one
/// when `weekly / 7` is not exactly representable.
fn safety_stock(weekly_sales: u64, lead_time_days: u64) -> u64 {
    let days = DAYS_PER_WEEK as u128;
    let demand = weekly_sales as u128 * lead_time_days as u128;
    u64::try_from(demand.div_ceil(days)).unwrap_or(u64::MAX)
}
