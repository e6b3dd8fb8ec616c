use std::fmt::Write as _;

use serde::Serialize;

use replenish_core::Entity;
use replenish_forecast::{FleetSummary, ForecastResult, ItemTelemetry};

use crate::config::OutputFormat;
use crate::run::Analysis;

/// Inventory below this many units is flagged in the table.
pub const LOW_STOCK_UNITS: i64 = 10;

const COLUMNS: [&str; 7] = [
    "PRODUCT NAME",
    "INVENTORY (UNITS)",
    "AVG SALES/WK",
    "LEAD TIME",
    "DAYS OF SUPPLY",
    "SAFETY STOCK",
    "PREDICTION",
];

#[derive(Debug, Serialize)]
struct Report<'a> {
    summary: &'a FleetSummary,
    items: Vec<ReportRow<'a>>,
}

#[derive(Debug, Serialize)]
struct ReportRow<'a> {
    #[serde(flatten)]
    telemetry: &'a ItemTelemetry,
    forecast: &'a ForecastResult,
}

fn rows(analysis: &Analysis) -> impl Iterator<Item = (&ItemTelemetry, &ForecastResult)> {
    analysis.items.iter().zip(&analysis.batch.results).inspect(|(item, result)| {
        debug_assert_eq!(*Entity::id(*item), i64::from(*Entity::id(*result)));
    })
}

pub fn render(analysis: &Analysis, format: OutputFormat) -> serde_json::Result<String> {
    match format {
        OutputFormat::Table => Ok(render_table(analysis)),
        OutputFormat::Json => render_json(analysis),
    }
}

pub fn render_json(analysis: &Analysis) -> serde_json::Result<String> {
    let report = Report {
        summary: &analysis.batch.summary,
        items: rows(analysis)
            .map(|(telemetry, forecast)| ReportRow {
                telemetry,
                forecast,
            })
            .collect(),
    };
    serde_json::to_string_pretty(&report)
}

/// Dashboard-style text report: summary cards, then one row per item.
pub fn render_table(analysis: &Analysis) -> String {
    let summary = &analysis.batch.summary;
    let mut out = String::new();

    let _ = writeln!(out, "Inventory Forecast System");
    let _ = writeln!(out, "General Stock Analytics Dashboard");
    let _ = writeln!(out);
    let _ = writeln!(out, "Total SKU Count:          {}", summary.total);
    let _ = writeln!(out, "Immediate Reorder Needed: {}", summary.reorder_count);
    let _ = writeln!(out, "System Status:            Analysis Complete");
    let _ = writeln!(out);

    let table: Vec<[String; 7]> = rows(analysis).map(|(item, r)| row_cells(item, r)).collect();

    let mut widths = COLUMNS.map(str::len);
    for cells in &table {
        for (w, cell) in widths.iter_mut().zip(cells) {
            *w = (*w).max(cell.chars().count());
        }
    }

    write_row(&mut out, &COLUMNS.map(String::from), &widths);
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    let _ = writeln!(out, "{}", rule.join("  "));
    for cells in &table {
        write_row(&mut out, cells, &widths);
    }

    out
}

fn row_cells(item: &ItemTelemetry, r: &ForecastResult) -> [String; 7] {
    let inventory = if item.current_inventory < LOW_STOCK_UNITS {
        format!("{} units (low)", item.current_inventory)
    } else {
        format!("{} units", item.current_inventory)
    };
    let status = if r.status.is_reorder() {
        format!("{} *", r.status)
    } else {
        r.status.to_string()
    };

    [
        item.name.clone(),
        inventory,
        format!("{} / wk", item.avg_sales_per_week),
        format!("{} days", item.lead_time_days),
        format!("{} days", r.days_of_supply),
        format!("{} units", r.safety_stock),
        status,
    ]
}

fn write_row(out: &mut String, cells: &[String; 7], widths: &[usize; 7]) {
    let padded: Vec<String> = cells
        .iter()
        .zip(widths)
        .map(|(cell, w)| {
            let pad = w.saturating_sub(cell.chars().count());
            format!("{cell}{}", " ".repeat(pad))
        })
        .collect();
    let _ = writeln!(out, "{}", padded.join("  ").trim_end());
}

#[cfg(test)]
mod tests {
    use super::*;
    use replenish_forecast::compute_batch;

    fn analysis() -> Analysis {
        let items = vec![
            ItemTelemetry::new(1, "ITEM 1", 5, 14, 7),
            ItemTelemetry::new(2, "ITEM 2", 100, 7, 2),
            ItemTelemetry::new(3, "ITEM 3", 0, 0, 5),
        ];
        let batch = compute_batch(&items).unwrap();
        Analysis { items, batch }
    }

    #[test]
    fn table_shows_summary_cards_and_rows() {
        let out = render_table(&analysis());
        assert!(out.contains("Total SKU Count:          3"));
        assert!(out.contains("Immediate Reorder Needed: 2"));
        assert!(out.contains("PRODUCT NAME"));

        let lines: Vec<&str> = out.lines().collect();
        let item1 = lines.iter().find(|l| l.starts_with("ITEM 1")).unwrap();
        assert!(item1.contains("5 units (low)"));
        assert!(item1.contains("2.5 days"));
        assert!(item1.contains("14 units"));
        assert!(item1.ends_with("Reorder *"));

        let item2 = lines.iter().find(|l| l.starts_with("ITEM 2")).unwrap();
        assert!(item2.contains("100.0 days"));
        assert!(item2.ends_with("Hold"));

        let item3 = lines.iter().find(|l| l.starts_with("ITEM 3")).unwrap();
        assert!(item3.contains("∞ days"));
    }

    #[test]
    fn json_nests_forecast_under_each_item() {
        let out = render(&analysis(), OutputFormat::Json).unwrap();
        let v: serde_json::Value = serde_json::from_str(&out).unwrap();

        assert_eq!(v["summary"]["total"], 3);
        assert_eq!(v["summary"]["reorderCount"], 2);
        assert_eq!(v["items"][0]["currentInventory"], 5);
        assert_eq!(v["items"][0]["forecast"]["safetyStock"], 14);
        assert_eq!(v["items"][0]["forecast"]["status"], "Reorder");
        assert_eq!(v["items"][2]["forecast"]["daysOfSupply"]["kind"], "infinite");
    }
}
