pub mod date_parser;

use chrono::NaiveDate;
use tracing::warn;

use crate::ingest::SalesTable;

/// One order row that survived date coercion.
#[derive(Debug, Clone, PartialEq)]
pub struct CleanRecord {
    pub order_date: NaiveDate,
    /// `YYYY-MM` bucket derived from `order_date`.
    pub month: String,
    pub category: String,
    pub sales: f64,
}

/// A row dropped because its order date did not parse.
#[derive(Debug, Clone, PartialEq)]
pub struct RejectedRow {
    /// 1-based position among the data rows (header excluded).
    pub row: usize,
    pub fields: Vec<String>,
}

/// Disjoint split of the input rows after date coercion.
#[derive(Debug, Default)]
pub struct CleanOutcome {
    pub valid: Vec<CleanRecord>,
    pub invalid: Vec<RejectedRow>,
}

/// `YYYY-MM` key for a parsed date. Pure and locale-independent.
pub fn month_key(date: NaiveDate) -> String {
    date.format("%Y-%m").to_string()
}

/// Coerce every row's order date, splitting the table into records that
/// parsed and rows that did not. Membership is decided by the date field
/// alone; a non-numeric sales field keeps its row but contributes 0.0.
pub fn coerce_dates(table: &SalesTable) -> CleanOutcome {
    let cols = table.columns;
    let mut outcome = CleanOutcome::default();

    for (idx, fields) in table.rows.iter().enumerate() {
        let raw_date = fields
            .get(cols.order_date)
            .map(String::as_str)
            .unwrap_or("");
        let Some(order_date) = date_parser::parse_order_date(raw_date) else {
            outcome.invalid.push(RejectedRow {
                row: idx + 1,
                fields: fields.clone(),
            });
            continue;
        };

        let category = fields.get(cols.category).cloned().unwrap_or_default();
        let raw_sales = fields.get(cols.sales).map(String::as_str).unwrap_or("");
        let sales = match raw_sales.trim().parse::<f64>() {
            Ok(v) => v,
            Err(_) => {
                warn!(row = idx + 1, value = raw_sales, "non-numeric sales field, counting 0.0");
                0.0
            }
        };

        outcome.valid.push(CleanRecord {
            order_date,
            month: month_key(order_date),
            category,
            sales,
        });
    }

    outcome
}

/// List every rejected row on the log surface before it is dropped.
pub fn log_rejected(invalid: &[RejectedRow]) {
    warn!("invalid date entries:");
    for r in invalid {
        warn!(row = r.row, "{}", r.fields.join(","));
    }
}
