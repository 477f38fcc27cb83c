use serde::Serialize;
use std::collections::BTreeMap;

use crate::process::CleanRecord;

/// Total sales for one category. The field renames set the output header.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategorySales {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
}

/// Total sales for one (category, month) pair.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryMonthSales {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Month")]
    pub month: String,
    #[serde(rename = "Sales")]
    pub sales: f64,
}

/// Sum sales per category, one row per distinct category, ascending.
pub fn by_category(records: &[CleanRecord]) -> Vec<CategorySales> {
    let mut totals: BTreeMap<&str, f64> = BTreeMap::new();
    for rec in records {
        *totals.entry(rec.category.as_str()).or_insert(0.0) += rec.sales;
    }

    totals
        .into_iter()
        .map(|(category, sales)| CategorySales {
            category: category.to_string(),
            sales,
        })
        .collect()
}

/// Sum sales per (category, month) pair, ascending by category then month.
pub fn by_category_month(records: &[CleanRecord]) -> Vec<CategoryMonthSales> {
    let mut totals: BTreeMap<(&str, &str), f64> = BTreeMap::new();
    for rec in records {
        *totals
            .entry((rec.category.as_str(), rec.month.as_str()))
            .or_insert(0.0) += rec.sales;
    }

    totals
        .into_iter()
        .map(|((category, month), sales)| CategoryMonthSales {
            category: category.to_string(),
            month: month.to_string(),
            sales,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn record(date: (i32, u32, u32), category: &str, sales: f64) -> CleanRecord {
        let order_date = NaiveDate::from_ymd_opt(date.0, date.1, date.2).unwrap();
        CleanRecord {
            order_date,
            month: crate::process::month_key(order_date),
            category: category.to_string(),
            sales,
        }
    }

    fn sample_records() -> Vec<CleanRecord> {
        vec![
            record((2015, 3, 15), "Furniture", 100.0),
            record((2015, 3, 20), "Office", 30.0),
            record((2015, 4, 2), "Furniture", 25.5),
            record((2015, 4, 9), "Furniture", 4.5),
            record((2015, 4, 11), "Technology", 900.0),
        ]
    }

    #[test]
    fn test_by_category_sums_and_orders() {
        let rows = by_category(&sample_records());

        assert_eq!(
            rows,
            vec![
                CategorySales {
                    category: "Furniture".to_string(),
                    sales: 130.0
                },
                CategorySales {
                    category: "Office".to_string(),
                    sales: 30.0
                },
                CategorySales {
                    category: "Technology".to_string(),
                    sales: 900.0
                },
            ]
        );
    }

    #[test]
    fn test_by_category_month_composite_key_order() {
        let rows = by_category_month(&sample_records());

        let keys: Vec<(&str, &str)> = rows
            .iter()
            .map(|r| (r.category.as_str(), r.month.as_str()))
            .collect();
        assert_eq!(
            keys,
            vec![
                ("Furniture", "2015-03"),
                ("Furniture", "2015-04"),
                ("Office", "2015-03"),
                ("Technology", "2015-04"),
            ]
        );
        assert_eq!(rows[1].sales, 30.0); // 25.5 + 4.5
    }

    #[test]
    fn test_both_summaries_conserve_the_total() {
        let records = sample_records();
        let input_total: f64 = records.iter().map(|r| r.sales).sum();

        let by_cat: f64 = by_category(&records).iter().map(|r| r.sales).sum();
        let by_cat_month: f64 = by_category_month(&records).iter().map(|r| r.sales).sum();

        assert!((by_cat - input_total).abs() < 1e-9);
        assert!((by_cat_month - input_total).abs() < 1e-9);
    }

    #[test]
    fn test_empty_input_yields_empty_summaries() {
        assert!(by_category(&[]).is_empty());
        assert!(by_category_month(&[]).is_empty());
    }
}
