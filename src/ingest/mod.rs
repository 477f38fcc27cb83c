use csv::ReaderBuilder;
use std::{fs::File, path::Path};
use tracing::debug;

use crate::error::{PipelineError, Result};

/// Header names the pipeline requires in the input file.
pub const ORDER_DATE_COLUMN: &str = "Order Date";
pub const CATEGORY_COLUMN: &str = "Category";
pub const SALES_COLUMN: &str = "Sales";

/// Positions of the three required columns within the header row.
#[derive(Debug, Clone, Copy)]
pub struct SalesColumns {
    pub order_date: usize,
    pub category: usize,
    pub sales: usize,
}

impl SalesColumns {
    /// Locate the required columns by exact name; first occurrence wins.
    pub fn locate(headers: &[String]) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| PipelineError::MissingColumn {
                    column: name.to_string(),
                })
        };
        Ok(Self {
            order_date: find(ORDER_DATE_COLUMN)?,
            category: find(CATEGORY_COLUMN)?,
            sales: find(SALES_COLUMN)?,
        })
    }
}

/// The raw order table: the header row plus every data row as owned strings.
/// Columns beyond the three required ones ride along untouched.
#[derive(Debug)]
pub struct SalesTable {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<String>>,
    pub columns: SalesColumns,
}

impl SalesTable {
    /// Build a table from an in-memory header + rows pair, verifying the
    /// required columns exist. Lets the pipeline run without touching disk.
    pub fn from_rows(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self> {
        let columns = SalesColumns::locate(&headers)?;
        Ok(Self {
            headers,
            rows,
            columns,
        })
    }
}

/// Read the whole order CSV into memory and verify the required columns exist.
pub fn load_csv(path: &Path) -> Result<SalesTable> {
    let file = File::open(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut rdr = ReaderBuilder::new().has_headers(true).from_reader(file);

    let headers: Vec<String> = rdr
        .headers()
        .map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?
        .iter()
        .map(|h| h.trim().to_string())
        .collect();

    let mut rows: Vec<Vec<String>> = Vec::new();
    for result in rdr.records() {
        let record = result.map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
        rows.push(record.iter().map(|f| f.to_string()).collect());
    }

    debug!(rows = rows.len(), "loaded {}", path.display());
    SalesTable::from_rows(headers, rows)
}
