use csv::Writer;
use serde::Serialize;
use std::{fs::File, path::Path};

use crate::aggregate::{CategoryMonthSales, CategorySales};
use crate::error::{PipelineError, Result};

/// Write the per-category summary with header `Category,Sales`.
pub fn write_category_summary(path: &Path, rows: &[CategorySales]) -> Result<()> {
    write_rows(path, &["Category", "Sales"], rows)
}

/// Write the per-(category, month) summary with header `Category,Month,Sales`.
pub fn write_category_month_summary(path: &Path, rows: &[CategoryMonthSales]) -> Result<()> {
    write_rows(path, &["Category", "Month", "Sales"], rows)
}

fn write_rows<T: Serialize>(path: &Path, header: &[&str], rows: &[T]) -> Result<()> {
    let file = File::create(path).map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let mut wtr = Writer::from_writer(file);

    // serialize only emits the header once it sees a row
    if rows.is_empty() {
        wtr.write_record(header).map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }
    for row in rows {
        wtr.serialize(row).map_err(|source| PipelineError::Csv {
            path: path.to_path_buf(),
            source,
        })?;
    }

    wtr.flush().map_err(|source| PipelineError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}
