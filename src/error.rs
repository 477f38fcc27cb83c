use std::path::PathBuf;
use thiserror::Error;

/// All fatal errors produced by the pipeline.
///
/// Per-row date-parse failures are not errors; they are split off and listed
/// by `process::coerce_dates` instead.
#[derive(Error, Debug)]
pub enum PipelineError {
    /// The input could not be read, or an output could not be written.
    #[error("i/o failure on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A required column is absent from the input header row.
    #[error("required column `{column}` is missing from the input")]
    MissingColumn { column: String },

    /// The input (or an output record) is not valid CSV.
    #[error("malformed CSV in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;
