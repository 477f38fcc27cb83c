pub mod aggregate;
pub mod error;
pub mod ingest;
pub mod output;
pub mod process;

pub use error::{PipelineError, Result};
