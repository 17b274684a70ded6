use thiserror::Error;

/// Failure inside a cleaning operation.
///
/// These are not expected for well-formed tables; they wrap the underlying
/// frame error verbatim.
#[derive(Debug, Error)]
pub enum CleanError {
    #[error("dataframe operation failed: {0}")]
    Frame(#[from] polars::error::PolarsError),

    #[error(transparent)]
    Table(#[from] sweep_model::TableError),
}
