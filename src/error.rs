use scylla::errors::{ExecutionError, IntoRowsResultError, MaybeFirstRowError, PrepareError};
use thiserror::Error as ThisError;

/// Failures surfaced by the store layer. Every variant carries the driver
/// error untouched; this crate performs no retry and no recovery. Absence
/// of data is not an error (`get` returns an empty list).
#[derive(Debug, ThisError)]
pub enum StoreError {
    #[error("statement preparation error: {0}")]
    Prepare(#[from] PrepareError),

    #[error("query execution error: {0}")]
    Execution(#[from] ExecutionError),

    #[error("result conversion error: {0}")]
    Rows(#[from] IntoRowsResultError),

    #[error("row decode error: {0}")]
    RowDecode(#[from] MaybeFirstRowError),
}
