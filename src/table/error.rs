use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum TableError {
    #[error("row {index} out of range (rows: {len})")]
    RowOutOfRange { index: usize, len: usize },
    #[error("column {index} out of range (columns: {len})")]
    ColumnOutOfRange { index: usize, len: usize },
    #[error("invalid size {size}, must be at least 1")]
    InvalidSize { size: usize },
    #[error("value rejected at ({row}, {col}): {reason}")]
    Rejected {
        row: usize,
        col: usize,
        reason: String,
    },
    #[error("model is read-only")]
    ReadOnly,
    #[error("invalid table config: {0}")]
    Config(String),
}

pub type TableResult<T> = Result<T, TableError>;
