use thiserror::Error;

use crate::domain::{Category, ExpenseKind};

/// Error type that captures the failure modes of the expense engine.
#[derive(Debug, Error)]
pub enum ExpenseError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Required field `{0}` is missing")]
    MissingField(&'static str),
    #[error("Category `{category}` is not valid for expense type `{kind}`")]
    CategoryMismatch {
        kind: ExpenseKind,
        category: Category,
    },
    #[error("Storage read failed: {0}")]
    StorageRead(String),
    #[error("Storage write failed: {0}")]
    StorageWrite(String),
}

impl ExpenseError {
    /// Returns `true` for errors raised by required-field or category checks.
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            ExpenseError::MissingField(_) | ExpenseError::CategoryMismatch { .. }
        )
    }
}
