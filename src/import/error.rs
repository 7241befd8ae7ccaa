use thiserror::Error;

use crate::errors::AppError;

/// Why a single data row was rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RowError {
    #[error("Question body is required")]
    MissingQuestionBody,

    #[error("At least Option 1 and Option 2 are required")]
    MissingRequiredOptions,

    #[error("Correct option must be 1, 2, 3, or 4")]
    InvalidCorrectOption,

    #[error("Correct option is {0}, but Option {0} is empty")]
    CorrectOptionEmpty(u8),

    #[error("Row is not valid UTF-8 ({0})")]
    InvalidEncoding(String),

    #[error("{0}")]
    Rejected(String),
}

/// Failure of a whole import. Parsing stops at the first offending row.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImportError {
    #[error("CSV file must contain a header row and at least one data row")]
    MissingDataRows,

    #[error("Row {row}: {reason}")]
    InvalidRow { row: u64, reason: RowError },
}

impl ImportError {
    pub fn row(&self) -> Option<u64> {
        match self {
            ImportError::InvalidRow { row, .. } => Some(*row),
            _ => None,
        }
    }
}

impl From<ImportError> for AppError {
    fn from(err: ImportError) -> Self {
        AppError::ValidationError(err.to_string())
    }
}
