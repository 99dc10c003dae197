// ============================================================================
// Money Errors
// Error types for currency parsing, arithmetic and storage decoding
// ============================================================================

use thiserror::Error;

/// Errors that can occur when parsing or operating on [`Money`](super::Money).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoneyError {
    /// Unparsable text or JSON representation of an amount
    #[error("invalid money amount: {0}")]
    InvalidAmount(String),

    /// Zero or negative split count
    #[error("split count must be positive")]
    InvalidSplitCount,

    /// Percentage rate outside [0, 100]
    #[error("percentage must be between 0 and 100")]
    InvalidPercentage,

    /// The persisted value's host type is not numeric, text, bytes or null
    #[error("cannot decode storage type {0} into Money")]
    UnsupportedSource(&'static str),
}

impl MoneyError {
    pub(crate) fn invalid_amount(reason: impl Into<String>) -> Self {
        MoneyError::InvalidAmount(reason.into())
    }
}

/// Result type alias for money operations
pub type MoneyResult<T> = Result<T, MoneyError>;
