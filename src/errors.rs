use rust_decimal::Decimal;
use thiserror::Error;
use uuid::Uuid;

pub type FinanceResult<T> = Result<T, FinanceError>;

/// Error type that captures bookkeeping and configuration failures.
#[derive(Debug, Error)]
pub enum FinanceError {
    #[error("Insufficient funds on account {account}: balance {balance}, requested {requested}")]
    InsufficientFunds {
        account: Uuid,
        balance: Decimal,
        requested: Decimal,
    },
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

impl FinanceError {
    /// Returns `true` for the insufficient-funds rejection.
    pub fn is_insufficient_funds(&self) -> bool {
        matches!(self, FinanceError::InsufficientFunds { .. })
    }
}
