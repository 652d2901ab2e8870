use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Error)]
pub enum Error {
    /// A transaction field violates its invariants.
    #[error("invalid transaction: {0}")]
    Schema(String),

    #[error("unexpected transaction type {0}")]
    UnknownTransactionType(String),

    /// A transaction was routed to the inventory of another asset.
    #[error("{found} transaction passed to the {expected} calculator")]
    TickerMismatch { expected: String, found: String },

    /// More was disposed than was ever acquired.
    #[error("attempted to dispose {requested} {ticker} on {date}, but only {available} remained")]
    InsufficientLots {
        ticker: String,
        date: DateTime<Utc>,
        requested: Decimal,
        available: Decimal,
    },

    #[error("{0}")]
    Parse(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Yaml(#[from] serde_yaml::Error),
}
