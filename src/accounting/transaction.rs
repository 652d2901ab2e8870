use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionType {
    Funding, // e.g. a transfer into an exchange
    Fork,
    Fee,
    Spend, // buying a real world thing with crypto
    Div,   // proof-of-stake dividends
    Gift,  // tax exempt
    Trade,
}

impl TransactionType {
    pub const ALL: [TransactionType; 7] = [
        TransactionType::Funding,
        TransactionType::Fork,
        TransactionType::Fee,
        TransactionType::Spend,
        TransactionType::Div,
        TransactionType::Gift,
        TransactionType::Trade,
    ];

    /// Whether a disposal of this type realizes a taxable gain or loss.
    pub fn is_capital_gains(self) -> bool {
        match self {
            TransactionType::Trade | TransactionType::Spend => true,
            TransactionType::Gift
            | TransactionType::Div
            | TransactionType::Fee
            | TransactionType::Fork
            | TransactionType::Funding => false,
        }
    }

    /// Whether this type is ordinary income (or loss), independent of gains.
    pub fn is_income(self) -> bool {
        match self {
            TransactionType::Div | TransactionType::Fee | TransactionType::Fork => true,
            TransactionType::Trade
            | TransactionType::Spend
            | TransactionType::Gift
            | TransactionType::Funding => false,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Funding => "FUNDING",
            TransactionType::Fork => "FORK",
            TransactionType::Fee => "FEE",
            TransactionType::Spend => "SPEND",
            TransactionType::Div => "DIV",
            TransactionType::Gift => "GIFT",
            TransactionType::Trade => "TRADE",
        }
    }
}

impl FromStr for TransactionType {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        TransactionType::ALL
            .iter()
            .copied()
            .find(|t| t.as_str() == s)
            .ok_or_else(|| Error::UnknownTransactionType(s.to_string()))
    }
}

impl fmt::Display for TransactionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single change in holdings of one asset. Positive amounts are
/// acquisitions, negative amounts are disposals.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transaction {
    pub ticker: String,
    pub price: Decimal,
    pub amount: Decimal,
    pub date: DateTime<Utc>,
    #[serde(rename = "type")]
    pub tx_type: TransactionType,
    pub tx_source: String,
}

impl Transaction {
    pub fn new(
        ticker: &str,
        price: Decimal,
        amount: Decimal,
        date: DateTime<Utc>,
        tx_type: TransactionType,
        tx_source: &str,
    ) -> Result<Transaction> {
        let tx = Transaction {
            ticker: ticker.to_string(),
            price,
            amount,
            date,
            tx_type,
            tx_source: tx_source.to_string(),
        };
        tx.validate()?;
        Ok(tx)
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_ticker(&self.ticker) {
            return Err(Error::Schema(format!(
                "ticker '{}' must be 3-4 uppercase characters",
                self.ticker
            )));
        }
        if self.amount.is_zero() {
            return Err(Error::Schema(format!(
                "{} {} on {} has a zero amount",
                self.tx_type, self.ticker, self.date
            )));
        }
        if self.price < Decimal::ZERO {
            return Err(Error::Schema(format!(
                "{} {} on {} has a negative price {}",
                self.tx_type, self.ticker, self.date, self.price
            )));
        }
        Ok(())
    }

    pub fn is_acquisition(&self) -> bool {
        self.amount > Decimal::ZERO
    }

    pub fn is_disposal(&self) -> bool {
        self.amount < Decimal::ZERO
    }
}

fn is_valid_ticker(ticker: &str) -> bool {
    let len = ticker.chars().count();
    (3..=4).contains(&len)
        && ticker.chars().next().map_or(false, |c| c.is_ascii_uppercase())
        && ticker.chars().all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
}

/// Puts transactions in processing order: by calendar day, then by amount
/// descending so that same-day acquisitions come before disposals.
/// The sort is stable, so remaining ties keep their input order.
pub fn sort_transactions(transactions: &mut [Transaction]) {
    transactions.sort_by(|a, b| {
        a.date
            .date_naive()
            .cmp(&b.date.date_naive())
            .then_with(|| b.amount.cmp(&a.amount))
    });
}
