pub mod accountant;
pub mod calculation;
pub mod reports;
pub mod transaction;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

pub use transaction::{sort_transactions, Transaction, TransactionType};

/// Lot matching policy. Only LIFO is supported today.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AccountingMethod {
    LIFO,
}

impl Default for AccountingMethod {
    fn default() -> AccountingMethod {
        AccountingMethod::LIFO
    }
}

/// A (possibly partial) lot: what is left of one acquisition, or the
/// fragment of it that was consumed by a disposal.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BasisFrame {
    pub date: DateTime<Utc>,
    pub amount: Decimal,
    pub unit_cost: Decimal,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum GainsType {
    ShortTerm,
    LongTerm,
}

/// Gain or loss realized by disposing `amount` units out of a single lot.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapitalGainsRecord {
    pub amount: Decimal,
    pub ticker: String,
    pub acquired_date: DateTime<Utc>,
    pub disposed_date: DateTime<Utc>,
    pub unit_cost: Decimal,
    pub unit_proceeds: Decimal,
    pub gains_type: GainsType,
}

impl CapitalGainsRecord {
    pub fn cost_basis(&self) -> Decimal {
        self.unit_cost * self.amount
    }

    pub fn proceeds(&self) -> Decimal {
        self.unit_proceeds * self.amount
    }

    pub fn gains(&self) -> Decimal {
        (self.unit_proceeds - self.unit_cost) * self.amount
    }
}
