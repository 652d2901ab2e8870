use std::collections::VecDeque;

use log::debug;
use rust_decimal::Decimal;

use crate::accounting::{AccountingMethod, BasisFrame, Transaction};
use crate::error::{Error, Result};

/// Open lots of a single asset. Disposals report which lots (or parts of
/// lots) they consumed, so the caller can compute the cost basis. Disposing
/// 75 out of two lots of 50 yields two frames under LIFO: 50 from the
/// newer lot and 25 from the older one.
pub struct Inventory {
    ticker: String,
    layers: VecDeque<BasisFrame>,
    accounting_method: AccountingMethod,
}

impl Inventory {
    pub fn new(ticker: &str, accounting_method: AccountingMethod) -> Inventory {
        Inventory {
            ticker: ticker.to_string(),
            layers: VecDeque::new(),
            accounting_method,
        }
    }

    pub fn ticker(&self) -> &str {
        &self.ticker
    }

    /// Open lots, in the order the next disposal would consume them.
    pub fn layers(&self) -> impl Iterator<Item = &BasisFrame> {
        self.layers.iter()
    }

    pub fn balance(&self) -> Decimal {
        self.layers.iter().map(|layer| layer.amount).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.layers.is_empty()
    }

    /// Record that `tx.amount` units were acquired at `tx.price` each.
    pub fn acquire(&mut self, tx: &Transaction) -> Result<()> {
        self.check_ticker(tx)?;
        if tx.amount <= Decimal::ZERO {
            return Err(Error::Schema(format!(
                "cannot acquire a non-positive amount {} of {}",
                tx.amount, tx.ticker
            )));
        }

        let layer = BasisFrame {
            date: tx.date,
            amount: tx.amount,
            unit_cost: tx.price,
        };
        debug!("{}: new lot of {} @ {} on {}", self.ticker, layer.amount, layer.unit_cost, layer.date);

        // add layer to inventory; disposals always consume from the front
        match self.accounting_method {
            AccountingMethod::LIFO => self.layers.push_front(layer),
        };
        Ok(())
    }

    /// Record that `|tx.amount|` units were disposed of and return the lot
    /// fragments that cover them, in consumption order. Fails without
    /// touching any lot if the inventory can't cover the whole amount.
    pub fn dispose(&mut self, tx: &Transaction) -> Result<Vec<BasisFrame>> {
        self.check_ticker(tx)?;
        let requested = tx.amount.abs();
        if requested.is_zero() {
            return Err(Error::Schema(format!(
                "cannot dispose a zero amount of {}",
                tx.ticker
            )));
        }

        let available = self.balance();
        if requested > available {
            return Err(Error::InsufficientLots {
                ticker: self.ticker.clone(),
                date: tx.date,
                requested,
                available,
            });
        }

        let mut matched = Vec::new();
        let mut remaining = requested;
        while remaining > Decimal::ZERO {
            let layer = match self.layers.front_mut() {
                Some(layer) => layer,
                None => {
                    return Err(Error::InsufficientLots {
                        ticker: tx.ticker.clone(),
                        date: tx.date,
                        requested,
                        available,
                    })
                }
            };

            if layer.amount > remaining {
                // split the lot, the rest stays open
                layer.amount -= remaining;
                matched.push(BasisFrame {
                    date: layer.date,
                    amount: remaining,
                    unit_cost: layer.unit_cost,
                });
                remaining = Decimal::ZERO;
            } else {
                remaining -= layer.amount;
                if let Some(consumed) = self.layers.pop_front() {
                    matched.push(consumed);
                }
            }
        }

        debug!(
            "{}: disposed {} on {} across {} lot(s), {} left",
            self.ticker,
            requested,
            tx.date,
            matched.len(),
            available - requested
        );
        Ok(matched)
    }

    fn check_ticker(&self, tx: &Transaction) -> Result<()> {
        if tx.ticker != self.ticker {
            return Err(Error::TickerMismatch {
                expected: self.ticker.clone(),
                found: tx.ticker.clone(),
            });
        }
        Ok(())
    }
}
