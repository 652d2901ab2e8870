use chrono::{DateTime, Months, Utc};
use log::debug;

use crate::accounting::{AccountingMethod, BasisFrame, CapitalGainsRecord, GainsType, Transaction};
use crate::accounting::calculation::inventory::Inventory;
use crate::error::Result;

/// Tracks the capital gains that result from buying and selling a single
/// asset. Lot matching is delegated to an [`Inventory`].
pub struct CapitalGainsCalculator {
    inventory: Inventory,
}

impl CapitalGainsCalculator {
    pub fn new(ticker: &str, accounting_method: AccountingMethod) -> CapitalGainsCalculator {
        CapitalGainsCalculator {
            inventory: Inventory::new(ticker, accounting_method),
        }
    }

    pub fn ticker(&self) -> &str {
        self.inventory.ticker()
    }

    pub fn inventory(&self) -> &Inventory {
        &self.inventory
    }

    /// Every acquisition establishes basis, whatever its type.
    pub fn acquire(&mut self, tx: &Transaction) -> Result<()> {
        self.inventory.acquire(tx)
    }

    /// Dispose of some amount at `tx.price`. Tax exempt disposals (e.g. a gift)
    /// produce no records, but still consume lots so that later basis
    /// calculations stay correct.
    pub fn dispose(&mut self, tx: &Transaction) -> Result<Vec<CapitalGainsRecord>> {
        let frames = self.inventory.dispose(tx)?;
        if !tx.tx_type.is_capital_gains() {
            debug!("{}: {} disposal on {} realizes no gains", tx.ticker, tx.tx_type, tx.date);
            return Ok(Vec::new());
        }

        let records = frames
            .into_iter()
            .map(|frame| {
                let gains_type = holding_term(frame.date, tx.date);
                let BasisFrame { date, amount, unit_cost } = frame;
                CapitalGainsRecord {
                    amount,
                    ticker: tx.ticker.clone(),
                    acquired_date: date,
                    disposed_date: tx.date,
                    unit_cost,
                    unit_proceeds: tx.price,
                    gains_type,
                }
            })
            .collect();
        Ok(records)
    }
}

/// Long term once the disposal falls after the first anniversary of the
/// acquisition, compared by calendar day; holding for exactly one year is
/// still short term.
pub fn holding_term(acquired: DateTime<Utc>, disposed: DateTime<Utc>) -> GainsType {
    let acquired = acquired.date_naive();
    let disposed = disposed.date_naive();
    match acquired.checked_add_months(Months::new(12)) {
        Some(anniversary) if anniversary < disposed => GainsType::LongTerm,
        Some(_) => GainsType::ShortTerm,
        // only reachable at the very end of chrono's date range
        None => GainsType::ShortTerm,
    }
}
