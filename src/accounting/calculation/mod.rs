pub mod gains;
pub mod inventory;

use std::collections::HashMap;

use log::{debug, info};

use crate::accounting::{sort_transactions, AccountingMethod, BasisFrame, CapitalGainsRecord, Transaction};
use crate::accounting::calculation::gains::CapitalGainsCalculator;
use crate::error::{Error, Result};

/// Sorts `transactions` into processing order, replays them and returns every
/// realized gain in the order it was produced.
pub fn calculate_capital_gains(
    mut transactions: Vec<Transaction>,
    accounting_method: AccountingMethod,
) -> Result<Vec<CapitalGainsRecord>> {
    sort_transactions(&mut transactions);

    let mut calculation = CapitalGainsCalculation::new(accounting_method);
    for (i, tx) in transactions.iter().enumerate() {
        debug!("Processing transaction #{}", i + 1);
        calculation.process_record(tx)?;
    }
    info!(
        "Processed {} transactions across {} assets, {} gains records",
        transactions.len(),
        calculation.assets.len(),
        calculation.log.len()
    );

    Ok(calculation.into_gains())
}

/// Routes a stream of transactions to one calculator per asset and
/// collects the resulting gains. Transactions must arrive in the order
/// produced by [`sort_transactions`].
pub struct CapitalGainsCalculation {
    assets: HashMap<String, CapitalGainsCalculator>,
    log: Vec<CapitalGainsRecord>,
    accounting_method: AccountingMethod,
}

impl CapitalGainsCalculation {
    pub fn new(accounting_method: AccountingMethod) -> CapitalGainsCalculation {
        CapitalGainsCalculation {
            assets: HashMap::new(),
            log: Vec::new(),
            accounting_method,
        }
    }

    fn calculator(&mut self, asset: &str) -> &mut CapitalGainsCalculator {
        let accounting_method = self.accounting_method;
        self.assets
            .entry(asset.to_string())
            .or_insert_with(|| CapitalGainsCalculator::new(asset, accounting_method))
    }

    pub fn process_record(&mut self, tx: &Transaction) -> Result<()> {
        debug!("{} {} {} @ {} on {}", tx.tx_type, tx.amount, tx.ticker, tx.price, tx.date);
        if tx.is_acquisition() {
            self.calculator(&tx.ticker).acquire(tx)
        } else if tx.is_disposal() {
            let gains = self.calculator(&tx.ticker).dispose(tx)?;
            self.log.extend(gains);
            Ok(())
        } else {
            Err(Error::Schema(format!(
                "{} {} on {} has a zero amount",
                tx.tx_type, tx.ticker, tx.date
            )))
        }
    }

    pub fn gains(&self) -> &[CapitalGainsRecord] {
        &self.log
    }

    pub fn into_gains(self) -> Vec<CapitalGainsRecord> {
        self.log
    }

    /// Lots still open for each asset seen so far, in consumption order.
    pub fn holdings(&self) -> HashMap<&str, Vec<&BasisFrame>> {
        self.assets
            .iter()
            .map(|(asset, calc)| (asset.as_str(), calc.inventory().layers().collect()))
            .collect()
    }
}
