use std::path::Path;

use crate::accounting::{AccountingMethod, Transaction};
use crate::accounting::calculation;
use crate::accounting::reports::CapitalGainsReport;
use crate::error::Result;
use crate::import;

pub struct Accountant {
    accounting_method: AccountingMethod,
}

impl Default for Accountant {
    fn default() -> Accountant {
        Accountant::new()
    }
}

impl Accountant {
    pub fn new() -> Accountant {
        Accountant {
            accounting_method: AccountingMethod::LIFO,
        }
    }

    pub fn method(&mut self, method: AccountingMethod) -> &mut Accountant {
        self.accounting_method = method;
        self
    }

    pub fn analyze(&self, transactions: Vec<Transaction>) -> Result<CapitalGainsReport> {
        let records = calculation::calculate_capital_gains(transactions, self.accounting_method)?;
        Ok(CapitalGainsReport::new(records))
    }

    /// Runs the calculation over a ledger file written by `import`.
    pub fn analyze_file<P: AsRef<Path>>(&self, path: P) -> Result<CapitalGainsReport> {
        let transactions = import::read_ledger(path)?;
        self.analyze(transactions)
    }
}
