pub mod cat_csv;
pub mod parse;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use log::info;

use crate::accounting::{sort_transactions, Transaction};
use crate::error::Result;

pub const TRANSACTIONS_FILE: &str = "transactions.csv";
pub const TRADES_FILE: &str = "trades.csv";
pub const LEDGER_FILE: &str = "cat.json";

/// Reads a JSON ledger and validates every transaction in it.
pub fn read_ledger<P: AsRef<Path>>(path: P) -> Result<Vec<Transaction>> {
    let file = File::open(path)?;
    let transactions: Vec<Transaction> = serde_json::from_reader(BufReader::new(file))?;
    for tx in transactions.iter() {
        tx.validate()?;
    }
    Ok(transactions)
}

pub fn write_ledger<P: AsRef<Path>>(path: P, transactions: &[Transaction]) -> Result<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    serde_json::to_writer_pretty(&mut writer, transactions)?;
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}

pub struct Import {
    pub transactions: usize,
    pub trades: usize,
    /// Everything parsed, in processing order.
    pub ledger: Vec<Transaction>,
}

/// Parses the transactions and trades sheets found in `data_directory`.
pub fn import_directory<P: AsRef<Path>>(data_directory: P, tx_source: &str) -> Result<Import> {
    let dir = data_directory.as_ref();
    let transactions = cat_csv::parse_transactions(File::open(dir.join(TRANSACTIONS_FILE))?, tx_source)?;
    let trades = cat_csv::parse_trades(File::open(dir.join(TRADES_FILE))?, tx_source)?;
    info!("Parsed {} transactions and {} trades", transactions.len(), trades.len());

    let mut import = Import {
        transactions: transactions.len(),
        trades: trades.len(),
        ledger: transactions,
    };
    import.ledger.extend(trades);
    sort_transactions(&mut import.ledger);
    Ok(import)
}
