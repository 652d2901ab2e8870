//! Spreadsheet exports in the CAT layout: one sheet of single-asset
//! transactions and one sheet of trades between two assets.

use std::io::Read;

use serde::Deserialize;

use crate::accounting::{Transaction, TransactionType};
use crate::error::Result;
use crate::import::parse::{parse_date, parse_number};

#[derive(Debug, Deserialize)]
struct TransactionRow {
    date: String,
    currency: String,
    amount: String,
    tx_type: String,
    price: String,
    #[allow(dead_code)]
    notes: Option<String>,
}

#[derive(Debug, Deserialize)]
struct TradeRow {
    date: String,
    src: String,
    src_amount: String,
    src_price: String,
    dst: String,
    dst_amount: String,
    dst_price: String,
}

fn reader<R: Read>(rdr: R) -> csv::Reader<R> {
    // rows are read by position, the header line is skipped by the callers
    csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(rdr)
}

/// Columns: Date, Currency, Amount, Type, Price On Date, Notes.
pub fn parse_transactions<R: Read>(rdr: R, tx_source: &str) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();
    for result in reader(rdr).deserialize::<TransactionRow>().skip(1) {
        let row = result?;
        let tx_type: TransactionType = row.tx_type.parse()?;
        transactions.push(Transaction::new(
            &row.currency,
            parse_number(&row.price)?,
            parse_number(&row.amount)?,
            parse_date(&row.date)?,
            tx_type,
            tx_source,
        )?);
    }
    Ok(transactions)
}

/// Columns: Date, Src, Src Amount, Src Price, Dst, Dst Amount, Dst Price.
/// Every trade becomes a disposal of the source asset followed by an
/// acquisition of the destination asset.
pub fn parse_trades<R: Read>(rdr: R, tx_source: &str) -> Result<Vec<Transaction>> {
    let mut transactions = Vec::new();
    for result in reader(rdr).deserialize::<TradeRow>().skip(1) {
        let row = result?;
        let date = parse_date(&row.date)?;
        let sell = Transaction::new(
            &row.src,
            parse_number(&row.src_price)?,
            -parse_number(&row.src_amount)?,
            date,
            TransactionType::Trade,
            tx_source,
        )?;
        let buy = Transaction::new(
            &row.dst,
            parse_number(&row.dst_price)?,
            parse_number(&row.dst_amount)?,
            date,
            TransactionType::Trade,
            tx_source,
        )?;
        transactions.push(sell);
        transactions.push(buy);
    }
    Ok(transactions)
}
