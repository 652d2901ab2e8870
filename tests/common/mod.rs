#![allow(dead_code)]

use std::fs;
use std::path::Path;

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal::Decimal;

use capital_gains::accounting::{Transaction, TransactionType};

pub const TRANSACTIONS_CSV: &str = "\
Date,Currency,Amount,Type,Price On Date,Notes
1/1/2010,USD,\"10,000.00\",FUNDING,$1.00,Start
8/1/2017,BCH,2.0101,FORK,$500.00,BCH Fork
";

pub const TRADES_CSV: &str = "\
Date,Src,Src Amount,Src Price,Dst,Dst Amount,Dst Price
9/29/2010,USD,\"4,000.000\",$1.00,BTC,1.000,\"$4,000.00\"
10/1/2010,USD,\"2,000.000\",$1.00,ETH,6.000,$300.00
12/1/2017,BTC,0.5,\"$10,000.00\",USD,\"5,000.00\",$1.00
";

pub fn date(y: i32, m: u32, d: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, 0, 0, 0).unwrap()
}

pub fn tx(ticker: &str, when: DateTime<Utc>, amount: Decimal, price: Decimal, tx_type: TransactionType) -> Transaction {
    Transaction::new(ticker, price, amount, when, tx_type, "test").expect("valid test transaction")
}

pub fn trade(ticker: &str, when: DateTime<Utc>, amount: Decimal, price: Decimal) -> Transaction {
    tx(ticker, when, amount, price, TransactionType::Trade)
}

pub fn write_data_directory(dir: &Path) {
    fs::write(dir.join("transactions.csv"), TRANSACTIONS_CSV).expect("Failed to write transactions.csv");
    fs::write(dir.join("trades.csv"), TRADES_CSV).expect("Failed to write trades.csv");
}
