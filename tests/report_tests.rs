mod common;

use std::fs;

use rust_decimal_macros::dec;
use serde_json::Value;

use capital_gains::accounting::accountant::Accountant;
use capital_gains::accounting::reports::{CapitalGainsReport, OutputFormat};
use capital_gains::accounting::CapitalGainsRecord;
use common::{date, trade};

fn sample_report() -> CapitalGainsReport {
    let transactions = vec![
        trade("BTC", date(2014, 3, 1), dec!(0.12345678), dec!(550.10)),
        trade("BTC", date(2015, 6, 1), dec!(1), dec!(225)),
        trade("BTC", date(2015, 9, 1), dec!(-1.1), dec!(230.5)),
    ];
    Accountant::new().analyze(transactions).unwrap()
}

#[test]
fn json_keeps_decimals_as_strings() {
    let report = sample_report();
    let mut out = Vec::new();
    report.write_json(&mut out).unwrap();

    let value: Value = serde_json::from_slice(&out).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["amount"], Value::String("1".to_string()));
    assert_eq!(records[0]["unitCost"], Value::String("225".to_string()));
    assert_eq!(records[0]["unitProceeds"], Value::String("230.5".to_string()));
    assert_eq!(records[0]["gainsType"], Value::String("SHORT_TERM".to_string()));
    assert_eq!(records[1]["amount"], Value::String("0.1".to_string()));
    assert_eq!(records[1]["unitCost"], Value::String("550.10".to_string()));
    assert_eq!(records[1]["gainsType"], Value::String("LONG_TERM".to_string()));
    assert_eq!(records[1]["ticker"], Value::String("BTC".to_string()));
    assert!(records[1]["acquiredDate"].as_str().unwrap().starts_with("2014-03-01T00:00:00"));
    assert!(records[1]["disposedDate"].as_str().unwrap().starts_with("2015-09-01T00:00:00"));
}

#[test]
fn json_reads_back_without_loss() {
    let report = sample_report();
    let mut out = Vec::new();
    report.write_json(&mut out).unwrap();

    let parsed: Vec<CapitalGainsRecord> = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed, report.records());
    assert_eq!(parsed[1].unit_cost.to_string(), "550.10");
}

#[test]
fn csv_has_one_row_per_record() {
    let report = sample_report();
    let mut out = Vec::new();
    report.write_csv(&mut out).unwrap();

    let text = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(
        lines[0],
        "amount,ticker,acquiredDate,disposedDate,unitCost,unitProceeds,gainsType"
    );
    assert!(lines[1].starts_with("1,BTC,2015-06-01T00:00:00"));
    assert!(lines[1].ends_with(",225,230.5,SHORT_TERM"));
    assert!(lines[2].ends_with(",550.10,230.5,LONG_TERM"));
}

#[test]
fn writes_report_files() {
    let dir = tempfile::tempdir().unwrap();
    let report = sample_report();

    let json_path = dir.path().join("gains.json");
    report.write_to_file(&json_path, OutputFormat::Json).unwrap();
    let parsed: Vec<CapitalGainsRecord> =
        serde_json::from_str(&fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.len(), 2);

    let csv_path = dir.path().join("gains.csv");
    report.write_to_file(&csv_path, OutputFormat::Csv).unwrap();
    assert_eq!(fs::read_to_string(&csv_path).unwrap().lines().count(), 3);
}

#[test]
fn empty_report() {
    let report = CapitalGainsReport::new(Vec::new());
    let mut out = Vec::new();
    report.write_json(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    assert_eq!(report.summary().net_gains(), dec!(0));
}
