use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Serialize, Deserialize};

use crate::accounting::{CapitalGainsRecord, GainsType};
use crate::error::{Error, Result};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "json" => Ok(OutputFormat::Json),
            "csv" => Ok(OutputFormat::Csv),
            other => Err(Error::Parse(format!("unknown output format '{}'", other))),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TermTotals {
    pub records: usize,
    pub proceeds: Decimal,
    pub cost_basis: Decimal,
    pub gains: Decimal,
}

impl TermTotals {
    fn add(&mut self, record: &CapitalGainsRecord) {
        self.records += 1;
        self.proceeds += record.proceeds();
        self.cost_basis += record.cost_basis();
        self.gains += record.gains();
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GainsSummary {
    pub short_term: TermTotals,
    pub long_term: TermTotals,
}

impl GainsSummary {
    pub fn net_gains(&self) -> Decimal {
        self.short_term.gains + self.long_term.gains
    }
}

pub struct CapitalGainsReport {
    records: Vec<CapitalGainsRecord>,
}

impl CapitalGainsReport {
    pub fn new(records: Vec<CapitalGainsRecord>) -> CapitalGainsReport {
        CapitalGainsReport {
            records,
        }
    }

    pub fn records(&self) -> &[CapitalGainsRecord] {
        &self.records
    }

    pub fn summary(&self) -> GainsSummary {
        let mut summary = GainsSummary::default();
        for record in self.records.iter() {
            match record.gains_type {
                GainsType::ShortTerm => summary.short_term.add(record),
                GainsType::LongTerm => summary.long_term.add(record),
            }
        }
        summary
    }

    pub fn write_json<W: Write>(&self, mut writer: W) -> Result<()> {
        serde_json::to_writer_pretty(&mut writer, &self.records)?;
        writeln!(writer)?;
        writer.flush()?;
        Ok(())
    }

    pub fn write_csv<W: Write>(&self, writer: W) -> Result<()> {
        let mut writer = csv::Writer::from_writer(writer);
        for entry in self.records.iter() {
            writer.serialize(entry)?;
        }
        writer.flush()?;
        Ok(())
    }

    pub fn write<W: Write>(&self, writer: W, format: OutputFormat) -> Result<()> {
        match format {
            OutputFormat::Json => self.write_json(writer),
            OutputFormat::Csv => self.write_csv(writer),
        }
    }

    pub fn write_to_file<P: AsRef<Path>>(&self, path: P, format: OutputFormat) -> Result<()> {
        let file = File::create(path)?;
        self.write(BufWriter::new(file), format)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use rust_decimal_macros::dec;

    fn record(amount: Decimal, cost: Decimal, proceeds: Decimal, gains_type: GainsType) -> CapitalGainsRecord {
        CapitalGainsRecord {
            amount,
            ticker: "BTC".to_string(),
            acquired_date: Utc.with_ymd_and_hms(2016, 5, 1, 0, 0, 0).unwrap(),
            disposed_date: Utc.with_ymd_and_hms(2017, 12, 1, 0, 0, 0).unwrap(),
            unit_cost: cost,
            unit_proceeds: proceeds,
            gains_type,
        }
    }

    #[test]
    fn summary_splits_by_term() {
        let report = CapitalGainsReport::new(vec![
            record(dec!(0.5), dec!(400), dec!(10000), GainsType::LongTerm),
            record(dec!(2), dec!(300), dec!(250), GainsType::ShortTerm),
            record(dec!(0.25), dec!(800), dec!(10000), GainsType::LongTerm),
        ]);
        let summary = report.summary();
        assert_eq!(summary.long_term.records, 2);
        assert_eq!(summary.long_term.proceeds, dec!(7500));
        assert_eq!(summary.long_term.cost_basis, dec!(400));
        assert_eq!(summary.long_term.gains, dec!(7100));
        assert_eq!(summary.short_term.gains, dec!(-100));
        assert_eq!(summary.net_gains(), dec!(7000));
    }

    #[test]
    fn output_format_from_flag() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!(" csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }
}
