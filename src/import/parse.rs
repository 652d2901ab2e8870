use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use rust_decimal::Decimal;

use crate::error::{Error, Result};

/// Parses spreadsheet amounts like `$4,000.00` into an exact decimal.
pub fn parse_number(x: &str) -> Result<Decimal> {
    let x = x.trim();
    if x.is_empty() {
        return Err(Error::Parse("Tried to parse empty string".to_string()));
    }
    let unsigned = x.strip_prefix('$').unwrap_or(x);
    let stripped = unsigned.replace(',', "");
    Decimal::from_str_exact(&stripped)
        .map_err(|e| Error::Parse(format!("Invalid number '{}': {}", x, e)))
}

/// Parses `MM/DD/YYYY` or `MM-DD-YYYY` into midnight UTC of that day.
pub fn parse_date(x: &str) -> Result<DateTime<Utc>> {
    let x = x.trim();
    if x.is_empty() {
        return Err(Error::Parse("Tried to parse empty string".to_string()));
    }
    let cleaned = x.replace('/', "-");
    let date = NaiveDate::parse_from_str(&cleaned, "%m-%d-%Y")
        .map_err(|_| Error::Parse(format!("{} doesn't look like a date", cleaned)))?;
    let midnight = date
        .and_hms_opt(0, 0, 0)
        .ok_or_else(|| Error::Parse(format!("{} doesn't look like a date", cleaned)))?;
    Ok(Utc.from_utc_datetime(&midnight))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn plain_numbers() {
        assert_eq!(parse_number("0.1").unwrap(), dec!(0.1));
        assert_eq!(parse_number("5").unwrap(), dec!(5));
        assert_eq!(parse_number("-2.0101").unwrap(), dec!(-2.0101));
    }

    #[test]
    fn dollar_signs_and_commas() {
        assert_eq!(parse_number("$50").unwrap(), dec!(50));
        assert_eq!(parse_number("50,000").unwrap(), dec!(50000));
        assert_eq!(parse_number("50,000,000.00").unwrap(), dec!(50000000));
        assert_eq!(parse_number("$4,000.00").unwrap(), dec!(4000));
    }

    #[test]
    fn bad_numbers() {
        let err = parse_number("").unwrap_err();
        assert!(err.to_string().contains("empty string"));
        assert!(parse_number("500btc").is_err());
        assert!(parse_number("50$0").is_err());
        assert!(parse_number("$").is_err());
    }

    #[test]
    fn slash_and_dash_dates() {
        let expected = Utc.with_ymd_and_hms(2015, 4, 3, 0, 0, 0).unwrap();
        assert_eq!(parse_date("04/03/2015").unwrap(), expected);
        assert_eq!(parse_date("04-03-2015").unwrap(), expected);
        assert_eq!(parse_date("4/3/2015").unwrap(), expected);
    }

    #[test]
    fn bad_dates() {
        let err = parse_date("").unwrap_err();
        assert!(err.to_string().contains("empty string"));
        assert!(parse_date("2015").unwrap_err().to_string().contains("doesn't look like a date"));
        assert!(parse_date("13/01/2015").is_err());
        assert!(parse_date("02/30/2015").is_err());
    }
}
