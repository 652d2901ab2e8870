use std::path::Path;
use serde::{Serialize, Deserialize};

use crate::accounting::AccountingMethod;
use crate::accounting::reports::OutputFormat;
use crate::error::Result;

pub const DEFAULT_TX_SOURCE: &str = "CAT_CSV_IMPORT";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub method: AccountingMethod,
    pub output_format: OutputFormat,
    pub tx_source: String,
}

impl Default for Config {
    fn default() -> Config {
        Config {
            method: AccountingMethod::LIFO,
            output_format: OutputFormat::Json,
            tx_source: DEFAULT_TX_SOURCE.to_string(),
        }
    }
}

impl Config {
    pub fn new<P: AsRef<Path>>(config_path: P) -> Result<Config> {
        let file = std::fs::File::open(config_path)?;
        let config: Config = ::serde_yaml::from_reader(file)?;
        Ok(config)
    }

    /// Loads the file when one is given, otherwise falls back to defaults.
    pub fn load(config_path: Option<&str>) -> Result<Config> {
        match config_path {
            Some(path) => Config::new(path),
            None => Ok(Config::default()),
        }
    }
}
