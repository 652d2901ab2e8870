//! Capital gains for a portfolio of fungible assets, matched lot by lot
//! with LIFO semantics.
//!
//! Transactions are sorted with [`accounting::sort_transactions`] and replayed
//! through an [`accounting::calculation::CapitalGainsCalculation`], which keeps
//! one LIFO inventory per ticker and splits every taxable disposal into
//! short- and long-term [`accounting::CapitalGainsRecord`]s.

pub mod accounting;
pub mod app;
pub mod config;
pub mod error;
pub mod import;

pub use error::{Error, Result};
