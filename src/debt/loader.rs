//! Load debts from CSV exports of the debt store

use super::Debt;
use crate::error::{PayoffError, Result};
use csv::Reader;
use std::path::Path;

/// Raw CSV row
///
/// Expected header: `id,name,balance,interest_rate,minimum_payment,priority,is_paid_off`.
/// `priority` and `is_paid_off` may be omitted or left blank.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    id: String,
    name: String,
    balance: f64,
    interest_rate: f64,
    minimum_payment: f64,
    #[serde(default)]
    priority: Option<i32>,
    #[serde(default)]
    is_paid_off: Option<bool>,
}

impl CsvRow {
    fn into_debt(self) -> Result<Debt> {
        let invalid = |reason: &str| PayoffError::InvalidDebt {
            id: self.id.clone(),
            reason: reason.to_string(),
        };

        if !self.balance.is_finite() || self.balance < 0.0 {
            return Err(invalid("balance must be a non-negative amount"));
        }
        if !self.interest_rate.is_finite() || self.interest_rate < 0.0 {
            return Err(invalid("interest_rate must be a non-negative decimal fraction"));
        }

        let is_paid_off = self.is_paid_off.unwrap_or(false);
        if !is_paid_off && !(self.minimum_payment > 0.0) {
            return Err(invalid("minimum_payment must be positive for an active debt"));
        }

        Ok(Debt {
            id: self.id,
            name: self.name,
            balance: self.balance,
            interest_rate: self.interest_rate,
            minimum_payment: self.minimum_payment,
            priority: self.priority,
            is_paid_off,
        })
    }
}

/// Load all debts from a CSV file
pub fn load_debts<P: AsRef<Path>>(path: P) -> Result<Vec<Debt>> {
    let reader = Reader::from_path(path)?;
    read_rows(reader)
}

/// Load debts from any reader (e.g., string buffer, stdin)
pub fn load_debts_from_reader<R: std::io::Read>(reader: R) -> Result<Vec<Debt>> {
    read_rows(Reader::from_reader(reader))
}

fn read_rows<R: std::io::Read>(mut reader: Reader<R>) -> Result<Vec<Debt>> {
    let mut debts = Vec::new();

    for result in reader.deserialize() {
        let row: CsvRow = result?;
        debts.push(row.into_debt()?);
    }

    log::debug!("loaded {} debts", debts.len());
    Ok(debts)
}
