//! Engine configuration

use chrono::{Local, NaiveDate};
use std::env;

use crate::error::{PayoffError, Result};

/// Hard ceiling on simulated months per debt.
///
/// Payments that never exceed the monthly interest would otherwise loop
/// forever; this bound guarantees termination.
pub const MAX_PAYOFF_MONTHS: u32 = 600;

/// Remaining balance at or below which a debt counts as paid off
pub const PAYOFF_THRESHOLD: f64 = 0.01;

/// Configuration for payoff calculations
#[derive(Debug, Clone, PartialEq)]
pub struct PayoffConfig {
    /// Safety ceiling on simulated months
    pub max_months: u32,

    /// Balance treated as fully repaid
    pub payoff_threshold: f64,

    /// Calendar date of month 0
    pub start_date: NaiveDate,
}

impl Default for PayoffConfig {
    fn default() -> Self {
        Self {
            max_months: MAX_PAYOFF_MONTHS,
            payoff_threshold: PAYOFF_THRESHOLD,
            start_date: Local::now().date_naive(),
        }
    }
}

impl PayoffConfig {
    /// Default configuration anchored at a fixed start date
    pub fn starting(start_date: NaiveDate) -> Self {
        Self {
            start_date,
            ..Default::default()
        }
    }

    /// Build configuration from environment variables.
    ///
    /// `PAYOFF_MAX_MONTHS` overrides the safety ceiling and `PAYOFF_START_DATE`
    /// (YYYY-MM-DD) the start date. Unparseable month counts fall back to the
    /// default; an unparseable date is an error.
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();

        if let Some(max_months) = env::var("PAYOFF_MAX_MONTHS")
            .ok()
            .and_then(|s| s.parse().ok())
        {
            config.max_months = max_months;
        }

        if let Ok(raw) = env::var("PAYOFF_START_DATE") {
            config.start_date = parse_date(&raw)?;
        }

        Ok(config)
    }

    pub fn with_start_date(mut self, start_date: NaiveDate) -> Self {
        self.start_date = start_date;
        self
    }
}

/// Parse a YYYY-MM-DD date
pub fn parse_date(raw: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| PayoffError::InvalidDate(raw.to_string()))
}
