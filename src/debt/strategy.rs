//! Payoff ordering strategies

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::Debt;
use crate::error::PayoffError;

/// Order in which debts receive the cascaded extra payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PayoffStrategy {
    /// Smallest balance first
    Snowball,
    /// Highest interest rate first
    Avalanche,
    /// Lowest explicit priority first
    Custom,
}

impl PayoffStrategy {
    /// Comparison used to order two debts under this strategy
    fn compare(&self, a: &Debt, b: &Debt) -> Ordering {
        match self {
            PayoffStrategy::Snowball => a.balance.total_cmp(&b.balance),
            PayoffStrategy::Avalanche => b.interest_rate.total_cmp(&a.interest_rate),
            PayoffStrategy::Custom => a.effective_priority().cmp(&b.effective_priority()),
        }
    }

    /// Reorder debts for this strategy.
    ///
    /// The sort is stable: debts with equal keys keep their input order.
    pub fn order<'a, I>(&self, debts: I) -> Vec<&'a Debt>
    where
        I: IntoIterator<Item = &'a Debt>,
    {
        let mut ordered: Vec<&Debt> = debts.into_iter().collect();
        ordered.sort_by(|a, b| self.compare(a, b));
        ordered
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PayoffStrategy::Snowball => "SNOWBALL",
            PayoffStrategy::Avalanche => "AVALANCHE",
            PayoffStrategy::Custom => "CUSTOM",
        }
    }
}

impl fmt::Display for PayoffStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PayoffStrategy {
    type Err = PayoffError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "SNOWBALL" => Ok(PayoffStrategy::Snowball),
            "AVALANCHE" => Ok(PayoffStrategy::Avalanche),
            "CUSTOM" => Ok(PayoffStrategy::Custom),
            _ => Err(PayoffError::UnknownStrategy(s.to_string())),
        }
    }
}
