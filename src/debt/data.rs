//! Debt records as supplied by the caller's debt store

use serde::{Deserialize, Serialize};

/// A single debt account
///
/// Debts are read-only inputs to the engine. Validation (non-negative balance,
/// positive minimum payment, sane rate) is the caller's responsibility; the
/// CSV loader performs it for file input.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Debt {
    /// Caller-assigned identifier
    pub id: String,

    /// Display name (e.g. "Visa Platinum")
    pub name: String,

    /// Outstanding balance
    pub balance: f64,

    /// Annual interest rate as a decimal fraction (0.1999 = 19.99% APR)
    pub interest_rate: f64,

    /// Required monthly minimum payment
    pub minimum_payment: f64,

    /// Ordering key for the Custom strategy (absent = 0)
    #[serde(default)]
    pub priority: Option<i32>,

    /// Paid-off debts are excluded from every computation
    #[serde(default)]
    pub is_paid_off: bool,
}

impl Debt {
    /// Create an active debt with no custom priority
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        balance: f64,
        interest_rate: f64,
        minimum_payment: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            balance,
            interest_rate,
            minimum_payment,
            priority: None,
            is_paid_off: false,
        }
    }

    /// Set the Custom strategy priority
    pub fn with_priority(mut self, priority: i32) -> Self {
        self.priority = Some(priority);
        self
    }

    /// Mark the debt as already paid off
    pub fn paid_off(mut self) -> Self {
        self.is_paid_off = true;
        self
    }

    /// Monthly periodic rate (annual / 12)
    pub fn monthly_rate(&self) -> f64 {
        self.interest_rate / 12.0
    }

    /// Interest accrued on the current balance in one month
    pub fn monthly_interest(&self) -> f64 {
        self.balance * self.monthly_rate()
    }

    /// Whether the debt participates in payoff calculations
    pub fn is_active(&self) -> bool {
        !self.is_paid_off
    }

    /// Priority used by the Custom strategy
    pub fn effective_priority(&self) -> i32 {
        self.priority.unwrap_or(0)
    }
}
