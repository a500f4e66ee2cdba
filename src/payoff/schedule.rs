//! Output structures for payoff schedules and plans

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::debt::PayoffStrategy;

/// A single month of one debt's amortization schedule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthlyPayment {
    /// Month index (0-based)
    pub month: u32,
    pub date: NaiveDate,
    pub payment: f64,
    pub principal: f64,
    pub interest: f64,
    pub remaining_balance: f64,
}

/// Complete amortization schedule for one debt
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffSchedule {
    pub debt_id: String,
    pub debt_name: String,
    pub payoff_date: NaiveDate,
    pub months_to_payoff: u32,
    pub total_interest_paid: f64,
    pub total_amount_paid: f64,
    pub payments: Vec<MonthlyPayment>,
}

impl DebtPayoffSchedule {
    /// Final payment of the schedule, if any
    pub fn final_payment(&self) -> Option<&MonthlyPayment> {
        self.payments.last()
    }

    /// Balance left when the schedule ended (non-zero only when the
    /// safety ceiling stopped the simulation)
    pub fn ending_balance(&self) -> f64 {
        self.payments.last().map(|p| p.remaining_balance).unwrap_or(0.0)
    }
}

/// Aggregate payoff plan across all active debts
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtPayoffPlan {
    pub strategy: PayoffStrategy,

    /// Per-debt schedules in strategy order
    pub debts: Vec<DebtPayoffSchedule>,

    pub total_debt: f64,
    pub total_interest: f64,
    pub debt_free_date: NaiveDate,
    pub months_to_debt_free: u32,
    pub extra_monthly_payment: f64,
}

impl DebtPayoffPlan {
    /// Zero-valued plan for an empty debt list
    pub fn empty(strategy: PayoffStrategy, extra_monthly_payment: f64, start_date: NaiveDate) -> Self {
        Self {
            strategy,
            debts: Vec::new(),
            total_debt: 0.0,
            total_interest: 0.0,
            debt_free_date: start_date,
            months_to_debt_free: 0,
            extra_monthly_payment,
        }
    }

    /// Look up a debt's schedule by id
    pub fn schedule_for(&self, debt_id: &str) -> Option<&DebtPayoffSchedule> {
        self.debts.iter().find(|s| s.debt_id == debt_id)
    }

    /// Debt ids in payoff order
    pub fn payoff_order(&self) -> Vec<&str> {
        self.debts.iter().map(|s| s.debt_id.as_str()).collect()
    }

    /// Sum of all payments across every schedule
    pub fn total_paid(&self) -> f64 {
        crate::money::round_cents(self.debts.iter().map(|s| s.total_amount_paid).sum())
    }
}
