//! Running state for a single-debt amortization

use chrono::{Months, NaiveDate};

/// State of a debt at a point in time during simulation
#[derive(Debug, Clone)]
pub struct AmortizationState {
    /// Month index of the next payment (0-based, offset by the start month)
    pub month: u32,

    /// Months simulated so far
    pub months_elapsed: u32,

    /// Calendar date of the next payment
    pub date: NaiveDate,

    /// Unrounded outstanding balance
    pub remaining_balance: f64,

    /// Unrounded interest accumulated so far
    pub total_interest: f64,

    /// Unrounded payments accumulated so far
    pub total_paid: f64,
}

impl AmortizationState {
    /// Initialize state at the start of simulation
    pub fn new(balance: f64, start_month: u32, start_date: NaiveDate) -> Self {
        Self {
            month: start_month,
            months_elapsed: 0,
            date: start_date,
            remaining_balance: balance,
            total_interest: 0.0,
            total_paid: 0.0,
        }
    }

    /// Advance to next month
    pub fn advance_month(&mut self) {
        self.month += 1;
        self.months_elapsed += 1;
        self.date = add_months(self.date, 1);
    }

    /// Whether the balance is still above the payoff threshold
    pub fn is_outstanding(&self, threshold: f64) -> bool {
        self.remaining_balance > threshold
    }
}

/// Add calendar months, clamping the day to the end of shorter months
/// (Jan 31 + 1 month = Feb 28/29).
pub fn add_months(date: NaiveDate, months: u32) -> NaiveDate {
    date.checked_add_months(Months::new(months))
        .unwrap_or(NaiveDate::MAX)
}
