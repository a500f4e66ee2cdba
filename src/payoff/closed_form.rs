//! Closed-form months-to-payoff estimate
//!
//! Used where a full simulation is unnecessary, such as minimum-payment-only
//! summaries.

use crate::config::MAX_PAYOFF_MONTHS;

/// Months needed to repay `balance` at a fixed `monthly_payment`.
///
/// Uses the standard amortization closed form
/// `n = -ln(1 - r*B/P) / ln(1 + r)` with `r = annual_rate / 12`, rounded up.
///
/// # Returns
/// * `0.0` for a non-positive balance
/// * `ceil(balance / payment)` when the rate is zero
/// * `f64::INFINITY` when the payment does not exceed the monthly interest
///   (the debt never resolves)
///
/// The result is exact, not clamped; see [`clamp_to_display_cap`].
pub fn months_to_payoff(balance: f64, annual_rate: f64, monthly_payment: f64) -> f64 {
    if balance <= 0.0 {
        return 0.0;
    }
    if monthly_payment <= 0.0 {
        return f64::INFINITY;
    }

    let monthly_rate = annual_rate / 12.0;
    if monthly_rate == 0.0 {
        return (balance / monthly_payment).ceil();
    }

    let monthly_interest = balance * monthly_rate;
    if monthly_payment <= monthly_interest {
        return f64::INFINITY;
    }

    let months = -(1.0 - monthly_rate * balance / monthly_payment).ln() / (1.0 + monthly_rate).ln();
    months.ceil()
}

/// Clamp an estimate to the 600-month presentation cap
pub fn clamp_to_display_cap(months: f64) -> u32 {
    if months.is_finite() {
        months.max(0.0).min(MAX_PAYOFF_MONTHS as f64) as u32
    } else {
        MAX_PAYOFF_MONTHS
    }
}
