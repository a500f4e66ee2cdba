//! Core payoff engine: single-debt amortization and the cascading plan

use chrono::NaiveDate;
use log::{debug, warn};

use super::schedule::{DebtPayoffPlan, DebtPayoffSchedule, MonthlyPayment};
use super::state::{add_months, AmortizationState};
use crate::config::PayoffConfig;
use crate::debt::{Debt, PayoffStrategy};
use crate::money::round_cents;

/// Main payoff engine
///
/// Holds only configuration; every call builds its output fresh from the
/// inputs, so one engine can be shared freely between callers.
#[derive(Debug, Clone, Default)]
pub struct PayoffEngine {
    config: PayoffConfig,
}

impl PayoffEngine {
    /// Create a new payoff engine with given config
    pub fn new(config: PayoffConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PayoffConfig {
        &self.config
    }

    /// Simulate one debt to zero at a fixed monthly payment.
    ///
    /// Stops when the balance is at or below the payoff threshold or after
    /// `max_months`, whichever comes first. A payment that never exceeds the
    /// monthly interest runs to the ceiling.
    pub fn simulate(
        &self,
        debt: &Debt,
        monthly_payment: f64,
        start_month: u32,
        start_date: NaiveDate,
    ) -> DebtPayoffSchedule {
        let mut state = AmortizationState::new(debt.balance, start_month, start_date);
        let monthly_rate = debt.monthly_rate();
        let mut payments = Vec::new();

        while state.is_outstanding(self.config.payoff_threshold)
            && state.months_elapsed < self.config.max_months
        {
            let row = self.calculate_month(monthly_rate, monthly_payment, &mut state);
            payments.push(row);
        }

        if state.is_outstanding(self.config.payoff_threshold) {
            warn!(
                "debt '{}' not repaid after {} months at {:.2}/month (balance {:.2})",
                debt.id, state.months_elapsed, monthly_payment, state.remaining_balance
            );
        }

        DebtPayoffSchedule {
            debt_id: debt.id.clone(),
            debt_name: debt.name.clone(),
            payoff_date: state.date,
            months_to_payoff: state.months_elapsed,
            total_interest_paid: round_cents(state.total_interest),
            total_amount_paid: round_cents(state.total_paid),
            payments,
        }
    }

    /// Calculate one month of interest and principal, then advance the state
    fn calculate_month(
        &self,
        monthly_rate: f64,
        monthly_payment: f64,
        state: &mut AmortizationState,
    ) -> MonthlyPayment {
        let monthly_interest = state.remaining_balance * monthly_rate;

        // Final installment is capped so the balance cannot go negative
        let actual_payment = monthly_payment.min(state.remaining_balance + monthly_interest);
        let principal = actual_payment - monthly_interest;

        state.remaining_balance = (state.remaining_balance - principal).max(0.0);
        state.total_interest += monthly_interest;
        state.total_paid += actual_payment;

        let row = MonthlyPayment {
            month: state.month,
            date: state.date,
            payment: round_cents(actual_payment),
            principal: round_cents(principal),
            interest: round_cents(monthly_interest),
            remaining_balance: round_cents(state.remaining_balance),
        };

        state.advance_month();
        row
    }

    /// Build the aggregate plan for a set of debts.
    ///
    /// Debts are ordered by `strategy`. Each debt is simulated from month 0 at
    /// its minimum plus the pool accumulated so far; its minimum then joins the
    /// pool for every debt after it. Later debts therefore get the full
    /// cascaded payment from the first month, not from the prior debt's payoff.
    pub fn build_plan(
        &self,
        debts: &[Debt],
        extra_monthly_payment: f64,
        strategy: PayoffStrategy,
    ) -> DebtPayoffPlan {
        let start_date = self.config.start_date;
        let ordered = strategy.order(debts.iter().filter(|d| d.is_active()));

        if ordered.is_empty() {
            return DebtPayoffPlan::empty(strategy, extra_monthly_payment, start_date);
        }

        let mut pool = extra_monthly_payment;
        let mut schedules = Vec::with_capacity(ordered.len());

        for debt in &ordered {
            let total_payment = round_cents(debt.minimum_payment + pool);
            schedules.push(self.simulate(debt, total_payment, 0, start_date));
            pool += debt.minimum_payment;
        }

        let months_to_debt_free = schedules
            .iter()
            .map(|s| s.months_to_payoff)
            .max()
            .unwrap_or(0);
        let total_interest = round_cents(schedules.iter().map(|s| s.total_interest_paid).sum());
        let total_debt = round_cents(ordered.iter().map(|d| d.balance).sum());

        debug!(
            "{} plan: {} debts, {} months to debt-free, interest {:.2}",
            strategy,
            schedules.len(),
            months_to_debt_free,
            total_interest
        );

        DebtPayoffPlan {
            strategy,
            debts: schedules,
            total_debt,
            total_interest,
            debt_free_date: add_months(start_date, months_to_debt_free),
            months_to_debt_free,
            extra_monthly_payment,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    fn start() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    fn engine() -> PayoffEngine {
        PayoffEngine::new(PayoffConfig::starting(start()))
    }

    #[test]
    fn test_single_debt_exact_schedule() {
        let debt = Debt::new("visa", "Visa", 1200.0, 0.12, 200.0);
        let schedule = engine().simulate(&debt, 200.0, 0, start());

        assert_eq!(schedule.months_to_payoff, 7);
        assert_eq!(schedule.payments.len(), 7);
        assert_abs_diff_eq!(schedule.total_interest_paid, 43.86, epsilon = 0.01);

        let first = &schedule.payments[0];
        assert_eq!(first.month, 0);
        assert_eq!(first.date, start());
        assert_eq!(first.interest, 12.0);
        assert_eq!(first.principal, 188.0);
        assert_eq!(first.remaining_balance, 1012.0);

        let last = schedule.final_payment().unwrap();
        assert!(last.payment < 200.0, "final payment should be capped: {}", last.payment);
        assert_eq!(last.remaining_balance, 0.0);
        assert_eq!(schedule.payoff_date, NaiveDate::from_ymd_opt(2026, 8, 15).unwrap());
        assert_abs_diff_eq!(schedule.total_amount_paid, 1243.86, epsilon = 0.01);
    }

    #[test]
    fn test_payment_equal_to_interest_hits_ceiling() {
        let debt = Debt::new("card", "Card", 1000.0, 0.24, 20.0);
        let schedule = engine().simulate(&debt, 20.0, 0, start());

        assert_eq!(schedule.months_to_payoff, 600);
        assert_eq!(schedule.payments.len(), 600);
        assert_abs_diff_eq!(schedule.ending_balance(), 1000.0, epsilon = 0.01);
    }

    #[test]
    fn test_zero_balance_is_immediate() {
        let debt = Debt::new("zero", "Zero", 0.0, 0.2, 25.0);
        let schedule = engine().simulate(&debt, 25.0, 0, start());

        assert_eq!(schedule.months_to_payoff, 0);
        assert_eq!(schedule.total_interest_paid, 0.0);
        assert!(schedule.payments.is_empty());
        assert_eq!(schedule.payoff_date, start());
    }

    #[test]
    fn test_start_month_offsets_index_only() {
        let debt = Debt::new("small", "Small", 150.0, 0.0, 100.0);
        let schedule = engine().simulate(&debt, 100.0, 12, start());

        assert_eq!(schedule.months_to_payoff, 2);
        assert_eq!(schedule.payments[0].month, 12);
        assert_eq!(schedule.payments[1].month, 13);
        assert_eq!(schedule.payments[1].payment, 50.0);
        assert_eq!(schedule.payments[1].date, NaiveDate::from_ymd_opt(2026, 2, 15).unwrap());
    }

    #[test]
    fn test_custom_ceiling_from_config() {
        let config = PayoffConfig {
            max_months: 24,
            ..PayoffConfig::starting(start())
        };
        let debt = Debt::new("card", "Card", 1000.0, 0.24, 20.0);
        let schedule = PayoffEngine::new(config).simulate(&debt, 20.0, 0, start());
        assert_eq!(schedule.months_to_payoff, 24);
    }

    #[test]
    fn test_empty_plan() {
        let plan = engine().build_plan(&[], 0.0, PayoffStrategy::Avalanche);

        assert_eq!(plan.total_debt, 0.0);
        assert_eq!(plan.total_interest, 0.0);
        assert_eq!(plan.months_to_debt_free, 0);
        assert!(plan.debts.is_empty());
        assert_eq!(plan.debt_free_date, start());
    }

    #[test]
    fn test_cascade_pool_grows_after_each_debt() {
        // Zero-rate debts make the payment levels directly observable
        let debts = vec![
            Debt::new("a", "A", 1000.0, 0.0, 100.0),
            Debt::new("b", "B", 300.0, 0.0, 50.0),
            Debt::new("c", "C", 600.0, 0.0, 25.0),
        ];
        let plan = engine().build_plan(&debts, 75.0, PayoffStrategy::Snowball);

        assert_eq!(plan.payoff_order(), vec!["b", "c", "a"]);

        // b: 50 + 75 = 125/month
        let b = plan.schedule_for("b").unwrap();
        assert_eq!(b.payments[0].payment, 125.0);
        assert_eq!(b.months_to_payoff, 3);

        // c: 25 + 75 + 50 = 150/month
        let c = plan.schedule_for("c").unwrap();
        assert_eq!(c.payments[0].payment, 150.0);
        assert_eq!(c.months_to_payoff, 4);

        // a: 100 + 75 + 50 + 25 = 250/month
        let a = plan.schedule_for("a").unwrap();
        assert_eq!(a.payments[0].payment, 250.0);
        assert_eq!(a.months_to_payoff, 4);

        assert_eq!(plan.months_to_debt_free, 4);
        assert_eq!(plan.total_debt, 1900.0);
        assert_eq!(plan.total_interest, 0.0);
        assert_eq!(plan.debt_free_date, NaiveDate::from_ymd_opt(2026, 5, 15).unwrap());
    }

    #[test]
    fn test_paid_off_debts_are_excluded() {
        let debts = vec![
            Debt::new("done", "Done", 5000.0, 0.2, 100.0).paid_off(),
            Debt::new("live", "Live", 400.0, 0.0, 100.0),
        ];
        let plan = engine().build_plan(&debts, 0.0, PayoffStrategy::Snowball);

        assert_eq!(plan.payoff_order(), vec!["live"]);
        assert_eq!(plan.total_debt, 400.0);
        // The paid-off debt's minimum never joins the pool
        assert_eq!(plan.debts[0].payments[0].payment, 100.0);
    }

    #[test]
    fn test_plan_is_idempotent() {
        let debts = vec![
            Debt::new("a", "A", 3000.0, 0.24, 80.0),
            Debt::new("b", "B", 500.0, 0.06, 50.0),
        ];
        let engine = engine();
        let first = engine.build_plan(&debts, 100.0, PayoffStrategy::Avalanche);
        let second = engine.build_plan(&debts, 100.0, PayoffStrategy::Avalanche);
        assert_eq!(first, second);
    }
}
