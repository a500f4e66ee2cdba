//! Scenario runner for strategy comparisons and what-if questions
//!
//! Wraps a [`PayoffEngine`] and runs it under several strategies or extra
//! payment levels. Every run is independent and pure, so nothing is cached
//! between calls.

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::config::PayoffConfig;
use crate::debt::{Debt, PayoffStrategy};
use crate::money::round_cents;
use crate::payoff::{months_to_payoff, DebtPayoffPlan, PayoffEngine};

/// Snowball and Avalanche plans side by side
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DebtComparison {
    pub snowball: DebtPayoffPlan,
    pub avalanche: DebtPayoffPlan,

    /// Snowball interest minus Avalanche interest (positive: Avalanche is cheaper)
    pub interest_saved: f64,

    /// Snowball months minus Avalanche months
    pub time_difference: i64,
}

/// Effect of changing the extra monthly payment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraPaymentImpact {
    pub months_saved: i64,
    pub interest_saved: f64,
    pub current_plan: DebtPayoffPlan,
    pub new_plan: DebtPayoffPlan,
}

/// One level of an extra-payment sweep
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SweepPoint {
    pub extra_monthly_payment: f64,
    pub months_to_debt_free: u32,
    pub total_interest: f64,
}

/// Runner holding one engine configuration
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let comparison = runner.compare(&debts, 150.0);
/// println!("Avalanche saves {:.2}", comparison.interest_saved);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    engine: PayoffEngine,
}

impl ScenarioRunner {
    /// Create runner with default configuration (starting today)
    pub fn new() -> Self {
        Self::default()
    }

    /// Create runner with a specific configuration
    pub fn with_config(config: PayoffConfig) -> Self {
        Self {
            engine: PayoffEngine::new(config),
        }
    }

    pub fn engine(&self) -> &PayoffEngine {
        &self.engine
    }

    /// Build a single plan
    pub fn run_plan(
        &self,
        debts: &[Debt],
        extra_monthly_payment: f64,
        strategy: PayoffStrategy,
    ) -> DebtPayoffPlan {
        self.engine.build_plan(debts, extra_monthly_payment, strategy)
    }

    /// Compare Snowball against Avalanche at the same extra payment
    pub fn compare(&self, debts: &[Debt], extra_monthly_payment: f64) -> DebtComparison {
        let snowball = self.run_plan(debts, extra_monthly_payment, PayoffStrategy::Snowball);
        let avalanche = self.run_plan(debts, extra_monthly_payment, PayoffStrategy::Avalanche);

        let interest_saved = round_cents(snowball.total_interest - avalanche.total_interest);
        let time_difference =
            snowball.months_to_debt_free as i64 - avalanche.months_to_debt_free as i64;

        DebtComparison {
            snowball,
            avalanche,
            interest_saved,
            time_difference,
        }
    }

    /// Months and interest saved by moving from `current_extra` to `new_extra`
    pub fn impact_of(
        &self,
        debts: &[Debt],
        current_extra: f64,
        new_extra: f64,
        strategy: PayoffStrategy,
    ) -> ExtraPaymentImpact {
        let current_plan = self.run_plan(debts, current_extra, strategy);
        let new_plan = self.run_plan(debts, new_extra, strategy);

        ExtraPaymentImpact {
            months_saved: current_plan.months_to_debt_free as i64
                - new_plan.months_to_debt_free as i64,
            interest_saved: round_cents(current_plan.total_interest - new_plan.total_interest),
            current_plan,
            new_plan,
        }
    }

    /// Run the plan at every extra-payment level.
    ///
    /// Levels are evaluated in parallel; points come back in input order.
    pub fn sweep(
        &self,
        debts: &[Debt],
        levels: &[f64],
        strategy: PayoffStrategy,
    ) -> Vec<SweepPoint> {
        levels
            .par_iter()
            .map(|&extra| {
                let plan = self.run_plan(debts, extra, strategy);
                SweepPoint {
                    extra_monthly_payment: extra,
                    months_to_debt_free: plan.months_to_debt_free,
                    total_interest: plan.total_interest,
                }
            })
            .collect()
    }
}

/// Build a payoff plan starting today
pub fn calculate_debt_payoff_plan(
    debts: &[Debt],
    extra_monthly_payment: f64,
    strategy: PayoffStrategy,
) -> DebtPayoffPlan {
    ScenarioRunner::new().run_plan(debts, extra_monthly_payment, strategy)
}

/// Compare Snowball against Avalanche starting today
pub fn compare_strategies(debts: &[Debt], extra_monthly_payment: f64) -> DebtComparison {
    ScenarioRunner::new().compare(debts, extra_monthly_payment)
}

/// What-if for a change in the extra monthly payment
pub fn calculate_extra_payment_impact(
    debts: &[Debt],
    current_extra: f64,
    new_extra: f64,
    strategy: PayoffStrategy,
) -> ExtraPaymentImpact {
    ScenarioRunner::new().impact_of(debts, current_extra, new_extra, strategy)
}

/// Closed-form months to payoff (may be infinite)
pub fn calculate_months_to_payoff(balance: f64, annual_rate: f64, monthly_payment: f64) -> f64 {
    months_to_payoff(balance, annual_rate, monthly_payment)
}
