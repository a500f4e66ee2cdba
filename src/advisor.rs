//! Strategy recommendations built on the comparison results
//!
//! The dashboard's recommendation cards and chat summaries read these values,
//! so they come straight from the engine's rounded numbers.

use serde::{Deserialize, Serialize};

use crate::debt::{Debt, PayoffStrategy};
use crate::money::round_cents;
use crate::payoff::{clamp_to_display_cap, months_to_payoff};
use crate::scenario::{DebtComparison, ScenarioRunner};

/// Interest difference below which the strategies count as equivalent
pub const MATERIAL_INTEREST_DIFFERENCE: f64 = 1.0;

/// Why a strategy was recommended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationReason {
    /// Avalanche saves a material amount of interest
    LowerInterest,
    /// Snowball is strictly cheaper under this engine's cascade model
    SnowballCheaper,
    /// No material difference; smallest balances first for early wins
    QuickWins,
    /// Nothing to pay off
    NoActiveDebts,
}

/// Aggregate view of all active debts paying minimums only
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MinimumOnlyEstimate {
    pub total_balance: f64,
    /// Balance-weighted annual rate
    pub weighted_rate: f64,
    pub total_minimum_payment: f64,
    /// Closed-form months clamped to the presentation cap
    pub months: u32,
    /// False when minimums never cover the interest
    pub resolves: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StrategyRecommendation {
    pub recommended: PayoffStrategy,
    pub reason: RecommendationReason,
    pub comparison: DebtComparison,
    pub minimum_only: MinimumOnlyEstimate,
}

/// Produces strategy recommendations from a scenario runner
#[derive(Debug, Clone, Default)]
pub struct StrategyAdvisor {
    runner: ScenarioRunner,
}

impl StrategyAdvisor {
    pub fn new(runner: ScenarioRunner) -> Self {
        Self { runner }
    }

    pub fn recommend(&self, debts: &[Debt], extra_monthly_payment: f64) -> StrategyRecommendation {
        let comparison = self.runner.compare(debts, extra_monthly_payment);
        let minimum_only = minimum_only_estimate(debts);

        let (recommended, reason) = if comparison.snowball.debts.is_empty() {
            (PayoffStrategy::Snowball, RecommendationReason::NoActiveDebts)
        } else if comparison.interest_saved >= MATERIAL_INTEREST_DIFFERENCE {
            (PayoffStrategy::Avalanche, RecommendationReason::LowerInterest)
        } else if comparison.interest_saved <= -MATERIAL_INTEREST_DIFFERENCE {
            (PayoffStrategy::Snowball, RecommendationReason::SnowballCheaper)
        } else {
            (PayoffStrategy::Snowball, RecommendationReason::QuickWins)
        };

        log::debug!(
            "recommending {} ({:?}), interest difference {:.2}",
            recommended,
            reason,
            comparison.interest_saved
        );

        StrategyRecommendation {
            recommended,
            reason,
            comparison,
            minimum_only,
        }
    }
}

/// Closed-form estimate for paying only the minimums on the combined balance
pub fn minimum_only_estimate(debts: &[Debt]) -> MinimumOnlyEstimate {
    let active: Vec<&Debt> = debts.iter().filter(|d| d.is_active()).collect();

    let total_balance: f64 = active.iter().map(|d| d.balance).sum();
    let total_minimum: f64 = active.iter().map(|d| d.minimum_payment).sum();
    let weighted_rate = if total_balance > 0.0 {
        active.iter().map(|d| d.balance * d.interest_rate).sum::<f64>() / total_balance
    } else {
        0.0
    };

    let months = months_to_payoff(total_balance, weighted_rate, total_minimum);

    MinimumOnlyEstimate {
        total_balance: round_cents(total_balance),
        weighted_rate,
        total_minimum_payment: round_cents(total_minimum),
        months: clamp_to_display_cap(months),
        resolves: months.is_finite(),
    }
}
