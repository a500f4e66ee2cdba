//! Payoff Engine - Debt payoff scheduling and strategy engine for personal-finance dashboards
//!
//! This library provides:
//! - Month-by-month amortization schedules for individual debts
//! - Snowball, Avalanche and Custom payoff ordering
//! - Cascading plans where each debt's minimum rolls into the next
//! - Strategy comparison and extra-payment what-if analysis
//! - Closed-form months-to-payoff estimates
//! - Display formatting for currency, percentages and payoff dates

pub mod error;
pub mod config;
pub mod money;
pub mod debt;
pub mod payoff;
pub mod scenario;
pub mod advisor;
pub mod format;

// Re-export commonly used types
pub use error::{PayoffError, Result};
pub use config::PayoffConfig;
pub use debt::{Debt, PayoffStrategy};
pub use payoff::{PayoffEngine, DebtPayoffPlan, DebtPayoffSchedule, MonthlyPayment};
pub use scenario::{
    ScenarioRunner, DebtComparison, ExtraPaymentImpact, SweepPoint,
    calculate_debt_payoff_plan, compare_strategies, calculate_extra_payment_impact,
    calculate_months_to_payoff,
};
pub use advisor::{StrategyAdvisor, StrategyRecommendation};
