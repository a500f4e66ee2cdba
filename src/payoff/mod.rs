//! Debt payoff engine: amortization, cascading plans and closed-form estimates

mod state;
mod engine;
mod schedule;
mod closed_form;

pub use state::{AmortizationState, add_months};
pub use engine::PayoffEngine;
pub use schedule::{DebtPayoffPlan, DebtPayoffSchedule, MonthlyPayment};
pub use closed_form::{months_to_payoff, clamp_to_display_cap};
