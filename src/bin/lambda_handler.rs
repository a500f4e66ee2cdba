//! AWS Lambda handler for payoff calculations
//!
//! Accepts a JSON request naming an action (`plan`, `compare`, `whatIf`,
//! `recommend`) together with the caller's debts and returns the engine's
//! result as JSON. Invalid requests produce an `{"error": ...}` body.

use chrono::NaiveDate;
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use payoff_engine::{Debt, PayoffConfig, PayoffStrategy, ScenarioRunner, StrategyAdvisor};
use serde::Deserialize;
use serde_json::{json, Value};

/// Calculation to run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    Plan,
    Compare,
    WhatIf,
    Recommend,
}

/// Input for one invocation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PayoffRequest {
    #[serde(default = "default_action")]
    pub action: Action,

    pub debts: Vec<Debt>,

    /// Extra monthly payment above all minimums (default: 0)
    #[serde(default)]
    pub extra_monthly_payment: f64,

    /// Second extra-payment level, required for `whatIf`
    #[serde(default)]
    pub new_extra_monthly_payment: Option<f64>,

    /// Strategy for `plan` and `whatIf` (default: AVALANCHE)
    #[serde(default = "default_strategy")]
    pub strategy: PayoffStrategy,

    /// Month 0 of the plan (default: today)
    #[serde(default)]
    pub start_date: Option<NaiveDate>,
}

fn default_action() -> Action { Action::Plan }
fn default_strategy() -> PayoffStrategy { PayoffStrategy::Avalanche }

fn error_response(message: &str) -> Value {
    json!({ "error": message })
}

/// Run the requested calculation
fn respond(request: &PayoffRequest) -> Result<Value, serde_json::Error> {
    let mut config = PayoffConfig::default();
    if let Some(start_date) = request.start_date {
        config.start_date = start_date;
    }
    let runner = ScenarioRunner::with_config(config);

    match request.action {
        Action::Plan => serde_json::to_value(runner.run_plan(
            &request.debts,
            request.extra_monthly_payment,
            request.strategy,
        )),
        Action::Compare => {
            serde_json::to_value(runner.compare(&request.debts, request.extra_monthly_payment))
        }
        Action::WhatIf => match request.new_extra_monthly_payment {
            Some(new_extra) => serde_json::to_value(runner.impact_of(
                &request.debts,
                request.extra_monthly_payment,
                new_extra,
                request.strategy,
            )),
            None => Ok(error_response("whatIf requires newExtraMonthlyPayment")),
        },
        Action::Recommend => serde_json::to_value(
            StrategyAdvisor::new(runner).recommend(&request.debts, request.extra_monthly_payment),
        ),
    }
}

/// Lambda handler function
async fn handler(event: LambdaEvent<PayoffRequest>) -> Result<Value, Error> {
    let start = std::time::Instant::now();
    let request = event.payload;

    let response = respond(&request)?;

    log::info!(
        "{:?} for {} debts in {:?}",
        request.action,
        request.debts.len(),
        start.elapsed()
    );
    Ok(response)
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    env_logger::init();
    run(service_fn(handler)).await
}
