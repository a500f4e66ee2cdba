use approx::assert_abs_diff_eq;
use chrono::NaiveDate;
use payoff_engine::{
    calculate_debt_payoff_plan, calculate_extra_payment_impact, calculate_months_to_payoff,
    compare_strategies, Debt, PayoffConfig, PayoffEngine, PayoffStrategy, ScenarioRunner,
};

fn start() -> NaiveDate {
    NaiveDate::from_ymd_opt(2027, 1, 1).unwrap()
}

fn household() -> Vec<Debt> {
    vec![
        Debt::new("visa", "Visa", 4200.0, 0.2299, 110.0),
        Debt::new("store", "Store Card", 650.0, 0.2699, 35.0),
        Debt::new("car", "Car Loan", 9800.0, 0.069, 285.0),
        Debt::new("medical", "Medical", 1200.0, 0.0, 50.0),
        Debt::new("old", "Old Card", 0.0, 0.19, 25.0).paid_off(),
    ]
}

#[test]
fn empty_input_gives_zero_plan() {
    let plan = calculate_debt_payoff_plan(&[], 0.0, PayoffStrategy::Avalanche);
    assert_eq!(plan.total_debt, 0.0);
    assert_eq!(plan.total_interest, 0.0);
    assert_eq!(plan.months_to_debt_free, 0);
    assert!(plan.debts.is_empty());
}

#[test]
fn plan_is_identical_across_calls() {
    let runner = ScenarioRunner::with_config(PayoffConfig::starting(start()));
    let debts = household();
    for strategy in [PayoffStrategy::Snowball, PayoffStrategy::Avalanche, PayoffStrategy::Custom] {
        let first = runner.run_plan(&debts, 125.0, strategy);
        let second = runner.run_plan(&debts, 125.0, strategy);
        assert_eq!(first, second);
    }
}

#[test]
fn every_monetary_value_is_rounded_to_cents() {
    let plan = ScenarioRunner::with_config(PayoffConfig::starting(start()))
        .run_plan(&household(), 80.0, PayoffStrategy::Avalanche);

    let is_cents = |v: f64| ((v * 100.0).round() - v * 100.0).abs() < 1e-6;
    assert!(is_cents(plan.total_interest));
    assert!(is_cents(plan.total_debt));
    for schedule in &plan.debts {
        assert!(is_cents(schedule.total_interest_paid));
        assert!(is_cents(schedule.total_amount_paid));
        for p in &schedule.payments {
            assert!(is_cents(p.payment) && is_cents(p.principal));
            assert!(is_cents(p.interest) && is_cents(p.remaining_balance));
        }
    }
}

#[test]
fn plan_totals_and_dates_are_consistent() {
    let debts = household();
    let plan = ScenarioRunner::with_config(PayoffConfig::starting(start()))
        .run_plan(&debts, 0.0, PayoffStrategy::Snowball);

    assert_eq!(plan.debts.len(), 4);
    assert_abs_diff_eq!(plan.total_debt, 4200.0 + 650.0 + 9800.0 + 1200.0, epsilon = 1e-9);

    let max_months = plan.debts.iter().map(|s| s.months_to_payoff).max().unwrap();
    assert_eq!(plan.months_to_debt_free, max_months);

    let latest = plan.debts.iter().map(|s| s.payoff_date).max().unwrap();
    assert_eq!(plan.debt_free_date, latest);

    let interest: f64 = plan.debts.iter().map(|s| s.total_interest_paid).sum();
    assert_abs_diff_eq!(plan.total_interest, interest, epsilon = 0.005);
}

#[test]
fn custom_strategy_follows_priority() {
    let debts = vec![
        Debt::new("car", "Car Loan", 9800.0, 0.069, 285.0).with_priority(1),
        Debt::new("visa", "Visa", 4200.0, 0.2299, 110.0).with_priority(2),
        Debt::new("store", "Store Card", 650.0, 0.2699, 35.0).with_priority(1),
    ];
    let plan = calculate_debt_payoff_plan(&debts, 0.0, PayoffStrategy::Custom);
    assert_eq!(plan.payoff_order(), vec!["car", "store", "visa"]);
}

#[test]
fn closed_form_agrees_with_simulation() {
    let engine = PayoffEngine::new(PayoffConfig::starting(start()));
    let cases = [
        (1200.0, 0.12, 200.0),
        (4200.0, 0.2299, 110.0),
        (9800.0, 0.069, 285.0),
        (650.0, 0.2699, 35.0),
        (15000.0, 0.049, 300.0),
    ];

    for (balance, rate, payment) in cases {
        let debt = Debt::new("d", "D", balance, rate, payment);
        let simulated = engine.simulate(&debt, payment, 0, start()).months_to_payoff as f64;
        let estimated = calculate_months_to_payoff(balance, rate, payment);
        assert!(
            (simulated - estimated).abs() <= 1.0,
            "balance {} rate {} payment {}: simulated {} vs closed form {}",
            balance, rate, payment, simulated, estimated
        );
    }
}

#[test]
fn comparator_signs_match_plans() {
    let comparison = compare_strategies(&household(), 100.0);

    let interest_diff = comparison.snowball.total_interest - comparison.avalanche.total_interest;
    assert_abs_diff_eq!(comparison.interest_saved, interest_diff, epsilon = 0.005);
    assert_eq!(comparison.interest_saved > 0.0, interest_diff > 0.005);

    let month_diff = comparison.snowball.months_to_debt_free as i64
        - comparison.avalanche.months_to_debt_free as i64;
    assert_eq!(comparison.time_difference, month_diff);
}

#[test]
fn more_extra_never_costs_more() {
    let impact = calculate_extra_payment_impact(&household(), 0.0, 250.0, PayoffStrategy::Avalanche);
    assert!(impact.months_saved >= 0);
    assert!(impact.interest_saved >= 0.0);
    assert_eq!(impact.current_plan.extra_monthly_payment, 0.0);
    assert_eq!(impact.new_plan.extra_monthly_payment, 250.0);
}
