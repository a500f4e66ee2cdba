//! Payoff CLI
//!
//! Command-line interface for debt payoff plans, strategy comparisons and
//! what-if questions over a CSV export of the debt store.

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use payoff_engine::{
    config::parse_date,
    debt::load_debts,
    format::{format_currency, format_duration, format_payoff_date, format_percent},
    payoff::clamp_to_display_cap,
    calculate_months_to_payoff, Debt, DebtPayoffPlan, PayoffConfig, PayoffStrategy,
    ScenarioRunner, StrategyAdvisor,
};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Parser, Debug)]
#[command(name = "payoff", version, about = "Debt payoff plans and strategy comparisons")]
struct Cli {
    /// Start date of month 0 (YYYY-MM-DD, default today or PAYOFF_START_DATE)
    #[arg(long, global = true)]
    start: Option<String>,

    /// Print JSON instead of tables
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Args, Debug)]
struct DebtArgs {
    /// CSV file of debts
    #[arg(short = 'd', long = "debts")]
    debts: PathBuf,

    /// Extra monthly payment above all minimums
    #[arg(short = 'e', long = "extra", default_value_t = 0.0)]
    extra: f64,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build a payoff plan for one strategy
    Plan {
        #[command(flatten)]
        input: DebtArgs,

        /// snowball, avalanche or custom
        #[arg(short = 's', long, default_value = "avalanche")]
        strategy: PayoffStrategy,

        /// Write every monthly payment to this CSV file
        #[arg(long = "schedule-out")]
        schedule_out: Option<PathBuf>,
    },
    /// Compare Snowball against Avalanche
    Compare {
        #[command(flatten)]
        input: DebtArgs,
    },
    /// Effect of changing the extra monthly payment
    WhatIf {
        #[command(flatten)]
        input: DebtArgs,

        /// New extra monthly payment
        #[arg(short = 'n', long = "new-extra")]
        new_extra: f64,

        #[arg(short = 's', long, default_value = "avalanche")]
        strategy: PayoffStrategy,
    },
    /// Debt-free months and interest across a range of extra payments
    Sweep {
        #[arg(short = 'd', long = "debts")]
        debts: PathBuf,

        #[arg(short = 's', long, default_value = "avalanche")]
        strategy: PayoffStrategy,

        /// Largest extra payment in the sweep
        #[arg(long, default_value_t = 500.0)]
        max: f64,

        /// Step between sweep levels
        #[arg(long, default_value_t = 50.0)]
        step: f64,
    },
    /// Closed-form months to pay off a single balance
    Estimate {
        #[arg(long)]
        balance: f64,

        /// Annual rate as a decimal fraction
        #[arg(long)]
        rate: f64,

        #[arg(long)]
        payment: f64,
    },
    /// Recommend a strategy
    Recommend {
        #[command(flatten)]
        input: DebtArgs,
    },
}

/// One CSV row of the schedule export
#[derive(Serialize)]
struct ScheduleRow<'a> {
    debt_id: &'a str,
    debt_name: &'a str,
    month: u32,
    date: String,
    payment: f64,
    principal: f64,
    interest: f64,
    remaining_balance: f64,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    let mut config = PayoffConfig::from_env().context("reading PAYOFF_* environment")?;
    if let Some(start) = &cli.start {
        config.start_date = parse_date(start)?;
    }
    let runner = ScenarioRunner::with_config(config);

    match cli.command {
        Command::Plan { input, strategy, schedule_out } => {
            let debts = read_debts(&input)?;
            let plan = runner.run_plan(&debts, input.extra, strategy);

            if let Some(path) = schedule_out {
                write_schedule(&path, &plan)?;
                eprintln!("Schedule written to: {}", path.display());
            }

            if cli.json {
                print_json(&plan)?;
            } else {
                print_plan(&plan);
            }
        }
        Command::Compare { input } => {
            let debts = read_debts(&input)?;
            let comparison = runner.compare(&debts, input.extra);

            if cli.json {
                print_json(&comparison)?;
            } else {
                print_plan(&comparison.snowball);
                println!();
                print_plan(&comparison.avalanche);
                println!();
                println!("Interest saved by Avalanche: {}", format_currency(comparison.interest_saved));
                println!("Months saved by Avalanche:   {}", comparison.time_difference);
            }
        }
        Command::WhatIf { input, new_extra, strategy } => {
            let debts = read_debts(&input)?;
            let impact = runner.impact_of(&debts, input.extra, new_extra, strategy);

            if cli.json {
                print_json(&impact)?;
            } else {
                println!(
                    "Extra {} -> {} ({}):",
                    format_currency(input.extra),
                    format_currency(new_extra),
                    strategy
                );
                println!(
                    "  Debt-free: {} -> {}",
                    format_payoff_date(impact.current_plan.debt_free_date),
                    format_payoff_date(impact.new_plan.debt_free_date)
                );
                println!("  Months saved:   {}", impact.months_saved);
                println!("  Interest saved: {}", format_currency(impact.interest_saved));
            }
        }
        Command::Sweep { debts, strategy, max, step } => {
            anyhow::ensure!(step > 0.0, "--step must be positive");
            let debts = load_debts(&debts)
                .with_context(|| format!("loading debts from {}", debts.display()))?;

            let levels: Vec<f64> = (0..)
                .map(|i| i as f64 * step)
                .take_while(|&level| level <= max + 1e-9)
                .collect();
            let points = runner.sweep(&debts, &levels, strategy);

            if cli.json {
                print_json(&points)?;
            } else {
                println!("{:>10} {:>8} {:>14}", "Extra", "Months", "Interest");
                println!("{}", "-".repeat(34));
                for point in &points {
                    println!(
                        "{:>10} {:>8} {:>14}",
                        format_currency(point.extra_monthly_payment),
                        point.months_to_debt_free,
                        format_currency(point.total_interest)
                    );
                }
            }
        }
        Command::Estimate { balance, rate, payment } => {
            let months = calculate_months_to_payoff(balance, rate, payment);

            if cli.json {
                print_json(&serde_json::json!({
                    "months": if months.is_finite() { Some(months) } else { None },
                    "displayMonths": clamp_to_display_cap(months),
                }))?;
            } else if months.is_finite() {
                println!(
                    "{} at {} paying {}/month: {}",
                    format_currency(balance),
                    format_percent(rate),
                    format_currency(payment),
                    format_duration(months as u32)
                );
            } else {
                println!(
                    "{}/month does not cover the interest on {} at {}; the balance never reaches zero",
                    format_currency(payment),
                    format_currency(balance),
                    format_percent(rate)
                );
            }
        }
        Command::Recommend { input } => {
            let debts = read_debts(&input)?;
            let advisor = StrategyAdvisor::new(runner);
            let rec = advisor.recommend(&debts, input.extra);

            if cli.json {
                print_json(&rec)?;
            } else {
                println!("Recommended: {} ({:?})", rec.recommended, rec.reason);
                println!("  Avalanche vs Snowball interest: {}", format_currency(rec.comparison.interest_saved));
                if rec.minimum_only.resolves {
                    println!("  Minimums only: {}", format_duration(rec.minimum_only.months));
                } else {
                    println!("  Minimums only: never (payments do not cover interest)");
                }
            }
        }
    }

    Ok(())
}

fn read_debts(input: &DebtArgs) -> Result<Vec<Debt>> {
    load_debts(&input.debts)
        .with_context(|| format!("loading debts from {}", input.debts.display()))
}

fn print_json<T: Serialize>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_plan(plan: &DebtPayoffPlan) {
    println!(
        "{} plan (extra {}/month)",
        plan.strategy,
        format_currency(plan.extra_monthly_payment)
    );
    println!("{:<24} {:>8} {:>14} {:>14} {:>16}", "Debt", "Months", "Interest", "Total paid", "Payoff");
    println!("{}", "-".repeat(80));

    for schedule in &plan.debts {
        println!(
            "{:<24} {:>8} {:>14} {:>14} {:>16}",
            schedule.debt_name,
            schedule.months_to_payoff,
            format_currency(schedule.total_interest_paid),
            format_currency(schedule.total_amount_paid),
            format_payoff_date(schedule.payoff_date),
        );
    }

    println!("{}", "-".repeat(80));
    println!("  Total debt:     {}", format_currency(plan.total_debt));
    println!("  Total interest: {}", format_currency(plan.total_interest));
    println!(
        "  Debt-free:      {} ({})",
        format_payoff_date(plan.debt_free_date),
        format_duration(plan.months_to_debt_free)
    );
}

fn write_schedule(path: &Path, plan: &DebtPayoffPlan) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("creating {}", path.display()))?;

    for schedule in &plan.debts {
        for payment in &schedule.payments {
            writer.serialize(ScheduleRow {
                debt_id: &schedule.debt_id,
                debt_name: &schedule.debt_name,
                month: payment.month,
                date: payment.date.to_string(),
                payment: payment.payment,
                principal: payment.principal,
                interest: payment.interest,
                remaining_balance: payment.remaining_balance,
            })?;
        }
    }

    writer.flush()?;
    Ok(())
}
