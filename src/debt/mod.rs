//! Debt records, payoff strategies and CSV loading

mod data;
mod strategy;
pub mod loader;

pub use data::Debt;
pub use strategy::PayoffStrategy;
pub use loader::{load_debts, load_debts_from_reader};
