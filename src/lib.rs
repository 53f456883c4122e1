//! Spinstats - a roulette betting-strategy simulation harness
//!
//! Not an interactive game: given a strategy and initial parameters, the
//! harness plays many independent sessions of American double-zero roulette
//! and reports how the strategy tends to perform (peak bankroll and session
//! length per sample). Strictly single-threaded and deterministic given a
//! fixed random seed.

pub mod error;
pub mod wheel; // Outcomes, bins, the wheel and its static construction
pub mod game; // Chips, bets, the table and the round protocol
pub mod strategy; // Betting-strategy state machines
pub mod sim; // Session loop and sample aggregation
pub mod config; // Simulation parameters and TOML loading

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types for easy access
pub use error::{Error, Result};
pub use game::{Bet, Chips, Game, Table};
pub use sim::{SessionSample, Simulator};
pub use strategy::{Strategy, StrategyKind, StrategyParams};
pub use wheel::{builder::build_wheel, Bin, Outcome, Payout, Wheel};
