//! Application configuration and CLI argument parsing
//!
//! This module handles the command-line interface definitions,
//! argument parsing, and strategy-name resolution.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use spinstats::strategy::StrategyKind;

/// Command-line interface definition for spinstats
#[derive(Parser)]
#[command(name = "spinstats")]
#[command(about = "Roulette betting-strategy simulator")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    #[arg(short, long)]
    pub verbose: bool,
}

/// Available commands for the spinstats CLI
#[derive(Subcommand)]
pub enum Commands {
    /// Run simulation sessions and report per-session statistics
    Simulate {
        /// Betting strategy to play (see `spinstats strategies`)
        #[arg(short, long)]
        strategy: Option<String>,

        /// Number of independent sessions
        #[arg(short = 'n', long)]
        samples: Option<usize>,

        /// Starting bankroll per session
        #[arg(long)]
        stake: Option<u64>,

        /// Base bet unit
        #[arg(long)]
        base_bet: Option<u64>,

        /// Maximum rounds per session
        #[arg(long)]
        rounds: Option<u32>,

        /// Maximum total stake on the table per round
        #[arg(long)]
        table_limit: Option<u64>,

        /// Master seed for a reproducible run
        #[arg(long)]
        seed: Option<u64>,

        /// TOML configuration file; flags override its values
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Emit the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// List selectable betting strategies
    Strategies,
}

/// Parse a strategy name to a StrategyKind
pub fn parse_strategy(name: &str) -> Result<StrategyKind, String> {
    match name.to_lowercase().as_str() {
        "flat" | "passenger57" => Ok(StrategyKind::Flat),
        "martingale" => Ok(StrategyKind::Martingale),
        "sevenreds" | "seven-reds" => Ok(StrategyKind::SevenReds),
        "random" => Ok(StrategyKind::Random),
        "1326" | "1-3-2-6" | "onethreetwosix" | "one-three-two-six" => {
            Ok(StrategyKind::OneThreeTwoSix)
        }
        "cancellation" | "labouchere" => Ok(StrategyKind::Cancellation),
        "fibonacci" => Ok(StrategyKind::Fibonacci),
        _ => Err(format!(
            "invalid strategy: '{}'. Use 'spinstats strategies' to list available strategies.",
            name
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strategy_parsing() {
        assert!(matches!(parse_strategy("flat"), Ok(StrategyKind::Flat)));
        assert!(matches!(
            parse_strategy("martingale"),
            Ok(StrategyKind::Martingale)
        ));
        assert!(matches!(
            parse_strategy("seven-reds"),
            Ok(StrategyKind::SevenReds)
        ));
        assert!(matches!(
            parse_strategy("1326"),
            Ok(StrategyKind::OneThreeTwoSix)
        ));
        assert!(matches!(
            parse_strategy("labouchere"),
            Ok(StrategyKind::Cancellation)
        ));

        // Case insensitive
        assert!(matches!(parse_strategy("FLAT"), Ok(StrategyKind::Flat)));
        assert!(matches!(
            parse_strategy("Fibonacci"),
            Ok(StrategyKind::Fibonacci)
        ));

        // Invalid strategy
        assert!(parse_strategy("doubledown").is_err());
    }

    #[test]
    fn test_every_canonical_name_parses() {
        for kind in StrategyKind::ALL {
            assert_eq!(parse_strategy(kind.name()), Ok(kind));
        }
    }
}
