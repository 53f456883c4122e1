//! Command implementations for the spinstats CLI
//!
//! This module assembles the wheel, game and simulator from the resolved
//! configuration, runs the requested sessions, and prints the report.

use std::path::PathBuf;

use log::info;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use spinstats::config::SimConfig;
use spinstats::error::Result;
use spinstats::game::{Chips, Game, Table};
use spinstats::sim::{SessionSample, Simulator};
use spinstats::strategy::StrategyKind;
use spinstats::wheel::builder::build_wheel;

/// CLI flag overrides for the simulate command
#[derive(Debug, Default)]
pub struct SimulateOptions {
    pub strategy: Option<StrategyKind>,
    pub samples: Option<usize>,
    pub stake: Option<u64>,
    pub base_bet: Option<u64>,
    pub rounds: Option<u32>,
    pub table_limit: Option<u64>,
    pub seed: Option<u64>,
    pub config: Option<PathBuf>,
    pub json: bool,
}

/// Machine-readable simulation report
#[derive(Serialize)]
struct Report<'a> {
    config: &'a SimConfig,
    samples: &'a [SessionSample],
}

/// Resolve the configuration: defaults, then file, then flag overrides.
fn resolve_config(options: &SimulateOptions) -> Result<SimConfig> {
    let mut config = match &options.config {
        Some(path) => SimConfig::load(path)?,
        None => SimConfig::default(),
    };
    if let Some(kind) = options.strategy {
        config.strategy = kind;
    }
    if let Some(samples) = options.samples {
        config.samples = samples;
    }
    if let Some(stake) = options.stake {
        config.stake = stake;
    }
    if let Some(base_bet) = options.base_bet {
        config.base_bet = base_bet;
    }
    if let Some(rounds) = options.rounds {
        config.rounds = rounds;
    }
    if let Some(table_limit) = options.table_limit {
        config.table_limit = table_limit;
    }
    if options.seed.is_some() {
        config.seed = options.seed;
    }
    config.validate()?;
    Ok(config)
}

/// Run the configured sessions and print the report.
pub fn simulate_command(options: SimulateOptions) -> Result<()> {
    let config = resolve_config(&options)?;

    let mut master_rng = match config.seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    };
    let spin_rng = ChaCha8Rng::from_rng(&mut master_rng)?;

    info!(
        "running {} sessions of {} (stake {}, base bet {}, {} rounds, table limit {})",
        config.samples, config.strategy, config.stake, config.base_bet, config.rounds,
        config.table_limit,
    );

    let game = Game::new(
        build_wheel(),
        Table::new(Chips::new(config.table_limit)),
        Box::new(spin_rng),
    );
    let mut simulator = Simulator::new(game, config.strategy_params(), master_rng);
    simulator.gather(config.samples)?;

    if options.json {
        let report = Report {
            config: &config,
            samples: simulator.samples(),
        };
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print_report(&config, simulator.samples());
    }
    Ok(())
}

fn print_report(config: &SimConfig, samples: &[SessionSample]) {
    println!("strategy: {} ({} sessions)", config.strategy, samples.len());
    println!("{:>8}  {:>12}  {:>6}", "session", "peak stake", "rounds");
    for (index, sample) in samples.iter().enumerate() {
        println!(
            "{:>8}  {:>12}  {:>6}",
            index + 1,
            sample.peak,
            sample.rounds
        );
    }
    if samples.is_empty() {
        return;
    }

    let peak_sum: u64 = samples.iter().map(|sample| sample.peak.amount()).sum();
    let round_sum: u64 = samples.iter().map(|sample| sample.rounds as u64).sum();
    let best = samples
        .iter()
        .map(|sample| sample.peak)
        .max()
        .unwrap_or(Chips::ZERO);
    // Sessions stopped by bankroll or sequence exhaustion, not the budget.
    let stopped_early = samples
        .iter()
        .filter(|sample| sample.rounds < config.rounds)
        .count();
    println!();
    println!(
        "mean peak stake: {:.2}",
        peak_sum as f64 / samples.len() as f64
    );
    println!(
        "mean rounds played: {:.2}",
        round_sum as f64 / samples.len() as f64
    );
    println!("best peak stake: {}", best);
    println!(
        "sessions stopped before the round budget: {}/{}",
        stopped_early,
        samples.len()
    );
}

/// Print the selectable strategies with one-line descriptions.
pub fn strategies_command() {
    println!("Available strategies:");
    for kind in StrategyKind::ALL {
        println!("  {:<18} {}", kind.name(), kind.description());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flag_overrides_beat_defaults() {
        let options = SimulateOptions {
            strategy: Some(StrategyKind::Fibonacci),
            samples: Some(3),
            stake: Some(500),
            seed: Some(7),
            ..SimulateOptions::default()
        };
        let config = resolve_config(&options).unwrap();
        assert_eq!(config.strategy, StrategyKind::Fibonacci);
        assert_eq!(config.samples, 3);
        assert_eq!(config.stake, 500);
        assert_eq!(config.seed, Some(7));
        // Untouched fields keep their defaults.
        assert_eq!(config.rounds, 250);
    }

    #[test]
    fn test_overrides_are_validated() {
        let options = SimulateOptions {
            base_bet: Some(0),
            ..SimulateOptions::default()
        };
        assert!(resolve_config(&options).is_err());
    }

    #[test]
    fn test_flags_override_file_values() {
        use std::io::Write;

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "strategy = \"cancellation\"\nstake = 400\nrounds = 80").unwrap();

        let options = SimulateOptions {
            config: Some(file.path().to_path_buf()),
            stake: Some(250),
            ..SimulateOptions::default()
        };
        let config = resolve_config(&options).unwrap();
        assert_eq!(config.strategy, StrategyKind::Cancellation);
        // The flag beats the file, the file beats the default.
        assert_eq!(config.stake, 250);
        assert_eq!(config.rounds, 80);
        assert_eq!(config.table_limit, 350);
    }

    #[test]
    fn test_json_report_carries_every_sample() {
        let config = SimConfig {
            samples: 6,
            rounds: 10,
            seed: Some(5),
            ..SimConfig::default()
        };
        let mut master = ChaCha8Rng::seed_from_u64(config.seed.unwrap());
        let spin_rng = ChaCha8Rng::from_rng(&mut master).unwrap();
        let game = Game::new(
            build_wheel(),
            Table::new(Chips::new(config.table_limit)),
            Box::new(spin_rng),
        );
        let mut simulator = Simulator::new(game, config.strategy_params(), master);
        simulator.gather(config.samples).unwrap();

        let report = Report {
            config: &config,
            samples: simulator.samples(),
        };
        let json = serde_json::to_string_pretty(&report).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["samples"].as_array().unwrap().len(), 6);
        assert_eq!(parsed["config"]["strategy"], "flat");
    }

    #[test]
    fn test_simulate_runs_end_to_end() {
        let options = SimulateOptions {
            strategy: Some(StrategyKind::Martingale),
            samples: Some(2),
            rounds: Some(20),
            seed: Some(11),
            json: true,
            ..SimulateOptions::default()
        };
        assert!(simulate_command(options).is_ok());
    }
}
