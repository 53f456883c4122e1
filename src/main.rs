use spinstats::{Error, Result};

mod app_config;
mod commands;

use app_config::{parse_strategy, Cli, Commands};
use commands::SimulateOptions;

fn main() -> Result<()> {
    use clap::Parser;

    let cli = Cli::parse();

    // Initialize logging
    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug"))
            .init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    match cli.command {
        Commands::Simulate {
            strategy,
            samples,
            stake,
            base_bet,
            rounds,
            table_limit,
            seed,
            config,
            json,
        } => {
            let strategy = strategy
                .map(|name| parse_strategy(&name))
                .transpose()
                .map_err(Error::Config)?;

            commands::simulate_command(SimulateOptions {
                strategy,
                samples,
                stake,
                base_bet,
                rounds,
                table_limit,
                seed,
                config,
                json,
            })?;
        }

        Commands::Strategies => {
            commands::strategies_command();
        }
    }

    Ok(())
}
