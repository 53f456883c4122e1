//! Simulation parameters and configuration-file loading
//!
//! Parameters come from defaults, an optional TOML file, and CLI flags, in
//! that order of precedence (later wins). Validation rejects parameter
//! combinations that cannot produce a meaningful run before any session
//! starts.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::Chips;
use crate::strategy::{StrategyKind, StrategyParams};

/// Tunable simulation parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SimConfig {
    /// Betting strategy under test
    pub strategy: StrategyKind,
    /// Starting bankroll per session
    pub stake: u64,
    /// Base bet unit
    pub base_bet: u64,
    /// Maximum rounds per session
    pub rounds: u32,
    /// Maximum total stake on the table per round
    pub table_limit: u64,
    /// Number of independent sessions to run
    pub samples: usize,
    /// Master seed; omitted means OS entropy
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            strategy: StrategyKind::Flat,
            stake: 100,
            base_bet: 5,
            rounds: 250,
            table_limit: 350,
            samples: 50,
            seed: None,
        }
    }
}

impl SimConfig {
    /// Load and validate a TOML configuration file.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let config: SimConfig = toml::from_str(&raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Reject parameters that make every session degenerate.
    pub fn validate(&self) -> Result<()> {
        if self.stake == 0 {
            return Err(Error::Config("stake must be positive".to_string()));
        }
        if self.base_bet == 0 {
            return Err(Error::Config("base bet must be positive".to_string()));
        }
        if self.table_limit == 0 {
            return Err(Error::Config("table limit must be positive".to_string()));
        }
        if self.base_bet > self.table_limit {
            return Err(Error::Config(format!(
                "base bet {} exceeds table limit {}",
                self.base_bet, self.table_limit
            )));
        }
        Ok(())
    }

    /// Strategy-facing view of the configuration.
    pub fn strategy_params(&self) -> StrategyParams {
        StrategyParams {
            kind: self.strategy,
            stake: Chips::new(self.stake),
            base_bet: Chips::new(self.base_bet),
            rounds: self.rounds,
        }
    }
}
