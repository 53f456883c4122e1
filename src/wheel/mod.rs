//! Wheel, bins and outcomes for American double-zero roulette
//!
//! The wheel is built once at startup and is read-only afterwards:
//! - 38 bins indexed 0..=37, where 37 is the "00" position
//! - each bin holds the set of outcomes that win when it is spun
//! - a name index resolves canonical outcome names ("Black", "Straight 7")
//!
//! Spinning draws one bin uniformly at random from an injected random
//! source, so tests can substitute a deterministic generator.

pub mod builder;

use std::collections::{HashMap, HashSet};
use std::fmt;
use std::sync::Arc;

use rand::RngCore;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::game::Chips;

/// Number of bins on an American double-zero wheel
pub const BIN_COUNT: usize = 38;

/// Bin index of the "00" position
pub const DOUBLE_ZERO_BIN: usize = 37;

/// Payout odds expressed as numerator:denominator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payout {
    numerator: u32,
    denominator: u32,
}

impl Payout {
    /// Even money, 1:1
    pub const EVEN: Self = Self {
        numerator: 1,
        denominator: 1,
    };

    pub fn new(numerator: u32, denominator: u32) -> Self {
        Self {
            numerator,
            denominator,
        }
    }

    /// Winnings on `amount`, excluding the returned stake
    pub fn calculate(&self, amount: Chips) -> Chips {
        Chips::new(
            amount.amount().saturating_mul(self.numerator as u64) / self.denominator as u64,
        )
    }
}

impl fmt::Display for Payout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.numerator, self.denominator)
    }
}

/// A named bet target carrying its payout odds
///
/// Equality and hashing use the name only. The wheel builder constructs one
/// odds value per name, so the looser key is never observable in practice.
#[derive(Debug, Clone)]
pub struct Outcome {
    name: String,
    odds: Payout,
}

impl Outcome {
    pub fn new(name: impl Into<String>, odds: Payout) -> Self {
        Self {
            name: name.into(),
            odds,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn odds(&self) -> Payout {
        self.odds
    }

    /// Winnings on `amount`, excluding the returned stake. Pure.
    pub fn win_amount(&self, amount: Chips) -> Chips {
        self.odds.calculate(amount)
    }
}

impl PartialEq for Outcome {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Outcome {}

impl std::hash::Hash for Outcome {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.odds)
    }
}

/// The set of outcomes that win when one wheel position is spun
#[derive(Debug, Clone, Default)]
pub struct Bin {
    outcomes: HashSet<Arc<Outcome>>,
}

impl Bin {
    /// Add an outcome. Re-adding an outcome already present is a no-op.
    pub fn add(&mut self, outcome: Arc<Outcome>) {
        self.outcomes.insert(outcome);
    }

    pub fn contains(&self, outcome: &Outcome) -> bool {
        self.outcomes.contains(outcome)
    }

    pub fn outcomes(&self) -> &HashSet<Arc<Outcome>> {
        &self.outcomes
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }
}

/// 38-bin roulette wheel with a name index over every registered outcome
#[derive(Debug, Clone)]
pub struct Wheel {
    bins: Vec<Bin>,
    all_outcomes: HashMap<String, Arc<Outcome>>,
}

impl Default for Wheel {
    fn default() -> Self {
        Self::new()
    }
}

impl Wheel {
    pub fn new() -> Self {
        Self {
            bins: vec![Bin::default(); BIN_COUNT],
            all_outcomes: HashMap::new(),
        }
    }

    /// Add an outcome to the bin at `bin` and register it under its name.
    ///
    /// An index outside 0..=37 is a programmer error and panics with an
    /// out-of-bounds message. Registering a second outcome with an existing
    /// name replaces the index entry (safe under name-only equality).
    pub fn add_outcome(&mut self, bin: usize, outcome: Arc<Outcome>) {
        self.all_outcomes
            .insert(outcome.name().to_owned(), Arc::clone(&outcome));
        self.bins[bin].add(outcome);
    }

    pub fn bin(&self, index: usize) -> &Bin {
        &self.bins[index]
    }

    /// Return one bin drawn uniformly at random.
    ///
    /// Rejection sampling keeps the draw unbiased over 38 bins: raw values
    /// at or above the largest multiple of 38 are discarded and redrawn.
    pub fn spin(&self, rng: &mut dyn RngCore) -> &Bin {
        const MAX_VALID: u64 = u64::MAX - (u64::MAX % (BIN_COUNT as u64));
        let mut raw = rng.next_u64();
        while raw >= MAX_VALID {
            raw = rng.next_u64();
        }
        &self.bins[(raw % BIN_COUNT as u64) as usize]
    }

    /// Resolve a canonical outcome name, failing fast if it was never
    /// registered.
    pub fn outcome(&self, name: &str) -> Result<Arc<Outcome>> {
        self.all_outcomes
            .get(name)
            .cloned()
            .ok_or_else(|| Error::UnknownOutcome(name.to_string()))
    }

    /// All registered outcomes, in index order (arbitrary)
    pub fn outcomes(&self) -> impl Iterator<Item = &Arc<Outcome>> {
        self.all_outcomes.values()
    }
}
