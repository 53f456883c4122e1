//! Fixed-amount betting on a uniformly random outcome

use std::sync::Arc;

use rand::Rng;
use rand_chacha::ChaCha8Rng;

use crate::error::{Error, Result};
use crate::game::{Bet, Chips};
use crate::wheel::{Outcome, Wheel};

use super::{PlayerCore, Strategy};

/// Stateless strategy drawing each round's outcome uniformly at random
///
/// Owns a private generator derived from the run's master seed. The
/// candidate list is sorted by name so a fixed seed reproduces the same
/// draw sequence regardless of index-map iteration order.
#[derive(Debug)]
pub struct UniformRandom {
    core: PlayerCore,
    bet_amount: Chips,
    outcomes: Vec<Arc<Outcome>>,
    rng: ChaCha8Rng,
}

impl UniformRandom {
    pub fn new(
        core: PlayerCore,
        bet_amount: Chips,
        wheel: &Wheel,
        rng: ChaCha8Rng,
    ) -> Result<Self> {
        let mut outcomes: Vec<Arc<Outcome>> = wheel.outcomes().cloned().collect();
        if outcomes.is_empty() {
            return Err(Error::Config(
                "wheel has no registered outcomes to draw from".to_string(),
            ));
        }
        outcomes.sort_by(|a, b| a.name().cmp(b.name()));
        Ok(Self {
            core,
            bet_amount,
            outcomes,
            rng,
        })
    }
}

impl Strategy for UniformRandom {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn playing(&self) -> bool {
        self.core.budget_allows(self.bet_amount)
    }

    fn determine_bets(&mut self) -> Vec<Bet> {
        let index = self.rng.gen_range(0..self.outcomes.len());
        vec![Bet::new(self.bet_amount, Arc::clone(&self.outcomes[index]))]
    }

    fn win(&mut self, bet: &Bet) {
        self.core.credit(bet.win_amount());
    }

    fn lose(&mut self) {}
}
