//! Fibonacci loss progression

use std::sync::Arc;

use crate::error::Result;
use crate::game::{Bet, Chips};
use crate::wheel::{Outcome, Wheel};

use super::{PlayerCore, Strategy};

/// Advances a (current, previous) multiplier pair on losses
///
/// Starts at (1, 0). A loss moves to (current+previous, current); a win
/// resets the pair. The bet is base × current.
#[derive(Debug)]
pub struct Fibonacci {
    core: PlayerCore,
    base_bet: Chips,
    current: u64,
    previous: u64,
    outcome: Arc<Outcome>,
}

impl Fibonacci {
    pub fn new(core: PlayerCore, base_bet: Chips, wheel: &Wheel) -> Result<Self> {
        Ok(Self {
            core,
            base_bet,
            current: 1,
            previous: 0,
            outcome: wheel.outcome("Black")?,
        })
    }

    fn bet_amount(&self) -> Chips {
        self.base_bet.saturating_mul(self.current)
    }
}

impl Strategy for Fibonacci {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn playing(&self) -> bool {
        self.core.budget_allows(self.bet_amount())
    }

    fn determine_bets(&mut self) -> Vec<Bet> {
        vec![Bet::new(self.bet_amount(), Arc::clone(&self.outcome))]
    }

    fn win(&mut self, bet: &Bet) {
        self.core.credit(bet.win_amount());
        self.current = 1;
        self.previous = 0;
    }

    fn lose(&mut self) {
        let next = self.current.saturating_add(self.previous);
        self.previous = self.current;
        self.current = next;
    }
}
