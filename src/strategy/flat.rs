//! Fixed-amount even-money betting

use std::sync::Arc;

use crate::error::Result;
use crate::game::{Bet, Chips};
use crate::wheel::{Outcome, Wheel};

use super::{PlayerCore, Strategy};

/// Bets the same amount on Black every round. No state to speak of.
#[derive(Debug)]
pub struct FlatBet {
    core: PlayerCore,
    bet_amount: Chips,
    outcome: Arc<Outcome>,
}

impl FlatBet {
    pub fn new(core: PlayerCore, bet_amount: Chips, wheel: &Wheel) -> Result<Self> {
        Ok(Self {
            core,
            bet_amount,
            outcome: wheel.outcome("Black")?,
        })
    }
}

impl Strategy for FlatBet {
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
        vec![Bet::new(self.bet_amount, Arc::clone(&self.outcome))]
    }

    fn win(&mut self, bet: &Bet) {
        self.core.credit(bet.win_amount());
    }

    fn lose(&mut self) {}
}
