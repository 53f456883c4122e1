//! The 1-3-2-6 four-state win progression

use std::sync::Arc;

use crate::error::Result;
use crate::game::{Bet, Chips};
use crate::wheel::{Outcome, Wheel};

use super::{PlayerCore, Strategy};

/// Position in the win cycle, each with a fixed bet multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum BetState {
    NoWins,
    OneWin,
    TwoWins,
    ThreeWins,
}

impl BetState {
    fn multiplier(self) -> u64 {
        match self {
            BetState::NoWins => 1,
            BetState::OneWin => 3,
            BetState::TwoWins => 2,
            BetState::ThreeWins => 6,
        }
    }

    fn next_won(self) -> Self {
        match self {
            BetState::NoWins => BetState::OneWin,
            BetState::OneWin => BetState::TwoWins,
            BetState::TwoWins => BetState::ThreeWins,
            BetState::ThreeWins => BetState::NoWins,
        }
    }

    /// Any loss abandons the cycle, whatever the position.
    fn next_lost(self) -> Self {
        BetState::NoWins
    }
}

/// Walks the bet through base×{1,3,2,6} on consecutive wins
#[derive(Debug)]
pub struct OneThreeTwoSix {
    core: PlayerCore,
    base_bet: Chips,
    state: BetState,
    outcome: Arc<Outcome>,
}

impl OneThreeTwoSix {
    pub fn new(core: PlayerCore, base_bet: Chips, wheel: &Wheel) -> Result<Self> {
        Ok(Self {
            core,
            base_bet,
            state: BetState::NoWins,
            outcome: wheel.outcome("Black")?,
        })
    }

    fn bet_amount(&self) -> Chips {
        self.base_bet.saturating_mul(self.state.multiplier())
    }
}

impl Strategy for OneThreeTwoSix {
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
        self.state = self.state.next_won();
    }

    fn lose(&mut self) {
        self.state = self.state.next_lost();
    }
}
