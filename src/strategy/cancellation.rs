//! Cancellation (Labouchere) sequence betting

use std::collections::VecDeque;
use std::sync::Arc;

use crate::error::Result;
use crate::game::{Bet, Chips};
use crate::wheel::{Outcome, Wheel};

use super::{PlayerCore, Strategy};

/// Bets first+last of a running sequence of bet units
///
/// The sequence starts as 1..=6. A win cancels both ends; a loss appends
/// the units just lost. Units are scaled by the base bet to price the
/// actual wager.
#[derive(Debug)]
pub struct Cancellation {
    core: PlayerCore,
    base_bet: Chips,
    sequence: VecDeque<u64>,
    outcome: Arc<Outcome>,
}

impl Cancellation {
    pub fn new(core: PlayerCore, base_bet: Chips, wheel: &Wheel) -> Result<Self> {
        Ok(Self {
            core,
            base_bet,
            sequence: (1..=6).collect(),
            outcome: wheel.outcome("Black")?,
        })
    }

    /// First plus last element. Callers must ensure the sequence holds at
    /// least two elements.
    fn bet_units(&self) -> u64 {
        self.sequence.front().unwrap_or(&0) + self.sequence.back().unwrap_or(&0)
    }

    fn bet_amount(&self) -> Chips {
        self.base_bet.saturating_mul(self.bet_units())
    }
}

impl Strategy for Cancellation {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn playing(&self) -> bool {
        // The length check must precede the bet computation: a sequence of
        // one element has no first+last pair to price.
        if self.sequence.len() <= 1 {
            return false;
        }
        self.core.budget_allows(self.bet_amount())
    }

    fn determine_bets(&mut self) -> Vec<Bet> {
        vec![Bet::new(self.bet_amount(), Arc::clone(&self.outcome))]
    }

    fn win(&mut self, bet: &Bet) {
        self.core.credit(bet.win_amount());
        self.sequence.pop_front();
        self.sequence.pop_back();
    }

    fn lose(&mut self) {
        self.sequence.push_back(self.bet_units());
    }
}
