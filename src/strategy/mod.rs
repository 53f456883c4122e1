//! Betting-strategy state machines
//!
//! Each strategy is an independent state machine over the bet-size
//! dimension, driven by the shared round protocol:
//! - `playing` gates the session (round budget open, stake covers the bet)
//! - `determine_bets` prices the next round
//! - `win`/`lose` settle each bet and advance the strategy's state
//! - `winners` reports the round's full winning-outcome set for streak
//!   trackers
//!
//! Strategies are flat compositions, not an inheritance chain: SevenReds
//! holds a doubling sub-state rather than extending Martingale, so hook
//! ordering stays unambiguous.

mod cancellation;
mod fibonacci;
mod flat;
mod martingale;
mod one_three_two_six;
mod random;

pub use cancellation::Cancellation;
pub use fibonacci::Fibonacci;
pub use flat::FlatBet;
pub use martingale::{Martingale, SevenReds};
pub use one_three_two_six::OneThreeTwoSix;
pub use random::UniformRandom;

use std::collections::HashSet;
use std::fmt;
use std::sync::Arc;

use rand::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::game::{Bet, Chips, Table};
use crate::wheel::{Outcome, Wheel};

/// Stake and round budget common to every strategy
#[derive(Debug, Clone, Copy)]
pub struct PlayerCore {
    stake: Chips,
    rounds_remaining: u32,
}

impl PlayerCore {
    pub fn new(stake: Chips, rounds: u32) -> Self {
        Self {
            stake,
            rounds_remaining: rounds,
        }
    }

    pub fn stake(&self) -> Chips {
        self.stake
    }

    pub fn rounds_remaining(&self) -> u32 {
        self.rounds_remaining
    }

    /// True while the round budget is open and the stake covers `bet`
    pub fn budget_allows(&self, bet: Chips) -> bool {
        self.rounds_remaining > 0 && self.stake > bet
    }

    pub fn debit(&mut self, amount: Chips) {
        self.stake = self.stake.saturating_sub(amount);
    }

    pub fn credit(&mut self, amount: Chips) {
        self.stake = self.stake.saturating_add(amount);
    }

    pub fn end_round(&mut self) {
        self.rounds_remaining = self.rounds_remaining.saturating_sub(1);
    }
}

/// Round-based betting policy
///
/// One concrete implementation per betting system. The game drives a
/// strategy strictly through this contract; stake and the round counter
/// change only via `place_bets`, `win` and `end_round`.
pub trait Strategy {
    fn core(&self) -> &PlayerCore;

    fn core_mut(&mut self) -> &mut PlayerCore;

    /// True while the strategy can and wants to keep betting. A strategy
    /// reporting false must not be asked for bets.
    fn playing(&self) -> bool;

    /// Price the next round's bets. At least one bet while playing.
    fn determine_bets(&mut self) -> Vec<Bet>;

    /// Settlement hook for a winning bet: credits the stake and advances
    /// strategy state.
    fn win(&mut self, bet: &Bet);

    /// Settlement hook for a losing bet.
    fn lose(&mut self);

    /// Notification of the round's full winning-outcome set.
    fn winners(&mut self, _outcomes: &HashSet<Arc<Outcome>>) {}

    /// Push this round's bets onto the table. The stake is debited by each
    /// bet's lose amount the instant it is placed, modelling the funds as
    /// at risk before the spin.
    fn place_bets(&mut self, table: &mut Table) {
        for bet in self.determine_bets() {
            self.core_mut().debit(bet.lose_amount());
            table.place_bet(bet);
        }
    }

    fn stake(&self) -> Chips {
        self.core().stake()
    }

    /// Consume one round from the budget, win or lose.
    fn end_round(&mut self) {
        self.core_mut().end_round();
    }
}

/// Selectable betting strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum StrategyKind {
    Flat,
    Martingale,
    SevenReds,
    Random,
    OneThreeTwoSix,
    Cancellation,
    Fibonacci,
}

impl StrategyKind {
    pub const ALL: [StrategyKind; 7] = [
        StrategyKind::Flat,
        StrategyKind::Martingale,
        StrategyKind::SevenReds,
        StrategyKind::Random,
        StrategyKind::OneThreeTwoSix,
        StrategyKind::Cancellation,
        StrategyKind::Fibonacci,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            StrategyKind::Flat => "flat",
            StrategyKind::Martingale => "martingale",
            StrategyKind::SevenReds => "seven-reds",
            StrategyKind::Random => "random",
            StrategyKind::OneThreeTwoSix => "one-three-two-six",
            StrategyKind::Cancellation => "cancellation",
            StrategyKind::Fibonacci => "fibonacci",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            StrategyKind::Flat => "fixed amount on Black every round",
            StrategyKind::Martingale => "double the bet after every loss, reset on a win",
            StrategyKind::SevenReds => "wait for seven reds in a row, then play Martingale on Black",
            StrategyKind::Random => "fixed amount on a uniformly random outcome",
            StrategyKind::OneThreeTwoSix => "1-3-2-6 four-state win progression",
            StrategyKind::Cancellation => "bet first+last of a cancellation sequence",
            StrategyKind::Fibonacci => "advance the Fibonacci pair on losses, reset on a win",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Configuration from which one fresh strategy instance is built per session
#[derive(Debug, Clone, Copy)]
pub struct StrategyParams {
    pub kind: StrategyKind,
    pub stake: Chips,
    pub base_bet: Chips,
    pub rounds: u32,
}

impl StrategyParams {
    /// Build a fresh strategy with independent state.
    ///
    /// Outcome lookups fail fast here, before any round is played. A
    /// randomized strategy draws a private generator from `rng`, so one
    /// master seed reproduces every session of a run.
    pub fn build(&self, wheel: &Wheel, rng: &mut dyn RngCore) -> Result<Box<dyn Strategy>> {
        let core = PlayerCore::new(self.stake, self.rounds);
        Ok(match self.kind {
            StrategyKind::Flat => Box::new(FlatBet::new(core, self.base_bet, wheel)?),
            StrategyKind::Martingale => Box::new(Martingale::new(core, self.base_bet, wheel)?),
            StrategyKind::SevenReds => Box::new(SevenReds::new(core, self.base_bet, wheel)?),
            StrategyKind::Random => {
                let strategy_rng = ChaCha8Rng::from_rng(&mut *rng)?;
                Box::new(UniformRandom::new(core, self.base_bet, wheel, strategy_rng)?)
            }
            StrategyKind::OneThreeTwoSix => {
                Box::new(OneThreeTwoSix::new(core, self.base_bet, wheel)?)
            }
            StrategyKind::Cancellation => Box::new(Cancellation::new(core, self.base_bet, wheel)?),
            StrategyKind::Fibonacci => Box::new(Fibonacci::new(core, self.base_bet, wheel)?),
        })
    }
}
