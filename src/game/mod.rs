//! Game round orchestration
//!
//! One [`Game`] owns the wheel, the table and the spin random source, and
//! drives a strategy through the strictly sequential round protocol:
//! place bets, validate the table, spin, settle each bet, clear the table,
//! report the winning outcomes, count the round.

mod bet;
mod chips;
mod table;

pub use bet::Bet;
pub use chips::Chips;
pub use table::Table;

use rand::RngCore;

use crate::error::Result;
use crate::strategy::Strategy;
use crate::wheel::Wheel;

/// Runs single rounds of roulette against one strategy at a time
pub struct Game {
    wheel: Wheel,
    table: Table,
    rng: Box<dyn RngCore>,
}

impl Game {
    /// The random source is injected so a deterministic substitute can
    /// drive the wheel in tests.
    pub fn new(wheel: Wheel, table: Table, rng: Box<dyn RngCore>) -> Self {
        Self { wheel, table, rng }
    }

    pub fn wheel(&self) -> &Wheel {
        &self.wheel
    }

    pub fn table(&self) -> &Table {
        &self.table
    }

    /// Execute a single round of play with the given strategy.
    ///
    /// A strategy that is not playing makes the round a no-op (the table is
    /// still cleared for hygiene). An over-limit table clears its bets and
    /// propagates the error uncaught; there is deliberately no recovery,
    /// this is a configuration defect in the strategy.
    pub fn cycle(&mut self, player: &mut dyn Strategy) -> Result<()> {
        if player.playing() {
            player.place_bets(&mut self.table);
            if let Err(err) = self.table.validate() {
                self.table.clear_bets();
                return Err(err);
            }
            let winning = self.wheel.spin(self.rng.as_mut());
            for bet in self.table.bets() {
                if winning.contains(bet.outcome()) {
                    player.win(bet);
                } else {
                    player.lose();
                }
            }
            self.table.clear_bets();
            player.winners(winning.outcomes());
            player.end_round();
        } else {
            self.table.clear_bets();
        }
        Ok(())
    }
}
