//! Session loop and sample aggregation
//!
//! The simulator runs many independent sessions of one configured strategy
//! against a shared game, recording the peak bankroll and the number of
//! rounds actually played for each. Sessions share nothing but the random
//! source driving the wheel; every session gets a fresh strategy instance.

use log::debug;
use rand_chacha::ChaCha8Rng;
use serde::Serialize;

use crate::error::Result;
use crate::game::{Chips, Game};
use crate::strategy::{Strategy, StrategyParams};

/// Summary of one completed session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SessionSample {
    /// Highest stake reached, the starting stake included
    pub peak: Chips,
    /// Rounds actually played
    pub rounds: u32,
}

/// Runs independent sessions and accumulates per-session statistics
pub struct Simulator {
    game: Game,
    params: StrategyParams,
    /// Master source from which each session's strategy generator is drawn
    rng: ChaCha8Rng,
    samples: Vec<SessionSample>,
}

impl Simulator {
    pub fn new(game: Game, params: StrategyParams, rng: ChaCha8Rng) -> Self {
        Self {
            game,
            params,
            rng,
            samples: Vec::new(),
        }
    }

    /// Execute one session with a fresh strategy.
    ///
    /// Returns the stake trajectory, starting from the initial stake, with
    /// one entry appended after every played round. The session ends when
    /// the strategy stops playing; there is no other termination condition.
    fn session(&mut self) -> Result<Vec<Chips>> {
        let mut player = self.params.build(self.game.wheel(), &mut self.rng)?;
        let mut trajectory = vec![player.stake()];
        while player.playing() {
            self.game.cycle(player.as_mut())?;
            trajectory.push(player.stake());
        }
        Ok(trajectory)
    }

    /// Run `samples` independent sessions, appending one sample per session.
    pub fn gather(&mut self, samples: usize) -> Result<()> {
        for index in 0..samples {
            let trajectory = self.session()?;
            let peak = trajectory.iter().copied().max().unwrap_or(Chips::ZERO);
            let rounds = (trajectory.len() - 1) as u32;
            debug!(
                "session {}: peak {} over {} rounds (final {})",
                index,
                peak,
                rounds,
                trajectory.last().copied().unwrap_or(Chips::ZERO),
            );
            self.samples.push(SessionSample { peak, rounds });
        }
        Ok(())
    }

    pub fn samples(&self) -> &[SessionSample] {
        &self.samples
    }
}
