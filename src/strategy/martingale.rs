//! Martingale doubling and the SevenReds waiting variant

use std::collections::HashSet;
use std::sync::Arc;

use crate::error::Result;
use crate::game::{Bet, Chips};
use crate::wheel::{Outcome, Wheel};

use super::{PlayerCore, Strategy};

/// Loss-streak doubling progression shared by Martingale and SevenReds
///
/// The exponent is capped so a pathological streak saturates into an
/// unpayable bet (which ends the session) instead of overflowing.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DoublingState {
    base_bet: Chips,
    loss_count: u32,
}

impl DoublingState {
    pub(crate) fn new(base_bet: Chips) -> Self {
        Self {
            base_bet,
            loss_count: 0,
        }
    }

    /// base × 2^losses
    pub(crate) fn bet_amount(&self) -> Chips {
        let factor = 1u64.checked_shl(self.loss_count).unwrap_or(u64::MAX);
        self.base_bet.saturating_mul(factor)
    }

    pub(crate) fn record_win(&mut self) {
        self.loss_count = 0;
    }

    pub(crate) fn record_loss(&mut self) {
        self.loss_count = self.loss_count.saturating_add(1);
    }

    pub(crate) fn loss_count(&self) -> u32 {
        self.loss_count
    }
}

/// Doubles the bet on Black after every loss, resets to base on a win
#[derive(Debug)]
pub struct Martingale {
    core: PlayerCore,
    state: DoublingState,
    outcome: Arc<Outcome>,
}

impl Martingale {
    pub fn new(core: PlayerCore, base_bet: Chips, wheel: &Wheel) -> Result<Self> {
        Ok(Self {
            core,
            state: DoublingState::new(base_bet),
            outcome: wheel.outcome("Black")?,
        })
    }
}

impl Strategy for Martingale {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn playing(&self) -> bool {
        self.core.budget_allows(self.state.bet_amount())
    }

    fn determine_bets(&mut self) -> Vec<Bet> {
        vec![Bet::new(self.state.bet_amount(), Arc::clone(&self.outcome))]
    }

    fn win(&mut self, bet: &Bet) {
        self.core.credit(bet.win_amount());
        self.state.record_win();
    }

    fn lose(&mut self) {
        self.state.record_loss();
    }
}

/// Rounds of red wins required before SevenReds starts betting
const RED_STREAK: u8 = 7;

/// Martingale variant that waits out seven consecutive red wins
///
/// While waiting it places a zero-amount bet on Black each round, observing
/// the wheel without risking stake; the doubling state is frozen until the
/// streak completes. Holds the doubling progression as a sub-state rather
/// than extending [`Martingale`].
#[derive(Debug)]
pub struct SevenReds {
    core: PlayerCore,
    state: DoublingState,
    red: Arc<Outcome>,
    black: Arc<Outcome>,
    waiting: bool,
    reds_needed: u8,
}

impl SevenReds {
    pub fn new(core: PlayerCore, base_bet: Chips, wheel: &Wheel) -> Result<Self> {
        Ok(Self {
            core,
            state: DoublingState::new(base_bet),
            red: wheel.outcome("Red")?,
            black: wheel.outcome("Black")?,
            waiting: true,
            reds_needed: RED_STREAK,
        })
    }

    fn required_bet(&self) -> Chips {
        if self.waiting {
            Chips::ZERO
        } else {
            self.state.bet_amount()
        }
    }
}

impl Strategy for SevenReds {
    fn core(&self) -> &PlayerCore {
        &self.core
    }

    fn core_mut(&mut self) -> &mut PlayerCore {
        &mut self.core
    }

    fn playing(&self) -> bool {
        self.core.budget_allows(self.required_bet())
    }

    fn determine_bets(&mut self) -> Vec<Bet> {
        vec![Bet::new(self.required_bet(), Arc::clone(&self.black))]
    }

    fn win(&mut self, bet: &Bet) {
        self.core.credit(bet.win_amount());
        if !self.waiting {
            self.state.record_win();
        }
    }

    fn lose(&mut self) {
        // A waiting round must not inflate the loss streak.
        if !self.waiting {
            self.state.record_loss();
        }
    }

    fn winners(&mut self, outcomes: &HashSet<Arc<Outcome>>) {
        if !self.waiting {
            return;
        }
        if outcomes.contains(self.red.as_ref()) {
            self.reds_needed -= 1;
            if self.reds_needed == 0 {
                self.waiting = false;
            }
        } else {
            self.reds_needed = RED_STREAK;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::builder::build_wheel;

    fn martingale(stake: u64, base: u64, rounds: u32) -> Martingale {
        let wheel = build_wheel();
        Martingale::new(
            PlayerCore::new(Chips::new(stake), rounds),
            Chips::new(base),
            &wheel,
        )
        .unwrap()
    }

    fn seven_reds(stake: u64, base: u64, rounds: u32) -> SevenReds {
        let wheel = build_wheel();
        SevenReds::new(
            PlayerCore::new(Chips::new(stake), rounds),
            Chips::new(base),
            &wheel,
        )
        .unwrap()
    }

    fn winning_set(wheel: &Wheel, names: &[&str]) -> HashSet<Arc<Outcome>> {
        names
            .iter()
            .map(|name| wheel.outcome(name).unwrap())
            .collect()
    }

    #[test]
    fn test_bet_doubles_per_loss() {
        let mut player = martingale(10_000, 5, 250);
        for losses in 0..4u32 {
            let bets = player.determine_bets();
            assert_eq!(bets[0].amount(), Chips::new(5 * 2u64.pow(losses)));
            player.lose();
        }
    }

    #[test]
    fn test_win_resets_progression() {
        let mut player = martingale(10_000, 5, 250);
        player.lose();
        player.lose();
        player.lose();
        assert_eq!(player.determine_bets()[0].amount(), Chips::new(40));

        let bet = player.determine_bets().remove(0);
        player.win(&bet);
        assert_eq!(player.determine_bets()[0].amount(), Chips::new(5));
    }

    #[test]
    fn test_stops_when_doubled_bet_exceeds_stake() {
        let mut player = martingale(100, 30, 250);
        assert!(player.playing());
        player.lose();
        // Next bet would be 60, stake is 100: still playing.
        assert!(player.playing());
        player.lose();
        // Next bet would be 120 > 100: done.
        assert!(!player.playing());
    }

    #[test]
    fn test_extreme_streak_saturates_instead_of_overflowing() {
        let mut state = DoublingState::new(Chips::new(5));
        for _ in 0..80 {
            state.record_loss();
        }
        assert_eq!(state.bet_amount(), Chips::new(u64::MAX));
        assert_eq!(state.loss_count(), 80);
    }

    #[test]
    fn test_seven_reds_waits_with_zero_bets() {
        let mut player = seven_reds(100, 5, 250);
        let bets = player.determine_bets();
        assert_eq!(bets[0].amount(), Chips::ZERO);
        assert_eq!(bets[0].outcome().name(), "Black");
        assert!(player.playing());

        // Losing the observer bet must not inflate the streak.
        player.lose();
        assert_eq!(player.state.loss_count(), 0);
    }

    #[test]
    fn test_seven_reds_starts_betting_after_streak() {
        let wheel = build_wheel();
        let mut player = seven_reds(1_000, 5, 250);
        let red_round = winning_set(&wheel, &["Red", "Odd", "Straight 1"]);
        for _ in 0..7 {
            assert_eq!(player.determine_bets()[0].amount(), Chips::ZERO);
            player.winners(&red_round);
        }
        assert!(!player.waiting);
        assert_eq!(player.determine_bets()[0].amount(), Chips::new(5));
    }

    #[test]
    fn test_seven_reds_black_resets_countdown() {
        let wheel = build_wheel();
        let mut player = seven_reds(1_000, 5, 250);
        let red_round = winning_set(&wheel, &["Red"]);
        let black_round = winning_set(&wheel, &["Black"]);

        for _ in 0..6 {
            player.winners(&red_round);
        }
        player.winners(&black_round);
        assert_eq!(player.reds_needed, RED_STREAK);
        assert!(player.waiting);
    }

    #[test]
    fn test_seven_reds_martingale_after_waiting() {
        let wheel = build_wheel();
        let mut player = seven_reds(10_000, 5, 250);
        let red_round = winning_set(&wheel, &["Red"]);
        for _ in 0..7 {
            player.winners(&red_round);
        }

        player.lose();
        player.lose();
        assert_eq!(player.determine_bets()[0].amount(), Chips::new(20));
    }
}
