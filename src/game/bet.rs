//! A single wager on one outcome

use std::fmt;
use std::sync::Arc;

use crate::wheel::Outcome;

use super::Chips;

/// An amount wagered on one outcome
///
/// Created fresh each round by a strategy and discarded after settlement.
/// The amount is fixed at construction. A zero amount is permitted for
/// observer rounds (a strategy watching the wheel without risking stake).
#[derive(Debug, Clone)]
pub struct Bet {
    amount: Chips,
    outcome: Arc<Outcome>,
}

impl Bet {
    pub fn new(amount: Chips, outcome: Arc<Outcome>) -> Self {
        Self { amount, outcome }
    }

    pub fn amount(&self) -> Chips {
        self.amount
    }

    pub fn outcome(&self) -> &Arc<Outcome> {
        &self.outcome
    }

    /// Amount credited on a win: the stake plus the odds-scaled winnings
    pub fn win_amount(&self) -> Chips {
        self.amount.saturating_add(self.outcome.win_amount(self.amount))
    }

    /// Amount at risk, debited when the bet is placed
    pub fn lose_amount(&self) -> Chips {
        self.amount
    }
}

impl fmt::Display for Bet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} on {}", self.amount, self.outcome)
    }
}
