//! Bet accumulator with a per-round stake limit

use crate::error::{Error, Result};

use super::{Bet, Chips};

/// Holds the bets placed in the current round and enforces the table limit
#[derive(Debug)]
pub struct Table {
    limit: Chips,
    bets: Vec<Bet>,
}

impl Table {
    pub fn new(limit: Chips) -> Self {
        Self {
            limit,
            bets: Vec::new(),
        }
    }

    pub fn limit(&self) -> Chips {
        self.limit
    }

    /// Append a bet to the round's working bets.
    pub fn place_bet(&mut self, bet: Bet) {
        self.bets.push(bet);
    }

    /// Check the pending total against the limit.
    ///
    /// Must run after bets are placed and before the spin. A total exactly
    /// at the limit is valid; only exceeding it fails. The error propagates
    /// to the caller of the game cycle.
    pub fn validate(&self) -> Result<()> {
        let total: Chips = self.bets.iter().map(Bet::amount).sum();
        if total > self.limit {
            return Err(Error::InvalidBet(format!(
                "pending total {} exceeds table limit {}",
                total, self.limit
            )));
        }
        Ok(())
    }

    pub fn bets(&self) -> &[Bet] {
        &self.bets
    }

    /// Reset to empty. Called unconditionally at the end of every cycle.
    pub fn clear_bets(&mut self) {
        self.bets.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wheel::{Outcome, Payout};
    use proptest::prelude::*;
    use std::sync::Arc;

    fn black() -> Arc<Outcome> {
        Arc::new(Outcome::new("Black", Payout::EVEN))
    }

    #[test]
    fn test_total_at_limit_is_valid() {
        let mut table = Table::new(Chips::new(100));
        table.place_bet(Bet::new(Chips::new(60), black()));
        table.place_bet(Bet::new(Chips::new(40), black()));
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_total_over_limit_is_invalid() {
        let mut table = Table::new(Chips::new(100));
        table.place_bet(Bet::new(Chips::new(60), black()));
        table.place_bet(Bet::new(Chips::new(41), black()));
        assert!(matches!(table.validate(), Err(Error::InvalidBet(_))));
    }

    #[test]
    fn test_clear_bets() {
        let mut table = Table::new(Chips::new(100));
        table.place_bet(Bet::new(Chips::new(10), black()));
        assert_eq!(table.bets().len(), 1);
        table.clear_bets();
        assert!(table.bets().is_empty());
        assert!(table.validate().is_ok());
    }

    proptest! {
        #[test]
        fn prop_validity_matches_limit_comparison(
            amounts in proptest::collection::vec(0u64..10_000, 0..8),
            limit in 0u64..50_000,
        ) {
            let mut table = Table::new(Chips::new(limit));
            for &amount in &amounts {
                table.place_bet(Bet::new(Chips::new(amount), black()));
            }
            let total: u64 = amounts.iter().sum();
            prop_assert_eq!(table.validate().is_ok(), total <= limit);
        }
    }
}
