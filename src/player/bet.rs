use alloc::vec;

use crate::action::{Action, Offer};
use crate::dealer::Dealer;
use crate::error::BetError;
use crate::hand::Hand;
use crate::observer::Observer;

use super::Player;

impl<D: Dealer, O: Observer> Player<D, O> {
    /// Places a bet, debiting the bankroll.
    ///
    /// # Errors
    ///
    /// Returns an error if the bet is zero or larger than the bankroll. The
    /// bankroll and current bet are left unchanged.
    pub fn place_bet(&mut self, amount: usize) -> Result<(), BetError> {
        self.state.previous_action = Action::Wager;

        if amount == 0 {
            return Err(BetError::ZeroBet);
        }

        if self.state.bankroll < amount {
            log::debug!("bet of {amount} declined: bankroll {}", self.state.bankroll);
            return Err(BetError::InsufficientFunds);
        }

        self.state.bankroll -= amount;
        self.state.current_bet = amount;
        self.observer.bankroll_changed(self.state.bankroll);

        Ok(())
    }

    /// Starts a round with a single empty hand staked at the current bet.
    ///
    /// Hands from the previous round are discarded, along with any pending
    /// offer and insurance bet.
    pub fn start_hand(&mut self) {
        self.state.previous_action = Action::Bet;
        self.state.hands = vec![Hand::new(self.state.current_bet)];
        self.state.current_hand = Some(0);
        self.state.offer = Offer::None;
        self.state.insurance_bet = 0;
    }
}
