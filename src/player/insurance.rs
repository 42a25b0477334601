use crate::action::{Action, Offer};
use crate::dealer::Dealer;
use crate::error::InsuranceError;
use crate::observer::Observer;

use super::Player;

impl<D: Dealer, O: Observer> Player<D, O> {
    /// Offers insurance to the player, withdrawing any surrender offer.
    ///
    /// Ignored when the table does not offer insurance.
    pub fn offer_insurance(&mut self) {
        if !self.rules.insurance {
            log::debug!("insurance not offered at this table");
            return;
        }
        self.state.offer = Offer::Insurance;
    }

    /// Offers surrender to the player.
    ///
    /// Ignored while an insurance decision is pending or when the table does
    /// not allow surrender.
    pub fn offer_surrender(&mut self) {
        if !self.rules.surrender || self.state.offer == Offer::Insurance {
            log::debug!("surrender offer ignored ({:?} pending)", self.state.offer);
            return;
        }
        self.state.offer = Offer::Surrender;
    }

    /// Buys insurance for half the current bet.
    ///
    /// Returns the amount paid. A pending surrender offer lapses either way.
    ///
    /// # Errors
    ///
    /// Returns an error if insurance is not on offer, no bet was placed, or
    /// the player lacks funds. An insurance offer stays open after a failed
    /// purchase.
    pub fn buy_insurance(&mut self) -> Result<usize, InsuranceError> {
        self.state.previous_action = Action::BuyInsurance;

        if self.state.offer == Offer::Surrender {
            self.state.offer = Offer::None;
        }

        if self.state.offer != Offer::Insurance {
            return Err(InsuranceError::NotOffered);
        }

        if self.state.current_bet == 0 {
            return Err(InsuranceError::NoBet);
        }

        let cost = self.rules.insurance_cost(self.state.current_bet);
        if self.state.bankroll < cost {
            log::debug!("insurance of {cost} declined: bankroll {}", self.state.bankroll);
            return Err(InsuranceError::InsufficientFunds);
        }

        self.state.bankroll -= cost;
        self.state.insurance_bet += cost;
        self.state.offer = Offer::None;
        self.dealer.insured(&self.state);
        self.observer.bankroll_changed(self.state.bankroll);

        Ok(cost)
    }

    /// Declines insurance.
    ///
    /// Only an open offer is withdrawn and reported to the dealer; otherwise
    /// the attempt is merely recorded.
    pub fn decline_insurance(&mut self) {
        if self.state.offer == Offer::Insurance {
            self.decline_offered_insurance();
        } else {
            self.state.previous_action = Action::DeclineInsurance;
        }
    }

    pub(super) fn decline_offered_insurance(&mut self) {
        self.state.offer = Offer::None;
        self.state.previous_action = Action::DeclineInsurance;
        self.dealer.declined_insurance(&self.state);
    }
}
