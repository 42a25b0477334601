use crate::action::Action;
use crate::card::Card;
use crate::dealer::Dealer;
use crate::error::ActionError;
use crate::hand::{Hand, HandStatus};
use crate::observer::Observer;

use super::Player;

impl<D: Dealer, O: Observer> Player<D, O> {
    /// Player action: Hit (draw a card).
    ///
    /// Returns the card drawn, or `None` if the dealer had no card to give.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the current hand is not
    /// active, or the hand was doubled.
    pub fn hit(&mut self) -> Result<Option<Card>, ActionError> {
        self.begin_decision();
        let result = self.try_hit();
        self.conclude(Action::Hit, result)
    }

    fn try_hit(&mut self) -> Result<Option<Card>, ActionError> {
        let index = self.playable_index()?;

        let card = self.dealer.request_card();
        if let Some(card) = card {
            self.deal_card_to(index, card);
        }

        Ok(card)
    }

    /// Player action: Stand (keep current hand).
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the current hand is not
    /// active.
    pub fn stand(&mut self) -> Result<(), ActionError> {
        self.begin_decision();
        let result = self.apply_to_current(HandStatus::Stood);
        self.conclude(Action::Stand, result)
    }

    /// Player action: Split (split a pair into two hands).
    ///
    /// The second card moves to a new hand staked at the current bet and the
    /// current hand receives a fresh card. When aces are split and the table
    /// does not allow further play on them, play moves straight to the new
    /// hand once the first ace has stood on its second card.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the current hand is not
    /// an active, undoubled pair of equal rank, or the player lacks funds.
    pub fn split(&mut self) -> Result<(), ActionError> {
        self.begin_decision();
        let result = self.try_split();
        self.conclude(Action::Split, result)
    }

    fn try_split(&mut self) -> Result<(), ActionError> {
        let index = self.playable_index()?;
        let bet = self.state.current_bet;

        if !self.state.hands[index].can_split() {
            return Err(ActionError::CannotSplit);
        }

        if self.state.bankroll < bet {
            return Err(ActionError::InsufficientFunds);
        }

        let split_card = self.state.hands[index]
            .take_split_card()
            .ok_or(ActionError::CannotSplit)?;

        self.state.bankroll -= bet;
        self.observer.bankroll_changed(self.state.bankroll);

        // Insert new hand after current one
        self.state
            .hands
            .insert(index + 1, Hand::from_split(split_card, bet));
        self.observer.new_split_hand_created(split_card);

        if let Some(card) = self.dealer.request_card() {
            self.deal_card_to(index, card);
        }

        // Move on only once the first ace has its card and stands.
        if split_card.is_ace()
            && !self.rules.allows_play_after_split_aces()
            && !self.state.hands[index].is_active()
        {
            log::debug!("aces split, moving to hand {}", index + 1);
            self.switch_to(index + 1);
        }

        Ok(())
    }

    /// Moves play to the next hand.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress or the current hand is the
    /// last one.
    pub fn advance_to_next_hand(&mut self) -> Result<usize, ActionError> {
        let index = self.current_index()?;
        let next = index + 1;
        if next >= self.state.hands.len() {
            return Err(ActionError::NoNextHand);
        }

        self.switch_to(next);
        Ok(next)
    }

    /// Player action: Double down (double the bet and receive one card).
    ///
    /// The hand stays active so the hand evaluator can still report a bust,
    /// but it takes no further cards. Returns the card drawn, or `None` if the
    /// dealer had no card to give, in which case neither the bet nor the hand
    /// changes.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the current hand is not
    /// active, the hand is not eligible to double down, or the player lacks
    /// funds.
    pub fn double_down(&mut self) -> Result<Option<Card>, ActionError> {
        self.begin_decision();
        let result = self.try_double_down();
        self.conclude(Action::DoubleDown, result)
    }

    fn try_double_down(&mut self) -> Result<Option<Card>, ActionError> {
        let index = self.playable_index()?;
        let hand = &self.state.hands[index];

        // Can only double on first two cards
        if hand.len() != 2 {
            return Err(ActionError::CannotDouble);
        }

        if hand.is_split() && !self.rules.double_after_split {
            return Err(ActionError::CannotDouble);
        }

        let bet = self.state.current_bet;
        if self.state.bankroll < bet {
            return Err(ActionError::InsufficientFunds);
        }

        let Some(card) = self.dealer.request_card() else {
            log::debug!("no card to double down on, hand {index} unchanged");
            return Ok(None);
        };

        self.state.bankroll -= bet;
        self.state.hands[index].double_bet(bet);
        self.observer.bankroll_changed(self.state.bankroll);
        self.deal_card_to(index, card);

        Ok(Some(card))
    }

    /// Player action: Surrender (give up the current hand).
    ///
    /// Settling the forfeited half of the bet is left to the caller.
    ///
    /// # Errors
    ///
    /// Returns an error if no round is in progress, the current hand is not
    /// active, or surrender is disabled.
    pub fn surrender(&mut self) -> Result<(), ActionError> {
        self.begin_decision();
        let result = if self.rules.surrender {
            self.apply_to_current(HandStatus::Surrendered)
        } else {
            Err(ActionError::CannotSurrender)
        };
        self.conclude(Action::Surrender, result)
    }
}
