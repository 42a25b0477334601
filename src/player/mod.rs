//! The player action state machine.

use alloc::string::String;

use crate::action::{Action, Offer};
use crate::card::Card;
use crate::dealer::Dealer;
use crate::error::{ActionError, TransitionError};
use crate::hand::{Hand, HandStatus};
use crate::observer::Observer;
use crate::options::TableRules;

mod actions;
mod bet;
mod insurance;
pub mod state;

pub use state::PlayerState;

/// A single blackjack player taking turns against a dealer.
///
/// The player owns its bankroll and hands and mediates every change to them.
/// Cards come from the [`Dealer`]; changes are reported to the dealer and to
/// an optional [`Observer`]. Actions run to completion synchronously; wrap
/// the player in a [`SharedPlayer`](crate::SharedPlayer) to drive it from
/// several threads.
///
/// # Example
///
/// ```
/// use bjplayer::{Action, Card, HandStatus, Player, Shoe, Suit};
///
/// let shoe = Shoe::from_draws(&[Card::new(Suit::Clubs, 5)]);
/// let mut player = Player::new(100, shoe);
///
/// player.place_bet(10).unwrap();
/// player.start_hand();
/// player.deal_card(Card::new(Suit::Hearts, 9)).unwrap();
/// player.deal_card(Card::new(Suit::Spades, 2)).unwrap();
///
/// player.hit().unwrap();
/// player.stand().unwrap();
///
/// assert_eq!(player.bankroll(), 90);
/// assert_eq!(player.previous_action(), Action::Stand);
/// assert_eq!(player.current_hand().map(|h| h.status()), Some(HandStatus::Stood));
/// ```
#[derive(Debug)]
pub struct Player<D, O = ()> {
    state: PlayerState,
    dealer: D,
    observer: O,
    rules: TableRules,
}

impl<D: Dealer> Player<D> {
    /// Creates a player with the given bankroll and registers it with the
    /// dealer.
    #[must_use]
    pub fn new(bankroll: usize, dealer: D) -> Self {
        Self::bind(PlayerState::new(None, bankroll), dealer)
    }

    /// Creates a named player and registers it with the dealer.
    #[must_use]
    pub fn named(name: impl Into<String>, bankroll: usize, dealer: D) -> Self {
        Self::bind(PlayerState::new(Some(name.into()), bankroll), dealer)
    }

    fn bind(state: PlayerState, mut dealer: D) -> Self {
        dealer.register_player(&state);
        Self {
            state,
            dealer,
            observer: (),
            rules: TableRules::default(),
        }
    }
}

impl<D: Dealer, O: Observer> Player<D, O> {
    /// Replaces the observer.
    #[must_use]
    pub fn with_observer<P: Observer>(self, observer: P) -> Player<D, P> {
        Player {
            state: self.state,
            dealer: self.dealer,
            observer,
            rules: self.rules,
        }
    }

    /// Sets the table rules.
    #[must_use]
    pub fn with_rules(mut self, rules: TableRules) -> Self {
        self.rules = rules;
        self
    }

    /// Returns the player's state.
    #[must_use]
    pub const fn state(&self) -> &PlayerState {
        &self.state
    }

    /// Returns the table rules.
    #[must_use]
    pub const fn rules(&self) -> &TableRules {
        &self.rules
    }

    /// Returns the dealer.
    #[must_use]
    pub const fn dealer(&self) -> &D {
        &self.dealer
    }

    /// Returns the dealer mutably.
    pub const fn dealer_mut(&mut self) -> &mut D {
        &mut self.dealer
    }

    /// Returns the observer.
    #[must_use]
    pub const fn observer(&self) -> &O {
        &self.observer
    }

    /// Splits the player into its state, dealer, and observer.
    #[must_use]
    pub fn into_parts(self) -> (PlayerState, D, O) {
        (self.state, self.dealer, self.observer)
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.state.bankroll
    }

    /// Returns the hands for this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.state.hands
    }

    /// Returns the hand in play.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.state.current_hand()
    }

    /// Returns the last action attempted.
    #[must_use]
    pub const fn previous_action(&self) -> Action {
        self.state.previous_action
    }

    /// Appends a card to the current hand.
    ///
    /// Used by the dealer for the initial deal. No legality check is made
    /// on the hand's status.
    ///
    /// # Errors
    ///
    /// Returns [`ActionError::NoActiveRound`] if no hand has been started.
    pub fn deal_card(&mut self, card: Card) -> Result<(), ActionError> {
        let index = self.current_index()?;
        self.deal_card_to(index, card);
        Ok(())
    }

    /// Records a bust or blackjack reported by the hand evaluator.
    ///
    /// # Errors
    ///
    /// Returns an error if `status` is not a bust or blackjack, the hand does
    /// not exist, or the hand is no longer active.
    pub fn report_hand_status(
        &mut self,
        index: usize,
        status: HandStatus,
    ) -> Result<(), TransitionError> {
        if !status.is_external() {
            return Err(TransitionError::NotExternal);
        }

        let hand = self
            .state
            .hands
            .get_mut(index)
            .ok_or(TransitionError::HandNotFound)?;
        hand.transition(status)?;
        self.observer.hand_status_changed(hand);

        Ok(())
    }

    fn current_index(&self) -> Result<usize, ActionError> {
        self.state.current_hand.ok_or(ActionError::NoActiveRound)
    }

    /// Index of the current hand if it can still take actions.
    fn active_index(&self) -> Result<usize, ActionError> {
        let index = self.current_index()?;
        if self.state.hands[index].is_active() {
            Ok(index)
        } else {
            Err(ActionError::HandNotActive)
        }
    }

    /// Index of the current hand if it can still take cards.
    fn playable_index(&self) -> Result<usize, ActionError> {
        let index = self.active_index()?;
        if self.state.hands[index].is_doubled() {
            return Err(ActionError::HandDoubled);
        }
        Ok(index)
    }

    fn deal_card_to(&mut self, index: usize, card: Card) {
        let hand = &mut self.state.hands[index];
        hand.add_card(card);
        self.observer.card_added(card);
        self.observer.hand_status_changed(hand);

        // Split aces get one card each unless the table allows more.
        if hand.is_split_aces()
            && hand.len() >= 2
            && !self.rules.allows_play_after_split_aces()
            && hand.transition(HandStatus::Stood).is_ok()
        {
            log::debug!("split ace hand {index} stands on two cards");
            self.observer.hand_status_changed(hand);
        }
    }

    fn switch_to(&mut self, index: usize) {
        self.state.current_hand = Some(index);
        self.observer.hand_switched(index);
    }

    fn apply_to_current(&mut self, status: HandStatus) -> Result<(), ActionError> {
        let index = self.active_index()?;
        let hand = &mut self.state.hands[index];
        hand.transition(status).map_err(|_| ActionError::HandNotActive)?;
        self.observer.hand_status_changed(hand);
        Ok(())
    }

    /// Consumes any pending offer before a play decision.
    ///
    /// Any decision other than buying insurance declines it.
    fn begin_decision(&mut self) {
        match self.state.offer {
            Offer::Insurance => self.decline_offered_insurance(),
            Offer::Surrender => self.state.offer = Offer::None,
            Offer::None => {}
        }
    }

    fn conclude<T>(
        &mut self,
        action: Action,
        result: Result<T, ActionError>,
    ) -> Result<T, ActionError> {
        self.state.previous_action = action;
        match &result {
            Ok(_) => {
                log::trace!("{action:?} applied");
                self.dealer.action_taken(&self.state);
            }
            Err(err) => log::debug!("{action:?} declined: {err}"),
        }
        result
    }
}
