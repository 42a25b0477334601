//! Player hand representation.

extern crate alloc;

use alloc::vec::Vec;

use crate::card::Card;
use crate::error::TransitionError;

/// Hand status.
///
/// `Active` is the only state a hand can leave. `Stood` and `Surrendered` are
/// set by the player; `Busted` and `Blackjack` are reported by whatever
/// evaluates hand totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HandStatus {
    /// Hand is active and can take actions.
    Active,
    /// Player has stood.
    Stood,
    /// Player has surrendered.
    Surrendered,
    /// Hand has busted (over 21).
    Busted,
    /// Hand is a blackjack (natural 21).
    Blackjack,
}

impl HandStatus {
    /// Returns whether no further transitions are possible.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::Active)
    }

    /// Returns whether this status is set by the external hand evaluator.
    #[must_use]
    pub const fn is_external(self) -> bool {
        matches!(self, Self::Busted | Self::Blackjack)
    }
}

/// A player's hand.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hand {
    /// Cards in the hand.
    cards: Vec<Card>,
    /// Current status of the hand.
    status: HandStatus,
    /// Bet amount for this hand.
    bet: usize,
    /// Whether the bet was doubled.
    doubled: bool,
    /// Whether this hand took part in a split.
    split: bool,
    /// Whether the hand still holds the pair it was dealt.
    initial_pair: bool,
    /// Whether this hand came from splitting aces.
    split_aces: bool,
}

impl Hand {
    /// Creates a new empty hand with the given bet.
    #[must_use]
    pub const fn new(bet: usize) -> Self {
        Self {
            cards: Vec::new(),
            status: HandStatus::Active,
            bet,
            doubled: false,
            split: false,
            initial_pair: true,
            split_aces: false,
        }
    }

    /// Creates a new hand from a split with a single card.
    #[must_use]
    pub fn from_split(card: Card, bet: usize) -> Self {
        Self {
            cards: alloc::vec![card],
            status: HandStatus::Active,
            bet,
            doubled: false,
            split: true,
            initial_pair: false,
            split_aces: card.is_ace(),
        }
    }

    /// Adds a card to the hand.
    ///
    /// No legality check is made; callers only add to active hands.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Returns the cards in the hand.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Returns the current status of the hand.
    #[must_use]
    pub const fn status(&self) -> HandStatus {
        self.status
    }

    /// Returns whether the hand can still take actions.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        matches!(self.status, HandStatus::Active)
    }

    /// Moves the hand out of `Active`.
    ///
    /// # Errors
    ///
    /// Returns [`TransitionError::NotActive`] if the hand has already left
    /// `Active`, or [`TransitionError::NotTerminal`] when asked to move to
    /// `Active`.
    pub const fn transition(&mut self, status: HandStatus) -> Result<(), TransitionError> {
        if !status.is_terminal() {
            return Err(TransitionError::NotTerminal);
        }
        if self.status.is_terminal() {
            return Err(TransitionError::NotActive);
        }
        self.status = status;
        Ok(())
    }

    /// Returns the bet amount for this hand.
    #[must_use]
    pub const fn bet(&self) -> usize {
        self.bet
    }

    /// Adds `amount` to the bet and marks the hand doubled.
    pub const fn double_bet(&mut self, amount: usize) {
        self.bet += amount;
        self.doubled = true;
    }

    /// Returns whether the bet on this hand was doubled.
    #[must_use]
    pub const fn is_doubled(&self) -> bool {
        self.doubled
    }

    /// Returns whether this hand took part in a split.
    #[must_use]
    pub const fn is_split(&self) -> bool {
        self.split
    }

    /// Returns whether this hand was formed by splitting aces.
    #[must_use]
    pub const fn is_split_aces(&self) -> bool {
        self.split_aces
    }

    /// Returns whether the hand is exactly two cards that were never split.
    #[must_use]
    pub fn is_initial_pair(&self) -> bool {
        self.cards.len() == 2 && self.initial_pair && !self.split
    }

    /// Returns whether the hand can be split.
    #[must_use]
    pub fn can_split(&self) -> bool {
        self.is_initial_pair() && self.cards[0].rank == self.cards[1].rank
    }

    /// Returns the number of cards in the hand.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Returns whether the hand is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Removes the second card of a pair and marks this hand as split.
    ///
    /// Returns `None` (and leaves the hand untouched) if the hand cannot be
    /// split.
    pub fn take_split_card(&mut self) -> Option<Card> {
        if !self.can_split() {
            return None;
        }
        let card = self.cards.pop()?;
        self.split = true;
        self.initial_pair = false;
        self.split_aces = card.is_ace();
        Some(card)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::card::Suit;

    #[test]
    fn initial_pair_tracks_split() {
        let mut hand = Hand::new(10);
        hand.add_card(Card::new(Suit::Hearts, 8));
        assert!(!hand.is_initial_pair());
        hand.add_card(Card::new(Suit::Clubs, 8));
        assert!(hand.is_initial_pair());
        assert!(hand.can_split());

        let moved = hand.take_split_card();
        assert_eq!(moved, Some(Card::new(Suit::Clubs, 8)));
        assert!(hand.is_split());
        assert!(!hand.is_split_aces());

        hand.add_card(Card::new(Suit::Spades, 8));
        assert!(!hand.is_initial_pair());
        assert_eq!(hand.take_split_card(), None);
        assert_eq!(hand.len(), 2);
    }

    #[test]
    fn unequal_ranks_do_not_split() {
        let mut hand = Hand::new(10);
        hand.add_card(Card::new(Suit::Hearts, 12));
        hand.add_card(Card::new(Suit::Clubs, 13));
        assert!(hand.is_initial_pair());
        assert!(!hand.can_split());
        assert_eq!(hand.take_split_card(), None);
    }

    #[test]
    fn transitions_are_one_way() {
        let mut hand = Hand::new(5);
        assert_eq!(
            hand.transition(HandStatus::Active),
            Err(TransitionError::NotTerminal)
        );
        assert_eq!(hand.transition(HandStatus::Stood), Ok(()));
        assert_eq!(
            hand.transition(HandStatus::Busted),
            Err(TransitionError::NotActive)
        );
        assert_eq!(hand.status(), HandStatus::Stood);
    }

    #[test]
    fn split_hand_carries_ace_flag() {
        let hand = Hand::from_split(Card::new(Suit::Spades, Card::ACE), 10);
        assert!(hand.is_split());
        assert!(hand.is_split_aces());
        assert_eq!(hand.bet(), 10);
        assert_eq!(hand.len(), 1);
    }

    #[test]
    fn doubling_adds_to_bet() {
        let mut hand = Hand::new(10);
        hand.double_bet(10);
        assert_eq!(hand.bet(), 20);
        assert!(hand.is_doubled());
    }
}
