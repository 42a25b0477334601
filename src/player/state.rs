//! Player state visible to collaborators.

use alloc::string::String;
use alloc::vec::Vec;

use crate::action::{Action, Offer};
use crate::hand::Hand;

/// Everything a player owns for the current round.
///
/// Collaborators receive this by reference; only [`Player`](super::Player)
/// mutates it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerState {
    pub(super) name: Option<String>,
    pub(super) bankroll: usize,
    pub(super) current_bet: usize,
    pub(super) hands: Vec<Hand>,
    /// `None` until a hand is started.
    pub(super) current_hand: Option<usize>,
    pub(super) offer: Offer,
    pub(super) previous_action: Action,
    pub(super) insurance_bet: usize,
}

impl PlayerState {
    pub(super) const fn new(name: Option<String>, bankroll: usize) -> Self {
        Self {
            name,
            bankroll,
            current_bet: 0,
            hands: Vec::new(),
            current_hand: None,
            offer: Offer::None,
            previous_action: Action::Wager,
            insurance_bet: 0,
        }
    }

    /// Returns the player's name, if set.
    #[must_use]
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Returns the current bankroll.
    #[must_use]
    pub const fn bankroll(&self) -> usize {
        self.bankroll
    }

    /// Returns the stake copied into new hands.
    #[must_use]
    pub const fn current_bet(&self) -> usize {
        self.current_bet
    }

    /// Returns the hands for this round.
    #[must_use]
    pub fn hands(&self) -> &[Hand] {
        &self.hands
    }

    /// Returns the index of the hand in play, or `None` before a round starts.
    #[must_use]
    pub const fn current_hand_index(&self) -> Option<usize> {
        self.current_hand
    }

    /// Returns the hand in play.
    #[must_use]
    pub fn current_hand(&self) -> Option<&Hand> {
        self.current_hand.and_then(|index| self.hands.get(index))
    }

    /// Returns whether a hand has been started.
    #[must_use]
    pub const fn has_active_round(&self) -> bool {
        self.current_hand.is_some()
    }

    /// Returns the side decision on offer.
    #[must_use]
    pub const fn offer(&self) -> Offer {
        self.offer
    }

    /// Returns whether insurance is on offer.
    #[must_use]
    pub const fn insurance_available(&self) -> bool {
        matches!(self.offer, Offer::Insurance)
    }

    /// Returns whether surrender is on offer.
    #[must_use]
    pub const fn surrender_available(&self) -> bool {
        matches!(self.offer, Offer::Surrender)
    }

    /// Returns the last action attempted.
    #[must_use]
    pub const fn previous_action(&self) -> Action {
        self.previous_action
    }

    /// Returns the amount paid for insurance this round.
    #[must_use]
    pub const fn insurance_bet(&self) -> usize {
        self.insurance_bet
    }
}
