//! Fire-and-forget notifications for UIs and telemetry.

use crate::card::Card;
use crate::hand::Hand;

/// Receives notifications about a player's state.
///
/// Every method defaults to a no-op and returns nothing, so an observer can
/// never influence the player. `()` is the observer used when none is set.
pub trait Observer {
    /// The bankroll changed to `bankroll`.
    fn bankroll_changed(&mut self, _bankroll: usize) {}

    /// A card was added to the current hand.
    fn card_added(&mut self, _card: Card) {}

    /// The current hand changed (cards or status).
    fn hand_status_changed(&mut self, _hand: &Hand) {}

    /// A split created a new hand holding `card`.
    fn new_split_hand_created(&mut self, _card: Card) {}

    /// Play moved to the hand at `index`.
    fn hand_switched(&mut self, _index: usize) {}
}

impl Observer for () {}

impl<O: Observer + ?Sized> Observer for &mut O {
    fn bankroll_changed(&mut self, bankroll: usize) {
        (**self).bankroll_changed(bankroll);
    }

    fn card_added(&mut self, card: Card) {
        (**self).card_added(card);
    }

    fn hand_status_changed(&mut self, hand: &Hand) {
        (**self).hand_status_changed(hand);
    }

    fn new_split_hand_created(&mut self, card: Card) {
        (**self).new_split_hand_created(card);
    }

    fn hand_switched(&mut self, index: usize) {
        (**self).hand_switched(index);
    }
}
