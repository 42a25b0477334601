//! The dealing authority a player draws cards from.

use crate::card::Card;
use crate::player::PlayerState;

/// Supplies cards to a player and hears about the player's decisions.
///
/// Only [`Dealer::request_card`] is required; the notifications default to
/// no-ops. A player never owns the lifetime of a dealer it borrows: pass
/// `&mut dealer` to share one dealer between rounds.
pub trait Dealer {
    /// Returns the next card, or `None` if no card is available.
    fn request_card(&mut self) -> Option<Card>;

    /// Called once when a player binds to this dealer.
    fn register_player(&mut self, _player: &PlayerState) {}

    /// Called after the player buys insurance.
    fn insured(&mut self, _player: &PlayerState) {}

    /// Called after the player declines insurance.
    fn declined_insurance(&mut self, _player: &PlayerState) {}

    /// Called after every applied play action.
    fn action_taken(&mut self, _player: &PlayerState) {}
}

impl<D: Dealer + ?Sized> Dealer for &mut D {
    fn request_card(&mut self) -> Option<Card> {
        (**self).request_card()
    }

    fn register_player(&mut self, player: &PlayerState) {
        (**self).register_player(player);
    }

    fn insured(&mut self, player: &PlayerState) {
        (**self).insured(player);
    }

    fn declined_insurance(&mut self, player: &PlayerState) {
        (**self).declined_insurance(player);
    }

    fn action_taken(&mut self, player: &PlayerState) {
        (**self).action_taken(player);
    }
}
