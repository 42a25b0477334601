//! A shuffled multi-deck shoe usable as a [`Dealer`].

extern crate alloc;

use alloc::vec::Vec;

use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

use crate::card::{Card, DECK_SIZE, Suit};
use crate::dealer::Dealer;

/// A seeded shoe of one or more decks.
///
/// # Example
///
/// ```
/// use bjplayer::{Dealer, Shoe};
///
/// let mut shoe = Shoe::new(6, 42);
/// assert_eq!(shoe.remaining(), 6 * 52);
/// assert!(shoe.request_card().is_some());
/// ```
#[derive(Debug, Clone)]
pub struct Shoe {
    /// Cards left, drawn from the back.
    cards: Vec<Card>,
    /// Number of decks used when reshuffling.
    decks: u8,
    /// Random number generator.
    rng: ChaCha8Rng,
}

impl Shoe {
    /// Creates and shuffles a shoe with the specified number of decks.
    #[must_use]
    pub fn new(decks: u8, seed: u64) -> Self {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let cards = Self::create_cards(decks, &mut rng);
        Self { cards, decks, rng }
    }

    /// Creates a shoe that deals `draws` in order.
    ///
    /// Reshuffling replaces the stacked cards with a single shuffled deck.
    #[must_use]
    pub fn from_draws(draws: &[Card]) -> Self {
        let mut cards = draws.to_vec();
        cards.reverse();
        Self {
            cards,
            decks: 1,
            rng: ChaCha8Rng::seed_from_u64(0),
        }
    }

    fn create_cards(decks: u8, rng: &mut ChaCha8Rng) -> Vec<Card> {
        let mut cards = Vec::with_capacity(decks as usize * DECK_SIZE);

        for _ in 0..decks {
            for suit in Suit::ALL {
                for rank in 1..=13 {
                    cards.push(Card::new(suit, rank));
                }
            }
        }

        cards.shuffle(rng);
        cards
    }

    /// Returns the number of cards remaining.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// Refills and reshuffles the shoe.
    pub fn reshuffle(&mut self) {
        self.cards = Self::create_cards(self.decks, &mut self.rng);
        log::debug!("shoe reshuffled ({} decks)", self.decks);
    }
}

impl Dealer for Shoe {
    fn request_card(&mut self) -> Option<Card> {
        self.cards.pop()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stacked_shoe_deals_in_order() {
        let mut shoe = Shoe::from_draws(&[Card::new(Suit::Hearts, 2), Card::new(Suit::Clubs, 3)]);
        assert_eq!(shoe.request_card(), Some(Card::new(Suit::Hearts, 2)));
        assert_eq!(shoe.request_card(), Some(Card::new(Suit::Clubs, 3)));
        assert_eq!(shoe.request_card(), None);
    }

    #[test]
    fn same_seed_same_order() {
        let mut a = Shoe::new(2, 7);
        let mut b = Shoe::new(2, 7);
        for _ in 0..10 {
            assert_eq!(a.request_card(), b.request_card());
        }
    }

    #[test]
    fn reshuffle_refills() {
        let mut shoe = Shoe::new(1, 3);
        while shoe.request_card().is_some() {}
        assert_eq!(shoe.remaining(), 0);
        shoe.reshuffle();
        assert_eq!(shoe.remaining(), DECK_SIZE);
    }
}
