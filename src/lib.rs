//! A blackjack player action state machine with optional `no_std` support.
//!
//! The crate provides a [`Player`] that places bets, receives cards, and
//! chooses among hit, stand, split, double down, surrender, and insurance,
//! enforcing when each action is legal and what it costs. Cards come from a
//! [`Dealer`]; state changes are reported to the dealer and an [`Observer`].
//! Hand totals are not evaluated here: busts and blackjacks are reported
//! back through [`Player::report_hand_status`].
//!
//! # Example
//!
//! ```
//! use bjplayer::{Card, Player, Shoe, Suit, TableRules};
//!
//! let shoe = Shoe::from_draws(&[Card::new(Suit::Clubs, 3), Card::new(Suit::Spades, 10)]);
//! let mut player = Player::new(100, shoe).with_rules(TableRules::default());
//!
//! player.place_bet(10).unwrap();
//! player.start_hand();
//! player.deal_card(Card::new(Suit::Hearts, 8)).unwrap();
//! player.deal_card(Card::new(Suit::Diamonds, 8)).unwrap();
//!
//! player.split().unwrap();
//! assert_eq!(player.bankroll(), 80);
//! assert_eq!(player.hands().len(), 2);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]
#![cfg_attr(docsrs, feature(doc_cfg))]

#[cfg(all(not(feature = "std"), not(feature = "alloc")))]
compile_error!(
    "`std` is disabled but `alloc` feature is not enabled. Enable `alloc` or keep `std` enabled."
);

extern crate alloc;

pub mod action;
pub mod card;
pub mod dealer;
pub mod error;
pub mod hand;
pub mod observer;
pub mod options;
pub mod player;
mod shared;
pub mod shoe;

// Re-export main types
pub use action::{Action, Offer};
pub use card::{Card, DECK_SIZE, Suit};
pub use dealer::Dealer;
pub use error::{ActionError, BetError, InsuranceError, TransitionError};
pub use hand::{Hand, HandStatus};
pub use observer::Observer;
pub use options::{RoundingMode, TableRules};
pub use player::{Player, PlayerState};
pub use shared::SharedPlayer;
pub use shoe::Shoe;
