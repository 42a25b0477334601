//! Property tests over random action sequences.

use bjplayer::{BetError, Card, HandStatus, Player, Shoe, Suit};
use proptest::prelude::*;

#[derive(Debug, Clone, Copy)]
enum Step {
    Deal(u8),
    Hit,
    Stand,
    Split,
    DoubleDown,
    Surrender,
    OfferInsurance,
    OfferSurrender,
    BuyInsurance,
    DeclineInsurance,
    Advance,
    Bust,
}

fn arb_step() -> impl Strategy<Value = Step> {
    prop_oneof![
        (1u8..=13).prop_map(Step::Deal),
        Just(Step::Hit),
        Just(Step::Stand),
        Just(Step::Split),
        Just(Step::DoubleDown),
        Just(Step::Surrender),
        Just(Step::OfferInsurance),
        Just(Step::OfferSurrender),
        Just(Step::BuyInsurance),
        Just(Step::DeclineInsurance),
        Just(Step::Advance),
        Just(Step::Bust),
    ]
}

fn arb_shoe() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec((1u8..=13).prop_map(|rank| Card::new(Suit::Spades, rank)), 0..20)
}

fn apply(player: &mut Player<Shoe>, step: Step) {
    match step {
        Step::Deal(rank) => {
            let _ = player.deal_card(Card::new(Suit::Hearts, rank));
        }
        Step::Hit => {
            let _ = player.hit();
        }
        Step::Stand => {
            let _ = player.stand();
        }
        Step::Split => {
            let _ = player.split();
        }
        Step::DoubleDown => {
            let _ = player.double_down();
        }
        Step::Surrender => {
            let _ = player.surrender();
        }
        Step::OfferInsurance => player.offer_insurance(),
        Step::OfferSurrender => player.offer_surrender(),
        Step::BuyInsurance => {
            let _ = player.buy_insurance();
        }
        Step::DeclineInsurance => player.decline_insurance(),
        Step::Advance => {
            let _ = player.advance_to_next_hand();
        }
        Step::Bust => {
            if let Some(index) = player.state().current_hand_index() {
                let _ = player.report_hand_status(index, HandStatus::Busted);
            }
        }
    }
}

proptest! {
    /// A bet larger than the bankroll never changes anything but the action tag.
    #[test]
    fn prop_oversized_bet_is_declined(bankroll in 0usize..1_000, extra in 1usize..1_000) {
        let mut player = Player::new(bankroll, Shoe::from_draws(&[]));
        prop_assert_eq!(player.place_bet(bankroll + extra), Err(BetError::InsufficientFunds));
        prop_assert_eq!(player.bankroll(), bankroll);
        prop_assert_eq!(player.state().current_bet(), 0);
    }

    /// A successful bet debits exactly the amount and stakes the new hand with it.
    #[test]
    fn prop_bet_debits_bankroll(bankroll in 1usize..1_000, pick in any::<prop::sample::Index>()) {
        let amount = pick.index(bankroll) + 1;
        let mut player = Player::new(bankroll, Shoe::from_draws(&[]));
        prop_assert_eq!(player.place_bet(amount), Ok(()));
        player.start_hand();
        prop_assert_eq!(player.bankroll(), bankroll - amount);
        let hand = player.current_hand().unwrap();
        prop_assert_eq!(hand.bet(), amount);
        prop_assert_eq!(hand.status(), HandStatus::Active);
    }

    /// Offers stay exclusive, money is conserved, and terminal hands stay terminal.
    #[test]
    fn prop_round_invariants(
        bankroll in 10usize..200,
        draws in arb_shoe(),
        steps in prop::collection::vec(arb_step(), 0..60),
    ) {
        let mut player = Player::new(bankroll, Shoe::from_draws(&draws));
        player.place_bet(10).unwrap();
        player.start_hand();

        let mut finished = 0;
        for step in steps {
            apply(&mut player, step);

            let state = player.state();
            prop_assert!(!(state.insurance_available() && state.surrender_available()));

            let staked: usize = player.hands().iter().map(|h| h.bet()).sum();
            prop_assert_eq!(player.bankroll() + staked + state.insurance_bet(), bankroll);

            let now_finished = player
                .hands()
                .iter()
                .filter(|h| h.status() != HandStatus::Active)
                .count();
            prop_assert!(now_finished >= finished);
            finished = now_finished;
        }
    }

    /// Split on anything but a two-card pair leaves bankroll and hands untouched.
    #[test]
    fn prop_split_needs_two_cards(ranks in prop::collection::vec(1u8..=13, 0..6)) {
        prop_assume!(ranks.len() != 2);
        let mut player = Player::new(100, Shoe::new(1, 3));
        player.place_bet(10).unwrap();
        player.start_hand();
        for rank in &ranks {
            player.deal_card(Card::new(Suit::Clubs, *rank)).unwrap();
        }
        let before = player.hands().to_vec();

        prop_assert!(player.split().is_err());
        prop_assert_eq!(player.bankroll(), 90);
        prop_assert_eq!(player.hands(), before.as_slice());
    }
}
