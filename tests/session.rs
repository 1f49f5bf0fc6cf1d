//! Session integration tests.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use twentyone::{
    Action, ActionError, BetError, Card, ConfigError, DECK_SIZE, Hand, Outcome, Rank, RoundPhase,
    Session, SessionConfig, SettleError, Shoe, ShoeExhausted, Suit,
};

const fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Filler kept at the bottom of rigged shoes so settlement never sees an
/// empty shoe.
const FILLER: Card = card(Rank::Two, Suit::Hearts);

fn rigged_config() -> SessionConfig {
    SessionConfig::default()
        .with_deck_count(1)
        .with_reshuffle_threshold(1)
        .with_starting_chips(1_000)
        .with_min_bet(10)
}

/// Builds a session whose shoe yields `draws` in the listed order, with a
/// few filler cards underneath.
fn rigged_session(draws: &[Card]) -> Session {
    let mut cards = vec![FILLER; 4];
    cards.extend(draws.iter().rev().copied());
    let shoe = Shoe::with_cards(1, cards).unwrap();
    Session::with_shoe(rigged_config(), shoe, 0).unwrap()
}

#[test]
fn ace_demotion_yields_best_total() {
    let mut hand = Hand::new();
    hand.add_card(card(Rank::Ace, Suit::Hearts));
    hand.add_card(card(Rank::Ace, Suit::Spades));
    hand.add_card(card(Rank::Nine, Suit::Clubs));

    // One ace stays at 11, the other demotes to 1.
    assert_eq!(hand.total(), 21);
    assert!(hand.is_soft());
    assert!(!hand.is_bust());
}

#[test]
fn blackjack_requires_exactly_two_cards() {
    let mut natural = Hand::new();
    natural.add_card(card(Rank::Ace, Suit::Hearts));
    natural.add_card(card(Rank::King, Suit::Spades));
    assert_eq!(natural.total(), 21);
    assert!(natural.is_blackjack());

    let mut three_card = Hand::new();
    three_card.add_card(card(Rank::Ace, Suit::Hearts));
    three_card.add_card(card(Rank::Ace, Suit::Spades));
    three_card.add_card(card(Rank::Nine, Suit::Clubs));
    assert_eq!(three_card.total(), 21);
    assert!(!three_card.is_blackjack());
}

#[test]
fn bust_detection() {
    let mut hand = Hand::new();
    hand.add_card(card(Rank::Ten, Suit::Hearts));
    hand.add_card(card(Rank::Ten, Suit::Spades));
    hand.add_card(card(Rank::Two, Suit::Diamonds));
    assert_eq!(hand.total(), 22);
    assert!(hand.is_bust());
    assert!(!hand.is_soft());
}

#[test]
fn config_errors_are_fatal_at_construction() {
    let zero_decks = SessionConfig::default().with_deck_count(0);
    assert_eq!(
        Session::new(zero_decks, 1).unwrap_err(),
        ConfigError::DeckCount
    );

    let zero_threshold = SessionConfig::default().with_reshuffle_threshold(0);
    assert_eq!(
        Session::new(zero_threshold, 1).unwrap_err(),
        ConfigError::Threshold
    );

    let zero_min_bet = SessionConfig::default().with_min_bet(0);
    assert_eq!(Session::new(zero_min_bet, 1).unwrap_err(), ConfigError::MinBet);

    let max_below_min = SessionConfig::default().with_min_bet(100).with_max_bet(50);
    assert_eq!(
        Session::new(max_below_min, 1).unwrap_err(),
        ConfigError::MaxBetBelowMin
    );
}

#[test]
fn shoe_length_invariants() {
    assert_eq!(Shoe::new(0).unwrap_err(), ConfigError::DeckCount);

    let mut shoe = Shoe::new(2).unwrap();
    assert_eq!(shoe.remaining(), 2 * DECK_SIZE);

    for k in 1..=10 {
        shoe.draw().unwrap();
        assert_eq!(shoe.remaining(), 2 * DECK_SIZE - k);
    }
}

#[test]
fn draw_on_empty_shoe_is_a_defined_failure() {
    let mut shoe = Shoe::with_cards(1, Vec::new()).unwrap();
    assert_eq!(shoe.draw().unwrap_err(), ShoeExhausted);
}

#[test]
fn reshuffle_triggers_strictly_below_threshold() {
    let mut rng = ChaCha8Rng::seed_from_u64(9);

    let mut low = Shoe::with_cards(1, vec![FILLER; 14]).unwrap();
    assert!(low.maybe_reshuffle(15, &mut rng));
    assert_eq!(low.remaining(), DECK_SIZE);

    let mut at_threshold = Shoe::with_cards(1, vec![FILLER; 15]).unwrap();
    assert!(!at_threshold.maybe_reshuffle(15, &mut rng));
    assert_eq!(at_threshold.remaining(), 15);
}

#[test]
fn rejected_bets_leave_chips_untouched() {
    let config = rigged_config().with_max_bet(500);
    let mut session = Session::new(config, 3).unwrap();

    assert_eq!(session.place_bet(0).unwrap_err(), BetError::Zero);
    assert_eq!(session.place_bet(5).unwrap_err(), BetError::BelowMinimum);
    assert_eq!(session.place_bet(600).unwrap_err(), BetError::AboveMaximum);
    assert_eq!(session.chips(), 1_000);
    assert_eq!(session.phase(), RoundPhase::Betting);

    let mut uncapped = Session::new(rigged_config(), 3).unwrap();
    assert_eq!(
        uncapped.place_bet(2_000).unwrap_err(),
        BetError::ExceedsChips
    );
    assert_eq!(uncapped.chips(), 1_000);
}

#[test]
fn bet_rejected_while_round_in_progress() {
    let mut session = Session::new(rigged_config(), 4).unwrap();
    session.place_bet(10).unwrap();
    assert_eq!(session.place_bet(10).unwrap_err(), BetError::InvalidState);
}

#[test]
fn accepted_bet_debits_exactly_once_and_all_in_is_allowed() {
    let mut session = Session::new(rigged_config(), 5).unwrap();
    let view = session.place_bet(1_000).unwrap();
    assert_eq!(view.bet, 1_000);
    assert_eq!(session.chips(), 0);
}

#[test]
fn natural_blackjack_pays_three_to_two_floored() {
    let mut session = rigged_session(&[
        card(Rank::Ace, Suit::Spades),  // player
        card(Rank::Nine, Suit::Hearts), // dealer up
        card(Rank::King, Suit::Spades), // player
        card(Rank::Seven, Suit::Diamonds), // dealer hole
    ]);

    // An odd bet exercises the floor on the 3:2 bonus.
    let view = session.place_bet(15).unwrap();
    assert_eq!(view.phase, RoundPhase::Settlement);
    assert!(view.player_is_blackjack);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::BlackjackWin);
    assert_eq!(settlement.payout, 15 + 22);
    assert_eq!(settlement.chip_delta, 22);
    assert_eq!(session.chips(), 1_000 + 22);
    assert_eq!(settlement.stats.wins, 1);
    assert_eq!(settlement.stats.net, 22);
}

#[test]
fn both_naturals_push_and_return_the_bet() {
    let mut session = rigged_session(&[
        card(Rank::Ace, Suit::Clubs),   // player
        card(Rank::Ace, Suit::Hearts),  // dealer up
        card(Rank::King, Suit::Clubs),  // player
        card(Rank::Queen, Suit::Hearts), // dealer hole
    ]);

    let view = session.place_bet(100).unwrap();
    assert_eq!(view.phase, RoundPhase::Settlement);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(settlement.chip_delta, 0);
    assert_eq!(session.chips(), 1_000);
    assert_eq!(settlement.stats.pushes, 1);
}

#[test]
fn standing_twenty_pushes_against_dealer_twenty() {
    // Player A♣ 9♠ (soft 20) vs dealer 6♦ + hidden 9♦; dealer draws 5♣ to 20.
    let mut session = rigged_session(&[
        card(Rank::Ace, Suit::Clubs),   // player
        card(Rank::Six, Suit::Diamonds), // dealer up
        card(Rank::Nine, Suit::Spades), // player
        card(Rank::Nine, Suit::Diamonds), // dealer hole
        card(Rank::Five, Suit::Clubs),  // dealer draw
    ]);

    let view = session.place_bet(50).unwrap();
    assert_eq!(view.phase, RoundPhase::PlayerTurn);
    assert_eq!(view.player_total, 20);
    assert!(view.player_is_soft);

    let view = session.player_action(Action::Stand).unwrap();
    assert_eq!(view.phase, RoundPhase::Settlement);
    assert_eq!(view.dealer_total, 20);
    assert_eq!(view.dealer_cards.len(), 3);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Push);
    assert_eq!(session.chips(), 1_000);
}

#[test]
fn dealer_bust_pays_even_money() {
    // Dealer 9♥ 7♣ must draw at 16 and busts with 6♦.
    let mut session = rigged_session(&[
        card(Rank::Ten, Suit::Hearts),  // player
        card(Rank::Nine, Suit::Hearts), // dealer up
        card(Rank::Eight, Suit::Spades), // player
        card(Rank::Seven, Suit::Clubs), // dealer hole
        card(Rank::Six, Suit::Diamonds), // dealer draw
    ]);

    session.place_bet(40).unwrap();
    let view = session.player_action(Action::Stand).unwrap();
    assert_eq!(view.dealer_total, 22);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::DealerBustWin);
    assert_eq!(settlement.payout, 80);
    assert_eq!(settlement.chip_delta, 40);
    assert_eq!(session.chips(), 1_040);
}

#[test]
fn dealer_stands_on_soft_seventeen() {
    let mut session = rigged_session(&[
        card(Rank::King, Suit::Spades), // player
        card(Rank::Ace, Suit::Diamonds), // dealer up
        card(Rank::Eight, Suit::Spades), // player
        card(Rank::Six, Suit::Clubs),   // dealer hole
    ]);

    session.place_bet(20).unwrap();
    let view = session.player_action(Action::Stand).unwrap();

    // A♦ + 6♣ is soft 17: no draw, terminal stand.
    assert_eq!(view.dealer_cards.len(), 2);
    assert_eq!(view.dealer_total, 17);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Win);
    assert_eq!(session.chips(), 1_020);
}

#[test]
fn dealer_draws_on_sixteen() {
    let mut session = rigged_session(&[
        card(Rank::King, Suit::Hearts), // player
        card(Rank::Nine, Suit::Clubs),  // dealer up
        card(Rank::Queen, Suit::Hearts), // player
        card(Rank::Seven, Suit::Spades), // dealer hole
        card(Rank::Two, Suit::Clubs),   // dealer draw to 18
    ]);

    session.place_bet(10).unwrap();
    let view = session.player_action(Action::Stand).unwrap();
    assert_eq!(view.dealer_cards.len(), 3);
    assert_eq!(view.dealer_total, 18);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Win);
}

#[test]
fn player_bust_loses_without_dealer_action() {
    let mut session = rigged_session(&[
        card(Rank::King, Suit::Hearts), // player
        card(Rank::Five, Suit::Diamonds), // dealer up
        card(Rank::Six, Suit::Hearts),  // player
        card(Rank::Six, Suit::Diamonds), // dealer hole
        card(Rank::Queen, Suit::Clubs), // player hit, bust
    ]);

    session.place_bet(30).unwrap();
    let view = session.player_action(Action::Hit).unwrap();
    assert!(view.player_is_bust);
    assert_eq!(view.phase, RoundPhase::Settlement);
    // The dealer never acts on a player bust.
    assert_eq!(view.dealer_cards.len(), 2);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::BustLoss);
    assert_eq!(settlement.payout, 0);
    assert_eq!(session.chips(), 970);
}

#[test]
fn hit_then_stand_loses_to_dealer_twenty_one() {
    let mut session = rigged_session(&[
        card(Rank::Eight, Suit::Hearts), // player
        card(Rank::Six, Suit::Clubs),   // dealer up
        card(Rank::Seven, Suit::Diamonds), // player
        card(Rank::Ten, Suit::Spades),  // dealer hole
        card(Rank::Four, Suit::Hearts), // player hit
        card(Rank::Five, Suit::Clubs),  // dealer draw
    ]);

    session.place_bet(10).unwrap();
    let view = session.player_action(Action::Hit).unwrap();
    assert_eq!(view.player_total, 19);
    assert_eq!(view.phase, RoundPhase::PlayerTurn);

    let view = session.player_action(Action::Stand).unwrap();
    assert_eq!(view.dealer_total, 21);

    let settlement = session.settle().unwrap();
    assert_eq!(settlement.outcome, Outcome::Loss);
    assert_eq!(session.chips(), 990);
}

#[test]
fn shoe_is_rebuilt_between_rounds_when_below_threshold() {
    // 18 cards rigged; the round consumes four, leaving 14 < threshold 15.
    let mut cards = vec![FILLER; 14];
    cards.extend(
        [
            card(Rank::Ten, Suit::Hearts),  // player
            card(Rank::Ten, Suit::Diamonds), // dealer up
            card(Rank::Nine, Suit::Spades), // player
            card(Rank::Eight, Suit::Clubs), // dealer hole
        ]
        .iter()
        .rev()
        .copied(),
    );
    let shoe = Shoe::with_cards(1, cards).unwrap();
    let config = rigged_config().with_reshuffle_threshold(15);
    let mut session = Session::with_shoe(config, shoe, 11).unwrap();

    session.place_bet(10).unwrap();
    session.player_action(Action::Stand).unwrap();
    assert_eq!(session.shoe_remaining(), 14);

    let settlement = session.settle().unwrap();
    assert!(settlement.reshuffled);
    assert_eq!(session.shoe_remaining(), DECK_SIZE);
    assert_eq!(settlement.outcome, Outcome::Win);
}

#[test]
fn no_reshuffle_mid_hand_even_when_shoe_runs_dry() {
    // Exactly the four deal cards and nothing underneath.
    let cards: Vec<Card> = [
        card(Rank::Five, Suit::Hearts), // player
        card(Rank::Nine, Suit::Clubs),  // dealer up
        card(Rank::Six, Suit::Spades),  // player
        card(Rank::Seven, Suit::Diamonds), // dealer hole
    ]
    .iter()
    .rev()
    .copied()
    .collect();
    let shoe = Shoe::with_cards(1, cards).unwrap();
    let mut session = Session::with_shoe(rigged_config(), shoe, 0).unwrap();

    session.place_bet(10).unwrap();
    let err = session.player_action(Action::Hit).unwrap_err();
    assert_eq!(err, ActionError::Shoe(ShoeExhausted));

    // The failed draw changed nothing.
    let view = session.view();
    assert_eq!(view.phase, RoundPhase::PlayerTurn);
    assert_eq!(view.player_cards.len(), 2);
}

#[test]
fn bet_rejected_when_shoe_cannot_cover_the_deal() {
    let shoe = Shoe::with_cards(1, vec![FILLER; 3]).unwrap();
    let mut session = Session::with_shoe(rigged_config(), shoe, 0).unwrap();

    assert_eq!(
        session.place_bet(10).unwrap_err(),
        BetError::Shoe(ShoeExhausted)
    );
    assert_eq!(session.chips(), 1_000);
}

#[test]
fn stats_accumulate_across_rounds() {
    let mut session = rigged_session(&[
        // Round one: player natural, bet 10, net +15.
        card(Rank::Ace, Suit::Spades),
        card(Rank::Nine, Suit::Hearts),
        card(Rank::King, Suit::Spades),
        card(Rank::Seven, Suit::Diamonds),
        // Round two: player 18 stands, dealer 19, net -10.
        card(Rank::Queen, Suit::Hearts),
        card(Rank::King, Suit::Diamonds),
        card(Rank::Eight, Suit::Hearts),
        card(Rank::Nine, Suit::Diamonds),
    ]);

    session.place_bet(10).unwrap();
    session.settle().unwrap();

    session.place_bet(10).unwrap();
    session.player_action(Action::Stand).unwrap();
    let settlement = session.settle().unwrap();

    assert_eq!(settlement.stats.hands_played, 2);
    assert_eq!(settlement.stats.wins, 1);
    assert_eq!(settlement.stats.losses, 1);
    assert_eq!(settlement.stats.pushes, 0);
    assert_eq!(settlement.stats.net, 5);
    assert_eq!(session.chips(), 1_005);

    session.reset_stats();
    assert_eq!(session.stats().hands_played, 0);
    assert_eq!(session.stats().net, 0);
    assert_eq!(session.chips(), 1_005);
}

#[test]
fn same_seed_replays_the_same_deal() {
    let config = SessionConfig::default()
        .with_starting_chips(1_000)
        .with_min_bet(10);

    let mut first = Session::new(config, 42).unwrap();
    let mut second = Session::new(config, 42).unwrap();

    let a = first.place_bet(10).unwrap();
    let b = second.place_bet(10).unwrap();

    assert_eq!(a.player_cards, b.player_cards);
    assert_eq!(a.dealer_cards, b.dealer_cards);
}

#[test]
fn operations_reject_the_wrong_phase() {
    let mut session = Session::new(rigged_config(), 1).unwrap();

    assert_eq!(
        session.player_action(Action::Hit).unwrap_err(),
        ActionError::InvalidState
    );
    assert_eq!(session.settle().unwrap_err(), SettleError::InvalidState);

    session.place_bet(10).unwrap();
    // No outcome yet: settling mid-turn is rejected.
    if session.phase() == RoundPhase::PlayerTurn {
        assert_eq!(session.settle().unwrap_err(), SettleError::InvalidState);
    }
}
