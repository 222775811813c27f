//! Game integration tests.

use std::collections::VecDeque;

use bjsolo::{
    ActionError, Card, DealError, DealerError, Deck, DeckExhaustedError, Decision, Game,
    GameOptions, GameState, Hand, InputError, InputExhausted, InputProvider, Outcome, PlayError,
    Rank, Renderer, ShowdownError, Suit,
};

const fn card(suit: Suit, rank: Rank) -> Card {
    Card::new(suit, rank)
}

/// Builds a deck whose first draws are `draws`, in order.
fn stacked(draws: &[Card]) -> Deck {
    stacked_at(0, draws)
}

/// Builds a deck with `cards` placed from `offset` onward.
fn stacked_at(offset: usize, cards: &[Card]) -> Deck {
    Deck::shuffled_with(|deck| {
        for (index, wanted) in cards.iter().enumerate() {
            let from = deck.iter().position(|c| c == wanted).unwrap();
            deck.swap(offset + index, from);
        }
    })
}

/// Builds a deck holding only `remaining`, top first.
fn short_deck(remaining: &[Card]) -> Deck {
    let offset = 52 - remaining.len();
    let mut deck = stacked_at(offset, remaining);
    for _ in 0..offset {
        deck.draw().unwrap();
    }
    deck
}

fn game_from_draws(draws: &[Card]) -> Game {
    Game::with_deck(GameOptions::default(), stacked(draws))
}

struct Script(VecDeque<&'static str>);

impl Script {
    fn new(lines: &[&'static str]) -> Self {
        Self(lines.iter().copied().collect())
    }
}

impl InputProvider for Script {
    fn read_player_decision(&mut self) -> Result<String, InputError> {
        self.0
            .pop_front()
            .map(String::from)
            .ok_or(InputError::Exhausted)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    InProgress {
        up_card: Card,
        player_cards: Vec<Card>,
        player_value: u8,
    },
    Final {
        dealer_cards: Vec<Card>,
        dealer_value: u8,
        player_value: u8,
    },
    InvalidInput,
    Outcome(Outcome),
}

#[derive(Default)]
struct Recorder(Vec<Event>);

impl Renderer for Recorder {
    fn render_in_progress(&mut self, dealer_up_card: &Card, player_hand: &Hand, player_value: u8) {
        self.0.push(Event::InProgress {
            up_card: *dealer_up_card,
            player_cards: player_hand.cards().to_vec(),
            player_value,
        });
    }

    fn render_final(
        &mut self,
        dealer_hand: &Hand,
        dealer_value: u8,
        _player_hand: &Hand,
        player_value: u8,
    ) {
        self.0.push(Event::Final {
            dealer_cards: dealer_hand.cards().to_vec(),
            dealer_value,
            player_value,
        });
    }

    fn render_invalid_input(&mut self) {
        self.0.push(Event::InvalidInput);
    }

    fn render_outcome(&mut self, outcome: Outcome) {
        self.0.push(Event::Outcome(outcome));
    }
}

#[test]
fn deal_alternates_player_then_dealer() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Eight),   // player
        card(Suit::Clubs, Rank::Six),      // dealer up
        card(Suit::Diamonds, Rank::Seven), // player
        card(Suit::Spades, Rank::Ten),     // dealer hole
    ]);
    assert_eq!(game.state(), GameState::Dealing);

    game.deal().unwrap();

    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(
        game.player_hand().cards(),
        &[
            card(Suit::Hearts, Rank::Eight),
            card(Suit::Diamonds, Rank::Seven)
        ]
    );
    assert_eq!(
        game.dealer_up_card(),
        Some(&card(Suit::Clubs, Rank::Six))
    );
    assert_eq!(game.dealer_hand().len(), 2);
    assert_eq!(game.cards_remaining(), 48);
}

#[test]
fn basic_round_flow() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Eight),   // player
        card(Suit::Clubs, Rank::Six),      // dealer up
        card(Suit::Diamonds, Rank::Seven), // player
        card(Suit::Spades, Rank::Ten),     // dealer hole
        card(Suit::Hearts, Rank::Four),    // player hit
        card(Suit::Clubs, Rank::Five),     // dealer draw
    ]);

    game.deal().unwrap();

    let hit_card = game.hit().unwrap();
    assert_eq!(hit_card.rank, Rank::Four);
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player_hand().value(), 19);

    game.stand().unwrap();
    assert_eq!(game.state(), GameState::DealerTurn);

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn, vec![card(Suit::Clubs, Rank::Five)]);
    assert_eq!(game.state(), GameState::Evaluating);

    let result = game.showdown().unwrap();
    assert_eq!(game.state(), GameState::Terminal);
    assert_eq!(result.player_value, 19);
    assert_eq!(result.dealer_value, 21);
    assert_eq!(result.outcome, Outcome::DealerBeatsPlayer);
    assert_eq!(result.dealer_cards.len(), 3);
}

#[test]
fn player_bust_skips_dealer_turn() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Five), // dealer sits on 14
        card(Suit::Spades, Rank::King), // player hit to 26
    ]);

    game.deal().unwrap();
    game.hit().unwrap();

    assert!(game.has_player_busted());
    assert_eq!(game.state(), GameState::DealerTurn);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);

    let drawn = game.dealer_play().unwrap();
    assert!(drawn.is_empty());
    assert_eq!(game.dealer_hand().value(), 14);

    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBusted);
    assert!(!result.outcome.is_player_win());
}

#[test]
fn player_busting_at_22_loses_even_when_dealer_would_bust() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Two),
        card(Suit::Spades, Rank::Six),
        card(Suit::Spades, Rank::Queen), // player 22
        card(Suit::Hearts, Rank::King),  // would bust the dealer
    ]);

    game.deal().unwrap();
    game.hit().unwrap();
    assert_eq!(game.player_hand().value(), 22);

    game.dealer_play().unwrap();
    let result = game.showdown().unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBusted);
    assert_eq!(result.dealer_value, 16);
}

#[test]
fn dealer_draws_to_23_and_busts() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Spades, Rank::Six),
        card(Suit::Hearts, Rank::Seven),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    assert!(game.has_dealer_busted());
    let result = game.showdown().unwrap();
    assert_eq!(result.player_value, 20);
    assert_eq!(result.dealer_value, 23);
    assert_eq!(result.outcome, Outcome::DealerBusted);
    assert!(result.outcome.is_player_win());
}

#[test]
fn higher_player_hand_wins() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Spades, Rank::Eight),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    assert!(game.dealer_play().unwrap().is_empty());

    let result = game.showdown().unwrap();
    assert_eq!((result.player_value, result.dealer_value), (20, 18));
    assert_eq!(result.outcome, Outcome::PlayerBeatsDealer);
    assert!(result.outcome.is_player_win());
}

#[test]
fn tie_is_a_push_that_the_house_wins() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Eight),
        card(Suit::Spades, Rank::Eight),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!((result.player_value, result.dealer_value), (18, 18));
    assert_eq!(result.outcome, Outcome::Push);
    assert!(!result.outcome.is_player_win());
}

#[test]
fn higher_dealer_hand_wins() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Spades, Rank::Nine),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();
    game.dealer_play().unwrap();

    let result = game.showdown().unwrap();
    assert_eq!((result.player_value, result.dealer_value), (17, 19));
    assert_eq!(result.outcome, Outcome::DealerBeatsPlayer);
}

#[test]
fn dealer_keeps_drawing_through_16() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Queen),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Two), // dealer 12
        card(Suit::Hearts, Rank::Two), // 14
        card(Suit::Clubs, Rank::Two),  // 16
        card(Suit::Spades, Rank::Three), // 19
        card(Suit::Diamonds, Rank::Two),
    ]);

    game.deal().unwrap();
    game.stand().unwrap();

    let drawn = game.dealer_play().unwrap();
    assert_eq!(drawn.len(), 3);
    assert_eq!(game.dealer_hand().value(), 19);
    assert_eq!(game.cards_remaining(), 52 - 7);
}

#[test]
fn dealer_stands_on_soft_17() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ace),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Six), // dealer 7 promoted to 17
    ]);

    game.deal().unwrap();
    game.stand().unwrap();

    assert!(game.dealer_play().unwrap().is_empty());
    assert_eq!(game.dealer_hand().value(), 17);
}

#[test]
fn dealer_threshold_is_configurable() {
    let options = GameOptions::default().with_dealer_stands_on(18);
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Nine),
        card(Suit::Spades, Rank::Seven), // dealer 17
        card(Suit::Hearts, Rank::Ace),   // 18
    ]);
    let mut game = Game::with_deck(options, deck);

    game.deal().unwrap();
    game.stand().unwrap();

    assert_eq!(
        game.dealer_play().unwrap(),
        vec![card(Suit::Hearts, Rank::Ace)]
    );
    assert_eq!(game.dealer_hand().value(), 18);
}

#[test]
fn apply_dispatches_decisions() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Two),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Three),
        card(Suit::Spades, Rank::Ten),
        card(Suit::Hearts, Rank::Four),
    ]);
    game.deal().unwrap();

    assert_eq!(
        game.apply(Decision::Hit).unwrap(),
        Some(card(Suit::Hearts, Rank::Four))
    );
    assert_eq!(game.apply(Decision::Stand).unwrap(), None);
    assert_eq!(game.state(), GameState::DealerTurn);
}

#[test]
fn operations_out_of_order_are_rejected() {
    let mut game = Game::new(GameOptions::default(), 3);

    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.stand().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);

    game.deal().unwrap();
    assert_eq!(game.deal().unwrap_err(), DealError::InvalidState);
    assert_eq!(game.dealer_play().unwrap_err(), DealerError::InvalidState);

    game.stand().unwrap();
    game.dealer_play().unwrap();
    game.showdown().unwrap();

    assert_eq!(game.state(), GameState::Terminal);
    assert_eq!(game.hit().unwrap_err(), ActionError::InvalidState);
    assert_eq!(game.showdown().unwrap_err(), ShowdownError::InvalidState);
    assert_eq!(
        game.play(Script::new(&[]), Recorder::default()).unwrap_err(),
        PlayError::Showdown(ShowdownError::InvalidState)
    );
}

#[test]
fn deal_with_short_deck_returns_error() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        short_deck(&[
            card(Suit::Hearts, Rank::Nine),
            card(Suit::Clubs, Rank::Five),
            card(Suit::Diamonds, Rank::Seven),
        ]),
    );

    assert_eq!(
        game.deal().unwrap_err(),
        DealError::NoCards(DeckExhaustedError)
    );
}

#[test]
fn hit_with_empty_deck_returns_error() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        short_deck(&[
            card(Suit::Hearts, Rank::Five),
            card(Suit::Clubs, Rank::Nine),
            card(Suit::Spades, Rank::Six),
            card(Suit::Diamonds, Rank::Seven),
        ]),
    );

    game.deal().unwrap();
    assert_eq!(game.cards_remaining(), 0);
    assert_eq!(
        game.hit().unwrap_err(),
        ActionError::NoCards(DeckExhaustedError)
    );
    assert_eq!(game.player_hand().len(), 2);
    assert_eq!(game.state(), GameState::PlayerTurn);
}

#[test]
fn dealer_with_empty_deck_returns_error() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        short_deck(&[
            card(Suit::Hearts, Rank::Ten),
            card(Suit::Clubs, Rank::Ten),
            card(Suit::Spades, Rank::Nine),
            card(Suit::Diamonds, Rank::Two),
        ]),
    );

    game.deal().unwrap();
    game.stand().unwrap();
    assert_eq!(
        game.dealer_play().unwrap_err(),
        DealerError::NoCards(DeckExhaustedError)
    );
}

#[test]
fn play_reprompts_on_invalid_input() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Five),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Eight), // dealer 17
        card(Suit::Clubs, Rank::Two),    // player hit
    ]);
    let mut recorder = Recorder::default();

    let result = game
        .play(Script::new(&["x", "HIT!", "Stand"]), &mut recorder)
        .unwrap();

    assert_eq!(result.outcome, Outcome::DealerBeatsPlayer);
    assert_eq!(result.player_value, 13);
    assert_eq!(game.cards_remaining(), 52 - 5);
    assert_eq!(game.state(), GameState::Terminal);

    let up_card = card(Suit::Clubs, Rank::Nine);
    let opening = vec![
        card(Suit::Hearts, Rank::Five),
        card(Suit::Diamonds, Rank::Six),
    ];
    let mut after_hit = opening.clone();
    after_hit.push(card(Suit::Clubs, Rank::Two));

    assert_eq!(
        recorder.0,
        vec![
            Event::InProgress {
                up_card,
                player_cards: opening.clone(),
                player_value: 11,
            },
            Event::InvalidInput,
            Event::InProgress {
                up_card,
                player_cards: opening,
                player_value: 11,
            },
            Event::InProgress {
                up_card,
                player_cards: after_hit,
                player_value: 13,
            },
            Event::Final {
                dealer_cards: vec![up_card, card(Suit::Spades, Rank::Eight)],
                dealer_value: 17,
                player_value: 13,
            },
            Event::Outcome(Outcome::DealerBeatsPlayer),
        ]
    );
}

#[test]
fn play_ends_turn_on_bust() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Nine),
        card(Suit::Diamonds, Rank::Six),
        card(Suit::Spades, Rank::Five),
        card(Suit::Spades, Rank::King),
    ]);
    let mut recorder = Recorder::default();

    let result = game.play(Script::new(&["h", "s"]), &mut recorder).unwrap();

    assert_eq!(result.outcome, Outcome::PlayerBusted);
    assert_eq!(result.dealer_cards.len(), 2);
    assert_eq!(recorder.0.len(), 3);
    assert_eq!(recorder.0[2], Event::Outcome(Outcome::PlayerBusted));
}

#[test]
fn exhausted_input_aborts_and_round_can_resume() {
    let mut game = game_from_draws(&[
        card(Suit::Hearts, Rank::King),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Queen),
        card(Suit::Spades, Rank::Eight),
    ]);

    let err = game
        .play(Script::new(&["?"]), Recorder::default())
        .unwrap_err();
    assert_eq!(err, PlayError::Input(InputError::Exhausted));
    assert_eq!(game.state(), GameState::PlayerTurn);
    assert_eq!(game.player_hand().len(), 2);

    game.stand().unwrap();
    let result = game.play(Script::new(&[]), Recorder::default()).unwrap();
    assert_eq!(result.outcome, Outcome::PlayerBeatsDealer);
}

#[test]
fn exhausted_input_can_mean_stand() {
    let options = GameOptions::default().with_input_exhausted(InputExhausted::Stand);
    let deck = stacked(&[
        card(Suit::Hearts, Rank::Ten),
        card(Suit::Clubs, Rank::Ten),
        card(Suit::Diamonds, Rank::Seven),
        card(Suit::Spades, Rank::Nine),
    ]);
    let mut game = Game::with_deck(options, deck);

    let result = game.play(Script::new(&[]), Recorder::default()).unwrap();

    assert_eq!(result.outcome, Outcome::DealerBeatsPlayer);
    assert_eq!(game.state(), GameState::Terminal);
}

#[test]
fn play_with_short_deck_reports_deal_error() {
    let mut game = Game::with_deck(
        GameOptions::default(),
        short_deck(&[card(Suit::Hearts, Rank::Two)]),
    );

    let err = game
        .play(Script::new(&["s"]), Recorder::default())
        .unwrap_err();
    assert_eq!(err, PlayError::Deal(DealError::NoCards(DeckExhaustedError)));
}

#[test]
fn seeded_games_are_reproducible() {
    let mut first = Game::new(GameOptions::default(), 1234);
    let mut second = Game::new(GameOptions::default(), 1234);

    first.deal().unwrap();
    second.deal().unwrap();

    assert_eq!(first.player_hand(), second.player_hand());
    assert_eq!(first.dealer_hand(), second.dealer_hand());
}
