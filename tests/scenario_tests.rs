//! End-to-end scenarios driving a deck and board together.

use firebreak::{Board, Card, Color, Deck, PlayOutcome, RulesConfig, RulesError};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Clues run dry, a completed stack refunds one, discards refill to the cap,
/// and misplays burn through the bombs.
#[test]
fn test_board_lifecycle() {
    init_logging();
    let mut board = Board::from_config(&RulesConfig::default());

    for _ in 0..8 {
        board.give_clue().unwrap();
    }
    assert_eq!(board.num_clues(), 0);
    assert_eq!(board.give_clue(), Err(RulesError::ExhaustedClues));

    for rank in 1..=5 {
        board.play_card(Card::new(Color::White, rank)).unwrap();
    }
    assert_eq!(board.num_clues(), 1);

    board.give_clue().unwrap();
    assert_eq!(board.num_clues(), 0);

    let white1 = Card::new(Color::White, 1);
    for i in 1..=8 {
        board.discard(white1).unwrap();
        assert_eq!(board.num_clues(), i);
    }
    board.discard(white1).unwrap();
    assert_eq!(board.num_clues(), 8);
    assert_eq!(board.discard_count(white1), 9);

    // White is complete, so a white 3 never fits
    let white3 = Card::new(Color::White, 3);
    let mut misplays = 0;
    while board.num_bombs() > 0 {
        assert_eq!(board.play_card(white3), Ok(PlayOutcome::Misplayed));
        misplays += 1;
    }
    assert_eq!(misplays, 3);
    assert!(board.bombs_exhausted());
    assert_eq!(board.discard_count(white3), 3);
}

/// A naive driver that plays every card it draws, stopping when the deck
/// or the bombs run out.
#[test]
fn test_play_everything_driver() {
    init_logging();
    let config = RulesConfig::default();
    let mut deck = Deck::from_config(&config, 2024);
    let mut board = Board::for_deck(&deck, config.max_clues, config.bombs);

    let mut drawn = 0;
    let mut played = 0;
    while !deck.is_empty() && !board.bombs_exhausted() {
        let card = deck.draw_card().unwrap();
        drawn += 1;
        if let PlayOutcome::Played { .. } = board.play_card(card).unwrap() {
            played += 1;
        }
    }

    assert_eq!(deck.cards_remaining(), 50 - drawn);
    assert_eq!(board.score(), played);
    let discarded: u32 = board.discards().values().sum();
    assert_eq!(discarded + played, drawn as u32);
    assert!(deck.is_empty() || board.num_bombs() == 0);
}

/// Discarding every card in the deck keeps clues saturated and the
/// discard pile mirrors the original inventory.
#[test]
fn test_discard_whole_deck() {
    let config = RulesConfig::default();
    let mut deck = Deck::from_config(&config, 5);
    let initial = deck.card_counts().clone();
    let mut board = Board::for_deck(&deck, config.max_clues, config.bombs);

    while let Ok(card) = deck.draw_card() {
        board.discard(card).unwrap();
    }

    assert_eq!(board.num_clues(), 8);
    for (&card, &copies) in &initial {
        assert_eq!(board.discard_count(card), copies);
    }
    assert_eq!(deck.draw_card(), Err(RulesError::ExhaustedDeck));
}
