//! Rule violations reported to the caller.
//!
//! These are contract breaches by whoever drives the game, not game events:
//! a misplay is a normal outcome of `Board::play_card`, while drawing from an
//! empty deck is a caller bug. The driver should check `cards_remaining` and
//! `num_clues` before acting.

use derive_more::{Display, Error};

use crate::cards::{Color, Rank, MAX_RANK};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum RulesError {
    #[display(fmt = "Tried to draw from an empty deck")]
    ExhaustedDeck,
    #[display(fmt = "Tried to give a clue when there were no available clue tokens")]
    ExhaustedClues,
    #[display(fmt = "Color {} is not in play on this board", color)]
    InvalidColor { color: Color },
    #[display(fmt = "Card rank must be in 1..={}, got {}", MAX_RANK, rank)]
    InvalidRank { rank: Rank },
    #[display(fmt = "Board holds {} clues but allows at most {}", num_clues, max_clues)]
    ClueOverflow { num_clues: u32, max_clues: u32 },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            RulesError::ExhaustedDeck.to_string(),
            "Tried to draw from an empty deck"
        );
        assert_eq!(
            RulesError::InvalidColor { color: Color::Rainbow }.to_string(),
            "Color RAINBOW is not in play on this board"
        );
        assert_eq!(
            RulesError::InvalidRank { rank: 6 }.to_string(),
            "Card rank must be in 1..=5, got 6"
        );
    }

    #[test]
    fn test_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(RulesError::ExhaustedClues);
        assert!(err.source().is_none());
    }
}
