//! Card values.
//!
//! A `Card` is a plain value: two cards with the same color and rank are
//! indistinguishable, and a deck holds several copies of the same value.

use serde::{Deserialize, Serialize};

use super::color::Color;
use crate::core::RulesError;

/// Card rank. Valid ranks are `1..=MAX_RANK`.
pub type Rank = u8;

/// Highest rank; a zone at this height is a completed stack.
pub const MAX_RANK: Rank = 5;

/// An immutable (color, rank) value, usable directly as a map key.
///
/// Fields are private so every card, including deserialized ones, has a
/// rank in `1..=MAX_RANK`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawCard")]
pub struct Card {
    color: Color,
    rank: Rank,
}

/// Unchecked wire form of a `Card`.
#[derive(Deserialize)]
struct RawCard {
    color: Color,
    rank: Rank,
}

impl TryFrom<RawCard> for Card {
    type Error = RulesError;

    fn try_from(raw: RawCard) -> Result<Self, Self::Error> {
        Card::try_new(raw.color, raw.rank)
    }
}

impl Card {
    /// Create a card.
    ///
    /// Panics if `rank` is outside `1..=MAX_RANK`.
    #[must_use]
    pub fn new(color: Color, rank: Rank) -> Self {
        assert!(
            (1..=MAX_RANK).contains(&rank),
            "Card rank must be in 1..={}, got {}",
            MAX_RANK,
            rank
        );
        Self { color, rank }
    }

    /// Create a card, failing with `InvalidRank` if `rank` is outside
    /// `1..=MAX_RANK`.
    pub fn try_new(color: Color, rank: Rank) -> Result<Self, RulesError> {
        if (1..=MAX_RANK).contains(&rank) {
            Ok(Self { color, rank })
        } else {
            Err(RulesError::InvalidRank { rank })
        }
    }

    #[must_use]
    pub fn color(self) -> Color {
        self.color
    }

    #[must_use]
    pub fn rank(self) -> Rank {
        self.rank
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.color, self.rank)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::FxHashMap;

    #[test]
    fn test_structural_equality() {
        assert_eq!(Card::new(Color::Red, 1), Card::new(Color::Red, 1));
        assert_ne!(Card::new(Color::Red, 1), Card::new(Color::Red, 2));
        assert_ne!(Card::new(Color::Red, 1), Card::new(Color::Blue, 1));
    }

    #[test]
    fn test_copies_share_a_key() {
        let mut counts: FxHashMap<Card, u32> = FxHashMap::default();
        for _ in 0..3 {
            *counts.entry(Card::new(Color::Red, 1)).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), 1);
        assert_eq!(counts[&Card::new(Color::Red, 1)], 3);
    }

    #[test]
    fn test_accessors() {
        let card = Card::new(Color::Blue, 3);
        assert_eq!(card.color(), Color::Blue);
        assert_eq!(card.rank(), 3);
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(Color::White, 5).to_string(), "WHITE 5");
    }

    #[test]
    #[should_panic(expected = "Card rank must be in 1..=5")]
    fn test_rank_zero() {
        let _ = Card::new(Color::Green, 0);
    }

    #[test]
    #[should_panic(expected = "Card rank must be in 1..=5")]
    fn test_rank_too_high() {
        let _ = Card::new(Color::Green, 6);
    }

    #[test]
    fn test_try_new() {
        assert_eq!(Card::try_new(Color::Red, 5), Ok(Card::new(Color::Red, 5)));
        assert_eq!(
            Card::try_new(Color::Red, 6),
            Err(RulesError::InvalidRank { rank: 6 })
        );
        assert_eq!(
            Card::try_new(Color::Red, 0),
            Err(RulesError::InvalidRank { rank: 0 })
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let card = Card::new(Color::Yellow, 4);

        let json = serde_json::to_string(&card).unwrap();
        let deserialized: Card = serde_json::from_str(&json).unwrap();

        assert_eq!(card, deserialized);
    }

    #[test]
    fn test_deserialize_rejects_bad_rank() {
        for json in [
            r#"{"color":"White","rank":6}"#,
            r#"{"color":"White","rank":7}"#,
            r#"{"color":"Red","rank":0}"#,
        ] {
            let err = serde_json::from_str::<Card>(json).unwrap_err();
            assert!(err.to_string().contains("Card rank must be in 1..=5"), "{}", err);
        }
    }
}
