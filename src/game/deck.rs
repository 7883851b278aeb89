//! The draw pile.
//!
//! A `Deck` holds every card of one game. It is shuffled once at
//! construction and then dealt from one card at a time; the draw order
//! itself is never exposed, only the live inventory.

use std::collections::BTreeSet;

use log::{debug, trace};
use rustc_hash::FxHashMap;

use crate::cards::{Card, Color};
use crate::core::{Composition, GameRng, RulesConfig, RulesError};

/// Shuffled draw pile with per-card inventory.
///
/// ## Invariant
///
/// `cards_remaining` equals both the sum of `card_counts` and the number of
/// undrawn cards in the draw order.
///
/// ```
/// use firebreak::{Deck, RulesConfig};
///
/// let mut deck = Deck::from_config(&RulesConfig::default(), 42);
/// assert_eq!(deck.cards_remaining(), 50);
///
/// let card = deck.draw_card().unwrap();
/// assert_eq!(deck.cards_remaining(), 49);
/// assert!(deck.count_of(card) < 3);
/// ```
#[derive(Clone, Debug)]
pub struct Deck {
    colors: BTreeSet<Color>,
    card_counts: FxHashMap<Card, u32>,
    /// Draw order; cards are dealt from the end.
    shuffled: Vec<Card>,
    cards_remaining: usize,
}

impl Deck {
    /// Build and shuffle a deck.
    ///
    /// Every color gets `composition.copies(rank)` copies of each rank.
    /// Panics if `colors` is empty.
    pub fn new(
        colors: impl IntoIterator<Item = Color>,
        composition: &Composition,
        rng: &mut GameRng,
    ) -> Self {
        let colors: BTreeSet<Color> = colors.into_iter().collect();
        assert!(!colors.is_empty(), "Deck must have at least 1 color");

        let mut card_counts = FxHashMap::default();
        let mut shuffled = Vec::new();

        // Colors and ranks are both visited in sorted order so a seed always
        // produces the same deal.
        for &color in &colors {
            for (rank, copies) in composition.iter() {
                let card = Card::new(color, rank);
                card_counts.insert(card, copies);
                shuffled.extend(std::iter::repeat(card).take(copies as usize));
            }
        }

        rng.shuffle(&mut shuffled);

        let cards_remaining = shuffled.len();
        debug!(
            "Built deck of {} cards across {} colors (seed {})",
            cards_remaining,
            colors.len(),
            rng.seed()
        );

        Self {
            colors,
            card_counts,
            shuffled,
            cards_remaining,
        }
    }

    /// Build a deck from a rules config, shuffled with `seed`.
    pub fn from_config(config: &RulesConfig, seed: u64) -> Self {
        let mut rng = GameRng::new(seed);
        Self::new(config.colors.iter().copied(), &config.composition, &mut rng)
    }

    /// Deal the next card.
    ///
    /// Fails with `ExhaustedDeck` once every card has been drawn.
    pub fn draw_card(&mut self) -> Result<Card, RulesError> {
        let card = self.shuffled.pop().ok_or(RulesError::ExhaustedDeck)?;

        if let Some(count) = self.card_counts.get_mut(&card) {
            *count -= 1;
        }
        self.cards_remaining -= 1;

        trace!("Drew {} ({} left)", card, self.cards_remaining);
        Ok(card)
    }

    /// Cards left to draw.
    #[must_use]
    pub fn cards_remaining(&self) -> usize {
        self.cards_remaining
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards_remaining == 0
    }

    /// Remaining copies of every card value the deck was built with.
    ///
    /// Fully drawn values stay in the map with a count of 0.
    #[must_use]
    pub fn card_counts(&self) -> &FxHashMap<Card, u32> {
        &self.card_counts
    }

    /// Remaining copies of one card value.
    #[must_use]
    pub fn count_of(&self, card: Card) -> u32 {
        self.card_counts.get(&card).copied().unwrap_or(0)
    }

    /// Colors this deck was built from.
    #[must_use]
    pub fn colors(&self) -> &BTreeSet<Color> {
        &self.colors
    }
}
