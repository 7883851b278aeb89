//! Shared table state: played stacks, discards, clue and bomb tokens.
//!
//! The board enforces the three team actions:
//! - `play_card`: extend a stack, or misplay and lose a bomb
//! - `discard`: bin a card and regain a clue
//! - `give_clue`: spend a clue
//!
//! It owns no turn order and no terminal transition. Drivers poll
//! `bombs_exhausted()` and `is_complete()` after each action.

use im::HashMap as ImHashMap;
use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Color, Rank, MAX_RANK};
use crate::core::{RulesConfig, RulesError};
use crate::game::deck::Deck;

/// What a call to `Board::play_card` did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card extended its stack. `completed` is set when it was the
    /// final rank, which also refunds one clue.
    Played { completed: bool },
    /// The card did not fit; a bomb was lost and the card discarded.
    Misplayed,
}

/// Shared game board.
///
/// Uses `im` persistent maps so drivers can clone boards cheaply when
/// branching over candidate actions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawBoard")]
pub struct Board {
    /// Highest rank played per color, 0 for an empty stack.
    zones: ImHashMap<Color, Rank>,
    /// Times each card value was discarded or misplayed.
    discards: ImHashMap<Card, u32>,
    num_clues: u32,
    max_clues: u32,
    /// May go below zero if the driver keeps playing after the last bomb.
    num_bombs: i32,
}

/// Unchecked wire form of a `Board`.
#[derive(Deserialize)]
struct RawBoard {
    zones: ImHashMap<Color, Rank>,
    discards: ImHashMap<Card, u32>,
    num_clues: u32,
    max_clues: u32,
    num_bombs: i32,
}

impl TryFrom<RawBoard> for Board {
    type Error = RulesError;

    fn try_from(raw: RawBoard) -> Result<Self, Self::Error> {
        if let Some(&rank) = raw.zones.values().find(|&&rank| rank > MAX_RANK) {
            return Err(RulesError::InvalidRank { rank });
        }
        if raw.num_clues > raw.max_clues {
            return Err(RulesError::ClueOverflow {
                num_clues: raw.num_clues,
                max_clues: raw.max_clues,
            });
        }

        Ok(Self {
            zones: raw.zones,
            discards: raw.discards,
            num_clues: raw.num_clues,
            max_clues: raw.max_clues,
            num_bombs: raw.num_bombs,
        })
    }
}

impl Board {
    /// Create a board with an empty stack for each color.
    ///
    /// Starts with `max_clues` clues and `bombs` bombs.
    /// Panics if `colors` is empty.
    pub fn new(colors: impl IntoIterator<Item = Color>, max_clues: u32, bombs: i32) -> Self {
        let zones: ImHashMap<Color, Rank> = colors.into_iter().map(|c| (c, 0)).collect();
        assert!(!zones.is_empty(), "Board must have at least 1 color");

        Self {
            zones,
            discards: ImHashMap::new(),
            num_clues: max_clues,
            max_clues,
            num_bombs: bombs,
        }
    }

    /// Create a board over the same colors as `deck`.
    ///
    /// The board does not keep a reference to the deck.
    pub fn for_deck(deck: &Deck, max_clues: u32, bombs: i32) -> Self {
        Self::new(deck.colors().iter().copied(), max_clues, bombs)
    }

    /// Create a board with the colors and limits of a rules config.
    pub fn from_config(config: &RulesConfig) -> Self {
        Self::new(config.colors.iter().copied(), config.max_clues, config.bombs)
    }

    /// Discard a card, regaining a clue up to the cap.
    ///
    /// Fails only if the card's color is not on this board.
    pub fn discard(&mut self, card: Card) -> Result<(), RulesError> {
        self.check_color(card.color())?;

        self.record_discard(card);
        self.refund_clue();

        debug!("Discarded {} ({} clues)", card, self.num_clues);
        Ok(())
    }

    /// Play a card onto its color's stack.
    ///
    /// Legal iff the card is the next rank its stack needs. A misplay costs
    /// a bomb and sends the card to the discards; it is not an error.
    pub fn play_card(&mut self, card: Card) -> Result<PlayOutcome, RulesError> {
        let zone = self
            .zones
            .get_mut(&card.color())
            .ok_or(RulesError::InvalidColor { color: card.color() })?;

        // Card ranks never exceed MAX_RANK, so neither does a zone.
        if *zone + 1 == card.rank() {
            *zone += 1;
            let completed = *zone == MAX_RANK;
            if completed {
                self.refund_clue();
            }

            debug!("Played {} (completed: {})", card, completed);
            Ok(PlayOutcome::Played { completed })
        } else {
            self.num_bombs -= 1;
            self.record_discard(card);

            if self.num_bombs <= 0 {
                warn!("Misplayed {}: no bombs left ({})", card, self.num_bombs);
            } else {
                debug!("Misplayed {} ({} bombs left)", card, self.num_bombs);
            }
            Ok(PlayOutcome::Misplayed)
        }
    }

    /// Spend a clue token.
    ///
    /// Fails with `ExhaustedClues` if none are left.
    pub fn give_clue(&mut self) -> Result<(), RulesError> {
        if self.num_clues == 0 {
            return Err(RulesError::ExhaustedClues);
        }
        self.num_clues -= 1;

        debug!("Gave clue ({} left)", self.num_clues);
        Ok(())
    }

    fn check_color(&self, color: Color) -> Result<(), RulesError> {
        if self.zones.contains_key(&color) {
            Ok(())
        } else {
            Err(RulesError::InvalidColor { color })
        }
    }

    fn record_discard(&mut self, card: Card) {
        *self.discards.entry(card).or_insert(0) += 1;
    }

    fn refund_clue(&mut self) {
        self.num_clues = (self.num_clues + 1).min(self.max_clues);
    }

    // === Queries ===

    /// Stack height for a color, `None` if the color is not on the board.
    #[must_use]
    pub fn zone(&self, color: Color) -> Option<Rank> {
        self.zones.get(&color).copied()
    }

    #[must_use]
    pub fn zones(&self) -> &ImHashMap<Color, Rank> {
        &self.zones
    }

    #[must_use]
    pub fn discards(&self) -> &ImHashMap<Card, u32> {
        &self.discards
    }

    #[must_use]
    pub fn discard_count(&self, card: Card) -> u32 {
        self.discards.get(&card).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn num_clues(&self) -> u32 {
        self.num_clues
    }

    #[must_use]
    pub fn max_clues(&self) -> u32 {
        self.max_clues
    }

    #[must_use]
    pub fn num_bombs(&self) -> i32 {
        self.num_bombs
    }

    /// Sum of all stack heights.
    #[must_use]
    pub fn score(&self) -> u32 {
        self.zones.values().map(|&rank| u32::from(rank)).sum()
    }

    /// Every stack is complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.zones.values().all(|&rank| rank == MAX_RANK)
    }

    /// The mistake budget is used up.
    #[must_use]
    pub fn bombs_exhausted(&self) -> bool {
        self.num_bombs <= 0
    }
}
