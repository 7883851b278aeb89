//! Game configuration types.
//!
//! Callers configure a game at startup by providing:
//! - `Composition`: how many copies of each rank every color gets
//! - `RulesConfig`: colors, composition, and the clue/bomb limits
//!
//! `RulesConfig::default()` is the standard game: five colors, ranks
//! `{1:3, 2:2, 3:2, 4:2, 5:1}`, eight clues and three bombs.

use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

use crate::cards::{Color, Rank, MAX_RANK};
use crate::core::RulesError;

/// Default number of clue tokens.
pub const DEFAULT_MAX_CLUES: u32 = 8;

/// Default mistake budget.
pub const DEFAULT_BOMBS: i32 = 3;

/// Rank to copy-count table, applied to every color in the deck.
///
/// Ordered so that deck construction visits ranks in a stable order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "BTreeMap<Rank, u32>")]
pub struct Composition(BTreeMap<Rank, u32>);

impl TryFrom<BTreeMap<Rank, u32>> for Composition {
    type Error = RulesError;

    fn try_from(table: BTreeMap<Rank, u32>) -> Result<Self, Self::Error> {
        match table.keys().find(|rank| !(1..=MAX_RANK).contains(*rank)) {
            Some(&rank) => Err(RulesError::InvalidRank { rank }),
            None => Ok(Self(table)),
        }
    }
}

impl Composition {
    /// An empty composition.
    #[must_use]
    pub fn empty() -> Self {
        Self(BTreeMap::new())
    }

    /// The standard table: three 1s, two each of 2-4, one 5.
    #[must_use]
    pub fn standard() -> Self {
        Self::empty()
            .with_rank(1, 3)
            .with_rank(2, 2)
            .with_rank(3, 2)
            .with_rank(4, 2)
            .with_rank(5, 1)
    }

    /// `copies` of every rank from 1 to `MAX_RANK`.
    #[must_use]
    pub fn uniform(copies: u32) -> Self {
        (1..=MAX_RANK).fold(Self::empty(), |c, rank| c.with_rank(rank, copies))
    }

    /// Set the copy count for a rank.
    ///
    /// Panics if `rank` is outside `1..=MAX_RANK`.
    #[must_use]
    pub fn with_rank(mut self, rank: Rank, copies: u32) -> Self {
        assert!(
            (1..=MAX_RANK).contains(&rank),
            "Composition rank must be in 1..={}, got {}",
            MAX_RANK,
            rank
        );
        self.0.insert(rank, copies);
        self
    }

    /// Copy count for a rank, 0 if absent.
    #[must_use]
    pub fn copies(&self, rank: Rank) -> u32 {
        self.0.get(&rank).copied().unwrap_or(0)
    }

    /// Cards per color.
    #[must_use]
    pub fn total_per_color(&self) -> u32 {
        self.0.values().sum()
    }

    /// Iterate `(rank, copies)` in ascending rank order.
    pub fn iter(&self) -> impl Iterator<Item = (Rank, u32)> + '_ {
        self.0.iter().map(|(&rank, &copies)| (rank, copies))
    }
}

impl Default for Composition {
    fn default() -> Self {
        Self::standard()
    }
}

/// Complete rules configuration for one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RulesConfig {
    /// Colors in play.
    pub colors: BTreeSet<Color>,

    /// Copies per rank, per color.
    pub composition: Composition,

    /// Clue tokens available, and the cap discards refill up to.
    pub max_clues: u32,

    /// Misplays the team can absorb.
    pub bombs: i32,
}

impl Default for RulesConfig {
    fn default() -> Self {
        Self {
            colors: Color::STANDARD.into_iter().collect(),
            composition: Composition::standard(),
            max_clues: DEFAULT_MAX_CLUES,
            bombs: DEFAULT_BOMBS,
        }
    }
}

impl RulesConfig {
    /// Replace the color set.
    ///
    /// Panics if `colors` is empty.
    #[must_use]
    pub fn with_colors(mut self, colors: impl IntoIterator<Item = Color>) -> Self {
        self.colors = colors.into_iter().collect();
        assert!(!self.colors.is_empty(), "Must have at least 1 color");
        self
    }

    /// Add the rainbow color for extended rule sets.
    #[must_use]
    pub fn with_rainbow(mut self) -> Self {
        self.colors.insert(Color::Rainbow);
        self
    }

    #[must_use]
    pub fn with_composition(mut self, composition: Composition) -> Self {
        self.composition = composition;
        self
    }

    #[must_use]
    pub fn with_max_clues(mut self, max_clues: u32) -> Self {
        self.max_clues = max_clues;
        self
    }

    #[must_use]
    pub fn with_bombs(mut self, bombs: i32) -> Self {
        self.bombs = bombs;
        self
    }

    /// Total number of cards a deck built from this config holds.
    #[must_use]
    pub fn deck_size(&self) -> u32 {
        self.colors.len() as u32 * self.composition.total_per_color()
    }
}
