//! # firebreak
//!
//! Rules engine for a cooperative Hanabi-style card game.
//!
//! ## Design Principles
//!
//! 1. **Values, not entities**: a `Card` is a `(color, rank)` value. Copies
//!    are counted, never tracked individually.
//!
//! 2. **Decoupled primitives**: `Deck` and `Board` know nothing about each
//!    other, about players, or about turns. A driver composes them.
//!
//! 3. **Deterministic**: shuffling takes an explicit seed via `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, errors
//! - `cards`: Card values and colors
//! - `game`: Deck and Board
//!
//! ## Example
//!
//! ```
//! use firebreak::{Board, Deck, PlayOutcome, RulesConfig};
//!
//! let config = RulesConfig::default();
//! let mut deck = Deck::from_config(&config, 42);
//! let mut board = Board::for_deck(&deck, config.max_clues, config.bombs);
//!
//! let card = deck.draw_card()?;
//! match board.play_card(card)? {
//!     PlayOutcome::Played { .. } => assert_eq!(board.score(), 1),
//!     PlayOutcome::Misplayed => assert_eq!(board.num_bombs(), 2),
//! }
//! # Ok::<(), firebreak::RulesError>(())
//! ```

pub mod cards;
pub mod core;
pub mod game;

// Re-export commonly used types
pub use crate::core::{Composition, GameRng, RulesConfig, RulesError, DEFAULT_BOMBS, DEFAULT_MAX_CLUES};

pub use crate::cards::{Card, Color, Rank, MAX_RANK};

pub use crate::game::{Board, Deck, PlayOutcome};
