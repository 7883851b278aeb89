//! Game primitives: the draw pile and the shared board.
//!
//! `Deck` and `Board` are independent. A turn driver owns both, draws from
//! the deck, and feeds cards into the board; the board never checks where a
//! card came from.

pub mod board;
pub mod deck;

pub use board::{Board, PlayOutcome};
pub use deck::Deck;
