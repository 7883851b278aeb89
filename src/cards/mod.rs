//! Card values and colors.
//!
//! Cards carry no identity: the deck and board count copies of each
//! `(color, rank)` value rather than tracking individual cards.

pub mod card;
pub mod color;

pub use card::{Card, Rank, MAX_RANK};
pub use color::Color;
