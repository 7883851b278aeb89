//! Card colors.

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// A suit of cards, one played stack per color on the board.
///
/// `Rainbow` is reserved for extended rule sets and is not part of the
/// standard deck.
#[derive(
    Clone, Copy, Debug, Display, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Color {
    #[display(fmt = "RED")]
    Red,
    #[display(fmt = "GREEN")]
    Green,
    #[display(fmt = "BLUE")]
    Blue,
    #[display(fmt = "YELLOW")]
    Yellow,
    #[display(fmt = "WHITE")]
    White,
    #[display(fmt = "RAINBOW")]
    Rainbow,
}

impl Color {
    /// Every color, including `Rainbow`.
    pub const ALL: [Color; 6] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
        Color::Rainbow,
    ];

    /// The five colors of the standard deck.
    pub const STANDARD: [Color; 5] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::White,
    ];
}
