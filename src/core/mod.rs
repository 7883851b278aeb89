//! Core engine types: RNG, configuration, errors.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{Composition, RulesConfig, DEFAULT_BOMBS, DEFAULT_MAX_CLUES};
pub use error::RulesError;
pub use rng::GameRng;
