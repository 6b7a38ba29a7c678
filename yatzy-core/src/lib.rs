//! yatzy-core: game rules, scoring, score sheets, and the two-player turn engine.
//!
//! The engine is fully synchronous and single-threaded: it asks a [`Player`]
//! for a decision, blocks until one is returned, and either rerolls the
//! unfixed dice or resolves the turn into a [`MoveResult`]. Randomness is
//! injected through [`DiceSource`].

pub mod combination;
pub mod config;
pub mod decision;
pub mod dice;
pub mod engine;
pub mod error;
pub mod layout;
pub mod sheet;
pub mod stats;

pub use combination::{Combination, Section, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
pub use config::{ConfigError, MatchConfig};
pub use decision::{Decision, MoveResult};
pub use dice::{DiceSource, SeededDice};
pub use engine::{Game, Player, PlayerError, TurnView, ROLLS_PER_TURN};
pub use error::{GameError, LayoutError};
pub use layout::{DiceLayout, DICE_PER_TURN};
pub use sheet::ScoreSheet;
pub use stats::{MatchStats, PlayerId};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod engine_tests;
