//! Error taxonomy for the engine.
//!
//! Everything here is fatal by design: layout and protocol violations signal
//! a broken collaborator contract, not a transient game condition, so nothing
//! is retried or silently clamped.

use crate::combination::Combination;
use crate::stats::PlayerId;
use thiserror::Error;

/// Error type surfaced by a [`crate::engine::Player`] implementation.
pub type PlayerError = Box<dyn std::error::Error + Send + Sync>;

/// A dice layout was constructed outside its invariants.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LayoutError {
    #[error("die face {face} out of range 1..=6")]
    InvalidFace { face: u8 },
    #[error("layout holds {count} dice, maximum is 5")]
    TooManyDice { count: usize },
}

/// Match-level failures.
#[derive(Debug, Error)]
pub enum GameError {
    #[error(transparent)]
    Layout(#[from] LayoutError),
    #[error("combination {combination} already recorded")]
    AlreadyUsed { combination: Combination },
    #[error("protocol violation: {msg}")]
    Protocol { msg: String },
    #[error("{player} failed in round {round}: {source}")]
    Player {
        player: PlayerId,
        round: u8,
        source: PlayerError,
    },
}

impl GameError {
    pub(crate) fn protocol(msg: impl Into<String>) -> Self {
        GameError::Protocol { msg: msg.into() }
    }
}
