//! Turn and match driver.
//!
//! This module is the single place that enforces the turn protocol: the
//! three-roll budget, the monotonic-fixing invariant, and commit legality.

use crate::combination::Combination;
use crate::decision::{Decision, MoveResult};
use crate::dice::DiceSource;
use crate::error::GameError;
use crate::layout::{DiceLayout, DICE_PER_TURN};
use crate::stats::{MatchStats, PlayerId};

pub use crate::error::PlayerError;

/// Rolls available in one turn.
pub const ROLLS_PER_TURN: u8 = 3;

/// Everything a player sees when asked for a decision.
#[derive(Debug)]
pub struct TurnView<'a> {
    /// The complete current five-dice layout (fixed dice included).
    pub rolled: &'a DiceLayout,
    /// Dice the player has fixed so far this turn.
    pub fixed: &'a DiceLayout,
    /// Combinations still open on this player's sheet, in sheet order.
    pub available: &'a [Combination],
    /// Rolls remaining after this one; 0 on the final attempt.
    pub rolls_left: u8,
}

/// A decision-making collaborator. Failures are wrapped with turn context and
/// surfaced as [`GameError::Player`]; the engine never retries.
pub trait Player {
    fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError>;
}

/// Orchestrates a two-player match over an injected dice source.
///
/// The engine owns the [`MatchStats`] for the match's duration; players are
/// borrowed per call and consulted strictly in turn order.
pub struct Game<D: DiceSource> {
    dice: D,
    stats: MatchStats,
}

impl<D: DiceSource> Game<D> {
    pub fn new(dice: D) -> Self {
        Self {
            dice,
            stats: MatchStats::new(),
        }
    }

    pub fn stats(&self) -> &MatchStats {
        &self.stats
    }

    pub fn into_stats(self) -> MatchStats {
        self.stats
    }

    /// Record a resolved turn on the owning player's sheet.
    pub fn record(&mut self, result: &MoveResult) -> Result<(), GameError> {
        self.stats.record(result)
    }

    /// Play one half-round for `id`.
    ///
    /// Loops for up to [`ROLLS_PER_TURN`] attempts: roll the unfixed dice,
    /// ask the player, then either resolve a commit against the full current
    /// layout or validate and adopt the new fixed set. Running out of
    /// attempts without a commit is a protocol violation, the player must
    /// commit on the last roll.
    pub fn play_turn(
        &mut self,
        id: PlayerId,
        player: &mut dyn Player,
    ) -> Result<MoveResult, GameError> {
        let available = self.stats.sheet(id).available_combinations();
        let round = (Combination::COUNT - available.len() + 1) as u8;

        let mut fixed = DiceLayout::empty();
        let mut attempts = ROLLS_PER_TURN;
        while attempts > 0 {
            let fresh = self.dice.roll(DICE_PER_TURN - fixed.size())?;
            let rolled = fixed.merged(&fresh)?;
            let view = TurnView {
                rolled: &rolled,
                fixed: &fixed,
                available: &available,
                rolls_left: attempts - 1,
            };
            let decision = player
                .decide(&view)
                .map_err(|source| GameError::Player { player: id, round, source })?;

            match &decision {
                Decision::Commit(combination) => {
                    if !available.contains(combination) {
                        return Err(GameError::protocol(format!(
                            "{id} committed to unavailable combination {combination}"
                        )));
                    }
                    return MoveResult::from_commit(id, &decision, &rolled);
                }
                Decision::FixAndReroll(kept) => {
                    if !kept.contains(&fixed) {
                        return Err(GameError::protocol(format!(
                            "{id} released previously fixed dice: kept {kept}, was {fixed}"
                        )));
                    }
                    if !rolled.contains(kept) {
                        return Err(GameError::protocol(format!(
                            "{id} fixed dice not in play: kept {kept}, rolled {rolled}"
                        )));
                    }
                    fixed = *kept;
                    attempts -= 1;
                }
            }
        }

        Err(GameError::protocol(format!(
            "{id} exhausted all rolls in round {round} without committing"
        )))
    }

    /// Drive a match to completion: alternate half-rounds while combinations
    /// remain, recording every resolved turn.
    pub fn play_match(
        &mut self,
        one: &mut dyn Player,
        two: &mut dyn Player,
    ) -> Result<(), GameError> {
        while self.stats.has_combinations_remaining() {
            let result = self.play_turn(PlayerId::One, one)?;
            self.stats.record(&result)?;
            let result = self.play_turn(PlayerId::Two, two)?;
            self.stats.record(&result)?;
        }
        Ok(())
    }
}
