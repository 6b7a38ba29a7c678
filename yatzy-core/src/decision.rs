//! What a player chose to do this attempt, and what a completed turn yielded.

use crate::combination::Combination;
use crate::error::GameError;
use crate::layout::DiceLayout;
use crate::stats::PlayerId;

/// A player's choice for one attempt: keep dice and reroll the rest, or
/// commit the current dice to a combination.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Decision {
    /// Keep this layout fixed and reroll the remaining dice.
    FixAndReroll(DiceLayout),
    /// Score the current dice against this combination, ending the turn.
    Commit(Combination),
}

impl Decision {
    pub fn fix_and_reroll(kept: DiceLayout) -> Self {
        Decision::FixAndReroll(kept)
    }

    pub fn commit(combination: Combination) -> Self {
        Decision::Commit(combination)
    }

    pub fn is_commit(&self) -> bool {
        matches!(self, Decision::Commit(_))
    }

    /// The committed combination.
    ///
    /// # Panics
    /// Panics on a fix-and-reroll decision; querying the wrong variant is an
    /// engine/player contract bug, never a recoverable condition.
    pub fn combination(&self) -> Combination {
        match self {
            Decision::Commit(combination) => *combination,
            Decision::FixAndReroll(_) => panic!("queried combination of a fix-and-reroll decision"),
        }
    }

    /// The layout the player wants to keep.
    ///
    /// # Panics
    /// Panics on a commit decision, for the same reason as
    /// [`Decision::combination`].
    pub fn fixed(&self) -> &DiceLayout {
        match self {
            Decision::FixAndReroll(kept) => kept,
            Decision::Commit(_) => panic!("queried fixed layout of a commit decision"),
        }
    }
}

/// Immutable record of a completed turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveResult {
    pub player: PlayerId,
    pub combination: Combination,
    pub score: u32,
}

impl MoveResult {
    /// Resolve a commit decision against the dice in play at commit time.
    pub fn from_commit(
        player: PlayerId,
        decision: &Decision,
        dice: &DiceLayout,
    ) -> Result<Self, GameError> {
        match decision {
            Decision::Commit(combination) => Ok(MoveResult {
                player,
                combination: *combination,
                score: combination.score(dice),
            }),
            Decision::FixAndReroll(_) => Err(GameError::protocol(format!(
                "{player} turn resolved from a non-commit decision"
            ))),
        }
    }
}
