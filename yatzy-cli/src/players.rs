//! Built-in demo players.
//!
//! Strategy quality is not a goal here; these exist so the CLI can drive full
//! matches through the engine's player seam.

use yatzy_core::{Decision, DiceLayout, Player, PlayerError, TurnView};

/// Commits on the first roll to the first available combination.
pub struct FirstAvailablePlayer;

impl Player for FirstAvailablePlayer {
    fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
        let first = turn
            .available
            .first()
            .copied()
            .ok_or("no combinations left to commit")?;
        Ok(Decision::commit(first))
    }
}

/// Commit early when the best available rule already pays this much.
const COMMIT_EARLY_AT: u32 = 22;

/// Keeps every die of the most frequent face, commits to the highest-paying
/// available combination on the final roll or when it already pays well.
pub struct GreedyPlayer;

impl Player for GreedyPlayer {
    fn decide(&mut self, turn: &TurnView<'_>) -> Result<Decision, PlayerError> {
        let best = turn
            .available
            .iter()
            .copied()
            .max_by_key(|c| c.score(turn.rolled))
            .ok_or("no combinations left to commit")?;
        if turn.rolls_left == 0 || best.score(turn.rolled) >= COMMIT_EARLY_AT {
            return Ok(Decision::commit(best));
        }

        // Extend the fixed set with every not-yet-fixed die of the most
        // common face; ties break toward the higher face.
        let (target, _) = turn
            .rolled
            .counts()
            .max_by_key(|&(face, count)| (count, face))
            .ok_or("empty roll")?;
        let extra = turn
            .rolled
            .count_of(target)
            .saturating_sub(turn.fixed.count_of(target));
        let kept = turn
            .fixed
            .merged(&DiceLayout::from_faces(vec![target; extra as usize])?)?;
        Ok(Decision::fix_and_reroll(kept))
    }
}
