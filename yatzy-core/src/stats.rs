//! Player identity and match-wide bookkeeping.

use crate::decision::MoveResult;
use crate::error::GameError;
use crate::sheet::ScoreSheet;
use rustc_hash::FxHashMap;
use std::fmt;

/// One of the two seats in a match.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerId {
    One,
    Two,
}

impl PlayerId {
    /// Both seats, in turn order.
    pub const BOTH: [PlayerId; 2] = [PlayerId::One, PlayerId::Two];

    pub fn index(self) -> usize {
        match self {
            PlayerId::One => 0,
            PlayerId::Two => 1,
        }
    }

    pub fn opponent(self) -> PlayerId {
        match self {
            PlayerId::One => PlayerId::Two,
            PlayerId::Two => PlayerId::One,
        }
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerId::One => f.write_str("player 1"),
            PlayerId::Two => f.write_str("player 2"),
        }
    }
}

/// Both players' score sheets for one match.
///
/// Owned exclusively by the match driver; mutated only by recording one
/// [`MoveResult`] at a time.
#[derive(Debug, Clone, Default)]
pub struct MatchStats {
    sheets: [ScoreSheet; 2],
}

impl MatchStats {
    /// Two fresh sheets, every combination unused.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn sheet(&self, player: PlayerId) -> &ScoreSheet {
        &self.sheets[player.index()]
    }

    /// True while either sheet has an unused combination. Sheets stay in
    /// lockstep (one commit per half-round), so one seat is representative.
    pub fn has_combinations_remaining(&self) -> bool {
        !self.sheets[PlayerId::One.index()].is_complete()
    }

    /// Record a completed turn on the owning player's sheet.
    pub fn record(&mut self, result: &MoveResult) -> Result<(), GameError> {
        self.sheets[result.player.index()].record(result.combination, result.score)
    }

    /// Final total per player, bonus included.
    pub fn final_scores(&self) -> FxHashMap<PlayerId, u32> {
        PlayerId::BOTH
            .iter()
            .map(|&p| (p, self.sheet(p).final_score()))
            .collect()
    }
}
