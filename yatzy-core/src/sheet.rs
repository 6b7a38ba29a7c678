//! Per-player score sheet.

use crate::combination::{Combination, Section, UPPER_BONUS, UPPER_BONUS_THRESHOLD};
use crate::error::GameError;

/// One player's sheet: each combination either unused or recorded once.
///
/// A combination, once scored, can never be re-scored; the sheet lives for
/// the whole match and is never deleted from.
#[derive(Debug, Clone, Default)]
pub struct ScoreSheet {
    /// Slot order follows [`Combination::ALL`].
    slots: [Option<u32>; Combination::COUNT],
}

impl ScoreSheet {
    /// A sheet with all combinations unused.
    pub fn new() -> Self {
        Self::default()
    }

    /// Combinations still unused, in sheet order.
    pub fn available_combinations(&self) -> Vec<Combination> {
        Combination::ALL
            .iter()
            .copied()
            .filter(|c| self.slots[c.index()].is_none())
            .collect()
    }

    /// Score recorded for a combination, if any.
    pub fn score_of(&self, combination: Combination) -> Option<u32> {
        self.slots[combination.index()]
    }

    /// Record a score; re-recording a combination is fatal.
    pub fn record(&mut self, combination: Combination, score: u32) -> Result<(), GameError> {
        let slot = &mut self.slots[combination.index()];
        if slot.is_some() {
            return Err(GameError::AlreadyUsed { combination });
        }
        *slot = Some(score);
        Ok(())
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(|s| s.is_some())
    }

    /// Sum of the six single-number scores; unused slots count as 0.
    pub fn upper_section_total(&self) -> u32 {
        self.section_total(Section::Upper)
    }

    /// Sum of the remaining nine scores.
    pub fn lower_section_total(&self) -> u32 {
        self.section_total(Section::Lower)
    }

    pub fn bonus_earned(&self) -> bool {
        self.upper_section_total() >= UPPER_BONUS_THRESHOLD
    }

    pub fn final_score(&self) -> u32 {
        let bonus = if self.bonus_earned() { UPPER_BONUS } else { 0 };
        self.upper_section_total() + self.lower_section_total() + bonus
    }

    fn section_total(&self, section: Section) -> u32 {
        Combination::ALL
            .iter()
            .filter(|c| c.section() == section)
            .filter_map(|c| self.slots[c.index()])
            .sum()
    }
}
