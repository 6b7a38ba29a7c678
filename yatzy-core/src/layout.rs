//! Immutable multiset of dice faces.

use crate::error::LayoutError;
use std::fmt;

/// Dice held during one turn.
pub const DICE_PER_TURN: usize = 5;

/// An immutable multiset of die faces (1..=6), at most [`DICE_PER_TURN`] dice.
///
/// Stored as per-face counts; iteration is always ascending by face.
/// Transformations produce a new layout, never mutate in place.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DiceLayout {
    /// counts[f - 1] = number of dice showing face f.
    counts: [u8; 6],
}

impl DiceLayout {
    /// The zero-dice layout.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Group a sequence of faces into a layout.
    ///
    /// Fails if any face is outside 1..=6 or the total exceeds five dice.
    pub fn from_faces(faces: impl IntoIterator<Item = u8>) -> Result<Self, LayoutError> {
        let mut counts = [0u8; 6];
        let mut total = 0usize;
        for face in faces {
            if !(1..=6).contains(&face) {
                return Err(LayoutError::InvalidFace { face });
            }
            total += 1;
            if total > DICE_PER_TURN {
                return Err(LayoutError::TooManyDice { count: total });
            }
            counts[(face - 1) as usize] += 1;
        }
        Ok(Self { counts })
    }

    /// `(face, count)` pairs with count > 0, ascending by face.
    pub fn counts(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.counts
            .iter()
            .enumerate()
            .filter(|(_, &c)| c > 0)
            .map(|(i, &c)| ((i + 1) as u8, c))
    }

    /// Count of dice showing `face`; 0 when absent or out of range.
    pub fn count_of(&self, face: u8) -> u8 {
        if (1..=6).contains(&face) {
            self.counts[(face - 1) as usize]
        } else {
            0
        }
    }

    /// Ascending flat sequence of faces, one entry per die.
    pub fn sorted_faces(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.size());
        for (face, count) in self.counts() {
            for _ in 0..count {
                out.push(face);
            }
        }
        out
    }

    /// Total dice held.
    pub fn size(&self) -> usize {
        self.counts.iter().map(|&c| c as usize).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.iter().all(|&c| c == 0)
    }

    /// Sum of all faces.
    pub fn sum(&self) -> u32 {
        self.counts()
            .map(|(face, count)| face as u32 * count as u32)
            .sum()
    }

    /// Multiset union with `other`, subject to the five-dice cap.
    pub fn merged(&self, other: &DiceLayout) -> Result<DiceLayout, LayoutError> {
        let total = self.size() + other.size();
        if total > DICE_PER_TURN {
            return Err(LayoutError::TooManyDice { count: total });
        }
        let mut counts = self.counts;
        for (i, c) in counts.iter_mut().enumerate() {
            *c += other.counts[i];
        }
        Ok(DiceLayout { counts })
    }

    /// True if this layout holds at least `other`'s count for every face.
    pub fn contains(&self, other: &DiceLayout) -> bool {
        self.counts
            .iter()
            .zip(other.counts.iter())
            .all(|(mine, theirs)| mine >= theirs)
    }
}

impl fmt::Display for DiceLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[")?;
        for (i, face) in self.sorted_faces().into_iter().enumerate() {
            if i > 0 {
                write!(f, " ")?;
            }
            write!(f, "{face}")?;
        }
        write!(f, "]")
    }
}
