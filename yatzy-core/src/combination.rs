//! The fixed set of scoring combinations (Scandinavian ruleset, 15 rules).
//!
//! Every rule is a pure function of a [`DiceLayout`]; identity is the rule
//! itself, never a computed value. The registry [`Combination::ALL`] is the
//! process-wide rule table, in score-sheet order.

use crate::layout::DiceLayout;
use std::fmt;

/// Upper-section total needed to earn the bonus.
pub const UPPER_BONUS_THRESHOLD: u32 = 63;
/// Bonus awarded when the upper-section total reaches the threshold.
pub const UPPER_BONUS: u32 = 50;

const YATZY_SCORE: u32 = 50;

/// Score-sheet section a combination belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    /// The six single-number rules; feeds the bonus computation.
    Upper,
    /// Everything else.
    Lower,
}

/// A named, stateless scoring rule.
///
/// Declaration order is the canonical sheet order and fixes
/// [`Combination::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Combination {
    Ones,
    Twos,
    Threes,
    Fours,
    Fives,
    Sixes,
    OnePair,
    ThreeOfAKind,
    FourOfAKind,
    TwoPairs,
    SmallStraight,
    LargeStraight,
    FullHouse,
    Chance,
    Yatzy,
}

impl Combination {
    /// Number of combinations on a sheet.
    pub const COUNT: usize = 15;

    /// All combinations in sheet order.
    pub const ALL: [Combination; Self::COUNT] = [
        Combination::Ones,
        Combination::Twos,
        Combination::Threes,
        Combination::Fours,
        Combination::Fives,
        Combination::Sixes,
        Combination::OnePair,
        Combination::ThreeOfAKind,
        Combination::FourOfAKind,
        Combination::TwoPairs,
        Combination::SmallStraight,
        Combination::LargeStraight,
        Combination::FullHouse,
        Combination::Chance,
        Combination::Yatzy,
    ];

    /// Stable position in [`Combination::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn section(self) -> Section {
        match self {
            Combination::Ones
            | Combination::Twos
            | Combination::Threes
            | Combination::Fours
            | Combination::Fives
            | Combination::Sixes => Section::Upper,
            _ => Section::Lower,
        }
    }

    /// Score this rule would award for `dice`.
    ///
    /// Pure and side-effect free; pattern rules award 0 when the layout does
    /// not match exactly (no partial credit).
    pub fn score(self, dice: &DiceLayout) -> u32 {
        match self {
            Combination::Ones => number_score(dice, 1),
            Combination::Twos => number_score(dice, 2),
            Combination::Threes => number_score(dice, 3),
            Combination::Fours => number_score(dice, 4),
            Combination::Fives => number_score(dice, 5),
            Combination::Sixes => number_score(dice, 6),
            Combination::OnePair => n_of_a_kind_score(dice, 2),
            Combination::ThreeOfAKind => n_of_a_kind_score(dice, 3),
            Combination::FourOfAKind => n_of_a_kind_score(dice, 4),
            Combination::TwoPairs => two_pairs_score(dice),
            Combination::SmallStraight => straight_score(dice, 1),
            Combination::LargeStraight => straight_score(dice, 2),
            Combination::FullHouse => full_house_score(dice),
            Combination::Chance => dice.sum(),
            Combination::Yatzy => yatzy_score(dice),
        }
    }
}

impl fmt::Display for Combination {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Combination::Ones => "ones",
            Combination::Twos => "twos",
            Combination::Threes => "threes",
            Combination::Fours => "fours",
            Combination::Fives => "fives",
            Combination::Sixes => "sixes",
            Combination::OnePair => "one pair",
            Combination::ThreeOfAKind => "three of a kind",
            Combination::FourOfAKind => "four of a kind",
            Combination::TwoPairs => "two pairs",
            Combination::SmallStraight => "small straight",
            Combination::LargeStraight => "large straight",
            Combination::FullHouse => "full house",
            Combination::Chance => "chance",
            Combination::Yatzy => "yatzy",
        };
        f.write_str(name)
    }
}

fn number_score(dice: &DiceLayout, face: u8) -> u32 {
    dice.count_of(face) as u32 * face as u32
}

/// Highest face with count >= n scores face * n. Each rule only tests its own
/// threshold, so five of a kind still satisfies the pair rule.
fn n_of_a_kind_score(dice: &DiceLayout, n: u8) -> u32 {
    for face in (1..=6u8).rev() {
        if dice.count_of(face) >= n {
            return face as u32 * n as u32;
        }
    }
    0
}

/// The two highest distinct faces with count >= 2; a higher-multiplicity
/// group still qualifies as a pair for this scan.
fn two_pairs_score(dice: &DiceLayout) -> u32 {
    let mut score = 0u32;
    let mut pairs = 0u8;
    for face in (1..=6u8).rev() {
        if dice.count_of(face) >= 2 {
            score += 2 * face as u32;
            pairs += 1;
            if pairs == 2 {
                return score;
            }
        }
    }
    0
}

/// Exactly one face per slot from `lo` through `lo + 4`.
fn straight_score(dice: &DiceLayout, lo: u8) -> u32 {
    let exact = (lo..lo + 5).all(|face| dice.count_of(face) == 1);
    if exact {
        dice.sum()
    } else {
        0
    }
}

/// Exactly one group of three and one group of two; five of a kind does not
/// qualify. Scores the sum of all five faces.
fn full_house_score(dice: &DiceLayout) -> u32 {
    let has_three = (1..=6u8).any(|face| dice.count_of(face) == 3);
    let has_pair = (1..=6u8).any(|face| dice.count_of(face) == 2);
    if has_three && has_pair {
        dice.sum()
    } else {
        0
    }
}

fn yatzy_score(dice: &DiceLayout) -> u32 {
    let five = (1..=6u8).any(|face| dice.count_of(face) == 5);
    if five {
        YATZY_SCORE
    } else {
        0
    }
}
