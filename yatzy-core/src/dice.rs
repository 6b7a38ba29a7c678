//! Injected randomness: the engine never owns a concrete RNG type.

use crate::error::LayoutError;
use crate::layout::DiceLayout;
use rand::Rng;
use rand_chacha::ChaCha8Rng;
use rand_core::SeedableRng;

/// Uniform, independent die draws in 1..=6.
pub trait DiceSource {
    fn next_face(&mut self) -> u8;

    /// Roll `n` fresh dice into a layout.
    ///
    /// Fails only if the source breaks its range contract or `n` exceeds the
    /// five-dice cap.
    fn roll(&mut self, n: usize) -> Result<DiceLayout, LayoutError> {
        let faces: Vec<u8> = (0..n).map(|_| self.next_face()).collect();
        DiceLayout::from_faces(faces)
    }
}

/// Seeded pseudorandom dice stream backed by a small PRNG.
#[derive(Debug, Clone)]
pub struct SeededDice {
    rng: ChaCha8Rng,
}

impl SeededDice {
    pub fn seed_from(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl DiceSource for SeededDice {
    fn next_face(&mut self) -> u8 {
        self.rng.gen_range(1..=6)
    }
}
