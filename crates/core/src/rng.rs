//! RNG module - piece selection
//!
//! New pieces are drawn uniformly from the seven kinds, each draw independent
//! of the previous ones (no bag). A seeded LCG keeps sessions reproducible; a
//! scripted sequence is available for tests and demos.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle
    /// with very short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Source of the kinds handed to new pieces.
#[derive(Debug, Clone)]
pub enum PieceGenerator {
    /// Independent uniform draws over all seven kinds.
    Uniform(SimpleRng),
    /// Cycles through a fixed list of kinds.
    Sequence { kinds: Vec<PieceKind>, next: usize },
}

impl PieceGenerator {
    pub fn uniform(seed: u32) -> Self {
        PieceGenerator::Uniform(SimpleRng::new(seed))
    }

    /// Scripted generator. An empty list falls back to `O` pieces.
    pub fn sequence(kinds: impl Into<Vec<PieceKind>>) -> Self {
        let mut kinds = kinds.into();
        if kinds.is_empty() {
            kinds.push(PieceKind::O);
        }
        PieceGenerator::Sequence { kinds, next: 0 }
    }

    /// Draw the kind for the next spawned piece
    pub fn next_kind(&mut self) -> PieceKind {
        match self {
            PieceGenerator::Uniform(rng) => {
                PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
            }
            PieceGenerator::Sequence { kinds, next } => {
                let kind = kinds[*next % kinds.len()];
                *next = (*next + 1) % kinds.len();
                kind
            }
        }
    }
}

impl Default for PieceGenerator {
    fn default() -> Self {
        Self::uniform(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_zero_seed_is_usable() {
        let mut rng = SimpleRng::new(0);
        assert_eq!(rng.state(), 1);
        assert_ne!(rng.next_u32(), 0);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_generator_produces_every_kind() {
        let mut generator = PieceGenerator::uniform(2024);
        let mut seen = [false; 7];
        for _ in 0..500 {
            let kind = generator.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            seen[idx] = true;
        }
        assert!(seen.iter().all(|&s| s), "every kind should appear: {:?}", seen);
    }

    #[test]
    fn test_sequence_generator_cycles() {
        let mut generator = PieceGenerator::sequence([PieceKind::I, PieceKind::T]);
        assert_eq!(generator.next_kind(), PieceKind::I);
        assert_eq!(generator.next_kind(), PieceKind::T);
        assert_eq!(generator.next_kind(), PieceKind::I);
    }

    #[test]
    fn test_empty_sequence_falls_back() {
        let mut generator = PieceGenerator::sequence(Vec::<PieceKind>::new());
        assert_eq!(generator.next_kind(), PieceKind::O);
    }
}
