//! RNG module - seeded 7-bag spawn source
//!
//! Kinds are dealt from a shuffled bag holding one of each of the seven
//! kinds; when the bag runs out a fresh one is shuffled. A seed fully
//! determines the sequence, which keeps sessions reproducible.

use crate::types::PieceKind;

/// Linear congruential generator (Numerical Recipes constants).
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// A zero seed is bumped to 1.
    pub fn new(seed: u32) -> Self {
        Self {
            state: seed.max(1),
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Uniform-ish value in `[0, bound)`. `bound` must be non-zero.
    pub fn below(&mut self, bound: u32) -> u32 {
        // High bits of an LCG are better distributed than low ones.
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Fisher-Yates shuffle
    pub fn shuffle<T>(&mut self, items: &mut [T]) {
        for i in (1..items.len()).rev() {
            let j = self.below(i as u32 + 1) as usize;
            items.swap(i, j);
        }
    }
}

/// Bag of the seven kinds, dealt in shuffled order.
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: [PieceKind; 7],
    dealt: usize,
    rng: SimpleRng,
}

impl PieceBag {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        Self {
            bag: Self::shuffled(&mut rng),
            dealt: 0,
            rng,
        }
    }

    fn shuffled(rng: &mut SimpleRng) -> [PieceKind; 7] {
        let mut bag = PieceKind::ALL;
        rng.shuffle(&mut bag);
        bag
    }

    /// Next kind without consuming it.
    ///
    /// When the current bag is spent this previews the first kind of the next
    /// one using a copy of the generator, so it always agrees with `draw`.
    pub fn peek(&self) -> PieceKind {
        if self.dealt < self.bag.len() {
            return self.bag[self.dealt];
        }
        let mut preview = self.rng.clone();
        Self::shuffled(&mut preview)[0]
    }

    pub fn draw(&mut self) -> PieceKind {
        if self.dealt == self.bag.len() {
            self.bag = Self::shuffled(&mut self.rng);
            self.dealt = 0;
        }
        let kind = self.bag[self.dealt];
        self.dealt += 1;
        kind
    }

    /// Kinds left in the current bag.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.dealt..]
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
