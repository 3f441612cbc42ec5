//! RNG module - seeded shuffling for board generation
//!
//! A small 64-bit LCG that exposes the high 32 bits of its state. The low bits
//! of a power-of-two LCG have short periods, so they are never handed out.
//!
//! [`SimpleRng::next_range`] uses rejection sampling, so every value in
//! `[0, max)` is equally likely, and [`SimpleRng::shuffle`] is a plain
//! Fisher-Yates. Together they give an unbiased permutation of the board.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses Knuth's MMIX constants
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        let mut rng = Self {
            state: (seed as u64).wrapping_add(Self::INCREMENT),
        };
        // Mix the seed in so nearby seeds do not start on nearby outputs.
        rng.step();
        rng.step();
        rng
    }

    fn step(&mut self) {
        self.state = self
            .state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT);
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.step();
        (self.state >> 32) as u32
    }

    /// Generate random value in range [0, max)
    ///
    /// Returns 0 when `max` is 0.
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max <= 1 {
            return 0;
        }
        // 2^32 mod max: the size of the incomplete bucket at the bottom.
        let threshold = max.wrapping_neg() % max;
        loop {
            let v = self.next_u32();
            if v >= threshold {
                return v % max;
            }
        }
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
