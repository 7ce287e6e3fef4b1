//! RNG module - injectable randomness for spawning
//!
//! The engine only ever asks for a uniform index below some bound, so the
//! capability is a single-method trait. [`SimpleRng`] is a seeded LCG used in
//! production and benches; [`SequenceRng`] replays a fixed script in tests.

/// Source of uniform random indices.
pub trait RandomSource {
    /// Return a value in `[0, bound)`. `bound` is always at least 1.
    fn next_index(&mut self, bound: usize) -> usize;
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_index(&mut self, bound: usize) -> usize {
        (**self).next_index(bound)
    }
}

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
    pub fn next_range(&mut self, max: u32) -> u32 {
        // High bits of an LCG are far better distributed than the low bits.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Current RNG state
    pub fn seed(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl RandomSource for SimpleRng {
    fn next_index(&mut self, bound: usize) -> usize {
        self.next_range(bound.max(1) as u32) as usize
    }
}

/// Replays a fixed list of values, cycling when exhausted.
///
/// Each value is reduced modulo the requested bound. Spawning draws the kana
/// index first and the horizontal slot second.
///
/// ```
/// use kana_drop_core::rng::{RandomSource, SequenceRng};
///
/// let mut rng = SequenceRng::new(vec![3, 7]);
/// assert_eq!(rng.next_index(10), 3);
/// assert_eq!(rng.next_index(5), 2);
/// assert_eq!(rng.next_index(10), 3);
/// ```
#[derive(Debug, Clone)]
pub struct SequenceRng {
    values: Vec<usize>,
    pos: usize,
}

impl SequenceRng {
    pub fn new(values: Vec<usize>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for SequenceRng {
    fn next_index(&mut self, bound: usize) -> usize {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v % bound.max(1)
    }
}
