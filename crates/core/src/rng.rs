//! RNG module - seedable uniform piece selection
//!
//! A small LCG keeps games reproducible from a seed: the same seed always yields
//! the same sequence of shapes, which the tests and the session log rely on.

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Uniform index in `[0, len)`.
    ///
    /// Uses the high bits: the low bits of a power-of-two LCG have short periods.
    pub fn pick(&mut self, len: usize) -> usize {
        debug_assert!(len > 0);
        let hi = (self.next_u32() >> 16) as usize;
        hi % len
    }
}
