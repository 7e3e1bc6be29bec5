//! RNG module - injectable random sources for the kernels
//!
//! Both kernels draw randomness (tile spawns, secret codes) through the
//! [`RandomSource`] trait instead of a process-global generator, so a caller can
//! seed a game or script it exactly in tests.
//!
//! Also provides a simple LCG for deterministic play and a scripted source that
//! replays fixed values.

/// A caller-supplied source of randomness
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// `max` must be non-zero.
    fn next_range(&mut self, max: u32) -> u32 {
        // Multiply-shift keeps the high bits; LCG low bits have short periods.
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Returns true with the given probability (in percent)
    fn chance_percent(&mut self, percent: u32) -> bool {
        self.next_range(100) < percent
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }

    fn chance_percent(&mut self, percent: u32) -> bool {
        (**self).chance_percent(percent)
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
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// `next_range` reduces each scripted value modulo `max`, so a script reads as
/// "pick index 3, then roll 95": `ScriptedRng::new(vec![3, 95])`.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: Vec<u32>) -> Self {
        Self { values, pos: 0 }
    }

    /// Number of values drawn so far
    pub fn draws(&self) -> usize {
        self.pos
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let value = self.values[self.pos % self.values.len()];
        self.pos += 1;
        value
    }

    fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}
