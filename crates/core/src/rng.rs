//! RNG module - tile value generation
//!
//! Tile faces are drawn uniformly from `0..TILE_VALUE_RANGE` with no bag or
//! history, so a streak of equal values is possible and intended.
//!
//! The [`ValueProvider`] trait separates the draw from its source: sessions
//! normally run on a seeded LCG, while tests substitute a fixed sequence to
//! script exact board states.

use sumfall_types::TILE_VALUE_RANGE;

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
        self.next_u32() % max
    }
}

/// Source of face values for newly spawned tiles
///
/// Implementations must be infinite. `next_value` is consumed once per spawn
/// attempt, including attempts that fail because the spawn cell is occupied.
pub trait ValueProvider {
    /// Draw the next face value, in `0..TILE_VALUE_RANGE`
    fn next_value(&mut self) -> u8;
}

/// Seeded uniform draw over `0..TILE_VALUE_RANGE`
#[derive(Debug, Clone)]
pub struct RngValueProvider {
    rng: SimpleRng,
}

impl RngValueProvider {
    /// Create a provider with the given seed
    pub fn new(seed: u32) -> Self {
        Self {
            rng: SimpleRng::new(seed),
        }
    }
}

impl ValueProvider for RngValueProvider {
    fn next_value(&mut self) -> u8 {
        // The low LCG bits orbit with period 8, so reduce from the high half
        ((self.rng.next_u32() >> 16) % TILE_VALUE_RANGE as u32) as u8
    }
}

/// Fixed sequence of face values that repeats forever
///
/// The deterministic counterpart to [`RngValueProvider`], used by tests to
/// script exact board states.
#[derive(Debug, Clone)]
pub struct SequenceValueProvider {
    values: Vec<u8>,
    index: usize,
}

impl SequenceValueProvider {
    /// Create a provider that cycles through `values`
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<u8>) -> Self {
        assert!(!values.is_empty(), "value sequence must not be empty");
        Self { values, index: 0 }
    }
}

impl ValueProvider for SequenceValueProvider {
    fn next_value(&mut self) -> u8 {
        let value = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        value
    }
}
