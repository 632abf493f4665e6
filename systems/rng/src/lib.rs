#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Deterministic random number generation for puzzle construction.
//!
//! [`Xoroshiro128`] is the only source of randomness a session consumes.
//! Sessions own their generator outright; concurrent generation must
//! [`fork`](Xoroshiro128::fork) or seed a fresh instance instead of sharing
//! one. The generator is fast and reproducible, not cryptographically secure.

mod seed;

pub use seed::{
    expand_seed, fold_timestamp, seed_from_timestamp, ClockSeed, FixedSeed, SeedSource,
};

/// Two-word xoroshiro generator whose outputs drop the four highest bits.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Xoroshiro128 {
    state: [u64; 2],
}

impl Default for Xoroshiro128 {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl Xoroshiro128 {
    /// Creates a generator from explicit state words.
    #[must_use]
    pub const fn new(state0: u64, state1: u64) -> Self {
        Self {
            state: [state0, state1],
        }
    }

    /// Creates a generator whose second state word is the expanded `seed`.
    ///
    /// The first word stays zero, so any seed yields a non-zero state.
    #[must_use]
    pub const fn from_seed(seed: u64) -> Self {
        Self::new(0, expand_seed(seed))
    }

    /// Creates a generator seeded by the provided source.
    #[must_use]
    pub fn from_source(source: &impl SeedSource) -> Self {
        Self::from_seed(source.seed())
    }

    /// Current state words, mostly useful for diagnostics.
    #[must_use]
    pub const fn state(&self) -> [u64; 2] {
        self.state
    }

    /// Advances the generator and returns the next 60-bit value.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state[0];
        let mut s1 = self.state[1];
        let result = s0.wrapping_add(s1).rotate_left(17).wrapping_add(s0);

        s1 ^= s0;
        self.state[0] = s0.rotate_left(49) ^ s1 ^ (s1 << 21);
        self.state[1] = s1.rotate_left(28);

        result >> 4
    }

    /// Draws a value reduced modulo `bound`. Returns zero for a zero bound.
    pub fn next_below(&mut self, bound: u64) -> u64 {
        let value = self.next_u64();
        if bound == 0 {
            return 0;
        }
        value % bound
    }

    /// Splits off an independent generator seeded from two draws of `self`.
    #[must_use = "forking consumes two draws from the parent"]
    pub fn fork(&mut self) -> Self {
        let state0 = self.next_u64();
        let state1 = self.next_u64();
        Self::new(state0, state1)
    }
}

impl rand::RngCore for Xoroshiro128 {
    fn next_u32(&mut self) -> u32 {
        Xoroshiro128::next_u64(self) as u32
    }

    fn next_u64(&mut self) -> u64 {
        Xoroshiro128::next_u64(self)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(8) {
            let bytes = Xoroshiro128::next_u64(self).to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}
