//! Seed expansion and the injectable sources that feed it.

use chrono::{DateTime, Utc};

const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;
const MIX_MULTIPLIER_A: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_MULTIPLIER_B: u64 = 0x94d0_49bb_1331_11eb;

/// Runs one SplitMix64 round over `seed`, spreading low-entropy input across all bits.
#[must_use]
pub const fn expand_seed(seed: u64) -> u64 {
    let mut z = seed.wrapping_add(GOLDEN_GAMMA);
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MULTIPLIER_A);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MULTIPLIER_B);
    z ^ (z >> 31)
}

/// Packs ASCII text into a `u64`, eight bits per byte, keeping the trailing bytes.
#[must_use]
pub fn fold_timestamp(text: &str) -> u64 {
    text.bytes()
        .fold(0u64, |acc, byte| (acc << 8) | u64::from(byte))
}

/// Expands a wall-clock label such as `"12:34:56"` into a generator seed.
#[must_use]
pub fn seed_from_timestamp(text: &str) -> u64 {
    expand_seed(fold_timestamp(text))
}

/// Supplies the 64-bit seed a puzzle session is generated from.
pub trait SeedSource {
    /// Produces the seed for the next session.
    fn seed(&self) -> u64;
}

/// Seed source that always yields the same caller-chosen value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FixedSeed(u64);

impl FixedSeed {
    /// Wraps a fixed seed value.
    #[must_use]
    pub const fn new(seed: u64) -> Self {
        Self(seed)
    }
}

impl SeedSource for FixedSeed {
    fn seed(&self) -> u64 {
        self.0
    }
}

/// Seed source derived from the current UTC time of day.
///
/// The clock is rendered as `HH:MM:SS`, folded and expanded, so two sessions
/// started within the same second share a seed.
#[derive(Clone, Copy, Debug, Default)]
pub struct ClockSeed;

impl SeedSource for ClockSeed {
    fn seed(&self) -> u64 {
        seed_from_timestamp(&clock_label(Utc::now()))
    }
}

fn clock_label(now: DateTime<Utc>) -> String {
    now.format("%H:%M:%S").to_string()
}
