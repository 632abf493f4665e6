#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Collision-free sampling of candidate words.
//!
//! The sampler draws indices into a length-keyed [`WordTable`] and keeps each
//! word the first time it appears, preserving draw order. Termination relies on
//! the table holding at least as many distinct words as requested; the draw cap
//! turns a corrupted table into [`EngineError::SamplingExhausted`] instead of a
//! stall.

mod tables;

use std::collections::HashSet;

use terminal_hack_core::{
    EngineError, WordCount, WordLength, WordTable, DEFAULT_SAMPLING_DRAW_CAP,
};
use terminal_hack_system_rng::Xoroshiro128;

pub use tables::TABLE_SIZE;

/// The built-in candidate tables covering lengths 4 through 12.
#[derive(Clone, Copy, Debug, Default)]
pub struct CanonicalWords;

impl WordTable for CanonicalWords {
    fn candidates(&self, length: WordLength) -> Option<&[&str]> {
        if !length.is_supported() {
            return None;
        }
        let table: &[&str] = match length.get() {
            4 => &tables::FOUR_LETTER,
            5 => &tables::FIVE_LETTER,
            6 => &tables::SIX_LETTER,
            7 => &tables::SEVEN_LETTER,
            8 => &tables::EIGHT_LETTER,
            9 => &tables::NINE_LETTER,
            10 => &tables::TEN_LETTER,
            11 => &tables::ELEVEN_LETTER,
            12 => &tables::TWELVE_LETTER,
            _ => return None,
        };
        Some(table)
    }
}

/// Configuration parameters required to construct the sampler.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Config {
    draw_cap: u32,
}

impl Config {
    /// Creates a configuration allowing at most `draw_cap` generator draws per sample.
    #[must_use]
    pub const fn new(draw_cap: u32) -> Self {
        Self { draw_cap }
    }

    /// Maximum number of draws a single sample may consume.
    #[must_use]
    pub const fn draw_cap(&self) -> u32 {
        self.draw_cap
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new(DEFAULT_SAMPLING_DRAW_CAP)
    }
}

/// Pure system that draws distinct candidate words by rejection sampling.
#[derive(Clone, Copy, Debug, Default)]
pub struct WordSampler {
    config: Config,
}

impl WordSampler {
    /// Creates a sampler using the supplied configuration.
    #[must_use]
    pub const fn new(config: Config) -> Self {
        Self { config }
    }

    /// Draws `count` distinct words of `length` from `table` in draw order.
    ///
    /// Each draw indexes the table with `rng.next_u64() % table.len()`; words
    /// already collected are discarded and the draw is spent. Every entry must
    /// be exactly `length` uppercase ASCII letters, otherwise the table is
    /// rejected before any draw.
    pub fn sample(
        &self,
        table: &impl WordTable,
        length: WordLength,
        count: WordCount,
        rng: &mut Xoroshiro128,
    ) -> Result<Vec<String>, EngineError> {
        let candidates = table
            .candidates(length)
            .filter(|candidates| !candidates.is_empty())
            .ok_or(EngineError::UnsupportedWordLength { length })?;

        if let Some(position) = candidates
            .iter()
            .position(|word| !is_well_formed(word, length))
        {
            log::warn!(
                "rejecting length {length} table: entry {position} is {:?}",
                candidates[position]
            );
            return Err(EngineError::MalformedCandidate {
                length,
                position: position as u32,
            });
        }

        let requested = count.get();
        let distinct = candidates.iter().collect::<HashSet<_>>().len();
        if (distinct as u64) < u64::from(requested) {
            return Err(EngineError::SamplingExhausted {
                draws: 0,
                collected: 0,
                requested,
            });
        }

        let modulus = candidates.len() as u64;
        let mut words: Vec<String> = Vec::with_capacity(requested as usize);
        let mut draws = 0;
        while words.len() < requested as usize {
            if draws == self.config.draw_cap {
                log::warn!(
                    "word sampling stopped after {draws} draws with {} of {requested} words",
                    words.len()
                );
                return Err(EngineError::SamplingExhausted {
                    draws,
                    collected: words.len() as u32,
                    requested,
                });
            }

            draws += 1;
            let candidate = candidates[rng.next_below(modulus) as usize];
            if !words.iter().any(|word| word == candidate) {
                words.push(candidate.to_owned());
            }
        }

        log::debug!("sampled {requested} {length}-letter words in {draws} draws");
        Ok(words)
    }
}

fn is_well_formed(word: &str, length: WordLength) -> bool {
    word.len() == length.get() as usize && word.bytes().all(|byte| byte.is_ascii_uppercase())
}
