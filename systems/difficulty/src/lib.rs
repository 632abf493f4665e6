#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Pure difficulty model mapping a lock tier and player skill to puzzle size.
//!
//! Harder tiers produce longer words. Players whose skill comfortably exceeds
//! the tier's requirement face fewer candidates; players at the threshold face
//! the maximum.

use terminal_hack_core::{
    DifficultyTier, EngineError, WordCount, WordLength, MAX_PLAYER_SKILL, MAX_WORD_COUNT,
    MAX_WORD_LENGTH, MIN_WORD_COUNT, MIN_WORD_LENGTH,
};
use terminal_hack_system_rng::Xoroshiro128;

/// Word count used when the tier leaves no headroom above its requirement.
const SATURATED_WORD_COUNT: f64 = 0.5;

/// Size parameters derived for a single puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PuzzleParameters {
    length: WordLength,
    count: WordCount,
    length_draw: u64,
}

impl PuzzleParameters {
    /// Characters per candidate word.
    #[must_use]
    pub const fn length(&self) -> WordLength {
        self.length
    }

    /// Number of candidate words.
    #[must_use]
    pub const fn count(&self) -> WordCount {
        self.count
    }

    /// Raw generator output that selected the word length.
    #[must_use]
    pub const fn length_draw(&self) -> u64 {
        self.length_draw
    }
}

/// Derives word length and count, consuming exactly one draw from `rng`.
///
/// The length draw happens before validation, so a rejected request still
/// advances the generator.
pub fn derive_parameters(
    tier: DifficultyTier,
    player_skill: u32,
    rng: &mut Xoroshiro128,
) -> Result<PuzzleParameters, EngineError> {
    let length_draw = rng.next_u64();
    let length = word_length(tier, length_draw);
    log::debug!("length draw {length_draw} selected {length}-letter words for tier {tier}");

    let count = word_count(tier, player_skill)?;
    Ok(PuzzleParameters {
        length,
        count,
        length_draw,
    })
}

/// Word length for `tier`: two lengths per tier, the draw's low bit picks one.
#[must_use]
pub fn word_length(tier: DifficultyTier, draw: u64) -> WordLength {
    let bonus = u32::from(draw & 1 == 1);
    let length = MIN_WORD_LENGTH + 2 * tier.index() + bonus;
    WordLength::new(length.min(MAX_WORD_LENGTH))
}

/// Rejects skills outside `0..=100` or below the tier's minimum.
pub fn validate_skill(tier: DifficultyTier, player_skill: u32) -> Result<(), EngineError> {
    if player_skill > MAX_PLAYER_SKILL {
        return Err(EngineError::InvalidSkill { skill: player_skill });
    }

    let required = tier.minimum_skill();
    if player_skill < required {
        return Err(EngineError::InsufficientSkill {
            skill: player_skill,
            tier,
            required,
        });
    }

    Ok(())
}

/// Validates the skill, then computes how many candidates the puzzle presents.
pub fn word_count(tier: DifficultyTier, player_skill: u32) -> Result<WordCount, EngineError> {
    validate_skill(tier, player_skill)?;

    let raw = raw_word_count(tier, player_skill);
    let clamped = raw.clamp(MIN_WORD_COUNT as i32, MAX_WORD_COUNT as i32);
    Ok(WordCount::new(clamped as u32))
}

// Unclamped; out-of-range skills push this past 20 or below 5.
fn raw_word_count(tier: DifficultyTier, player_skill: u32) -> i32 {
    let spread = f64::from(MAX_WORD_COUNT - MIN_WORD_COUNT);
    let minimum = f64::from(MIN_WORD_COUNT);

    let lock_level = (f64::from(tier.index()) * 0.25 * 100.0) as i32;
    let science_offset = player_skill as i32 - lock_level;
    let lock_offset = 100 - lock_level;

    if lock_offset == 0 {
        return (SATURATED_WORD_COUNT * spread + minimum) as i32;
    }

    let ratio = f64::from(science_offset) / f64::from(lock_offset);
    ((1.0 - ratio) * spread + minimum) as i32
}
