#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Core contracts shared across the terminal hacking engine.
//!
//! This crate defines the vocabulary that connects the pure generation
//! systems, the puzzle session and the adapters. Systems receive a
//! [`DifficultyTier`] and a player skill, derive a [`WordLength`] and a
//! [`WordCount`], and draw candidates through the [`WordTable`] lookup. Every
//! rejection surfaces as an [`EngineError`] at construction time so callers
//! never observe a partially built puzzle.

use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Shortest word length backed by a candidate table.
pub const MIN_WORD_LENGTH: u32 = 4;
/// Longest word length backed by a candidate table.
pub const MAX_WORD_LENGTH: u32 = 12;
/// Fewest candidate words a puzzle may present.
pub const MIN_WORD_COUNT: u32 = 5;
/// Most candidate words a puzzle may present.
pub const MAX_WORD_COUNT: u32 = 20;
/// Highest accepted player skill value.
pub const MAX_PLAYER_SKILL: u32 = 100;
/// Skill required per tier step; tier `n` requires `n * SKILL_PER_TIER`.
pub const SKILL_PER_TIER: u32 = 25;
/// Number of filler glyphs generated around the puzzle.
pub const NOISE_BUFFER_LEN: usize = 408;
/// Attempts granted to the player before the terminal locks.
pub const DEFAULT_ATTEMPTS: u32 = 4;
/// Upper bound on draws performed by the word sampler before giving up.
pub const DEFAULT_SAMPLING_DRAW_CAP: u32 = 10_000;

/// Glyphs used to pad the memory dump surrounding the candidate words.
pub const NOISE_PALETTE: [char; 16] = [
    '.', ',', '!', '?', '/', '*', '+', '\'', ':', ';', '-', '_', '%', '$', '|', '@',
];

/// Lock difficulty of a terminal, ordered from easiest to hardest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum DifficultyTier {
    /// Tier 0, open to every player.
    VeryEasy,
    /// Tier 1, requires 25 skill.
    Easy,
    /// Tier 2, requires 50 skill.
    Average,
    /// Tier 3, requires 75 skill.
    Hard,
    /// Tier 4, requires 100 skill.
    VeryHard,
}

impl DifficultyTier {
    /// Every tier in ascending order.
    pub const ALL: [DifficultyTier; 5] = [
        Self::VeryEasy,
        Self::Easy,
        Self::Average,
        Self::Hard,
        Self::VeryHard,
    ];

    /// Zero-based numeric index of the tier.
    #[must_use]
    pub const fn index(self) -> u32 {
        match self {
            Self::VeryEasy => 0,
            Self::Easy => 1,
            Self::Average => 2,
            Self::Hard => 3,
            Self::VeryHard => 4,
        }
    }

    /// Minimum player skill needed to attempt this tier.
    #[must_use]
    pub const fn minimum_skill(self) -> u32 {
        self.index() * SKILL_PER_TIER
    }

    /// Human readable label used in terminal output.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::VeryEasy => "Very Easy",
            Self::Easy => "Easy",
            Self::Average => "Average",
            Self::Hard => "Hard",
            Self::VeryHard => "Very Hard",
        }
    }
}

impl fmt::Display for DifficultyTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Number of characters in every candidate word of a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordLength(u32);

impl WordLength {
    /// Wraps a raw character count.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the character count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }

    /// Reports whether a canonical candidate table exists for this length.
    #[must_use]
    pub const fn is_supported(&self) -> bool {
        self.0 >= MIN_WORD_LENGTH && self.0 <= MAX_WORD_LENGTH
    }
}

impl fmt::Display for WordLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Number of distinct candidate words presented by a puzzle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WordCount(u32);

impl WordCount {
    /// Wraps a raw word count.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Retrieves the word count.
    #[must_use]
    pub const fn get(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for WordCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Keyed lookup of candidate words bucketed by length.
///
/// Implementations return every word of the requested length in a stable
/// order, or `None` when no table exists for it. The order matters: samplers
/// index into the returned slice with raw generator output.
pub trait WordTable {
    /// Candidate words whose length equals `length`.
    fn candidates(&self, length: WordLength) -> Option<&[&str]>;
}

/// Reasons a puzzle could not be constructed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum EngineError {
    /// The player skill lies outside `0..=100`.
    #[error("player skill {skill} is outside the accepted range 0..=100")]
    InvalidSkill {
        /// Rejected skill value.
        skill: u32,
    },
    /// The player skill is below the tier's minimum.
    #[error("player skill {skill} is not enough to hack a {tier} terminal (requires {required})")]
    InsufficientSkill {
        /// Skill supplied by the caller.
        skill: u32,
        /// Tier the caller attempted to open.
        tier: DifficultyTier,
        /// Minimum skill the tier demands.
        required: u32,
    },
    /// No candidate table exists for the derived word length.
    #[error("no candidate table exists for words of length {length}")]
    UnsupportedWordLength {
        /// Length that lacked a table.
        length: WordLength,
    },
    /// A table entry is not an uppercase ASCII word of the requested length.
    #[error("candidate #{position} of the length {length} table is not {length} uppercase letters")]
    MalformedCandidate {
        /// Length the table was asked for.
        length: WordLength,
        /// Offending entry's position in the table.
        position: u32,
    },
    /// Rejection sampling could not collect enough distinct words.
    #[error("word sampling gave up after {draws} draws with {collected} of {requested} words")]
    SamplingExhausted {
        /// Draws consumed before giving up.
        draws: u32,
        /// Distinct words collected so far.
        collected: u32,
        /// Distinct words requested.
        requested: u32,
    },
}

/// Reasons a guess could not be evaluated.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Error)]
pub enum GuessError {
    /// The guessed word is not one of the puzzle's candidates.
    #[error("'{0}' is not one of the candidate words")]
    UnknownWord(String),
    /// The session already granted access or locked the terminal.
    #[error("the terminal no longer accepts guesses")]
    SessionClosed,
}

#[cfg(test)]
mod tests {
    use super::{DifficultyTier, EngineError, GuessError, WordCount, WordLength};
    use serde::{de::DeserializeOwned, Serialize};

    fn assert_round_trip<T>(value: &T)
    where
        T: Serialize + DeserializeOwned + PartialEq + std::fmt::Debug,
    {
        let bytes = bincode::serialize(value).expect("serialize");
        let restored: T = bincode::deserialize(&bytes).expect("deserialize");
        assert_eq!(&restored, value);
    }

    #[test]
    fn tier_indices_follow_declaration_order() {
        for (expected, tier) in DifficultyTier::ALL.iter().enumerate() {
            assert_eq!(tier.index(), expected as u32);
        }
    }

    #[test]
    fn minimum_skill_scales_by_quarter() {
        assert_eq!(DifficultyTier::VeryEasy.minimum_skill(), 0);
        assert_eq!(DifficultyTier::Hard.minimum_skill(), 75);
        assert_eq!(DifficultyTier::VeryHard.minimum_skill(), 100);
    }

    #[test]
    fn supported_lengths_cover_four_through_twelve() {
        assert!(!WordLength::new(3).is_supported());
        assert!(WordLength::new(4).is_supported());
        assert!(WordLength::new(12).is_supported());
        assert!(!WordLength::new(13).is_supported());
    }

    #[test]
    fn insufficient_skill_message_names_requirement() {
        let error = EngineError::InsufficientSkill {
            skill: 10,
            tier: DifficultyTier::Hard,
            required: 75,
        };
        assert_eq!(
            error.to_string(),
            "player skill 10 is not enough to hack a Hard terminal (requires 75)"
        );
    }

    #[test]
    fn malformed_candidate_message_names_position() {
        let error = EngineError::MalformedCandidate {
            length: WordLength::new(4),
            position: 7,
        };
        assert_eq!(
            error.to_string(),
            "candidate #7 of the length 4 table is not 4 uppercase letters"
        );
    }

    #[test]
    fn tier_round_trips_through_bincode() {
        assert_round_trip(&DifficultyTier::Average);
    }

    #[test]
    fn word_metrics_round_trip_through_bincode() {
        assert_round_trip(&WordLength::new(9));
        assert_round_trip(&WordCount::new(14));
    }

    #[test]
    fn errors_round_trip_through_bincode() {
        assert_round_trip(&EngineError::SamplingExhausted {
            draws: 10_000,
            collected: 3,
            requested: 5,
        });
        assert_round_trip(&GuessError::UnknownWord("HELLO".to_owned()));
    }
}
